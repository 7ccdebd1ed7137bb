//! Reading documents from disk or stdin and running file comparisons.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use shingle_core::{compare_texts, Comparison, Preprocess};

/// Read a whole document as UTF-8.
pub fn read_document(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}

pub fn read_stdin() -> Result<String> {
    let mut buf = String::new();
    std::io::stdin()
        .read_to_string(&mut buf)
        .context("failed to read stdin")?;
    Ok(buf)
}

/// Compare two files by the Jaccard similarity of their k-shingles.
pub fn compare_files(
    query: &Path,
    target: &Path,
    k: usize,
    preprocess: &Preprocess,
) -> Result<Comparison> {
    let query_text = read_document(query)?;
    let target_text = read_document(target)?;
    tracing::debug!(
        query = %query.display(),
        target = %target.display(),
        query_bytes = query_text.len(),
        target_bytes = target_text.len(),
        k,
        "comparing files"
    );

    let cmp = compare_texts(&query_text, &target_text, k, preprocess).with_context(|| {
        format!(
            "comparing {} with {}",
            query.display(),
            target.display()
        )
    })?;
    tracing::debug!(
        shared = cmp.shared,
        union = cmp.union,
        similarity = cmp.similarity,
        "comparison done"
    );
    Ok(cmp)
}

/// Similarity as printed by `shingle compare`.
pub fn format_similarity(similarity: f64) -> String {
    format!("{similarity:.4}")
}
