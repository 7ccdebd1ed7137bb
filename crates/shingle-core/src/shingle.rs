//! k-shingle (k-gram) extraction over a token sequence.

use std::collections::HashSet;

use crate::error::{ShingleError, ShingleResult};
use crate::tokenize::tokenize;

/// Unique shingles of a document. Order and multiplicity are discarded.
pub type ShingleSet = HashSet<String>;

/// Produce the `n - k + 1` overlapping windows of `k` tokens, joined by a
/// single space, in token order.
pub fn shingles<S: AsRef<str>>(tokens: &[S], k: usize) -> ShingleResult<Vec<String>> {
    let n = tokens.len();
    if n == 0 {
        return Err(ShingleError::invalid("token sequence must not be empty"));
    }
    if k == 0 {
        return Err(ShingleError::invalid("shingle width k must be greater than 0"));
    }
    if k > n {
        return Err(ShingleError::invalid(format!(
            "shingle width k={k} exceeds the number of tokens ({n})"
        )));
    }

    Ok(tokens
        .windows(k)
        .map(|window| {
            window
                .iter()
                .map(|t| t.as_ref())
                .collect::<Vec<&str>>()
                .join(" ")
        })
        .collect())
}

/// Tokenize `text` on whitespace and extract its shingles.
pub fn shingles_from_text(text: &str, k: usize) -> ShingleResult<Vec<String>> {
    let tokens = tokenize(text);
    if tokens.is_empty() {
        return Err(ShingleError::invalid("text must contain at least one token"));
    }
    shingles(&tokens, k)
}

/// Extract shingles and collect them into a set.
pub fn shingle_set<S: AsRef<str>>(tokens: &[S], k: usize) -> ShingleResult<ShingleSet> {
    Ok(shingles(tokens, k)?.into_iter().collect())
}
