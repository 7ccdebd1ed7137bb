use serde::{Deserialize, Serialize};

use crate::error::{ShingleError, ShingleResult};
use crate::shingle::shingle_set;
use crate::similarity::{jaccard, overlap};
use crate::tokenize::Preprocess;

/// Outcome of comparing two documents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    pub k: usize,
    /// Distinct shingles in the query document.
    pub query_shingles: usize,
    /// Distinct shingles in the target document.
    pub target_shingles: usize,
    pub shared: usize,
    pub union: usize,
    pub similarity: f64,
}

/// Compare two texts by the Jaccard similarity of their k-shingle sets.
///
/// Fails if either text has no tokens after preprocessing, or if `k` is
/// out of range for either token sequence.
pub fn compare_texts(
    query: &str,
    target: &str,
    k: usize,
    preprocess: &Preprocess,
) -> ShingleResult<Comparison> {
    let query_tokens = preprocess.tokens(query);
    let target_tokens = preprocess.tokens(target);

    if query_tokens.is_empty() || target_tokens.is_empty() {
        return Err(ShingleError::invalid(
            "one or both inputs have no valid tokens for comparison",
        ));
    }

    let a = shingle_set(&query_tokens, k)?;
    let b = shingle_set(&target_tokens, k)?;
    let (shared, union) = overlap(&a, &b);
    let similarity = jaccard(&a, &b);

    Ok(Comparison {
        k,
        query_shingles: a.len(),
        target_shingles: b.len(),
        shared,
        union,
        similarity,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_texts() {
        let text = "the quick brown fox jumps";
        let cmp = compare_texts(text, text, 2, &Preprocess::default()).unwrap();
        assert_eq!(cmp.similarity, 1.0);
        assert_eq!(cmp.query_shingles, 4);
        assert_eq!(cmp.shared, 4);
    }

    #[test]
    fn test_partial_overlap() {
        // {a b, b c} vs {a b, b d}
        let cmp = compare_texts("a b c", "a b d", 2, &Preprocess::default()).unwrap();
        assert_eq!(cmp.shared, 1);
        assert_eq!(cmp.union, 3);
        assert!((cmp.similarity - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_punctuation_removal() {
        let plain = Preprocess::default();
        let stripped = Preprocess::new(true);
        let a = "Hello, world! How are you?";
        let b = "Hello world How are you";

        let cmp = compare_texts(a, b, 2, &plain).unwrap();
        assert!(cmp.similarity < 1.0);

        let cmp = compare_texts(a, b, 2, &stripped).unwrap();
        assert_eq!(cmp.similarity, 1.0);
    }

    #[test]
    fn test_empty_input_rejected() {
        let err = compare_texts("", "some words", 1, &Preprocess::default()).unwrap_err();
        assert!(err.to_string().contains("no valid tokens"));
    }

    #[test]
    fn test_punctuation_only_input_rejected() {
        assert!(compare_texts("?! ...", "words here", 1, &Preprocess::new(true)).is_err());
    }

    #[test]
    fn test_width_too_large_for_one_side() {
        let err = compare_texts("a b c d", "a b", 3, &Preprocess::default()).unwrap_err();
        assert!(matches!(err, ShingleError::InvalidArgument(_)));
    }

    #[test]
    fn test_symmetric() {
        let p = Preprocess::default();
        let x = compare_texts("one two three four", "two three four five six", 2, &p).unwrap();
        let y = compare_texts("two three four five six", "one two three four", 2, &p).unwrap();
        assert_eq!(x.similarity, y.similarity);
    }

    #[test]
    fn test_serializes_to_json() {
        let cmp = compare_texts("a b c", "a b d", 1, &Preprocess::default()).unwrap();
        let json = serde_json::to_value(&cmp).unwrap();
        assert_eq!(json["k"], 1);
        assert_eq!(json["shared"], 2);
        assert_eq!(json["similarity"], 0.5);
    }
}
