//! Group shingles by how often they occur.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{ShingleError, ShingleResult};

/// All distinct shingles that occur exactly `count` times.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyGroup {
    pub count: usize,
    /// In order of first occurrence.
    pub shingles: Vec<String>,
}

/// Count each distinct shingle and group them by count, highest first.
pub fn group_by_frequency<S: AsRef<str>>(shingles: &[S]) -> Vec<FrequencyGroup> {
    let mut order: Vec<&str> = Vec::new();
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for s in shingles {
        let s = s.as_ref();
        let c = counts.entry(s).or_insert(0);
        if *c == 0 {
            order.push(s);
        }
        *c += 1;
    }

    let mut groups: Vec<FrequencyGroup> = Vec::new();
    let mut index: HashMap<usize, usize> = HashMap::new();
    for s in order {
        let count = counts[s];
        let slot = *index.entry(count).or_insert_with(|| {
            groups.push(FrequencyGroup {
                count,
                shingles: Vec::new(),
            });
            groups.len() - 1
        });
        groups[slot].shingles.push(s.to_string());
    }

    groups.sort_by(|a, b| b.count.cmp(&a.count));
    groups
}

/// The `n` highest-frequency groups.
pub fn most_common<S: AsRef<str>>(shingles: &[S], n: usize) -> ShingleResult<Vec<FrequencyGroup>> {
    if n == 0 {
        return Err(ShingleError::invalid(
            "number of frequency groups must be positive",
        ));
    }
    let mut groups = group_by_frequency(shingles);
    groups.truncate(n);
    Ok(groups)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shingle::shingles_from_text;

    #[test]
    fn test_groups_sorted_by_count() {
        let items = ["a", "b", "a", "c", "a", "b"];
        let groups = group_by_frequency(&items);
        assert_eq!(groups.len(), 3);
        assert_eq!(groups[0], FrequencyGroup { count: 3, shingles: vec!["a".into()] });
        assert_eq!(groups[1].count, 2);
        assert_eq!(groups[2].shingles, vec!["c".to_string()]);
    }

    #[test]
    fn test_ties_keep_first_occurrence_order() {
        let items = ["z", "y", "x", "y", "z", "x"];
        let groups = group_by_frequency(&items);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].shingles, vec!["z", "y", "x"]);
    }

    #[test]
    fn test_empty_input() {
        let empty: [&str; 0] = [];
        assert!(group_by_frequency(&empty).is_empty());
    }

    #[test]
    fn test_most_common_from_text() {
        let shingles =
            shingles_from_text("this is a test this is only a test", 2).unwrap();
        let top = most_common(&shingles, 1).unwrap();
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].count, 2);
        assert_eq!(top[0].shingles, vec!["this is", "a test"]);
    }

    #[test]
    fn test_most_common_zero_rejected() {
        assert!(most_common(&["a"], 0).is_err());
    }

    #[test]
    fn test_most_common_more_than_available() {
        let top = most_common(&["a", "b", "a"], 10).unwrap();
        assert_eq!(top.len(), 2);
    }
}
