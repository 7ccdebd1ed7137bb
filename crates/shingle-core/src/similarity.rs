// Jaccard similarity between two shingle sets:
//
//   |A ∩ B| / |A ∪ B|
//
// Two empty sets score 1.0: there is nothing that differs between them.

use std::collections::HashSet;
use std::hash::{BuildHasher, Hash};

/// Return `(|A ∩ B|, |A ∪ B|)`.
pub fn overlap<T, H>(a: &HashSet<T, H>, b: &HashSet<T, H>) -> (usize, usize)
where
    T: Eq + Hash,
    H: BuildHasher,
{
    // Iterate the smaller set for the intersection count.
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let shared = small.iter().filter(|item| large.contains(*item)).count();
    (shared, a.len() + b.len() - shared)
}

/// Jaccard coefficient in `[0, 1]`. Two empty sets return `1.0`.
pub fn jaccard<T, H>(a: &HashSet<T, H>, b: &HashSet<T, H>) -> f64
where
    T: Eq + Hash,
    H: BuildHasher,
{
    let (shared, union) = overlap(a, b);
    if union == 0 {
        return 1.0;
    }
    shared as f64 / union as f64
}
