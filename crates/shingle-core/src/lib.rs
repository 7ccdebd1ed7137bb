pub mod compare;
pub mod error;
pub mod frequency;
pub mod shingle;
pub mod similarity;
pub mod tokenize;

pub use compare::{compare_texts, Comparison};
pub use error::{ShingleError, ShingleResult};
pub use frequency::{group_by_frequency, most_common, FrequencyGroup};
pub use shingle::{shingle_set, shingles, shingles_from_text, ShingleSet};
pub use similarity::{jaccard, overlap};
pub use tokenize::{strip_punctuation, tokenize, Preprocess};
