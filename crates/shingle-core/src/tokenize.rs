//! Whitespace tokenization and optional punctuation stripping.

/// Options applied to raw text before it is split into tokens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Preprocess {
    /// Drop every character that is neither a word character nor whitespace.
    pub remove_punctuation: bool,
}

impl Preprocess {
    pub fn new(remove_punctuation: bool) -> Self {
        Self { remove_punctuation }
    }

    /// Apply the configured preprocessing and tokenize the result.
    pub fn tokens(&self, text: &str) -> Vec<String> {
        if self.remove_punctuation {
            tokenize(&strip_punctuation(text))
                .into_iter()
                .map(str::to_string)
                .collect()
        } else {
            tokenize(text).into_iter().map(str::to_string).collect()
        }
    }
}

/// Split text on Unicode whitespace. Runs of whitespace never yield empty tokens.
pub fn tokenize(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Remove characters that are not alphanumeric, `_`, or whitespace.
pub fn strip_punctuation(text: &str) -> String {
    text.chars()
        .filter(|c| is_word_char(*c) || c.is_whitespace())
        .collect()
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
