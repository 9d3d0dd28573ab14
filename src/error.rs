use std::io;

/// Error type for engine construction, lookups and dictionary loading.
#[derive(Debug, thiserror::Error)]
pub enum SymSpellError {
    #[error(
        "invalid prefix length {prefix_length}: must be at least 1 and greater than the max dictionary edit distance {max_dictionary_edit_distance}"
    )]
    InvalidPrefixLength {
        prefix_length: usize,
        max_dictionary_edit_distance: usize,
    },
    #[error("count threshold cannot be negative, got {0}")]
    NegativeCountThreshold(i64),
    #[error("compact level must be in 0..=16, got {0}")]
    InvalidCompactLevel(u8),
    #[error("corpus word count must be positive, got {0}")]
    InvalidCorpusWordCount(i64),
    #[error("max edit distance {requested} is too large: dictionary was built for {max}")]
    EditDistanceTooLarge { requested: usize, max: usize },
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, SymSpellError>;
