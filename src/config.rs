use crate::edit_distance::DistanceAlgorithm;
use crate::error::{Result, SymSpellError};

pub const DEFAULT_MAX_EDIT_DISTANCE: usize = 2;
pub const DEFAULT_PREFIX_LENGTH: usize = 7;
pub const DEFAULT_COUNT_THRESHOLD: i64 = 1;
pub const DEFAULT_INITIAL_CAPACITY: usize = 82_765;
pub const DEFAULT_COMPACT_LEVEL: u8 = 5;
pub const MAX_COMPACT_LEVEL: u8 = 16;

/// Number of all words in the corpus used to generate the frequency dictionary.
/// This is used to calculate the word occurrence probability p from word counts c : p=c/N
/// N equals the sum of all counts c in the dictionary only if the dictionary is complete,
/// but not if the dictionary is truncated or filtered.
pub const DEFAULT_CORPUS_WORD_COUNT: i64 = 1_024_908_267_229;

/// Construction parameters of a [`SymSpell`](crate::SymSpell) instance.
#[derive(Debug, Clone, PartialEq)]
pub struct SymSpellConfig {
    /// Maximum edit distance for dictionary precalculation.
    pub max_dictionary_edit_distance: usize,
    /// The length of word prefixes, from which deletes are generated. (5..7).
    pub prefix_length: usize,
    /// The minimum frequency count for dictionary words to be considered correct spellings.
    pub count_threshold: i64,
    /// The expected number of words in the dictionary.
    pub initial_capacity: usize,
    /// Degree of favoring lower memory use over speed (0=fastest,most memory, 16=slowest,least memory).
    pub compact_level: u8,
    /// Edit distance used to verify candidates.
    pub distance_algorithm: DistanceAlgorithm,
    /// Corpus size N used to turn counts into probabilities.
    pub corpus_word_count: i64,
}

impl Default for SymSpellConfig {
    fn default() -> Self {
        Self {
            max_dictionary_edit_distance: DEFAULT_MAX_EDIT_DISTANCE,
            prefix_length: DEFAULT_PREFIX_LENGTH,
            count_threshold: DEFAULT_COUNT_THRESHOLD,
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
            compact_level: DEFAULT_COMPACT_LEVEL,
            distance_algorithm: DistanceAlgorithm::default(),
            corpus_word_count: DEFAULT_CORPUS_WORD_COUNT,
        }
    }
}

impl SymSpellConfig {
    pub fn validate(&self) -> Result<()> {
        if self.prefix_length < 1 || self.prefix_length <= self.max_dictionary_edit_distance {
            return Err(SymSpellError::InvalidPrefixLength {
                prefix_length: self.prefix_length,
                max_dictionary_edit_distance: self.max_dictionary_edit_distance,
            });
        }
        if self.count_threshold < 0 {
            return Err(SymSpellError::NegativeCountThreshold(self.count_threshold));
        }
        if self.compact_level > MAX_COMPACT_LEVEL {
            return Err(SymSpellError::InvalidCompactLevel(self.compact_level));
        }
        if self.corpus_word_count <= 0 {
            return Err(SymSpellError::InvalidCorpusWordCount(self.corpus_word_count));
        }
        Ok(())
    }

    /// Hash mask derived from the compact level; the low 2 bits stay free for the length class.
    pub fn compact_mask(&self) -> u32 {
        (u32::MAX >> (3 + self.compact_level.min(MAX_COMPACT_LEVEL))) << 2
    }
}
