/*!

Spelling correction & Fuzzy search based on Symmetric Delete spelling correction algorithm.

#### Usage of SymSpell Library

```rust
use symspell_engine::{SymSpell, Verbosity};

let max_edit_distance_dictionary = 2; //maximum edit distance per dictionary precalculation
let mut symspell = SymSpell::new(max_edit_distance_dictionary, 7, 1).unwrap();

let term_index = 0; //column of the term in the dictionary text file
let count_index = 1; //column of the term frequency in the dictionary text file

// single term dictionary
symspell.load_dictionary("data/frequency_dictionary_sample.txt", term_index, count_index, " ").unwrap();

//lookup suggestions for single-word input strings
let input_term = "hous";
let suggestion_verbosity = Verbosity::Closest; //Top, Closest, All
let max_edit_distance_lookup = 1; //max edit distance per lookup (max_edit_distance_lookup<=max_edit_distance_dictionary)
let suggestions = symspell
    .lookup(input_term, suggestion_verbosity, max_edit_distance_lookup, false, false)
    .unwrap();
//display suggestions, edit distance and term frequency
println!("{:?}", suggestions);

// bigram dictionary
symspell.load_bigram_dictionary("data/frequency_bigram_sample.txt", 0, 2, " ").unwrap();

//lookup suggestions for multi-word input strings (supports compound splitting & merging)
let input_sentence = "whereis th elove hehad dated formuch of thepast who couqdn'tread in sixtgrade and ins pired him";
let max_edit_distance_lookup = 2; //max edit distance per lookup (per single word, not per whole input string)
let compound_suggestions = symspell.lookup_compound(input_sentence, max_edit_distance_lookup, false).unwrap();
//display suggestions, edit distance and term frequency
println!("{:?}", compound_suggestions);

//word segmentation and correction for multi-word input strings with/without spaces
let input_sentence = "thequickbrownfoxjumpsoverthelazydog";
let max_edit_distance_lookup = 0;
let result = symspell.word_segmentation(input_sentence, max_edit_distance_lookup, None).unwrap();
//display term and edit distance
println!("{:?}", result.corrected_string);
```

*/

mod compound;
mod config;
mod edit_distance;
mod error;
mod helpers;
mod loader;
mod segmentation;
mod suggestion_stage;
mod symspell;
mod test;

pub use config::{
    DEFAULT_COMPACT_LEVEL, DEFAULT_CORPUS_WORD_COUNT, DEFAULT_COUNT_THRESHOLD,
    DEFAULT_INITIAL_CAPACITY, DEFAULT_MAX_EDIT_DISTANCE, DEFAULT_PREFIX_LENGTH, MAX_COMPACT_LEVEL,
    SymSpellConfig,
};
pub use edit_distance::{DistanceAlgorithm, EditDistance};
pub use error::{Result, SymSpellError};
pub use helpers::{
    parse_words, transfer_casing, transfer_casing_for_matching_text,
    transfer_casing_for_similar_text, unicode_normalization_form_kc,
};
pub use loader::DEFAULT_SEPARATOR;
pub use segmentation::Composition;
pub use suggestion_stage::SuggestionStage;
pub use symspell::{Snapshot, Suggestion, SymSpell, Verbosity};
