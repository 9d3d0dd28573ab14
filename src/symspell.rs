// SymSpell: 1 million times faster through Symmetric Delete spelling correction algorithm
//
// The Symmetric Delete spelling correction algorithm reduces the complexity of edit candidate generation and dictionary lookup
// for a given Damerau-Levenshtein distance. It is six orders of magnitude faster and language independent.
// Opposite to other algorithms only deletes are required, no transposes + replaces + inserts.
// Transposes + replaces + inserts of the input term are transformed into deletes of the dictionary term.
// Replaces and inserts are expensive and language dependent: e.g. Chinese has 70,000 Unicode Han characters!

use ahash::{AHashMap, AHashSet};
use smallvec::SmallVec;
use std::cmp::{self, Ordering};
use std::mem;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::config::SymSpellConfig;
use crate::edit_distance::{DistanceAlgorithm, EditDistance};
use crate::error::{Result, SymSpellError};
use crate::helpers::{len, remove, slice, string_hash, transfer_casing as apply_casing};
use crate::suggestion_stage::SuggestionStage;

const VEC_SIZE: usize = 16;
pub(crate) type FastVec<T> = SmallVec<[T; VEC_SIZE]>;

/// Suggested correct spelling for a given input word.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Suggestion {
    /// The suggested correctly spelled word.
    pub term: String,
    /// Edit distance between searched for word and suggestion.
    pub distance: usize,
    /// Frequency of suggestion in the dictionary (a measure of how common the word is).
    pub count: i64,
}

impl Suggestion {
    pub fn new(term: impl Into<String>, distance: usize, count: i64) -> Suggestion {
        Suggestion {
            term: term.into(),
            distance,
            count,
        }
    }
}

// Order by distance ascending, then by frequency count descending, then by term
impl Ord for Suggestion {
    fn cmp(&self, other: &Suggestion) -> Ordering {
        self.distance
            .cmp(&other.distance)
            .then_with(|| other.count.cmp(&self.count))
            .then_with(|| self.term.cmp(&other.term))
    }
}

impl PartialOrd for Suggestion {
    fn partial_cmp(&self, other: &Suggestion) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Controls the closeness/quantity of returned spelling suggestions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Verbosity {
    /// Top suggestion with the highest term frequency of the suggestions of smallest edit distance found.
    Top,
    /// All suggestions of smallest edit distance found, suggestions ordered by term frequency.
    Closest,
    /// All suggestions within maxEditDistance, suggestions ordered by edit distance, then by term frequency (slower, no early termination)
    All,
}

/// The persisted part of a dictionary: delete index, word table and longest word length.
/// Below threshold words and bigrams are not part of it.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Snapshot {
    pub deletes: AHashMap<u32, Vec<Box<str>>>,
    pub words: AHashMap<Box<str>, i64>,
    pub max_dictionary_word_length: usize,
}

/// SymSpell spell checker and corrector.
///
/// Dictionary construction needs exclusive access (`&mut self`), all lookups take `&self`
/// and can run concurrently once loading has finished.
#[derive(Debug, Clone)]
pub struct SymSpell {
    /// Maximum edit distance for dictionary precalculation.
    pub(crate) max_dictionary_edit_distance: usize,
    /// The length of word prefixes, from which deletes are generated. (5..7).
    pub(crate) prefix_length: usize,
    /// The minimum frequency count for dictionary words to be considered a valid for spelling correction.
    pub(crate) count_threshold: i64,
    pub(crate) compact_mask: u32,
    pub(crate) distance_algorithm: DistanceAlgorithm,
    /// Number of all words in the corpus used to generate the frequency dictionary
    /// this is used to calculate the word occurrence probability p from word counts c : p=c/N
    pub(crate) corpus_word_count: i64,
    /// Length of the longest word in the dictionary.
    pub(crate) max_dictionary_word_length: usize,
    /// Dictionary that contains a mapping of lists of suggested correction words to the hashCodes
    /// of the original words and the deletes derived from them. Collisions of hashCodes is tolerated,
    /// because suggestions are ultimately verified via an edit distance function.
    /// A list of suggestions might have a single suggestion, or multiple suggestions.
    pub(crate) deletes: AHashMap<u32, Vec<Box<str>>>,
    /// Dictionary of unique correct spelling words, and the frequency count for each word.
    pub(crate) words: AHashMap<Box<str>, i64>,
    /// Words whose accumulated count has not reached the count threshold yet.
    pub(crate) below_threshold_words: AHashMap<Box<str>, i64>,
    /// Bigrams optionally used for improved correction quality in lookup_compound
    pub(crate) bigrams: AHashMap<Box<str>, i64>,
    /// Minimum bigram count in the bigram dictionary
    pub(crate) bigram_count_min: i64,
}

impl Default for SymSpell {
    fn default() -> Self {
        Self::from_config(&SymSpellConfig::default())
    }
}

impl SymSpell {
    /// Creates a new SymSpell instance.
    ///
    /// # Arguments
    ///
    /// * `max_dictionary_edit_distance` - Maximum edit distance for dictionary precalculation.
    /// * `prefix_length` - The length of word prefixes, from which deletes are generated. (5..7).
    /// * `count_threshold` - The minimum frequency count for dictionary words to be considered a valid for spelling correction.
    ///
    /// Fails if `prefix_length` is not greater than `max_dictionary_edit_distance`, or `count_threshold` is negative.
    pub fn new(
        max_dictionary_edit_distance: usize,
        prefix_length: usize,
        count_threshold: i64,
    ) -> Result<Self> {
        Self::with_config(SymSpellConfig {
            max_dictionary_edit_distance,
            prefix_length,
            count_threshold,
            ..Default::default()
        })
    }

    /// Creates a new SymSpell instance from a full configuration.
    pub fn with_config(config: SymSpellConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_config(&config))
    }

    fn from_config(config: &SymSpellConfig) -> Self {
        Self {
            max_dictionary_edit_distance: config.max_dictionary_edit_distance,
            prefix_length: config.prefix_length,
            count_threshold: config.count_threshold,
            compact_mask: config.compact_mask(),
            distance_algorithm: config.distance_algorithm,
            corpus_word_count: config.corpus_word_count,
            max_dictionary_word_length: 0,
            deletes: AHashMap::new(),
            words: AHashMap::with_capacity(config.initial_capacity),
            below_threshold_words: AHashMap::new(),
            bigrams: AHashMap::new(),
            bigram_count_min: i64::MAX,
        }
    }

    pub fn max_dictionary_edit_distance(&self) -> usize {
        self.max_dictionary_edit_distance
    }

    pub fn prefix_length(&self) -> usize {
        self.prefix_length
    }

    /// Length of the longest word in the dictionary.
    pub fn max_length(&self) -> usize {
        self.max_dictionary_word_length
    }

    pub fn count_threshold(&self) -> i64 {
        self.count_threshold
    }

    /// Number of words in the dictionary that are valid suggestions.
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Number of delete hashes in the delete index.
    pub fn entry_count(&self) -> usize {
        self.deletes.len()
    }

    pub fn below_threshold_count(&self) -> usize {
        self.below_threshold_words.len()
    }

    pub fn bigram_count(&self) -> usize {
        self.bigrams.len()
    }

    pub fn corpus_word_count(&self) -> i64 {
        self.corpus_word_count
    }

    pub fn distance_algorithm(&self) -> DistanceAlgorithm {
        self.distance_algorithm
    }

    /// Frequency count of a dictionary word, None if it is not (yet) a valid suggestion.
    pub fn word_frequency(&self, word: &str) -> Option<i64> {
        self.words.get(word).copied()
    }

    #[inline]
    pub(crate) fn delete_hash(&self, delete: &str) -> u32 {
        string_hash(delete, self.compact_mask)
    }

    /// Create/Update an entry in the dictionary
    /// For every word there are deletes with an edit distance of 1..maxEditDistance created and added to the
    /// dictionary. Every delete entry has a suggestions list, which points to the original term(s) it was created from.
    /// The dictionary may be dynamically updated (word frequency and new words) at any time by calling create_dictionary_entry
    ///
    /// # Arguments
    ///
    /// * `key` - The word to add to dictionary.
    /// * `count` - The frequency count for word.
    /// * `staging` - Optional staging buffer, the deletes only become visible after [`SymSpell::commit_staged`].
    ///
    /// Returns true if the word was added as a new correctly spelled word,
    /// or false if the word is added as a below threshold word, or updates an existing correctly spelled word.
    pub fn create_dictionary_entry(
        &mut self,
        key: &str,
        count: i64,
        staging: Option<&mut SuggestionStage>,
    ) -> bool {
        let mut count = count;
        if count <= 0 {
            // no point doing anything if count is zero, as it can't change anything
            if self.count_threshold > 0 {
                return false;
            }
            count = 0;
        }

        // look first in below threshold words, update count, and allow promotion to correct spelling word if count reaches threshold
        if let Some(&count_previous) = self.below_threshold_words.get(key) {
            count = count_previous.saturating_add(count);
            if count >= self.count_threshold {
                self.below_threshold_words.remove(key);
            } else {
                self.below_threshold_words.insert(key.into(), count);
                return false;
            }
        } else if let Some(count_previous) = self.words.get_mut(key) {
            // just update count if it's an already added above threshold word
            *count_previous = count_previous.saturating_add(count);
            return false;
        } else if count < self.count_threshold {
            // new below threshold word
            self.below_threshold_words.insert(key.into(), count);
            return false;
        }

        // what we have at this point is a new, above threshold word
        self.words.insert(key.into(), count);

        let key_len = len(key);
        if key_len > self.max_dictionary_word_length {
            self.max_dictionary_word_length = key_len;
        }

        let edits = self.edits_prefix(key);
        match staging {
            Some(staging) => {
                for delete in edits {
                    staging.add(self.delete_hash(&delete), key);
                }
            }
            None => {
                for delete in edits {
                    let delete_hash = self.delete_hash(&delete);
                    self.deletes.entry(delete_hash).or_default().push(key.into());
                }
            }
        }
        true
    }

    /// Remove a word from the dictionary, together with its entries in the delete index.
    /// Returns false if the word was not in the dictionary.
    pub fn delete_dictionary_entry(&mut self, key: &str) -> bool {
        if self.words.remove(key).is_none() {
            return false;
        }

        if len(key) == self.max_dictionary_word_length {
            self.max_dictionary_word_length = self
                .words
                .keys()
                .map(|word| len(word))
                .max()
                .unwrap_or(0);
        }

        for delete in self.edits_prefix(key) {
            let delete_hash = self.delete_hash(&delete);
            if let Some(suggestions) = self.deletes.get_mut(&delete_hash) {
                suggestions.retain(|suggestion| suggestion.as_ref() != key);
                if suggestions.is_empty() {
                    self.deletes.remove(&delete_hash);
                }
            }
        }
        true
    }

    /// Remove all below threshold words from the dictionary.
    pub fn purge_below_threshold_words(&mut self) {
        self.below_threshold_words.clear();
    }

    /// Merge the deletes of a staging buffer into the permanent delete index.
    pub fn commit_staged(&mut self, staging: &mut SuggestionStage) {
        staging.commit_to(&mut self.deletes);
    }

    /// Copy of the delete index, word table and longest word length.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            deletes: self.deletes.clone(),
            words: self.words.clone(),
            max_dictionary_word_length: self.max_dictionary_word_length,
        }
    }

    /// Replace the delete index, word table and longest word length with those of `snapshot`.
    /// The snapshot must have been taken from an instance with the same edit distance, prefix length and compact level.
    pub fn restore(&mut self, snapshot: Snapshot) {
        self.deletes = snapshot.deletes;
        self.words = snapshot.words;
        self.max_dictionary_word_length = snapshot.max_dictionary_word_length;
    }

    // inexpensive and language independent: only deletes, no transposes + replaces + inserts
    // replaces and inserts are expensive and language dependent (Chinese has 70,000 Unicode Han characters)
    fn edits(&self, word: &str, delete_words: &mut AHashSet<String>) {
        let mut pending: Vec<(String, usize)> = vec![(word.to_string(), 0)];
        while let Some((word, edit_distance)) = pending.pop() {
            let edit_distance = edit_distance + 1;
            let word_len = len(&word);
            if word_len <= 1 {
                continue;
            }
            for i in 0..word_len {
                let delete = remove(&word, i);
                if delete_words.insert(delete.clone())
                    && edit_distance < self.max_dictionary_edit_distance
                {
                    pending.push((delete, edit_distance));
                }
            }
        }
    }

    pub(crate) fn edits_prefix(&self, key: &str) -> AHashSet<String> {
        let mut hash_set = AHashSet::new();

        let key_len = len(key);
        if key_len <= self.max_dictionary_edit_distance {
            hash_set.insert(String::new());
        }

        let key = if key_len > self.prefix_length {
            slice(key, 0, self.prefix_length)
        } else {
            key
        };
        hash_set.insert(key.to_string());
        self.edits(key, &mut hash_set);

        hash_set
    }

    /// Find suggested spellings for a given input word.
    /// Returned suggestions are sorted by distance ascending, then by frequency count descending.
    ///
    /// # Arguments
    ///
    /// * `input` - The word being spell checked.
    /// * `verbosity` - The value controlling the quantity/closeness of the retuned suggestions.
    /// * `max_edit_distance` - The maximum edit distance between input and suggested words,
    ///   must not exceed the max dictionary edit distance.
    /// * `include_unknown` - Return the input with distance max_edit_distance+1 and count 0 if nothing was found.
    /// * `transfer_casing` - Lookup the lowercased input and apply its letter case to the suggestions.
    ///
    /// # Examples
    ///
    /// ```
    /// use symspell_engine::{SymSpell, Verbosity};
    ///
    /// let mut symspell = SymSpell::new(2, 7, 1).unwrap();
    /// symspell.create_dictionary_entry("whatever", 5000, None);
    /// let suggestions = symspell.lookup("whatver", Verbosity::Top, 2, false, false).unwrap();
    /// assert_eq!(suggestions[0].term, "whatever");
    /// ```
    pub fn lookup(
        &self,
        input: &str,
        verbosity: Verbosity,
        max_edit_distance: usize,
        include_unknown: bool,
        transfer_casing: bool,
    ) -> Result<Vec<Suggestion>> {
        if max_edit_distance > self.max_dictionary_edit_distance {
            return Err(SymSpellError::EditDistanceTooLarge {
                requested: max_edit_distance,
                max: self.max_dictionary_edit_distance,
            });
        }

        let input_lower_case;
        let lookup_input = if transfer_casing {
            input_lower_case = input.to_lowercase();
            input_lower_case.as_str()
        } else {
            input
        };

        let mut suggestions = self.lookup_candidates(lookup_input, verbosity, max_edit_distance);

        //transfer case from input to suggestion
        if transfer_casing {
            for suggestion in suggestions.iter_mut() {
                suggestion.term = apply_casing(input, &suggestion.term);
            }
        }

        if include_unknown && suggestions.is_empty() {
            suggestions.push(Suggestion::new(input, max_edit_distance + 1, 0));
        }
        Ok(suggestions)
    }

    /// Shorthand for the single best suggestion ([`Verbosity::Top`]).
    pub fn lookup_top(&self, input: &str, max_edit_distance: usize) -> Result<Option<Suggestion>> {
        Ok(self
            .lookup(input, Verbosity::Top, max_edit_distance, false, false)?
            .into_iter()
            .next())
    }

    fn lookup_candidates(
        &self,
        input: &str,
        verbosity: Verbosity,
        max_edit_distance: usize,
    ) -> Vec<Suggestion> {
        let mut suggestions: Vec<Suggestion> = Vec::new();

        let input_chars: FastVec<char> = input.chars().collect();
        let input_len = input_chars.len();
        // early termination - word is too big to possibly match any words
        if input_len > self.max_dictionary_word_length + max_edit_distance {
            return suggestions;
        }

        if let Some(&suggestion_count) = self.words.get(input) {
            suggestions.push(Suggestion::new(input, 0, suggestion_count));
            // early termination - return exact match, unless caller wants all matches
            if verbosity != Verbosity::All {
                return suggestions;
            }
        }

        //early termination, if we only want to check if word in dictionary or get its frequency e.g. for word segmentation
        if max_edit_distance == 0 {
            return suggestions;
        }

        // deletes we've considered already
        let mut hashset1: AHashSet<String> = AHashSet::new();
        // suggestions we've considered already
        let mut hashset2: AHashSet<&str> = AHashSet::new();
        hashset2.insert(input);

        let mut edit_distance = EditDistance::new(self.distance_algorithm);
        let mut max_edit_distance2 = max_edit_distance;
        let mut candidate_pointer = 0;
        let mut candidates: Vec<String> = Vec::new();

        let input_prefix_len = cmp::min(input_len, self.prefix_length);
        candidates.push(slice(input, 0, input_prefix_len).to_string());

        while candidate_pointer < candidates.len() {
            let candidate = mem::take(&mut candidates[candidate_pointer]);
            candidate_pointer += 1;
            let candidate_len = len(&candidate);
            let length_diff = input_prefix_len - candidate_len;

            //save some time - early termination
            //if canddate distance is already higher than suggestion distance, than there are no better suggestions to be expected
            if length_diff > max_edit_distance2 {
                // skip to next candidate if Verbosity.All, look no further if Verbosity.Top or Closest
                // (candidates are ordered by delete distance, so none are closer than current)
                if verbosity == Verbosity::All {
                    continue;
                }
                break;
            }

            //read candidate entry from dictionary
            if let Some(dict_suggestions) = self.deletes.get(&self.delete_hash(&candidate)) {
                //iterate through suggestions (to other correct dictionary items) of delete item and add them to suggestion list
                for suggestion in dict_suggestions {
                    let suggestion: &str = suggestion;
                    if suggestion == input {
                        continue;
                    }
                    let suggestion_chars: FastVec<char> = suggestion.chars().collect();
                    let suggestion_len = suggestion_chars.len();

                    if suggestion_len.abs_diff(input_len) > max_edit_distance2
                        // suggestion must be for a different delete string, in same bin only because of hash collision
                        || suggestion_len < candidate_len
                        // if suggestion len = delete len, then it either equals delete or is in same bin only because of hash collision
                        || (suggestion_len == candidate_len && suggestion != candidate)
                    {
                        continue;
                    }

                    let sugg_prefix_len = cmp::min(suggestion_len, self.prefix_length);
                    if sugg_prefix_len > input_prefix_len
                        && sugg_prefix_len - candidate_len > max_edit_distance2
                    {
                        continue;
                    }

                    //Damerau-Levenshtein Edit Distance: adjust distance, if both distances>0
                    //We allow simultaneous edits (deletes) of maxEditDistance on on both the dictionary and the input term.
                    //For replaces and adjacent transposes the resulting edit distance stays <= maxEditDistance.
                    //For inserts and deletes the resulting edit distance might exceed maxEditDistance.
                    //To prevent suggestions of a higher edit distance, we need to calculate the resulting edit distance, if there are simultaneous edits on both sides.
                    //Example: (bank==bnak and bank==bink, but bank!=kanb and bank!=xban and bank!=baxn for maxEditDistance=1)
                    //Two deletes on each side of a pair makes them all equal, but the first two pairs have edit distance=1, the others edit distance=2.
                    let distance;
                    if candidate_len == 0 {
                        //suggestions which have no common chars with input (inputLen<=maxEditDistance && suggestionLen<=maxEditDistance)
                        distance = cmp::max(input_len, suggestion_len);
                        if distance > max_edit_distance2 || !hashset2.insert(suggestion) {
                            continue;
                        }
                    } else if suggestion_len == 1 {
                        distance = if input_chars.contains(&suggestion_chars[0]) {
                            input_len - 1
                        } else {
                            input_len
                        };
                        if distance > max_edit_distance2 || !hashset2.insert(suggestion) {
                            continue;
                        }
                    // number of edits in prefix ==maxediddistance  AND no identic suffix,
                    // then editdistance>maxEditDistance and no need for Levenshtein calculation
                    // (inputLen >= prefixLength) && (suggestionLen >= prefixLength)
                    } else if self.has_different_suffix(
                        max_edit_distance,
                        &input_chars,
                        candidate_len,
                        &suggestion_chars,
                    ) {
                        continue;
                    } else {
                        // delete_in_suggestion_prefix is somewhat expensive, and only pays off when verbosity is Top or Closest.
                        if (verbosity != Verbosity::All
                            && !self.delete_in_suggestion_prefix(&candidate, &suggestion_chars))
                            || !hashset2.insert(suggestion)
                        {
                            continue;
                        }
                        let Some(d) = edit_distance.compare(input, suggestion, max_edit_distance2)
                        else {
                            continue;
                        };
                        distance = d;
                    }

                    //save some time
                    //do not process higher distances than those already found, if verbosity<All (note: maxEditDistance2 will always equal maxEditDistance when Verbosity::All)
                    if distance <= max_edit_distance2 {
                        // stale delete entries of removed words are not suggestions
                        let Some(&suggestion_count) = self.words.get(suggestion) else {
                            continue;
                        };
                        let si = Suggestion::new(suggestion, distance, suggestion_count);

                        if !suggestions.is_empty() {
                            match verbosity {
                                Verbosity::Closest => {
                                    //we will calculate DamLev distance only to the smallest found distance so far
                                    if distance < max_edit_distance2 {
                                        suggestions.clear();
                                    }
                                }
                                Verbosity::Top => {
                                    if distance < max_edit_distance2
                                        || suggestion_count > suggestions[0].count
                                    {
                                        max_edit_distance2 = distance;
                                        suggestions[0] = si;
                                    }
                                    continue;
                                }
                                Verbosity::All => (),
                            }
                        }

                        if verbosity != Verbosity::All {
                            max_edit_distance2 = distance;
                        }
                        suggestions.push(si);
                    }
                }
            }

            //add edits
            //derive edits (deletes) from candidate (input) and add them to candidates list
            //this is a recursive process until the maximum edit distance has been reached
            if length_diff < max_edit_distance && candidate_len <= self.prefix_length {
                //save some time
                //do not create edits with edit distance smaller than suggestions already found
                if verbosity != Verbosity::All && length_diff >= max_edit_distance2 {
                    continue;
                }

                for i in 0..candidate_len {
                    let delete = remove(&candidate, i);
                    if hashset1.insert(delete.clone()) {
                        candidates.push(delete);
                    }
                }
            }
        }

        //sort by ascending edit distance, then by descending word frequency
        if suggestions.len() > 1 {
            suggestions.sort_unstable();
        }
        suggestions
    }

    // Check whether all delete chars are present in the suggestion prefix in correct order, otherwise this is just a hash collision
    fn delete_in_suggestion_prefix(&self, delete: &str, suggestion: &[char]) -> bool {
        if delete.is_empty() {
            return true;
        }
        let suggestion_len = cmp::min(self.prefix_length, suggestion.len());
        let mut j = 0;
        for del_char in delete.chars() {
            while j < suggestion_len && del_char != suggestion[j] {
                j += 1;
            }
            if j == suggestion_len {
                return false;
            }
        }
        true
    }

    // Number of edits in the prefix equals max edit distance and the suffixes differ,
    // so the edit distance must exceed max edit distance.
    fn has_different_suffix(
        &self,
        max_edit_distance: usize,
        input: &[char],
        candidate_len: usize,
        suggestion: &[char],
    ) -> bool {
        if self.prefix_length - max_edit_distance != candidate_len {
            return false;
        }
        let (input_len, suggestion_len) = (input.len(), suggestion.len());
        let min = cmp::min(input_len, suggestion_len) as isize - self.prefix_length as isize;
        if min > 1 {
            let min = min as usize;
            if input[input_len + 1 - min..] != suggestion[suggestion_len + 1 - min..] {
                return true;
            }
        }
        if min <= 0 {
            return false;
        }
        let min = min as usize;
        input[input_len - min] != suggestion[suggestion_len - min]
            && (input[input_len - min - 1] != suggestion[suggestion_len - min]
                || input[input_len - min] != suggestion[suggestion_len - min - 1])
    }
}
