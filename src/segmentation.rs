use std::cmp;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Result, SymSpellError};
use crate::helpers::{capitalize, is_punctuation_or_apostrophe, unicode_normalization_form_kc};
use crate::symspell::{SymSpell, Verbosity};

/// Result of [`SymSpell::word_segmentation`].
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Composition {
    /// The input split into words, without spelling correction.
    pub segmented_string: String,
    /// The word segmented and spelling corrected string.
    pub corrected_string: String,
    /// The edit distance sum between input string and corrected string.
    pub distance_sum: usize,
    /// The sum of word occurrence probabilities in log scale (a measure of how common and probable the corrected segmentation is).
    pub prob_log_sum: f64,
}

impl Composition {
    fn extend(
        &self,
        part: &str,
        corrected: &str,
        separator: &str,
        distance: usize,
        prob_log: f64,
    ) -> Self {
        Self {
            segmented_string: [self.segmented_string.as_str(), part].join(separator),
            corrected_string: [self.corrected_string.as_str(), corrected].join(separator),
            distance_sum: self.distance_sum + distance,
            prob_log_sum: self.prob_log_sum + prob_log,
        }
    }
}

impl SymSpell {
    /// word_segmentation divides a string into words by inserting missing spaces at the appropriate positions.
    /// word_segmentation works on text with any letter case which is retained in the output segmentation.
    /// word_segmentation works on noisy text with spelling mistakes, which are corrected in the output segmentation.
    /// existing spaces are allowed and considered for optimum segmentation.
    ///
    /// word_segmentation uses a novel approach *without* recursion.
    /// https://seekstorm.com/blog/fast-word-segmentation-noisy-text/
    /// While each string of length n can be segmentend in 2^n−1 possible compositions https://en.wikipedia.org/wiki/Composition_(combinatorics)
    /// word_segmentation has a linear runtime O(n) to find the optimum composition
    ///
    /// # Arguments
    ///
    /// * `input` - The string being segmented into words. Upper/lower case allowed.
    /// * `max_edit_distance` - The maximum edit distance between input and corrected words.
    /// * `max_segmentation_word_length` - The maximum word length that should be considered,
    ///   defaults to the length of the longest dictionary word.
    ///
    /// # Examples
    ///
    /// ```
    /// use symspell_engine::SymSpell;
    ///
    /// let mut symspell = SymSpell::new(2, 7, 1).unwrap();
    /// for (word, count) in [("it", 5000), ("was", 4000)] {
    ///     symspell.create_dictionary_entry(word, count, None);
    /// }
    /// let composition = symspell.word_segmentation("itwas", 0, None).unwrap();
    /// assert_eq!(composition.corrected_string, "it was");
    /// ```
    pub fn word_segmentation(
        &self,
        input: &str,
        max_edit_distance: usize,
        max_segmentation_word_length: Option<usize>,
    ) -> Result<Composition> {
        if max_edit_distance > self.max_dictionary_edit_distance {
            return Err(SymSpellError::EditDistanceTooLarge {
                requested: max_edit_distance,
                max: self.max_dictionary_edit_distance,
            });
        }
        let max_segmentation_word_length = max_segmentation_word_length
            .unwrap_or(self.max_dictionary_word_length)
            .max(1);

        // Normalize ligatures: "scientiﬁc" "ﬁelds" "ﬁnal", and remove U+002D (hyphen-minus)
        let input: Vec<char> = unicode_normalization_form_kc(input)
            .chars()
            .filter(|&c| c != '\u{002D}')
            .collect();
        let input_len = input.len();
        // one extra slot for parts that start with an existing space
        let array_size = cmp::min(max_segmentation_word_length + 1, input_len);
        if array_size == 0 {
            return Ok(Composition::default());
        }

        let corpus_word_count = self.corpus_word_count as f64;
        // None marks a slot whose composition ends at a position not reached yet
        let mut compositions: Vec<Option<Composition>> = vec![None; array_size];
        let mut ci: usize = 0;

        //outer loop (column): all possible part start positions
        for j in 0..input_len {
            //inner loop (row): all possible part lengths (from start position): part can't be bigger than longest word in dictionary (other than long unknown word)
            let leading_space = usize::from(input[j].is_whitespace());
            let imax = cmp::min(input_len - j, max_segmentation_word_length + leading_space);
            for i in 1..=imax {
                //get top spelling correction/ed for part
                let mut part = &input[j..j + i];
                let mut separator_len = 0;
                if part[0].is_whitespace() {
                    //remove space for levensthein calculation
                    part = &part[1..];
                } else {
                    //add ed+1: space did not exist, had to be inserted
                    separator_len = 1;
                }

                //remove space from part, add number of removed spaces to top_ed
                let spaced_len = part.len();
                let part: String = part.iter().filter(|c| !c.is_whitespace()).collect();
                let part_len = part.chars().count();
                let mut top_ed = spaced_len - part_len;

                // Lookup against the lowercase term, the letter case of the part is retained in the output
                let results = self.lookup(
                    &part.to_lowercase(),
                    Verbosity::Top,
                    max_edit_distance,
                    false,
                    false,
                )?;
                let (top_result, top_prob_log) = match results.first() {
                    Some(result) => {
                        top_ed += result.distance;
                        let top_result = if part.chars().next().is_some_and(char::is_uppercase) {
                            capitalize(&result.term)
                        } else {
                            result.term.clone()
                        };
                        //Naive Bayes Rule
                        //we assume the word probabilities of two words to be independent
                        //therefore the resulting probability of the word combination is the product of the two word probabilities

                        //instead of computing the product of probabilities we are computing the sum of the logarithm of probabilities
                        //because the probabilities of words are about 10^-10, the product of many such small numbers could exceed (underflow) the floating number range and become zero
                        //log(ab)=log(a)+log(b)
                        (top_result, (result.count as f64 / corpus_word_count).log10())
                    }
                    None => {
                        //default, if word not found
                        //otherwise long input text would win as long unknown word (with ed=edmax+1 ), although there there should many spaces inserted
                        top_ed += part_len;
                        let prob_log =
                            (10.0 / (corpus_word_count * 10f64.powi(part_len as i32))).log10();
                        (part.clone(), prob_log)
                    }
                };

                // set values in first loop
                if j == 0 {
                    compositions[i - 1] = Some(Composition {
                        segmented_string: part,
                        corrected_string: top_result,
                        distance_sum: top_ed,
                        prob_log_sum: top_prob_log,
                    });
                    continue;
                }

                let di = (i + ci) % array_size;
                let Some(prev) = &compositions[ci] else {
                    continue;
                };
                let replace = match &compositions[di] {
                    // the slot of the previous word end is reused for the farthest part end
                    _ if i == array_size => true,
                    None => true,
                    Some(dest) => {
                        //replace values if better probabilityLogSum, if same edit distance OR one space difference
                        ((prev.distance_sum + top_ed == dest.distance_sum
                            || prev.distance_sum + separator_len + top_ed == dest.distance_sum)
                            && dest.prob_log_sum < prev.prob_log_sum + top_prob_log)
                            //replace values if smaller edit distance
                            || prev.distance_sum + separator_len + top_ed < dest.distance_sum
                    }
                };

                if replace {
                    //keep punctuation or apostrophe adjacent to previous word
                    let composition = if is_punctuation_or_apostrophe(&top_result) {
                        prev.extend(&part, &top_result, "", top_ed, top_prob_log)
                    } else {
                        prev.extend(&part, &top_result, " ", separator_len + top_ed, top_prob_log)
                    };
                    compositions[di] = Some(composition);
                }
            }
            if j != 0 {
                // the slot now stands for a later part end, unless this column already filled it
                if imax < array_size {
                    compositions[ci] = None;
                }
                ci += 1;
                if ci == array_size {
                    ci = 0;
                }
            }
        }
        Ok(compositions.swap_remove(ci).unwrap_or_default())
    }
}
