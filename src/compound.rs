use std::cmp;

use crate::edit_distance::EditDistance;
use crate::error::Result;
use crate::helpers::{len, parse_words, slice, transfer_casing_for_similar_text};
use crate::symspell::{Suggestion, SymSpell, Verbosity};

// estimated word occurrence probability P=10 / (N * 10^word length l)
// estimated word count C=10 / 10^word length l
// formulae to calculate the probability of an unknown word proposed by Peter Norvig in Natural Language Corpus Data, page 224 http://norvig.com/ngrams/ch14.pdf
fn unknown_word_count(term: &str) -> i64 {
    (10f64 / 10f64.powi(len(term) as i32)) as i64
}

fn unknown_word(term: &str, max_edit_distance: usize) -> Suggestion {
    Suggestion::new(term, max_edit_distance + 1, unknown_word_count(term))
}

impl SymSpell {
    /// Find suggested spellings for a multi-word input string (supports word splitting/merging).
    /// Returns a single Suggestion holding the corrected string, its edit distance to the input
    /// and its estimated frequency.
    ///
    /// lookup_compound supports compound aware automatic spelling correction of multi-word input strings with three cases:
    /// 1. mistakenly inserted space into a correct word led to two incorrect terms
    /// 2. mistakenly omitted space between two correct words led to one incorrect combined term
    /// 3. multiple independent input terms with/without spelling errors
    ///
    /// # Arguments
    ///
    /// * `input` - The sentence being spell checked.
    /// * `max_edit_distance` - The maximum edit distance between input and suggested words.
    /// * `transfer_casing` - Apply the letter case of the input to the corrected string.
    ///
    /// # Examples
    ///
    /// ```
    /// use symspell_engine::SymSpell;
    ///
    /// let mut symspell = SymSpell::new(2, 7, 1).unwrap();
    /// for (word, count) in [("where", 300), ("is", 900), ("the", 1000), ("love", 200)] {
    ///     symspell.create_dictionary_entry(word, count, None);
    /// }
    /// let suggestions = symspell.lookup_compound("whereis th elove", 2, false).unwrap();
    /// assert_eq!(suggestions[0].term, "where is the love");
    /// ```
    pub fn lookup_compound(
        &self,
        input: &str,
        max_edit_distance: usize,
        transfer_casing: bool,
    ) -> Result<Vec<Suggestion>> {
        //parse input string into single terms
        let term_list = parse_words(input);
        let mut edit_distance = EditDistance::new(self.distance_algorithm);

        //1 line with separate parts
        let mut suggestion_parts: Vec<Suggestion> = Vec::with_capacity(term_list.len());

        //translate every term to its best suggestion, otherwise it remains unchanged
        let mut last_combi = false;
        for (i, term) in term_list.iter().enumerate() {
            let suggestions = self.lookup(term, Verbosity::Top, max_edit_distance, false, false)?;

            //combi check, always before split
            if i > 0 && !last_combi {
                let combined = [term_list[i - 1].as_str(), term.as_str()].concat();
                let mut suggestions_combi =
                    self.lookup(&combined, Verbosity::Top, max_edit_distance, false, false)?;

                if let (Some(combi), Some(best1)) =
                    (suggestions_combi.first_mut(), suggestion_parts.last_mut())
                {
                    let best2 = match suggestions.first() {
                        Some(best2) => best2.clone(),
                        None => unknown_word(term, max_edit_distance),
                    };

                    //distance1=edit distance between 2 split terms und their best corrections : as comparative value for the combination
                    let distance1 = best1.distance + best2.distance;
                    if combi.distance + 1 < distance1
                        || (combi.distance + 1 == distance1
                            && combi.count as f64
                                > best1.count as f64 / self.corpus_word_count as f64
                                    * best2.count as f64)
                    {
                        combi.distance += 1;
                        *best1 = combi.clone();
                        last_combi = true;
                        continue;
                    }
                }
            }
            last_combi = false;

            //alway split terms without suggestion / never split terms with suggestion ed=0 / never split single char terms
            let term_length = len(term);
            match suggestions.first() {
                Some(best) if best.distance == 0 || term_length == 1 => {
                    suggestion_parts.push(best.clone());
                    continue;
                }
                _ => (),
            }

            let split_best = if term_length > 1 {
                self.best_split(term, &suggestions, max_edit_distance, &mut edit_distance)?
            } else {
                None
            };
            suggestion_parts
                .push(split_best.unwrap_or_else(|| unknown_word(term, max_edit_distance)));
        }

        let corpus_word_count = self.corpus_word_count as f64;
        let mut count = corpus_word_count;
        for part in &suggestion_parts {
            count *= part.count as f64 / corpus_word_count;
        }
        let output = suggestion_parts
            .iter()
            .map(|part| part.term.as_str())
            .collect::<Vec<_>>()
            .join(" ");

        let distance = edit_distance.distance(&input.to_lowercase(), &output);
        let term = if transfer_casing {
            transfer_casing_for_similar_text(input, &output)
        } else {
            output
        };
        Ok(vec![Suggestion::new(term, distance, count as i64)])
    }

    // Best split of `term` into two corrected words, starting from its single term correction.
    fn best_split(
        &self,
        term: &str,
        suggestions: &[Suggestion],
        max_edit_distance: usize,
        edit_distance: &mut EditDistance,
    ) -> Result<Option<Suggestion>> {
        let mut split_best = suggestions.first().cloned();
        let term_length = len(term);

        for j in 1..term_length {
            let part1 = slice(term, 0, j);
            let part2 = slice(term, j, term_length);

            let Some(suggestion1) = self.lookup_top(part1, max_edit_distance)? else {
                continue;
            };
            let Some(suggestion2) = self.lookup_top(part2, max_edit_distance)? else {
                continue;
            };

            //select best suggestion for split pair
            let split_term = [suggestion1.term.as_str(), suggestion2.term.as_str()].join(" ");
            let distance2 = edit_distance
                .compare(term, &split_term, max_edit_distance)
                .unwrap_or(max_edit_distance + 1);

            if let Some(best) = &split_best {
                if distance2 > best.distance {
                    continue;
                }
                if distance2 < best.distance {
                    split_best = None;
                }
            }

            // split corrections identical to the input when joined
            let reconstructs_term =
                [suggestion1.term.as_str(), suggestion2.term.as_str()].concat() == term;

            let count2 = match self.bigrams.get(split_term.as_str()) {
                //if bigram exists in bigram dictionary
                Some(&bigram_count) => match suggestions.first() {
                    //increase count, if split.corrections are part of or identical to input
                    //single term correction exists
                    Some(best_si) => {
                        if reconstructs_term {
                            //make count bigger than count of single term correction
                            cmp::max(bigram_count, best_si.count.saturating_add(2))
                        } else if suggestion1.term == best_si.term
                            || suggestion2.term == best_si.term
                        {
                            //make count bigger than count of single term correction
                            cmp::max(bigram_count, best_si.count.saturating_add(1))
                        } else {
                            bigram_count
                        }
                    }
                    // no single term correction exists
                    None if reconstructs_term => cmp::max(
                        bigram_count,
                        cmp::max(suggestion1.count, suggestion2.count).saturating_add(2),
                    ),
                    None => bigram_count,
                },
                None => {
                    //The Naive Bayes probability of the word combination is the product of the two word probabilities: P(AB) = P(A) * P(B)
                    //use it to estimate the frequency count of the combination if no bigram in dictionary found, which then is used to rank/select the best splitting variant
                    cmp::min(
                        self.bigram_count_min,
                        (suggestion1.count as f64 / self.corpus_word_count as f64
                            * suggestion2.count as f64) as i64,
                    )
                }
            };

            let replace = match &split_best {
                Some(best) => count2 > best.count,
                None => true,
            };
            if replace {
                split_best = Some(Suggestion::new(split_term, distance2, count2));
            }
        }
        Ok(split_best)
    }
}
