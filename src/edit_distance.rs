use std::mem;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Edit distance used to verify delete-index candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DistanceAlgorithm {
    /// Insertions, deletions and substitutions.
    Levenshtein,
    /// Damerau-Levenshtein edit distance, like Levenshtein but allows for adjacent transpositions.
    /// Optimal string alignment version (OSA): each substring can only be edited once.
    /// E.g., "CA" to "ABC" has an edit distance of 2 by for Damerau-Levenshtein, but a distance of 3 when using the optimal string alignment algorithm.
    /// https://en.wikipedia.org/wiki/Damerau%E2%80%93Levenshtein_distance#Optimal_string_alignment_distance
    #[default]
    DamerauOsa,
}

/// Edit distance calculator with reusable row buffers.
///
/// One instance is created per lookup and funnels all distance checks of that lookup,
/// so the cost rows are only reallocated when a longer string shows up.
/// Distances are counted in chars, not bytes.
#[derive(Debug, Clone, Default)]
pub struct EditDistance {
    algorithm: DistanceAlgorithm,
    chars1: Vec<char>,
    chars2: Vec<char>,
    char1_costs: Vec<usize>,
    prev_char1_costs: Vec<usize>,
}

impl EditDistance {
    pub fn new(algorithm: DistanceAlgorithm) -> Self {
        Self {
            algorithm,
            ..Default::default()
        }
    }

    pub fn algorithm(&self) -> DistanceAlgorithm {
        self.algorithm
    }

    /// Unbounded edit distance between two strings.
    pub fn distance(&mut self, string1: &str, string2: &str) -> usize {
        self.load(string1, string2);
        let (len1, len2, start) = prefix_suffix_prep(&self.chars1, &self.chars2);
        if len1 == 0 {
            return len2;
        }
        self.reserve_costs(len2);

        let s1 = &self.chars1[start..start + len1];
        let s2 = &self.chars2[start..start + len2];
        match self.algorithm {
            DistanceAlgorithm::Levenshtein => levenshtein(s1, s2, &mut self.char1_costs),
            DistanceAlgorithm::DamerauOsa => damerau_osa(
                s1,
                s2,
                &mut self.char1_costs,
                &mut self.prev_char1_costs,
            ),
        }
    }

    /// Edit distance between two strings, or None if it is greater than `max_distance`.
    pub fn compare(&mut self, string1: &str, string2: &str, max_distance: usize) -> Option<usize> {
        if string1.is_empty() || string2.is_empty() {
            return null_distance_results(string1, string2, max_distance);
        }
        if max_distance == 0 {
            return (string1 == string2).then_some(0);
        }

        self.load(string1, string2);
        // the edit distance can't be less than the difference of the lengths of the strings.
        if self.chars2.len() - self.chars1.len() > max_distance {
            return None;
        }

        let (len1, len2, start) = prefix_suffix_prep(&self.chars1, &self.chars2);
        if len1 == 0 {
            return (len2 <= max_distance).then_some(len2);
        }
        self.reserve_costs(len2);

        let s1 = &self.chars1[start..start + len1];
        let s2 = &self.chars2[start..start + len2];
        let distance = match (self.algorithm, max_distance < len2) {
            (DistanceAlgorithm::Levenshtein, true) => {
                levenshtein_max(s1, s2, max_distance, &mut self.char1_costs)?
            }
            (DistanceAlgorithm::Levenshtein, false) => levenshtein(s1, s2, &mut self.char1_costs),
            (DistanceAlgorithm::DamerauOsa, true) => damerau_osa_max(
                s1,
                s2,
                max_distance,
                &mut self.char1_costs,
                &mut self.prev_char1_costs,
            )?,
            (DistanceAlgorithm::DamerauOsa, false) => damerau_osa(
                s1,
                s2,
                &mut self.char1_costs,
                &mut self.prev_char1_costs,
            ),
        };
        (distance <= max_distance).then_some(distance)
    }

    // fill the char buffers, shorter string first
    fn load(&mut self, string1: &str, string2: &str) {
        self.chars1.clear();
        self.chars1.extend(string1.chars());
        self.chars2.clear();
        self.chars2.extend(string2.chars());
        if self.chars1.len() > self.chars2.len() {
            mem::swap(&mut self.chars1, &mut self.chars2);
        }
    }

    fn reserve_costs(&mut self, len2: usize) {
        if self.char1_costs.len() < len2 {
            self.char1_costs.resize(len2, 0);
        }
        if self.algorithm == DistanceAlgorithm::DamerauOsa {
            self.prev_char1_costs.clear();
            self.prev_char1_costs.resize(len2.max(self.char1_costs.len()), 0);
        }
    }
}

fn null_distance_results(string1: &str, string2: &str, max_distance: usize) -> Option<usize> {
    let len = if string1.is_empty() {
        string2.chars().count()
    } else {
        string1.chars().count()
    };
    (len <= max_distance).then_some(len)
}

/// Strips the common suffix and prefix of both strings. `s1` must be the shorter one.
/// Returns the remaining lengths of `s1` and `s2`, and the start offset of the remainder.
fn prefix_suffix_prep(s1: &[char], s2: &[char]) -> (usize, usize, usize) {
    let mut len1 = s1.len();
    let mut len2 = s2.len();
    while len1 != 0 && s1[len1 - 1] == s2[len2 - 1] {
        len1 -= 1;
        len2 -= 1;
    }
    let mut start = 0;
    while start != len1 && s1[start] == s2[start] {
        start += 1;
    }
    (len1 - start, len2 - start, start)
}

fn levenshtein(s1: &[char], s2: &[char], char1_costs: &mut [usize]) -> usize {
    for (j, cost) in char1_costs.iter_mut().take(s2.len()).enumerate() {
        *cost = j + 1;
    }
    let mut current_cost = 0;
    for (i, &char1) in s1.iter().enumerate() {
        let mut left_char_cost = i;
        let mut above_char_cost = i;
        for (j, &char2) in s2.iter().enumerate() {
            // cost on diagonal (substitution)
            current_cost = left_char_cost;
            left_char_cost = char1_costs[j];
            if char2 != char1 {
                // deletion
                if above_char_cost < current_cost {
                    current_cost = above_char_cost;
                }
                // insertion
                if left_char_cost < current_cost {
                    current_cost = left_char_cost;
                }
                current_cost += 1;
            }
            char1_costs[j] = current_cost;
            above_char_cost = current_cost;
        }
    }
    current_cost
}

// only the band of width 2*max_distance+1 around the diagonal is evaluated
fn levenshtein_max(
    s1: &[char],
    s2: &[char],
    max_distance: usize,
    char1_costs: &mut [usize],
) -> Option<usize> {
    let (len1, len2) = (s1.len(), s2.len());
    for (j, cost) in char1_costs.iter_mut().take(len2).enumerate() {
        *cost = if j < max_distance { j + 1 } else { max_distance + 1 };
    }
    let len_diff = len2 - len1;
    let j_start_offset = max_distance - len_diff;
    let mut j_start = 0;
    let mut j_end = max_distance;
    let mut current_cost = 0;
    for (i, &char1) in s1.iter().enumerate() {
        let mut prev_char1_cost = i;
        let mut above_char_cost = i;
        if i > j_start_offset {
            j_start += 1;
        }
        if j_end < len2 {
            j_end += 1;
        }
        for j in j_start..j_end {
            current_cost = prev_char1_cost;
            prev_char1_cost = char1_costs[j];
            if s2[j] != char1 {
                if above_char_cost < current_cost {
                    current_cost = above_char_cost;
                }
                if prev_char1_cost < current_cost {
                    current_cost = prev_char1_cost;
                }
                current_cost += 1;
            }
            char1_costs[j] = current_cost;
            above_char_cost = current_cost;
        }
        if char1_costs[i + len_diff] > max_distance {
            return None;
        }
    }
    (current_cost <= max_distance).then_some(current_cost)
}

fn damerau_osa(
    s1: &[char],
    s2: &[char],
    char1_costs: &mut [usize],
    prev_char1_costs: &mut [usize],
) -> usize {
    for (j, cost) in char1_costs.iter_mut().take(s2.len()).enumerate() {
        *cost = j + 1;
    }
    let mut char1 = ' ';
    let mut current_cost = 0;
    for (i, &next_char1) in s1.iter().enumerate() {
        let prev_char1 = char1;
        char1 = next_char1;
        let mut char2 = ' ';
        let mut left_char_cost = i;
        let mut above_char_cost = i;
        let mut next_trans_cost = 0;
        for (j, &next_char2) in s2.iter().enumerate() {
            let this_trans_cost = next_trans_cost;
            next_trans_cost = prev_char1_costs[j];
            // cost of diagonal (substitution)
            current_cost = left_char_cost;
            prev_char1_costs[j] = current_cost;
            // left now equals current cost (which will be diagonal at next iteration)
            left_char_cost = char1_costs[j];
            let prev_char2 = char2;
            char2 = next_char2;
            if char1 != char2 {
                if above_char_cost < current_cost {
                    current_cost = above_char_cost;
                }
                if left_char_cost < current_cost {
                    current_cost = left_char_cost;
                }
                current_cost += 1;
                // transposition
                if i != 0
                    && j != 0
                    && char1 == prev_char2
                    && prev_char1 == char2
                    && this_trans_cost + 1 < current_cost
                {
                    current_cost = this_trans_cost + 1;
                }
            }
            char1_costs[j] = current_cost;
            above_char_cost = current_cost;
        }
    }
    current_cost
}

fn damerau_osa_max(
    s1: &[char],
    s2: &[char],
    max_distance: usize,
    char1_costs: &mut [usize],
    prev_char1_costs: &mut [usize],
) -> Option<usize> {
    let (len1, len2) = (s1.len(), s2.len());
    for (j, cost) in char1_costs.iter_mut().take(len2).enumerate() {
        *cost = if j < max_distance { j + 1 } else { max_distance + 1 };
    }
    let len_diff = len2 - len1;
    let j_start_offset = max_distance - len_diff;
    let mut j_start = 0;
    let mut j_end = max_distance;
    let mut char1 = ' ';
    let mut current_cost = 0;
    for (i, &next_char1) in s1.iter().enumerate() {
        let prev_char1 = char1;
        char1 = next_char1;
        let mut char2 = ' ';
        let mut left_char_cost = i;
        let mut above_char_cost = i;
        let mut next_trans_cost = 0;
        if i > j_start_offset {
            j_start += 1;
        }
        if j_end < len2 {
            j_end += 1;
        }
        for j in j_start..j_end {
            let this_trans_cost = next_trans_cost;
            next_trans_cost = prev_char1_costs[j];
            current_cost = left_char_cost;
            prev_char1_costs[j] = current_cost;
            left_char_cost = char1_costs[j];
            let prev_char2 = char2;
            char2 = s2[j];
            if char1 != char2 {
                if above_char_cost < current_cost {
                    current_cost = above_char_cost;
                }
                if left_char_cost < current_cost {
                    current_cost = left_char_cost;
                }
                current_cost += 1;
                if i != 0
                    && j != 0
                    && char1 == prev_char2
                    && prev_char1 == char2
                    && this_trans_cost + 1 < current_cost
                {
                    current_cost = this_trans_cost + 1;
                }
            }
            char1_costs[j] = current_cost;
            above_char_cost = current_cost;
        }
        if char1_costs[i + len_diff] > max_distance {
            return None;
        }
    }
    (current_cost <= max_distance).then_some(current_cost)
}
