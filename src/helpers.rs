use itertools::{EitherOrBoth, Itertools};
use unicode_normalization::UnicodeNormalization;

const FNV_OFFSET_BASIS: u32 = 2_166_136_261;
const FNV_PRIME: u32 = 16_777_619;

/// 32 bit FNV-1a hash of a delete variant.
/// The hash is reduced by `compact_mask`, the low 2 bits encode the length class min(len, 3).
#[inline]
pub(crate) fn string_hash(s: &str, compact_mask: u32) -> u32 {
    let mut len = 0u32;
    let mut hash = FNV_OFFSET_BASIS;
    for c in s.chars() {
        hash ^= c as u32;
        hash = hash.wrapping_mul(FNV_PRIME);
        len += 1;
    }
    hash &= compact_mask;
    hash | len.min(3)
}

#[inline]
pub(crate) fn len(s: &str) -> usize {
    s.chars().count()
}

/// Char indexed substring `start..end`.
pub(crate) fn slice(s: &str, start: usize, end: usize) -> &str {
    let mut indices = s.char_indices().map(|(i, _)| i).chain(std::iter::once(s.len()));
    let from = indices.nth(start).unwrap_or(s.len());
    let to = if end > start {
        indices.nth(end - start - 1).unwrap_or(s.len())
    } else {
        from
    };
    &s[from..to]
}

/// Copy of `s` without the char at `index`.
pub(crate) fn remove(s: &str, index: usize) -> String {
    s.chars()
        .enumerate()
        .filter(|(i, _)| *i != index)
        .map(|(_, ch)| ch)
        .collect()
}

/// Parse a string into lowercase words, splitting at non-alphanumeric characters, except for apostrophes.
pub fn parse_words(text: &str) -> Vec<String> {
    let text_normalized = text.to_lowercase();
    let mut terms = Vec::new();
    let mut start_pos = None;

    for (pos, ch) in text_normalized.char_indices() {
        let is_word_char = ch.is_alphanumeric() || ch == '\'' || ch == '’';
        match (is_word_char, start_pos) {
            (true, None) => start_pos = Some(pos),
            (false, Some(start)) => {
                terms.push(text_normalized[start..pos].to_string());
                start_pos = None;
            }
            _ => (),
        }
    }
    if let Some(start) = start_pos {
        terms.push(text_normalized[start..].to_string());
    }
    terms
}

/// Normalize ligatures: "scientiﬁc" "ﬁelds" "ﬁnal"
pub fn unicode_normalization_form_kc(input: &str) -> String {
    input.nfkc().collect::<String>()
}

/// First char uppercase, all other chars lowercase.
pub(crate) fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

fn push_cased(result: &mut String, c: char, upper: bool) {
    if upper {
        result.extend(c.to_uppercase());
    } else {
        result.extend(c.to_lowercase());
    }
}

/// Transfer the letter case position by position from `text_w_casing` to `text_wo_casing`.
/// Both texts must have the same number of chars; surplus chars of the longer one are dropped.
pub fn transfer_casing_for_matching_text(text_w_casing: &str, text_wo_casing: &str) -> String {
    let mut result = String::with_capacity(text_wo_casing.len());
    for (w, wo) in text_w_casing.chars().zip(text_wo_casing.chars()) {
        push_cased(&mut result, wo, w.is_uppercase());
    }
    result
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tag {
    Equal,
    Insert,
    Delete,
    Replace,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Opcode {
    tag: Tag,
    i1: usize,
    i2: usize,
    j1: usize,
    j2: usize,
}

// Edit script turning `a` into `b`, derived from a longest common subsequence.
// Adjacent delete and insert runs are folded into a single replace.
fn opcodes(a: &[char], b: &[char]) -> Vec<Opcode> {
    let (n, m) = (a.len(), b.len());
    // lcs[i][j] = LCS length of a[i..] and b[j..]
    let mut lcs = vec![vec![0usize; m + 1]; n + 1];
    for i in (0..n).rev() {
        for j in (0..m).rev() {
            lcs[i][j] = if a[i] == b[j] {
                lcs[i + 1][j + 1] + 1
            } else {
                lcs[i + 1][j].max(lcs[i][j + 1])
            };
        }
    }

    let mut codes: Vec<Opcode> = Vec::new();
    let mut push = |tag: Tag, i: usize, j: usize, di: usize, dj: usize| {
        if let Some(last) = codes.last_mut() {
            let merge = last.tag == tag
                || (last.tag != Tag::Equal && tag != Tag::Equal && last.i2 == i && last.j2 == j);
            if merge {
                if last.tag != tag {
                    last.tag = Tag::Replace;
                }
                last.i2 = i + di;
                last.j2 = j + dj;
                return;
            }
        }
        codes.push(Opcode {
            tag,
            i1: i,
            i2: i + di,
            j1: j,
            j2: j + dj,
        });
    };

    let (mut i, mut j) = (0, 0);
    while i < n || j < m {
        if i < n && j < m && a[i] == b[j] {
            push(Tag::Equal, i, j, 1, 1);
            i += 1;
            j += 1;
        } else if j < m && (i == n || lcs[i][j + 1] >= lcs[i + 1][j]) {
            push(Tag::Insert, i, j, 0, 1);
            j += 1;
        } else {
            push(Tag::Delete, i, j, 1, 0);
            i += 1;
        }
    }
    codes
}

/// Transfer the letter case from `text_w_casing` to the similar but differently spelled `text_wo_casing`.
///
/// The texts are aligned with a char level diff. Equal spans keep the casing source text,
/// inserted spans take the case of the preceding char (or of the following char at the start of a word),
/// replaced spans of equal length are transferred position by position, otherwise the last seen case
/// is carried over to the surplus chars.
pub fn transfer_casing_for_similar_text(text_w_casing: &str, text_wo_casing: &str) -> String {
    if text_wo_casing.is_empty() || text_w_casing.is_empty() {
        return text_wo_casing.to_string();
    }

    let w: Vec<char> = text_w_casing.chars().collect();
    let w_lower: Vec<char> = text_w_casing.to_lowercase().chars().collect();
    let wo: Vec<char> = text_wo_casing.chars().collect();
    // lowercasing may change the char count, the aligned source must stay index compatible
    let w_lower = if w_lower.len() == w.len() {
        w_lower
    } else {
        w.iter().map(|c| c.to_lowercase().next().unwrap_or(*c)).collect()
    };

    let mut result = String::with_capacity(text_wo_casing.len());
    for code in opcodes(&w_lower, &wo) {
        let source = &w[code.i1..code.i2];
        let target = &wo[code.j1..code.j2];
        match code.tag {
            Tag::Equal => result.extend(source),
            Tag::Delete => (),
            Tag::Insert => {
                let upper = if code.i1 == 0 || w[code.i1 - 1] == ' ' {
                    w.get(code.i1).is_some_and(|c| c.is_uppercase())
                } else {
                    w[code.i1 - 1].is_uppercase()
                };
                for &c in target {
                    push_cased(&mut result, c, upper);
                }
            }
            Tag::Replace if source.len() == target.len() => {
                for (s, &t) in source.iter().zip(target) {
                    push_cased(&mut result, t, s.is_uppercase());
                }
            }
            Tag::Replace => {
                let mut last_upper = false;
                for pair in source.iter().zip_longest(target) {
                    match pair {
                        EitherOrBoth::Both(s, &t) => {
                            last_upper = s.is_uppercase();
                            push_cased(&mut result, t, last_upper);
                        }
                        EitherOrBoth::Right(&t) => push_cased(&mut result, t, last_upper),
                        EitherOrBoth::Left(_) => (),
                    }
                }
            }
        }
    }
    result
}

/// Transfer the casing of `source` to `target`, position by position when both have the same length,
/// via text alignment otherwise.
pub fn transfer_casing(source: &str, target: &str) -> String {
    if len(source) == len(target) {
        transfer_casing_for_matching_text(source, target)
    } else {
        transfer_casing_for_similar_text(source, target)
    }
}

/// A single ASCII punctuation char, or a two char possessive/contraction like "'s" or "’t".
pub(crate) fn is_punctuation_or_apostrophe(s: &str) -> bool {
    let mut chars = s.chars();
    match (chars.next(), chars.next(), chars.next()) {
        (Some(c), None, None) => c.is_ascii_punctuation(),
        (Some('\'' | '’'), Some(_), None) => true,
        _ => false,
    }
}
