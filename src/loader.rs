use itertools::Itertools;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use tracing::{debug, warn};

use crate::error::Result;
use crate::helpers::parse_words;
use crate::suggestion_stage::SuggestionStage;
use crate::symspell::SymSpell;

const STAGING_CAPACITY: usize = 16384;
pub const DEFAULT_SEPARATOR: &str = " ";

fn split_line<'a>(line: &'a str, separator: &str) -> Vec<&'a str> {
    line.split(separator).filter(|part| !part.is_empty()).collect()
}

impl SymSpell {
    /// Load multiple dictionary entries from a file of word/frequency count pairs.
    /// Returns false if the delete index is still empty afterwards.
    ///
    /// # Arguments
    ///
    /// * `path` - The path+filename of the file.
    /// * `term_index` - The column position of the word.
    /// * `count_index` - The column position of the frequency count.
    /// * `separator` - Separator between word and frequency
    pub fn load_dictionary(
        &mut self,
        path: impl AsRef<Path>,
        term_index: usize,
        count_index: usize,
        separator: &str,
    ) -> Result<bool> {
        let file = File::open(path.as_ref())?;
        self.load_dictionary_from_reader(BufReader::new(file), term_index, count_index, separator)
    }

    /// Load multiple dictionary entries from a stream of word/frequency count pairs.
    pub fn load_dictionary_from_reader<R: BufRead>(
        &mut self,
        reader: R,
        term_index: usize,
        count_index: usize,
        separator: &str,
    ) -> Result<bool> {
        let mut staging = SuggestionStage::new(STAGING_CAPACITY);
        let mut lines = 0usize;
        for line in reader.lines() {
            let line = line?;
            self.load_dictionary_line(
                &line,
                term_index,
                count_index,
                separator,
                Some(&mut staging),
            );
            lines += 1;
        }
        self.commit_staged(&mut staging);
        debug!(
            target: "symspell_engine::loader",
            "dictionary loaded: {} lines, {} words, {} deletes",
            lines,
            self.words.len(),
            self.deletes.len()
        );
        Ok(!self.deletes.is_empty())
    }

    /// Load single dictionary entry from word/frequency count pair.
    /// A non-numeric count is logged and replaced by 1, a line without separator is taken as a word with count 1.
    ///
    /// # Arguments
    ///
    /// * `line` - word/frequency pair.
    /// * `term_index` - The column position of the word.
    /// * `count_index` - The column position of the frequency count.
    /// * `separator` - Separator between word and frequency
    /// * `staging` - Optional staging buffer, see [`SymSpell::create_dictionary_entry`].
    pub fn load_dictionary_line(
        &mut self,
        line: &str,
        term_index: usize,
        count_index: usize,
        separator: &str,
        staging: Option<&mut SuggestionStage>,
    ) -> bool {
        let line_parts = split_line(line, separator);
        match line_parts.len() {
            0 => false,
            1 => self.create_dictionary_entry(line_parts[0], 1, staging),
            _ => {
                let (Some(&key), Some(&count)) =
                    (line_parts.get(term_index), line_parts.get(count_index))
                else {
                    warn!(
                        target: "symspell_engine::loader",
                        "missing dictionary column in line {:?}", line
                    );
                    return false;
                };
                let count = count.parse::<i64>().unwrap_or_else(|_| {
                    warn!(
                        target: "symspell_engine::loader",
                        "invalid count {:?} for {:?}, using 1", count, key
                    );
                    1
                });
                self.create_dictionary_entry(key, count, staging)
            }
        }
    }

    /// Load multiple bigram entries from a file of bigram/frequency count pairs.
    /// Only used in lookup_compound for improved compound splitting/merging/correction quality.
    /// Returns false if the bigram table is still empty afterwards.
    ///
    /// # Arguments
    ///
    /// * `path` - The path+filename of the file.
    /// * `term_index` - The column position of the word.
    /// * `count_index` - The column position of the frequency count.
    /// * `separator` - Separator between bigram and frequency
    pub fn load_bigram_dictionary(
        &mut self,
        path: impl AsRef<Path>,
        term_index: usize,
        count_index: usize,
        separator: &str,
    ) -> Result<bool> {
        let file = File::open(path.as_ref())?;
        self.load_bigram_dictionary_from_reader(
            BufReader::new(file),
            term_index,
            count_index,
            separator,
        )
    }

    /// Load multiple bigram entries from a stream of bigram/frequency count pairs.
    pub fn load_bigram_dictionary_from_reader<R: BufRead>(
        &mut self,
        reader: R,
        term_index: usize,
        count_index: usize,
        separator: &str,
    ) -> Result<bool> {
        for line in reader.lines() {
            self.load_bigram_dictionary_line(&line?, term_index, count_index, separator);
        }
        debug!(
            target: "symspell_engine::loader",
            "bigram dictionary loaded: {} bigrams, min count {}",
            self.bigrams.len(),
            self.bigram_count_min
        );
        Ok(!self.bigrams.is_empty())
    }

    /// Load single dictionary entry from bigram/frequency count pair.
    /// With the default separator " " the bigram spans the columns `term_index` and `term_index + 1`.
    ///
    /// # Arguments
    ///
    /// * `line` - bigram/frequency pair.
    /// * `term_index` - The column position of the word.
    /// * `count_index` - The column position of the frequency count.
    /// * `separator` - Separator between bigram and frequency
    pub fn load_bigram_dictionary_line(
        &mut self,
        line: &str,
        term_index: usize,
        count_index: usize,
        separator: &str,
    ) -> bool {
        let line_parts = split_line(line, separator);
        let default_separator = separator == DEFAULT_SEPARATOR;
        let line_parts_len = if default_separator { 3 } else { 2 };
        if line_parts.len() < line_parts_len {
            return false;
        }

        let key = if default_separator {
            match (line_parts.get(term_index), line_parts.get(term_index + 1)) {
                (Some(first), Some(second)) => [*first, *second].join(" "),
                _ => return false,
            }
        } else {
            match line_parts.get(term_index) {
                Some(key) => key.to_string(),
                None => return false,
            }
        };
        let Some(count) = line_parts.get(count_index) else {
            return false;
        };
        let Ok(count) = count.parse::<i64>() else {
            warn!(
                target: "symspell_engine::loader",
                "invalid bigram count {:?} for {:?}, skipped", count, key
            );
            return false;
        };

        self.bigrams.insert(key.into_boxed_str(), count);
        if count < self.bigram_count_min {
            self.bigram_count_min = count;
        }
        true
    }

    /// Load words from a plain text corpus file, every word counting as one occurrence.
    /// Returns false if the delete index is still empty afterwards.
    pub fn create_dictionary(&mut self, path: impl AsRef<Path>) -> Result<bool> {
        let file = File::open(path.as_ref())?;
        self.create_dictionary_from_reader(BufReader::new(file))
    }

    /// Load words from a plain text corpus stream, every word counting as one occurrence.
    pub fn create_dictionary_from_reader<R: BufRead>(&mut self, reader: R) -> Result<bool> {
        let mut staging = SuggestionStage::new(STAGING_CAPACITY);
        let mut tokens = 0usize;
        for line in reader.lines() {
            for key in parse_words(&line?) {
                self.create_dictionary_entry(&key, 1, Some(&mut staging));
                tokens += 1;
            }
        }
        self.commit_staged(&mut staging);
        debug!(
            target: "symspell_engine::loader",
            "dictionary created from corpus: {} tokens, {} words, {} deletes",
            tokens,
            self.words.len(),
            self.deletes.len()
        );
        Ok(!self.deletes.is_empty())
    }

    /// Write the dictionary to a text file of word/frequency count pairs.
    /// Useful when the dictionary was incrementally built/updated with create_dictionary_entry.
    /// Entries are sorted by frequency count descending.
    ///
    /// # Arguments
    ///
    /// * `path` - The path+filename of the file.
    /// * `separator` - Separator between word and frequency
    pub fn save_dictionary(&self, path: impl AsRef<Path>, separator: &str) -> Result<()> {
        let file = File::create(path.as_ref())?;
        let mut writer = BufWriter::new(file);

        for (entry, count) in self
            .words
            .iter()
            .sorted_unstable_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)))
        {
            writeln!(writer, "{}{}{}", entry, separator, count)?;
        }
        writer.flush()?;
        Ok(())
    }
}
