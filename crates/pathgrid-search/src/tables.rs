//! Immutable language reference tables.
//!
//! Tables are plain values: build them once, then share them by reference.
//! The embedded English data is parsed on each call to the `english`
//! constructors, so keep the result around instead of calling them in a loop.

use std::collections::{HashMap, HashSet};

use crate::TableError;

const WORDS_EN: &str = include_str!("../data/words_en.txt");
const LETTERS_EN: &str = include_str!("../data/letters_en.csv");
const BIGRAMS_EN: &str = include_str!("../data/bigrams_en.csv");

/// Upper-cases a single character, keeping it unchanged if its upper-case
/// form spans several characters.
pub(crate) fn upper_char(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

fn upper(s: &str) -> String {
    s.chars().map(upper_char).collect()
}

/// A set of known words, stored upper-case.
///
/// # Examples
///
/// ```
/// use pathgrid_search::Dictionary;
///
/// let dict = Dictionary::new(["hello", "World"]);
/// assert!(dict.contains("HELLO"));
/// assert!(dict.contains("world"));
/// assert!(!dict.contains("planet"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: HashSet<String>,
}

impl Dictionary {
    /// Builds a dictionary from words. Blank entries are skipped.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| upper(w.as_ref().trim()))
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    /// Builds a dictionary from a word list, one word per line.
    ///
    /// Lines starting with `#` are comments.
    #[must_use]
    pub fn from_word_list(list: &str) -> Self {
        Self::new(list.lines().filter(|line| !line.trim_start().starts_with('#')))
    }

    /// The embedded English word list.
    #[must_use]
    pub fn english() -> Self {
        Self::from_word_list(WORDS_EN)
    }

    /// Returns `true` if `word` is known, ignoring case.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        if word.chars().all(|c| upper_char(c) == c) {
            self.words.contains(word)
        } else {
            self.words.contains(&upper(word))
        }
    }

    /// Number of words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if the dictionary has no words.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// N-gram weights, keyed by upper-case n-gram.
///
/// Weights are relative; they need not sum to any particular total.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrequencyTable {
    weights: HashMap<String, f64>,
}

impl FrequencyTable {
    /// Builds a table from `(n-gram, weight)` pairs.
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: AsRef<str>,
    {
        let weights = entries
            .into_iter()
            .map(|(key, weight)| (upper(key.as_ref()), weight))
            .collect();
        Self { weights }
    }

    /// Parses `key,weight` lines. Blank lines are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`TableError`] for lines without a comma or with a weight that
    /// is not a finite, non-negative number.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathgrid_search::FrequencyTable;
    ///
    /// let table = FrequencyTable::parse("E,12.7\nT,9.1\n")?;
    /// assert_eq!(table.weight("e"), Some(12.7));
    /// assert_eq!(table.len(), 2);
    /// # Ok::<(), pathgrid_search::TableError>(())
    /// ```
    pub fn parse(csv: &str) -> Result<Self, TableError> {
        let mut weights = HashMap::new();
        for (i, line) in csv.lines().enumerate() {
            let line_no = i + 1;
            if line.trim().is_empty() {
                continue;
            }
            let (key, value) = line.split_once(',').ok_or_else(|| TableError::Malformed {
                line: line_no,
                content: line.to_owned(),
            })?;
            let weight = value
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|w| w.is_finite() && *w >= 0.0)
                .ok_or_else(|| TableError::InvalidWeight {
                    line: line_no,
                    value: value.trim().to_owned(),
                })?;
            weights.insert(upper(key.trim()), weight);
        }
        Ok(Self { weights })
    }

    /// Embedded English single-letter frequencies.
    ///
    /// # Panics
    ///
    /// Panics if the embedded table is malformed.
    #[must_use]
    pub fn english_letters() -> Self {
        Self::parse(LETTERS_EN).unwrap_or_else(|err| panic!("embedded letter table: {err}"))
    }

    /// Embedded frequencies of the 50 most common English bigrams.
    ///
    /// # Panics
    ///
    /// Panics if the embedded table is malformed.
    #[must_use]
    pub fn english_bigrams() -> Self {
        Self::parse(BIGRAMS_EN).unwrap_or_else(|err| panic!("embedded bigram table: {err}"))
    }

    /// Returns the weight of `key`, ignoring case.
    #[must_use]
    pub fn weight(&self, key: &str) -> Option<f64> {
        self.weights.get(&upper(key)).copied()
    }

    /// Sum of all weights.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.weights.values().sum()
    }

    /// Number of n-grams.
    #[must_use]
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Returns `true` if the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// The most frequent n-grams whose cumulative share first reaches
    /// `quantile` (0.0 to 1.0).
    ///
    /// Keys are taken in descending weight order, ties alphabetically, until
    /// the share of the keys taken so far is at least `quantile`.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathgrid_search::FrequencyTable;
    ///
    /// let table = FrequencyTable::new([("A", 5.0), ("B", 3.0), ("C", 2.0)]);
    /// let top = table.top_quantile(0.75);
    /// assert!(top.contains("A") && top.contains("B") && !top.contains("C"));
    /// ```
    #[must_use]
    pub fn top_quantile(&self, quantile: f64) -> HashSet<String> {
        let total = self.total();
        let mut sorted: Vec<_> = self.weights.iter().collect();
        sorted.sort_by(|(ka, wa), (kb, wb)| wb.total_cmp(wa).then_with(|| ka.cmp(kb)));

        let mut share = 0.0;
        let mut top = HashSet::new();
        for (key, weight) in sorted {
            if share >= quantile {
                break;
            }
            top.insert(key.clone());
            share += weight / total;
        }
        top
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_tables_load() {
        assert!(Dictionary::english().contains("cipher"));
        assert!(Dictionary::english().len() > 200);
        assert_eq!(FrequencyTable::english_letters().len(), 26);
        assert_eq!(FrequencyTable::english_bigrams().len(), 50);
    }

    #[test]
    fn test_word_list_skips_comments_and_blanks() {
        let dict = Dictionary::from_word_list("# header\nalpha\n\n  beta  \n");
        assert_eq!(dict.len(), 2);
        assert!(dict.contains("BETA"));
    }

    #[test]
    fn test_dictionary_upper_cases_non_ascii() {
        let dict = Dictionary::new(["häkä"]);
        assert!(dict.contains("HÄKÄ"));
        assert!(dict.contains("Häkä"));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            FrequencyTable::parse("A,1\nB"),
            Err(TableError::Malformed {
                line: 2,
                content: "B".into()
            })
        );
        assert_eq!(
            FrequencyTable::parse("A,-1"),
            Err(TableError::InvalidWeight {
                line: 1,
                value: "-1".into()
            })
        );
        assert_eq!(
            FrequencyTable::parse("A,lots"),
            Err(TableError::InvalidWeight {
                line: 1,
                value: "lots".into()
            })
        );
    }

    #[test]
    fn test_english_top_letters() {
        let top = FrequencyTable::english_letters().top_quantile(0.75);
        let mut letters: Vec<_> = top.into_iter().collect();
        letters.sort();
        assert_eq!(letters, ["A", "D", "E", "H", "I", "L", "N", "O", "R", "S", "T"]);
    }

    #[test]
    fn test_top_quantile_of_empty_table() {
        assert!(FrequencyTable::default().top_quantile(0.75).is_empty());
    }
}
