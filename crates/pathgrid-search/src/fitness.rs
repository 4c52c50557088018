//! Language plausibility scores.
//!
//! A [`Fitness`] maps a candidate text to a score where higher means "more
//! like natural-language text". Searches only compare scores produced by the
//! same fitness, so the scale is up to each implementation.

use std::{collections::HashSet, fmt};

use crate::{Dictionary, FrequencyTable, SearchError, tables::upper_char};

/// Share of the reference frequency mass used to pick "common" n-grams.
const TOP_QUANTILE: f64 = 0.75;

/// A text plausibility score.
pub trait Fitness: fmt::Debug + Send + Sync {
    /// Returns the name of the score.
    fn name(&self) -> &'static str;

    /// Scores `text`. Higher is more plausible.
    ///
    /// Implementations return `0.0` for empty text; use [`score_text`] to
    /// reject it instead.
    fn score(&self, text: &str) -> f64;
}

/// A boxed fitness.
pub type BoxedFitness = Box<dyn Fitness>;

/// Scores `text`, rejecting empty input.
///
/// # Errors
///
/// Returns [`SearchError::EmptyInput`] if `text` is empty.
pub fn score_text(fitness: &dyn Fitness, text: &str) -> Result<f64, SearchError> {
    if text.is_empty() {
        return Err(SearchError::EmptyInput);
    }
    Ok(fitness.score(text))
}

/// A fitness backed by a closure.
///
/// Created by [`fitness_fn`].
pub struct FnFitness<F> {
    name: &'static str,
    f: F,
}

impl<F> fmt::Debug for FnFitness<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnFitness")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl<F> Fitness for FnFitness<F>
where
    F: Fn(&str) -> f64 + Send + Sync,
{
    fn name(&self) -> &'static str {
        self.name
    }

    fn score(&self, text: &str) -> f64 {
        (self.f)(text)
    }
}

/// Wraps a closure as a named [`Fitness`].
///
/// # Examples
///
/// ```
/// use pathgrid_search::{Fitness as _, fitness_fn};
///
/// let vowels = fitness_fn("vowels", |text| {
///     text.chars().filter(|c| "AEIOU".contains(*c)).count() as f64
/// });
/// assert_eq!(vowels.name(), "vowels");
/// assert_eq!(vowels.score("BANANA"), 3.0);
/// ```
pub fn fitness_fn<F>(name: &'static str, f: F) -> FnFitness<F>
where
    F: Fn(&str) -> f64 + Send + Sync,
{
    FnFitness { name, f }
}

/// Share of the text covered by dictionary words.
///
/// The text is scanned left to right. At each position, word lengths from
/// `min_len` to `max_len` are tried shortest first; the first known word wins
/// and the scan continues after it. There is no backtracking. The score is
/// the number of covered characters (at least 1) divided by the text length.
///
/// # Examples
///
/// ```
/// use pathgrid_search::{Dictionary, Fitness as _, WordFitness};
///
/// let fitness = WordFitness::new(Dictionary::new(["HELLO", "WORLD"]));
/// assert_eq!(fitness.score("helloworld"), 1.0);
/// assert_eq!(fitness.score("xxhelloxxx"), 0.5);
/// ```
#[derive(Debug, Clone)]
pub struct WordFitness {
    dictionary: Dictionary,
    min_len: usize,
    max_len: usize,
}

impl WordFitness {
    /// Shortest word length considered by default.
    pub const DEFAULT_MIN_LEN: usize = 3;
    /// Longest word length considered by default.
    pub const DEFAULT_MAX_LEN: usize = 12;

    /// Creates a word fitness over `dictionary` with the default word lengths.
    #[must_use]
    pub fn new(dictionary: Dictionary) -> Self {
        Self {
            dictionary,
            min_len: Self::DEFAULT_MIN_LEN,
            max_len: Self::DEFAULT_MAX_LEN,
        }
    }

    /// A word fitness over the embedded English word list.
    #[must_use]
    pub fn english() -> Self {
        Self::new(Dictionary::english())
    }

    /// Sets the range of word lengths tried at each position.
    ///
    /// # Panics
    ///
    /// Panics if `min_len` is zero or greater than `max_len`.
    #[must_use]
    pub fn with_word_lengths(mut self, min_len: usize, max_len: usize) -> Self {
        assert!(
            min_len > 0 && min_len <= max_len,
            "invalid word length range {min_len}..={max_len}"
        );
        self.min_len = min_len;
        self.max_len = max_len;
        self
    }

    /// Returns the dictionary.
    #[must_use]
    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Number of characters covered by the greedy word scan.
    #[must_use]
    pub fn matched_chars(&self, text: &str) -> usize {
        let chars: Vec<char> = text.chars().map(upper_char).collect();
        let mut word = String::with_capacity(self.max_len * 4);
        let mut matched = 0;
        let mut pos = 0;

        while pos + self.min_len <= chars.len() {
            let longest = self.max_len.min(chars.len() - pos);
            let found = (self.min_len..=longest).find(|&len| {
                word.clear();
                word.extend(&chars[pos..pos + len]);
                self.dictionary.contains(&word)
            });
            match found {
                Some(len) => {
                    matched += len;
                    pos += len;
                }
                None => pos += 1,
            }
        }
        matched
    }
}

impl Fitness for WordFitness {
    fn name(&self) -> &'static str {
        "words"
    }

    #[expect(clippy::cast_precision_loss)]
    fn score(&self, text: &str) -> f64 {
        let len = text.chars().count();
        if len == 0 {
            return 0.0;
        }
        self.matched_chars(text).max(1) as f64 / len as f64
    }
}

/// Share of characters that are among the most frequent letters.
///
/// The common letters are those covering 75% of the reference frequency mass.
///
/// # Examples
///
/// ```
/// use pathgrid_search::{Fitness as _, LetterFitness};
///
/// let fitness = LetterFitness::english();
/// assert!(fitness.score("hello world") > fitness.score("uibyl jhboli"));
/// ```
#[derive(Debug, Clone)]
pub struct LetterFitness {
    common: HashSet<char>,
}

impl LetterFitness {
    /// Creates a letter fitness from a single-letter frequency table.
    #[must_use]
    pub fn new(table: &FrequencyTable) -> Self {
        let common = table
            .top_quantile(TOP_QUANTILE)
            .into_iter()
            .filter_map(|key| {
                let mut chars = key.chars();
                chars.next().filter(|_| chars.next().is_none())
            })
            .collect();
        Self { common }
    }

    /// A letter fitness over the embedded English frequencies.
    #[must_use]
    pub fn english() -> Self {
        Self::new(&FrequencyTable::english_letters())
    }
}

impl Fitness for LetterFitness {
    fn name(&self) -> &'static str {
        "letters"
    }

    #[expect(clippy::cast_precision_loss)]
    fn score(&self, text: &str) -> f64 {
        let len = text.chars().count();
        if len == 0 {
            return 0.0;
        }
        let common = text
            .chars()
            .filter(|c| self.common.contains(&upper_char(*c)))
            .count();
        common as f64 / len as f64
    }
}

/// Share of adjacent character pairs that are among the most frequent bigrams.
///
/// Texts shorter than two characters score `0.0`.
#[derive(Debug, Clone)]
pub struct BigramFitness {
    common: HashSet<String>,
}

impl BigramFitness {
    /// Creates a bigram fitness from a bigram frequency table.
    #[must_use]
    pub fn new(table: &FrequencyTable) -> Self {
        Self {
            common: table.top_quantile(TOP_QUANTILE),
        }
    }

    /// A bigram fitness over the embedded English frequencies.
    #[must_use]
    pub fn english() -> Self {
        Self::new(&FrequencyTable::english_bigrams())
    }
}

impl Fitness for BigramFitness {
    fn name(&self) -> &'static str {
        "bigrams"
    }

    #[expect(clippy::cast_precision_loss)]
    fn score(&self, text: &str) -> f64 {
        let chars: Vec<char> = text.chars().map(upper_char).collect();
        if chars.len() < 2 {
            return 0.0;
        }
        let mut pair = String::with_capacity(8);
        let common = chars
            .windows(2)
            .filter(|w| {
                pair.clear();
                pair.extend(*w);
                self.common.contains(&pair)
            })
            .count();
        common as f64 / (chars.len() - 1) as f64
    }
}
