//! Brute-force path search for grid transposition ciphers.
//!
//! Given a ciphertext and a grid size, [`PathSearcher`] tries every
//! combination of write path and read path, scores each transformed text
//! with a [`Fitness`], and reports the best one.
//!
//! # Fitness functions
//!
//! - [`WordFitness`]: share of the text covered by dictionary words (default)
//! - [`LetterFitness`]: share of common letters
//! - [`BigramFitness`]: share of common letter pairs
//! - [`fitness_fn`]: any closure
//!
//! Reference data ([`Dictionary`], [`FrequencyTable`]) is passed in
//! explicitly; embedded English tables are available through the `english`
//! constructors.
//!
//! # Examples
//!
//! ```
//! use pathgrid_core::GridSize;
//! use pathgrid_search::{Dictionary, PathSearcher, WordFitness};
//!
//! let fitness = WordFitness::new(Dictionary::new(["RENDEZVOUS"]));
//! let searcher = PathSearcher::new(GridSize::new(2, 5)?, &fitness);
//!
//! // "RENDEZVOUS" written row by row, read column by column.
//! let best = searcher.search("RZEVNODUES")?;
//! assert_eq!(best.score, 1.0);
//! assert_eq!(best.text, "RENDEZVOUS");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use self::{
    error::{SearchError, TableError},
    fitness::{
        BigramFitness, BoxedFitness, Fitness, FnFitness, LetterFitness, WordFitness, fitness_fn,
        score_text,
    },
    searcher::{PathSearchResult, PathSearcher, SearchStats, find_best_path},
    tables::{Dictionary, FrequencyTable},
};

mod error;
mod fitness;
mod searcher;
mod tables;
