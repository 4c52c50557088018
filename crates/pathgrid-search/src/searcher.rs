use pathgrid_cipher::Transposer;
use pathgrid_core::{GridSize, Path};

use crate::{Fitness, SearchError};

/// The outcome of scoring one write/read path combination.
#[derive(Debug, Clone, PartialEq)]
pub struct PathSearchResult {
    /// Fitness of [`text`](Self::text).
    pub score: f64,
    /// The input transformed through the grid.
    pub text: String,
    /// Path the input was written along (the output path of the transform).
    pub write: Path,
    /// Path the grid was read back along (the input path of the transform).
    pub read: Path,
    /// Grid dimensions of the search.
    pub size: GridSize,
    /// Character the final block was padded with.
    pub filler: char,
}

impl PathSearchResult {
    /// Rebuilds the transposer that produced this result.
    #[must_use]
    pub fn transposer(&self) -> Transposer {
        Transposer::new(self.size, self.write, self.read).with_filler(self.filler)
    }
}

/// Counters collected during a search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    evaluated: usize,
    improvements: usize,
}

impl SearchStats {
    /// Number of path combinations scored.
    #[must_use]
    pub fn evaluated(&self) -> usize {
        self.evaluated
    }

    /// Number of times the running best was replaced, including the first
    /// candidate.
    #[must_use]
    pub fn improvements(&self) -> usize {
        self.improvements
    }
}

/// Exhaustive search over every write/read path combination.
///
/// Combinations are tried in a fixed order: write path family, write origin,
/// read path family, read origin, each in the order of [`Path::ALL`]. A
/// candidate replaces the running best only if it scores strictly higher, so
/// the first combination reaching the maximum wins. Candidates scoring NaN
/// never win unless every candidate does.
///
/// # Examples
///
/// ```
/// use pathgrid_cipher::Transposer;
/// use pathgrid_core::{GridSize, Origin, Path, PathFamily};
/// use pathgrid_search::{PathSearcher, fitness_fn};
///
/// let size = GridSize::new(3, 4)?;
/// let plain = "ATTACKATDAWN";
/// let cipher = Transposer::new(
///     size,
///     Path::new(PathFamily::SpiralClockwiseInward, Origin::TopLeft),
///     Path::new(PathFamily::Columns, Origin::BottomRight),
/// )
/// .transform(plain);
///
/// let exact = fitness_fn("exact", |text| if text == plain { 1.0 } else { 0.0 });
/// let best = PathSearcher::new(size, &exact).search(&cipher)?;
/// assert_eq!(best.text, plain);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PathSearcher<'a> {
    size: GridSize,
    fitness: &'a dyn Fitness,
    filler: char,
}

impl<'a> PathSearcher<'a> {
    /// Number of combinations a search evaluates.
    pub const COMBINATIONS: usize = Path::ALL.len() * Path::ALL.len();

    /// Creates a searcher for a grid size and fitness.
    #[must_use]
    pub fn new(size: GridSize, fitness: &'a dyn Fitness) -> Self {
        Self {
            size,
            fitness,
            filler: Transposer::DEFAULT_FILLER,
        }
    }

    /// Sets the character used to pad the final block.
    #[must_use]
    pub fn with_filler(mut self, filler: char) -> Self {
        self.filler = filler;
        self
    }

    /// Returns the grid dimensions.
    #[must_use]
    pub fn size(&self) -> GridSize {
        self.size
    }

    /// Returns the fitness used to rank candidates.
    #[must_use]
    pub fn fitness(&self) -> &'a dyn Fitness {
        self.fitness
    }

    /// Iterates over every candidate transposer in search order.
    pub fn candidates(&self) -> impl Iterator<Item = Transposer> + use<> {
        let (size, filler) = (self.size, self.filler);
        Path::ALL.into_iter().flat_map(move |write| {
            Path::ALL
                .into_iter()
                .map(move |read| Transposer::new(size, write, read).with_filler(filler))
        })
    }

    fn evaluate(&self, transposer: &Transposer, text: &str) -> PathSearchResult {
        let transformed = transposer.transform(text);
        let score = self.fitness.score(&transformed);
        log::trace!(
            "{} -> {}: {score:.4}",
            transposer.write_path(),
            transposer.read_path()
        );
        PathSearchResult {
            score,
            text: transformed,
            write: transposer.write_path(),
            read: transposer.read_path(),
            size: transposer.size(),
            filler: transposer.filler(),
        }
    }

    /// Finds the best-scoring combination.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::EmptyInput`] if `text` is empty.
    pub fn search(&self, text: &str) -> Result<PathSearchResult, SearchError> {
        let mut stats = SearchStats::default();
        self.search_with_stats(text, &mut stats)
    }

    /// Finds the best-scoring combination, recording counters in `stats`.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::EmptyInput`] if `text` is empty.
    pub fn search_with_stats(
        &self,
        text: &str,
        stats: &mut SearchStats,
    ) -> Result<PathSearchResult, SearchError> {
        if text.is_empty() {
            return Err(SearchError::EmptyInput);
        }

        let mut best: Option<PathSearchResult> = None;
        for transposer in self.candidates() {
            let candidate = self.evaluate(&transposer, text);
            stats.evaluated += 1;
            if best.as_ref().is_none_or(|best| is_better(&candidate, best)) {
                log::debug!(
                    "new best {:.4}: {} -> {}: {:?}",
                    candidate.score,
                    candidate.write,
                    candidate.read,
                    candidate.text
                );
                stats.improvements += 1;
                best = Some(candidate);
            }
        }

        let Some(best) = best else {
            unreachable!("path search always has candidates");
        };
        log::info!(
            "searched {} combinations for {} grid, best score {:.4} ({} -> {})",
            stats.evaluated,
            self.size,
            best.score,
            best.write,
            best.read
        );
        Ok(best)
    }

    /// Returns the `n` best combinations, highest score first.
    ///
    /// Combinations with equal scores keep the search order. Candidates
    /// scoring NaN are dropped.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::EmptyInput`] if `text` is empty.
    pub fn rank(&self, text: &str, n: usize) -> Result<Vec<PathSearchResult>, SearchError> {
        if text.is_empty() {
            return Err(SearchError::EmptyInput);
        }

        let mut results: Vec<_> = self
            .candidates()
            .map(|transposer| self.evaluate(&transposer, text))
            .filter(|result| !result.score.is_nan())
            .collect();
        results.sort_by(|a, b| b.score.total_cmp(&a.score));
        results.truncate(n);
        Ok(results)
    }
}

fn is_better(candidate: &PathSearchResult, best: &PathSearchResult) -> bool {
    !candidate.score.is_nan() && (best.score.is_nan() || candidate.score > best.score)
}

/// Searches a `rows` x `cols` grid for the path combination that makes
/// `text` score best under `fitness`.
///
/// # Errors
///
/// Returns [`SearchError::Grid`] for zero dimensions and
/// [`SearchError::EmptyInput`] for empty text.
pub fn find_best_path(
    text: &str,
    rows: usize,
    cols: usize,
    fitness: &dyn Fitness,
) -> Result<PathSearchResult, SearchError> {
    let size = GridSize::new(rows, cols)?;
    PathSearcher::new(size, fitness).search(text)
}

#[cfg(test)]
mod tests {
    use pathgrid_core::{GridError, Origin, PathFamily};

    use super::*;
    use crate::fitness_fn;

    fn size(rows: usize, cols: usize) -> GridSize {
        GridSize::new(rows, cols).unwrap()
    }

    #[test]
    fn test_candidate_order() {
        let fitness = fitness_fn("zero", |_| 0.0);
        let searcher = PathSearcher::new(size(2, 2), &fitness);
        let candidates: Vec<_> = searcher.candidates().collect();
        assert_eq!(candidates.len(), PathSearcher::COMBINATIONS);
        assert_eq!(PathSearcher::COMBINATIONS, 1024);

        let rows_tl = Path::new(PathFamily::Rows, Origin::TopLeft);
        assert_eq!(candidates[0].write_path(), rows_tl);
        assert_eq!(candidates[0].read_path(), rows_tl);
        assert_eq!(
            candidates[1].read_path(),
            Path::new(PathFamily::Rows, Origin::TopRight)
        );
        assert_eq!(candidates[32].write_path(), Path::ALL[1]);
        assert_eq!(candidates[32].read_path(), rows_tl);
    }

    #[test]
    fn test_first_maximum_wins() {
        let fitness = fitness_fn("constant", |_| 0.5);
        let searcher = PathSearcher::new(size(2, 3), &fitness);
        let mut stats = SearchStats::default();
        let best = searcher.search_with_stats("ABCDEF", &mut stats).unwrap();

        let rows_tl = Path::new(PathFamily::Rows, Origin::TopLeft);
        assert_eq!(best.write, rows_tl);
        assert_eq!(best.read, rows_tl);
        assert_eq!(best.text, "ABCDEF");
        assert_eq!(stats.evaluated(), 1024);
        assert_eq!(stats.improvements(), 1);
    }

    #[test]
    fn test_strict_improvement_only() {
        // Scores every text by its first character, so several combinations
        // reach the maximum; the earliest one must be reported.
        let fitness = fitness_fn("first", |text| {
            f64::from(u32::from(text.chars().next().unwrap_or('\0')))
        });
        let searcher = PathSearcher::new(size(1, 3), &fitness);
        let best = searcher.search("ABC").unwrap();
        assert_eq!(best.text.chars().next(), Some('C'));
        assert_eq!(best.write, Path::new(PathFamily::Rows, Origin::TopLeft));
        assert_eq!(best.read, Path::new(PathFamily::Rows, Origin::TopRight));
    }

    #[test]
    fn test_empty_input() {
        let fitness = fitness_fn("zero", |_| 0.0);
        let searcher = PathSearcher::new(size(2, 2), &fitness);
        assert_eq!(searcher.search(""), Err(SearchError::EmptyInput));
        assert_eq!(searcher.rank("", 3), Err(SearchError::EmptyInput));
    }

    #[test]
    fn test_find_best_path_validates_dimensions() {
        let fitness = fitness_fn("zero", |_| 0.0);
        assert_eq!(
            find_best_path("ABC", 0, 3, &fitness),
            Err(SearchError::Grid(GridError::InvalidDimensions {
                rows: 0,
                cols: 3
            }))
        );
    }

    #[test]
    fn test_rank_keeps_search_order_on_ties() {
        let fitness = fitness_fn("constant", |_| 1.0);
        let searcher = PathSearcher::new(size(2, 2), &fitness);
        let ranked = searcher.rank("ABCD", 3).unwrap();
        let reads: Vec<_> = ranked.iter().map(|r| r.read).collect();
        assert_eq!(reads, &Path::ALL[..3]);
    }

    #[test]
    fn test_filler_is_used() {
        let fitness = fitness_fn("zero", |_| 0.0);
        let searcher = PathSearcher::new(size(2, 2), &fitness).with_filler('#');
        let best = searcher.search("ABCDE").unwrap();
        assert_eq!(best.text, "ABCDE###");
        assert_eq!(best.filler, '#');
        assert_eq!(best.transposer().transform("ABCDE"), "ABCDE###");
    }

    #[test]
    fn test_nan_scores_never_win() {
        let fitness = fitness_fn("nan-identity", |text| match text {
            "ABC" => f64::NAN,
            "CBA" => 1.0,
            _ => 0.0,
        });
        let searcher = PathSearcher::new(size(1, 3), &fitness);
        let best = searcher.search("ABC").unwrap();
        assert_eq!(best.text, "CBA");
        assert!((best.score - 1.0).abs() < f64::EPSILON);
        assert_eq!(searcher.rank("ABC", 1).unwrap()[0], best);
    }

    #[test]
    fn test_all_nan_falls_back_to_first_candidate() {
        let fitness = fitness_fn("nan", |_| f64::NAN);
        let searcher = PathSearcher::new(size(2, 2), &fitness);
        let mut stats = SearchStats::default();
        let best = searcher.search_with_stats("ABCD", &mut stats).unwrap();
        assert!(best.score.is_nan());
        assert_eq!(best.write, Path::ALL[0]);
        assert_eq!(best.read, Path::ALL[0]);
        assert_eq!(stats.improvements(), 1);
        assert!(searcher.rank("ABCD", 5).unwrap().is_empty());
    }

    #[test]
    fn test_result_rebuilds_its_transposer() {
        let plain = "ATTACKATDAWN";
        let cipher = Transposer::new(size(3, 4), Path::ALL[9], Path::ALL[22]).transform(plain);
        let exact = fitness_fn("exact", move |text| if text == plain { 1.0 } else { 0.0 });
        let best = PathSearcher::new(size(3, 4), &exact).search(&cipher).unwrap();
        assert_eq!(best.size, size(3, 4));
        assert_eq!(best.transposer().transform(&cipher), plain);
        assert_eq!(best.transposer().inverse().transform(plain), cipher);
    }
}
