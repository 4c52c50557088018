//! End-to-end recovery of grid-transposed plaintexts.

use pathgrid_cipher::Transposer;
use pathgrid_core::{GridSize, Origin, Path, PathFamily};
use pathgrid_search::{Dictionary, PathSearcher, SearchStats, WordFitness, fitness_fn};

const PLAIN: &str = "THEQUICKBROWNFOX";

fn encoder(size: GridSize) -> Transposer {
    Transposer::new(
        size,
        Path::new(PathFamily::SpiralClockwiseInward, Origin::TopLeft),
        Path::new(PathFamily::SnakeColumns, Origin::BottomRight),
    )
}

#[test]
fn test_recovers_every_encoding_of_a_block() {
    let size = GridSize::new(4, 4).unwrap();
    let exact = fitness_fn("exact", |text| if text == PLAIN { 1.0 } else { 0.0 });
    let searcher = PathSearcher::new(size, &exact);

    for write in [Path::ALL[5], Path::ALL[17], Path::ALL[30]] {
        for read in [Path::ALL[2], Path::ALL[26]] {
            let cipher = Transposer::new(size, write, read).transform(PLAIN);
            let best = searcher.search(&cipher).unwrap();
            assert_eq!(best.text, PLAIN, "{write} -> {read}");
            assert_eq!(best.transposer().transform(&cipher), PLAIN);
        }
    }
}

#[test]
fn test_word_fitness_finds_full_cover() {
    let size = GridSize::new(4, 4).unwrap();
    let cipher = encoder(size).transform(PLAIN);
    let fitness = WordFitness::new(Dictionary::new(["THEQUICK", "BROWNFOX"]));
    let mut stats = SearchStats::default();

    let best = PathSearcher::new(size, &fitness)
        .search_with_stats(&cipher, &mut stats)
        .unwrap();
    assert!((best.score - 1.0).abs() < f64::EPSILON);
    assert_eq!(best.transposer().transform(&cipher), best.text);
    assert_eq!(stats.evaluated(), PathSearcher::COMBINATIONS);
    assert!(stats.improvements() >= 1);
}

#[test]
fn test_multi_block_text() {
    let size = GridSize::new(2, 3).unwrap();
    let plain = "MEETMEATTHEOLDMILL";
    let cipher = encoder(size).transform(plain);
    assert_eq!(cipher.chars().count(), 18);

    let exact = fitness_fn("exact", move |text| if text == plain { 1.0 } else { 0.0 });
    let best = PathSearcher::new(size, &exact).search(&cipher).unwrap();
    assert_eq!(best.text, plain);
}

#[test]
fn test_search_is_deterministic() {
    let size = GridSize::new(3, 5).unwrap();
    let fitness = WordFitness::english();
    let searcher = PathSearcher::new(size, &fitness);
    let cipher = encoder(size).transform("MEETUSATTHEGATE");

    let first = searcher.search(&cipher).unwrap();
    let second = searcher.search(&cipher).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.score.to_bits(), second.score.to_bits());
}
