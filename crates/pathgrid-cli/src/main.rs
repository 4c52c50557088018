//! Command-line front end for the pathgrid workspace.
//!
//! # Usage
//!
//! Show how a path walks a grid:
//!
//! ```sh
//! pathgrid walk --rows 3 --cols 3 --path spiral-cw-in@top-left
//! ```
//!
//! Encode with one write path and one read path, then decode again:
//!
//! ```sh
//! pathgrid transform -r 3 -c 3 -w spiral-cw-in@bottom-right -R rows@top-left ABCDEFGHI
//! pathgrid decode -r 3 -c 3 -w spiral-cw-in@bottom-right -R rows@top-left EFGDIHCBA
//! ```
//!
//! Search all 1024 path combinations for the most plausible decoding:
//!
//! ```sh
//! pathgrid search -r 4 -c 4 --fitness words --top 5 EHTQKCIUWORBXOFN
//! ```
//!
//! Set `RUST_LOG=debug` to log every improvement found during a search.

use std::{
    fs,
    io::{self, Write},
    path::PathBuf,
    process,
};

use clap::Parser as _;
use pathgrid_cipher::{Transposer, columnar_decode, columnar_encode};
use pathgrid_core::{GridError, GridSize};
use pathgrid_search::{
    BigramFitness, BoxedFitness, Dictionary, FrequencyTable, LetterFitness, PathSearcher,
    SearchStats, WordFitness,
};

use crate::{
    args::{Cli, ColumnarCommand, Command, FitnessKind, GridArgs, InputArgs, TransformArgs},
    error::CliError,
};

mod args;
mod error;
mod report;

fn main() {
    better_panic::install();
    env_logger::init();

    let cli = Cli::parse();
    if let Err(err) = run(cli.command, &mut io::stdout().lock()) {
        eprintln!("error: {err}");
        process::exit(1);
    }
}

fn run(command: Command, out: &mut dyn Write) -> Result<(), CliError> {
    match command {
        Command::Walk { grid, path } => {
            report::print_walk(out, grid.size()?, path)?;
        }
        Command::Grid { grid, path, input } => {
            let mut transposer = Transposer::new(grid.size()?, path, path);
            if let Some(filler) = input.filler {
                transposer = transposer.with_filler(filler);
            }
            let text = input.read_text()?;
            for (i, grid) in transposer.write_grids(&text).enumerate() {
                if i > 0 {
                    writeln!(out)?;
                }
                writeln!(out, "{grid}")?;
            }
        }
        Command::Transform(args) => {
            let (transposer, text) = args.into_parts()?;
            writeln!(out, "{}", transposer.transform(&text))?;
        }
        Command::Decode(args) => {
            let (transposer, text) = args.into_parts()?;
            writeln!(out, "{}", transposer.inverse().transform(&text))?;
        }
        Command::Search {
            grid,
            fitness,
            dictionary,
            table,
            top,
            input,
        } => {
            let size = grid.size()?;
            let fitness = build_fitness(fitness, dictionary, table)?;
            let text = input.read_text()?;
            let mut searcher = PathSearcher::new(size, fitness.as_ref());
            if let Some(filler) = input.filler {
                searcher = searcher.with_filler(filler);
            }

            if top <= 1 {
                let mut stats = SearchStats::default();
                let best = searcher.search_with_stats(&text, &mut stats)?;
                report::print_best(out, &searcher, &best, &stats)?;
            } else {
                let ranked = searcher.rank(&text, top)?;
                report::print_ranked(out, &searcher, &ranked)?;
            }
        }
        Command::Columnar { command } => match command {
            ColumnarCommand::Encode { key, input } => {
                let text = input.read_text()?;
                writeln!(out, "{}", columnar_encode(&text, &key, input.filler)?)?;
            }
            ColumnarCommand::Decode { key, input } => {
                if input.filler.is_some() {
                    log::warn!("--filler is ignored when decoding");
                }
                let text = input.read_text()?;
                writeln!(out, "{}", columnar_decode(&text, &key)?)?;
            }
        },
    }
    Ok(())
}

fn build_fitness(
    kind: FitnessKind,
    dictionary: Option<PathBuf>,
    table: Option<PathBuf>,
) -> Result<BoxedFitness, CliError> {
    if kind == FitnessKind::Words && table.is_some() {
        log::warn!("--table is ignored by the words fitness");
    }
    if kind != FitnessKind::Words && dictionary.is_some() {
        log::warn!("--dictionary is only used by the words fitness");
    }

    let fitness: BoxedFitness = match kind {
        FitnessKind::Words => {
            let dictionary = match dictionary {
                Some(path) => Dictionary::from_word_list(&read_file(&path)?),
                None => Dictionary::english(),
            };
            log::debug!("dictionary has {} words", dictionary.len());
            Box::new(WordFitness::new(dictionary))
        }
        FitnessKind::Letters => match table {
            Some(path) => Box::new(LetterFitness::new(&load_table(path)?)),
            None => Box::new(LetterFitness::english()),
        },
        FitnessKind::Bigrams => match table {
            Some(path) => Box::new(BigramFitness::new(&load_table(path)?)),
            None => Box::new(BigramFitness::english()),
        },
    };
    Ok(fitness)
}

fn read_file(path: &std::path::Path) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_owned(),
        source,
    })
}

fn load_table(path: PathBuf) -> Result<FrequencyTable, CliError> {
    let content = read_file(&path)?;
    let table =
        FrequencyTable::parse(&content).map_err(|source| CliError::Table { path, source })?;
    log::debug!("frequency table has {} entries", table.len());
    Ok(table)
}

impl GridArgs {
    fn size(&self) -> Result<GridSize, GridError> {
        GridSize::new(self.rows, self.cols)
    }
}

impl InputArgs {
    fn read_text(&self) -> Result<String, CliError> {
        if let Some(text) = &self.text {
            return Ok(text.clone());
        }
        let text = io::read_to_string(io::stdin()).map_err(CliError::Stdin)?;
        Ok(text.trim_end_matches(['\r', '\n']).to_owned())
    }
}

impl TransformArgs {
    fn into_parts(self) -> Result<(Transposer, String), CliError> {
        let mut transposer = Transposer::new(self.grid.size()?, self.write, self.read);
        if let Some(filler) = self.input.filler {
            transposer = transposer.with_filler(filler);
        }
        Ok((transposer, self.input.read_text()?))
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser as _;

    use super::*;

    fn run_args(args: &[&str]) -> Result<String, CliError> {
        let cli = Cli::try_parse_from(std::iter::once("pathgrid").chain(args.iter().copied()))
            .unwrap();
        let mut out = Vec::new();
        run(cli.command, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    fn transform_args<'a>(command: &'a str, rows: &'a str, text: &'a str) -> Vec<&'a str> {
        vec![
            command,
            "-r",
            rows,
            "-c",
            "3",
            "-w",
            "spiral-cw-in@bottom-right",
            "-R",
            "rows@top-left",
            text,
        ]
    }

    #[test]
    fn test_walk() {
        let out = run_args(&["walk", "-r", "2", "-c", "2", "-p", "snake-rows@top-left"]).unwrap();
        assert_eq!(
            out,
            "Path:\n  snake-rows@top-left on 2x2\n\n\
             Order:\n  0 1\n  3 2\n\n\
             Positions:\n  (0, 0) (0, 1) (1, 1) (1, 0)\n"
        );
    }

    #[test]
    fn test_grid_pads_last_block() {
        let out = run_args(&[
            "grid",
            "-r",
            "3",
            "-c",
            "3",
            "-p",
            "spiral-cw-in@bottom-right",
            "--filler",
            "*",
            "ABCDEFGHIJ",
        ])
        .unwrap();
        assert_eq!(out, "EFG\nDIH\nCBA\n\n***\n***\n**J\n");
    }

    #[test]
    fn test_transform_then_decode() {
        let out = run_args(&transform_args("transform", "3", "ABCDEFGHI")).unwrap();
        assert_eq!(out, "EFGDIHCBA\n");
        let out = run_args(&transform_args("decode", "3", "EFGDIHCBA")).unwrap();
        assert_eq!(out, "ABCDEFGHI\n");
    }

    #[test]
    fn test_search_top_n() {
        let args = ["search", "-r", "1", "-c", "3", "-f", "letters", "-n", "2", "XEX"];
        let out = run_args(&args).unwrap();
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(
            lines,
            [
                "Ranking (letters on 1x3):",
                "    1. 0.3333  rows@top-left -> rows@top-left  XEX",
                "    2. 0.3333  rows@top-left -> rows@top-right  XEX",
            ]
        );
    }

    #[test]
    fn test_search_best() {
        let out = run_args(&["search", "-r", "1", "-c", "3", "-f", "letters", "XEX"]).unwrap();
        assert!(out.starts_with("Text:\n  XEX\n"));
        assert!(out.contains("  letters: 0.3333\n"));
        assert!(out.contains("  evaluated: 1024\n"));
    }

    #[test]
    fn test_columnar_round_trip() {
        let out = run_args(&["columnar", "encode", "-k", "somekey", "this is a test"]).unwrap();
        assert_eq!(out, "stis ei hat st\n");
        let out = run_args(&["columnar", "decode", "-k", "somekey", "stis ei hat st"]).unwrap();
        assert_eq!(out, "this is a test\n");
    }

    #[test]
    fn test_errors() {
        assert!(matches!(
            run_args(&transform_args("transform", "0", "ABC")),
            Err(CliError::Grid(GridError::InvalidDimensions { rows: 0, cols: 3 }))
        ));

        let args = ["search", "-r", "2", "-c", "2", "--dictionary", "/nonexistent/words", "ABCD"];
        assert!(matches!(run_args(&args), Err(CliError::Read { .. })));

        assert!(matches!(
            run_args(&["columnar", "encode", "-k", "", "abc"]),
            Err(CliError::Columnar(_))
        ));
    }
}
