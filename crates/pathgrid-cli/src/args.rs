use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use pathgrid_core::Path;

/// Grid-transposition toolkit for puzzle ciphers.
#[derive(Debug, Parser)]
#[command(author, version, about)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// Print the order in which a path visits the cells of a grid.
    Walk {
        #[command(flatten)]
        grid: GridArgs,

        /// Path to walk, as `family@origin` (e.g. `spiral-cw-in@top-left`).
        #[arg(short, long, value_name = "PATH")]
        path: Path,
    },

    /// Write text into a grid along a path and print the grid.
    Grid {
        #[command(flatten)]
        grid: GridArgs,

        /// Path to write along, as `family@origin`.
        #[arg(short, long, value_name = "PATH")]
        path: Path,

        #[command(flatten)]
        input: InputArgs,
    },

    /// Write text along one path and read it back along another.
    Transform(TransformArgs),

    /// Undo `transform` with the same arguments.
    Decode(TransformArgs),

    /// Try every write/read path combination and report the best.
    Search {
        #[command(flatten)]
        grid: GridArgs,

        /// Plausibility score used to rank candidates.
        #[arg(short, long, value_name = "KIND", default_value = "words")]
        fitness: FitnessKind,

        /// Word list (one word per line) for the `words` fitness.
        #[arg(long, value_name = "FILE")]
        dictionary: Option<PathBuf>,

        /// Frequency table (`key,weight` lines) for the `letters` and
        /// `bigrams` fitnesses.
        #[arg(long, value_name = "FILE")]
        table: Option<PathBuf>,

        /// Number of best combinations to print.
        #[arg(short = 'n', long, value_name = "COUNT", default_value_t = 1)]
        top: usize,

        #[command(flatten)]
        input: InputArgs,
    },

    /// Keyed columnar transposition.
    Columnar {
        #[command(subcommand)]
        command: ColumnarCommand,
    },
}

#[derive(Debug, Subcommand)]
pub(crate) enum ColumnarCommand {
    /// Encode text under a key.
    Encode {
        /// The transposition key.
        #[arg(short, long)]
        key: String,

        #[command(flatten)]
        input: InputArgs,
    },
    /// Decode text encoded under a key.
    Decode {
        /// The transposition key.
        #[arg(short, long)]
        key: String,

        #[command(flatten)]
        input: InputArgs,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum FitnessKind {
    /// Share of the text covered by dictionary words.
    Words,
    /// Share of common letters.
    Letters,
    /// Share of common letter pairs.
    Bigrams,
}

#[derive(Debug, Args)]
pub(crate) struct GridArgs {
    /// Number of grid rows.
    #[arg(short, long, value_name = "ROWS")]
    pub(crate) rows: usize,

    /// Number of grid columns.
    #[arg(short, long, value_name = "COLS")]
    pub(crate) cols: usize,
}

#[derive(Debug, Args)]
pub(crate) struct InputArgs {
    /// Character used to pad the last block.
    #[arg(long, value_name = "CHAR")]
    pub(crate) filler: Option<char>,

    /// Input text. Read from standard input when omitted.
    #[arg(value_name = "TEXT")]
    pub(crate) text: Option<String>,
}

#[derive(Debug, Args)]
pub(crate) struct TransformArgs {
    #[command(flatten)]
    pub(crate) grid: GridArgs,

    /// Path the text is written along, as `family@origin`.
    #[arg(short, long, value_name = "PATH")]
    pub(crate) write: Path,

    /// Path the grid is read back along, as `family@origin`.
    #[arg(short = 'R', long, value_name = "PATH")]
    pub(crate) read: Path,

    #[command(flatten)]
    pub(crate) input: InputArgs,
}
