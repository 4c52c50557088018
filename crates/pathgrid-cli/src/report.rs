use std::io::{self, Write};

use pathgrid_core::{Grid, GridSize, Path};
use pathgrid_search::{PathSearchResult, PathSearcher, SearchStats};

pub(crate) fn print_walk(out: &mut dyn Write, size: GridSize, path: Path) -> io::Result<()> {
    let mut order = Grid::filled(size, 0);
    let mut positions = Vec::with_capacity(size.cells());
    for (step, pos) in path.walk(size).enumerate() {
        order[pos] = step;
        positions.push(pos.to_string());
    }
    let width = (size.cells() - 1).to_string().len();

    writeln!(out, "Path:")?;
    writeln!(out, "  {path} on {size}")?;
    writeln!(out)?;

    writeln!(out, "Order:")?;
    for row in order.rows() {
        let cells: Vec<_> = row.iter().map(|step| format!("{step:>width$}")).collect();
        writeln!(out, "  {}", cells.join(" "))?;
    }
    writeln!(out)?;

    writeln!(out, "Positions:")?;
    writeln!(out, "  {}", positions.join(" "))
}

pub(crate) fn print_best(
    out: &mut dyn Write,
    searcher: &PathSearcher<'_>,
    best: &PathSearchResult,
    stats: &SearchStats,
) -> io::Result<()> {
    writeln!(out, "Text:")?;
    writeln!(out, "  {}", best.text)?;
    writeln!(out)?;

    writeln!(out, "Paths:")?;
    writeln!(out, "  write: {}", best.write)?;
    writeln!(out, "  read: {}", best.read)?;
    writeln!(out)?;

    writeln!(out, "Score:")?;
    writeln!(out, "  {}: {:.4}", searcher.fitness().name(), best.score)?;
    writeln!(out)?;

    writeln!(out, "Stats:")?;
    writeln!(out, "  grid: {}", searcher.size())?;
    writeln!(out, "  evaluated: {}", stats.evaluated())?;
    writeln!(out, "  improvements: {}", stats.improvements())
}

pub(crate) fn print_ranked(
    out: &mut dyn Write,
    searcher: &PathSearcher<'_>,
    ranked: &[PathSearchResult],
) -> io::Result<()> {
    writeln!(out, "Ranking ({} on {}):", searcher.fitness().name(), searcher.size())?;
    for (i, result) in ranked.iter().enumerate() {
        writeln!(
            out,
            "  {:>3}. {:.4}  {} -> {}  {}",
            i + 1,
            result.score,
            result.write,
            result.read,
            result.text
        )?;
    }
    Ok(())
}
