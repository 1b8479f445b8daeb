use anyhow::{ensure, Context};
use clap::Parser;
use log::{debug, info};
use simple_logger::SimpleLogger;

use sparse_grid::{Fill, SparseMatrix, SparseView};

mod args;

use args::Args;

type DemoMatrix = SparseMatrix<i64, Fill<-1>>;

/// Writes `m[i][i] = i`, then `m[i][n - 1 - i] = n - 1 - i`.
fn write_diagonals(m: &mut DemoMatrix, n: i64) {
    for i in 0..n {
        m.row_mut(i).cell(i).set(i);
    }
    for i in 0..n {
        let j = n - 1 - i;
        m.row_mut(i).cell(j).set(j);
    }
}

/// Renders the square window `from..=to` on both axes, one line per row.
fn render_fragment(m: &DemoMatrix, from: i64, to: i64) -> sparse_grid::Result<Vec<String>> {
    let fragment = m.fragment(from..=to, from..=to)?;
    Ok(fragment
        .rows()
        .into_iter()
        .map(|row| {
            let line: Vec<String> = row.iter().map(|v| v.to_string()).collect();
            line.join(" ")
        })
        .collect())
}

fn print_cells<V: SparseView<i64, i64>>(view: V, sorted: bool) {
    let mut cells: Vec<_> = view.iter().collect();
    if sorted {
        cells.sort_unstable();
    }
    for (x, y, v) in cells {
        println!("{} {} {}", x, y, v);
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    SimpleLogger::new()
        .with_level(args.log_level)
        .init()
        .context("failed to initialize logger")?;
    debug!("{:?}", args);

    ensure!(args.size >= 0, "diagonal length must be non-negative, got {}", args.size);

    let mut matrix = DemoMatrix::new();
    write_diagonals(&mut matrix, args.size);
    info!("wrote diagonals of length {}", args.size);

    println!("Fragment [{0},{0}]..[{1},{1}]:", args.from, args.to);
    for line in render_fragment(&matrix, args.from, args.to)? {
        println!("{}", line);
    }

    // The diagonals share their middle cell when the length is odd.
    let expected = (2 * args.size - args.size % 2) as usize;
    println!("Occupied cells count: {}", matrix.size());
    ensure!(
        matrix.size() == expected,
        "expected {} occupied cells, found {}",
        expected,
        matrix.size()
    );

    if !args.hide_cells {
        println!("Occupied cells (x y v):");
        print_cells(&matrix, args.sorted);
    }
    Ok(())
}
