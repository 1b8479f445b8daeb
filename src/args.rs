use clap::Parser;
use log::LevelFilter;

#[derive(Parser, Debug)]
pub struct Args {
    /// Length of the two diagonals written into the matrix
    #[arg(short, long, default_value_t = 10)]
    pub size: i64,
    /// First row and column of the printed fragment
    #[arg(long, default_value_t = 1)]
    pub from: i64,
    /// Last row and column of the printed fragment
    #[arg(long, default_value_t = 8)]
    pub to: i64,
    /// Print occupied cells ordered by coordinates instead of storage order
    #[arg(long, default_value_t = false)]
    pub sorted: bool,
    /// Do not list the occupied cells
    #[arg(long, default_value_t = false)]
    pub hide_cells: bool,
    /// Logging verbosity
    #[arg(long, default_value_t = LevelFilter::Warn)]
    pub log_level: LevelFilter,
}
