//! CLI argument definitions using clap derive

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "invt")]
#[command(author, version, about = "Interactive parts and products inventory")]
#[command(
    long_about = "An interactive terminal application for maintaining an in-memory catalog of \
parts and assembled products. All state lives for the duration of one session; nothing is persisted."
)]
pub struct Cli {
    /// Preload the sample catalog
    #[arg(long)]
    pub seed: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Maximum table width in columns
    #[arg(long, value_name = "COLS")]
    pub width: Option<usize>,

    /// Path to a config file (default: ~/.config/invt/config.yaml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}
