use std::path::PathBuf;

use clap::Parser;
use log::Level;

/// Renders a 5x5 identicon for INPUT and writes it as <INPUT>.png.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    /// Text to derive the identicon from.
    #[arg(default_value = "bart")]
    pub input: String,

    /// Directory that receives the PNG. Must already exist.
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Log verbosity; RUST_LOG takes precedence.
    #[arg(long, default_value_t = Level::Info)]
    pub log_level: Level,
}
