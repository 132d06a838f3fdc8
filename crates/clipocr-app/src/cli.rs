use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "clipocr", version, about = "Recognize text in clipboard images")]
pub struct Cli {
    /// JSON config file; defaults are used for missing fields
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}
