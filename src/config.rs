use std::path::PathBuf;

use clap::Parser;

/// File rewritten when none is given on the command line
pub const DEFAULT_TARGET: &str = "sample_map3.js";

/// Swap latitude/longitude order of coordinate pairs in a map data file
#[derive(Parser, Debug)]
#[command(name = "coord-swap")]
#[command(version)]
#[command(about = "Swap the order of coordinate pairs in a text file, in place", long_about = None)]
pub struct Args {
    /// File to rewrite
    #[arg(default_value = DEFAULT_TARGET)]
    pub file: PathBuf,

    /// Print the document tail before and after, and a pattern probe
    #[arg(short, long)]
    pub diagnostic: bool,

    /// Output structured JSON instead of human-readable
    #[arg(short, long)]
    pub json: bool,

    /// Write the report to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// How the report is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Human,
    Json,
}

/// Settings for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub target: PathBuf,
    pub diagnostic: bool,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Config {
            target: args.file,
            diagnostic: args.diagnostic,
            format: if args.json {
                OutputFormat::Json
            } else {
                OutputFormat::Human
            },
            output: args.output,
        }
    }
}
