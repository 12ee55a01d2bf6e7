use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueHint};

use crate::model::DumpFormat;

#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "Scripted runner for naivete classification jobs"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Train on a labeled file and classify an unlabeled file
    Run(RunArgs),
}

#[derive(Debug, Args)]
pub struct RunArgs {
    /// Labeled training file; the first row names the attributes, the last
    /// token of every other row is the class label
    #[arg(long, value_name = "PATH", value_hint = ValueHint::FilePath)]
    pub train: PathBuf,

    /// Unlabeled test file, same column order as training, no header row
    #[arg(long, value_name = "PATH", value_hint = ValueHint::FilePath)]
    pub test: PathBuf,

    /// Where predictions are written, one label per line
    #[arg(
        long,
        value_name = "PATH",
        default_value = "classifications.txt",
        value_hint = ValueHint::FilePath
    )]
    pub output: PathBuf,

    /// Dump the trained model to this file after classification
    #[arg(long, value_name = "PATH", value_hint = ValueHint::FilePath)]
    pub dump_model: Option<PathBuf>,

    /// Format for the model dump (json, text)
    #[arg(
        long,
        value_name = "FORMAT",
        default_value = "json",
        value_parser = parse_dump_format
    )]
    pub dump_format: DumpFormat,
}

fn parse_dump_format(raw: &str) -> Result<DumpFormat, String> {
    let trimmed = raw.trim();
    trimmed
        .parse()
        .map_err(|_| format!("unknown format '{trimmed}', expected one of: json, text"))
}
