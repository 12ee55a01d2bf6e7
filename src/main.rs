use anyhow::{Context, Result};
use clap::Parser;

use naivete::classifiers::NaiveBayes;
use naivete::streams::TabularFileStream;
use naivete::tasks::BatchClassification;
use naivete::ui::cli::args::{Cli, Command, RunArgs};

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const FG_CYAN: &str = "\x1b[36m";
const FG_GREEN: &str = "\x1b[32m";
const FG_GREY: &str = "\x1b[90m";

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Run(args) => run(args),
    }
}

fn run(args: RunArgs) -> Result<()> {
    println!("{BOLD}{FG_CYAN}▶ Batch Classification{RESET}");
    println!(
        "{DIM}train={}{RESET}  {DIM}test={}{RESET}  {}",
        args.train.display(),
        args.test.display(),
        timestamp_now()
    );
    println!(
        "{FG_GREY}────────────────────────────────────────────────────────────────────────{RESET}"
    );

    let train_stream = TabularFileStream::open_labeled(args.train.clone())
        .with_context(|| format!("failed to open training file {}", args.train.display()))?;
    let header = train_stream.header_arc();
    let test_stream = TabularFileStream::open_unlabeled(args.test.clone(), header)
        .with_context(|| format!("failed to open test file {}", args.test.display()))?;

    let mut task = BatchClassification::new(
        Box::new(NaiveBayes::new()),
        Box::new(train_stream),
        Box::new(test_stream),
    );
    task.run().context("classification run failed")?;

    task.write_predictions(&args.output)
        .with_context(|| format!("failed to write predictions to {}", args.output.display()))?;

    if let Some(path) = args.dump_model {
        let summary = task
            .model_summary()
            .context("learner does not expose a model summary")?;
        summary
            .export(&path, args.dump_format)
            .with_context(|| format!("failed to dump model to {}", path.display()))?;
    }

    let report = task.report();
    println!(
        "{FG_GREEN}{BOLD}trained{RESET} {:>7}  \
         {FG_CYAN}{BOLD}classified{RESET} {:>7}  \
         {DIM}model{RESET} {} B  \
         {DIM}t{RESET} {:.6}s  \
         {DIM}out{RESET} {}",
        report.instances_trained,
        report.instances_classified,
        report.model_bytes,
        report.seconds,
        args.output.display()
    );

    Ok(())
}

fn timestamp_now() -> String {
    use chrono::{Local, SecondsFormat};
    let now = Local::now();
    format!(
        "{DIM}{}{}",
        now.to_rfc3339_opts(SecondsFormat::Secs, true),
        RESET
    )
}
