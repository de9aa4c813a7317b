use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use std::io::BufRead;
use std::path::PathBuf;
use tracing::{debug, info};

use timelapsed::Notation;
use timelapsed::util::config::AppConfig;

#[derive(Parser, Debug)]
#[command(
    name = "timelapsed",
    version,
    about = "Render timestamps as relative time"
)]
struct Cli {
    /// Epoch milliseconds or ISO-8601 instants (read from stdin when omitted)
    inputs: Vec<String>,

    /// Notation: twitter, short or long
    #[arg(short, long)]
    notation: Option<Notation>,

    /// Print every notation for each input
    #[arg(short, long)]
    all: bool,

    /// Emit one JSON object per rendered input
    #[arg(long)]
    json: bool,

    /// Path to config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable debug logging to file
    #[arg(short, long)]
    debug: bool,
}

#[derive(Debug, Serialize)]
struct Rendered<'a> {
    input: &'a str,
    notation: Notation,
    text: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load(cli.config.as_deref())?;

    let _guard = setup_logging(&config, cli.debug)?;

    info!("timelapsed starting");

    let notations: Vec<Notation> = if cli.all {
        Notation::ALL.to_vec()
    } else {
        vec![cli.notation.unwrap_or(config.format.notation)]
    };
    debug!(?notations, "Resolved notations");

    let inputs = if cli.inputs.is_empty() {
        read_stdin()?
    } else {
        cli.inputs
    };

    for input in &inputs {
        let mut texts = Vec::with_capacity(notations.len());
        for &notation in &notations {
            let text = timelapsed::from_text(input, notation)
                .with_context(|| format!("Failed to format input: {input}"))?;
            texts.push((notation, text));
        }

        if cli.json {
            for (notation, text) in texts {
                let line = serde_json::to_string(&Rendered {
                    input,
                    notation,
                    text,
                })
                .context("Failed to serialize output")?;
                println!("{line}");
            }
        } else {
            let line: Vec<String> = texts.into_iter().map(|(_, text)| text).collect();
            println!("{}", line.join("\t"));
        }
    }

    Ok(())
}

fn read_stdin() -> Result<Vec<String>> {
    let mut inputs = Vec::new();
    for line in std::io::stdin().lock().lines() {
        let line = line.context("Failed to read stdin")?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            inputs.push(trimmed.to_string());
        }
    }
    Ok(inputs)
}

fn setup_logging(
    config: &AppConfig,
    debug: bool,
) -> Result<Option<tracing_appender::non_blocking::WorkerGuard>> {
    if !debug {
        return Ok(None);
    }

    let log_dir = config.log_dir();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = tracing_appender::rolling::daily(&log_dir, "timelapsed.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter("timelapsed=debug")
        .with_ansi(false)
        .init();

    Ok(Some(guard))
}
