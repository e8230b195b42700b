//! Command implementations for the Bhasha CLI.

use std::fs;
use std::io::{self, Read};
use std::sync::Arc;
use std::time::Instant;

use log::{debug, info};

use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::NormalizerConfig;
use crate::error::{BhashaError, Result};
use crate::language::LanguageRegistry;
use crate::pipeline::Normalizer;

/// Execute a CLI command.
pub fn execute_command(args: BhashaArgs) -> Result<()> {
    let normalizer = build_normalizer(&args)?;

    match &args.command {
        Command::Normalize(normalize_args) => normalize(normalize_args, &normalizer, &args),
        Command::Batch(batch_args) => batch(batch_args, &normalizer, &args),
        Command::Languages => languages(&normalizer, &args),
    }
}

/// Load the configuration, if any, and build the shared registry.
fn build_normalizer(args: &BhashaArgs) -> Result<Normalizer> {
    let config = match &args.config {
        Some(path) => {
            info!("Loading configuration from {}", path.display());
            NormalizerConfig::from_file(path)?
        }
        None => NormalizerConfig::default(),
    };

    let start = Instant::now();
    let registry = LanguageRegistry::load(&config)?;
    debug!("Registry ready in {:?}", start.elapsed());

    Ok(Normalizer::new(Arc::new(registry)))
}

/// Normalize one text given as an argument or on stdin.
fn normalize(args: &NormalizeArgs, normalizer: &Normalizer, cli_args: &BhashaArgs) -> Result<()> {
    let text = match &args.text {
        Some(text) => text.clone(),
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            strip_trailing_newline(buffer)
        }
    };

    let result = normalizer.run(&args.language, &text)?;
    output_result(&result, cli_args)
}

/// Normalize every line of a file.
fn batch(args: &BatchArgs, normalizer: &Normalizer, cli_args: &BhashaArgs) -> Result<()> {
    let content = fs::read_to_string(&args.file).map_err(|e| {
        BhashaError::Io(io::Error::new(
            e.kind(),
            format!("Failed to read {}: {e}", args.file.display()),
        ))
    })?;
    let lines = batch_lines(&content, args.skip_empty);

    let start = Instant::now();
    let results = normalizer.run_batch(&args.language, &lines)?;
    info!(
        "Normalized {} texts in {:?}",
        results.len(),
        start.elapsed()
    );

    output_batch(&results, cli_args)
}

/// List the supported languages.
fn languages(normalizer: &Normalizer, cli_args: &BhashaArgs) -> Result<()> {
    let summaries: Vec<LanguageSummary> = normalizer
        .registry()
        .profiles()
        .iter()
        .map(|profile| LanguageSummary::from(profile.as_ref()))
        .collect();

    output_languages(&summaries, cli_args)
}

fn strip_trailing_newline(mut text: String) -> String {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    text
}

fn batch_lines(content: &str, skip_empty: bool) -> Vec<&str> {
    content
        .lines()
        .filter(|line| !skip_empty || !line.trim().is_empty())
        .collect()
}
