//! Batch command - extract recipients from many invoice PDFs.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, warn};

use briefkopf_core::ExtractionResponse;

use super::config::load_config;
use super::extract::{format_response, process_pdf, OutputFormat};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Glob pattern matching PDF files
    #[arg(required = true)]
    input: String,

    /// Output directory for per-file results
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Output format for each file
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Also generate a summary CSV
    #[arg(long)]
    summary: bool,
}

/// Result of processing a single file.
struct FileResult {
    path: PathBuf,
    response: ExtractionResponse,
    processing_time_ms: u64,
}

pub async fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    let files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| is_pdf(p))
        .collect();

    if files.is_empty() {
        anyhow::bail!("No matching PDF files found for pattern: {}", args.input);
    }

    println!(
        "{} Found {} files to process",
        style("ℹ").blue(),
        files.len()
    );

    if let Some(ref output_dir) = args.output_dir {
        fs::create_dir_all(output_dir)?;
    }

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")?
            .progress_chars("=>-"),
    );

    // Every file is independent; a failure never stops the batch.
    let mut results = Vec::with_capacity(files.len());
    for path in files {
        let file_start = Instant::now();
        let response = process_pdf(&path, &config);

        if let Some(error) = response.error() {
            warn!("{}: {}", path.display(), error);
        }

        results.push(FileResult {
            path,
            response,
            processing_time_ms: file_start.elapsed().as_millis() as u64,
        });
        pb.inc(1);
    }

    pb.finish_with_message("Complete");

    if let Some(output_dir) = &args.output_dir {
        let mut taken = HashSet::new();
        for result in &results {
            let stem = result
                .path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("invoice");
            let extension = args.format.extension();
            let file_name = unique_file_name(stem, extension, &mut taken);
            if file_name != format!("{}.{}", stem, extension) {
                warn!(
                    "{}: output name already used, writing {}",
                    result.path.display(),
                    file_name
                );
            }
            let output_path = output_dir.join(file_name);

            fs::write(&output_path, format_response(&result.response, args.format)?)?;
            debug!("Wrote output to {}", output_path.display());
        }
    }

    if args.summary {
        let summary_path = args
            .output_dir
            .as_ref()
            .map(|d| d.join("summary.csv"))
            .unwrap_or_else(|| PathBuf::from("summary.csv"));

        write_summary(&summary_path, &results)?;
        println!(
            "{} Summary written to {}",
            style("✓").green(),
            summary_path.display()
        );
    }

    let (extracted, missing): (Vec<_>, Vec<_>) =
        results.iter().partition(|r| r.response.is_success());

    println!();
    println!(
        "{} Processed {} files in {:?}",
        style("✓").green(),
        results.len(),
        start.elapsed()
    );
    println!(
        "   {} extracted, {} need manual entry",
        style(extracted.len()).green(),
        style(missing.len()).yellow()
    );

    if !missing.is_empty() {
        println!();
        println!("{}", style("Manual entry needed:").yellow());
        for result in &missing {
            println!(
                "  - {}: {}",
                result.path.display(),
                result.response.error().unwrap_or("unknown error")
            );
        }
    }

    Ok(())
}

fn is_pdf(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
}

/// `stem.ext`, or `stem-2.ext`, `stem-3.ext`, ... when already taken.
fn unique_file_name(stem: &str, extension: &str, taken: &mut HashSet<String>) -> String {
    let mut name = format!("{}.{}", stem, extension);
    let mut n = 2;
    while !taken.insert(name.clone()) {
        name = format!("{}-{}.{}", stem, n, extension);
        n += 1;
    }
    name
}

fn write_summary(path: &Path, results: &[FileResult]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;
    let processed_at = chrono::Local::now().to_rfc3339();

    wtr.write_record([
        "filename",
        "status",
        "anrede",
        "name",
        "parsing_method",
        "processing_time_ms",
        "processed_at",
        "error",
    ])?;

    for result in results {
        let filename = result
            .path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("");
        let time_ms = result.processing_time_ms.to_string();

        match &result.response {
            ExtractionResponse::Success(data) => wtr.write_record([
                filename,
                "extracted",
                data.anrede.as_str(),
                data.name.as_str(),
                data.parsing_method.as_str(),
                time_ms.as_str(),
                processed_at.as_str(),
                "",
            ])?,
            ExtractionResponse::Failure(error) => wtr.write_record([
                filename,
                "manual",
                "",
                "",
                "",
                time_ms.as_str(),
                processed_at.as_str(),
                error.as_str(),
            ])?,
        }
    }

    wtr.flush()?;
    Ok(())
}
