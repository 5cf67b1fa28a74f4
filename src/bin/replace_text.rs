//! Batch PDF Text Replacement
//!
//! Applies a CSV of find/replace pairs to a PDF document.
//!
//! Usage:
//!   cargo run --release --features pdfium --bin replace_text -- source.pdf changed.pdf jobs.csv
//!   cargo run --release --features pdfium --bin replace_text -- source.pdf changed.pdf jobs.csv --responsive --font Courier

use std::path::PathBuf;
use std::process::ExitCode;

use pdf_text_replace::backend::pdfium::PdfiumBackend;
use pdf_text_replace::batch;
use pdf_text_replace::config::ReplaceConfig;
use pdf_text_replace::layout::MetricsLayoutEngine;
use pdf_text_replace::replacer::{LogSink, TextReplacer};

struct CliConfig {
    src: PathBuf,
    dest: PathBuf,
    csv: PathBuf,
    font_family: String,
    max_font_size: f32,
    responsive: bool,
    delimiter: u8,
    verbose: bool,
}

impl CliConfig {
    fn from_args() -> Result<Self, String> {
        let args: Vec<String> = std::env::args().collect();
        let mut positional = Vec::new();
        let mut font_family = String::new();
        let mut max_font_size = 0.0f32;
        let mut responsive = false;
        let mut delimiter = b',';
        let mut verbose = false;

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "--font" => {
                    i += 1;
                    if i < args.len() {
                        font_family = args[i].clone();
                    }
                },
                "--max-size" => {
                    i += 1;
                    if i < args.len() {
                        max_font_size = args[i]
                            .parse()
                            .map_err(|_| format!("invalid --max-size value: {}", args[i]))?;
                    }
                },
                "--delimiter" => {
                    i += 1;
                    if i < args.len() {
                        let mut bytes = args[i].bytes();
                        delimiter = bytes
                            .next()
                            .filter(|_| bytes.next().is_none())
                            .ok_or_else(|| {
                                format!("--delimiter must be a single byte, got: {}", args[i])
                            })?;
                    }
                },
                "--responsive" => {
                    responsive = true;
                },
                "--verbose" | "-v" => {
                    verbose = true;
                },
                other if other.starts_with('-') => {
                    return Err(format!("unknown option: {}", other));
                },
                other => {
                    positional.push(other.to_string());
                },
            }
            i += 1;
        }

        if positional.len() != 3 {
            return Err("expected arguments: <source.pdf> <dest.pdf> <jobs.csv>".to_string());
        }

        Ok(Self {
            src: PathBuf::from(&positional[0]),
            dest: PathBuf::from(&positional[1]),
            csv: PathBuf::from(&positional[2]),
            font_family,
            max_font_size,
            responsive,
            delimiter,
            verbose,
        })
    }
}

fn main() -> ExitCode {
    let config = match CliConfig::from_args() {
        Ok(config) => config,
        Err(message) => {
            eprintln!("Error: {}", message);
            eprintln!(
                "Usage: replace_text <source.pdf> <dest.pdf> <jobs.csv> \
                 [--font FAMILY] [--max-size PTS] [--responsive] [--delimiter CHAR] [--verbose]"
            );
            return ExitCode::FAILURE;
        },
    };

    let mut builder = env_logger::Builder::from_default_env();
    if config.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();

    let jobs = match batch::read_jobs(&config.csv, config.delimiter) {
        Ok(jobs) => jobs,
        Err(e) => {
            eprintln!("Error reading {}: {}", config.csv.display(), e);
            return ExitCode::FAILURE;
        },
    };

    if jobs.is_empty() {
        println!("No jobs in {}", config.csv.display());
        return ExitCode::SUCCESS;
    }

    let backend = PdfiumBackend::new();
    let engine = MetricsLayoutEngine::new();
    let sink = LogSink;
    let replacer = TextReplacer::new(&backend, &engine, &sink).with_config(
        ReplaceConfig::new()
            .with_font_family(config.font_family)
            .with_max_font_size(config.max_font_size)
            .with_responsive(config.responsive),
    );

    println!("Source: {}", config.src.display());
    println!("Destination: {}", config.dest.display());
    println!("Jobs: {}", jobs.len());

    let succeeded = batch::run(&replacer, &config.src, &config.dest, &jobs);

    println!("Done: {}/{} jobs succeeded", succeeded, jobs.len());
    if succeeded == jobs.len() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
