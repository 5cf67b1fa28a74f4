//! CSV-driven batch input.
//!
//! A batch is an ordered collection of find/replace pairs applied
//! one-by-one against a fixed source/destination path pair. Jobs are
//! independent; a failed job never affects the jobs after it.

use std::io;
use std::path::Path;

use crate::error::Result;
use crate::replacer::{DocumentBackend, TextReplacer};
use log::info;
use serde::Deserialize;

/// One find/replace pair read from the batch CSV.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ReplacementJob {
    /// Text to locate
    #[serde(rename = "target")]
    pub target_text: String,
    /// Text to paint in its place
    #[serde(rename = "replacement")]
    pub new_text: String,
}

/// Read jobs from a CSV file with a `target,replacement` header row.
pub fn read_jobs(path: &Path, delimiter: u8) -> Result<Vec<ReplacementJob>> {
    let file = std::fs::File::open(path)?;
    read_jobs_from(file, delimiter)
}

/// Read jobs from any CSV source with a `target,replacement` header
/// row.
pub fn read_jobs_from(source: impl io::Read, delimiter: u8) -> Result<Vec<ReplacementJob>> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .trim(csv::Trim::All)
        .from_reader(source);

    let mut jobs = Vec::new();
    for record in reader.deserialize() {
        jobs.push(record?);
    }
    Ok(jobs)
}

/// Run every job in order against one source/destination pair.
///
/// Returns the number of jobs that committed successfully.
pub fn run<B: DocumentBackend>(
    replacer: &TextReplacer<'_, B>,
    src: &Path,
    dest: &Path,
    jobs: &[ReplacementJob],
) -> usize {
    let mut succeeded = 0;
    for job in jobs {
        if replacer.replace_text(src, dest, &job.target_text, &job.new_text) {
            succeeded += 1;
        }
    }
    info!("batch complete: {}/{} jobs succeeded", succeeded, jobs.len());
    succeeded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_jobs_comma_delimited() {
        let csv = "target,replacement\nHello,Goodbye\nfoo,bar\n";
        let jobs = read_jobs_from(csv.as_bytes(), b',').unwrap();
        assert_eq!(
            jobs,
            vec![
                ReplacementJob {
                    target_text: "Hello".to_string(),
                    new_text: "Goodbye".to_string(),
                },
                ReplacementJob {
                    target_text: "foo".to_string(),
                    new_text: "bar".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_read_jobs_semicolon_delimited() {
        let csv = "target;replacement\na;b\n";
        let jobs = read_jobs_from(csv.as_bytes(), b';').unwrap();
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].target_text, "a");
        assert_eq!(jobs[0].new_text, "b");
    }

    #[test]
    fn test_read_jobs_trims_whitespace() {
        let csv = "target,replacement\n Hello , Goodbye \n";
        let jobs = read_jobs_from(csv.as_bytes(), b',').unwrap();
        assert_eq!(jobs[0].target_text, "Hello");
        assert_eq!(jobs[0].new_text, "Goodbye");
    }

    #[test]
    fn test_read_jobs_empty_input() {
        let csv = "target,replacement\n";
        let jobs = read_jobs_from(csv.as_bytes(), b',').unwrap();
        assert!(jobs.is_empty());
    }

    #[test]
    fn test_read_jobs_malformed_row() {
        let csv = "target,replacement\nonly-one-field\n";
        assert!(read_jobs_from(csv.as_bytes(), b',').is_err());
    }
}
