//! Error types for the text replacement library.
//!
//! All failures that can end a replacement job are collected in one enum
//! so they can be funneled through a single fault sink.

/// Result type alias for replacement operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while locating and replacing text.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Source document could not be opened
    #[error("Failed to open '{path}': {reason}")]
    Open {
        /// Path that was being opened
        path: String,
        /// Reason for the failure
        reason: String,
    },

    /// No page of the document contains the targeted text
    #[error("Text to replace not found: '{0}'")]
    TargetNotFound(String),

    /// Destination document could not be written
    #[error("Failed to commit '{path}': {reason}")]
    Commit {
        /// Path that was being written
        path: String,
        /// Reason for the failure
        reason: String,
    },

    /// The shrink loop ran out of sizes before the text fit its box
    #[error("No font size fits '{text}' into a box {width} points wide")]
    FitImpossible {
        /// Text that was being fitted
        text: String,
        /// Width of the box it had to fit
        width: f32,
    },

    /// Requested font family has no registered metrics
    #[error("Unknown font family: {0}")]
    UnknownFont(String),

    /// Page number outside the document
    #[error("Page {0} out of range")]
    PageOutOfRange(usize),

    /// Fault raised by a document backend while reading
    #[error("Document backend error: {0}")]
    Backend(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed batch input
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
