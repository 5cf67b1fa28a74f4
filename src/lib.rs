// Allow a couple of clippy lints that are too pedantic here
#![allow(clippy::too_many_arguments)]

//! # PDF Text Replace
//!
//! Find-and-replace for text that is already rendered into a PDF page.
//!
//! Given only the stream of positioned glyph fragments a content-stream
//! interpreter emits, the library locates a target string, computes the
//! minimal box covering the matched fragments, masks that region with a
//! filled background, and re-flows substitute text into the box at the
//! largest font size that still fits.
//!
//! ## Core Pieces
//!
//! - **Match Locator** ([`locator`]): reconstructs the target string
//!   from per-character fragments in a single streaming pass.
//! - **Bounding Box Reducer** ([`region`]): collapses a match run into
//!   the rectangle to mask, optionally stretched to the page's
//!   printable width ("responsive" mode).
//! - **Font Fit Simulator** ([`fit`]): lays candidate text out into a
//!   throwaway surface at decreasing sizes until the rendered line
//!   count fits the box — the same line-breaking code path used for
//!   the real paint, which is what makes the simulation predictive.
//! - **Replacement Orchestrator** ([`replacer`]): sequences the above
//!   across a document's pages, stopping at the first page containing
//!   the target, and drives the paint/mask/commit collaborators.
//!
//! Document access, glyph painting and file I/O are collaborators
//! reached through narrow traits; the crate does not parse PDF syntax
//! itself. A PDFium-backed implementation is available behind the
//! `pdfium` feature.
//!
//! ## Quick Start
//!
//! ```no_run
//! # #[cfg(feature = "pdfium")]
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use std::path::Path;
//! use pdf_text_replace::backend::pdfium::PdfiumBackend;
//! use pdf_text_replace::config::ReplaceConfig;
//! use pdf_text_replace::layout::MetricsLayoutEngine;
//! use pdf_text_replace::replacer::{LogSink, TextReplacer};
//!
//! let backend = PdfiumBackend::new();
//! let engine = MetricsLayoutEngine::new();
//! let sink = LogSink;
//!
//! let replacer = TextReplacer::new(&backend, &engine, &sink)
//!     .with_config(ReplaceConfig::new().with_responsive(true));
//!
//! let ok = replacer.replace_text(
//!     Path::new("source.pdf"),
//!     Path::new("changed.pdf"),
//!     "ACME Corp",
//!     "Example Industries Ltd.",
//! );
//! assert!(ok);
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "pdfium"))]
//! # fn main() {}
//! ```

// Error handling
pub mod error;

// Geometry and page data
pub mod fragment;
pub mod geometry;

// Core algorithms
pub mod fit;
pub mod locator;
pub mod region;

// Layout collaborators and built-in metrics
pub mod fonts;
pub mod layout;

// Orchestration
pub mod config;
pub mod replacer;

// Batch input
pub mod batch;

// Concrete document backends
pub mod backend;

// Re-exports
pub use config::ReplaceConfig;
pub use error::{Error, Result};
pub use fragment::{Fragment, PageScan};
pub use geometry::{Color, Rect};
pub use replacer::{DocumentBackend, FaultSink, LogSink, PageReader, PageWriter, TextReplacer};

// Version info
/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
