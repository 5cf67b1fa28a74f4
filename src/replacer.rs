//! Replacement orchestration across a document's pages.
//!
//! Sequences the locator, reducer and fit simulator over a document
//! opened through a [`DocumentBackend`], then drives the paint and
//! commit collaborators. Every failure is funneled through a
//! [`FaultSink`] and collapses to a boolean job outcome; nothing
//! propagates to the batch driver.

use std::path::Path;

use crate::config::ReplaceConfig;
use crate::error::{Error, Result};
use crate::fit::FitSimulator;
use crate::fragment::PageScan;
use crate::geometry::Rect;
use crate::locator::MatchRun;
use crate::layout::{LayoutEngine, PaintSurface};
use crate::locator;
use crate::region::{self, ADJUST_MARGIN, PAGE_MARGIN};
use log::{debug, error, info};

/// Read access to an open document. Pages are numbered from 1.
pub trait PageReader {
    /// Number of pages in the document.
    fn page_count(&mut self) -> Result<usize>;

    /// Interpret one page's content stream into its concatenated text
    /// and positioned fragments.
    fn scan_page(&mut self, page: usize) -> Result<PageScan>;

    /// The page's media box.
    fn page_box(&mut self, page: usize) -> Result<Rect>;
}

/// Write access to the destination document: a paint surface plus a
/// final commit.
pub trait PageWriter: PaintSurface {
    /// Write the document to its destination path and release the
    /// handle.
    fn commit(self) -> Result<()>;
}

/// Opens documents for reading and writing.
pub trait DocumentBackend {
    /// Read handle type.
    type Reader: PageReader;
    /// Write handle type.
    type Writer: PageWriter;

    /// Open a source document for reading.
    fn open(&self, path: &Path) -> Result<Self::Reader>;

    /// Open a destination copy of the source for writing. With
    /// `flatten_forms` set, interactive form widgets and free-text
    /// annotations are baked into static content before any painting.
    fn open_writer(
        &self,
        reader: &Self::Reader,
        dest: &Path,
        flatten_forms: bool,
    ) -> Result<Self::Writer>;
}

/// Receives every fault a job reports. Invoked synchronously; must not
/// panic.
pub trait FaultSink {
    /// Report one fault.
    fn report(&self, fault: &Error);
}

/// Sink that forwards faults to the `log` facade.
#[derive(Debug, Default)]
pub struct LogSink;

impl FaultSink for LogSink {
    fn report(&self, fault: &Error) {
        error!("{}", fault);
    }
}

/// Orchestrates one text replacement per invocation.
pub struct TextReplacer<'a, B: DocumentBackend> {
    backend: &'a B,
    engine: &'a dyn LayoutEngine,
    sink: &'a dyn FaultSink,
    config: ReplaceConfig,
}

impl<'a, B: DocumentBackend> TextReplacer<'a, B> {
    /// Create a replacer with default configuration.
    pub fn new(backend: &'a B, engine: &'a dyn LayoutEngine, sink: &'a dyn FaultSink) -> Self {
        Self {
            backend,
            engine,
            sink,
            config: ReplaceConfig::default(),
        }
    }

    /// Replace the configuration.
    pub fn with_config(mut self, config: ReplaceConfig) -> Self {
        self.config = config;
        self
    }

    /// Current configuration.
    pub fn config(&self) -> &ReplaceConfig {
        &self.config
    }

    /// Replace the first occurrence of `target_text` in `src` with
    /// `new_text`, writing the result to `dest`.
    ///
    /// Scans pages in ascending order and stops at the first page
    /// containing the target. The matched region is masked with the
    /// configured background color and `new_text` is re-flowed into it
    /// at the largest size that fits. Returns `true` on success; on any
    /// failure the fault is reported through the sink and `false` is
    /// returned.
    pub fn replace_text(&self, src: &Path, dest: &Path, target_text: &str, new_text: &str) -> bool {
        match self.try_replace(src, dest, target_text, new_text) {
            Ok(()) => true,
            Err(fault) => {
                self.sink.report(&fault);
                false
            },
        }
    }

    fn try_replace(&self, src: &Path, dest: &Path, target_text: &str, new_text: &str) -> Result<()> {
        let mut reader = self.backend.open(src)?;

        let pages = reader.page_count()?;
        let mut hit: Option<(usize, MatchRun)> = None;
        for page in 1..=pages {
            let scan = reader.scan_page(page)?;
            if let Some(run) = locator::locate(&scan.fragments, &scan.text, target_text) {
                debug!("'{}' found on page {}", target_text, page);
                hit = Some((page, run));
                break;
            }
            debug!("page {}: no match", page);
        }

        let (page, run) = hit.ok_or_else(|| Error::TargetNotFound(target_text.to_string()))?;

        let page_box = reader.page_box(page)?;
        let container = region::reduce(&run, &page_box, self.config.responsive, PAGE_MARGIN)
            .ok_or_else(|| Error::TargetNotFound(target_text.to_string()))?;

        let simulator = FitSimulator::new(self.engine);
        let font = simulator.fit(
            &container,
            new_text,
            &self.config.font_family,
            self.config.max_font_size,
        )?;

        let mut writer = self.backend.open_writer(&reader, dest, true)?;

        // The mask stops short of the adjustment margin added to the
        // container's right edge.
        let mask = Rect::new(
            container.left,
            container.bottom,
            container.left + (container.width() - ADJUST_MARGIN),
            container.top,
        );
        writer.fill_rect(page, &mask, self.config.back_color)?;

        self.engine
            .layout_in_box(&mut writer, page, &container, new_text, &font)?;

        writer.commit()?;
        info!(
            "replaced '{}' with '{}' on page {} at {:.2}pt",
            target_text, new_text, page, font.size
        );
        Ok(())
    }
}
