//! Fit-by-simulation font sizing.
//!
//! No closed-form line-breaking formula is trusted here. Candidate text
//! is laid out at decreasing sizes into a throwaway surface — by the
//! same engine that will perform the real paint — until the rendered
//! line count times the line leading fits the target box.

use crate::error::{Error, Result};
use crate::fonts::FontSpec;
use crate::geometry::Rect;
use crate::layout::{LayoutEngine, ScratchSurface};
use log::{debug, trace};

/// Amount the candidate size shrinks by on each failed simulation.
pub const SIZE_STEP: f32 = 0.01;

/// Upper bound on shrink iterations before the fit is declared
/// impossible.
const MAX_SHRINK_STEPS: u32 = 10_000;

/// Sizes the replacement text to its box by repeated simulation.
pub struct FitSimulator<'a> {
    engine: &'a dyn LayoutEngine,
}

impl<'a> FitSimulator<'a> {
    /// Create a simulator over the given layout engine.
    pub fn new(engine: &'a dyn LayoutEngine) -> Self {
        Self { engine }
    }

    /// Find the largest font size at or below `max_size` at which
    /// `text`, laid out in `container`'s width, occupies no more
    /// vertical space than `container`'s height.
    ///
    /// Starts from the engine's single-line width estimate and shrinks
    /// by [`SIZE_STEP`] until the simulated height fits. The returned
    /// size is therefore always at or below the initial estimate, and
    /// re-simulating at the returned size always fits.
    pub fn fit(
        &self,
        container: &Rect,
        text: &str,
        family: &str,
        max_size: f32,
    ) -> Result<FontSpec> {
        let estimate = self
            .engine
            .fit_single_line(family, text, container, max_size)?;
        let mut font = FontSpec::new(family, estimate);

        let mut steps = 0u32;
        loop {
            let simulated = self.simulate(container, text, &font)?;
            if simulated <= container.height() {
                if steps > 0 {
                    debug!(
                        "fit '{}' at {:.2}pt after {} shrink steps (estimate {:.2}pt)",
                        text, font.size, steps, estimate
                    );
                }
                return Ok(font);
            }
            trace!(
                "size {:.2}pt overflows: simulated {:.2} > height {:.2}",
                font.size,
                simulated,
                container.height()
            );

            steps += 1;
            if steps > MAX_SHRINK_STEPS || font.size - SIZE_STEP <= 0.0 {
                return Err(Error::FitImpossible {
                    text: text.to_string(),
                    width: container.width(),
                });
            }
            font.size -= SIZE_STEP;
        }
    }

    /// Run one layout pass into a scratch surface and measure the
    /// vertical extent it would occupy.
    fn simulate(&self, container: &Rect, text: &str, font: &FontSpec) -> Result<f32> {
        let mut scratch = ScratchSurface::default();
        let lines = self
            .engine
            .layout_in_box(&mut scratch, 1, container, text, font)?;
        if lines == 0 {
            return Ok(0.0);
        }
        let leading = self.engine.line_leading(font);
        let span = self.engine.glyph_span(font, text);
        Ok((lines - 1) as f32 * leading + span)
    }
}
