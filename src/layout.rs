//! Text layout collaborators.
//!
//! The replacement core never paints glyphs itself; it drives a
//! [`LayoutEngine`] that breaks text into lines inside a box and emits
//! each line onto a [`PaintSurface`]. The fit simulator and the real
//! commit path call the exact same `layout_in_box` implementation and
//! differ only in the surface they hand it — a [`ScratchSurface`] that
//! discards every paint versus the destination document. That shared
//! code path is what makes simulated line counts predictive of the
//! final output.

use crate::error::{Error, Result};
use crate::fonts::{FontMetrics, FontSpec};
use crate::geometry::{Color, Rect};

/// Leading as a multiple of the font size, applied between baselines.
const LEADING_FACTOR: f32 = 1.5;

/// A surface that can receive fills and text lines, addressed by page
/// number (1-based).
pub trait PaintSurface {
    /// Fill a rectangle with a solid color.
    fn fill_rect(&mut self, page: usize, rect: &Rect, color: Color) -> Result<()>;

    /// Draw one already-broken line of text with its baseline origin at
    /// `(x, y)` in page space.
    fn draw_text_line(&mut self, page: usize, x: f32, y: f32, text: &str, font: &FontSpec)
        -> Result<()>;
}

/// Measurement surface that discards every paint.
///
/// Used by the fit simulator to run the real layout code without
/// producing output.
#[derive(Debug, Default)]
pub struct ScratchSurface {
    /// Number of text lines that were drawn into the void
    pub lines_drawn: u32,
}

impl PaintSurface for ScratchSurface {
    fn fill_rect(&mut self, _page: usize, _rect: &Rect, _color: Color) -> Result<()> {
        Ok(())
    }

    fn draw_text_line(
        &mut self,
        _page: usize,
        _x: f32,
        _y: f32,
        _text: &str,
        _font: &FontSpec,
    ) -> Result<()> {
        self.lines_drawn += 1;
        Ok(())
    }
}

/// Line-breaking and measurement collaborator.
pub trait LayoutEngine {
    /// Largest size at or below `max_size` at which `text` fits a
    /// single line of `container`'s width. A coarse estimate only; it
    /// does not guarantee a multi-line fit.
    fn fit_single_line(
        &self,
        family: &str,
        text: &str,
        container: &Rect,
        max_size: f32,
    ) -> Result<f32>;

    /// Baseline-to-baseline distance for the font.
    fn line_leading(&self, font: &FontSpec) -> f32;

    /// Ascender-to-descender span of `text` in the font, in points.
    fn glyph_span(&self, font: &FontSpec, text: &str) -> f32;

    /// Break `text` into lines of `container`'s width and draw each
    /// line onto `surface`, top-down from the container's top edge.
    ///
    /// Lines are not clipped to the container's height; callers fit the
    /// text first and use the returned line count to measure overflow.
    fn layout_in_box(
        &self,
        surface: &mut dyn PaintSurface,
        page: usize,
        container: &Rect,
        text: &str,
        font: &FontSpec,
    ) -> Result<u32>;
}

/// Layout engine backed by the built-in base-font metrics.
///
/// Breaks lines greedily at word boundaries. A word wider than the
/// container goes on a line of its own rather than being split.
#[derive(Debug, Default)]
pub struct MetricsLayoutEngine;

impl MetricsLayoutEngine {
    /// Create a new engine.
    pub fn new() -> Self {
        Self
    }

    fn metrics(&self, family: &str) -> Result<FontMetrics> {
        FontMetrics::for_family(family).ok_or_else(|| Error::UnknownFont(family.to_string()))
    }

    /// Metrics lookup that falls back to Helvetica, for measurement
    /// calls made after the font was already resolved once.
    fn metrics_or_default(&self, family: &str) -> FontMetrics {
        FontMetrics::for_family(family).unwrap_or_else(FontMetrics::helvetica)
    }

    fn break_lines(&self, metrics: &FontMetrics, text: &str, width: f32, size: f32) -> Vec<String> {
        let space = metrics.char_width(' ') * size / 1000.0;
        let mut lines = Vec::new();
        let mut line = String::new();
        let mut line_width = 0.0f32;

        for word in text.split_whitespace() {
            let word_width = metrics.text_width(word, size);
            if line.is_empty() {
                line.push_str(word);
                line_width = word_width;
            } else if line_width + space + word_width <= width {
                line.push(' ');
                line.push_str(word);
                line_width += space + word_width;
            } else {
                lines.push(std::mem::take(&mut line));
                line.push_str(word);
                line_width = word_width;
            }
        }
        if !line.is_empty() {
            lines.push(line);
        }
        lines
    }
}

impl LayoutEngine for MetricsLayoutEngine {
    fn fit_single_line(
        &self,
        family: &str,
        text: &str,
        container: &Rect,
        max_size: f32,
    ) -> Result<f32> {
        let metrics = self.metrics(family)?;
        let unit_width = metrics.text_width(text, 1.0);
        if unit_width <= 0.0 {
            return Ok(max_size);
        }
        if container.width() <= 0.0 {
            return Err(Error::FitImpossible {
                text: text.to_string(),
                width: container.width(),
            });
        }
        Ok((container.width() / unit_width).min(max_size))
    }

    fn line_leading(&self, font: &FontSpec) -> f32 {
        LEADING_FACTOR * font.size
    }

    fn glyph_span(&self, font: &FontSpec, _text: &str) -> f32 {
        self.metrics_or_default(&font.family).glyph_span(font.size)
    }

    fn layout_in_box(
        &self,
        surface: &mut dyn PaintSurface,
        page: usize,
        container: &Rect,
        text: &str,
        font: &FontSpec,
    ) -> Result<u32> {
        let metrics = self.metrics_or_default(&font.family);
        let lines = self.break_lines(&metrics, text, container.width(), font.size);

        let leading = self.line_leading(font);
        let scale = font.size / 1000.0;
        // First baseline sits one ascender below the top edge.
        let mut baseline = container.top - metrics.ascender * scale;

        for line in &lines {
            surface.draw_text_line(page, container.left, baseline, line, font)?;
            baseline -= leading;
        }

        Ok(lines.len() as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> MetricsLayoutEngine {
        MetricsLayoutEngine::new()
    }

    #[test]
    fn test_fit_single_line_width_bound() {
        let e = engine();
        let container = Rect::new(0.0, 0.0, 100.0, 50.0);
        // "WWWW" at size 1 is 4 * 0.944 = 3.776 points wide, so the
        // width-fitting size is 100 / 3.776.
        let size = e.fit_single_line("Helvetica", "WWWW", &container, 100.0).unwrap();
        assert!((size - 100.0 / 3.776).abs() < 1e-3);
    }

    #[test]
    fn test_fit_single_line_clamped_to_max() {
        let e = engine();
        let container = Rect::new(0.0, 0.0, 1000.0, 50.0);
        let size = e.fit_single_line("Helvetica", "Hi", &container, 15.0).unwrap();
        assert_eq!(size, 15.0);
    }

    #[test]
    fn test_fit_single_line_unknown_font() {
        let e = engine();
        let container = Rect::new(0.0, 0.0, 100.0, 50.0);
        let err = e.fit_single_line("Wingdings", "Hi", &container, 15.0).unwrap_err();
        assert!(matches!(err, Error::UnknownFont(_)));
    }

    #[test]
    fn test_break_lines_greedy() {
        let e = engine();
        let metrics = FontMetrics::for_family("Courier").unwrap();
        // Courier at 10pt: every char 6pt. "aaa bbb ccc" in a 47pt
        // line: "aaa bbb" is 42pt, adding " ccc" would need 66pt.
        let lines = e.break_lines(&metrics, "aaa bbb ccc", 47.0, 10.0);
        assert_eq!(lines, vec!["aaa bbb".to_string(), "ccc".to_string()]);
    }

    #[test]
    fn test_break_lines_overlong_word() {
        let e = engine();
        let metrics = FontMetrics::for_family("Courier").unwrap();
        // "abcdefghij" is 60pt at 10pt Courier, wider than the box;
        // it still occupies a single unbroken line.
        let lines = e.break_lines(&metrics, "x abcdefghij y", 30.0, 10.0);
        assert_eq!(
            lines,
            vec!["x".to_string(), "abcdefghij".to_string(), "y".to_string()]
        );
    }

    #[test]
    fn test_measurement_falls_back_to_helvetica() {
        let e = engine();
        let unknown = FontSpec::new("Wingdings", 10.0);
        let helvetica = FontSpec::new("Helvetica", 10.0);
        assert_eq!(e.glyph_span(&unknown, "x"), e.glyph_span(&helvetica, "x"));
    }

    #[test]
    fn test_layout_in_box_counts_lines() {
        let e = engine();
        let container = Rect::new(0.0, 0.0, 47.0, 100.0);
        let font = FontSpec::new("Courier", 10.0);
        let mut scratch = ScratchSurface::default();
        let lines = e
            .layout_in_box(&mut scratch, 1, &container, "aaa bbb ccc", &font)
            .unwrap();
        assert_eq!(lines, 2);
        assert_eq!(scratch.lines_drawn, 2);
    }

    #[test]
    fn test_layout_empty_text() {
        let e = engine();
        let container = Rect::new(0.0, 0.0, 100.0, 100.0);
        let font = FontSpec::new("Helvetica", 10.0);
        let mut scratch = ScratchSurface::default();
        let lines = e.layout_in_box(&mut scratch, 1, &container, "", &font).unwrap();
        assert_eq!(lines, 0);
        assert_eq!(scratch.lines_drawn, 0);
    }

    #[test]
    fn test_baselines_descend_by_leading() {
        struct RecordingSurface {
            baselines: Vec<f32>,
        }
        impl PaintSurface for RecordingSurface {
            fn fill_rect(&mut self, _: usize, _: &Rect, _: Color) -> Result<()> {
                Ok(())
            }
            fn draw_text_line(
                &mut self,
                _: usize,
                _x: f32,
                y: f32,
                _: &str,
                _: &FontSpec,
            ) -> Result<()> {
                self.baselines.push(y);
                Ok(())
            }
        }

        let e = engine();
        let container = Rect::new(0.0, 0.0, 47.0, 200.0);
        let font = FontSpec::new("Courier", 10.0);
        let mut surface = RecordingSurface { baselines: vec![] };
        e.layout_in_box(&mut surface, 1, &container, "aaa bbb ccc", &font)
            .unwrap();

        assert_eq!(surface.baselines.len(), 2);
        let drop = surface.baselines[0] - surface.baselines[1];
        assert!((drop - 15.0).abs() < 1e-4); // 1.5 * 10pt leading
    }
}
