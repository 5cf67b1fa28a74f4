//! Replacement configuration.

use crate::geometry::Color;

/// Font family used when none is configured.
pub const DEFAULT_FONT_FAMILY: &str = "Helvetica";

/// Maximum font size, in points, used when none is configured.
pub const DEFAULT_MAX_FONT_SIZE: f32 = 15.0;

/// Settings for one replacement run.
///
/// Read-only while a job is in flight; configure before starting.
#[derive(Debug, Clone)]
pub struct ReplaceConfig {
    /// Font family for the replacement text.
    pub font_family: String,

    /// Upper bound on the fitted font size, in points.
    pub max_font_size: f32,

    /// Stretch the replacement box to the page's printable width
    /// instead of the matched text's own width.
    pub responsive: bool,

    /// Color of the rectangle masking the original text.
    pub back_color: Color,
}

impl Default for ReplaceConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ReplaceConfig {
    /// Create a configuration with defaults: Helvetica, 15pt maximum,
    /// responsive off, white background.
    pub fn new() -> Self {
        Self {
            font_family: DEFAULT_FONT_FAMILY.to_string(),
            max_font_size: DEFAULT_MAX_FONT_SIZE,
            responsive: false,
            back_color: Color::WHITE,
        }
    }

    /// Set the font family. An empty name falls back to the default.
    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        let family = family.into();
        self.font_family = if family.is_empty() {
            DEFAULT_FONT_FAMILY.to_string()
        } else {
            family
        };
        self
    }

    /// Set the maximum font size. Non-positive values fall back to the
    /// default.
    pub fn with_max_font_size(mut self, size: f32) -> Self {
        self.max_font_size = if size <= 0.0 {
            DEFAULT_MAX_FONT_SIZE
        } else {
            size
        };
        self
    }

    /// Enable or disable responsive box widening.
    pub fn with_responsive(mut self, enable: bool) -> Self {
        self.responsive = enable;
        self
    }

    /// Set the masking color.
    pub fn with_back_color(mut self, color: Color) -> Self {
        self.back_color = color;
        self
    }
}
