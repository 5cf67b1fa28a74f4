//! Positioned text fragments emitted while interpreting a page.

use crate::geometry::Rect;

/// One positioned run of text from a page's content stream, paired with
/// its bounding box.
///
/// Fragments arrive in interpreter emission order, which is usually but
/// not necessarily visual reading order. They are owned by the page scan
/// that produced them and are discarded after a match attempt on that
/// page.
#[derive(Debug, Clone, PartialEq)]
pub struct Fragment {
    /// Bounding box of the glyph run in page space
    pub bbox: Rect,
    /// Decoded text of the glyph run
    pub text: String,
}

impl Fragment {
    /// Create a new fragment.
    pub fn new(bbox: Rect, text: impl Into<String>) -> Self {
        Self {
            bbox,
            text: text.into(),
        }
    }
}

/// Everything one page scan produces: the page's concatenated text plus
/// its positioned fragments.
#[derive(Debug, Clone, Default)]
pub struct PageScan {
    /// Concatenated plain text of the whole page
    pub text: String,
    /// Positioned fragments in emission order
    pub fragments: Vec<Fragment>,
}
