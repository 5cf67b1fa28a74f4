//! Geometric primitives in page space.
//!
//! Coordinates follow the PDF convention: the origin is at the
//! bottom-left of the page with y increasing upward.

/// An axis-aligned rectangle in page space.
///
/// Invariant: `left <= right` and `bottom <= top`. Degenerate
/// (zero-area) rectangles are legal; zero-width glyphs produce them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// X coordinate of the left edge
    pub left: f32,
    /// Y coordinate of the bottom edge
    pub bottom: f32,
    /// X coordinate of the right edge
    pub right: f32,
    /// Y coordinate of the top edge
    pub top: f32,
}

impl Rect {
    /// Create a new rectangle from its four edges.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_text_replace::geometry::Rect;
    ///
    /// let rect = Rect::new(10.0, 20.0, 110.0, 70.0);
    /// assert_eq!(rect.width(), 100.0);
    /// assert_eq!(rect.height(), 50.0);
    /// ```
    pub fn new(left: f32, bottom: f32, right: f32, top: f32) -> Self {
        Self {
            left,
            bottom,
            right,
            top,
        }
    }

    /// Get the width of the rectangle.
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    /// Get the height of the rectangle.
    pub fn height(&self) -> f32 {
        self.top - self.bottom
    }

    /// Compute the union of this rectangle with another.
    ///
    /// Returns the smallest rectangle containing both.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_text_replace::geometry::Rect;
    ///
    /// let a = Rect::new(0.0, 0.0, 50.0, 50.0);
    /// let b = Rect::new(25.0, 25.0, 75.0, 75.0);
    /// let union = a.union(&b);
    ///
    /// assert_eq!(union, Rect::new(0.0, 0.0, 75.0, 75.0));
    /// ```
    pub fn union(&self, other: &Rect) -> Rect {
        Rect {
            left: self.left.min(other.left),
            bottom: self.bottom.min(other.bottom),
            right: self.right.max(other.right),
            top: self.top.max(other.top),
        }
    }

    /// Check whether the rectangle has zero area.
    pub fn is_degenerate(&self) -> bool {
        self.width() <= 0.0 || self.height() <= 0.0
    }
}

/// An RGB color with components in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red component
    pub r: f32,
    /// Green component
    pub g: f32,
    /// Blue component
    pub b: f32,
}

impl Color {
    /// White, the default masking color.
    pub const WHITE: Color = Color {
        r: 1.0,
        g: 1.0,
        b: 1.0,
    };

    /// Black.
    pub const BLACK: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
    };

    /// Create a color from its components.
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }
}
