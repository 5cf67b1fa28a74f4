//! Built-in font metrics for layout measurement.
//!
//! Standard PostScript metrics for the core text faces, in units of
//! 1/1000 em. They are enough to measure line breaks and vertical
//! extent without parsing a font file; actual glyph painting is the
//! paint surface's problem.

use std::collections::HashMap;

/// A resolved font handle: a family name plus a size in points.
#[derive(Debug, Clone, PartialEq)]
pub struct FontSpec {
    /// Font family name, e.g. `"Helvetica"`
    pub family: String,
    /// Size in points
    pub size: f32,
}

impl FontSpec {
    /// Create a font spec.
    pub fn new(family: impl Into<String>, size: f32) -> Self {
        Self {
            family: family.into(),
            size,
        }
    }
}

/// Families with built-in metrics.
pub fn available_families() -> &'static [&'static str] {
    &["Helvetica", "Times-Roman", "Courier"]
}

/// Metrics for one font face.
#[derive(Debug, Clone)]
pub struct FontMetrics {
    /// Face name
    pub name: &'static str,
    /// Ascender height above the baseline, in 1/1000 em
    pub ascender: f32,
    /// Descender depth below the baseline, negative, in 1/1000 em
    pub descender: f32,
    widths: FontWidths,
}

#[derive(Debug, Clone)]
enum FontWidths {
    /// Proportional face with per-character widths
    Proportional(HashMap<char, f32>),
    /// Monospace face with one fixed advance
    Monospace(f32),
}

impl FontMetrics {
    /// Look up metrics for a family name. Returns `None` for families
    /// without built-in tables.
    pub fn for_family(family: &str) -> Option<FontMetrics> {
        match family {
            "Helvetica" => Some(Self::helvetica()),
            "Times-Roman" => Some(FontMetrics {
                name: "Times-Roman",
                ascender: 683.0,
                descender: -217.0,
                widths: FontWidths::Proportional(proportional_widths(&TIMES_ROMAN_WIDTHS)),
            }),
            "Courier" => Some(FontMetrics {
                name: "Courier",
                ascender: 629.0,
                descender: -157.0,
                widths: FontWidths::Monospace(600.0),
            }),
            _ => None,
        }
    }

    /// Helvetica metrics, the face every fallback path measures with.
    pub(crate) fn helvetica() -> FontMetrics {
        FontMetrics {
            name: "Helvetica",
            ascender: 718.0,
            descender: -207.0,
            widths: FontWidths::Proportional(proportional_widths(&HELVETICA_WIDTHS)),
        }
    }

    /// Advance width of one character in 1/1000 em. Unknown characters
    /// fall back to a 500-unit advance.
    pub fn char_width(&self, ch: char) -> f32 {
        match &self.widths {
            FontWidths::Proportional(widths) => *widths.get(&ch).unwrap_or(&500.0),
            FontWidths::Monospace(width) => *width,
        }
    }

    /// Width of a string in points at the given size.
    pub fn text_width(&self, text: &str, size: f32) -> f32 {
        let units: f32 = text.chars().map(|c| self.char_width(c)).sum();
        units * size / 1000.0
    }

    /// Vertical extent of a line (ascender to descender) in points at
    /// the given size.
    pub fn glyph_span(&self, size: f32) -> f32 {
        (self.ascender - self.descender) * size / 1000.0
    }
}

fn proportional_widths(table: &[(char, f32)]) -> HashMap<char, f32> {
    table.iter().copied().collect()
}

/// Helvetica AFM advance widths for the printable ASCII range.
const HELVETICA_WIDTHS: [(char, f32); 95] = [
    (' ', 278.0),
    ('!', 278.0),
    ('"', 355.0),
    ('#', 556.0),
    ('$', 556.0),
    ('%', 889.0),
    ('&', 667.0),
    ('\'', 191.0),
    ('(', 333.0),
    (')', 333.0),
    ('*', 389.0),
    ('+', 584.0),
    (',', 278.0),
    ('-', 333.0),
    ('.', 278.0),
    ('/', 278.0),
    ('0', 556.0),
    ('1', 556.0),
    ('2', 556.0),
    ('3', 556.0),
    ('4', 556.0),
    ('5', 556.0),
    ('6', 556.0),
    ('7', 556.0),
    ('8', 556.0),
    ('9', 556.0),
    (':', 278.0),
    (';', 278.0),
    ('<', 584.0),
    ('=', 584.0),
    ('>', 584.0),
    ('?', 556.0),
    ('@', 1015.0),
    ('A', 667.0),
    ('B', 667.0),
    ('C', 722.0),
    ('D', 722.0),
    ('E', 667.0),
    ('F', 611.0),
    ('G', 778.0),
    ('H', 722.0),
    ('I', 278.0),
    ('J', 500.0),
    ('K', 667.0),
    ('L', 556.0),
    ('M', 833.0),
    ('N', 722.0),
    ('O', 778.0),
    ('P', 667.0),
    ('Q', 778.0),
    ('R', 722.0),
    ('S', 667.0),
    ('T', 611.0),
    ('U', 722.0),
    ('V', 667.0),
    ('W', 944.0),
    ('X', 667.0),
    ('Y', 667.0),
    ('Z', 611.0),
    ('[', 278.0),
    ('\\', 278.0),
    (']', 278.0),
    ('^', 469.0),
    ('_', 556.0),
    ('`', 333.0),
    ('a', 556.0),
    ('b', 556.0),
    ('c', 500.0),
    ('d', 556.0),
    ('e', 556.0),
    ('f', 278.0),
    ('g', 556.0),
    ('h', 556.0),
    ('i', 222.0),
    ('j', 222.0),
    ('k', 500.0),
    ('l', 222.0),
    ('m', 833.0),
    ('n', 556.0),
    ('o', 556.0),
    ('p', 556.0),
    ('q', 556.0),
    ('r', 333.0),
    ('s', 500.0),
    ('t', 278.0),
    ('u', 556.0),
    ('v', 500.0),
    ('w', 722.0),
    ('x', 500.0),
    ('y', 500.0),
    ('z', 500.0),
    ('{', 334.0),
    ('|', 260.0),
    ('}', 334.0),
    ('~', 584.0),
];

/// Times-Roman AFM advance widths for the printable ASCII range.
const TIMES_ROMAN_WIDTHS: [(char, f32); 95] = [
    (' ', 250.0),
    ('!', 333.0),
    ('"', 408.0),
    ('#', 500.0),
    ('$', 500.0),
    ('%', 833.0),
    ('&', 778.0),
    ('\'', 180.0),
    ('(', 333.0),
    (')', 333.0),
    ('*', 500.0),
    ('+', 564.0),
    (',', 250.0),
    ('-', 333.0),
    ('.', 250.0),
    ('/', 278.0),
    ('0', 500.0),
    ('1', 500.0),
    ('2', 500.0),
    ('3', 500.0),
    ('4', 500.0),
    ('5', 500.0),
    ('6', 500.0),
    ('7', 500.0),
    ('8', 500.0),
    ('9', 500.0),
    (':', 278.0),
    (';', 278.0),
    ('<', 564.0),
    ('=', 564.0),
    ('>', 564.0),
    ('?', 444.0),
    ('@', 921.0),
    ('A', 722.0),
    ('B', 667.0),
    ('C', 667.0),
    ('D', 722.0),
    ('E', 611.0),
    ('F', 556.0),
    ('G', 722.0),
    ('H', 722.0),
    ('I', 333.0),
    ('J', 389.0),
    ('K', 722.0),
    ('L', 611.0),
    ('M', 889.0),
    ('N', 722.0),
    ('O', 722.0),
    ('P', 556.0),
    ('Q', 722.0),
    ('R', 667.0),
    ('S', 556.0),
    ('T', 611.0),
    ('U', 722.0),
    ('V', 722.0),
    ('W', 944.0),
    ('X', 722.0),
    ('Y', 722.0),
    ('Z', 611.0),
    ('[', 333.0),
    ('\\', 278.0),
    (']', 333.0),
    ('^', 469.0),
    ('_', 500.0),
    ('`', 333.0),
    ('a', 444.0),
    ('b', 500.0),
    ('c', 444.0),
    ('d', 500.0),
    ('e', 444.0),
    ('f', 333.0),
    ('g', 500.0),
    ('h', 500.0),
    ('i', 278.0),
    ('j', 278.0),
    ('k', 500.0),
    ('l', 278.0),
    ('m', 778.0),
    ('n', 500.0),
    ('o', 500.0),
    ('p', 500.0),
    ('q', 500.0),
    ('r', 333.0),
    ('s', 389.0),
    ('t', 278.0),
    ('u', 500.0),
    ('v', 500.0),
    ('w', 722.0),
    ('x', 500.0),
    ('y', 500.0),
    ('z', 444.0),
    ('{', 480.0),
    ('|', 200.0),
    ('}', 480.0),
    ('~', 541.0),
];
