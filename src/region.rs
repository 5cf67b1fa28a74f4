//! Bounding box reduction for matched fragment runs.
//!
//! Collapses a match run into the single rectangle that will be masked
//! and refilled with replacement text.

use crate::geometry::Rect;
use crate::locator::MatchRun;

/// Widening applied to the union's right edge so the mask and re-flowed
/// text clear the last glyph's right bearing.
pub const ADJUST_MARGIN: f32 = 15.0;

/// Horizontal page margin used when responsive mode stretches the box
/// to the page's printable width.
pub const PAGE_MARGIN: f32 = 15.0;

/// Compute the target box for a match run.
///
/// The box is the coordinate-wise union of the run's fragment boxes
/// with the right edge extended by [`ADJUST_MARGIN`]. With `responsive`
/// set, the horizontal extent is instead the page's printable width:
/// `page_box.left + margin` through `page_box.right - margin`,
/// regardless of where the matched text sat. Responsive mode is meant
/// for replacement text expected to run longer than the original.
///
/// Returns `None` for an empty run.
pub fn reduce(run: &MatchRun, page_box: &Rect, responsive: bool, margin: f32) -> Option<Rect> {
    let mut iter = run.fragments().iter();
    let mut bounds = iter.next()?.bbox;
    for fragment in iter {
        bounds = bounds.union(&fragment.bbox);
    }

    bounds.right += ADJUST_MARGIN;

    if responsive {
        bounds.left = page_box.left + margin;
        bounds.right = page_box.right - margin;
    }

    Some(bounds)
}
