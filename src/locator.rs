//! Reconstructs a target string from a page's positioned fragments.
//!
//! Page interpreters emit text one glyph run at a time, so a target
//! string is spread across many independently positioned fragments. The
//! locator walks the fragment sequence once and collects the contiguous
//! run whose texts concatenate to the target, one fragment per target
//! character.

use crate::fragment::Fragment;
use log::debug;

/// The contiguous fragment subsequence that spells out the target.
///
/// Holds one fragment per target character; never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchRun {
    fragments: Vec<Fragment>,
}

impl MatchRun {
    /// The matched fragments, in page order.
    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    /// Number of matched fragments (equals the target's character count).
    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    /// A successful match is never empty.
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }
}

/// Locate the first run of fragments whose texts spell out `target`.
///
/// `page_text` is the page's fully concatenated text; it is consulted
/// first, with line breaks stripped, as a cheap substring guard. If the
/// guard fails the fragments are never scanned.
///
/// The scan itself is a single pass with no backtracking: each fragment
/// either extends the candidate run by matching the next target
/// character exactly (case-sensitive, single character), or abandons the
/// run and resets the cursor to the start of the target. The abandoning
/// fragment is not re-tested against a restarted run, so an occurrence
/// whose prefix character repeats mid-run can be skipped; this is a
/// deliberate trade for the single-pass scan (see DESIGN.md).
///
/// Returns `None` when the target is absent or the scan ends with an
/// incomplete run.
pub fn locate(fragments: &[Fragment], page_text: &str, target: &str) -> Option<MatchRun> {
    if target.is_empty() {
        return None;
    }

    let flat: String = page_text.chars().filter(|c| !matches!(c, '\n' | '\r')).collect();
    if !flat.contains(target) {
        debug!("page text does not contain '{}', skipping fragment scan", target);
        return None;
    }

    let chars: Vec<char> = target.chars().collect();
    let mut run: Vec<Fragment> = Vec::with_capacity(chars.len());
    let mut count = 0usize;

    for fragment in fragments {
        if fragment_is_char(fragment, chars[count]) {
            run.push(fragment.clone());
            if count == chars.len() - 1 {
                // First occurrence wins; never scan past it.
                return Some(MatchRun { fragments: run });
            }
            count += 1;
        } else {
            run.clear();
            count = 0;
        }
    }

    if !run.is_empty() {
        debug!(
            "scan ended with an incomplete run of {} fragments for '{}'",
            run.len(),
            target
        );
    }
    None
}

/// A fragment matches a target character when its text is exactly that
/// single character.
fn fragment_is_char(fragment: &Fragment, ch: char) -> bool {
    let mut chars = fragment.text.chars();
    chars.next() == Some(ch) && chars.next().is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Rect;

    fn char_fragments(text: &str) -> Vec<Fragment> {
        text.chars()
            .enumerate()
            .map(|(i, c)| {
                let x = i as f32 * 10.0;
                Fragment::new(Rect::new(x, 0.0, x + 10.0, 12.0), c.to_string())
            })
            .collect()
    }

    #[test]
    fn test_locates_aligned_target() {
        let fragments = char_fragments("Hello");
        let run = locate(&fragments, "Hello", "Hello").unwrap();
        assert_eq!(run.len(), 5);
        assert_eq!(run.fragments()[0].text, "H");
        assert_eq!(run.fragments()[4].text, "o");
    }

    #[test]
    fn test_locates_target_mid_page() {
        let fragments = char_fragments("xxHelloyy");
        let run = locate(&fragments, "xxHelloyy", "Hello").unwrap();
        assert_eq!(run.len(), 5);
        assert_eq!(run.fragments()[0].bbox.left, 20.0);
    }

    #[test]
    fn test_absent_target_is_none() {
        let fragments = char_fragments("Hello");
        assert!(locate(&fragments, "Hello", "World").is_none());
    }

    #[test]
    fn test_precheck_skips_fragment_scan() {
        // Page text lacks the target even though fragments could spell
        // a prefix of it; the guard fires before any fragment is read.
        let fragments = char_fragments("Hel");
        assert!(locate(&fragments, "Hel", "Hello").is_none());
    }

    #[test]
    fn test_precheck_ignores_line_breaks() {
        let fragments = char_fragments("Hello");
        let run = locate(&fragments, "Hel\nlo", "Hello").unwrap();
        assert_eq!(run.len(), 5);
    }

    #[test]
    fn test_first_occurrence_wins() {
        let fragments = char_fragments("abab");
        let run = locate(&fragments, "abab", "ab").unwrap();
        assert_eq!(run.len(), 2);
        // The run covers positions 0..2, not the second occurrence.
        assert_eq!(run.fragments()[0].bbox.left, 0.0);
        assert_eq!(run.fragments()[1].bbox.left, 10.0);
    }

    #[test]
    fn test_incomplete_run_is_none() {
        // Page text passes the guard but the fragments are not split
        // one character each, so no run can assemble.
        let fragments = vec![
            Fragment::new(Rect::new(0.0, 0.0, 20.0, 12.0), "He"),
            Fragment::new(Rect::new(20.0, 0.0, 50.0, 12.0), "llo"),
        ];
        assert!(locate(&fragments, "Hello", "Hello").is_none());
    }

    #[test]
    fn test_run_abandoned_on_mismatch() {
        // "aXab": the 'X' abandons the first 'a', and a fresh run
        // assembles from the second 'a'.
        let fragments = char_fragments("aXab");
        let run = locate(&fragments, "aXab", "ab").unwrap();
        assert_eq!(run.fragments()[0].bbox.left, 20.0);
    }

    #[test]
    fn test_repeated_prefix_skip_is_preserved() {
        // "aab" contains "ab" at positions 1..3, but the second 'a'
        // abandons the run without being re-tested, so the occurrence
        // is skipped. Documented behavior, not a bug to fix here.
        let fragments = char_fragments("aab");
        assert!(locate(&fragments, "aab", "ab").is_none());
    }

    #[test]
    fn test_empty_target_is_none() {
        let fragments = char_fragments("Hello");
        assert!(locate(&fragments, "Hello", "").is_none());
    }

    #[test]
    fn test_case_sensitive() {
        let fragments = char_fragments("hello");
        assert!(locate(&fragments, "hello", "Hello").is_none());
    }

    #[test]
    fn test_multibyte_characters() {
        let fragments = char_fragments("héllo");
        let run = locate(&fragments, "héllo", "hé").unwrap();
        assert_eq!(run.len(), 2);
        assert_eq!(run.fragments()[1].text, "é");
    }
}
