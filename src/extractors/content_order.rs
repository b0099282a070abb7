//! Content-order text reconstruction.
//!
//! Rebuilds a readable string from a page's glyphs in the order they appear
//! in the content stream. The raw glyph sequence carries no explicit layout:
//! this pass recovers inter-word spaces, line breaks, and paragraph breaks
//! from baseline geometry and font sizes alone.
//!
//! The decision procedure is a single forward scan. For each pair of
//! adjacent emitted glyphs it chooses one of four outputs: nothing, a
//! space, a line break, or a paragraph break (two line breaks, opt-in).
//! Vertical displacement relative to the smaller of the two font sizes
//! separates real line leading from same-line baseline jitter such as
//! subscripts; a larger, downward-directed displacement signals a new
//! paragraph block rather than ordinary line spacing.
//!
//! The pass is total: it never fails, holds no state between calls, and
//! performs no I/O. Cost is linear in glyph count plus one backward scan
//! per non-whitespace glyph.

use crate::content::{Glyph, Page};
use crate::extractors::spacing::{GapWhitespaceClassifier, WhitespaceClassifier};

/// Line terminator used for reconstructed line and paragraph breaks.
#[cfg(windows)]
pub const LINE_BREAK: &str = "\r\n";
/// Line terminator used for reconstructed line and paragraph breaks.
#[cfg(not(windows))]
pub const LINE_BREAK: &str = "\n";

/// Vertical gap ratio (of the smaller font size) above which two glyphs
/// sit on different lines.
const NEWLINE_GAP_RATIO: f32 = 0.9;

/// Vertical gap ratio above which a downward move starts a new paragraph.
const PARAGRAPH_GAP_RATIO: f32 = 1.7;

/// Reconstructs text from content-ordered glyphs.
///
/// Holds the whitespace classifier that decides whether a horizontal gap
/// between two glyphs stands for an omitted space. The extractor itself is
/// stateless across calls; reconstructing the same page twice yields
/// byte-identical output.
///
/// # Examples
///
/// ```
/// use content_order_text::content::{Glyph, SimplePage};
/// use content_order_text::extractors::ContentOrderExtractor;
/// use content_order_text::geometry::Point;
///
/// let glyphs = vec![
///     Glyph::new("H", Point::new(0.0, 0.0), Point::new(6.0, 0.0)),
///     Glyph::new("i", Point::new(6.0, 0.0), Point::new(9.0, 0.0)),
/// ];
/// let page = SimplePage::with_uniform_size(glyphs, 10.0);
///
/// let extractor = ContentOrderExtractor::new();
/// assert_eq!(extractor.reconstruct(&page, false), "Hi");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ContentOrderExtractor<C = GapWhitespaceClassifier> {
    classifier: C,
}

impl ContentOrderExtractor<GapWhitespaceClassifier> {
    /// Create an extractor with the default gap-based whitespace classifier.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C: WhitespaceClassifier> ContentOrderExtractor<C> {
    /// Create an extractor with a caller-supplied whitespace classifier.
    pub fn with_classifier(classifier: C) -> Self {
        Self { classifier }
    }

    /// Reconstruct the page's text in content order.
    ///
    /// With `add_double_newline` set, paragraph-sized downward jumps emit
    /// two line breaks instead of one. An empty glyph sequence yields an
    /// empty string; the call cannot fail.
    pub fn reconstruct(&self, page: &impl Page, add_double_newline: bool) -> String {
        let glyphs = page.glyphs();
        let mut output = OutputBuffer::new();

        // Index of the last glyph appended to the output, if any.
        let mut previous: Option<usize> = None;
        // True when the most recent output character is a single space, or
        // a line break was just emitted (a break absorbs incidental spaces).
        let mut just_emitted_whitespace = false;

        for (i, glyph) in glyphs.iter().enumerate() {
            if glyph.value.is_empty() {
                continue;
            }

            if glyph.is_space() {
                if just_emitted_whitespace {
                    continue;
                }
                if previous.is_some() && classify_newline(page, previous, i).is_newline {
                    // Layout padding between lines, not a real inter-word
                    // space. Scan state stays untouched.
                    continue;
                }
                output.append(" ");
                previous = Some(i);
                just_emitted_whitespace = true;
                continue;
            }

            just_emitted_whitespace = false;

            if let Some(prev_index) = previous {
                let nw_previous = nearest_non_blank_before(glyphs, i);
                let decision = classify_newline(page, nw_previous, i);

                if decision.is_newline {
                    // A trailing space before a line break is illegal.
                    if output.ends_with(' ') {
                        output.remove_last(1);
                    }
                    output.append(LINE_BREAK);
                    if add_double_newline && decision.is_double {
                        log::trace!("paragraph break before glyph {i} ({:?})", glyph.value);
                        output.append(LINE_BREAK);
                    } else {
                        log::trace!("line break before glyph {i} ({:?})", glyph.value);
                    }
                    just_emitted_whitespace = true;
                } else if !glyphs[prev_index].is_space() {
                    let gap = glyph.start_baseline.x - glyphs[prev_index].end_baseline.x;
                    if self
                        .classifier
                        .is_probably_whitespace(gap, &glyphs[prev_index])
                    {
                        log::trace!("inferred space before glyph {i} (gap {gap})");
                        output.append(" ");
                        just_emitted_whitespace = true;
                    }
                }
            }

            output.append(&glyph.value);
            previous = Some(i);
        }

        output.into_string()
    }
}

/// Reconstruct a page's text with the default whitespace classifier.
///
/// Convenience for [`ContentOrderExtractor::reconstruct`].
pub fn reconstruct(page: &impl Page, add_double_newline: bool) -> String {
    ContentOrderExtractor::new().reconstruct(page, add_double_newline)
}

/// Outcome of comparing two glyphs' baselines for a line boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct NewlineDecision {
    /// The glyphs sit on different lines.
    is_newline: bool,
    /// The vertical jump is paragraph-sized and directed down the page.
    is_double: bool,
}

impl NewlineDecision {
    const NONE: Self = Self {
        is_newline: false,
        is_double: false,
    };
}

/// Classify the vertical displacement between glyphs `a` and `b`.
///
/// Point sizes are rounded to whole points before taking the minimum, so
/// fractional sizes from scaled text behave like their nominal size.
/// Both thresholds are strict: a gap exactly at the boundary is not a
/// newline. Degenerate point sizes round toward zero, which shrinks the
/// thresholds; genuinely colocated glyphs still classify as "no newline"
/// because their vertical gap is ~0 and the comparison is strict.
fn classify_newline(page: &impl Page, a: Option<usize>, b: usize) -> NewlineDecision {
    let Some(a) = a else {
        return NewlineDecision::NONE;
    };

    let glyphs = page.glyphs();
    let size_a = page.point_size(a).round() as i32;
    let size_b = page.point_size(b).round() as i32;
    let min_size = size_a.min(size_b) as f32;

    let y_a = glyphs[a].start_baseline.y;
    let y_b = glyphs[b].start_baseline.y;
    let vertical_gap = (y_a - y_b).abs();

    // Baseline-y grows toward the top of the page: y_a > y_b means `a` sits
    // visually above `b`, so the text moved down the page.
    let is_double = vertical_gap > PARAGRAPH_GAP_RATIO * min_size && y_a > y_b;
    let is_newline = vertical_gap > NEWLINE_GAP_RATIO * min_size;

    NewlineDecision {
        is_newline,
        is_double,
    }
}

/// Nearest glyph before `index` whose value is neither empty nor
/// all-whitespace. Plain backward scan over the immutable sequence.
fn nearest_non_blank_before(glyphs: &[Glyph], index: usize) -> Option<usize> {
    (0..index).rev().find(|&i| !glyphs[i].is_blank())
}

/// Growable output buffer scoped to one reconstruction call.
#[derive(Debug, Default)]
struct OutputBuffer {
    text: String,
}

impl OutputBuffer {
    fn new() -> Self {
        Self::default()
    }

    fn append(&mut self, text: &str) {
        self.text.push_str(text);
    }

    /// Remove the last `n` characters (not bytes).
    fn remove_last(&mut self, n: usize) {
        for _ in 0..n {
            if self.text.pop().is_none() {
                break;
            }
        }
    }

    fn ends_with(&self, c: char) -> bool {
        self.text.ends_with(c)
    }

    fn into_string(self) -> String {
        self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::SimplePage;
    use crate::geometry::Point;

    fn glyph(value: &str, x: f32, y: f32, advance: f32) -> Glyph {
        Glyph::new(value, Point::new(x, y), Point::new(x + advance, y))
    }

    fn page_at_10pt(glyphs: Vec<Glyph>) -> SimplePage {
        SimplePage::with_uniform_size(glyphs, 10.0)
    }

    #[test]
    fn test_newline_requires_gap_above_ratio() {
        let page = page_at_10pt(vec![glyph("A", 0.0, 15.0, 6.0), glyph("B", 0.0, 0.0, 6.0)]);
        let decision = classify_newline(&page, Some(0), 1);
        assert!(decision.is_newline);
        assert!(!decision.is_double);
    }

    #[test]
    fn test_newline_boundary_is_strict() {
        // Gap of exactly 0.9 * 10 is NOT a newline.
        let page = page_at_10pt(vec![glyph("A", 0.0, 9.0, 6.0), glyph("B", 0.0, 0.0, 6.0)]);
        assert_eq!(classify_newline(&page, Some(0), 1), NewlineDecision::NONE);

        let page = page_at_10pt(vec![glyph("A", 0.0, 9.1, 6.0), glyph("B", 0.0, 0.0, 6.0)]);
        assert!(classify_newline(&page, Some(0), 1).is_newline);
    }

    #[test]
    fn test_double_boundary_is_strict() {
        // Gap of exactly 1.7 * 10, downward: a newline but not a double.
        let page = page_at_10pt(vec![glyph("A", 0.0, 17.0, 6.0), glyph("B", 0.0, 0.0, 6.0)]);
        let decision = classify_newline(&page, Some(0), 1);
        assert!(decision.is_newline);
        assert!(!decision.is_double);

        let page = page_at_10pt(vec![glyph("A", 0.0, 17.5, 6.0), glyph("B", 0.0, 0.0, 6.0)]);
        assert!(classify_newline(&page, Some(0), 1).is_double);
    }

    #[test]
    fn test_double_requires_downward_direction() {
        // Same magnitude but moving up the page: line break only.
        let page = page_at_10pt(vec![glyph("A", 0.0, 0.0, 6.0), glyph("B", 0.0, 20.0, 6.0)]);
        let decision = classify_newline(&page, Some(0), 1);
        assert!(decision.is_newline);
        assert!(!decision.is_double);
    }

    #[test]
    fn test_no_previous_is_never_a_newline() {
        let page = page_at_10pt(vec![glyph("A", 0.0, 100.0, 6.0)]);
        assert_eq!(classify_newline(&page, None, 0), NewlineDecision::NONE);
    }

    #[test]
    fn test_min_size_uses_smaller_font() {
        // 10pt vs 30pt, gap 12: 12 > 0.9 * 10 -> newline despite the large font.
        let page = SimplePage::new(
            vec![glyph("A", 0.0, 12.0, 6.0), glyph("B", 0.0, 0.0, 6.0)],
            vec![10.0, 30.0],
        );
        assert!(classify_newline(&page, Some(0), 1).is_newline);
    }

    #[test]
    fn test_degenerate_point_sizes_tolerated() {
        // Zero-size glyphs on the same baseline: gap 0 is not > 0.
        let page = SimplePage::new(
            vec![glyph("A", 0.0, 0.0, 6.0), glyph("B", 6.0, 0.0, 6.0)],
            vec![0.0, 0.0],
        );
        assert_eq!(classify_newline(&page, Some(0), 1), NewlineDecision::NONE);
    }

    #[test]
    fn test_nearest_non_blank_skips_space_runs() {
        let glyphs = vec![
            glyph("A", 0.0, 0.0, 6.0),
            glyph(" ", 6.0, 0.0, 3.0),
            glyph("", 9.0, 0.0, 0.0),
            glyph(" ", 9.0, 0.0, 3.0),
            glyph("B", 12.0, 0.0, 6.0),
        ];
        assert_eq!(nearest_non_blank_before(&glyphs, 4), Some(0));
        assert_eq!(nearest_non_blank_before(&glyphs, 1), Some(0));
        assert_eq!(nearest_non_blank_before(&glyphs, 0), None);
    }

    #[test]
    fn test_output_buffer_remove_last() {
        let mut buf = OutputBuffer::new();
        buf.append("ab ");
        assert!(buf.ends_with(' '));
        buf.remove_last(1);
        assert_eq!(buf.into_string(), "ab");

        // Removing past the start is a no-op rather than a panic.
        let mut buf = OutputBuffer::new();
        buf.append("x");
        buf.remove_last(5);
        assert_eq!(buf.into_string(), "");
    }

    #[test]
    fn test_output_buffer_counts_chars_not_bytes() {
        let mut buf = OutputBuffer::new();
        buf.append("é");
        buf.remove_last(1);
        assert_eq!(buf.into_string(), "");
    }
}
