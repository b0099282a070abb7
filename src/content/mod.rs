//! Page content model: positioned glyphs in content-stream order.
//!
//! A [`Glyph`] is one rendered character with its baseline geometry, as it
//! was drawn in the source document. A [`Page`] is an ordered, read-only
//! view over those glyphs plus a source of per-glyph font sizes. Glyph
//! extraction itself happens upstream; this crate only consumes the result.
//!
//! Content order is the order glyphs were declared in the content stream,
//! which is not necessarily left-to-right or top-to-bottom reading order.

use serde::{Deserialize, Serialize};

use crate::geometry::Point;

/// One positioned character from a page content stream.
///
/// Immutable once produced: the reconstruction pass never mutates, reorders,
/// or drops glyphs from the input sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Glyph {
    /// The rendered text, usually a single character.
    ///
    /// May be empty (e.g. a zero-width control code the upstream decoder
    /// could not map) or a literal space glyph.
    pub value: String,

    /// Start of the glyph's baseline in document space.
    ///
    /// Coordinate convention: y increases toward the top of the page, so a
    /// larger baseline-y means the glyph sits higher on the visual page.
    /// Paragraph detection depends on this convention.
    pub start_baseline: Point,

    /// End of the glyph's baseline (start plus the horizontal advance).
    pub end_baseline: Point,
}

impl Glyph {
    /// Create a glyph from its value and baseline endpoints.
    pub fn new(value: impl Into<String>, start_baseline: Point, end_baseline: Point) -> Self {
        Self {
            value: value.into(),
            start_baseline,
            end_baseline,
        }
    }

    /// Horizontal advance of the glyph along its baseline.
    pub fn advance_width(&self) -> f32 {
        self.end_baseline.x - self.start_baseline.x
    }

    /// Whether the value is exactly one literal space character.
    pub fn is_space(&self) -> bool {
        self.value == " "
    }

    /// Whether the value is empty or consists only of whitespace.
    pub fn is_blank(&self) -> bool {
        self.value.trim().is_empty()
    }
}

/// An ordered, finite sequence of glyphs with per-glyph font sizes.
///
/// Implementations own the glyph data; the reconstruction pass borrows the
/// page for the duration of one call and treats the sequence as index-stable.
pub trait Page {
    /// The page's glyphs in content-stream order.
    fn glyphs(&self) -> &[Glyph];

    /// Font size in points for the glyph at `index` into [`Page::glyphs`].
    ///
    /// Expected to be positive for real glyphs; zero or negative values are
    /// tolerated and simply shrink the vertical-gap thresholds derived from
    /// them.
    fn point_size(&self, index: usize) -> f32;
}

/// An in-memory [`Page`] backed by parallel glyph and point-size vectors.
#[derive(Debug, Clone, Default)]
pub struct SimplePage {
    glyphs: Vec<Glyph>,
    point_sizes: Vec<f32>,
}

impl SimplePage {
    /// Create a page from glyphs and their font sizes.
    ///
    /// The vectors are parallel: `point_sizes[i]` is the size of
    /// `glyphs[i]`. Missing sizes read as `0.0`.
    pub fn new(glyphs: Vec<Glyph>, point_sizes: Vec<f32>) -> Self {
        Self {
            glyphs,
            point_sizes,
        }
    }

    /// Create a page where every glyph has the same font size.
    pub fn with_uniform_size(glyphs: Vec<Glyph>, point_size: f32) -> Self {
        let point_sizes = vec![point_size; glyphs.len()];
        Self {
            glyphs,
            point_sizes,
        }
    }
}

impl Page for SimplePage {
    fn glyphs(&self) -> &[Glyph] {
        &self.glyphs
    }

    fn point_size(&self, index: usize) -> f32 {
        self.point_sizes.get(index).copied().unwrap_or(0.0)
    }
}
