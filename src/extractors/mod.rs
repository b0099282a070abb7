//! Text reconstruction from positioned glyphs.
//!
//! The content-order pass turns a page's glyph sequence into readable text;
//! the spacing module supplies the pluggable horizontal-gap oracle it
//! consults for omitted inter-word spaces.

pub mod content_order;
pub mod spacing;

pub use content_order::{reconstruct, ContentOrderExtractor, LINE_BREAK};
pub use spacing::{GapWhitespaceClassifier, WhitespaceClassifier};
