//! # Content Order Text
//!
//! Reconstructs human-readable text from a sequence of positioned glyphs in
//! content-stream order. The glyph stream carries no explicit layout; this
//! crate recovers the visual signals a reader expects:
//!
//! - **Inter-word spaces**: horizontal gaps classified by a pluggable
//!   whitespace oracle ([`extractors::WhitespaceClassifier`])
//! - **Line breaks**: vertical displacement larger than ~0.9x the smaller
//!   of the two glyphs' font sizes
//! - **Paragraph breaks**: displacement larger than ~1.7x the font size and
//!   directed down the page (opt-in, emitted as two line breaks)
//!
//! Glyph geometry and font metrics come from an upstream extractor; this
//! crate only consumes them through the [`content::Page`] trait. The
//! reconstruction pass is a pure function of its inputs: deterministic,
//! infallible, no I/O, safe to run on different pages from different
//! threads without coordination.
//!
//! ## Quick start
//!
//! ```
//! use content_order_text::content::{Glyph, SimplePage};
//! use content_order_text::extractors::reconstruct;
//! use content_order_text::geometry::Point;
//!
//! let glyphs = vec![
//!     Glyph::new("H", Point::new(0.0, 0.0), Point::new(6.0, 0.0)),
//!     Glyph::new("i", Point::new(6.0, 0.0), Point::new(9.0, 0.0)),
//! ];
//! let page = SimplePage::with_uniform_size(glyphs, 10.0);
//!
//! assert_eq!(reconstruct(&page, false), "Hi");
//! ```
//!
//! ## License
//!
//! Licensed under either of:
//!
//! * Apache License, Version 2.0 ([LICENSE-APACHE](LICENSE-APACHE) or <http://www.apache.org/licenses/LICENSE-2.0>)
//! * MIT license ([LICENSE-MIT](LICENSE-MIT) or <http://opensource.org/licenses/MIT>)
//!
//! at your option.

#![warn(missing_docs)]

// Page content model
pub mod content;

// Layout geometry
pub mod geometry;

// Text reconstruction
pub mod extractors;

pub use content::{Glyph, Page, SimplePage};
pub use extractors::{reconstruct, ContentOrderExtractor};
