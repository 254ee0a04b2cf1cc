//! Structured text page model and range queries.
//!
//! A [`Page`] is an immutable tree of blocks (text, images, vector
//! drawings, table grids and structure elements) holding lines of
//! positioned characters. Characters are addressed linearly by
//! `(block, line, character)` triples ([`Address`]), and ranges of them
//! ([`AddressSpan`]) drive the query operations:
//!
//! - [`Page::extract_text`] returns the text of a range;
//! - [`Page::highlight_quads`] returns the quadrilaterals to paint a
//!   selection, collapsed to line and block boxes where possible;
//! - [`Page::hit_at`] and [`Page::closest_hit_at`] map a point in page
//!   units to a character address;
//! - [`Page::search`] finds regex matches, one line at a time.
//!
//! Pages are assembled from plain descriptors (see [`builder`]) produced
//! by whatever decodes the source document; this crate is independent of
//! any particular document format.
//!
//! ```
//! use stext::{
//!     BlockDescriptor, CharDescriptor, LineDescriptor, Page, Point, Rect, SearchOptions,
//!     TextDirection, WritingMode,
//! };
//!
//! let characters: Vec<CharDescriptor> = "hit"
//!     .chars()
//!     .enumerate()
//!     .map(|(i, glyph)| CharDescriptor {
//!         code_point: glyph as u32,
//!         color: 0,
//!         origin: Point::new(i as f32, 1.0),
//!         quad: Rect::new(i as f32, 0.0, i as f32 + 1.0, 1.0).to_quad(),
//!         size: 1.0,
//!         direction: TextDirection::LeftToRight,
//!         font: None,
//!     })
//!     .collect();
//!
//! let page = Page::build(vec![BlockDescriptor::Text {
//!     bounding_box: Rect::new(0.0, 0.0, 3.0, 1.0),
//!     lines: vec![LineDescriptor {
//!         writing_mode: WritingMode::Horizontal,
//!         direction: Point::new(1.0, 0.0),
//!         bounding_box: Rect::new(0.0, 0.0, 3.0, 1.0),
//!         characters,
//!     }],
//! }])?;
//!
//! let matches = page.search_text("hi", &SearchOptions::default());
//! assert_eq!(matches.len(), 1);
//! assert_eq!(page.extract_text(&matches[0]), "hi");
//! # Ok::<(), stext::PageError>(())
//! ```

pub mod address;
pub mod block;
pub mod builder;
pub mod error;
pub mod geometry;
pub mod page;
pub mod search;
pub mod structure;
pub mod text;

mod hit;
mod selection;

pub use address::{Address, AddressSpan};
pub use block::{
    Block, BlockType, GridBlock, GridLine, ImageBlock, ImageResource, Lines, StructureBlock,
    TextBlock, VectorBlock,
};
pub use builder::{BlockDescriptor, CharDescriptor, LineDescriptor, StructureTag};
pub use error::PageError;
pub use geometry::{Point, Quad, Rect};
pub use page::Page;
pub use search::{SearchMatches, SearchOptions};
pub use selection::HighlightQuads;
pub use structure::StructureType;
pub use text::{Character, Font, Line, TextDirection, WritingMode};
