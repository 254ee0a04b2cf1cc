//! Descriptors for building a [`Page`].
//!
//! A decoding front-end (whatever turns a document page into glyphs,
//! images and structure) produces a tree of plain descriptors; the page is
//! then assembled and validated in one pass with [`Page::build`]. All
//! invariants the query layer relies on (valid scalar code points,
//! non-empty lines, non-empty structure elements) are checked here, so a
//! built page can never fail a query.

use std::sync::Arc;

use crate::block::{
    Block, GridBlock, GridLine, ImageBlock, ImageResource, StructureBlock, TextBlock, VectorBlock,
};
use crate::error::PageError;
use crate::geometry::{Point, Quad, Rect};
use crate::page::Page;
use crate::structure::StructureType;
use crate::text::{Character, Font, Line, TextDirection, WritingMode};

/// Describes one character of a line.
#[derive(Debug, Clone)]
pub struct CharDescriptor {
    /// Unicode code point; must be a valid scalar value.
    pub code_point: u32,
    /// Packed sRGB colour.
    pub color: u32,
    /// Baseline origin.
    pub origin: Point,
    /// Bounding quadrilateral.
    pub quad: Quad,
    /// Font size in points.
    pub size: f32,
    /// Text flow direction.
    pub direction: TextDirection,
    /// The font drawing the character, if known.
    pub font: Option<Arc<Font>>,
}

/// Describes one line of a text block. Must contain at least one character.
#[derive(Debug, Clone)]
pub struct LineDescriptor {
    pub writing_mode: WritingMode,
    /// Normalised text flow direction.
    pub direction: Point,
    pub bounding_box: Rect,
    pub characters: Vec<CharDescriptor>,
}

/// The tag of a structure element descriptor.
#[derive(Debug, Clone)]
pub enum StructureTag {
    /// A standard structure type.
    Standard(StructureType),
    /// A raw tag string; resolved against the standard tags, falling back
    /// to [`StructureType::Invalid`] when unknown.
    Raw(String),
}

/// Describes one block of a page.
#[derive(Debug, Clone)]
pub enum BlockDescriptor {
    /// A block of text lines.
    Text {
        bounding_box: Rect,
        lines: Vec<LineDescriptor>,
    },
    /// A raster image.
    Image {
        bounding_box: Rect,
        /// Transformation matrix `[a, b, c, d, e, f]` placing the image.
        transform: [f32; 6],
        image: Arc<ImageResource>,
    },
    /// A vector drawing.
    Vector {
        bounding_box: Rect,
        stroked: bool,
        /// RGBA colour.
        color: [u8; 4],
    },
    /// A recognised table grid.
    Grid {
        bounding_box: Rect,
        x_grid: Vec<GridLine>,
        max_uncertainty_x: i32,
        y_grid: Vec<GridLine>,
        max_uncertainty_y: i32,
    },
    /// A structure element. Must have at least one child.
    Structure {
        tag: StructureTag,
        children: Vec<BlockDescriptor>,
    },
}

impl Page {
    /// Builds a page from block descriptors, validating them.
    ///
    /// Fails with [`PageError`] if a code point is not a valid Unicode
    /// scalar value, a line has no characters, or a structure element has
    /// no children.
    pub fn build(descriptors: Vec<BlockDescriptor>) -> Result<Page, PageError> {
        let mut blocks = Vec::with_capacity(descriptors.len());
        for (index, descriptor) in descriptors.into_iter().enumerate() {
            blocks.push(build_block(descriptor, index, index)?);
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(blocks = blocks.len(), "structured text page built");
        Ok(Page::new(blocks))
    }
}

fn build_block(
    descriptor: BlockDescriptor,
    top_block: usize,
    sibling_index: usize,
) -> Result<Block, PageError> {
    match descriptor {
        BlockDescriptor::Text {
            bounding_box,
            lines,
        } => {
            let lines = lines
                .into_iter()
                .enumerate()
                .map(|(line, descriptor)| build_line(descriptor, top_block, line))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Block::Text(TextBlock::new(bounding_box, lines)))
        }
        BlockDescriptor::Image {
            bounding_box,
            transform,
            image,
        } => Ok(Block::Image(ImageBlock::new(bounding_box, transform, image))),
        BlockDescriptor::Vector {
            bounding_box,
            stroked,
            color,
        } => Ok(Block::Vector(VectorBlock::new(bounding_box, stroked, color))),
        BlockDescriptor::Grid {
            bounding_box,
            x_grid,
            max_uncertainty_x,
            y_grid,
            max_uncertainty_y,
        } => Ok(Block::Grid(GridBlock::new(
            bounding_box,
            x_grid,
            max_uncertainty_x,
            y_grid,
            max_uncertainty_y,
        ))),
        BlockDescriptor::Structure { tag, children } => {
            if children.is_empty() {
                return Err(PageError::EmptyStructure { block: top_block });
            }
            let children = children
                .into_iter()
                .enumerate()
                .map(|(index, child)| build_block(child, top_block, index))
                .collect::<Result<Vec<_>, _>>()?;
            let (structure_type, raw_structure) = match tag {
                StructureTag::Standard(structure_type) => (structure_type, None),
                StructureTag::Raw(raw) => (
                    StructureType::from_tag(&raw).unwrap_or(StructureType::Invalid),
                    Some(raw),
                ),
            };
            Ok(Block::Structure(StructureBlock::new(
                structure_type,
                raw_structure,
                sibling_index,
                children,
            )))
        }
    }
}

fn build_line(descriptor: LineDescriptor, block: usize, line: usize) -> Result<Line, PageError> {
    if descriptor.characters.is_empty() {
        return Err(PageError::EmptyLine { block, line });
    }
    let mut text = String::with_capacity(descriptor.characters.len());
    let mut characters = Vec::with_capacity(descriptor.characters.len());
    for ch in descriptor.characters {
        let glyph = char::from_u32(ch.code_point).ok_or(PageError::InvalidCodePoint(ch.code_point))?;
        text.push(glyph);
        characters.push(Character {
            code_point: ch.code_point,
            glyph,
            color: ch.color,
            origin: ch.origin,
            bounding_quad: ch.quad,
            size: ch.size,
            direction: ch.direction,
            font: ch.font,
        });
    }
    Ok(Line::new(
        descriptor.writing_mode,
        descriptor.direction,
        descriptor.bounding_box,
        characters,
        text,
    ))
}
