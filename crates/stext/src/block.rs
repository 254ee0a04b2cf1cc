//! Page content blocks: text, image, vector, grid and structure blocks.
//!
//! Every block exposes the same line-oriented contract (`bounding_box`,
//! `line_count`, `line`, `lines`) so that the address-based queries can walk
//! a page uniformly. Non-text blocks carry a single synthetic line covering
//! their bounding box; structure blocks expose the lines of all their
//! descendants in depth-first order.

use std::sync::Arc;

use once_cell::sync::OnceCell;

use crate::geometry::Rect;
use crate::structure::StructureType;
use crate::text::Line;

/// Discriminant of a [`Block`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BlockType {
    /// A block of text lines.
    Text,
    /// A raster image.
    Image,
    /// A vector drawing.
    Vector,
    /// A recognised table grid.
    Grid,
    /// A structure element grouping other blocks.
    Structure,
}

/// A decoded raster image referenced by an [`ImageBlock`]. The pixel data
/// itself is owned by the rendering collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImageResource {
    /// Width of the image in pixels.
    pub width: u32,
    /// Height of the image in pixels.
    pub height: u32,
}

impl ImageResource {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// A block containing lines of text.
#[derive(Debug, Clone)]
pub struct TextBlock {
    /// Axis-aligned bounding box of the block.
    pub bounding_box: Rect,
    /// The lines of the block, in reading order.
    pub lines: Vec<Line>,
}

impl TextBlock {
    pub(crate) fn new(bounding_box: Rect, lines: Vec<Line>) -> Self {
        Self {
            bounding_box,
            lines,
        }
    }
}

/// A block containing a raster image.
#[derive(Debug, Clone)]
pub struct ImageBlock {
    /// Axis-aligned bounding box of the block.
    pub bounding_box: Rect,
    /// Transformation matrix `[a, b, c, d, e, f]` placing the image on the
    /// page.
    pub transform: [f32; 6],
    /// The image drawn by this block.
    pub image: Arc<ImageResource>,
    pub(crate) line: Line,
}

impl ImageBlock {
    pub(crate) fn new(bounding_box: Rect, transform: [f32; 6], image: Arc<ImageResource>) -> Self {
        Self {
            bounding_box,
            transform,
            image,
            line: Line::synthetic(bounding_box),
        }
    }
}

/// A block containing a vector drawing.
#[derive(Debug, Clone)]
pub struct VectorBlock {
    /// Axis-aligned bounding box of the block.
    pub bounding_box: Rect,
    /// Whether the path is stroked (as opposed to filled).
    pub stroked: bool,
    /// RGBA colour of the drawing.
    pub color: [u8; 4],
    pub(crate) line: Line,
}

impl VectorBlock {
    pub(crate) fn new(bounding_box: Rect, stroked: bool, color: [u8; 4]) -> Self {
        Self {
            bounding_box,
            stroked,
            color,
            line: Line::synthetic(bounding_box),
        }
    }
}

/// A horizontal or vertical ruling of a [`GridBlock`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridLine {
    /// Position of the ruling along its axis.
    pub position: f32,
    /// Detection uncertainty; lower values mean higher confidence.
    pub uncertainty: i32,
}

/// A block describing a recognised table grid.
#[derive(Debug, Clone)]
pub struct GridBlock {
    /// Axis-aligned bounding box of the block.
    pub bounding_box: Rect,
    /// Vertical rulings, by x position.
    pub x_grid: Vec<GridLine>,
    /// Highest uncertainty among the vertical rulings.
    pub max_uncertainty_x: i32,
    /// Horizontal rulings, by y position.
    pub y_grid: Vec<GridLine>,
    /// Highest uncertainty among the horizontal rulings.
    pub max_uncertainty_y: i32,
    pub(crate) line: Line,
}

impl GridBlock {
    pub(crate) fn new(
        bounding_box: Rect,
        x_grid: Vec<GridLine>,
        max_uncertainty_x: i32,
        y_grid: Vec<GridLine>,
        max_uncertainty_y: i32,
    ) -> Self {
        Self {
            bounding_box,
            x_grid,
            max_uncertainty_x,
            y_grid,
            max_uncertainty_y,
            line: Line::synthetic(bounding_box),
        }
    }
}

/// Path from a structure block down to one line of a descendant leaf block:
/// the child index at each structure level, then the line index within the
/// leaf.
#[derive(Debug, Clone)]
struct LinePath {
    children: Vec<usize>,
    line: usize,
}

/// A structure element grouping other blocks.
///
/// The bounding box is the union of the children's boxes. Line access is
/// flattened over all descendants in depth-first order; the flattening is
/// computed on first indexed access and cached.
#[derive(Debug, Clone)]
pub struct StructureBlock {
    structure_type: StructureType,
    raw_structure: Option<String>,
    index: usize,
    bounding_box: Rect,
    children: Vec<Block>,
    flattened: OnceCell<Vec<LinePath>>,
}

impl StructureBlock {
    /// `children` must be non-empty so the bounding-box fold is defined.
    pub(crate) fn new(
        structure_type: StructureType,
        raw_structure: Option<String>,
        index: usize,
        children: Vec<Block>,
    ) -> Self {
        debug_assert!(!children.is_empty());
        let mut bounding_box = children[0].bounding_box();
        for child in &children[1..] {
            bounding_box = bounding_box.union(&child.bounding_box());
        }
        Self {
            structure_type,
            raw_structure,
            index,
            bounding_box,
            children,
            flattened: OnceCell::new(),
        }
    }

    /// The standard type of this structure element.
    pub fn structure_type(&self) -> StructureType {
        self.structure_type
    }

    /// The raw structure tag, when it differs from (or is not) a standard
    /// tag.
    pub fn raw_structure(&self) -> Option<&str> {
        self.raw_structure.as_deref()
    }

    /// The index of this element among its siblings.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Union of the children's bounding boxes.
    pub fn bounding_box(&self) -> Rect {
        self.bounding_box
    }

    /// The blocks directly contained in this element.
    pub fn children(&self) -> &[Block] {
        &self.children
    }

    fn flattened(&self) -> &[LinePath] {
        self.flattened.get_or_init(|| {
            #[cfg(feature = "tracing")]
            tracing::trace!(children = self.children.len(), "flattening structure block");
            let mut paths = Vec::new();
            let mut prefix = Vec::new();
            collect_line_paths(&self.children, &mut prefix, &mut paths);
            paths
        })
    }

    fn resolve(&self, path: &LinePath) -> &Line {
        let mut block = &self.children[path.children[0]];
        for &child in &path.children[1..] {
            block = match block {
                Block::Structure(s) => &s.children[child],
                _ => unreachable!("line paths descend through structure blocks only"),
            };
        }
        match block {
            Block::Text(b) => &b.lines[path.line],
            Block::Image(b) => &b.line,
            Block::Vector(b) => &b.line,
            Block::Grid(b) => &b.line,
            Block::Structure(_) => unreachable!("line paths end at leaf blocks"),
        }
    }

    /// Total number of lines in all descendant blocks. The first call
    /// enumerates (and caches) the flattening.
    pub fn line_count(&self) -> usize {
        self.flattened().len()
    }

    /// The `index`-th line of the flattened descendants. Panics if out of
    /// range. The first call enumerates (and caches) the flattening; use
    /// [`StructureBlock::lines`] to avoid that.
    pub fn line(&self, index: usize) -> &Line {
        self.resolve(&self.flattened()[index])
    }

    /// Iterates over the lines of all descendant blocks in depth-first
    /// order. Does not populate the flatten cache.
    pub fn lines(&self) -> Lines<'_> {
        let inner = match self.flattened.get() {
            Some(paths) => LinesInner::Cached {
                block: self,
                paths: paths.iter(),
            },
            None => LinesInner::Tree(TreeLines {
                stack: vec![self.children.iter()],
                current: CurrentLines::None,
            }),
        };
        Lines { inner }
    }

    /// Walks all descendant blocks in depth-first order, calling `f` with
    /// each block and its chain of ancestor structure elements (outermost
    /// first, always ending with the block's direct parent).
    pub fn visit<'a, F>(&'a self, f: &mut F)
    where
        F: FnMut(&'a Block, &[&'a StructureBlock]),
    {
        fn walk<'a, F>(node: &'a StructureBlock, ancestors: &mut Vec<&'a StructureBlock>, f: &mut F)
        where
            F: FnMut(&'a Block, &[&'a StructureBlock]),
        {
            ancestors.push(node);
            for child in &node.children {
                f(child, ancestors);
                if let Block::Structure(s) = child {
                    walk(s, ancestors, f);
                }
            }
            ancestors.pop();
        }
        let mut ancestors = Vec::new();
        walk(self, &mut ancestors, f);
    }
}

fn collect_line_paths(children: &[Block], prefix: &mut Vec<usize>, out: &mut Vec<LinePath>) {
    for (index, child) in children.iter().enumerate() {
        prefix.push(index);
        match child {
            Block::Text(b) => {
                for line in 0..b.lines.len() {
                    out.push(LinePath {
                        children: prefix.clone(),
                        line,
                    });
                }
            }
            Block::Image(_) | Block::Vector(_) | Block::Grid(_) => {
                out.push(LinePath {
                    children: prefix.clone(),
                    line: 0,
                });
            }
            Block::Structure(s) => collect_line_paths(&s.children, prefix, out),
        }
        prefix.pop();
    }
}

/// A block of page content.
#[derive(Debug, Clone)]
pub enum Block {
    /// A block of text lines.
    Text(TextBlock),
    /// A raster image.
    Image(ImageBlock),
    /// A vector drawing.
    Vector(VectorBlock),
    /// A recognised table grid.
    Grid(GridBlock),
    /// A structure element grouping other blocks.
    Structure(StructureBlock),
}

impl Block {
    /// The discriminant of this block.
    pub fn block_type(&self) -> BlockType {
        match self {
            Block::Text(_) => BlockType::Text,
            Block::Image(_) => BlockType::Image,
            Block::Vector(_) => BlockType::Vector,
            Block::Grid(_) => BlockType::Grid,
            Block::Structure(_) => BlockType::Structure,
        }
    }

    /// Whether this block contributes text to extraction and search.
    pub fn is_textual(&self) -> bool {
        matches!(self, Block::Text(_) | Block::Structure(_))
    }

    /// Axis-aligned bounding box of the block.
    pub fn bounding_box(&self) -> Rect {
        match self {
            Block::Text(b) => b.bounding_box,
            Block::Image(b) => b.bounding_box,
            Block::Vector(b) => b.bounding_box,
            Block::Grid(b) => b.bounding_box,
            Block::Structure(b) => b.bounding_box,
        }
    }

    /// The number of lines in the block. Non-text blocks report 1 (their
    /// synthetic line); structure blocks report the flattened count.
    pub fn line_count(&self) -> usize {
        match self {
            Block::Text(b) => b.lines.len(),
            Block::Image(_) | Block::Vector(_) | Block::Grid(_) => 1,
            Block::Structure(b) => b.line_count(),
        }
    }

    /// The `index`-th line of the block. Panics if out of range.
    pub fn line(&self, index: usize) -> &Line {
        match self {
            Block::Text(b) => &b.lines[index],
            Block::Image(b) => {
                assert!(index == 0, "synthetic block has exactly one line");
                &b.line
            }
            Block::Vector(b) => {
                assert!(index == 0, "synthetic block has exactly one line");
                &b.line
            }
            Block::Grid(b) => {
                assert!(index == 0, "synthetic block has exactly one line");
                &b.line
            }
            Block::Structure(b) => b.line(index),
        }
    }

    /// The `index`-th line of the block, or `None` if out of range.
    pub fn get_line(&self, index: usize) -> Option<&Line> {
        if index < self.line_count() {
            Some(self.line(index))
        } else {
            None
        }
    }

    /// Iterates over the lines of the block in order.
    pub fn lines(&self) -> Lines<'_> {
        let inner = match self {
            Block::Text(b) => LinesInner::Slice(b.lines.iter()),
            Block::Image(b) => LinesInner::Single(std::iter::once(&b.line)),
            Block::Vector(b) => LinesInner::Single(std::iter::once(&b.line)),
            Block::Grid(b) => LinesInner::Single(std::iter::once(&b.line)),
            Block::Structure(b) => return b.lines(),
        };
        Lines { inner }
    }

    /// The full text of the block: every line's text followed by a newline.
    /// Non-textual blocks yield an empty string.
    pub fn text(&self) -> String {
        match self {
            Block::Text(_) | Block::Structure(_) => {
                let mut out = String::new();
                for line in self.lines() {
                    out.push_str(line.text());
                    out.push('\n');
                }
                out
            }
            _ => String::new(),
        }
    }
}

/// Iterator over the lines of a block, in reading order.
pub struct Lines<'a> {
    inner: LinesInner<'a>,
}

enum LinesInner<'a> {
    Slice(std::slice::Iter<'a, Line>),
    Single(std::iter::Once<&'a Line>),
    Cached {
        block: &'a StructureBlock,
        paths: std::slice::Iter<'a, LinePath>,
    },
    Tree(TreeLines<'a>),
}

struct TreeLines<'a> {
    stack: Vec<std::slice::Iter<'a, Block>>,
    current: CurrentLines<'a>,
}

enum CurrentLines<'a> {
    None,
    Slice(std::slice::Iter<'a, Line>),
    Single(Option<&'a Line>),
}

impl<'a> Iterator for Lines<'a> {
    type Item = &'a Line;

    fn next(&mut self) -> Option<&'a Line> {
        match &mut self.inner {
            LinesInner::Slice(iter) => iter.next(),
            LinesInner::Single(iter) => iter.next(),
            LinesInner::Cached { block, paths } => paths.next().map(|p| block.resolve(p)),
            LinesInner::Tree(tree) => tree.next(),
        }
    }
}

impl<'a> Iterator for TreeLines<'a> {
    type Item = &'a Line;

    fn next(&mut self) -> Option<&'a Line> {
        loop {
            match &mut self.current {
                CurrentLines::Slice(iter) => {
                    if let Some(line) = iter.next() {
                        return Some(line);
                    }
                }
                CurrentLines::Single(slot) => {
                    if let Some(line) = slot.take() {
                        return Some(line);
                    }
                }
                CurrentLines::None => {}
            }
            self.current = CurrentLines::None;

            let block = loop {
                let top = self.stack.last_mut()?;
                match top.next() {
                    Some(block) => break block,
                    None => {
                        self.stack.pop();
                    }
                }
            };
            match block {
                Block::Text(b) => self.current = CurrentLines::Slice(b.lines.iter()),
                Block::Image(b) => self.current = CurrentLines::Single(Some(&b.line)),
                Block::Vector(b) => self.current = CurrentLines::Single(Some(&b.line)),
                Block::Grid(b) => self.current = CurrentLines::Single(Some(&b.line)),
                Block::Structure(s) => self.stack.push(s.children.iter()),
            }
        }
    }
}
