use std::sync::Arc;

use crate::geometry::{Point, Quad, Rect};

/// Text flow direction of a single character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TextDirection {
    /// Left-to-right (default for Latin, CJK horizontal).
    #[default]
    LeftToRight,
    /// Right-to-left (Arabic, Hebrew).
    RightToLeft,
}

/// Writing mode of a line of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WritingMode {
    /// Horizontal writing.
    #[default]
    Horizontal,
    /// Vertical writing (CJK).
    Vertical,
}

/// An opaque font handle shared by the characters drawn with it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Font {
    name: String,
}

impl Font {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The font's name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A single character on the page.
#[derive(Debug, Clone, PartialEq)]
pub struct Character {
    /// The Unicode code point of the character.
    pub code_point: u32,
    /// The character as a `char`. Always equals `code_point` decoded.
    pub glyph: char,
    /// Colour of the character, as a packed sRGB value. Synthetic
    /// characters carry `u32::MAX`.
    pub color: u32,
    /// The baseline origin of the character.
    pub origin: Point,
    /// The quadrilateral bounding the character. May be rotated or skewed
    /// for rotated text.
    pub bounding_quad: Quad,
    /// Font size in points.
    pub size: f32,
    /// Text flow direction.
    pub direction: TextDirection,
    /// The font used to draw the character, if known.
    pub font: Option<Arc<Font>>,
}

/// A line of text within a block.
///
/// A line always contains at least one character, and `text()` is exactly
/// the concatenation of the characters' glyphs.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    /// Writing mode of the line.
    pub writing_mode: WritingMode,
    /// Normalised direction of the text flow.
    pub direction: Point,
    /// Axis-aligned bounding box of the line.
    pub bounding_box: Rect,
    characters: Vec<Character>,
    text: String,
}

impl Line {
    pub(crate) fn new(
        writing_mode: WritingMode,
        direction: Point,
        bounding_box: Rect,
        characters: Vec<Character>,
        text: String,
    ) -> Self {
        debug_assert!(!characters.is_empty());
        Self {
            writing_mode,
            direction,
            bounding_box,
            characters,
            text,
        }
    }

    /// A placeholder line covering a non-text block: a single NUL character
    /// whose quad is the block's bounding box.
    pub(crate) fn synthetic(bounding_box: Rect) -> Self {
        let character = Character {
            code_point: 0,
            glyph: '\0',
            color: u32::MAX,
            origin: Point::new(bounding_box.x0, bounding_box.y1),
            bounding_quad: bounding_box.to_quad(),
            size: 9.0,
            direction: TextDirection::LeftToRight,
            font: None,
        };
        Self {
            writing_mode: WritingMode::Horizontal,
            direction: Point::default(),
            bounding_box,
            characters: vec![character],
            text: "\0".to_string(),
        }
    }

    /// The number of characters in the line. Always at least 1.
    pub fn len(&self) -> usize {
        self.characters.len()
    }

    /// Always `false` for a constructed line, which holds at least one
    /// character; provided only as the conventional companion to
    /// [`Line::len`].
    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    /// The characters of the line.
    pub fn characters(&self) -> &[Character] {
        &self.characters
    }

    /// Gets the character at `index`. Panics if out of range.
    pub fn character(&self, index: usize) -> &Character {
        &self.characters[index]
    }

    /// Gets the character at `index`, or `None` if out of range.
    pub fn get_character(&self, index: usize) -> Option<&Character> {
        self.characters.get(index)
    }

    /// The text of the line: the concatenation of all character glyphs.
    pub fn text(&self) -> &str {
        &self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_char(glyph: char, x: f32) -> Character {
        Character {
            code_point: glyph as u32,
            glyph,
            color: 0,
            origin: Point::new(x, 1.0),
            bounding_quad: Rect::new(x, 0.0, x + 1.0, 1.0).to_quad(),
            size: 1.0,
            direction: TextDirection::LeftToRight,
            font: None,
        }
    }

    #[test]
    fn test_line_text_matches_characters() {
        let chars = vec![make_char('a', 0.0), make_char('b', 1.0), make_char('c', 2.0)];
        let line = Line::new(
            WritingMode::Horizontal,
            Point::new(1.0, 0.0),
            Rect::new(0.0, 0.0, 3.0, 1.0),
            chars,
            "abc".to_string(),
        );
        assert_eq!(line.len(), 3);
        assert!(!line.is_empty());
        assert_eq!(line.text(), "abc");
        let joined: String = line.characters().iter().map(|c| c.glyph).collect();
        assert_eq!(joined, line.text());
    }

    #[test]
    fn test_synthetic_line() {
        let bbox = Rect::new(10.0, 20.0, 30.0, 40.0);
        let line = Line::synthetic(bbox);
        assert_eq!(line.len(), 1);
        assert_eq!(line.text(), "\0");
        let ch = line.character(0);
        assert_eq!(ch.code_point, 0);
        assert_eq!(ch.size, 9.0);
        assert_eq!(ch.origin, Point::new(10.0, 40.0));
        assert_eq!(ch.bounding_quad, bbox.to_quad());
        assert_eq!(ch.font, None);
    }

    #[test]
    fn test_character_indexing() {
        let line = Line::synthetic(Rect::new(0.0, 0.0, 1.0, 1.0));
        assert!(line.get_character(0).is_some());
        assert!(line.get_character(1).is_none());
    }

    #[test]
    fn test_font_shared_handle() {
        let font = Arc::new(Font::new("Helvetica"));
        let mut a = make_char('a', 0.0);
        let mut b = make_char('b', 1.0);
        a.font = Some(Arc::clone(&font));
        b.font = Some(Arc::clone(&font));
        assert_eq!(a.font.as_ref().unwrap().name(), "Helvetica");
        assert!(Arc::ptr_eq(a.font.as_ref().unwrap(), b.font.as_ref().unwrap()));
    }
}
