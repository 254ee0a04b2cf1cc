//! Text extraction and highlight quads over an address range.
//!
//! Both operations walk the same three-level shape: the tail of the start
//! block, whole blocks in the middle, then the head of the end block, with
//! runs collapsed to whole lines and whole blocks where the range covers
//! them completely.

use crate::address::{Address, AddressSpan};
use crate::geometry::Quad;
use crate::page::Page;

impl Page {
    /// The text selected by `span`.
    ///
    /// Only text and structure blocks contribute. Every fully selected line
    /// or block is followed by a newline; a partial line at the end of the
    /// range is not. An empty span yields an empty string.
    ///
    /// Panics if either endpoint addresses a character that does not exist
    /// (in particular, any non-empty span on a page with no characters).
    pub fn extract_text(&self, span: &AddressSpan) -> String {
        let Some((mut start, end)) = span.normalized() else {
            return String::new();
        };

        let mut out = String::new();

        if start.block != end.block {
            // Remaining part of the start block.
            if start.line == 0 && start.character == 0 {
                let block = self.block(start.block);
                if block.is_textual() {
                    out.push_str(&block.text());
                }
            } else {
                let block = self.block(start.block);
                if start.character == 0 {
                    out.push_str(block.line(start.line).text());
                    out.push('\n');
                } else {
                    for ch in &block.line(start.line).characters()[start.character..] {
                        out.push(ch.glyph);
                    }
                    out.push('\n');
                }
                for line in start.line + 1..block.line_count() {
                    out.push_str(block.line(line).text());
                    out.push('\n');
                }
            }

            // Full blocks in the middle.
            for index in start.block + 1..end.block {
                let block = self.block(index);
                if block.is_textual() {
                    out.push_str(&block.text());
                }
            }

            start = Address::new(end.block, 0, 0);
        }

        let block = self.block(start.block);
        if block.is_textual() {
            if start.line != end.line {
                // Remaining part of the start line.
                if start.character == 0 {
                    out.push_str(block.line(start.line).text());
                } else {
                    for ch in &block.line(start.line).characters()[start.character..] {
                        out.push(ch.glyph);
                    }
                }
                out.push('\n');

                // Full lines in the middle.
                for line in start.line + 1..end.line {
                    out.push_str(block.line(line).text());
                    out.push('\n');
                }

                start = Address::new(end.block, end.line, 0);
            }

            let line = block.line(start.line);
            if start.character == 0 && end.character == line.len() - 1 {
                out.push_str(line.text());
            } else {
                for ch in &line.characters()[start.character..=end.character] {
                    out.push(ch.glyph);
                }
            }
        }

        out
    }

    /// Quads delimiting the characters selected by `span`, collapsed to
    /// line and block bounding boxes where the range covers them whole.
    ///
    /// With `include_images == false`, only text and structure blocks are
    /// considered. The iterator is lazy at the character level: only
    /// per-line and per-block run descriptors are computed up front.
    pub fn highlight_quads(&self, span: &AddressSpan, include_images: bool) -> HighlightQuads<'_> {
        let mut segments = Vec::new();

        if let Some((start, end)) = span.normalized() {
            self.collect_segments(start, end, include_images, &mut segments);
        }

        HighlightQuads {
            page: self,
            segments: segments.into_iter(),
            run: None,
        }
    }

    fn collect_segments(
        &self,
        mut start: Address,
        end: Address,
        include_images: bool,
        segments: &mut Vec<Segment>,
    ) {
        let included = |index: usize| include_images || self.block(index).is_textual();

        if start.block != end.block {
            // Remaining part of the start block.
            if start.line == 0 && start.character == 0 {
                if included(start.block) {
                    segments.push(Segment::Block(start.block));
                }
            } else {
                let block = self.block(start.block);
                if start.character == 0 {
                    segments.push(Segment::Line(start.block, start.line));
                } else {
                    segments.push(Segment::Characters {
                        block: start.block,
                        line: start.line,
                        start: start.character,
                        end: block.line(start.line).len() - 1,
                    });
                }
                for line in start.line + 1..block.line_count() {
                    segments.push(Segment::Line(start.block, line));
                }
            }

            // Full blocks in the middle.
            for index in start.block + 1..end.block {
                if included(index) {
                    segments.push(Segment::Block(index));
                }
            }

            start = Address::new(end.block, 0, 0);
        }

        if included(start.block) {
            if start.line != end.line {
                // Remaining part of the start line.
                if start.character == 0 {
                    segments.push(Segment::Line(start.block, start.line));
                } else {
                    segments.push(Segment::Characters {
                        block: start.block,
                        line: start.line,
                        start: start.character,
                        end: self.block(start.block).line(start.line).len() - 1,
                    });
                }

                // Full lines in the middle.
                for line in start.line + 1..end.line {
                    segments.push(Segment::Line(start.block, line));
                }

                start = Address::new(end.block, end.line, 0);
            }

            let line = self.block(start.block).line(start.line);
            if start.character == 0 && end.character == line.len() - 1 {
                segments.push(Segment::Line(start.block, start.line));
            } else {
                segments.push(Segment::Characters {
                    block: start.block,
                    line: start.line,
                    start: start.character,
                    end: end.character,
                });
            }
        }
    }
}

/// A collapsed run of the selection: a whole block, a whole line, or a run
/// of characters within one line (`end` inclusive).
#[derive(Debug, Clone, Copy)]
enum Segment {
    Block(usize),
    Line(usize, usize),
    Characters {
        block: usize,
        line: usize,
        start: usize,
        end: usize,
    },
}

#[derive(Debug, Clone, Copy)]
struct CharacterRun {
    block: usize,
    line: usize,
    next: usize,
    end: usize,
}

/// Lazy iterator over the quads of a selection. See
/// [`Page::highlight_quads`].
pub struct HighlightQuads<'a> {
    page: &'a Page,
    segments: std::vec::IntoIter<Segment>,
    run: Option<CharacterRun>,
}

impl Iterator for HighlightQuads<'_> {
    type Item = Quad;

    fn next(&mut self) -> Option<Quad> {
        loop {
            if let Some(run) = &mut self.run {
                if run.next <= run.end {
                    let quad = self
                        .page
                        .block(run.block)
                        .line(run.line)
                        .character(run.next)
                        .bounding_quad;
                    run.next += 1;
                    return Some(quad);
                }
                self.run = None;
            }

            match self.segments.next()? {
                Segment::Block(index) => {
                    return Some(self.page.block(index).bounding_box().to_quad());
                }
                Segment::Line(block, line) => {
                    return Some(self.page.block(block).line(line).bounding_box.to_quad());
                }
                Segment::Characters {
                    block,
                    line,
                    start,
                    end,
                } => {
                    self.run = Some(CharacterRun {
                        block,
                        line,
                        next: start,
                        end,
                    });
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::{Block, StructureBlock, VectorBlock};
    use crate::geometry::Rect;
    use crate::page::tests::{make_page, text_block};
    use crate::structure::StructureType;

    fn span(start: (usize, usize, usize), end: (usize, usize, usize)) -> AddressSpan {
        AddressSpan::new(
            Address::new(start.0, start.1, start.2),
            Some(Address::new(end.0, end.1, end.2)),
        )
    }

    #[test]
    fn test_extract_empty_span() {
        let page = make_page(vec![text_block(&["abc"])]);
        let empty = AddressSpan::new(Address::new(0, 0, 0), None);
        assert_eq!(page.extract_text(&empty), "");
        assert_eq!(page.highlight_quads(&empty, true).count(), 0);
    }

    #[test]
    fn test_extract_single_character() {
        let page = make_page(vec![text_block(&["abc"])]);
        assert_eq!(page.extract_text(&span((0, 0, 1), (0, 0, 1))), "b");
    }

    #[test]
    fn test_extract_partial_line() {
        let page = make_page(vec![text_block(&["abcde"])]);
        assert_eq!(page.extract_text(&span((0, 0, 1), (0, 0, 3))), "bcd");
    }

    #[test]
    fn test_extract_whole_line_no_trailing_newline() {
        let page = make_page(vec![text_block(&["abc"])]);
        assert_eq!(page.extract_text(&span((0, 0, 0), (0, 0, 2))), "abc");
    }

    #[test]
    fn test_extract_inverted_span() {
        let page = make_page(vec![text_block(&["abc"])]);
        assert_eq!(page.extract_text(&span((0, 0, 2), (0, 0, 0))), "abc");
    }

    #[test]
    fn test_extract_across_lines() {
        let page = make_page(vec![text_block(&["abc", "def", "ghi"])]);
        assert_eq!(page.extract_text(&span((0, 0, 1), (0, 2, 1))), "bc\ndef\ngh");
    }

    #[test]
    fn test_extract_across_blocks() {
        let page = make_page(vec![
            text_block(&["abc", "def"]),
            text_block(&["ghi"]),
            text_block(&["jkl"]),
        ]);
        assert_eq!(
            page.extract_text(&span((0, 1, 1), (2, 0, 0))),
            "ef\nghi\nj"
        );
    }

    #[test]
    fn test_extract_whole_start_block() {
        let page = make_page(vec![text_block(&["ab", "cd"]), text_block(&["ef"])]);
        assert_eq!(
            page.extract_text(&span((0, 0, 0), (1, 0, 1))),
            "ab\ncd\nef"
        );
    }

    #[test]
    fn test_extract_skips_non_text_blocks() {
        let vector = Block::Vector(VectorBlock::new(
            Rect::new(0.0, 1.0, 3.0, 2.0),
            true,
            [0, 0, 0, 255],
        ));
        let page = make_page(vec![text_block(&["abc"]), vector, text_block(&["def"])]);
        assert_eq!(
            page.extract_text(&span((0, 0, 0), (2, 0, 2))),
            "abc\ndef"
        );
    }

    #[test]
    fn test_extract_structure_block_flattened() {
        let structure = StructureBlock::new(
            StructureType::Section,
            None,
            0,
            vec![text_block(&["ab"]), text_block(&["cd"])],
        );
        let page = make_page(vec![Block::Structure(structure), text_block(&["ef"])]);
        assert_eq!(
            page.extract_text(&span((0, 0, 0), (1, 0, 1))),
            "ab\ncd\nef"
        );
    }

    #[test]
    fn test_quads_collapse_to_line() {
        let page = make_page(vec![text_block(&["abc"])]);
        let quads: Vec<Quad> = page.highlight_quads(&span((0, 0, 0), (0, 0, 2)), false).collect();
        assert_eq!(quads.len(), 1);
        assert_eq!(
            quads[0],
            page.block(0).line(0).bounding_box.to_quad()
        );
    }

    #[test]
    fn test_quads_partial_line_per_character() {
        let page = make_page(vec![text_block(&["abcde"])]);
        let quads: Vec<Quad> = page.highlight_quads(&span((0, 0, 1), (0, 0, 3)), false).collect();
        assert_eq!(quads.len(), 3);
        assert_eq!(quads[0], page.character_at(Address::new(0, 0, 1)).bounding_quad);
        assert_eq!(quads[2], page.character_at(Address::new(0, 0, 3)).bounding_quad);
    }

    #[test]
    fn test_quads_collapse_to_block() {
        let page = make_page(vec![text_block(&["ab", "cd"]), text_block(&["ef"])]);
        let quads: Vec<Quad> = page.highlight_quads(&span((0, 0, 0), (1, 0, 1)), false).collect();
        // Whole start block collapses; end block covers its single line.
        assert_eq!(
            quads,
            vec![
                page.block(0).bounding_box().to_quad(),
                page.block(1).line(0).bounding_box.to_quad(),
            ]
        );
    }

    #[test]
    fn test_quads_image_filter() {
        let vector = Block::Vector(VectorBlock::new(
            Rect::new(0.0, 1.0, 3.0, 2.0),
            true,
            [0, 0, 0, 255],
        ));
        let page = make_page(vec![text_block(&["abc"]), vector, text_block(&["def"])]);
        let with_images = page
            .highlight_quads(&span((0, 0, 0), (2, 0, 2)), true)
            .count();
        let without_images = page
            .highlight_quads(&span((0, 0, 0), (2, 0, 2)), false)
            .count();
        assert_eq!(with_images, 3);
        assert_eq!(without_images, 2);
    }

    #[test]
    fn test_quads_match_text_coverage() {
        // A range with no whole-line collapse: one quad per character.
        let page = make_page(vec![text_block(&["abcde"])]);
        let s = span((0, 0, 1), (0, 0, 3));
        let text = page.extract_text(&s);
        let quads = page.highlight_quads(&s, false).count();
        assert_eq!(text.chars().count(), quads);
    }
}
