//! Regex search over the text of a page.
//!
//! Matching runs line by line, so a single match never spans multiple
//! lines. Byte offsets reported by the regex engine are mapped back to
//! character indices by accumulating the UTF-8 length of each glyph; a
//! match boundary falling inside a multi-byte glyph includes that glyph.
//! Zero-length matches (e.g. from a pattern like `a*`) are dropped, since
//! an address span always covers at least one character.

use regex::Regex;

use crate::address::{Address, AddressSpan};
use crate::page::Page;
use crate::text::Line;

/// Options controlling [`Page::search_text`].
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchOptions {
    /// Whether to interpret the pattern as a regex (default: `true`).
    /// When `false`, the pattern is treated as a literal string.
    pub regex: bool,
    /// Whether the search is case-sensitive (default: `true`).
    pub case_sensitive: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            regex: true,
            case_sensitive: true,
        }
    }
}

impl Page {
    /// Searches for `needle` in the text of the page, yielding the address
    /// span of each occurrence lazily, in document order.
    ///
    /// Only text and structure blocks are searched. Zero-length matches are
    /// dropped: every yielded span covers at least one character.
    pub fn search<'a>(&'a self, needle: &'a Regex) -> SearchMatches<'a> {
        SearchMatches {
            page: self,
            needle,
            block: 0,
            line: 0,
            pending: Vec::new().into_iter(),
        }
    }

    /// Convenience over [`Page::search`]: compiles `pattern` according to
    /// `options` and collects all matches. An invalid pattern yields no
    /// matches.
    pub fn search_text(&self, pattern: &str, options: &SearchOptions) -> Vec<AddressSpan> {
        if pattern.is_empty() {
            return Vec::new();
        }

        let source = if options.regex {
            pattern.to_string()
        } else {
            regex::escape(pattern)
        };
        let source = if options.case_sensitive {
            source
        } else {
            format!("(?i){source}")
        };

        match Regex::new(&source) {
            Ok(re) => self.search(&re).collect(),
            Err(_) => Vec::new(),
        }
    }
}

/// Lazy iterator over the matches of a regex on a page. See
/// [`Page::search`].
pub struct SearchMatches<'a> {
    page: &'a Page,
    needle: &'a Regex,
    block: usize,
    line: usize,
    pending: std::vec::IntoIter<AddressSpan>,
}

impl Iterator for SearchMatches<'_> {
    type Item = AddressSpan;

    fn next(&mut self) -> Option<AddressSpan> {
        loop {
            if let Some(span) = self.pending.next() {
                return Some(span);
            }

            let block = loop {
                let block = self.page.get_block(self.block)?;
                if !block.is_textual() {
                    self.block += 1;
                    self.line = 0;
                    continue;
                }
                if self.line >= block.line_count() {
                    self.block += 1;
                    self.line = 0;
                    continue;
                }
                break block;
            };

            let spans = line_matches(self.needle, block.line(self.line), self.block, self.line);
            self.line += 1;
            self.pending = spans.into_iter();
        }
    }
}

/// Maps every match of `needle` on one line to an address span.
fn line_matches(needle: &Regex, line: &Line, block: usize, line_index: usize) -> Vec<AddressSpan> {
    let mut spans = Vec::new();
    let characters = line.characters();

    for m in needle.find_iter(line.text()) {
        if m.is_empty() {
            continue;
        }

        // Accumulate glyph lengths up to the match start; overshooting
        // means the match starts inside a multi-byte glyph, which then
        // belongs to the match.
        let mut offset = 0;
        let mut start = 0;
        while offset < m.start() {
            offset += characters[start].glyph.len_utf8();
            start += 1;
        }
        if offset > m.start() {
            start -= 1;
        }

        // Extend until the accumulated glyph lengths cover the match.
        let mut end = start;
        let mut length = characters[end].glyph.len_utf8();
        while length < m.len() {
            end += 1;
            length += characters[end].glyph.len_utf8();
        }

        spans.push(AddressSpan::new(
            Address::new(block, line_index, start),
            Some(Address::new(block, line_index, end)),
        ));
    }

    spans
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::{Block, StructureBlock, VectorBlock};
    use crate::geometry::Rect;
    use crate::page::tests::{make_page, text_block};
    use crate::structure::StructureType;

    fn spans(page: &Page, pattern: &str) -> Vec<AddressSpan> {
        let re = Regex::new(pattern).unwrap();
        page.search(&re).collect()
    }

    fn span(start: (usize, usize, usize), end: (usize, usize, usize)) -> AddressSpan {
        AddressSpan::new(
            Address::new(start.0, start.1, start.2),
            Some(Address::new(end.0, end.1, end.2)),
        )
    }

    #[test]
    fn test_search_options_defaults() {
        let opts = SearchOptions::default();
        assert!(opts.regex);
        assert!(opts.case_sensitive);
    }

    #[test]
    fn test_simple_match() {
        let page = make_page(vec![text_block(&["hello world"])]);
        assert_eq!(spans(&page, "world"), vec![span((0, 0, 6), (0, 0, 10))]);
    }

    #[test]
    fn test_multiple_matches_in_order() {
        let page = make_page(vec![text_block(&["abab", "ab"])]);
        assert_eq!(
            spans(&page, "ab"),
            vec![
                span((0, 0, 0), (0, 0, 1)),
                span((0, 0, 2), (0, 0, 3)),
                span((0, 1, 0), (0, 1, 1)),
            ]
        );
    }

    #[test]
    fn test_match_never_crosses_lines() {
        // "ab" at the end of one line and "cd" at the start of the next:
        // the line break is not part of any line's text.
        let page = make_page(vec![text_block(&["xab", "cdy"])]);
        assert!(spans(&page, "abcd").is_empty());
    }

    #[test]
    fn test_search_skips_non_text_blocks() {
        let vector = Block::Vector(VectorBlock::new(
            Rect::new(0.0, 0.0, 1.0, 1.0),
            true,
            [0, 0, 0, 255],
        ));
        let page = make_page(vec![vector, text_block(&["abc"])]);
        assert_eq!(spans(&page, "b"), vec![span((1, 0, 1), (1, 0, 1))]);
    }

    #[test]
    fn test_search_structure_block_lines() {
        let structure = StructureBlock::new(
            StructureType::Paragraph,
            None,
            0,
            vec![text_block(&["one"]), text_block(&["two"])],
        );
        let page = make_page(vec![Block::Structure(structure)]);
        assert_eq!(spans(&page, "two"), vec![span((0, 1, 0), (0, 1, 2))]);
    }

    #[test]
    fn test_multibyte_glyph_offsets() {
        // "é" is two bytes in UTF-8; the byte offsets of "b" must still
        // map to character index 2.
        let page = make_page(vec![text_block(&["aéb"])]);
        assert_eq!(spans(&page, "b"), vec![span((0, 0, 2), (0, 0, 2))]);
        assert_eq!(spans(&page, "éb"), vec![span((0, 0, 1), (0, 0, 2))]);
    }

    #[test]
    fn test_astral_glyph_offsets() {
        // A 4-byte emoji shifts subsequent byte offsets by 4.
        let page = make_page(vec![text_block(&["a🙂bc"])]);
        assert_eq!(spans(&page, "🙂"), vec![span((0, 0, 1), (0, 0, 1))]);
        assert_eq!(spans(&page, "bc"), vec![span((0, 0, 2), (0, 0, 3))]);
    }

    #[test]
    fn test_zero_length_matches_are_dropped() {
        // "b*" matches the empty string at every position; only the
        // non-empty match is reported.
        let page = make_page(vec![text_block(&["abc"])]);
        assert_eq!(spans(&page, "b*"), vec![span((0, 0, 1), (0, 0, 1))]);
    }

    #[test]
    fn test_regex_alternation() {
        let page = make_page(vec![text_block(&["cat bat"])]);
        assert_eq!(
            spans(&page, "[cb]at"),
            vec![span((0, 0, 0), (0, 0, 2)), span((0, 0, 4), (0, 0, 6))]
        );
    }

    #[test]
    fn test_search_is_lazy() {
        let page = make_page(vec![text_block(&["ab", "ab"])]);
        let re = Regex::new("ab").unwrap();
        let first = page.search(&re).next();
        assert_eq!(first, Some(span((0, 0, 0), (0, 0, 1))));
    }

    #[test]
    fn test_search_text_literal_and_case() {
        let page = make_page(vec![text_block(&["A.B ab AB"])]);
        // Literal mode escapes the dot.
        assert_eq!(
            page.search_text(
                "A.B",
                &SearchOptions {
                    regex: false,
                    ..Default::default()
                }
            ),
            vec![span((0, 0, 0), (0, 0, 2))]
        );
        // Case-insensitive finds both.
        assert_eq!(
            page.search_text(
                "ab",
                &SearchOptions {
                    regex: false,
                    case_sensitive: false,
                }
            )
            .len(),
            2
        );
    }

    #[test]
    fn test_search_text_invalid_pattern() {
        let page = make_page(vec![text_block(&["abc"])]);
        assert!(page.search_text("[invalid", &SearchOptions::default()).is_empty());
        assert!(page.search_text("", &SearchOptions::default()).is_empty());
    }

    #[test]
    fn test_extracted_text_of_match() {
        let page = make_page(vec![text_block(&["hello world"])]);
        let m = spans(&page, "o w")[0];
        assert_eq!(page.extract_text(&m), "o w");
    }
}
