//! Hit-testing: mapping a point in page units to a character address.

use crate::address::Address;
use crate::geometry::Point;
use crate::page::Page;

impl Page {
    /// The address of the character whose quad contains `point`, or `None`
    /// if no character does.
    ///
    /// Blocks and lines are filtered by their bounding boxes first, so a
    /// character is only tested when its line and block contain the point.
    /// With `include_images == false`, only text and structure blocks are
    /// considered. The first match in document order wins.
    pub fn hit_at(&self, point: Point, include_images: bool) -> Option<Address> {
        for (i, block) in self.blocks().iter().enumerate() {
            if !(include_images || block.is_textual()) {
                continue;
            }
            if !block.bounding_box().contains(point) {
                continue;
            }
            for j in 0..block.line_count() {
                let line = block.line(j);
                if !line.bounding_box.contains(point) {
                    continue;
                }
                for (k, ch) in line.characters().iter().enumerate() {
                    if ch.bounding_quad.contains(point) {
                        return Some(Address::new(i, j, k));
                    }
                }
            }
        }
        None
    }

    /// The address of the character closest to `point`. Returns `None` only
    /// when the page has no (eligible) characters.
    ///
    /// This is a greedy scan, not an exhaustive nearest-neighbour search:
    /// lines are only descended into when their block improves on the best
    /// block distance seen so far, and the distance to a character is
    /// approximated by the distance to the nearest corner of its quad. A
    /// character containing the point short-circuits the scan.
    pub fn closest_hit_at(&self, point: Point, include_images: bool) -> Option<Address> {
        let mut min_distance = f32::MAX;
        let mut closest_hit: Option<Address> = None;

        let mut min_block_distance = f32::MAX;
        let mut min_line_distance = f32::MAX;

        for (i, block) in self.blocks().iter().enumerate() {
            if !(include_images || block.is_textual()) {
                continue;
            }

            let block_box = block.bounding_box();
            let block_distance = block_box.squared_distance_to(point);
            if !(block_box.contains(point) || block_distance < min_block_distance) {
                continue;
            }
            if block_distance < min_block_distance {
                min_block_distance = block_distance;
                min_line_distance = f32::MAX;
            }

            for j in 0..block.line_count() {
                let line = block.line(j);
                let line_distance = line.bounding_box.squared_distance_to(point);
                if !(line.bounding_box.contains(point) || line_distance < min_line_distance) {
                    continue;
                }
                if line_distance < min_line_distance {
                    min_line_distance = line_distance;
                }

                for (k, ch) in line.characters().iter().enumerate() {
                    if ch.bounding_quad.contains(point) {
                        return Some(Address::new(i, j, k));
                    }
                    // Character quads are small; the corner distance is
                    // close enough, and squared distances order the same.
                    let distance = ch.bounding_quad.min_corner_squared_distance(point);
                    if distance < min_distance {
                        min_distance = distance;
                        closest_hit = Some(Address::new(i, j, k));
                    }
                }
            }
        }

        closest_hit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::{Block, VectorBlock};
    use crate::geometry::Rect;
    use crate::page::tests::{make_page, text_block};

    #[test]
    fn test_hit_inside_character() {
        // "abc" as adjacent unit squares on the first line.
        let page = make_page(vec![text_block(&["abc"])]);
        assert_eq!(
            page.hit_at(Point::new(1.5, 0.5), false),
            Some(Address::new(0, 0, 1))
        );
        assert_eq!(
            page.hit_at(Point::new(2.5, 0.5), false),
            Some(Address::new(0, 0, 2))
        );
    }

    #[test]
    fn test_hit_outside() {
        let page = make_page(vec![text_block(&["abc"])]);
        assert_eq!(page.hit_at(Point::new(100.0, 100.0), false), None);
    }

    #[test]
    fn test_hit_respects_image_filter() {
        let vector = Block::Vector(VectorBlock::new(
            Rect::new(50.0, 50.0, 60.0, 60.0),
            true,
            [0, 0, 0, 255],
        ));
        let page = make_page(vec![text_block(&["a"]), vector]);
        let point = Point::new(55.0, 55.0);
        assert_eq!(page.hit_at(point, false), None);
        assert_eq!(page.hit_at(point, true), Some(Address::new(1, 0, 0)));
    }

    #[test]
    fn test_closest_hit_containment_short_circuits() {
        let page = make_page(vec![text_block(&["abc"])]);
        assert_eq!(
            page.closest_hit_at(Point::new(0.5, 0.5), false),
            Some(Address::new(0, 0, 0))
        );
    }

    #[test]
    fn test_closest_hit_outside_page() {
        let page = make_page(vec![text_block(&["abc"])]);
        // Far to the right: nearest corner belongs to the last character.
        assert_eq!(
            page.closest_hit_at(Point::new(100.0, 0.5), false),
            Some(Address::new(0, 0, 2))
        );
        // Far to the left: nearest corner belongs to the first character.
        assert_eq!(
            page.closest_hit_at(Point::new(-100.0, 0.5), false),
            Some(Address::new(0, 0, 0))
        );
    }

    #[test]
    fn test_closest_hit_total_unless_no_characters() {
        let page = make_page(vec![]);
        assert_eq!(page.closest_hit_at(Point::new(0.0, 0.0), false), None);

        let vector = Block::Vector(VectorBlock::new(
            Rect::new(0.0, 0.0, 1.0, 1.0),
            true,
            [0, 0, 0, 255],
        ));
        let page = make_page(vec![vector]);
        assert_eq!(page.closest_hit_at(Point::new(5.0, 5.0), false), None);
        assert_eq!(
            page.closest_hit_at(Point::new(5.0, 5.0), true),
            Some(Address::new(0, 0, 0))
        );
    }

    /// A one-line text block whose unit-square characters start at (x, y).
    fn shifted_text_block(text: &str, x: f32, y: f32) -> Block {
        use crate::block::TextBlock;
        use crate::text::{Character, Line, TextDirection, WritingMode};

        let characters: Vec<Character> = text
            .chars()
            .enumerate()
            .map(|(i, glyph)| {
                let cx = x + i as f32;
                Character {
                    code_point: glyph as u32,
                    glyph,
                    color: 0,
                    origin: Point::new(cx, y + 1.0),
                    bounding_quad: Rect::new(cx, y, cx + 1.0, y + 1.0).to_quad(),
                    size: 1.0,
                    direction: TextDirection::LeftToRight,
                    font: None,
                }
            })
            .collect();
        let bbox = Rect::new(x, y, x + text.chars().count() as f32, y + 1.0);
        let line = Line::new(
            WritingMode::Horizontal,
            Point::new(1.0, 0.0),
            bbox,
            characters,
            text.to_string(),
        );
        Block::Text(TextBlock::new(bbox, vec![line]))
    }

    #[test]
    fn test_closest_hit_picks_nearer_block() {
        let far = shifted_text_block("cd", 100.0, 100.0);
        let near = shifted_text_block("ab", 0.0, 0.0);
        let page = make_page(vec![far, near]);
        assert_eq!(
            page.closest_hit_at(Point::new(-1.0, 0.5), false),
            Some(Address::new(1, 0, 0))
        );
    }
}
