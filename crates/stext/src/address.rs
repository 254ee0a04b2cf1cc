use crate::page::Page;

/// The address of a single character on a page: block index, line index
/// within the block, character index within the line.
///
/// Addresses order lexicographically, which coincides with document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Address {
    /// Index of the block within the page.
    pub block: usize,
    /// Index of the line within the block.
    pub line: usize,
    /// Index of the character within the line.
    pub character: usize,
}

impl Address {
    pub fn new(block: usize, line: usize, character: usize) -> Self {
        Self {
            block,
            line,
            character,
        }
    }

    /// The address of the next character on `page`, in document order.
    /// Steps over blocks without lines. Returns `None` when `self` is the
    /// last character of the page.
    ///
    /// `self` must be a valid address on `page`.
    pub fn increment(&self, page: &Page) -> Option<Address> {
        let mut block = self.block;
        let mut line = self.line;
        let character = self.character + 1;
        if character < page.block(block).line(line).len() {
            return Some(Address::new(block, line, character));
        }
        line += 1;
        loop {
            if line < page.block(block).line_count() {
                return Some(Address::new(block, line, 0));
            }
            block += 1;
            line = 0;
            if block >= page.block_count() {
                return None;
            }
        }
    }
}

/// A range of characters on a page, from `start` to `end` inclusive.
///
/// `end == None` marks an empty selection anchored at `start`: it produces
/// no text and no quads. The endpoints may be given in either order;
/// consumers normalise once before traversing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AddressSpan {
    /// First endpoint of the selection.
    pub start: Address,
    /// Second endpoint (inclusive), or `None` for an empty selection.
    pub end: Option<Address>,
}

impl AddressSpan {
    pub fn new(start: Address, end: Option<Address>) -> Self {
        Self { start, end }
    }

    /// Whether the span selects no characters.
    pub fn is_empty(&self) -> bool {
        self.end.is_none()
    }

    /// The ordered `(start, end)` pair, or `None` for an empty span.
    pub fn normalized(&self) -> Option<(Address, Address)> {
        let end = self.end?;
        if end < self.start {
            Some((end, self.start))
        } else {
            Some((self.start, end))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_ordering() {
        assert!(Address::new(0, 0, 5) < Address::new(0, 1, 0));
        assert!(Address::new(0, 3, 9) < Address::new(1, 0, 0));
        assert!(Address::new(2, 0, 0) > Address::new(1, 9, 9));
        assert_eq!(Address::new(1, 2, 3), Address::new(1, 2, 3));
    }

    #[test]
    fn test_span_normalized() {
        let a = Address::new(0, 0, 1);
        let b = Address::new(1, 0, 0);
        assert_eq!(AddressSpan::new(a, Some(b)).normalized(), Some((a, b)));
        assert_eq!(AddressSpan::new(b, Some(a)).normalized(), Some((a, b)));
        assert_eq!(AddressSpan::new(a, Some(a)).normalized(), Some((a, a)));
    }

    #[test]
    fn test_empty_span() {
        let span = AddressSpan::new(Address::new(0, 0, 0), None);
        assert!(span.is_empty());
        assert_eq!(span.normalized(), None);
    }
}
