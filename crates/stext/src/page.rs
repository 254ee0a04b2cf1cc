use crate::address::Address;
use crate::block::Block;
use crate::text::Character;

/// The structured text content of one page: an immutable sequence of
/// blocks in reading order.
///
/// Pages are created with [`Page::build`](crate::builder); after that every
/// operation takes `&self`, so a page can be queried from multiple threads.
#[derive(Debug, Clone)]
pub struct Page {
    blocks: Vec<Block>,
}

impl Page {
    pub(crate) fn new(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    /// The number of top-level blocks on the page.
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// The `index`-th block. Panics if out of range.
    pub fn block(&self, index: usize) -> &Block {
        &self.blocks[index]
    }

    /// The `index`-th block, or `None` if out of range.
    pub fn get_block(&self, index: usize) -> Option<&Block> {
        self.blocks.get(index)
    }

    /// All top-level blocks in reading order.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Iterates over the top-level blocks.
    pub fn iter(&self) -> std::slice::Iter<'_, Block> {
        self.blocks.iter()
    }

    /// The character at `address`. Panics if any component of the address
    /// is out of range.
    pub fn character_at(&self, address: Address) -> &Character {
        self.block(address.block)
            .line(address.line)
            .character(address.character)
    }

    /// The character at `address`, or `None` if any component is out of
    /// range.
    pub fn get_character(&self, address: Address) -> Option<&Character> {
        self.get_block(address.block)?
            .get_line(address.line)?
            .get_character(address.character)
    }
}

impl<'a> IntoIterator for &'a Page {
    type Item = &'a Block;
    type IntoIter = std::slice::Iter<'a, Block>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.iter()
    }
}
