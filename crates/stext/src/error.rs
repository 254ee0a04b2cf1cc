//! Error types for page construction.
//!
//! Uses [`thiserror`] for ergonomic error derivation. Query operations do
//! not produce errors: out-of-range indices panic like slice indexing, and
//! empty selections yield empty results.

use thiserror::Error;

/// Error produced by [`Page::build`](crate::Page::build) when the block
/// descriptors are malformed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PageError {
    /// A character descriptor carries a code point that is not a valid
    /// Unicode scalar value (for example an unpaired surrogate).
    #[error("code point {0:#x} is not a valid Unicode scalar value")]
    InvalidCodePoint(u32),

    /// A described line has no characters.
    #[error("line {line} of block {block} has no characters")]
    EmptyLine {
        /// Index of the offending top-level block.
        block: usize,
        /// Index of the line within its block.
        line: usize,
    },

    /// A structure descriptor has no children, so its bounding box is
    /// undefined.
    #[error("structure element in block {block} has no children")]
    EmptyStructure {
        /// Index of the offending top-level block.
        block: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_code_point_display() {
        let err = PageError::InvalidCodePoint(0xD800);
        assert_eq!(
            err.to_string(),
            "code point 0xd800 is not a valid Unicode scalar value"
        );
    }

    #[test]
    fn empty_line_display() {
        let err = PageError::EmptyLine { block: 2, line: 0 };
        assert_eq!(err.to_string(), "line 0 of block 2 has no characters");
    }

    #[test]
    fn empty_structure_display() {
        let err = PageError::EmptyStructure { block: 1 };
        assert_eq!(err.to_string(), "structure element in block 1 has no children");
    }

    #[test]
    fn implements_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(PageError::InvalidCodePoint(0x110000));
        assert!(err.to_string().contains("0x110000"));
    }
}
