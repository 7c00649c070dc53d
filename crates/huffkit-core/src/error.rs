//! Error types for compression operations.

use thiserror::Error;

/// Result type alias for compression operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Compression error types.
#[derive(Debug, Error)]
pub enum Error {
    /// Compression was attempted on empty input.
    ///
    /// A frequency table with no entries cannot produce a code tree, so
    /// empty input is rejected explicitly instead of building a degenerate
    /// tree.
    #[error("empty input: cannot build a code tree from zero symbols")]
    EmptyInput,

    /// Packing encountered a symbol with no entry in the code table.
    ///
    /// Indicates the caller paired an input with a code table derived from
    /// different data.
    #[error("unknown symbol 0x{symbol:02x}: no code assigned")]
    UnknownSymbol { symbol: u8 },

    /// Decompression was attempted with no previously persisted tree.
    #[error("no stored tree: compress something first")]
    NoStoredTree,

    /// A serialized tree (or a frame embedding one) is structurally invalid.
    #[error("corrupt tree: {message}")]
    CorruptTree { message: String },

    /// The bit stream ended in the middle of a root-to-leaf walk.
    #[error("truncated stream after {bits_consumed} bits")]
    TruncatedStream { bits_consumed: u64 },

    /// Input bytes are not a valid compressed artifact (bad frame or
    /// transport encoding).
    #[error("corrupted data: {message}")]
    CorruptedData { message: String },

    /// Buffer too small for output.
    #[error("buffer too small: need {required} bytes, got {provided}")]
    BufferTooSmall { required: usize, provided: usize },

    /// I/O error from an underlying store or stream.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a corrupt tree error.
    pub fn corrupt_tree(message: impl Into<String>) -> Self {
        Error::CorruptTree {
            message: message.into(),
        }
    }

    /// Create a corrupted data error.
    pub fn corrupted(message: impl Into<String>) -> Self {
        Error::CorruptedData {
            message: message.into(),
        }
    }

    /// Create an unknown symbol error.
    pub fn unknown_symbol(symbol: u8) -> Self {
        Error::UnknownSymbol { symbol }
    }

    /// Create a truncated stream error.
    pub fn truncated(bits_consumed: u64) -> Self {
        Error::TruncatedStream { bits_consumed }
    }

    /// Create a buffer too small error.
    pub fn buffer_too_small(required: usize, provided: usize) -> Self {
        Error::BufferTooSmall { required, provided }
    }

    /// Check if the error is recoverable by user action (as opposed to a
    /// corrupt artifact or a caller bug).
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::NoStoredTree | Error::BufferTooSmall { .. }
        )
    }

    /// Get error category for metrics.
    pub fn category(&self) -> &'static str {
        match self {
            Error::EmptyInput => "empty_input",
            Error::UnknownSymbol { .. } => "unknown_symbol",
            Error::NoStoredTree => "no_stored_tree",
            Error::CorruptTree { .. } => "corrupt_tree",
            Error::TruncatedStream { .. } => "truncated_stream",
            Error::CorruptedData { .. } => "corrupted_data",
            Error::BufferTooSmall { .. } => "buffer_too_small",
            Error::Io(_) => "io_error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::unknown_symbol(0xAB);
        assert_eq!(err.to_string(), "unknown symbol 0xab: no code assigned");

        let err = Error::truncated(13);
        assert_eq!(err.to_string(), "truncated stream after 13 bits");
    }

    #[test]
    fn test_recoverable() {
        assert!(Error::NoStoredTree.is_recoverable());
        assert!(Error::buffer_too_small(10, 5).is_recoverable());
        assert!(!Error::EmptyInput.is_recoverable());
        assert!(!Error::corrupt_tree("bad").is_recoverable());
    }

    #[test]
    fn test_categories_are_distinct() {
        let errors = [
            Error::EmptyInput,
            Error::unknown_symbol(0),
            Error::NoStoredTree,
            Error::corrupt_tree("x"),
            Error::truncated(0),
            Error::corrupted("x"),
            Error::buffer_too_small(1, 0),
        ];
        let mut seen = std::collections::HashSet::new();
        for err in &errors {
            assert!(seen.insert(err.category()), "duplicate category");
        }
    }
}
