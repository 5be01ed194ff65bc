use thiserror::Error;

/// Everything that can go wrong while building, using, or checking a huffman code.
/// None of these are worth retrying: the same input always produces the same error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HuffmanError {
    /// Extraction from an exhausted priority queue. Only a bug in tree building can cause this.
    #[error("attempted to extract from an empty priority queue")]
    EmptyQueue,

    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The tree did not yield exactly one code per alphabet symbol.
    #[error(
        "tree traversal assigned codes to {assigned} of {expected} symbols ({unexpected} unexpected leaves)"
    )]
    IncompleteTraversal {
        expected: usize,
        assigned: usize,
        unexpected: usize,
    },

    #[error("symbol {symbol} at position {position} has no code in the codebook")]
    UnknownSymbol { symbol: String, position: usize },

    /// `position` is the offset of the first bit of the code that could not be matched.
    #[error("malformed input at bit {position}: {reason}")]
    MalformedInput { position: usize, reason: &'static str },
}

impl From<HuffmanError> for std::io::Error {
    fn from(e: HuffmanError) -> Self {
        std::io::Error::new(std::io::ErrorKind::InvalidData, e)
    }
}
