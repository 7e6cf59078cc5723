use std::io;

/// Failure of an encode, decode or build step.
#[derive(Debug, thiserror::Error)]
pub enum CodingError {
    /// The symbol has no code in the current table.
    #[error("symbol {0:#04x} has no code")]
    Unencodable(u8),

    #[error("invalid bit {bit:?} at position {position}")]
    InvalidBit { bit: char, position: usize },

    /// Input ran out while the walk was still on an internal node.
    #[error("bit string ends mid-code at position {position}")]
    Truncated { position: usize },

    #[error("cannot decode against an empty alphabet")]
    EmptyAlphabet,

    #[error("decoded symbols are not valid UTF-8")]
    NotUtf8(#[from] std::string::FromUtf8Error),

    #[error(transparent)]
    Source(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, CodingError>;
