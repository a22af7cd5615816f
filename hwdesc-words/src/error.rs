use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WordsError {
    #[error("word access out of range: index {index}, descriptor has {len} words")]
    OutOfRange { index: usize, len: usize },

    #[error("byte buffer of length {len} is not a whole number of 32-bit words")]
    RaggedLength { len: usize },
}
