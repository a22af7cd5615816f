mod borrowed;
mod error;
mod owned;

pub use borrowed::Words;
pub use error::WordsError;
pub use owned::OwnedWords;

/// Number of bytes in one descriptor word.
pub const WORD_SIZE: usize = 4;
