use byteorder::ByteOrder;
use std::fmt::{self, Debug, Formatter};
use std::ops::{Deref, Range};

use crate::{OwnedWords, WordsError, WORD_SIZE};

/// A borrowed view of a descriptor's raw words.
#[derive(Clone, Copy)]
pub struct Words<'a>(pub &'a [u32]);

impl<'a> Words<'a> {
    pub fn get(self, index: usize) -> Result<u32, WordsError> {
        self.0
            .get(index)
            .copied()
            .ok_or_else(|| WordsError::OutOfRange {
                index,
                len: self.0.len(),
            })
    }

    pub fn slice(self, range: Range<usize>) -> Result<Words<'a>, WordsError> {
        let len = self.0.len();
        let index = range.end;
        self.0
            .get(range)
            .map(Words)
            .ok_or(WordsError::OutOfRange { index, len })
    }

    pub fn to_owned_words(self) -> OwnedWords {
        OwnedWords::new(self.0.into())
    }

    /// Serializes the words into a byte buffer using byte order `B`.
    pub fn to_bytes<B: ByteOrder>(self) -> Vec<u8> {
        let mut bytes = vec![0; self.0.len() * WORD_SIZE];
        B::write_u32_into(self.0, &mut bytes);
        bytes
    }
}

impl<'a> Debug for Words<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Words[")?;
        for (i, word) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "0x{:08x}", word)?;
        }
        write!(f, "]")
    }
}

impl<'a> Deref for Words<'a> {
    type Target = [u32];

    fn deref(&self) -> &[u32] {
        self.0
    }
}
