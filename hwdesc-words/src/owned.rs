use byteorder::ByteOrder;
use std::fmt::{self, Debug, Formatter};

use crate::{Words, WordsError, WORD_SIZE};

/// A boxed slice holding one live descriptor: the words about to be written to hardware, or
/// the words just read back from it.
///
/// Function parameters should generally prefer the borrowed [`Words`].
#[derive(Clone, Eq, Hash, PartialEq)]
pub struct OwnedWords {
    data: Box<[u32]>,
}

impl OwnedWords {
    pub fn new(data: Box<[u32]>) -> Self {
        Self { data }
    }

    /// A descriptor of `len` words with every bit clear.
    pub fn zeroed(len: usize) -> Self {
        Self::new(vec![0; len].into_boxed_slice())
    }

    /// Reads words from a raw byte buffer, such as a DMA descriptor ring entry, using byte
    /// order `B`.
    pub fn from_bytes<B: ByteOrder>(bytes: &[u8]) -> Result<Self, WordsError> {
        if bytes.len() % WORD_SIZE != 0 {
            return Err(WordsError::RaggedLength { len: bytes.len() });
        }
        let mut data = vec![0; bytes.len() / WORD_SIZE];
        B::read_u32_into(bytes, &mut data);
        Ok(Self::new(data.into_boxed_slice()))
    }

    pub fn borrow(&self) -> Words<'_> {
        Words(&self.data)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_mut_slice(&mut self) -> &mut [u32] {
        &mut self.data
    }

    pub fn into_inner(self) -> Box<[u32]> {
        self.data
    }
}

impl Debug for OwnedWords {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Debug::fmt(&self.borrow(), f)
    }
}

impl From<Vec<u32>> for OwnedWords {
    fn from(data: Vec<u32>) -> Self {
        Self::new(data.into_boxed_slice())
    }
}
