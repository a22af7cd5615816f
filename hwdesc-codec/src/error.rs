use hwdesc_words::WordsError;
use thiserror::Error;

/// Errors from encoding, decoding, or accessing a descriptor instance.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("{0}")]
    WordsError(#[from] WordsError),

    #[error("descriptor `{schema}` has no field named `{name}`")]
    FieldNotFound { schema: &'static str, name: String },

    #[error("value 0x{value:x} does not fit in the {width}-bit field `{field}`")]
    ValueOutOfRange {
        field: &'static str,
        width: u8,
        value: u32,
    },

    #[error("descriptor `{schema}` has {expected} words, got {actual}")]
    LengthMismatch {
        schema: &'static str,
        expected: usize,
        actual: usize,
    },
}

/// Defects in a schema table, found by [`validate`](crate::validate).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SchemaError {
    #[error("descriptor `{schema}`: fields `{first}` and `{second}` overlap in word {word_index}")]
    OverlappingFields {
        schema: &'static str,
        word_index: usize,
        first: &'static str,
        second: &'static str,
    },

    #[error(
        "descriptor `{schema}`: field `{field}` at bit {bit_offset} with width {bit_width} runs \
         past the end of its word"
    )]
    FieldOutOfWordBounds {
        schema: &'static str,
        field: &'static str,
        bit_offset: u8,
        bit_width: u8,
    },

    #[error(
        "descriptor `{schema}`: field `{field}` is in word {word_index}, but the descriptor has \
         {num_words} words"
    )]
    FieldWordIndexOutOfRange {
        schema: &'static str,
        field: &'static str,
        word_index: usize,
        num_words: usize,
    },

    #[error("descriptor `{schema}`: field `{field}` has zero width")]
    ZeroWidthField {
        schema: &'static str,
        field: &'static str,
    },

    #[error("descriptor `{schema}`: field name `{field}` is declared more than once")]
    DuplicateFieldName {
        schema: &'static str,
        field: &'static str,
    },
}
