use hwdesc_reflect::{DescriptorSchema, FieldSpec};
use hwdesc_words::{OwnedWords, Words};

use crate::layout::{check_len, lookup};
use crate::CodecError;

/// Extracts `field` from the word it lives in.
pub fn extract_word(field: &FieldSpec, word: u32) -> u32 {
    word.checked_shr(field.lsb()).unwrap_or(0) & field.max_value()
}

/// Returns `word` with `field` replaced by `value`. Bits outside the field are preserved.
///
/// Values wider than the field are rejected rather than truncated.
pub fn insert_word(field: &FieldSpec, word: u32, value: u32) -> Result<u32, CodecError> {
    if value > field.max_value() {
        return Err(CodecError::ValueOutOfRange {
            field: field.name,
            width: field.bit_width,
            value,
        });
    }
    Ok((word & !field.mask()) | value.checked_shl(field.lsb()).unwrap_or(0))
}

/// Extracts `field` from a descriptor's words.
pub fn extract(field: &FieldSpec, words: Words<'_>) -> Result<u32, CodecError> {
    Ok(extract_word(field, words.get(field.word_index)?))
}

/// Replaces `field` within a descriptor's words.
pub fn insert(field: &FieldSpec, words: &mut [u32], value: u32) -> Result<(), CodecError> {
    let len = words.len();
    let word = words
        .get_mut(field.word_index)
        .ok_or(hwdesc_words::WordsError::OutOfRange {
            index: field.word_index,
            len,
        })?;
    *word = insert_word(field, *word, value)?;
    Ok(())
}

/// Reads the field called `name` from an existing descriptor instance.
pub fn get_field(
    schema: &DescriptorSchema,
    words: Words<'_>,
    name: &str,
) -> Result<u32, CodecError> {
    check_len(schema, words)?;
    extract(lookup(schema, name)?, words)
}

/// Overwrites the field called `name` in an existing descriptor instance, leaving every other
/// bit untouched.
pub fn set_field(
    schema: &DescriptorSchema,
    words: &mut OwnedWords,
    name: &str,
    value: u32,
) -> Result<(), CodecError> {
    check_len(schema, words.borrow())?;
    insert(lookup(schema, name)?, words.as_mut_slice(), value)
}
