use hwdesc_reflect::DescriptorSchema;
use hwdesc_words::Words;

use crate::CodecError;

/// Checks that `words` holds exactly as many words as `schema` declares.
pub fn check_len(schema: &DescriptorSchema, words: Words<'_>) -> Result<(), CodecError> {
    if words.len() == schema.num_words {
        Ok(())
    } else {
        Err(CodecError::LengthMismatch {
            schema: schema.name,
            expected: schema.num_words,
            actual: words.len(),
        })
    }
}

pub(crate) fn lookup(
    schema: &DescriptorSchema,
    name: &str,
) -> Result<&'static hwdesc_reflect::FieldSpec, CodecError> {
    schema.field(name).ok_or_else(|| CodecError::FieldNotFound {
        schema: schema.name,
        name: name.to_string(),
    })
}
