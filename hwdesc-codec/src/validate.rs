use hwdesc_reflect::{DescriptorSchema, WORD_BITS};
use thiserror::Error;

use crate::SchemaError;

/// Questionable but usable schema entries.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SchemaWarning {
    #[error(
        "descriptor `{schema}`: field `{field}` lists legal value 0x{value:x}, which does not fit \
         in {width} bits"
    )]
    UnreachableLegalValue {
        schema: &'static str,
        field: &'static str,
        value: u32,
        width: u8,
    },

    #[error(
        "descriptor `{schema}`: zero is not a legal value of field `{field}`, so encoding \
         without it produces an illegal descriptor"
    )]
    ZeroNotLegal {
        schema: &'static str,
        field: &'static str,
    },
}

/// Checks a schema table for layout defects.
///
/// Schemas are expected to be checked once, when they are declared, and trusted afterwards;
/// encode and decode do not repeat these checks.
pub fn validate(schema: &DescriptorSchema) -> Result<Vec<SchemaWarning>, SchemaError> {
    let mut warnings = vec![];

    for (index, field) in schema.fields.iter().enumerate() {
        if field.bit_width == 0 {
            return Err(SchemaError::ZeroWidthField {
                schema: schema.name,
                field: field.name,
            });
        }
        if field.word_index >= schema.num_words {
            return Err(SchemaError::FieldWordIndexOutOfRange {
                schema: schema.name,
                field: field.name,
                word_index: field.word_index,
                num_words: schema.num_words,
            });
        }
        if field.lsb() + field.bit_width as u32 > WORD_BITS {
            return Err(SchemaError::FieldOutOfWordBounds {
                schema: schema.name,
                field: field.name,
                bit_offset: field.bit_offset,
                bit_width: field.bit_width,
            });
        }

        // Earlier fields have already passed the checks above.
        for earlier in &schema.fields[..index] {
            if earlier.name == field.name {
                return Err(SchemaError::DuplicateFieldName {
                    schema: schema.name,
                    field: field.name,
                });
            }
            if earlier.overlaps(field) {
                return Err(SchemaError::OverlappingFields {
                    schema: schema.name,
                    word_index: field.word_index,
                    first: earlier.name,
                    second: field.name,
                });
            }
        }

        if let Some(value) = field.legal.max_named() {
            if value > field.max_value() {
                warnings.push(SchemaWarning::UnreachableLegalValue {
                    schema: schema.name,
                    field: field.name,
                    value,
                    width: field.bit_width,
                });
            }
        }
        if !field.is_legal(0) {
            warnings.push(SchemaWarning::ZeroNotLegal {
                schema: schema.name,
                field: field.name,
            });
        }
    }

    Ok(warnings)
}
