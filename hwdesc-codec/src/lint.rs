use hwdesc_reflect::DescriptorSchema;
use hwdesc_words::Words;
use thiserror::Error;

use crate::layout::check_len;
use crate::{extract, CodecError};

/// A field holding a value outside its documented legal set.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("field `{field}` holds 0x{value:x}, which is not one of its legal values")]
pub struct IllegalValue {
    pub field: &'static str,
    pub value: u32,
    /// Set when the field is reserved, i.e. software should have written zero.
    pub reserved: bool,
}

/// Reports every field of a descriptor instance whose value is outside its legal set.
///
/// Nothing is rejected; hardware may accept such values.
pub fn lint(schema: &DescriptorSchema, words: Words<'_>) -> Result<Vec<IllegalValue>, CodecError> {
    check_len(schema, words)?;
    let mut findings = vec![];
    for field in schema.fields {
        let value = extract(field, words)?;
        if !field.is_legal(value) {
            findings.push(IllegalValue {
                field: field.name,
                value,
                reserved: field.legal.is_reserved(),
            });
        }
    }
    Ok(findings)
}

#[cfg(test)]
mod tests {
    use hwdesc_reflect::{DescriptorSchema, EnumDescriptor, FieldSpec, LegalValues};
    use hwdesc_words::Words;

    use super::{lint, IllegalValue};
    use crate::testing::FLUSH_QID_CMD;

    const PRIORITY: EnumDescriptor = EnumDescriptor {
        name: "Priority",
        values: &[(0, "LOW"), (1, "HIGH")],
    };

    const QUEUE_CFG: DescriptorSchema = DescriptorSchema {
        name: "queue_cfg",
        num_words: 1,
        fields: &[
            FieldSpec {
                name: "priority",
                word_index: 0,
                bit_offset: 0,
                bit_width: 2,
                legal: LegalValues::Enum(&PRIORITY),
            },
            FieldSpec {
                name: "depth",
                word_index: 0,
                bit_offset: 2,
                bit_width: 6,
                legal: LegalValues::Range { min: 1, max: 32 },
            },
        ],
    };

    #[test]
    fn clean_command() {
        assert_eq!(lint(&FLUSH_QID_CMD, Words(&[0x00642a02, 1, 0, 0])), Ok(vec![]));
    }

    #[test]
    fn reports_command_id_and_reserved_bits() {
        assert_eq!(
            lint(&FLUSH_QID_CMD, Words(&[0x80642a03, 0, 0, 0])),
            Ok(vec![
                IllegalValue {
                    field: "cmd_id",
                    value: 3,
                    reserved: false,
                },
                IllegalValue {
                    field: "reserved_0b",
                    value: 2,
                    reserved: true,
                },
            ]),
        );
    }

    #[test]
    fn declared_enum_values_pass() {
        assert_eq!(
            lint(&FLUSH_QID_CMD, Words(&[0x00000002, 1, 0, 0])),
            Ok(vec![]),
        );
    }

    #[test]
    fn undeclared_enum_value_and_range() {
        assert_eq!(lint(&QUEUE_CFG, Words(&[1 | (32 << 2)])), Ok(vec![]));
        assert_eq!(
            lint(&QUEUE_CFG, Words(&[3 | (33 << 2)])),
            Ok(vec![
                IllegalValue {
                    field: "priority",
                    value: 3,
                    reserved: false,
                },
                IllegalValue {
                    field: "depth",
                    value: 33,
                    reserved: false,
                },
            ]),
        );
    }

    #[test]
    fn checks_length() {
        assert!(lint(&FLUSH_QID_CMD, Words(&[2])).is_err());
    }
}
