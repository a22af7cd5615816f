use hwdesc_reflect::DescriptorSchema;
use hwdesc_words::Words;
use std::collections::BTreeMap;

use crate::layout::check_len;
use crate::{extract, CodecError};

/// Every field of a descriptor, keyed by name.
pub type FieldValues = BTreeMap<&'static str, u32>;

/// Extracts every field of `schema` from a descriptor instance, including fields that are zero.
pub fn decode(schema: &DescriptorSchema, words: Words<'_>) -> Result<FieldValues, CodecError> {
    check_len(schema, words)?;
    schema
        .fields
        .iter()
        .map(|field| -> Result<_, CodecError> { Ok((field.name, extract(field, words)?)) })
        .collect()
}

#[cfg(test)]
mod tests {
    use hwdesc_words::Words;

    use super::{decode, FieldValues};
    use crate::testing::{FLUSH_QID_CMD, RX_MPDU_END};
    use crate::CodecError;

    fn only(name: &'static str, value: u32) -> FieldValues {
        RX_MPDU_END
            .fields
            .iter()
            .map(|field| (field.name, if field.name == name { value } else { 0 }))
            .collect()
    }

    #[test]
    fn rx_mpdu_end_error_bits() {
        assert_eq!(
            decode(&RX_MPDU_END, Words(&[0x80000000])),
            Ok(only("fcs_err", 1)),
        );
        assert_eq!(
            decode(&RX_MPDU_END, Words(&[0x40000000])),
            Ok(only("decrypt_err", 1)),
        );
    }

    #[test]
    fn reports_every_field() {
        let values = decode(&FLUSH_QID_CMD, Words(&[0x00642a02, 1, 0, 0])).unwrap();
        assert_eq!(values.len(), FLUSH_QID_CMD.fields.len());
        assert_eq!(values["cmd_id"], 2);
        assert_eq!(values["sw_cmd_ref"], 0x2a);
        assert_eq!(values["qid"], 100);
        assert_eq!(values["flush_ctrl"], 1);
        assert_eq!(values["reserved_2"], 0);
    }

    #[test]
    fn length_mismatch() {
        // Zero padding does not make a longer instance acceptable.
        assert_eq!(
            decode(&RX_MPDU_END, Words(&[0x80000000, 0])),
            Err(CodecError::LengthMismatch {
                schema: "rx_mpdu_end",
                expected: 1,
                actual: 2,
            }),
        );
        assert_eq!(
            decode(&FLUSH_QID_CMD, Words(&[0, 0, 0])),
            Err(CodecError::LengthMismatch {
                schema: "flush_qid_cmd",
                expected: 4,
                actual: 3,
            }),
        );
        assert!(decode(&RX_MPDU_END, Words(&[])).is_err());
    }
}
