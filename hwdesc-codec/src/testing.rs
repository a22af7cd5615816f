//! Hand-written tables shared by the unit tests.

use hwdesc_reflect::{DescriptorSchema, EnumDescriptor, FieldSpec, LegalValues};

const fn field(
    name: &'static str,
    word_index: usize,
    bit_offset: u8,
    bit_width: u8,
    legal: LegalValues,
) -> FieldSpec {
    FieldSpec {
        name,
        word_index,
        bit_offset,
        bit_width,
        legal,
    }
}

pub const FLUSH_CTRL: EnumDescriptor = EnumDescriptor {
    name: "FlushCtrl",
    values: &[(0, "FLUSH_ALL"), (1, "FLUSH_RETRY_ONLY")],
};

pub const FLUSH_QID_CMD: DescriptorSchema = DescriptorSchema {
    name: "flush_qid_cmd",
    num_words: 4,
    fields: &[
        field("cmd_id", 0, 0, 4, LegalValues::Only(&[2])),
        field("reserved_0a", 0, 4, 4, LegalValues::Reserved),
        field("sw_cmd_ref", 0, 8, 8, LegalValues::All),
        field("qid", 0, 16, 14, LegalValues::All),
        field("reserved_0b", 0, 30, 2, LegalValues::Reserved),
        field("flush_ctrl", 1, 0, 1, LegalValues::Enum(&FLUSH_CTRL)),
        field("reserved_1", 1, 1, 31, LegalValues::Reserved),
        field("reserved_2", 2, 0, 32, LegalValues::Reserved),
        field("reserved_3", 3, 0, 32, LegalValues::Reserved),
    ],
};

pub const RX_MPDU_END: DescriptorSchema = DescriptorSchema {
    name: "rx_mpdu_end",
    num_words: 1,
    fields: &[
        field("reserved_0", 0, 0, 13, LegalValues::Reserved),
        field("overflow_err", 0, 13, 1, LegalValues::All),
        field("last_mpdu", 0, 14, 1, LegalValues::All),
        field("post_delim_err", 0, 15, 1, LegalValues::All),
        field("post_delim_cnt", 0, 16, 12, LegalValues::All),
        field("mpdu_length_err", 0, 28, 1, LegalValues::All),
        field("tkip_mic_err", 0, 29, 1, LegalValues::All),
        field("decrypt_err", 0, 30, 1, LegalValues::All),
        field("fcs_err", 0, 31, 1, LegalValues::All),
    ],
};
