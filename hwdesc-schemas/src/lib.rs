#![recursion_limit = "256"]
#![cfg_attr(feature = "trace_macros", feature(trace_macros))]

#[cfg(feature = "trace_macros")]
trace_macros!(true);

#[macro_use]
mod macros;

pub mod flush_qid_cmd;
pub mod rx_attention;
pub mod rx_mpdu_end;
pub mod rx_msdu_start;

use hwdesc_reflect::DescriptorSchema;

/// Every declared descriptor schema.
pub const ALL_SCHEMAS: &[&DescriptorSchema] = &[
    &flush_qid_cmd::FLUSH_QID_CMD_DESC,
    &rx_attention::RX_ATTENTION_DESC,
    &rx_mpdu_end::RX_MPDU_END_DESC,
    &rx_msdu_start::RX_MSDU_START_DESC,
];

pub fn find(name: &str) -> Option<&'static DescriptorSchema> {
    ALL_SCHEMAS.iter().copied().find(|schema| schema.name == name)
}
