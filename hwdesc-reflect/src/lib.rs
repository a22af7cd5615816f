//! Static tables describing hardware descriptor layouts.
//!
//! A [`DescriptorSchema`] is a `const` table of [`FieldSpec`]s, one per named bitfield. Tables
//! are normally generated by `hwdesc-schemas` and checked once with `hwdesc_codec::validate`.

mod bitfield;
mod enum_;
mod legal;
mod schema;

pub use bitfield::FieldSpec;
pub use enum_::EnumDescriptor;
pub use legal::LegalValues;
pub use schema::DescriptorSchema;

/// Number of bits in one descriptor word.
pub const WORD_BITS: u32 = 32;
