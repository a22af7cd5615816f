//! Encoding and decoding of hardware descriptors described by `hwdesc-reflect` schemas.
//!
//! Every function here is a pure transform over its arguments, so schemas and instances can be
//! shared across threads freely.

mod decode;
mod encode;
mod error;
mod field;
mod layout;
mod lint;
mod validate;

#[cfg(test)]
mod testing;

pub use decode::{decode, FieldValues};
pub use encode::encode;
pub use error::{CodecError, SchemaError};
pub use field::{extract, extract_word, get_field, insert, insert_word, set_field};
pub use layout::check_len;
pub use lint::{lint, IllegalValue};
pub use validate::{validate, SchemaWarning};

/// A live descriptor: the words written to or read back from hardware.
pub type DescriptorInstance = hwdesc_words::OwnedWords;
