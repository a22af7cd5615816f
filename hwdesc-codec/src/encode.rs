use hwdesc_reflect::DescriptorSchema;
use hwdesc_words::OwnedWords;

use crate::layout::lookup;
use crate::{insert, CodecError};

/// Packs named field values into a fresh descriptor instance.
///
/// Fields that are not named are left zero, which is what reserved bits require. If a name
/// appears more than once, the last value wins.
pub fn encode<'n, I>(schema: &DescriptorSchema, values: I) -> Result<OwnedWords, CodecError>
where
    I: IntoIterator<Item = (&'n str, u32)>,
{
    let mut words = OwnedWords::zeroed(schema.num_words);
    for (name, value) in values {
        insert(lookup(schema, name)?, words.as_mut_slice(), value)?;
    }
    Ok(words)
}
