use crate::FieldSpec;

/// The layout of one hardware descriptor: a fixed number of 32-bit words and the bitfields
/// packed into them.
#[derive(Debug)]
pub struct DescriptorSchema {
    pub name: &'static str,
    /// The header's `NUM_OF_DWORDS_*` constant.
    pub num_words: usize,
    /// In declaration order. Every field's `word_index` is expected to be below `num_words`.
    pub fields: &'static [FieldSpec],
}

impl DescriptorSchema {
    pub fn field(&self, name: &str) -> Option<&'static FieldSpec> {
        let fields = self.fields;
        fields.iter().find(|field| field.name == name)
    }

    pub fn fields_in_word(&self, word_index: usize) -> impl Iterator<Item = &'static FieldSpec> {
        let fields = self.fields;
        fields
            .iter()
            .filter(move |field| field.word_index == word_index)
    }

    pub fn size_bytes(&self) -> usize {
        self.num_words * 4
    }
}
