use std::ops::Range;

use crate::{LegalValues, WORD_BITS};

/// One named bitfield within a descriptor.
#[derive(Clone, Copy, Debug)]
pub struct FieldSpec {
    pub name: &'static str,
    /// Which 32-bit word the field occupies.
    pub word_index: usize,
    /// Position of the field's least significant bit within its word.
    pub bit_offset: u8,
    pub bit_width: u8,
    pub legal: LegalValues,
}

impl FieldSpec {
    /// Byte offset of the field's word from the start of the descriptor (the header's
    /// `_OFFSET` constant).
    pub const fn byte_offset(&self) -> u32 {
        (self.word_index * 4) as u32
    }

    /// The header's `_LSB` constant.
    pub const fn lsb(&self) -> u32 {
        self.bit_offset as u32
    }

    /// The most significant bit covered by the field.
    pub const fn msb(&self) -> u32 {
        (self.bit_offset as u32 + self.bit_width as u32).saturating_sub(1)
    }

    /// Largest value the field can hold. Shifting is applied before masking with this.
    pub const fn max_value(&self) -> u32 {
        if self.bit_width as u32 >= WORD_BITS {
            u32::MAX
        } else {
            (1 << self.bit_width) - 1
        }
    }

    /// The field's bits in position within its word (the header's `_MASK` constant).
    pub const fn mask(&self) -> u32 {
        match self.max_value().checked_shl(self.bit_offset as u32) {
            Some(mask) => mask,
            None => 0,
        }
    }

    pub fn bit_range(&self) -> Range<u32> {
        self.lsb()..self.lsb() + self.bit_width as u32
    }

    /// Whether `self` and `other` share any bit. Fields in different words never overlap.
    pub fn overlaps(&self, other: &FieldSpec) -> bool {
        let a = self.bit_range();
        let b = other.bit_range();
        self.word_index == other.word_index && a.start < b.end && b.start < a.end
    }

    pub fn is_legal(&self, value: u32) -> bool {
        self.legal.contains(value)
    }
}

#[cfg(test)]
mod tests {
    use super::FieldSpec;
    use crate::LegalValues;

    const fn field(word_index: usize, bit_offset: u8, bit_width: u8) -> FieldSpec {
        FieldSpec {
            name: "f",
            word_index,
            bit_offset,
            bit_width,
            legal: LegalValues::All,
        }
    }

    #[test]
    fn header_constants() {
        // FLUSH_QID_CMD_0_QID
        let qid = field(0, 16, 14);
        assert_eq!(qid.byte_offset(), 0x00000000);
        assert_eq!(qid.lsb(), 16);
        assert_eq!(qid.mask(), 0x3fff0000);

        // FLUSH_QID_CMD_1_RESERVED_1
        let reserved_1 = field(1, 1, 31);
        assert_eq!(reserved_1.byte_offset(), 0x00000004);
        assert_eq!(reserved_1.mask(), 0xfffffffe);

        // FLUSH_QID_CMD_3_RESERVED_3
        let reserved_3 = field(3, 0, 32);
        assert_eq!(reserved_3.byte_offset(), 0x0000000c);
        assert_eq!(reserved_3.mask(), 0xffffffff);
    }

    #[test]
    fn msb_and_max_value() {
        let post_delim_cnt = field(0, 16, 12);
        assert_eq!(post_delim_cnt.msb(), 27);
        assert_eq!(post_delim_cnt.max_value(), 0xfff);
        assert_eq!(field(0, 0, 32).max_value(), u32::MAX);
        assert_eq!(field(0, 31, 1).mask(), 0x80000000);
    }

    #[test]
    fn overlaps() {
        assert!(field(0, 0, 4).overlaps(&field(0, 3, 2)));
        assert!(field(0, 3, 2).overlaps(&field(0, 0, 4)));
        assert!(!field(0, 0, 4).overlaps(&field(0, 4, 4)));
        assert!(!field(0, 0, 4).overlaps(&field(1, 0, 4)));
    }
}
