use crate::EnumDescriptor;

/// The values a field may validly hold.
///
/// Holding any other value is not an encoding error; hardware often tolerates it. It is
/// reported by `hwdesc_codec::lint` instead.
#[derive(Clone, Copy, Debug)]
pub enum LegalValues {
    /// `<legal all>`
    All,
    /// Reserved bits: software writes zero, hardware ignores them.
    Reserved,
    /// `<legal 2>`
    Only(&'static [u32]),
    /// Inclusive range.
    Range { min: u32, max: u32 },
    Enum(&'static EnumDescriptor),
}

impl LegalValues {
    pub fn contains(self, value: u32) -> bool {
        match self {
            LegalValues::All => true,
            LegalValues::Reserved => value == 0,
            LegalValues::Only(values) => values.contains(&value),
            LegalValues::Range { min, max } => (min..=max).contains(&value),
            LegalValues::Enum(desc) => desc.contains(value),
        }
    }

    pub fn is_reserved(self) -> bool {
        matches!(self, LegalValues::Reserved)
    }

    /// Largest value named by this set, if it is bounded.
    pub fn max_named(self) -> Option<u32> {
        match self {
            LegalValues::All => None,
            LegalValues::Reserved => Some(0),
            LegalValues::Only(values) => values.iter().copied().max(),
            LegalValues::Range { max, .. } => Some(max),
            LegalValues::Enum(desc) => desc.iter_values().max(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::LegalValues;
    use crate::EnumDescriptor;

    const FLUSH_CTRL: EnumDescriptor = EnumDescriptor {
        name: "FlushCtrl",
        values: &[(0, "FLUSH_ALL"), (1, "FLUSH_RETRY_ONLY")],
    };

    #[test]
    fn contains() {
        assert!(LegalValues::All.contains(u32::MAX));
        assert!(LegalValues::Reserved.contains(0));
        assert!(!LegalValues::Reserved.contains(1));
        assert!(LegalValues::Only(&[2]).contains(2));
        assert!(!LegalValues::Only(&[2]).contains(0));
        assert!(LegalValues::Range { min: 1, max: 5 }.contains(5));
        assert!(!LegalValues::Range { min: 1, max: 5 }.contains(0));
        assert!(LegalValues::Enum(&FLUSH_CTRL).contains(1));
        assert!(!LegalValues::Enum(&FLUSH_CTRL).contains(2));
    }

    #[test]
    fn max_named() {
        assert_eq!(LegalValues::All.max_named(), None);
        assert_eq!(LegalValues::Only(&[2, 9, 4]).max_named(), Some(9));
        assert_eq!(LegalValues::Enum(&FLUSH_CTRL).max_named(), Some(1));
    }
}
