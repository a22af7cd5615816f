/// Named values a field may hold, in the style of the `<enum 0 Flush_all>` annotations.
#[derive(Debug)]
pub struct EnumDescriptor {
    pub name: &'static str,
    /// Sorted by value.
    pub values: &'static [(u32, &'static str)],
}

impl EnumDescriptor {
    pub fn name_of(&self, value: u32) -> Option<&'static str> {
        self.values
            .binary_search_by_key(&value, |&(x, _)| x)
            .ok()
            .map(|index| self.values[index].1)
    }

    pub fn contains(&self, value: u32) -> bool {
        self.name_of(value).is_some()
    }

    pub fn iter_values(&self) -> impl Iterator<Item = u32> + '_ {
        self.values.iter().map(|&(value, _)| value)
    }
}
