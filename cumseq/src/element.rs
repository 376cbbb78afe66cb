/// A stored value and the running total up to and including it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Element<T> {
    /// The raw value as appended.
    pub value: T,
    /// Sum of every value from the start of the sequence through this one.
    pub cumulative_sum: T,
}

impl<T> Element<T> {
    /// Pairs a value with its running total. No consistency check is made.
    pub fn new(value: T, cumulative_sum: T) -> Self {
        Self {
            value,
            cumulative_sum,
        }
    }
}
