use core::ops::{Add, Sub};

/// Numeric types a [`crate::CumulativeSequence`] can hold.
///
/// `Default` must be the additive identity; it seeds the running total and is returned for
/// empty ranges.
pub trait Summable: Copy + Default + Add<Output = Self> + Sub<Output = Self> {}
impl<T: Copy + Default + Add<Output = T> + Sub<Output = T>> Summable for T {}
