use alloc::vec::Vec;
use core::fmt;
use core::slice;

use crate::{Element, Error, Result, Summable};

/// Iterator over the logical elements of a [`CumulativeSequence`].
pub type Iter<'a, T> = slice::Iter<'a, Element<T>>;

/// An append-only-at-the-tail sequence that keeps a running total per element.
///
/// Logical indices are 0-based. Storage carries a leading zero element so that the running
/// total *before* logical index `i` is always `elements[i].cumulative_sum`; callers never see it.
///
/// With `feature = "serde"`, the sequence (de)serializes as the plain list of values. Running
/// totals are rebuilt on load.
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(
        from = "Vec<T>",
        into = "Vec<T>",
        bound(
            serialize = "T: Summable + serde::Serialize",
            deserialize = "T: Summable + serde::Deserialize<'de>"
        )
    )
)]
pub struct CumulativeSequence<T = i64> {
    elements: Vec<Element<T>>, // elements[0] is the zero sentinel
}

impl<T> CumulativeSequence<T> {
    /// Number of logical elements.
    pub fn len(&self) -> usize {
        self.elements.len().saturating_sub(1)
    }

    /// Returns `true` when no values have been appended (or all were removed).
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the logical element at `index`, or `None` when out of range.
    pub fn get(&self, index: usize) -> Option<&Element<T>> {
        self.elements.get(index.checked_add(1)?)
    }

    /// The logical elements in order, without the sentinel.
    pub fn as_slice(&self) -> &[Element<T>] {
        self.elements.get(1..).unwrap_or_default()
    }

    /// Iterates over the logical elements in order.
    pub fn iter(&self) -> Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Maps a logical index to its storage slot.
    fn slot(&self, index: usize) -> Result<usize> {
        let len = self.len();
        if index < len {
            return Ok(index + 1);
        }
        cwarn!(index, len, "CumulativeSequence: index out of range");
        Err(Error::IndexOutOfRange { index, len })
    }
}

impl<T: Summable> CumulativeSequence<T> {
    /// Creates an empty sequence.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty sequence with room for `capacity` values.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut elements = Vec::with_capacity(capacity.saturating_add(1));
        elements.push(Element::default());
        Self { elements }
    }

    fn last_sum(&self) -> T {
        self.elements
            .last()
            .map_or_else(T::default, |e| e.cumulative_sum)
    }

    /// Appends `value` at the tail.
    pub fn append(&mut self, value: T) {
        let cumulative_sum = self.last_sum() + value;
        self.elements.push(Element::new(value, cumulative_sum));
        ctrace!(len = self.len(), "CumulativeSequence::append");
    }

    /// Appends every value in order. Same end state as calling [`Self::append`] per value.
    pub fn extend<I: IntoIterator<Item = T>>(&mut self, values: I) {
        let values = values.into_iter();
        self.elements.reserve(values.size_hint().0);
        let mut running = self.last_sum();
        for value in values {
            running = running + value;
            self.elements.push(Element::new(value, running));
        }
        ctrace!(len = self.len(), "CumulativeSequence::extend");
    }

    /// Removes the element at `index` and returns its value.
    ///
    /// Every later running total is reduced by the removed value, so this is `O(n)` in the
    /// number of elements after `index`. On error the sequence is left untouched.
    pub fn delete(&mut self, index: usize) -> Result<T> {
        let slot = self.slot(index)?;
        let removed = self.elements[slot].value;
        for e in &mut self.elements[slot + 1..] {
            e.cumulative_sum = e.cumulative_sum - removed;
        }
        self.elements.remove(slot);
        cdebug!(index, len = self.len(), "CumulativeSequence::delete");
        Ok(removed)
    }

    /// Returns the sum of the values at `l..=r`.
    ///
    /// Only `r` is bounds-checked: with `r` in range, `l > r` is an empty range and yields
    /// zero (`T::default()`).
    pub fn range_sum(&self, l: usize, r: usize) -> Result<T> {
        let end = self.slot(r)?;
        if l > r {
            return Ok(T::default());
        }
        Ok(self.elements[end].cumulative_sum - self.elements[l].cumulative_sum)
    }

    /// Returns the running total up to and including `index`.
    pub fn prefix_sum(&self, index: usize) -> Result<T> {
        let slot = self.slot(index)?;
        Ok(self.elements[slot].cumulative_sum)
    }

    /// Returns the raw value stored at `index`.
    pub fn value_at(&self, index: usize) -> Result<T> {
        let slot = self.slot(index)?;
        Ok(self.elements[slot].value)
    }

    /// Sum of all values; zero when empty.
    pub fn total(&self) -> T {
        self.last_sum()
    }

    /// Iterates over the raw values in order.
    pub fn values(&self) -> impl DoubleEndedIterator<Item = T> + ExactSizeIterator + '_ {
        self.iter().map(|e| e.value)
    }

    /// Iterates over the running totals in order.
    pub fn cumulative_sums(&self) -> impl DoubleEndedIterator<Item = T> + ExactSizeIterator + '_ {
        self.iter().map(|e| e.cumulative_sum)
    }

    /// Removes the last element in `O(1)`; no running totals need rewriting.
    pub fn pop(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        self.elements.pop().map(|e| e.value)
    }

    /// Keeps the first `len` elements. Does nothing if `len >= self.len()`.
    pub fn truncate(&mut self, len: usize) {
        if len >= self.len() {
            return;
        }
        self.elements.truncate(len + 1);
        cdebug!(len, "CumulativeSequence::truncate");
    }

    /// Removes every element; the sequence behaves as if freshly created.
    pub fn clear(&mut self) {
        self.elements.truncate(1);
        cdebug!("CumulativeSequence::clear");
    }
}

impl<T: Summable> Default for CumulativeSequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for CumulativeSequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CumulativeSequence")
            .field("elements", &self.as_slice())
            .finish()
    }
}

impl<T: Summable> Extend<T> for CumulativeSequence<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        CumulativeSequence::extend(self, iter);
    }
}

impl<T: Summable> FromIterator<T> for CumulativeSequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut seq = Self::new();
        CumulativeSequence::extend(&mut seq, iter);
        seq
    }
}

impl<T: Summable> From<Vec<T>> for CumulativeSequence<T> {
    fn from(values: Vec<T>) -> Self {
        values.into_iter().collect()
    }
}

impl<T: Summable> From<CumulativeSequence<T>> for Vec<T> {
    fn from(seq: CumulativeSequence<T>) -> Self {
        seq.values().collect()
    }
}

impl<'a, T> IntoIterator for &'a CumulativeSequence<T> {
    type Item = &'a Element<T>;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
