//! A cumulative (prefix-sum) sequence.
//!
//! [`CumulativeSequence`] stores every appended value next to the running total up to and
//! including it. Keeping those totals current lets any inclusive range sum be answered with a
//! single subtraction:
//! - append / extend: amortized `O(1)` per value
//! - range sum, prefix sum, total: `O(1)`
//! - delete: `O(n)` in the number of elements after the removed one
//!
//! Rendering is left to callers. See the `cumseq-table` crate for the three-row table view.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod element;
mod error;
mod sequence;
mod value;


pub use element::Element;
pub use error::{Error, Result};
pub use sequence::{CumulativeSequence, Iter};
pub use value::Summable;
