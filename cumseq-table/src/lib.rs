//! Table rendering for the `cumseq` crate.
//!
//! The `cumseq` crate only stores values and running totals. This crate turns a
//! [`cumseq::CumulativeSequence`] into the bordered three-row view (index, value, cumulative
//! sum) used by command-line tools and demos.
//!
//! With `TableOptions::new().with_labels("i", "v", "sum").with_padding(1)`:
//!
//! ```text
//! ----------------------
//! |  i   |  0   |  1   |
//! ----------------------
//! |  v   |  10  |  -3  |
//! ----------------------
//! | sum  |  10  |  7   |
//! ----------------------
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod options;
mod table;


pub use options::TableOptions;
pub use table::Table;
