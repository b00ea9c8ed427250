#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Utilities for parsing and emitting compact index range lists, as used by network device
//! configuration to select virtual function indexes and similar numeric hardware identifiers.
//!
//! Example range list string: `0,3-5,7`
//!
//! # Format
//!
//! The value is a comma-separated list of one or more items, where each item is either:
//!
//! * a single integer (e.g. `1`)
//! * an inclusive range of integers (e.g. `2-4`), where the start must not exceed the end
//!
//! Whitespace, empty items or extra characters are not allowed anywhere in the string.
//!
//! The identifiers in the list are of size `u32`.
//!
//! Unlike a set, a parsed range list keeps its items in the order they were written and does not
//! merge duplicates or overlaps. Membership is the union of all items.
//!
//! # Example
//!
//! ```
//! let ranges = rangelist::parse("0,3-5,7").unwrap();
//! assert_eq!(ranges.len(), 3);
//!
//! assert!(rangelist::contains_any(&ranges, 4));
//! assert!(!rangelist::contains_any(&ranges, 6));
//!
//! println!("As range list: {}", rangelist::emit(&ranges));
//! ```
//!
//! Malformed input is rejected rather than silently normalized:
//!
//! ```
//! assert!(rangelist::parse("5-2").is_err());
//! assert!(rangelist::parse("abc").is_err());
//! ```

mod emit;
mod error;
mod parse;
mod range;

pub use emit::*;
pub use error::*;
pub use parse::*;
pub use range::*;

pub(crate) type Item = u32;
