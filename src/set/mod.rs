//! Sets of strings.
//!
//! This module provides [`StringSet`], a mutable collection of unique
//! strings backed by a key-only hash map:
//!
//! - Construction from any iterable of string-like values
//! - In-place, chainable mutation (`insert`, `remove`, `clear`, `invert`)
//! - Membership and size queries
//! - Subset / superset / equality / disjointness relations
//! - Set algebra (`union`, `intersection`, `difference`,
//!   `symmetric_difference`) producing new, independent sets
//!
//! # Observable Order
//!
//! Storage order is irrelevant, but every externally observed listing
//! (`elements`, iteration, `Display`, serialization) is sorted ascending.
//!
//! # Examples
//!
//! ```rust
//! use stringset::set::StringSet;
//!
//! let first = StringSet::new(["a", "b", "c"]);
//! let second = StringSet::new(["b", "c", "d"]);
//!
//! assert_eq!(first.union(&second).as_string(), "(a, b, c, d)");
//! assert_eq!(first.intersection(&second).as_string(), "(b, c)");
//! assert_eq!(first.symmetric_difference(&second).as_string(), "(a, d)");
//! ```
//!
//! ## Chaining
//!
//! ```rust
//! use stringset::set::StringSet;
//!
//! let mut set = StringSet::empty();
//! set.insert(["x", "y"]).remove(["x"]).invert(["z", "y"]);
//!
//! assert_eq!(set.elements(), vec!["z"]);
//! ```
//!
//! ## Parsing
//!
//! ```rust
//! use stringset::set::StringSet;
//!
//! let set: StringSet = "(apple, banana)".parse().unwrap();
//! assert!(set.contains(["apple", "banana"]));
//! ```

// =============================================================================
// Element Hasher Type Alias
// =============================================================================

/// Hash builder used by the backing map.
///
/// With the `fxhash` feature this is `rustc_hash::FxBuildHasher`; with the
/// `ahash` feature (and without `fxhash`) it is `ahash::RandomState`.
/// Otherwise it is the standard library's SipHash `RandomState`.
///
/// Neither fast hasher is HashDoS-resistant.
#[cfg(feature = "fxhash")]
pub(crate) type ElementHasher = rustc_hash::FxBuildHasher;

#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub(crate) type ElementHasher = ahash::RandomState;

#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub(crate) type ElementHasher = std::collections::hash_map::RandomState;

mod error;
mod macros;
mod parse;
mod string_set;

pub use error::ParseStringSetError;
pub use string_set::StringSet;
pub use string_set::StringSetIntoIterator;
pub use string_set::StringSetIterator;

pub use crate::string_set;

// =============================================================================
// Tests
// =============================================================================
