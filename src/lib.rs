//! # stringset
//!
//! A small library providing set-of-strings semantics backed by a key-only
//! hash map.
//!
//! ## Overview
//!
//! - **Construction**: from any iterable of string-like values, or with
//!   the [`string_set!`] macro
//! - **Mutation**: chainable, in-place `insert`, `remove`, `clear`, `invert`
//! - **Queries**: `size`, `is_empty`, sorted `elements`, `contains`
//! - **Relations**: subset, superset (plain and proper), equality, disjointness
//! - **Algebra**: `union`, `intersection`, `difference`, `symmetric_difference`
//! - **Text**: canonical `(a, b, c)` form via `Display`, parsed back via `FromStr`
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize` / `Deserialize` for [`set::StringSet`]
//! - `fxhash`: back sets with `FxHash` instead of `SipHash`
//! - `ahash`: back sets with `aHash` instead of `SipHash`
//! - `full`: `serde` and `fxhash`
//!
//! ## Example
//!
//! ```rust
//! use stringset::prelude::*;
//!
//! let mut tags = string_set!["rust", "sets"];
//! tags.insert(["library"]).remove(["sets"]);
//!
//! assert_eq!(tags.as_string(), "(library, rust)");
//! assert!(tags.is_proper_superset(&StringSet::new(["rust"])));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use stringset::prelude::*;
/// ```
pub mod prelude {
    pub use crate::set::*;
}

pub mod set;
