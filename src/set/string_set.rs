//! Mutable set of strings.
//!
//! This module provides [`StringSet`], a collection of unique strings that
//! wraps a key-only `HashMap<String, ()>`.
//!
//! # Overview
//!
//! - O(1) average `contains`, `insert`, `remove` per element
//! - O(1) `size` and `is_empty`
//! - O(n log n) sorted observation (`elements`, iteration, `Display`)
//!
//! Mutating operations (`insert`, `remove`, `clear`, `invert`) work in place
//! and return `&mut Self` so calls can be chained. Operations combining two
//! sets never touch their operands and return a new set.
//!
//! # Examples
//!
//! ```rust
//! use stringset::set::StringSet;
//!
//! let mut set = StringSet::new(["b", "a"]);
//! set.insert(["c"]).remove(["a"]);
//!
//! assert_eq!(set.elements(), vec!["b", "c"]);
//! assert_eq!(set.to_string(), "(b, c)");
//! ```

use std::collections::HashMap;
use std::fmt;
use std::iter::FusedIterator;

use tracing::{debug, trace};

use super::ElementHasher;

// =============================================================================
// StringSet Definition
// =============================================================================

/// A set of unique strings backed by a key-only hash map.
///
/// Element order is never significant for storage or comparison, but every
/// listing observed from outside is sorted ascending.
///
/// # Time Complexity
///
/// | Operation              | Complexity        |
/// |------------------------|-------------------|
/// | `new`                  | O(n)              |
/// | `contains`             | O(k)              |
/// | `insert` / `remove`    | O(k)              |
/// | `invert`               | O(k)              |
/// | `size` / `is_empty`    | O(1)              |
/// | `elements`             | O(n log n)        |
/// | `union`                | O(n + m)          |
/// | `intersection`         | O(n)              |
/// | `difference`           | O(n)              |
/// | `symmetric_difference` | O(n + m)          |
///
/// where `k` is the number of argument elements.
///
/// # Examples
///
/// ```rust
/// use stringset::set::StringSet;
///
/// let set = StringSet::new(["red", "green", "red"]);
/// assert_eq!(set.size(), 2);
/// assert!(set.has(["red"]));
/// ```
#[derive(Clone, Default)]
pub struct StringSet {
    inner: HashMap<String, (), ElementHasher>,
}

static_assertions::assert_impl_all!(StringSet: Clone, Default, Send, Sync);

impl StringSet {
    /// Creates a set holding the unique values of `elements`.
    ///
    /// Duplicates collapse silently.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stringset::set::StringSet;
    ///
    /// let set = StringSet::new(["a", "b", "a"]);
    /// assert_eq!(set.size(), 2);
    /// ```
    #[must_use]
    pub fn new<I>(elements: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut set = Self::empty();
        set.insert(elements);
        set
    }

    /// Creates a set with no elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stringset::set::StringSet;
    ///
    /// let set = StringSet::empty();
    /// assert!(set.is_empty());
    /// assert_eq!(set.as_string(), "()");
    /// ```
    #[inline]
    #[must_use]
    pub fn empty() -> Self {
        Self {
            inner: HashMap::default(),
        }
    }

    // =========================================================================
    // Mutation
    // =========================================================================

    /// Adds each element that is not already present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stringset::set::StringSet;
    ///
    /// let mut set = StringSet::empty();
    /// set.insert(["a", "b"]).insert(["b", "c"]);
    /// assert_eq!(set.elements(), vec!["a", "b", "c"]);
    /// ```
    pub fn insert<I>(&mut self, elements: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut requested = 0_usize;
        let mut changed = 0_usize;
        for element in elements {
            requested += 1;
            if self.inner.insert(element.into(), ()).is_none() {
                changed += 1;
            }
        }
        trace!(requested, changed, size = self.size(), "inserted elements");
        self
    }

    /// Deletes each element that is present; absent elements are ignored.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stringset::set::StringSet;
    ///
    /// let mut set = StringSet::new(["a", "b"]);
    /// set.remove(["a", "missing"]);
    /// assert_eq!(set.elements(), vec!["b"]);
    /// ```
    pub fn remove<I>(&mut self, elements: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut requested = 0_usize;
        let mut changed = 0_usize;
        for element in elements {
            requested += 1;
            if self.inner.remove(element.as_ref()).is_some() {
                changed += 1;
            }
        }
        trace!(requested, changed, size = self.size(), "removed elements");
        self
    }

    /// Alias of [`StringSet::remove`].
    #[inline]
    pub fn delete<I>(&mut self, elements: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.remove(elements)
    }

    /// Removes every element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stringset::set::StringSet;
    ///
    /// let mut set = StringSet::new(["a", "b"]);
    /// set.clear().insert(["c"]);
    /// assert_eq!(set.elements(), vec!["c"]);
    /// ```
    pub fn clear(&mut self) -> &mut Self {
        let removed = self.size();
        self.inner.clear();
        debug!(removed, "cleared set");
        self
    }

    /// Toggles the membership of each element.
    ///
    /// Present elements are removed and absent ones inserted. Elements are
    /// processed one at a time against the current contents, so an element
    /// listed twice ends up where it started.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stringset::set::StringSet;
    ///
    /// let mut set = StringSet::new(["a", "b"]);
    /// set.invert(["b", "c"]);
    /// assert_eq!(set.elements(), vec!["a", "c"]);
    ///
    /// set.invert(["x", "x"]);
    /// assert_eq!(set.elements(), vec!["a", "c"]);
    /// ```
    pub fn invert<I>(&mut self, elements: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut inserted = 0_usize;
        let mut removed = 0_usize;
        for element in elements {
            let element: String = element.into();
            if self.inner.remove(&element).is_some() {
                removed += 1;
            } else {
                self.inner.insert(element, ());
                inserted += 1;
            }
        }
        trace!(inserted, removed, size = self.size(), "inverted elements");
        self
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Returns the number of elements.
    #[inline]
    #[must_use]
    pub fn size(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if the set holds no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns all elements in ascending order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stringset::set::StringSet;
    ///
    /// let set = StringSet::new(["pear", "apple", "fig"]);
    /// assert_eq!(set.elements(), vec!["apple", "fig", "pear"]);
    /// ```
    #[must_use]
    pub fn elements(&self) -> Vec<&str> {
        let mut elements: Vec<&str> = self.inner.keys().map(String::as_str).collect();
        elements.sort_unstable();
        elements
    }

    /// Alias of [`StringSet::elements`].
    #[inline]
    #[must_use]
    pub fn members(&self) -> Vec<&str> {
        self.elements()
    }

    /// Returns `true` if every given element is a member.
    ///
    /// An empty argument list is vacuously contained in any set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stringset::set::StringSet;
    ///
    /// let set = StringSet::new(["a", "b"]);
    /// assert!(set.contains(["a", "b"]));
    /// assert!(!set.contains(["a", "z"]));
    /// assert!(StringSet::empty().contains(std::iter::empty::<&str>()));
    /// ```
    #[must_use]
    pub fn contains<I>(&self, elements: I) -> bool
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        elements
            .into_iter()
            .all(|element| self.inner.contains_key(element.as_ref()))
    }

    /// Alias of [`StringSet::contains`].
    #[inline]
    #[must_use]
    pub fn has<I>(&self, elements: I) -> bool
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.contains(elements)
    }

    /// Returns the canonical textual form `(e1, e2, ..., en)`.
    ///
    /// Elements are sorted ascending and separated by `", "`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stringset::set::StringSet;
    ///
    /// assert_eq!(StringSet::new(["c", "a", "b"]).as_string(), "(a, b, c)");
    /// assert_eq!(StringSet::empty().as_string(), "()");
    /// ```
    #[must_use]
    pub fn as_string(&self) -> String {
        self.to_string()
    }

    /// Returns an iterator over the elements in ascending order.
    #[must_use]
    pub fn iter(&self) -> StringSetIterator<'_> {
        StringSetIterator {
            inner: self.elements().into_iter(),
        }
    }

    // =========================================================================
    // Binary Relations
    // =========================================================================

    /// Returns `true` if every element of `self` is in `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stringset::set::StringSet;
    ///
    /// let small = StringSet::new(["a"]);
    /// let large = StringSet::new(["a", "b"]);
    /// assert!(small.is_subset(&large));
    /// assert!(!large.is_subset(&small));
    /// ```
    #[must_use]
    pub fn is_subset(&self, other: &Self) -> bool {
        if self.size() > other.size() {
            return false;
        }
        self.inner.keys().all(|element| other.inner.contains_key(element))
    }

    /// Returns `true` if `self` is a subset of `other` and strictly smaller.
    #[must_use]
    pub fn is_proper_subset(&self, other: &Self) -> bool {
        self.size() < other.size() && self.is_subset(other)
    }

    /// Returns `true` if every element of `other` is in `self`.
    #[inline]
    #[must_use]
    pub fn is_superset(&self, other: &Self) -> bool {
        other.is_subset(self)
    }

    /// Returns `true` if `other` is a subset of `self` and strictly smaller.
    #[must_use]
    pub fn is_proper_superset(&self, other: &Self) -> bool {
        self.size() > other.size() && other.is_subset(self)
    }

    /// Returns `true` if both sets hold the same elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stringset::set::StringSet;
    ///
    /// let first = StringSet::new(["x", "y"]);
    /// let second = StringSet::new(["y", "x"]);
    /// assert!(first.is_equal(&second));
    /// ```
    #[must_use]
    pub fn is_equal(&self, other: &Self) -> bool {
        self.is_subset(other) && other.is_subset(self)
    }

    /// Returns `true` if the sets share no element.
    ///
    /// The empty set is disjoint with every set, itself included.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stringset::set::StringSet;
    ///
    /// let first = StringSet::new(["a", "b"]);
    /// assert!(first.is_disjoint(&StringSet::new(["c"])));
    /// assert!(!first.is_disjoint(&StringSet::new(["b", "c"])));
    /// assert!(StringSet::empty().is_disjoint(&StringSet::empty()));
    /// ```
    #[must_use]
    pub fn is_disjoint(&self, other: &Self) -> bool {
        let (smaller, larger) = if self.size() <= other.size() {
            (self, other)
        } else {
            (other, self)
        };
        !smaller
            .inner
            .keys()
            .any(|element| larger.inner.contains_key(element))
    }

    // =========================================================================
    // Set Algebra
    // =========================================================================

    /// Returns the elements of `self` that are not in `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stringset::set::StringSet;
    ///
    /// let first = StringSet::new(["a", "b", "c"]);
    /// let second = StringSet::new(["b", "c", "d"]);
    /// assert_eq!(first.difference(&second).as_string(), "(a)");
    /// ```
    #[must_use]
    pub fn difference(&self, other: &Self) -> Self {
        let mut result = self.clone();
        result.remove(other.inner.keys());
        result
    }

    /// Returns the elements in either set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stringset::set::StringSet;
    ///
    /// let first = StringSet::new(["a", "b", "c"]);
    /// let second = StringSet::new(["b", "c", "d"]);
    /// assert_eq!(first.union(&second).as_string(), "(a, b, c, d)");
    /// ```
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let mut result = self.clone();
        result.insert(other.inner.keys().cloned());
        result
    }

    /// Returns the elements present in both sets.
    ///
    /// Computed as `self - (self - other)`: everything `self` does not share
    /// with `other` is removed from `self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stringset::set::StringSet;
    ///
    /// let first = StringSet::new(["a", "b", "c"]);
    /// let second = StringSet::new(["b", "c", "d"]);
    /// assert_eq!(first.intersection(&second).as_string(), "(b, c)");
    /// ```
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        self.difference(&self.difference(other))
    }

    /// Returns the elements present in exactly one of the sets.
    ///
    /// Computed by inverting a copy of `self` with every element of `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stringset::set::StringSet;
    ///
    /// let first = StringSet::new(["a", "b", "c"]);
    /// let second = StringSet::new(["b", "c", "d"]);
    /// assert_eq!(first.symmetric_difference(&second).as_string(), "(a, d)");
    /// ```
    #[must_use]
    pub fn symmetric_difference(&self, other: &Self) -> Self {
        let mut result = self.clone();
        result.invert(other.inner.keys().map(String::as_str));
        result
    }

    /// Alias of [`StringSet::symmetric_difference`].
    #[inline]
    #[must_use]
    pub fn unique(&self, other: &Self) -> Self {
        self.symmetric_difference(other)
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// A sorted iterator over the elements of a [`StringSet`].
#[derive(Debug)]
pub struct StringSetIterator<'a> {
    inner: std::vec::IntoIter<&'a str>,
}

impl<'a> Iterator for StringSetIterator<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for StringSetIterator<'_> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl FusedIterator for StringSetIterator<'_> {}

/// A sorted, owning iterator over the elements of a [`StringSet`].
#[derive(Debug)]
pub struct StringSetIntoIterator {
    inner: std::vec::IntoIter<String>,
}

impl Iterator for StringSetIntoIterator {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for StringSetIntoIterator {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl FusedIterator for StringSetIntoIterator {}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<S: Into<String>> FromIterator<S> for StringSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<S: Into<String>> Extend<S> for StringSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.insert(iter);
    }
}

impl<S: Into<String>, const N: usize> From<[S; N]> for StringSet {
    fn from(elements: [S; N]) -> Self {
        Self::new(elements)
    }
}

impl<S: Into<String>> From<Vec<S>> for StringSet {
    fn from(elements: Vec<S>) -> Self {
        Self::new(elements)
    }
}

impl IntoIterator for StringSet {
    type Item = String;
    type IntoIter = StringSetIntoIterator;

    fn into_iter(self) -> Self::IntoIter {
        let mut elements: Vec<String> = self.inner.into_keys().collect();
        elements.sort_unstable();
        StringSetIntoIterator {
            inner: elements.into_iter(),
        }
    }
}

impl<'a> IntoIterator for &'a StringSet {
    type Item = &'a str;
    type IntoIter = StringSetIterator<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl PartialEq for StringSet {
    fn eq(&self, other: &Self) -> bool {
        self.is_equal(other)
    }
}

impl Eq for StringSet {}

impl fmt::Debug for StringSet {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

impl fmt::Display for StringSet {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = format!("({})", self.elements().join(", "));
        formatter.pad(&text)
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for StringSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.size()))?;
        for element in self {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct StringSetVisitor;

#[cfg(feature = "serde")]
impl<'de> serde::de::Visitor<'de> for StringSetVisitor {
    type Value = StringSet;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence of strings")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        let mut set = StringSet::empty();
        while let Some(element) = seq.next_element::<String>()? {
            set.insert([element]);
        }
        Ok(set)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for StringSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(StringSetVisitor)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn no_elements() -> std::iter::Empty<&'static str> {
        std::iter::empty()
    }

    // =========================================================================
    // Display Tests
    // =========================================================================

    #[rstest]
    #[case(&[], "()")]
    #[case(&["a"], "(a)")]
    #[case(&["c", "a", "b"], "(a, b, c)")]
    #[case(&["b", "b", "a"], "(a, b)")]
    fn test_display(#[case] elements: &[&str], #[case] expected: &str) {
        let set = StringSet::new(elements.iter().copied());
        assert_eq!(format!("{set}"), expected);
        assert_eq!(set.as_string(), expected);
    }

    #[rstest]
    fn test_display_honors_width_and_fill() {
        let set = StringSet::new(["a"]);
        assert_eq!(format!("{set:>8}"), "     (a)");
        assert_eq!(format!("{set:<6}|"), "(a)   |");
        assert_eq!(format!("{set:*^7}"), "**(a)**");
        assert_eq!(format!("{set:2}"), "(a)");
        assert_eq!(format!("{:>4}", StringSet::empty()), "  ()");
    }

    #[rstest]
    fn test_iterators_are_debug_and_fused() {
        fn assert_fused<I: FusedIterator + fmt::Debug>(mut iterator: I) {
            while iterator.next().is_some() {}
            assert!(iterator.next().is_none());
            assert!(!format!("{iterator:?}").is_empty());
        }

        let set = StringSet::new(["b", "a"]);
        assert_fused(set.iter());
        assert_fused(set.into_iter());
    }

    #[rstest]
    fn test_debug_is_sorted() {
        let set = StringSet::new(["b", "a"]);
        assert_eq!(format!("{set:?}"), r#"{"a", "b"}"#);
    }

    // =========================================================================
    // Construction Tests
    // =========================================================================

    #[rstest]
    fn test_new_collapses_duplicates() {
        let set = StringSet::new(["a", "b", "a", "a"]);
        assert_eq!(set.size(), 2);
        assert_eq!(set.elements(), vec!["a", "b"]);
    }

    #[rstest]
    fn test_new_accepts_owned_strings() {
        let set = StringSet::new(vec!["x".to_string(), "y".to_string()]);
        assert!(set.contains(["x", "y"]));
    }

    #[rstest]
    fn test_new_from_empty_input() {
        let set = StringSet::new(no_elements());
        assert!(set.is_empty());
        assert_eq!(set.as_string(), "()");
    }

    #[rstest]
    fn test_default_is_empty() {
        assert!(StringSet::default().is_empty());
    }

    // =========================================================================
    // Mutation Tests
    // =========================================================================

    #[rstest]
    fn test_insert_is_idempotent() {
        let mut once = StringSet::empty();
        once.insert(["a", "b"]);
        let mut twice = StringSet::empty();
        twice.insert(["a", "b"]).insert(["a", "b"]);
        assert_eq!(once, twice);
    }

    #[rstest]
    fn test_remove_ignores_absent() {
        let mut set = StringSet::new(["a"]);
        set.remove(["b", "c"]);
        assert_eq!(set.elements(), vec!["a"]);
    }

    #[rstest]
    fn test_delete_matches_remove() {
        let mut removed = StringSet::new(["a", "b", "c"]);
        removed.remove(["b"]);
        let mut deleted = StringSet::new(["a", "b", "c"]);
        deleted.delete(["b"]);
        assert_eq!(removed, deleted);
    }

    #[rstest]
    fn test_clear_then_chain() {
        let mut set = StringSet::new(["a", "b"]);
        set.clear().insert(["z"]);
        assert_eq!(set.elements(), vec!["z"]);
    }

    #[rstest]
    fn test_invert_toggles_each_element() {
        let mut set = StringSet::new(["a", "b"]);
        set.invert(["b", "c"]);
        assert_eq!(set.elements(), vec!["a", "c"]);
    }

    #[rstest]
    fn test_invert_repeated_element_toggles_back() {
        let mut set = StringSet::new(["a"]);
        set.invert(["q", "q", "a", "a", "a"]);
        assert_eq!(set.elements(), Vec::<&str>::new());
    }

    #[rstest]
    fn test_invert_twice_restores() {
        let original = StringSet::new(["a", "b", "c"]);
        let mut set = original.clone();
        set.invert(["b", "x"]).invert(["b", "x"]);
        assert_eq!(set, original);
    }

    #[rstest]
    fn test_extend_inserts() {
        let mut set = StringSet::new(["a"]);
        set.extend(["b", "a"]);
        assert_eq!(set.elements(), vec!["a", "b"]);
    }

    // =========================================================================
    // Query Tests
    // =========================================================================

    #[rstest]
    fn test_contains_empty_arguments_is_true() {
        assert!(StringSet::empty().contains(no_elements()));
        assert!(StringSet::new(["a"]).has(no_elements()));
    }

    #[rstest]
    fn test_contains_requires_all() {
        let set = StringSet::new(["a", "b"]);
        assert!(set.contains(["a"]));
        assert!(!set.contains(["a", "c"]));
    }

    #[rstest]
    fn test_members_matches_elements() {
        let set = StringSet::new(["b", "a"]);
        assert_eq!(set.members(), set.elements());
    }

    #[rstest]
    fn test_clone_is_independent() {
        let original = StringSet::new(["a"]);
        let mut copy = original.clone();
        copy.insert(["b"]);
        assert_eq!(original.elements(), vec!["a"]);
        assert_eq!(copy.elements(), vec!["a", "b"]);
    }

    #[rstest]
    fn test_iter_is_sorted_and_exact() {
        let set = StringSet::new(["b", "c", "a"]);
        let iterator = set.iter();
        assert_eq!(iterator.len(), 3);
        assert_eq!(iterator.collect::<Vec<_>>(), vec!["a", "b", "c"]);
    }

    #[rstest]
    fn test_into_iter_is_sorted() {
        let set = StringSet::new(["b", "a"]);
        let owned: Vec<String> = set.into_iter().collect();
        assert_eq!(owned, vec!["a".to_string(), "b".to_string()]);
    }

    // =========================================================================
    // Relation Tests
    // =========================================================================

    #[rstest]
    #[case(&["a"], &["a", "b"], true, true)]
    #[case(&["a", "b"], &["a", "b"], true, false)]
    #[case(&["a", "c"], &["a", "b"], false, false)]
    #[case(&[], &[], true, false)]
    fn test_subset_relations(
        #[case] left: &[&str],
        #[case] right: &[&str],
        #[case] subset: bool,
        #[case] proper: bool,
    ) {
        let left = StringSet::new(left.iter().copied());
        let right = StringSet::new(right.iter().copied());
        assert_eq!(left.is_subset(&right), subset);
        assert_eq!(left.is_proper_subset(&right), proper);
        assert_eq!(right.is_superset(&left), subset);
        assert_eq!(right.is_proper_superset(&left), proper);
    }

    #[rstest]
    fn test_is_equal_ignores_insertion_order() {
        let mut first = StringSet::empty();
        first.insert(["a"]).insert(["b"]);
        let mut second = StringSet::empty();
        second.insert(["b"]).insert(["a"]);
        assert!(first.is_equal(&second));
    }

    #[rstest]
    fn test_is_disjoint() {
        let set = StringSet::new(["a", "b"]);
        assert!(set.is_disjoint(&StringSet::new(["c"])));
        assert!(!set.is_disjoint(&StringSet::new(["b"])));
        assert!(set.is_disjoint(&StringSet::empty()));
        assert!(StringSet::empty().is_disjoint(&StringSet::empty()));
    }

    // =========================================================================
    // Algebra Tests
    // =========================================================================

    #[rstest]
    fn test_algebra_scenario() {
        let first = StringSet::new(["a", "b", "c"]);
        let second = StringSet::new(["b", "c", "d"]);

        assert_eq!(first.union(&second).as_string(), "(a, b, c, d)");
        assert_eq!(first.intersection(&second).as_string(), "(b, c)");
        assert_eq!(first.difference(&second).as_string(), "(a)");
        assert_eq!(first.symmetric_difference(&second).as_string(), "(a, d)");
        assert!(first.intersection(&second).is_subset(&first));
        assert!(first.union(&second).is_superset(&first));
    }

    #[rstest]
    fn test_algebra_leaves_operands_unchanged() {
        let first = StringSet::new(["a", "b"]);
        let second = StringSet::new(["b", "c"]);

        let _ = first.union(&second);
        let _ = first.intersection(&second);
        let _ = first.difference(&second);
        let _ = first.symmetric_difference(&second);

        assert_eq!(first.as_string(), "(a, b)");
        assert_eq!(second.as_string(), "(b, c)");
    }

    #[rstest]
    fn test_unique_matches_symmetric_difference() {
        let first = StringSet::new(["a", "b"]);
        let second = StringSet::new(["b", "c"]);
        assert_eq!(first.unique(&second), first.symmetric_difference(&second));
    }
}
