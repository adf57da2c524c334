//! Literal construction macro for [`StringSet`](super::StringSet).

/// Builds a [`StringSet`](crate::set::StringSet) from a list of string-like
/// expressions.
///
/// Each expression only needs to implement `Into<String>`, so `&str` and
/// `String` values can be mixed.
///
/// # Examples
///
/// ## Empty set
///
/// ```
/// use stringset::string_set;
///
/// let set = string_set![];
/// assert!(set.is_empty());
/// ```
///
/// ## Mixed element types
///
/// ```
/// use stringset::string_set;
///
/// let owned = String::from("b");
/// let set = string_set!["c", owned, "a", "c"];
/// assert_eq!(set.as_string(), "(a, b, c)");
/// ```
#[macro_export]
macro_rules! string_set {
    // No elements: the empty set
    () => {
        $crate::set::StringSet::empty()
    };

    // One or more elements, each inserted on its own
    ($($element:expr),+ $(,)?) => {{
        let mut set = $crate::set::StringSet::empty();
        $(
            set.insert([$element]);
        )+
        set
    }};
}
