//! Adapter traits for plugins.
//!
//! Each plugin has to implement one of the traits available in this module.

use std::borrow::Cow;

/// Implement this adapter to escape literal text before it reaches the output.
///
/// The txt2 formatter applies it to text content, heading and list markers,
/// and code block parts; markup the formatter writes itself (emphasis
/// markers, link destinations, raw markup) is never passed through it.
/// Without an adapter, text is written unchanged.
///
/// Any `Fn(&str) -> String` closure is an `EscapeAdapter`:
///
/// ```rust
/// # use txt2::adapters::EscapeAdapter;
/// let upper = |s: &str| s.to_uppercase();
/// assert_eq!(upper.escape("hi"), "HI");
/// ```
pub trait EscapeAdapter {
    /// Escape `text`.  Borrow the input when nothing needs to change.
    fn escape<'t>(&self, text: &'t str) -> Cow<'t, str>;
}

impl<F> EscapeAdapter for F
where
    F: Fn(&str) -> String,
{
    fn escape<'t>(&self, text: &'t str) -> Cow<'t, str> {
        Cow::Owned(self(text))
    }
}
