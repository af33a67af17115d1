#![deny(missing_docs)]
//! An `Option`-flavoured wrapper around borrowed strings that treats blank
//! input as no input at all.
//!
//! A [`Presence`] is built once from a possibly missing string and classifies
//! it on the spot: anything that is `None`, empty, or whitespace from start
//! to finish is *absent*, everything else is *present*. The rest of the API
//! reads that classification without ever recomputing it.
//!
//! ```
//! use presence::Presence;
//!
//! assert!(Presence::of(None).is_empty());
//! assert!(Presence::of("").is_empty());
//! assert!(Presence::of("   ").is_empty());
//! assert!(Presence::of("content").is_present());
//!
//! let name = Presence::of(" Jane ");
//! assert_eq!(name.unwrap_or("anonymous"), " Jane ");
//! assert_eq!(name.map(|n| n.trim().to_uppercase()), Some("JANE".to_string()));
//! ```
//!
//! The wrapped text is never trimmed or otherwise altered; classification
//! only decides which branch of the API runs.
use std::fmt;

mod blank;
mod sealed;
#[cfg(feature = "serde")]
mod serde;

pub use blank::Blank;

// -----------------------------------------------------------------------------
//     - Presence -
// -----------------------------------------------------------------------------
/// A borrowed string paired with a whitespace-aware presence flag.
///
/// The flag is computed at construction and never changes; copies are free
/// and instances can be shared across threads without coordination.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Presence<'a> {
    value: Option<&'a str>,
    present: bool,
}

impl<'a> Presence<'a> {
    /// A guaranteed absent [`Presence`].
    pub const EMPTY: Self = Self { value: None, present: false };

    /// Wrap a possibly missing string and classify it.
    ///
    /// Accepts both a plain `&str` and an `Option<&str>`:
    ///
    /// ```
    /// use presence::Presence;
    ///
    /// assert!(Presence::of("x").is_present());
    /// assert!(Presence::of(None).is_empty());
    /// ```
    pub fn of(input: impl Into<Option<&'a str>>) -> Self {
        let value = input.into();
        Self { value, present: !value.is_blank() }
    }

    /// Wrap the value inside an [`Option`], reusing the canonical
    /// [`Presence::EMPTY`] for `None`.
    pub fn of_option(input: Option<&'a str>) -> Self {
        match input {
            Some(value) => Self::of(value),
            None => Self::EMPTY,
        }
    }

    /// Was the wrapped string classified as present?
    #[must_use]
    pub fn is_present(&self) -> bool {
        self.present
    }

    /// The negation of [`Presence::is_present`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.present
    }

    /// The wrapped string exactly as it was handed in, regardless of
    /// classification.
    ///
    /// This is the unchecked escape hatch: a blank (but not missing) input
    /// is still returned verbatim even though the value is absent.
    ///
    /// ```
    /// use presence::Presence;
    ///
    /// assert_eq!(Presence::of("  ").get(), Some("  "));
    /// assert_eq!(Presence::of("  ").as_option(), None);
    /// ```
    #[must_use]
    pub fn get(&self) -> Option<&'a str> {
        self.value
    }

    /// The wrapped string if present, otherwise `default`.
    ///
    /// The fallback is taken as-is; it may well be blank itself.
    pub fn unwrap_or(&self, default: &'a str) -> &'a str {
        self.as_option().unwrap_or(default)
    }

    /// The wrapped string if present, otherwise the result of calling `f`.
    ///
    /// `f` runs only in the absent case.
    pub fn unwrap_or_else(&self, f: impl FnOnce() -> &'a str) -> &'a str {
        self.as_option().unwrap_or_else(f)
    }

    /// The wrapped string if present, otherwise an error produced by `err`.
    ///
    /// The error value is exactly what the closure returns, ready for `?`
    /// propagation. `err` runs only in the absent case.
    pub fn ok_or_else<E>(&self, err: impl FnOnce() -> E) -> Result<&'a str, E> {
        self.as_option().ok_or_else(err)
    }

    /// Run `action` with the wrapped string, but only if it is present.
    pub fn if_present(&self, action: impl FnOnce(&'a str)) {
        if let Some(value) = self.as_option() {
            action(value);
        }
    }

    /// Run `action` with the wrapped string if present, otherwise run
    /// `empty_action`. Exactly one of the two runs.
    pub fn if_present_or_else(&self, action: impl FnOnce(&'a str), empty_action: impl FnOnce()) {
        match self.as_option() {
            Some(value) => action(value),
            None => empty_action(),
        }
    }

    /// Transform the wrapped string if present.
    ///
    /// The untrimmed original is passed to `f` and the result is always
    /// wrapped in `Some`; there is no null to smuggle through here, so a
    /// mapping that can come up empty returns an `Option` or `Result` of
    /// its own for the caller to flatten:
    ///
    /// ```
    /// use presence::Presence;
    ///
    /// assert_eq!(Presence::of("4").map(|s| s.parse::<u32>()), Some(Ok(4)));
    /// assert_eq!(Presence::of("  ").map(|s| s.len()), None);
    /// ```
    pub fn map<T>(&self, f: impl FnOnce(&'a str) -> T) -> Option<T> {
        self.as_option().map(f)
    }

    /// The wrapped string as a native [`Option`]: `Some` only when present.
    #[must_use]
    pub fn as_option(&self) -> Option<&'a str> {
        match self.present {
            true => self.value,
            false => None,
        }
    }

    /// An iterator yielding the wrapped string once when present, and
    /// nothing at all when absent.
    #[must_use]
    pub fn iter(&self) -> Iter<'a> {
        Iter { value: self.as_option() }
    }
}

// -----------------------------------------------------------------------------
//     - Conversions -
// -----------------------------------------------------------------------------
impl<'a> From<&'a str> for Presence<'a> {
    fn from(value: &'a str) -> Self {
        Self::of(value)
    }
}

impl<'a> From<Option<&'a str>> for Presence<'a> {
    fn from(value: Option<&'a str>) -> Self {
        Self::of_option(value)
    }
}

impl<'a> From<Presence<'a>> for Option<&'a str> {
    fn from(presence: Presence<'a>) -> Self {
        presence.as_option()
    }
}

// -----------------------------------------------------------------------------
//     - Display -
// -----------------------------------------------------------------------------
impl<'a> fmt::Display for Presence<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_option() {
            Some(value) => write!(f, "{value}"),
            None => Ok(()),
        }
    }
}

// -----------------------------------------------------------------------------
//     - Iter -
// -----------------------------------------------------------------------------
/// An iterator over the present value of a [`Presence`].
///
/// Yields at most one item and stays exhausted afterwards.
pub struct Iter<'a> {
    value: Option<&'a str>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.value.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.value.is_some() as usize;
        (len, Some(len))
    }
}

impl<'a> ExactSizeIterator for Iter<'a> {}

impl<'a> IntoIterator for Presence<'a> {
    type IntoIter = Iter<'a>;
    type Item = &'a str;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

impl<'a> IntoIterator for &Presence<'a> {
    type IntoIter = Iter<'a>;
    type Item = &'a str;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}
