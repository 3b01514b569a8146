use std::{
    cmp::Ordering,
    fmt::{self, Debug, Display},
    ops::Deref,
};

use crate::numeric_cmp::numeric_cmp;

/// Borrowed text ordered by [`numeric_cmp`].
///
/// Only identical strings compare equal under that order, so `Eq` and `Ord`
/// agree with each other and with `str` equality.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct NumericStr<'a> {
    inner: &'a str,
}

impl<'a> NumericStr<'a> {
    pub fn new(inner: &'a str) -> Self {
        Self { inner }
    }

    pub fn as_str(&self) -> &'a str {
        self.inner
    }
}

impl Ord for NumericStr<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        numeric_cmp(self.inner, other.inner)
    }
}

impl PartialOrd for NumericStr<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<'a> From<&'a str> for NumericStr<'a> {
    fn from(inner: &'a str) -> Self {
        Self::new(inner)
    }
}

impl<'a> From<&'a String> for NumericStr<'a> {
    fn from(inner: &'a String) -> Self {
        Self::new(inner)
    }
}

impl Deref for NumericStr<'_> {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.inner
    }
}

impl AsRef<str> for NumericStr<'_> {
    fn as_ref(&self) -> &str {
        self.inner
    }
}

impl Debug for NumericStr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Debug::fmt(self.inner, f)
    }
}

impl Display for NumericStr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(self.inner, f)
    }
}
