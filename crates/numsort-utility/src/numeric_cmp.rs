//! Comparison of strings that treats runs of ASCII digits as numbers.
//!
//! `"a9z"` orders before `"a11z"` because 9 < 11. Numbers are never parsed
//! into integers, so digit runs of any length compare correctly: magnitude is
//! decided by the length of the run once leading zeros are stripped, then by
//! the first differing digit. When two numbers have the same value the one
//! written with fewer leading zeros is less, i.e. `12 < 012`. Digits and
//! non-digits compare by codepoint, i.e. `' ' < '5' < 'a'`.

use std::{
    cmp::Ordering,
    ops::ControlFlow::{self, Break, Continue},
    path::Path,
    str::Chars,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Digit,
    Other,
}

#[inline]
pub fn classify(ch: char) -> CharClass {
    if ch.is_ascii_digit() {
        CharClass::Digit
    } else {
        CharClass::Other
    }
}

#[inline]
fn digit(ch: Option<char>) -> Option<char> {
    ch.filter(|&ch| classify(ch) == CharClass::Digit)
}

/// Forward only read position into one side of a comparison.
struct Cursor<'a> {
    chars: Chars<'a>,
}

impl<'a> Cursor<'a> {
    fn new(text: &'a str) -> Self {
        Self { chars: text.chars() }
    }

    #[inline]
    fn next(&mut self) -> Option<char> {
        self.chars.next()
    }

    #[inline]
    fn is_exhausted(&self) -> bool {
        self.chars.as_str().is_empty()
    }

    /// Consumes zeros starting at `first`, returning the first codepoint that
    /// is not a zero together with the number of zeros skipped.
    fn skip_leading_zeros(&mut self, first: char) -> (Option<char>, usize) {
        let mut current = Some(first);
        let mut zeros = 0;
        while current == Some('0') {
            zeros += 1;
            current = self.next();
        }
        (current, zeros)
    }
}

/// Compares two strings, treating every maximal run of ASCII digits as a
/// non-negative integer.
pub fn numeric_cmp(a: &str, b: &str) -> Ordering {
    let mut lhs = Cursor::new(a);
    let mut rhs = Cursor::new(b);

    loop {
        let Some(ch_a) = lhs.next() else {
            return if rhs.is_exhausted() {
                Ordering::Equal
            } else {
                Ordering::Less
            };
        };
        let Some(ch_b) = rhs.next() else {
            return Ordering::Greater;
        };

        match (classify(ch_a), classify(ch_b)) {
            (CharClass::Digit, CharClass::Digit) => {
                if let Break(ordering) = cmp_numeric_group(&mut lhs, &mut rhs, ch_a, ch_b) {
                    return ordering;
                }
            }
            // Mismatched classes always differ, so a plain codepoint compare
            // covers them too.
            _ if ch_a != ch_b => return ch_a.cmp(&ch_b),
            _ => {}
        }
    }
}

/// Shortcut for `numeric_cmp(a, b) == Ordering::Less`.
#[inline]
pub fn numeric_less(a: &str, b: &str) -> bool {
    numeric_cmp(a, b) == Ordering::Less
}

/// Sorts `items` in place with [`numeric_cmp`].
#[profiling::function]
pub fn numeric_sort<S: AsRef<str>>(items: &mut [S]) {
    items.sort_by(|a, b| numeric_cmp(a.as_ref(), b.as_ref()));
}

pub fn numeric_cmp_path(a: &Path, b: &Path) -> Ordering {
    numeric_cmp(&a.to_string_lossy(), &b.to_string_lossy())
}

/// Compares the numeric groups starting at `first_a` and `first_b`.
///
/// `Continue` means the groups and the codepoints directly after them were
/// equal and have been consumed.
fn cmp_numeric_group(
    lhs: &mut Cursor<'_>,
    rhs: &mut Cursor<'_>,
    first_a: char,
    first_b: char,
) -> ControlFlow<Ordering> {
    let (next_a, zeros_a) = lhs.skip_leading_zeros(first_a);
    let (next_b, zeros_b) = rhs.skip_leading_zeros(first_b);
    // More leading zeros sorts greater.
    let zero_balance = zeros_a.cmp(&zeros_b);

    let (ch_a, ch_b) = match (next_a, next_b) {
        (None, None) => return Break(zero_balance),
        (None, Some(_)) => return Break(Ordering::Less),
        (Some(_), None) => return Break(Ordering::Greater),
        (Some(ch_a), Some(ch_b)) => (ch_a, ch_b),
    };

    match (classify(ch_a), classify(ch_b)) {
        // Both groups were nothing but zeros.
        (CharClass::Other, CharClass::Other) => {
            if zero_balance.is_ne() {
                Break(zero_balance)
            } else if ch_a != ch_b {
                Break(ch_a.cmp(&ch_b))
            } else {
                Continue(())
            }
        }
        (CharClass::Digit, CharClass::Other) => Break(Ordering::Greater),
        (CharClass::Other, CharClass::Digit) => Break(Ordering::Less),
        (CharClass::Digit, CharClass::Digit) => cmp_digit_runs(lhs, rhs, ch_a, ch_b, zero_balance),
    }
}

/// Walks two significant digit runs in lock-step. A longer run always wins,
/// runs of equal length are decided by their first differing digit.
fn cmp_digit_runs(
    lhs: &mut Cursor<'_>,
    rhs: &mut Cursor<'_>,
    mut ch_a: char,
    mut ch_b: char,
    zero_balance: Ordering,
) -> ControlFlow<Ordering> {
    let mut digit_cmp = Ordering::Equal;

    loop {
        digit_cmp = digit_cmp.then(ch_a.cmp(&ch_b));

        let next_a = lhs.next();
        let next_b = rhs.next();

        match (digit(next_a), digit(next_b)) {
            (Some(digit_a), Some(digit_b)) => {
                ch_a = digit_a;
                ch_b = digit_b;
            }
            (Some(_), None) => return Break(Ordering::Greater),
            (None, Some(_)) => return Break(Ordering::Less),
            (None, None) => {
                let ordering = digit_cmp.then(zero_balance);
                if ordering.is_ne() {
                    return Break(ordering);
                }
                return cmp_after_group(next_a, next_b);
            }
        }
    }
}

/// Resolves the codepoints that terminated two equal numeric groups.
fn cmp_after_group(next_a: Option<char>, next_b: Option<char>) -> ControlFlow<Ordering> {
    match (next_a, next_b) {
        (None, None) => Break(Ordering::Equal),
        (None, Some(_)) => Break(Ordering::Less),
        (Some(_), None) => Break(Ordering::Greater),
        (Some(ch_a), Some(ch_b)) if ch_a != ch_b => Break(ch_a.cmp(&ch_b)),
        _ => Continue(()),
    }
}
