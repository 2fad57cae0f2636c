//! Compact k-ary digit encoding of a coloring of `{0, .., digit_count - 1}`.
//!
//! A coloring assigns one of `color_count` colors to each position. Encoding
//! the assignment as a variable-length k-ary integer gives two things for
//! free: a total ordering over colorings, and exhaustive enumeration by
//! odometer-style increment. Digits double as colors throughout; index 0 is
//! the most significant (leftmost) digit and index `digit_count - 1` is the
//! least significant one, the "frontier" digit extended during search.

use std::fmt::{self, Write};
use thiserror::Error;

/// Backing storage is grown in whole blocks of this many digits so that
/// repeated grow/shrink cycles during backtracking never reallocate.
pub const BLOCK_SIZE: usize = 1000;

/// Largest color alphabet renderable with the digit charset `0-9` / `A-Z`.
pub const MAX_COLOR_COUNT: usize = 36;

/// A digit string that does not encode a valid coloring.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ParseColoringError {
    /// A character outside the `0-9` / `A-Z` digit charset.
    #[error("invalid digit character {0:?}")]
    InvalidDigit(char),
    /// A digit naming a color outside `[0, color_count)`.
    #[error("digit {digit:?} is out of range for {color_count} colors")]
    OutOfRange {
        /// The offending character.
        digit: char,
        /// The alphabet the coloring was parsed against.
        color_count: u8,
    },
}

// ============================================================================
// Coloring
// ============================================================================

/// A mutable k-ary digit sequence.
///
/// Invariants:
/// - every active digit (indices `0..digit_count`) lies in `[0, color_count)`;
/// - digits past `digit_count` in the backing store are stale and never read;
/// - growing the active length zero-fills the newly exposed digits;
/// - the backing store only ever grows (in `BLOCK_SIZE` multiples).
///
/// Accessors perform no bounds checking beyond the slice index itself: this
/// type sits in the innermost loop of the search, executed potentially
/// billions of times, and callers guarantee position validity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Coloring {
    color_count: u8,
    digit_count: usize,
    digits: Vec<u8>,
}

impl Coloring {
    /// Creates an all-zero coloring of the given active length.
    pub fn new(color_count: u8, digit_count: usize) -> Self {
        debug_assert!(color_count >= 2, "need at least two colors");
        let mut coloring = Self {
            color_count,
            digit_count: 0,
            digits: Vec::new(),
        };
        coloring.resize(digit_count);
        coloring
    }

    /// Parses a coloring from its digit-string rendering (`0-9`, then `A-Z`).
    ///
    /// # Errors
    /// Returns a [`ParseColoringError`] if a character is not a digit or
    /// names a color outside `[0, color_count)`.
    pub fn parse(color_count: u8, text: &str) -> Result<Self, ParseColoringError> {
        let mut coloring = Self::new(color_count, text.chars().count());
        for (position, ch) in text.chars().enumerate() {
            let value = match ch {
                '0'..='9' => ch as u8 - b'0',
                'A'..='Z' => ch as u8 - b'A' + 10,
                _ => return Err(ParseColoringError::InvalidDigit(ch)),
            };
            if value >= color_count {
                return Err(ParseColoringError::OutOfRange {
                    digit: ch,
                    color_count,
                });
            }
            coloring.set(position, value);
        }
        Ok(coloring)
    }

    /// The number of colors, fixed at construction.
    #[inline]
    pub fn color_count(&self) -> u8 {
        self.color_count
    }

    /// The current active length.
    #[inline]
    pub fn digit_count(&self) -> usize {
        self.digit_count
    }

    /// The active digits as a slice, most significant first.
    #[inline]
    pub fn digits(&self) -> &[u8] {
        &self.digits[..self.digit_count]
    }

    /// Returns the digit at `position` (0 = most significant).
    #[inline]
    pub fn get(&self, position: usize) -> u8 {
        self.digits[position]
    }

    /// Sets the digit at `position` (0 = most significant).
    #[inline]
    pub fn set(&mut self, position: usize, value: u8) {
        self.digits[position] = value;
    }

    /// Returns the least significant (frontier) digit.
    #[inline]
    pub fn last(&self) -> u8 {
        self.digits[self.digit_count - 1]
    }

    /// Sets the least significant (frontier) digit.
    #[inline]
    pub fn set_last(&mut self, value: u8) {
        self.digits[self.digit_count - 1] = value;
    }

    /// Sets the active length, zero-filling any newly exposed digits.
    ///
    /// Shrinking never releases storage; digits past the new length become
    /// stale until a later grow re-exposes (and zeroes) them.
    pub fn resize(&mut self, new_digit_count: usize) {
        self.ensure_capacity(new_digit_count);
        for digit in &mut self.digits[self.digit_count..new_digit_count.max(self.digit_count)] {
            *digit = 0;
        }
        self.digit_count = new_digit_count;
    }

    /// Adds 1 to the encoded k-ary value, carrying from the least significant
    /// digit upward.
    ///
    /// Returns `false` exactly when the value wraps past all-`color_count - 1`
    /// back to all-zero, i.e. the digit space is exhausted.
    #[inline]
    pub fn increment(&mut self) -> bool {
        for d in (0..self.digit_count).rev() {
            let new_digit = self.digits[d] + 1;
            if new_digit == self.color_count {
                self.digits[d] = 0;
            } else {
                self.digits[d] = new_digit;
                return true;
            }
        }
        false
    }

    /// Overwrites every digit after `position` with the maximum color.
    ///
    /// Combined with [`increment`](Self::increment) this jumps an enumeration
    /// past every coloring sharing the prefix `0..=position` in one step.
    #[inline]
    pub fn mask_tail(&mut self, position: usize) {
        let last_color = self.color_count - 1;
        for digit in &mut self.digits[position + 1..self.digit_count] {
            *digit = last_color;
        }
    }

    /// Grows the backing store to a whole number of blocks covering
    /// `digit_count`. Existing digits are preserved.
    fn ensure_capacity(&mut self, digit_count: usize) {
        if digit_count == 0 {
            return;
        }
        let blocks = (digit_count - 1) / BLOCK_SIZE + 1;
        let wanted = blocks * BLOCK_SIZE;
        if wanted > self.digits.len() {
            self.digits.resize(wanted, 0);
        }
    }
}

/// Maps a digit value to its rendering character (`0-9`, then `A-Z`).
#[inline]
fn digit_char(value: u8) -> char {
    if value < 10 {
        (b'0' + value) as char
    } else {
        (b'A' + value - 10) as char
    }
}

impl fmt::Display for Coloring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &digit in self.digits() {
            f.write_char(digit_char(digit))?;
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
