//! Letter-set bitmask
//!
//! Each distinct letter of a word maps to one bit of a `u64`. Lowercase `a-z`
//! occupy bits 0-25 and uppercase `A-Z` bits 26-51, so overlap and
//! disjointness checks are a single AND plus a popcount.

use std::fmt;

/// Number of letters in the (case-folded) alphabet
pub const ALPHABET_SIZE: usize = 26;

const UPPER_OFFSET: u32 = 26;

/// The set of distinct letters in a word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LetterSet(u64);

impl LetterSet {
    /// The empty set
    pub const EMPTY: Self = Self(0);

    /// Build a letter set from text
    ///
    /// Returns `None` if the text contains anything other than ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use word_cliques::core::LetterSet;
    ///
    /// let fjord = LetterSet::from_text("fjord").unwrap();
    /// let waltz = LetterSet::from_text("waltz").unwrap();
    /// assert!(fjord.is_disjoint(waltz));
    /// assert!(LetterSet::from_text("it's").is_none());
    /// ```
    #[must_use]
    pub fn from_text(text: &str) -> Option<Self> {
        text.chars()
            .try_fold(0u64, |mask, ch| bit_of(ch).map(|bit| mask | bit))
            .map(Self)
    }

    /// Raw bitmask
    #[inline]
    #[must_use]
    pub const fn bits(self) -> u64 {
        self.0
    }

    /// Number of distinct letters
    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Number of letters shared with `other`
    #[inline]
    #[must_use]
    pub const fn overlap(self, other: Self) -> u32 {
        (self.0 & other.0).count_ones()
    }

    /// True when no letter is shared with `other`
    #[inline]
    #[must_use]
    pub const fn is_disjoint(self, other: Self) -> bool {
        self.0 & other.0 == 0
    }

    /// Letters present in both sets
    #[inline]
    #[must_use]
    pub const fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Check membership of a single letter
    #[inline]
    #[must_use]
    pub fn contains(self, letter: char) -> bool {
        bit_of(letter).is_some_and(|bit| self.0 & bit != 0)
    }

    /// Iterate the letters in alphabet order (lowercase before uppercase)
    pub fn letters(self) -> impl Iterator<Item = char> {
        (0..64u32)
            .filter(move |&i| self.0 & (1u64 << i) != 0)
            .filter_map(letter_of)
    }
}

fn bit_of(ch: char) -> Option<u64> {
    match ch {
        'a'..='z' => Some(1u64 << (ch as u32 - 'a' as u32)),
        'A'..='Z' => Some(1u64 << (ch as u32 - 'A' as u32 + UPPER_OFFSET)),
        _ => None,
    }
}

fn letter_of(bit: u32) -> Option<char> {
    match bit {
        0..26 => char::from_u32('a' as u32 + bit),
        26..52 => char::from_u32('A' as u32 + bit - UPPER_OFFSET),
        _ => None,
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.letters() {
            write!(f, "{letter}")?;
        }
        Ok(())
    }
}
