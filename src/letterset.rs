use crate::Error;
#[cfg(feature = "bitintr")]
use bitintr::Popcnt;
use std::convert::TryFrom;
use std::fmt;
use std::iter::FromIterator;

#[cfg(feature = "bitintr")]
#[inline(always)]
fn count_ones(n: u32) -> u32 {
    n.popcnt()
}

#[cfg(not(feature = "bitintr"))]
#[inline(always)]
fn count_ones(n: u32) -> u32 {
    n.count_ones()
}

/// A bitset of the uppercase letters `A`..`Z`.
///
/// Used to restrict the search to words starting with one of a few letters.
#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub struct LetterSet(u32);

impl LetterSet {
    pub fn new() -> LetterSet {
        LetterSet(0)
    }

    fn bit(letter: u8) -> u32 {
        debug_assert!(letter.is_ascii_uppercase());
        1 << (letter - b'A')
    }

    /// Check if the uppercase `letter` is in the set.
    pub fn contains(&self, letter: u8) -> bool {
        letter.is_ascii_uppercase() && self.0 & LetterSet::bit(letter) != 0
    }

    /// Insert the uppercase `letter`, return true if it was already present.
    pub fn insert(&mut self, letter: u8) -> bool {
        assert!(letter.is_ascii_uppercase());
        let v = LetterSet::bit(letter);
        let r = self.0 & v != 0;
        self.0 |= v;
        r
    }

    pub fn len(&self) -> usize {
        count_ones(self.0) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Iterate over the letters in alphabetical order.
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        (b'A'..=b'Z').filter(move |&letter| self.contains(letter))
    }
}

/// Parse a set of letters, case-folded. Duplicates are ignored.
/// ## Errors
/// If `letters` holds anything but ascii letters.
impl TryFrom<&str> for LetterSet {
    type Error = Error;

    fn try_from(letters: &str) -> Result<Self, Self::Error> {
        let mut set = LetterSet::new();
        for ch in letters.chars() {
            if !ch.is_ascii_alphabetic() {
                return Err(Error::InvalidLetter(ch));
            }
            set.insert(ch.to_ascii_uppercase() as u8);
        }
        Ok(set)
    }
}

/// Letters are case-folded, other bytes are skipped.
impl FromIterator<u8> for LetterSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = LetterSet::new();
        for letter in iter.into_iter().filter(u8::is_ascii_alphabetic) {
            set.insert(letter.to_ascii_uppercase());
        }
        set
    }
}

/// Letters joined by ", ", e.g. `A, E, S`.
impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = self
            .iter()
            .map(|letter| (letter as char).to_string())
            .collect::<Vec<String>>()
            .join(", ");
        write!(f, "{}", s)
    }
}

impl fmt::Debug for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{{{}}}", self)
    }
}
