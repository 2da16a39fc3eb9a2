use core::fmt;

use thiserror::Error;

/// A byte which isn't an item type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid character '{}'", .0.escape_ascii())]
pub struct InvalidCharacter(pub u8);

/// The priority of an item type, in `1..=52`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Priority(u8);

impl Priority {
    /// Lowest possible priority.
    pub const MIN: Self = Self(1);
    /// Highest possible priority.
    pub const MAX: Self = Self(52);

    /// Construct a priority from a bit position in a [Mask].
    ///
    /// [Mask]: crate::Mask
    #[inline]
    pub(crate) fn from_bit(bit: u32) -> Option<Self> {
        match bit {
            1..=52 => Some(Self(bit as u8)),
            _ => None,
        }
    }

    /// The bit position this priority occupies.
    #[inline]
    pub(crate) fn bit(self) -> u32 {
        self.0 as u32
    }

    /// Get the priority as a number.
    #[inline]
    pub fn get(self) -> u32 {
        self.0 as u32
    }
}

impl fmt::Display for Priority {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Compute the priority of a single item.
///
/// # Examples
///
/// ```
/// use rucksack::{compute_priority, InvalidCharacter};
///
/// assert_eq!(compute_priority(b'a').map(|p| p.get()), Ok(1));
/// assert_eq!(compute_priority(b'Z').map(|p| p.get()), Ok(52));
/// assert_eq!(compute_priority(b'1'), Err(InvalidCharacter(b'1')));
/// ```
#[inline]
pub fn compute_priority(c: u8) -> Result<Priority, InvalidCharacter> {
    match c {
        b'a'..=b'z' => Ok(Priority(c - b'a' + 1)),
        b'A'..=b'Z' => Ok(Priority(c - b'A' + 27)),
        c => Err(InvalidCharacter(c)),
    }
}

/// Iterate over the priorities of the given items.
#[inline]
pub(crate) fn priorities(
    items: &[u8],
) -> impl Iterator<Item = Result<Priority, InvalidCharacter>> + '_ {
    items.iter().map(|&c| compute_priority(c))
}
