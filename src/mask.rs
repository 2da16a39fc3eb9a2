use core::fmt;
use core::ops::{BitAnd, BitAndAssign};

use crate::priority::{priorities, InvalidCharacter, Priority};

/// A set of item priorities, stored as one bit per priority.
///
/// # Examples
///
/// ```
/// use rucksack::Mask;
///
/// let a = Mask::from_items(b"abcX")?;
/// let b = Mask::from_items(b"Xyz")?;
///
/// let both = a & b;
/// assert_eq!(both.len(), 1);
/// assert_eq!(both.lowest().map(|p| p.get()), Some(50));
/// # Ok::<_, rucksack::InvalidCharacter>(())
/// ```
#[derive(Default, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Mask(u64);

impl Mask {
    /// The empty set.
    pub const EMPTY: Self = Self(0);

    /// Every bit a priority could occupy, including the unused zeroth bit.
    pub const FULL: Self = Self((1 << 53) - 1);

    /// Build a mask out of every item in `items`.
    pub fn from_items(items: &[u8]) -> Result<Self, InvalidCharacter> {
        let mut mask = Self::EMPTY;

        for p in priorities(items) {
            mask.insert(p?);
        }

        Ok(mask)
    }

    /// Insert a priority into the set.
    #[inline]
    pub fn insert(&mut self, p: Priority) {
        self.0 |= 1 << p.bit();
    }

    /// Test if the set contains the given priority.
    #[inline]
    pub fn contains(&self, p: Priority) -> bool {
        self.0 & (1 << p.bit()) != 0
    }

    /// The lowest priority in the set.
    #[inline]
    pub fn lowest(&self) -> Option<Priority> {
        Priority::from_bit(self.0.trailing_zeros())
    }

    /// Number of elements in the set.
    #[inline]
    pub fn len(&self) -> u32 {
        self.0.count_ones()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Access the raw bits.
    #[inline]
    pub fn bits(&self) -> u64 {
        self.0
    }
}

impl BitAnd for Mask {
    type Output = Self;

    #[inline]
    fn bitand(self, rhs: Self) -> Self::Output {
        Self(self.0 & rhs.0)
    }
}

impl BitAndAssign for Mask {
    #[inline]
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}

impl fmt::Debug for Mask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Mask({:#015x})", self.0)
    }
}
