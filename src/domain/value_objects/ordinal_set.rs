//! Fixed-size ordered set over a closed enumeration.
//!
//! Membership is stored as a bitmask keyed by the enum's ordinal, so
//! iteration always yields members in the enum's declared order regardless of
//! insertion order, and duplicates collapse for free.

use std::fmt;
use std::marker::PhantomData;

/// A closed enumeration with a stable ordinal for every member.
///
/// `ALL` must list every member in sort order, and `ordinal` must return the
/// member's index in `ALL`.
pub(crate) trait Ordinal: Copy + Eq + 'static {
    const ALL: &'static [Self];

    fn ordinal(self) -> usize;
}

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct OrdinalSet<T> {
    bits: u16,
    _marker: PhantomData<T>,
}

impl<T: Ordinal> OrdinalSet<T> {
    pub(crate) fn empty() -> Self {
        Self {
            bits: 0,
            _marker: PhantomData,
        }
    }

    fn bit(member: T) -> u16 {
        1 << member.ordinal()
    }

    fn from_bits(bits: u16) -> Self {
        Self {
            bits,
            _marker: PhantomData,
        }
    }

    pub(crate) fn all() -> Self {
        T::ALL.iter().copied().collect()
    }

    pub(crate) fn insert(&mut self, member: T) {
        self.bits |= Self::bit(member);
    }

    pub(crate) fn contains(&self, member: T) -> bool {
        self.bits & Self::bit(member) != 0
    }

    pub(crate) fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.bits == 0
    }

    pub(crate) fn is_superset(&self, other: &Self) -> bool {
        self.bits & other.bits == other.bits
    }

    pub(crate) fn intersects(&self, other: &Self) -> bool {
        self.bits & other.bits != 0
    }

    pub(crate) fn intersection(&self, other: &Self) -> Self {
        Self::from_bits(self.bits & other.bits)
    }

    pub(crate) fn union(&self, other: &Self) -> Self {
        Self::from_bits(self.bits | other.bits)
    }

    pub(crate) fn difference(&self, other: &Self) -> Self {
        Self::from_bits(self.bits & !other.bits)
    }

    /// Members in ordinal order.
    pub(crate) fn iter(&self) -> impl Iterator<Item = T> + '_ {
        T::ALL.iter().copied().filter(|member| self.contains(*member))
    }

    pub(crate) fn to_vec(&self) -> Vec<T> {
        self.iter().collect()
    }
}

impl<T: Ordinal> FromIterator<T> for OrdinalSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::empty();
        for member in iter {
            set.insert(member);
        }
        set
    }
}

impl<T: Ordinal + fmt::Debug> fmt::Debug for OrdinalSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
