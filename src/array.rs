//! Implementation of an integer set, backed by a vector
#![warn(missing_docs)]

extern crate alloc;

use alloc::vec::Vec;
use core::{fmt, iter::FusedIterator, slice};

use crate::set::{EmptySetError, IntSet};

//-----------------------------------------------------------------------------------------------//

/// A set of integers stored contiguously in a vector.
///
/// Lookups are linear scans, so this suits small sets. Members are appended in insertion order,
/// but a removal moves the last member into the vacated slot (swap-and-pop). After the first
/// removal the storage order bears no relation to insertion order, and callers must not rely on
/// it in any case.
#[derive(Clone, Default)]
pub struct ArraySet {
    elems: Vec<i64>,
}

impl ArraySet {
    /// Constructor
    pub fn new() -> ArraySet {
        ArraySet { elems: Vec::new() }
    }

    /// Constructor
    pub fn with_capacity(capacity: usize) -> ArraySet {
        ArraySet {
            elems: Vec::with_capacity(capacity),
        }
    }

    /// Get the number of members in the `ArraySet`
    #[inline]
    pub fn count(&self) -> usize {
        self.elems.len()
    }

    /// Check if there are any members in the `ArraySet`
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elems.is_empty()
    }

    /// Remove all members from the `ArraySet`
    pub fn clear(&mut self) {
        self.elems.clear();
    }

    /// Check if `elem` is a member. This is a linear scan.
    pub fn contains(&self, elem: i64) -> bool {
        self.elems.contains(&elem)
    }

    /// Append `elem` unless it is already a member.
    ///
    /// Returns `true` if `elem` was added.
    pub fn insert(&mut self, elem: i64) -> bool {
        if self.contains(elem) {
            return false;
        }

        self.elems.push(elem);
        tracing::trace!(elem, count = self.elems.len(), "array set append");
        true
    }

    /// Remove `elem` if it is a member.
    ///
    /// The slot it occupied is filled with the last member, so the relative order of the
    /// remaining members is not preserved. Returns `true` if `elem` was removed.
    pub fn remove(&mut self, elem: i64) -> bool {
        let Some(index) = self.elems.iter().position(|&x| x == elem) else {
            return false;
        };

        self.elems.swap_remove(index);
        tracing::trace!(elem, index, count = self.elems.len(), "array set swap and pop");
        true
    }

    /// Remove and return the first member in storage order.
    pub fn select_one(&mut self) -> Result<i64, EmptySetError> {
        let Some(&elem) = self.elems.first() else {
            tracing::debug!("select from empty array set");
            return Err(EmptySetError);
        };

        self.remove(elem);
        tracing::trace!(elem, "array set select");
        Ok(elem)
    }

    /// Iterate over the members in storage order
    pub fn iter(&self) -> ArraySetIterator<'_> {
        ArraySetIterator {
            inner: self.elems.iter(),
        }
    }
}

impl IntSet for ArraySet {
    #[inline]
    fn is_empty(&self) -> bool {
        ArraySet::is_empty(self)
    }

    #[inline]
    fn count(&self) -> usize {
        ArraySet::count(self)
    }

    fn contains(&self, elem: i64) -> bool {
        ArraySet::contains(self, elem)
    }

    fn insert(&mut self, elem: i64) -> bool {
        ArraySet::insert(self, elem)
    }

    fn remove(&mut self, elem: i64) -> bool {
        ArraySet::remove(self, elem)
    }

    fn select_one(&mut self) -> Result<i64, EmptySetError> {
        ArraySet::select_one(self)
    }
}

impl fmt::Display for ArraySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{ ")?;
        for elem in self {
            write!(f, "{elem} ")?;
        }
        write!(f, "}}")
    }
}

impl fmt::Debug for ArraySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<'a> IntoIterator for &'a ArraySet {
    type Item = i64;
    type IntoIter = ArraySetIterator<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<i64> for ArraySet {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut set = Self::with_capacity(iter.size_hint().0);
        set.extend(iter);
        set
    }
}

impl Extend<i64> for ArraySet {
    fn extend<I: IntoIterator<Item = i64>>(&mut self, iter: I) {
        for elem in iter {
            self.insert(elem);
        }
    }
}

//-----------------------------------------------------------------------------------------------//

/// Iterator over an `ArraySet`
pub struct ArraySetIterator<'a> {
    inner: slice::Iter<'a, i64>,
}

impl Iterator for ArraySetIterator<'_> {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        self.inner.next().copied()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for ArraySetIterator<'_> {}

impl FusedIterator for ArraySetIterator<'_> {}

//-----------------------------------------------------------------------------------------------//

#[test]
// Insertion order survives until the first removal
fn test_array_set_0() {
    use alloc::vec;

    let mut set = ArraySet::new();

    set.insert(5);
    set.insert(1);
    set.insert(9);
    set.insert(1);

    let v: Vec<i64> = set.iter().collect();
    assert_eq!(v, vec![5, 1, 9]);
}

#[test]
// Removal fills the hole with the last member
fn test_array_set_1() {
    use alloc::vec;

    let mut set: ArraySet = [10, 20, 30, 40].into_iter().collect();

    assert!(set.remove(20));
    let v: Vec<i64> = set.iter().collect();
    assert_eq!(v, vec![10, 40, 30]);

    assert!(set.remove(30));
    let v: Vec<i64> = set.iter().collect();
    assert_eq!(v, vec![10, 40]);
}

#[test]
// Select always takes the first slot, which is then refilled from the end
fn test_array_set_2() {
    use alloc::vec;

    let mut set: ArraySet = [1, 2, 3].into_iter().collect();

    assert_eq!(set.select_one(), Ok(1));
    let v: Vec<i64> = set.iter().collect();
    assert_eq!(v, vec![3, 2]);

    assert_eq!(set.select_one(), Ok(3));
    assert_eq!(set.select_one(), Ok(2));
    assert_eq!(set.select_one(), Err(EmptySetError));
}

#[test]
// Display and debug formatting
fn test_array_set_3() {
    use alloc::format;

    let mut set = ArraySet::new();
    assert_eq!(format!("{set}"), "{ }");

    set.insert(0);
    set.insert(-7);
    assert_eq!(format!("{set}"), "{ 0 -7 }");
    assert_eq!(format!("{set:?}"), "{0, -7}");
}

#[test]
// Clearing keeps the set usable and clones are independent
fn test_array_set_4() {
    let mut set: ArraySet = (0..10).collect();
    let copy = set.clone();

    set.clear();
    assert!(set.is_empty());
    assert!(set.insert(3));

    assert_eq!(copy.count(), 10);
    assert_eq!(copy.iter().len(), 10);
    assert!(copy.contains(9));
    assert!(!set.contains(9));
}

#[test]
// A stress test with inserting and removing
fn test_array_set_5() {
    use rand::prelude::*;

    const COUNT: usize = 2000;

    let mut rng = SmallRng::seed_from_u64(1234567890);

    let mut set = ArraySet::new();
    let mut inserted = 0;
    for _ in 0..COUNT {
        let elem = rng.random_range(0..i64::MAX);
        if set.insert(elem) {
            inserted += 1;
        }
    }

    assert_eq!(set.count(), inserted);

    let mut rng = SmallRng::seed_from_u64(1234567890);

    for _ in 0..COUNT {
        let elem = rng.random_range(0..i64::MAX);
        assert!(set.contains(elem));
        set.remove(elem);
        assert!(!set.contains(elem));
    }

    assert_eq!(set.count(), 0);
}
