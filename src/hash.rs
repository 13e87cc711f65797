//! Implementation of an integer set, backed by a hash table
#![warn(missing_docs)]

extern crate alloc;

use alloc::vec::Vec;
use core::{fmt, iter::FusedIterator};

use crate::set::{EmptySetError, IntSet};

//-----------------------------------------------------------------------------------------------//

/// A set of integers stored as the keys of a hash table.
///
/// Insertion, removal and lookup take expected constant time, and `select_one` takes amortized
/// constant time. Iteration order, and therefore the member returned by `select_one`, depends on
/// the table layout and may differ between calls.
///
/// The table is shrunk once fewer than a quarter of its capacity is in use, so a capacity
/// reserved with `with_capacity` is not kept after members are removed.
#[derive(Clone, Default)]
pub struct HashSet {
    table: hashbrown::HashSet<i64>,
    // Members copied out of one pass over the table, handed out by `select_one`. Entries that
    // were removed since the pass are skipped.
    pending: Vec<i64>,
}

impl HashSet {
    /// Constructor
    pub fn new() -> HashSet {
        HashSet {
            table: hashbrown::HashSet::new(),
            pending: Vec::new(),
        }
    }

    /// Constructor
    pub fn with_capacity(capacity: usize) -> HashSet {
        HashSet {
            table: hashbrown::HashSet::with_capacity(capacity),
            pending: Vec::new(),
        }
    }

    /// Get the number of members in the `HashSet`
    #[inline]
    pub fn count(&self) -> usize {
        self.table.len()
    }

    /// Check if there are any members in the `HashSet`
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Remove all members from the `HashSet`
    pub fn clear(&mut self) {
        self.table.clear();
        self.pending.clear();
    }

    /// Check if `elem` is a member
    pub fn contains(&self, elem: i64) -> bool {
        self.table.contains(&elem)
    }

    /// Add `elem` unless it is already a member.
    ///
    /// Returns `true` if `elem` was added.
    pub fn insert(&mut self, elem: i64) -> bool {
        let added = self.table.insert(elem);
        if added {
            tracing::trace!(elem, count = self.table.len(), "hash set insert");
        }
        added
    }

    /// Remove `elem` if it is a member.
    ///
    /// Returns `true` if `elem` was removed.
    pub fn remove(&mut self, elem: i64) -> bool {
        let removed = self.table.remove(&elem);
        if removed {
            self.shrink();
            tracing::trace!(elem, count = self.table.len(), "hash set remove");
        }
        removed
    }

    /// Remove and return an arbitrary member.
    ///
    /// Scanning the table for an occupied bucket costs time proportional to its capacity, so the
    /// members found by one scan are kept and handed out by later calls.
    pub fn select_one(&mut self) -> Result<i64, EmptySetError> {
        if self.table.is_empty() {
            tracing::debug!("select from empty hash set");
            return Err(EmptySetError);
        }

        loop {
            let Some(elem) = self.pending.pop() else {
                self.pending.extend(self.table.iter().copied());
                tracing::trace!(count = self.pending.len(), "hash set refill pending");
                continue;
            };

            if self.table.remove(&elem) {
                self.shrink();
                tracing::trace!(elem, count = self.table.len(), "hash set select");
                return Ok(elem);
            }
        }
    }

    // Keep the load above a quarter so a scan of the table stays proportional to its length
    fn shrink(&mut self) {
        let count = self.table.len();
        if count < self.table.capacity() / 4 {
            self.table.shrink_to(count * 2);
            self.pending.shrink_to(count * 2);
        }
    }

    /// Iterate over the members in table order
    pub fn iter(&self) -> HashSetIterator<'_> {
        HashSetIterator {
            inner: self.table.iter(),
        }
    }
}

impl IntSet for HashSet {
    #[inline]
    fn is_empty(&self) -> bool {
        HashSet::is_empty(self)
    }

    #[inline]
    fn count(&self) -> usize {
        HashSet::count(self)
    }

    fn contains(&self, elem: i64) -> bool {
        HashSet::contains(self, elem)
    }

    fn insert(&mut self, elem: i64) -> bool {
        HashSet::insert(self, elem)
    }

    fn remove(&mut self, elem: i64) -> bool {
        HashSet::remove(self, elem)
    }

    fn select_one(&mut self) -> Result<i64, EmptySetError> {
        HashSet::select_one(self)
    }
}

impl fmt::Display for HashSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{ ")?;
        for elem in self {
            write!(f, "{elem} ")?;
        }
        write!(f, "}}")
    }
}

impl fmt::Debug for HashSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<'a> IntoIterator for &'a HashSet {
    type Item = i64;
    type IntoIter = HashSetIterator<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<i64> for HashSet {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        HashSet {
            table: iter.into_iter().collect(),
            pending: Vec::new(),
        }
    }
}

impl Extend<i64> for HashSet {
    fn extend<I: IntoIterator<Item = i64>>(&mut self, iter: I) {
        self.table.extend(iter);
    }
}

//-----------------------------------------------------------------------------------------------//

/// Iterator over a `HashSet`
pub struct HashSetIterator<'a> {
    inner: hashbrown::hash_set::Iter<'a, i64>,
}

impl Iterator for HashSetIterator<'_> {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        self.inner.next().copied()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for HashSetIterator<'_> {}

impl FusedIterator for HashSetIterator<'_> {}

//-----------------------------------------------------------------------------------------------//

#[test]
// Duplicates collapse and every member is visited once
fn test_hash_set_0() {
    use alloc::{vec, vec::Vec};

    let set: HashSet = [5, 1, 9, 1, 5].into_iter().collect();

    assert_eq!(set.count(), 3);

    let mut v: Vec<i64> = set.iter().collect();
    v.sort_unstable();
    assert_eq!(v, vec![1, 5, 9]);
}

#[test]
// Selected members come out of the set, whichever one is picked
fn test_hash_set_1() {
    let mut set: HashSet = (0..100).collect();

    for remaining in (0..100).rev() {
        let elem = set.select_one().unwrap();
        assert!((0..100).contains(&elem));
        assert!(!set.contains(elem));
        assert_eq!(set.count(), remaining);
    }

    assert_eq!(set.select_one(), Err(EmptySetError));
}

#[test]
// Display and debug formatting of a single member
fn test_hash_set_2() {
    use alloc::format;

    let mut set = HashSet::with_capacity(4);
    assert_eq!(format!("{set}"), "{ }");

    set.insert(i64::MIN);
    assert_eq!(format!("{set}"), "{ -9223372036854775808 }");
    assert_eq!(format!("{set:?}"), "{-9223372036854775808}");
}

#[test]
// A stress test with inserting and removing
fn test_hash_set_3() {
    use rand::prelude::*;

    const COUNT: usize = 1000000;

    let mut rng = SmallRng::seed_from_u64(5678901234);

    let mut set = HashSet::new();
    for _ in 0..COUNT {
        let elem = rng.random_range(i64::MIN..i64::MAX);
        set.insert(elem);
    }

    assert_eq!(set.count(), set.iter().len());

    let mut rng = SmallRng::seed_from_u64(5678901234);

    for _ in 0..COUNT {
        let elem = rng.random_range(i64::MIN..i64::MAX);
        set.remove(elem);
        assert!(!set.contains(elem));
    }

    assert!(set.is_empty());

    let copy = set.clone();
    set.extend([1, 2, 3]);
    assert!(copy.is_empty());
    set.clear();
    assert_eq!(set.count(), 0);
}

#[test]
// Draining a large set one selection at a time returns every member once
fn test_hash_set_4() {
    const COUNT: i64 = 200000;

    let mut set: HashSet = (0..COUNT).collect();
    let mut seen = hashbrown::HashSet::new();

    while let Ok(elem) = set.select_one() {
        assert!((0..COUNT).contains(&elem));
        assert!(seen.insert(elem));
    }

    assert_eq!(seen.len(), COUNT as usize);
    assert!(set.is_empty());
    assert_eq!(set.select_one(), Err(EmptySetError));

    // The emptied table no longer holds on to its old capacity
    assert!(set.table.capacity() < 16);
}

#[test]
// Selection skips members removed since the last scan and picks up members inserted after it
fn test_hash_set_5() {
    let mut set: HashSet = (0..1000).collect();

    let first = set.select_one().unwrap();
    assert!(!set.pending.is_empty());

    for elem in 0..500 {
        set.remove(elem);
    }
    for elem in 5000..5010 {
        set.insert(elem);
    }

    let expected = set.count();
    let mut drained = 0;
    while let Ok(elem) = set.select_one() {
        assert!(elem != first);
        assert!((500..1000).contains(&elem) || (5000..5010).contains(&elem));
        drained += 1;
    }

    assert_eq!(drained, expected);
    assert!(set.is_empty());
}

#[test]
// A long run of insert then select on a once large table stays cheap and correct
fn test_hash_set_6() {
    let mut set: HashSet = (0..100000).collect();
    for elem in 0..99999 {
        set.remove(elem);
    }

    assert_eq!(set.count(), 1);
    assert!(set.table.capacity() < 64);

    for elem in 0..100000 {
        set.insert(-elem - 1);
        assert!(set.select_one().is_ok());
        assert_eq!(set.count(), 1);
    }
}
