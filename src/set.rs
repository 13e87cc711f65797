//! The behavioural contract shared by every integer set
#![warn(missing_docs)]

use compact_str::{format_compact, CompactString};
use core::fmt::Display;

//-----------------------------------------------------------------------------------------------//

/// The error returned by [`IntSet::select_one`] when the set has no members.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("set is empty")]
pub struct EmptySetError;

//-----------------------------------------------------------------------------------------------//

/// An unordered collection of distinct `i64` values.
///
/// `ArraySet`, `LinkedSet` and `HashSet` all implement this trait and can be used in place of
/// one another, either generically or through `&mut dyn IntSet`. They differ only in their
/// complexity and in the (unspecified) order in which members are visited.
///
/// Only [`select_one`](IntSet::select_one) can fail. The other operations are total and report
/// a no-op through their `bool` result.
pub trait IntSet: Display {
    /// Check if the set has no members
    fn is_empty(&self) -> bool;

    /// Get the number of members in the set
    fn count(&self) -> usize;

    /// Check if `elem` is a member of the set
    fn contains(&self, elem: i64) -> bool;

    /// Add `elem` to the set.
    ///
    /// Returns `true` if `elem` was added, `false` if it was already a member.
    fn insert(&mut self, elem: i64) -> bool;

    /// Remove `elem` from the set.
    ///
    /// Returns `true` if `elem` was removed, `false` if it was not a member.
    fn remove(&mut self, elem: i64) -> bool;

    /// Remove one member from the set and return it.
    ///
    /// Which member is chosen is up to the implementation. This is not a peek: the returned
    /// value is no longer in the set afterwards.
    fn select_one(&mut self) -> Result<i64, EmptySetError>;

    /// Render the members as `{ e1 e2 ... }`.
    ///
    /// The output is meant for diagnostics. Element order is not stable and the text cannot be
    /// parsed back into a set.
    fn render(&self) -> CompactString {
        format_compact!("{}", self)
    }
}

//-----------------------------------------------------------------------------------------------//

// Generic checks run against every implementation of the contract.
#[cfg(test)]
mod contract {
    extern crate alloc;

    use super::{EmptySetError, IntSet};
    use crate::{ArraySet, HashSet, LinkedSet};
    use alloc::vec::Vec;

    fn new_set_is_empty<S: IntSet + Default>() {
        let set = S::default();
        assert!(set.is_empty());
        assert_eq!(set.count(), 0);
        for elem in [i64::MIN, -1, 0, 1, 420, i64::MAX] {
            assert!(!set.contains(elem));
        }
    }

    fn insert_into_empty<S: IntSet + Default>() {
        let mut set = S::default();
        assert!(set.insert(420));
        assert!(set.contains(420));
        assert!(!set.is_empty());
        assert_eq!(set.count(), 1);
    }

    fn insert_twice<S: IntSet + Default>() {
        let mut set = S::default();
        assert!(set.insert(420));
        assert!(!set.insert(420));
        assert!(set.contains(420));
        assert_eq!(set.count(), 1);
    }

    fn remove_from_empty<S: IntSet + Default>() {
        let mut set = S::default();
        assert!(!set.remove(420));
        assert!(set.is_empty());
    }

    fn remove_absent<S: IntSet + Default>() {
        let mut set = S::default();
        set.insert(1);
        set.insert(2);
        assert!(!set.remove(3));
        assert_eq!(set.count(), 2);
        assert!(set.contains(1));
        assert!(set.contains(2));
    }

    fn remove_only_member<S: IntSet + Default>() {
        let mut set = S::default();
        set.insert(420);
        assert!(set.remove(420));
        assert!(!set.contains(420));
        assert!(set.is_empty());
        assert!(!set.remove(420));
    }

    fn remove_from_larger_set<S: IntSet + Default>() {
        let mut set = S::default();
        assert!(set.insert(0));
        assert!(set.insert(420));
        assert!(set.insert(9000));
        assert!(!set.is_empty());
        assert!(set.contains(420));

        assert!(set.remove(420));
        assert!(!set.remove(420));
        assert!(!set.contains(420));
        assert!(set.contains(0));
        assert!(set.contains(9000));
        assert_eq!(set.count(), 2);
    }

    fn remove_each_position<S: IntSet + Default>() {
        // Head, middle and tail of the storage order
        for target in [1, 2, 3] {
            let mut set = S::default();
            set.insert(1);
            set.insert(2);
            set.insert(3);
            assert!(set.remove(target));
            assert_eq!(set.count(), 2);
            for elem in [1, 2, 3] {
                assert_eq!(set.contains(elem), elem != target);
            }
        }
    }

    fn select_from_empty<S: IntSet + Default>() {
        let mut set = S::default();
        assert_eq!(set.select_one(), Err(EmptySetError));
        assert!(set.is_empty());
        assert_eq!(set.count(), 0);
    }

    fn select_only_member<S: IntSet + Default>() {
        let mut set = S::default();
        set.insert(-17);
        assert_eq!(set.select_one(), Ok(-17));
        assert!(set.is_empty());
        assert!(!set.contains(-17));
        assert_eq!(set.select_one(), Err(EmptySetError));
    }

    fn select_from_larger_set<S: IntSet + Default>() {
        let mut set = S::default();
        for elem in [5, 10, 15] {
            set.insert(elem);
        }

        let elem = set.select_one().unwrap();
        assert!([5, 10, 15].contains(&elem));
        assert!(!set.contains(elem));
        assert!(!set.is_empty());
        assert_eq!(set.count(), 2);
        for other in [5, 10, 15] {
            if other != elem {
                assert!(set.contains(other));
            }
        }
    }

    fn select_drains_set<S: IntSet + Default>() {
        let mut set = S::default();
        for elem in 0..50 {
            set.insert(elem * 3);
        }

        let mut drained = Vec::new();
        while !set.is_empty() {
            drained.push(set.select_one().unwrap());
        }
        drained.sort_unstable();

        assert_eq!(drained, (0..50).map(|e| e * 3).collect::<Vec<i64>>());
        assert_eq!(set.select_one(), Err(EmptySetError));
    }

    fn cardinality<S: IntSet + Default>() {
        let mut set = S::default();
        let mut expected = 0usize;
        for elem in [3, 1, 4, 1, 5, 9, 2, 6, 5, 3, 5] {
            if set.insert(elem) {
                expected += 1;
            }
        }
        assert_eq!(set.count(), 7);
        assert_eq!(set.count(), expected);

        for elem in [1, 1, 8, 9] {
            if set.remove(elem) {
                expected -= 1;
            }
        }
        if set.select_one().is_ok() {
            expected -= 1;
        }
        assert_eq!(set.count(), 4);
        assert_eq!(set.count(), expected);
    }

    fn display<S: IntSet + Default>() {
        let mut set = S::default();
        assert_eq!(set.render(), "{ }");

        set.insert(420);
        assert_eq!(set.render(), "{ 420 }");

        set.insert(-3);
        let text = set.render();
        assert!(text == "{ 420 -3 }" || text == "{ -3 420 }");
    }

    fn usable_as_trait_object<S: IntSet + Default>() {
        let mut set = S::default();
        let dyn_set: &mut dyn IntSet = &mut set;
        assert!(dyn_set.insert(7));
        assert!(dyn_set.contains(7));
        assert_eq!(dyn_set.render(), "{ 7 }");
        assert_eq!(dyn_set.select_one(), Ok(7));
        assert!(dyn_set.is_empty());
    }

    fn check_contract<S: IntSet + Default>() {
        new_set_is_empty::<S>();
        insert_into_empty::<S>();
        insert_twice::<S>();
        remove_from_empty::<S>();
        remove_absent::<S>();
        remove_only_member::<S>();
        remove_from_larger_set::<S>();
        remove_each_position::<S>();
        select_from_empty::<S>();
        select_only_member::<S>();
        select_from_larger_set::<S>();
        select_drains_set::<S>();
        cardinality::<S>();
        display::<S>();
        usable_as_trait_object::<S>();
    }

    #[test]
    fn array_set_contract() {
        check_contract::<ArraySet>();
    }

    #[test]
    fn linked_set_contract() {
        check_contract::<LinkedSet>();
    }

    #[test]
    fn hash_set_contract() {
        check_contract::<HashSet>();
    }

    #[test]
    fn empty_set_error_message() {
        use alloc::string::ToString;

        assert_eq!(EmptySetError.to_string(), "set is empty");
    }
}
