//! Implementation of an integer set, backed by a singly linked list
#![warn(missing_docs)]

extern crate alloc;

use alloc::boxed::Box;
use core::{fmt, iter::FusedIterator};

use crate::set::{EmptySetError, IntSet};

//-----------------------------------------------------------------------------------------------//

// A node in the chain. Each node owns the rest of the chain through `next`.
struct Node {
    elem: i64,
    next: Option<Box<Node>>,
}

//-----------------------------------------------------------------------------------------------//

/// A set of integers stored in a singly linked list.
///
/// New members are appended at the tail, and `select_one` detaches the head in constant time.
/// Membership tests, insertion and removal all walk the chain.
#[derive(Default)]
pub struct LinkedSet {
    head: Option<Box<Node>>,
    count: usize,
}

impl LinkedSet {
    /// Constructor
    pub fn new() -> LinkedSet {
        LinkedSet {
            head: None,
            count: 0,
        }
    }

    /// Get the number of members in the `LinkedSet`
    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Check if there are any members in the `LinkedSet`
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Remove all members from the `LinkedSet`
    pub fn clear(&mut self) {
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
        self.count = 0;
    }

    /// Check if `elem` is a member. This walks the chain from the head.
    pub fn contains(&self, elem: i64) -> bool {
        self.iter().any(|x| x == elem)
    }

    /// Append `elem` as a new tail node unless it is already a member.
    ///
    /// Returns `true` if `elem` was added.
    pub fn insert(&mut self, elem: i64) -> bool {
        if self.contains(elem) {
            return false;
        }

        let mut link = &mut self.head;
        while let Some(node) = link {
            link = &mut node.next;
        }
        *link = Some(Box::new(Node { elem, next: None }));

        self.count += 1;
        tracing::trace!(elem, count = self.count, "linked set append");
        true
    }

    /// Remove `elem` if it is a member.
    ///
    /// Removing the head moves the head on to its successor. Anywhere else the node is spliced
    /// out by linking its predecessor to its successor. Returns `true` if `elem` was removed.
    pub fn remove(&mut self, elem: i64) -> bool {
        let Some(head) = self.head.as_mut() else {
            return false;
        };

        if head.elem == elem {
            self.head = head.next.take();
            self.count -= 1;
            tracing::trace!(elem, count = self.count, "linked set relink head");
            return true;
        }

        let mut prev = head;
        loop {
            let found = match prev.next.as_ref() {
                Some(current) => current.elem == elem,
                None => return false,
            };

            if found {
                if let Some(current) = prev.next.take() {
                    let Node { next, .. } = *current;
                    prev.next = next;
                }
                self.count -= 1;
                tracing::trace!(elem, count = self.count, "linked set splice");
                return true;
            }

            match prev.next.as_mut() {
                Some(current) => prev = current,
                None => return false,
            }
        }
    }

    /// Detach the head node and return its value.
    pub fn select_one(&mut self) -> Result<i64, EmptySetError> {
        let Some(head) = self.head.take() else {
            tracing::debug!("select from empty linked set");
            return Err(EmptySetError);
        };

        let Node { elem, next } = *head;
        self.head = next;
        self.count -= 1;
        tracing::trace!(elem, count = self.count, "linked set select");
        Ok(elem)
    }

    /// Iterate over the members from head to tail
    pub fn iter(&self) -> LinkedSetIterator<'_> {
        LinkedSetIterator {
            node: self.head.as_deref(),
            count: self.count,
        }
    }
}

impl IntSet for LinkedSet {
    #[inline]
    fn is_empty(&self) -> bool {
        LinkedSet::is_empty(self)
    }

    #[inline]
    fn count(&self) -> usize {
        LinkedSet::count(self)
    }

    fn contains(&self, elem: i64) -> bool {
        LinkedSet::contains(self, elem)
    }

    fn insert(&mut self, elem: i64) -> bool {
        LinkedSet::insert(self, elem)
    }

    fn remove(&mut self, elem: i64) -> bool {
        LinkedSet::remove(self, elem)
    }

    fn select_one(&mut self) -> Result<i64, EmptySetError> {
        LinkedSet::select_one(self)
    }
}

// Unlink iteratively, the default recursive drop can overflow the stack on a long chain
impl Drop for LinkedSet {
    fn drop(&mut self) {
        self.clear();
    }
}

impl Clone for LinkedSet {
    fn clone(&self) -> Self {
        let mut set = LinkedSet::new();

        let mut link = &mut set.head;
        for elem in self {
            link = &mut link.insert(Box::new(Node { elem, next: None })).next;
        }
        set.count = self.count;

        set
    }
}

impl fmt::Display for LinkedSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{ ")?;
        for elem in self {
            write!(f, "{elem} ")?;
        }
        write!(f, "}}")
    }
}

impl fmt::Debug for LinkedSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<'a> IntoIterator for &'a LinkedSet {
    type Item = i64;
    type IntoIter = LinkedSetIterator<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<i64> for LinkedSet {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl Extend<i64> for LinkedSet {
    fn extend<I: IntoIterator<Item = i64>>(&mut self, iter: I) {
        for elem in iter {
            self.insert(elem);
        }
    }
}

//-----------------------------------------------------------------------------------------------//

/// Iterator over a `LinkedSet`
pub struct LinkedSetIterator<'a> {
    node: Option<&'a Node>,
    count: usize,
}

impl Iterator for LinkedSetIterator<'_> {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        let node = self.node?;
        self.node = node.next.as_deref();
        self.count -= 1;

        Some(node.elem)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.count, Some(self.count))
    }
}

impl ExactSizeIterator for LinkedSetIterator<'_> {}

impl FusedIterator for LinkedSetIterator<'_> {}

//-----------------------------------------------------------------------------------------------//

#[test]
// Members are kept in insertion order
fn test_linked_set_0() {
    use alloc::{vec, vec::Vec};

    let mut set = LinkedSet::new();

    set.insert(5);
    set.insert(1);
    set.insert(9);
    set.insert(5);

    let v: Vec<i64> = set.iter().collect();
    assert_eq!(v, vec![5, 1, 9]);
}

#[test]
// Removing the head, a middle node and the tail keeps the chain intact
fn test_linked_set_1() {
    use alloc::{vec, vec::Vec};

    let mut set: LinkedSet = [1, 2, 3, 4, 5].into_iter().collect();

    assert!(set.remove(1));
    assert!(set.remove(3));
    assert!(set.remove(5));
    assert!(!set.remove(5));

    let v: Vec<i64> = set.iter().collect();
    assert_eq!(v, vec![2, 4]);
    assert_eq!(set.count(), 2);

    assert!(set.insert(6));
    let v: Vec<i64> = set.iter().collect();
    assert_eq!(v, vec![2, 4, 6]);
}

#[test]
// Select takes the head, in insertion order
fn test_linked_set_2() {
    let mut set: LinkedSet = [7, 8, 9].into_iter().collect();

    assert_eq!(set.select_one(), Ok(7));
    assert_eq!(set.select_one(), Ok(8));
    assert_eq!(set.select_one(), Ok(9));
    assert_eq!(set.select_one(), Err(EmptySetError));
    assert!(set.is_empty());
    assert_eq!(set.count(), 0);
}

#[test]
// Display and debug formatting
fn test_linked_set_3() {
    use alloc::format;

    let mut set = LinkedSet::new();
    assert_eq!(format!("{set}"), "{ }");

    set.insert(42);
    set.insert(-1);
    assert_eq!(format!("{set}"), "{ 42 -1 }");
    assert_eq!(format!("{set:?}"), "{42, -1}");
}

#[test]
// Clones copy the chain in order and are independent of the original
fn test_linked_set_4() {
    use alloc::{vec, vec::Vec};

    let mut set: LinkedSet = [3, 1, 2].into_iter().collect();
    let copy = set.clone();

    set.remove(1);
    set.clear();
    assert!(set.is_empty());

    let v: Vec<i64> = copy.iter().collect();
    assert_eq!(v, vec![3, 1, 2]);
    assert_eq!(copy.count(), 3);
    assert_eq!(copy.iter().len(), 3);
}

#[test]
// Dropping a long chain does not recurse
fn test_linked_set_5() {
    const COUNT: i64 = 200000;

    let mut set = LinkedSet::new();
    for elem in (0..COUNT).rev() {
        // Build by hand so the test does not pay for a quadratic number of tail walks
        set.head = Some(Box::new(Node {
            elem,
            next: set.head.take(),
        }));
        set.count += 1;
    }

    assert_eq!(set.count(), COUNT as usize);
    assert_eq!(set.iter().next(), Some(0));
    drop(set);
}

#[test]
// A stress test with inserting and removing
fn test_linked_set_6() {
    use rand::prelude::*;

    const COUNT: usize = 2000;

    let mut rng = SmallRng::seed_from_u64(9876543210);

    let mut set = LinkedSet::new();
    for _ in 0..COUNT {
        let elem = rng.random_range(0..i64::MAX);
        set.insert(elem);
    }

    assert_eq!(set.count(), set.iter().count());

    let mut rng = SmallRng::seed_from_u64(9876543210);

    for _ in 0..COUNT {
        let elem = rng.random_range(0..i64::MAX);
        set.remove(elem);
        assert!(!set.contains(elem));
    }

    assert_eq!(set.count(), 0);
    assert!(set.is_empty());
}
