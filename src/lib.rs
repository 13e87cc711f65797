//! ## Introduction
//!
//! This crate implements a small set of signed integers three different ways, each behind the
//! same `IntSet` contract. The implementations can be swapped for one another freely; they differ
//! only in how members are stored and therefore in the cost of each operation.
//!
//! ## Contents
//!
//! <center>
//!
//! | Type        | Storage             | Insert / Remove    | Select         | Iterator            |
//! |:------------|:--------------------|:-------------------|:---------------|---------------------|
//! | `ArraySet`  | `Vec<i64>`          | O(n) scan          | O(n)           | `ArraySetIterator`  |
//! | `LinkedSet` | Singly linked list  | O(n) walk          | O(1)           | `LinkedSetIterator` |
//! | `HashSet`   | Hash table          | O(1) expected      | O(1) amortized | `HashSetIterator`   |
//!
//! </center>
//!
//! ## Contract
//!
//! - `insert` and `remove` never fail. They return `false` when there was nothing to do.
//! - `select_one` removes a member and returns it, or returns `EmptySetError` if the set is
//!   empty. Which member is selected is up to the implementation.
//! - Sets are unordered. `ArraySet` happens to keep insertion order until the first removal,
//!   which fills the hole with the last member. `HashSet` visits members in table order. No
//!   caller should depend on either.
//! - `Display` renders a set as `{ e1 e2 ... }` for diagnostics. It is not a serialization format.
//!
//! ```
//! use intsets::{ArraySet, EmptySetError, HashSet, IntSet, LinkedSet};
//!
//! fn drain(set: &mut dyn IntSet) -> usize {
//!     let mut drained = 0;
//!     while set.select_one().is_ok() {
//!         drained += 1;
//!     }
//!     drained
//! }
//!
//! let mut array: ArraySet = [0, 420, 9000].into_iter().collect();
//! let mut linked: LinkedSet = [0, 420, 9000].into_iter().collect();
//! let mut hash: HashSet = [0, 420, 9000].into_iter().collect();
//!
//! assert!(array.remove(420));
//! assert!(!linked.insert(420));
//! assert_eq!(drain(&mut array), 2);
//! assert_eq!(drain(&mut linked), 3);
//! assert_eq!(drain(&mut hash), 3);
//! assert_eq!(hash.select_one(), Err(EmptySetError));
//! ```
//!
//! The crate is `#![no_std]` and only needs `alloc`. Mutations emit `tracing` events at the
//! `trace` level, and a failed `select_one` emits one at the `debug` level.

#![no_std]
#![warn(missing_docs)]

mod array;
mod hash;
mod linked;
mod set;

pub use array::*;
pub use hash::*;
pub use linked::*;
pub use set::*;
