//! Model-based property tests: every set implementation must agree with `BTreeSet` on any
//! sequence of operations.

use std::collections::BTreeSet;

use intsets::{ArraySet, EmptySetError, HashSet, IntSet, LinkedSet};
use proptest::{prelude::*, test_runner::Config};

#[derive(Clone, Debug)]
enum Op {
    Insert(i64),
    Remove(i64),
    Contains(i64),
    SelectOne,
}

// A narrow element range so that inserts collide and removes hit existing members
fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (-20i64..20).prop_map(Op::Insert),
        3 => (-20i64..20).prop_map(Op::Remove),
        2 => (-20i64..20).prop_map(Op::Contains),
        1 => Just(Op::SelectOne),
    ]
}

fn check_against_model<S: IntSet + Default>(ops: &[Op]) -> Result<(), TestCaseError> {
    let mut set = S::default();
    let mut model = BTreeSet::new();

    for op in ops {
        match *op {
            Op::Insert(elem) => {
                prop_assert_eq!(set.insert(elem), model.insert(elem));
                prop_assert!(set.contains(elem));
            }
            Op::Remove(elem) => {
                prop_assert_eq!(set.remove(elem), model.remove(&elem));
                prop_assert!(!set.contains(elem));
            }
            Op::Contains(elem) => {
                prop_assert_eq!(set.contains(elem), model.contains(&elem));
            }
            Op::SelectOne => match set.select_one() {
                Ok(elem) => {
                    prop_assert!(model.remove(&elem), "selected {} was not a member", elem);
                    prop_assert!(!set.contains(elem));
                }
                Err(err) => {
                    prop_assert_eq!(err, EmptySetError);
                    prop_assert!(model.is_empty());
                }
            },
        }

        prop_assert_eq!(set.count(), model.len());
        prop_assert_eq!(set.is_empty(), model.is_empty());
    }

    for elem in -20..20 {
        prop_assert_eq!(set.contains(elem), model.contains(&elem));
    }

    Ok(())
}

fn check_render<S: IntSet + FromIterator<i64>>(elems: &BTreeSet<i64>) -> Result<(), TestCaseError> {
    let set: S = elems.iter().copied().collect();
    let text = set.render();
    let text = text.as_str();

    prop_assert!(text.starts_with("{ "), "prefix of {}", text);
    prop_assert!(text.ends_with('}'), "suffix of {}", text);

    let mut rendered: Vec<i64> = text[1..text.len() - 1]
        .split_whitespace()
        .map(|token| token.parse().unwrap())
        .collect();
    rendered.sort_unstable();

    prop_assert_eq!(rendered, elems.iter().copied().collect::<Vec<i64>>());
    Ok(())
}

proptest! {
    #![proptest_config(Config {
            cases: 256,
            ..Default::default()
        })]

    #[test]
    fn array_set_matches_model(ops in prop::collection::vec(op(), 0..200)) {
        check_against_model::<ArraySet>(&ops)?;
    }

    #[test]
    fn linked_set_matches_model(ops in prop::collection::vec(op(), 0..200)) {
        check_against_model::<LinkedSet>(&ops)?;
    }

    #[test]
    fn hash_set_matches_model(ops in prop::collection::vec(op(), 0..200)) {
        check_against_model::<HashSet>(&ops)?;
    }

    #[test]
    // Collecting drops duplicates and renders each member exactly once
    fn render_lists_every_member(elems in prop::collection::btree_set(any::<i64>(), 0..30)) {
        check_render::<ArraySet>(&elems)?;
        check_render::<LinkedSet>(&elems)?;
        check_render::<HashSet>(&elems)?;
    }

    #[test]
    // Selecting until empty yields every member once, then fails
    fn select_drains_every_member(elems in prop::collection::vec(any::<i64>(), 0..50)) {
        let expected: BTreeSet<i64> = elems.iter().copied().collect();

        let sets: [Box<dyn IntSet>; 3] = [
            Box::new(elems.iter().copied().collect::<ArraySet>()),
            Box::new(elems.iter().copied().collect::<LinkedSet>()),
            Box::new(elems.iter().copied().collect::<HashSet>()),
        ];

        for mut set in sets {
            prop_assert_eq!(set.count(), expected.len());

            let mut drained = BTreeSet::new();
            while !set.is_empty() {
                let elem = set.select_one().unwrap();
                prop_assert!(drained.insert(elem));
            }

            prop_assert_eq!(&drained, &expected);
            prop_assert_eq!(set.select_one(), Err(EmptySetError));
        }
    }
}
