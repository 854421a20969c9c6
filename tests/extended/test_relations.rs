use proptest::prelude::{Just, Strategy};
use proptest::{prop_assert, prop_assert_eq, proptest};

use versioned_union_find::extended::{ExtendedUnionFind, RelationKind, RelationTable, Verdict};

const MAX_ELEMENTS: usize = 10;

/// Statements `(kind, x, y)` over a cyclic table with `copies` kinds.
fn statement_batch(copies: usize) -> impl Strategy<Value = (usize, Vec<(usize, usize, usize)>)> {
    (2..MAX_ELEMENTS).prop_flat_map(move |n| {
        let statements = proptest::collection::vec((0..copies, 0..n, 0..n), 0..24);
        (Just(n), statements)
    })
}

proptest! {
    // At any point, a pair of elements is aligned under at most one shift:
    // contradictory alignments are rejected before they are applied.
    #[test]
    fn at_most_one_kind_per_pair((n, statements) in statement_batch(3)) {
        let mut uf = ExtendedUnionFind::new(n, RelationTable::cyclic(3));
        for (kind, x, y) in statements {
            uf.relate(RelationKind(kind), x, y).unwrap();
        }

        for x in 0..n {
            for y in 0..n {
                let established = (0..3)
                    .filter(|&s| uf.established(RelationKind(s), x, y).unwrap())
                    .count();
                prop_assert!(established <= 1);
            }
        }
    }

    // A consistent verdict means the relation is established afterwards;
    // a contradiction means the claimed alignment still is not.
    #[test]
    fn verdicts_match_the_established_facts((n, statements) in statement_batch(3)) {
        let mut uf = ExtendedUnionFind::new(n, RelationTable::cyclic(3));
        let mut rejected = 0;
        for (kind, x, y) in statements {
            let kind = RelationKind(kind);
            match uf.relate(kind, x, y).unwrap() {
                Verdict::Consistent => {
                    prop_assert!(uf.established(kind, x, y).unwrap());
                }
                Verdict::Contradiction => {
                    rejected += 1;
                    prop_assert!(!uf.established(kind, x, y).unwrap());
                }
            }
        }
        prop_assert_eq!(uf.contradictions(), rejected);
        prop_assert_eq!(uf.is_consistent(), rejected == 0);
    }

    // Established shifts compose like the cyclic group they encode:
    // x ≡ y + s₁ and y ≡ z + s₂ force x ≡ z + (s₁ + s₂).
    #[test]
    fn established_shifts_compose((n, statements) in statement_batch(3)) {
        let mut uf = ExtendedUnionFind::new(n, RelationTable::cyclic(3));
        for (kind, x, y) in statements {
            uf.relate(RelationKind(kind), x, y).unwrap();
        }

        for x in 0..n {
            for y in 0..n {
                for z in 0..n {
                    for s1 in 0..3 {
                        for s2 in 0..3 {
                            if uf.established(RelationKind(s1), x, y).unwrap()
                                && uf.established(RelationKind(s2), y, z).unwrap()
                            {
                                let composed = RelationKind((s1 + s2) % 3);
                                prop_assert!(uf.established(composed, x, z).unwrap());
                            }
                        }
                    }
                }
            }
        }
    }

    // "Same class" is symmetric in its arguments.
    #[test]
    fn same_class_is_symmetric((n, statements) in statement_batch(3)) {
        let mut uf = ExtendedUnionFind::new(n, RelationTable::cyclic(3));
        for (kind, x, y) in statements {
            uf.relate(RelationKind(kind), x, y).unwrap();
        }
        for x in 0..n {
            for y in 0..n {
                prop_assert_eq!(
                    uf.established(RelationKind(0), x, y).unwrap(),
                    uf.established(RelationKind(0), y, x).unwrap()
                );
            }
        }
    }
}

// Ternary cyclic dominance: "1 dominates 3" forbids "3 dominates 1".
#[test]
fn dominance_cycle_contradiction() {
    let (same, dominates) = (RelationKind(0), RelationKind(1));
    let mut uf = ExtendedUnionFind::new(3, RelationTable::cyclic(3));

    assert_eq!(uf.relate(same, 0, 1).unwrap(), Verdict::Consistent);
    assert_eq!(uf.relate(dominates, 0, 2).unwrap(), Verdict::Consistent);
    assert_eq!(uf.relate(dominates, 2, 0).unwrap(), Verdict::Contradiction);

    assert_eq!(uf.contradictions(), 1);
    assert!(!uf.is_consistent());

    // The rejected statement left the established facts alone: the second
    // statement still holds, and so does its consequence through "same".
    assert!(uf.established(dominates, 0, 2).unwrap());
    assert!(uf.established(dominates, 1, 2).unwrap());
}
