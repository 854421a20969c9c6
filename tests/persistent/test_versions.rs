use proptest::{prop_assert_eq, proptest};

use versioned_union_find::persistent::{PersistentUnionFind, VersionId};

use super::strategy::version_batch;

/// The full same-set relation of one version, as a pair matrix.
fn relation(uf: &PersistentUnionFind, v: VersionId) -> Vec<bool> {
    let n = uf.len();
    let mut pairs = Vec::with_capacity(n * n);
    for x in 0..n {
        for y in 0..n {
            pairs.push(uf.same_set(v, x, y).unwrap());
        }
    }
    pairs
}

proptest! {
    // Deriving versions, by union or branch, never disturbs any version
    // that already exists: its same-set relation stays what it was at
    // creation time.
    #[test]
    fn versions_are_independent((n, steps) in version_batch()) {
        let mut uf = PersistentUnionFind::new(n);
        let mut snapshots = vec![(VersionId(0), relation(&uf, VersionId(0)))];

        for (selector, x, y) in steps {
            let source = snapshots[selector % snapshots.len()].0;
            let derived = if selector % 4 == 3 {
                uf.branch(source).unwrap()
            } else {
                uf.union(source, x, y).unwrap()
            };
            snapshots.push((derived, relation(&uf, derived)));
        }

        for (version, snapshot) in &snapshots {
            prop_assert_eq!(&relation(&uf, *version), snapshot);
        }
    }

    // A branched version answers exactly as its source does.
    #[test]
    fn branch_aliases_its_source((n, steps) in version_batch()) {
        let mut uf = PersistentUnionFind::new(n);
        let mut versions = vec![VersionId(0)];

        for (selector, x, y) in steps {
            let source = versions[selector % versions.len()];
            versions.push(uf.union(source, x, y).unwrap());
        }

        for &source in &versions {
            let alias = uf.branch(source).unwrap();
            prop_assert_eq!(relation(&uf, alias), relation(&uf, source));
        }
    }

    // In every version, the size recorded at a root equals the number of
    // elements that resolve to it.
    #[test]
    fn sizes_count_members((n, steps) in version_batch()) {
        let mut uf = PersistentUnionFind::new(n);
        let mut versions = vec![VersionId(0)];

        for (selector, x, y) in steps {
            let source = versions[selector % versions.len()];
            versions.push(uf.union(source, x, y).unwrap());
        }

        for &version in &versions {
            for x in 0..n {
                let root = uf.find(version, x).unwrap();
                let members = (0..n)
                    .filter(|&y| uf.find(version, y).unwrap() == root)
                    .count();
                prop_assert_eq!(uf.size_of(version, x).unwrap(), members);
            }
        }
    }
}

// Five elements; merge {0,1}, then {2,3} on top, then branch the middle
// version. Each lineage sees only its own merges.
#[test]
fn branching_scenario() {
    let mut uf = PersistentUnionFind::new(5);
    let v0 = VersionId(0);

    let v1 = uf.union(v0, 0, 1).unwrap();
    let v2 = uf.union(v1, 2, 3).unwrap();
    let v3 = uf.branch(v1).unwrap();

    assert!(!uf.same_set(v2, 0, 2).unwrap());
    assert!(uf.same_set(v1, 0, 1).unwrap());
    assert!(!uf.same_set(v3, 2, 3).unwrap());
    assert!(uf.same_set(v2, 2, 3).unwrap());
    assert!(!uf.same_set(v0, 0, 1).unwrap());
}
