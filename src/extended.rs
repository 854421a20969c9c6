//! Extended-domain union-find: relations beyond equivalence.
//!
//! Each logical element `x` is represented by `k` virtual copies
//! `x, x+n, ..., x+(k-1)n` inside one flat disjoint-set of `k*n` elements.
//! A relation kind is a permutation `perm` of the copies: asserting it
//! unions copy `i` of `x` with copy `perm[i]` of `y` for every `i`. Richer
//! relations then reduce to plain same-set queries.
//!
//! With three copies and the cyclic table, shift 0 says "same class" and
//! shift 1 says "x dominates y" in a rock-paper-scissors cycle: the
//! classic food-chain encoding.

use crate::error::{Error, Result};
use crate::store::{same_set, unite, FlatStore};

/// Outcome of a [`relate`](ExtendedUnionFind::relate) statement.
///
/// A contradiction is an expected business outcome, tallied and returned as
/// a value; processing continues with subsequent statements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Verdict {
    /// The statement is compatible with everything established so far; its
    /// unions have been applied.
    Consistent,
    /// The statement conflicts with an established relation; nothing was
    /// applied.
    Contradiction,
}

/// Index of a relation kind in a [`RelationTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RelationKind(pub usize);

/// An explicit, inspectable table of relation kinds.
///
/// Kind `k` relates `x` to `y` by aligning copy `i` of `x` with copy
/// `perms[k][i]` of `y`; every kind must be a permutation of `0..copies`,
/// which [`RelationTable::new`] validates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationTable {
    copies: usize,
    perms: Vec<Vec<usize>>,
}

impl RelationTable {
    /// Build a table from raw permutations, validating each one.
    ///
    /// Rejects `copies == 0`, rows of the wrong length, and rows that are
    /// not permutations of `0..copies`.
    pub fn new(copies: usize, perms: Vec<Vec<usize>>) -> Result<Self> {
        if copies == 0 {
            return Err(Error::OutOfRange { index: 0, len: 1 });
        }
        for perm in &perms {
            if perm.len() != copies {
                return Err(Error::OutOfRange {
                    index: perm.len(),
                    len: copies,
                });
            }
            let mut seen = vec![false; copies];
            for &target in perm {
                if target >= copies || seen[target] {
                    return Err(Error::OutOfRange {
                        index: target,
                        len: copies,
                    });
                }
                seen[target] = true;
            }
        }
        Ok(Self { copies, perms })
    }

    /// The cyclic-shift family over `copies` virtual copies: kind `s`
    /// aligns copy `i` of `x` with copy `(i + s) % copies` of `y`.
    ///
    /// Shift 0 is "same class". With `copies == 3`, shift 1 is the
    /// "dominates" edge of a ternary cycle and shift 2 its converse.
    ///
    /// # Panics
    ///
    /// If `copies == 0`.
    pub fn cyclic(copies: usize) -> Self {
        assert!(copies > 0, "a relation table needs at least one copy");
        let perms = (0..copies)
            .map(|shift| (0..copies).map(|i| (i + shift) % copies).collect())
            .collect();
        Self { copies, perms }
    }

    /// Virtual copies per element.
    pub fn copies(&self) -> usize {
        self.copies
    }

    /// Number of relation kinds.
    pub fn kinds(&self) -> usize {
        self.perms.len()
    }

    /// The permutation for `kind`, if it exists.
    pub fn perm(&self, kind: RelationKind) -> Option<&[usize]> {
        self.perms.get(kind.0).map(Vec::as_slice)
    }
}

/// A mapping layer encoding relational statements over a plain,
/// compression-free, union-by-size disjoint-set sized `copies * n`.
///
/// ```rust
/// use versioned_union_find::extended::{ExtendedUnionFind, RelationKind, RelationTable, Verdict};
///
/// # fn main() -> versioned_union_find::error::Result<()> {
/// let (same, dominates) = (RelationKind(0), RelationKind(1));
/// let mut uf = ExtendedUnionFind::new(3, RelationTable::cyclic(3));
///
/// assert_eq!(uf.relate(same, 0, 1)?, Verdict::Consistent);
/// assert_eq!(uf.relate(dominates, 0, 2)?, Verdict::Consistent);
/// // 0 dominates 2, so "2 dominates 0" must be rejected:
/// assert_eq!(uf.relate(dominates, 2, 0)?, Verdict::Contradiction);
/// assert!(!uf.is_consistent());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ExtendedUnionFind {
    classes: FlatStore<u32>,
    table: RelationTable,
    len: usize,
    contradictions: usize,
}

impl ExtendedUnionFind {
    /// `n` logical elements, no relations established.
    pub fn new(n: usize, table: RelationTable) -> Self {
        Self {
            classes: FlatStore::new(table.copies() * n),
            table,
            len: n,
            contradictions: 0,
        }
    }

    /// Number of logical elements (fixed at construction).
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The relation table this layer interprets statements against.
    pub fn table(&self) -> &RelationTable {
        &self.table
    }

    /// Statements rejected so far.
    pub fn contradictions(&self) -> usize {
        self.contradictions
    }

    /// `true` while no statement has been rejected.
    pub fn is_consistent(&self) -> bool {
        self.contradictions == 0
    }

    fn copy_of(&self, x: usize, copy: usize) -> usize {
        x + copy * self.len
    }

    fn check_element(&self, x: usize) -> Result<()> {
        if x < self.len {
            Ok(())
        } else {
            Err(Error::OutOfRange {
                index: x,
                len: self.len,
            })
        }
    }

    fn check_kind(&self, kind: RelationKind) -> Result<&[usize]> {
        self.table
            .perm(kind)
            .ok_or(Error::OutOfRange {
                index: kind.0,
                len: self.table.kinds(),
            })
    }

    /// Whether the facts established so far already force `kind` between
    /// `x` and `y`.
    pub fn established(&self, kind: RelationKind, x: usize, y: usize) -> Result<bool> {
        let perm = self.check_kind(kind)?;
        self.check_element(x)?;
        self.check_element(y)?;
        Ok(same_set(
            &self.classes,
            self.copy_of(x, 0),
            self.copy_of(y, perm[0]),
        ))
    }

    /// Assert `kind` between `x` and `y`.
    ///
    /// If any established fact links a copy of `x` to a copy of `y` under a
    /// different alignment than `kind` prescribes, the statement is
    /// rejected: the verdict is [`Verdict::Contradiction`], the tally
    /// increments, and **no** union is applied. Otherwise all `copies`
    /// unions are applied (re-asserting an established relation is a
    /// harmless no-op).
    pub fn relate(&mut self, kind: RelationKind, x: usize, y: usize) -> Result<Verdict> {
        let perm = self.check_kind(kind)?.to_vec();
        self.check_element(x)?;
        self.check_element(y)?;

        for i in 0..self.table.copies() {
            for j in 0..self.table.copies() {
                if j == perm[i] {
                    continue;
                }
                if same_set(&self.classes, self.copy_of(x, i), self.copy_of(y, j)) {
                    self.contradictions += 1;
                    return Ok(Verdict::Contradiction);
                }
            }
        }

        for (i, &j) in perm.iter().enumerate() {
            let cx = self.copy_of(x, i);
            let cy = self.copy_of(y, j);
            unite(&mut self.classes, cx, cy);
        }
        Ok(Verdict::Consistent)
    }
}
