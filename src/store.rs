//! The union-find core, written once and shared by every variant.
//!
//! [`SetStore`] is the seam between the find/union algorithm and a
//! versioning policy. The transient [`FlatStore`] backs the undoable and
//! extended-domain variants; the persistent variant adapts one generation of
//! its path-copied arrays to the same traits, so [`find_root`] and [`unite`]
//! never know which policy they are driving.
//!
//! The algorithms here never apply path compression. Shortening chains in
//! place would write into nodes shared with other versions, and would make a
//! [`Merge`] record insufficient to reverse a union exactly. Union-by-size
//! alone keeps chains O(log n) deep.

use core::ops::{Add, Sub};
use num_traits::One;

/// Bounds required of a set-cardinality counter.
///
/// The flat store counts in `usize`; persistent generations store `u32`
/// leaves. The blanket impl covers both.
pub trait Counter:
    Copy + Ord + Add<Output = Self> + Sub<Output = Self> + One + core::fmt::Debug
{
}

impl<T> Counter for T where
    T: Copy + Ord + Add<Output = T> + Sub<Output = T> + One + core::fmt::Debug
{
}

/// Read access to the `parent` and `size` arrays of one disjoint-set state.
pub trait SetStore {
    /// Cardinality counter stored at roots.
    type Count: Counter;

    /// Number of elements.
    fn len(&self) -> usize;

    /// Parent link of `x`; roots satisfy `parent_of(x) == x`.
    fn parent_of(&self, x: usize) -> usize;

    /// Size recorded at `x`. Only meaningful when `x` is a root.
    fn size_of(&self, x: usize) -> Self::Count;
}

/// A [`SetStore`] that can apply a merge.
pub trait SetStoreMut: SetStore {
    /// Attach root `loser` under root `winner`, recording the merged size
    /// at `winner`. How the write is realized (in place, or by deriving a
    /// new generation) is the implementation's versioning policy.
    fn link(&mut self, loser: usize, winner: usize, merged: Self::Count);
}

/// Record of one effective merge: which root won and which became its child.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Merge {
    pub winner: usize,
    pub loser: usize,
}

/// Walk parent links from `x` up to its root. Iterative, read-only, and
/// compression-free.
pub fn find_root<S: SetStore + ?Sized>(store: &S, mut x: usize) -> usize {
    loop {
        let parent = store.parent_of(x);
        if parent == x {
            return x;
        }
        x = parent;
    }
}

/// `true` iff `x` and `y` currently share a root.
pub fn same_set<S: SetStore + ?Sized>(store: &S, x: usize, y: usize) -> bool {
    find_root(store, x) == find_root(store, y)
}

/// Union by size: attach the smaller set's root under the larger's.
///
/// Returns the [`Merge`] that happened, or `None` if `x` and `y` were
/// already in one set, in which case nothing was written.
pub fn unite<S: SetStoreMut + ?Sized>(store: &mut S, x: usize, y: usize) -> Option<Merge> {
    let a = find_root(store, x);
    let b = find_root(store, y);
    if a == b {
        return None;
    }
    // Ties keep `a` as winner.
    let (winner, loser) = if store.size_of(a) < store.size_of(b) {
        (b, a)
    } else {
        (a, b)
    };
    let merged = store.size_of(winner) + store.size_of(loser);
    store.link(loser, winner, merged);
    Some(Merge { winner, loser })
}

/// Transient parent/size arrays: the "no versioning" policy.
#[derive(Debug, Clone)]
pub struct FlatStore<C = usize> {
    parent: Vec<usize>,
    size: Vec<C>,
    components: usize,
}

impl<C: Counter> FlatStore<C> {
    /// `n` singleton sets.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![C::one(); n],
            components: n,
        }
    }

    /// Number of disjoint sets.
    pub fn components(&self) -> usize {
        self.components
    }

    /// Detach `loser` from `winner`, reversing a [`Merge`] exactly.
    ///
    /// `size[loser]` still holds the size the set had when it merged:
    /// nothing below a non-root changes while it stays merged.
    pub(crate) fn unlink(&mut self, merge: Merge) {
        debug_assert_eq!(self.parent[merge.loser], merge.winner);
        self.parent[merge.loser] = merge.loser;
        self.size[merge.winner] = self.size[merge.winner] - self.size[merge.loser];
        self.components += 1;
    }
}

impl<C: Counter> SetStore for FlatStore<C> {
    type Count = C;

    fn len(&self) -> usize {
        self.parent.len()
    }

    fn parent_of(&self, x: usize) -> usize {
        self.parent[x]
    }

    fn size_of(&self, x: usize) -> C {
        self.size[x]
    }
}

impl<C: Counter> SetStoreMut for FlatStore<C> {
    fn link(&mut self, loser: usize, winner: usize, merged: C) {
        debug_assert_ne!(loser, winner);
        self.parent[loser] = winner;
        self.size[winner] = merged;
        self.components -= 1;
    }
}
