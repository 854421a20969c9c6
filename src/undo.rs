//! Linearly-undoable union-find.
//!
//! Merges are journaled; popping the journal restores the exact prior
//! state. The intended discipline is stack-shaped: a depth-first traversal
//! performs zero or one `union` when entering a node and calls [`undo`]
//! exactly when that `union` returned `true`, when leaving. [`mark`] and
//! [`rewind`] package that discipline for whole subtrees.
//!
//! [`undo`]: UndoUnionFind::undo
//! [`mark`]: UndoUnionFind::mark
//! [`rewind`]: UndoUnionFind::rewind

use crate::error::{Error, Result};
use crate::store::{find_root, same_set, unite, FlatStore, Merge, SetStore};

use core::fmt;

/// Journal position returned by [`UndoUnionFind::mark`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mark(usize);

/// Union-find whose effective merges can be unwound in LIFO order.
///
/// `find` walks without path compression, so a popped [`Merge`] record
/// restores exactly the links the union wrote and nothing else.
///
/// ```rust
/// use versioned_union_find::undo::UndoUnionFind;
///
/// # fn main() -> versioned_union_find::error::Result<()> {
/// let mut uf = UndoUnionFind::new(4);
/// let mark = uf.mark();
///
/// assert!(uf.union(0, 1)?);
/// assert!(uf.union(2, 3)?);
/// assert!(!uf.union(1, 0)?); // already joined: no journal entry
///
/// uf.rewind(mark)?; // pops both merges
/// assert_eq!(uf.components(), 4);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct UndoUnionFind {
    store: FlatStore<usize>,
    journal: Vec<Merge>,
}

impl UndoUnionFind {
    /// `n` singleton sets, empty journal.
    pub fn new(n: usize) -> Self {
        Self {
            store: FlatStore::new(n),
            journal: Vec::new(),
        }
    }

    /// Number of elements (fixed at construction).
    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.len() == 0
    }

    /// Number of disjoint sets.
    pub fn components(&self) -> usize {
        self.store.components()
    }

    /// Journal depth: the number of merges that would have to be undone to
    /// reach the initial state.
    pub fn active_merges(&self) -> usize {
        self.journal.len()
    }

    fn check(&self, x: usize) -> Result<()> {
        if x < self.len() {
            Ok(())
        } else {
            Err(Error::OutOfRange {
                index: x,
                len: self.len(),
            })
        }
    }

    /// Representative of `x`'s set.
    pub fn find(&self, x: usize) -> Result<usize> {
        self.check(x)?;
        Ok(find_root(&self.store, x))
    }

    /// Whether `x` and `y` share a set.
    pub fn same_set(&self, x: usize, y: usize) -> Result<bool> {
        self.check(x)?;
        self.check(y)?;
        Ok(same_set(&self.store, x, y))
    }

    /// Cardinality of `x`'s set.
    pub fn size_of(&self, x: usize) -> Result<usize> {
        self.check(x)?;
        let root = find_root(&self.store, x);
        Ok(self.store.size_of(root))
    }

    /// Merge the sets of `x` and `y`.
    ///
    /// Returns `true` iff two distinct sets merged: exactly the calls that
    /// push a journal record and therefore must be paired with an [`undo`].
    /// A same-set union journals nothing.
    ///
    /// [`undo`]: Self::undo
    pub fn union(&mut self, x: usize, y: usize) -> Result<bool> {
        self.check(x)?;
        self.check(y)?;
        match unite(&mut self.store, x, y) {
            Some(merge) => {
                self.journal.push(merge);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Reverse the most recent effective merge.
    ///
    /// Fails with [`Error::UndoUnderflow`] on an empty journal.
    pub fn undo(&mut self) -> Result<()> {
        let merge = self.journal.pop().ok_or(Error::UndoUnderflow)?;
        self.store.unlink(merge);
        Ok(())
    }

    /// Current journal position, for a later [`rewind`](Self::rewind).
    pub fn mark(&self) -> Mark {
        Mark(self.journal.len())
    }

    /// Undo every merge journaled after `mark`, in LIFO order.
    ///
    /// A mark from a deeper journal than the current one is a discipline
    /// violation and fails with [`Error::UndoUnderflow`].
    pub fn rewind(&mut self, mark: Mark) -> Result<()> {
        if mark.0 > self.journal.len() {
            return Err(Error::UndoUnderflow);
        }
        while self.journal.len() > mark.0 {
            self.undo()?;
        }
        Ok(())
    }
}

impl fmt::Debug for UndoUnionFind {
    /// Renders the current partition, e.g. `{{0, 1}, {2}}`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct Group<'a>(&'a [usize]);

        impl fmt::Debug for Group<'_> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_set().entries(self.0).finish()
            }
        }

        let mut groups = vec![Vec::new(); self.len()];
        for x in 0..self.len() {
            groups[find_root(&self.store, x)].push(x);
        }
        f.debug_set()
            .entries(groups.iter().filter(|g| !g.is_empty()).map(|g| Group(g)))
            .finish()
    }
}
