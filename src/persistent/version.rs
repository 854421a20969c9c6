//! Version bookkeeping for the persistent union-find.

use super::array::NodeId;

/// Identifier of one version of a
/// [`PersistentUnionFind`](super::PersistentUnionFind).
///
/// Version 0 is the all-singletons state; every later version is derived
/// from exactly one predecessor by `union` or `branch`, so versions form a
/// tree rooted at 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VersionId(pub usize);

/// One generation: the pair of array roots giving a version its parent and
/// size views.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Generation {
    pub parent: NodeId,
    pub size: NodeId,
    /// The version this one was derived from; `None` only for version 0.
    pub predecessor: Option<VersionId>,
}

/// Append-only map from [`VersionId`] to [`Generation`].
///
/// Slots are pushed by `union`/`branch` and never rewritten afterwards;
/// a version becomes immutable the moment its creating call returns.
#[derive(Debug, Clone)]
pub(crate) struct VersionTable {
    slots: Vec<Generation>,
}

impl VersionTable {
    pub fn new(initial: Generation) -> Self {
        Self {
            slots: vec![initial],
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn get(&self, v: VersionId) -> Option<Generation> {
        self.slots.get(v.0).copied()
    }

    pub fn push(&mut self, generation: Generation) -> VersionId {
        let id = VersionId(self.slots.len());
        self.slots.push(generation);
        id
    }
}
