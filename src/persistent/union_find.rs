//! The branching-persistent variant.

use crate::error::{Error, Result};
use crate::store::{find_root, same_set, unite, SetStore, SetStoreMut};

use super::array::PersistentArray;
use super::version::{Generation, VersionId, VersionTable};

/// Union-find where every update derives a fresh, immutable version.
///
/// `union` costs O(log² n): union-by-size bounds parent chains at O(log n)
/// links, and each link is a point read of a path-copied array. A `union`
/// allocates O(log n) nodes; `branch` allocates none. There is no path
/// compression, since compressed chains would be written into nodes shared
/// with other versions.
///
/// ```rust
/// use versioned_union_find::persistent::{PersistentUnionFind, VersionId};
///
/// # fn main() -> versioned_union_find::error::Result<()> {
/// let mut uf = PersistentUnionFind::new(3);
/// let v1 = uf.union(VersionId(0), 0, 1)?;
/// assert!(uf.same_set(v1, 0, 1)?);
/// assert!(!uf.same_set(VersionId(0), 0, 1)?);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct PersistentUnionFind {
    parents: PersistentArray<u32>,
    sizes: PersistentArray<u32>,
    versions: VersionTable,
}

/// Read-only view of one generation, adapting it to the union-find core.
struct VersionView<'a> {
    parents: &'a PersistentArray<u32>,
    sizes: &'a PersistentArray<u32>,
    generation: Generation,
}

impl SetStore for VersionView<'_> {
    type Count = u32;

    fn len(&self) -> usize {
        self.parents.len()
    }

    fn parent_of(&self, x: usize) -> usize {
        *self.parents.get(self.generation.parent, x) as usize
    }

    fn size_of(&self, x: usize) -> u32 {
        *self.sizes.get(self.generation.size, x)
    }
}

/// Mutable adapter for deriving one new generation: `link` path-copies both
/// arrays and advances the local roots. The generation under construction is
/// only reachable through this adapter until it is pushed into the table, so
/// no other version can observe an intermediate state.
struct VersionStore<'a> {
    parents: &'a mut PersistentArray<u32>,
    sizes: &'a mut PersistentArray<u32>,
    generation: Generation,
}

impl SetStore for VersionStore<'_> {
    type Count = u32;

    fn len(&self) -> usize {
        self.parents.len()
    }

    fn parent_of(&self, x: usize) -> usize {
        *self.parents.get(self.generation.parent, x) as usize
    }

    fn size_of(&self, x: usize) -> u32 {
        *self.sizes.get(self.generation.size, x)
    }
}

impl SetStoreMut for VersionStore<'_> {
    fn link(&mut self, loser: usize, winner: usize, merged: u32) {
        self.generation.parent = self
            .parents
            .set(self.generation.parent, loser, winner as u32);
        self.generation.size = self.sizes.set(self.generation.size, winner, merged);
    }
}

impl PersistentUnionFind {
    /// `n` singleton elements at version 0.
    pub fn new(n: usize) -> Self {
        assert!(
            u32::try_from(n).is_ok(),
            "element count exceeds u32 range"
        );
        let (parents, parent_root) = PersistentArray::from_fn(n, |i| i as u32);
        let (sizes, size_root) = PersistentArray::from_fn(n, |_| 1);
        let versions = VersionTable::new(Generation {
            parent: parent_root,
            size: size_root,
            predecessor: None,
        });
        Self {
            parents,
            sizes,
            versions,
        }
    }

    /// Number of elements (fixed at construction).
    pub fn len(&self) -> usize {
        self.parents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }

    /// Number of versions created so far (including version 0).
    pub fn version_count(&self) -> usize {
        self.versions.len()
    }

    /// The version `v` was derived from; `None` for version 0.
    pub fn parent_version(&self, v: VersionId) -> Result<Option<VersionId>> {
        Ok(self.generation(v)?.predecessor)
    }

    fn generation(&self, v: VersionId) -> Result<Generation> {
        self.versions.get(v).ok_or(Error::OutOfRange {
            index: v.0,
            len: self.versions.len(),
        })
    }

    fn check_element(&self, x: usize) -> Result<()> {
        if x < self.len() {
            Ok(())
        } else {
            Err(Error::OutOfRange {
                index: x,
                len: self.len(),
            })
        }
    }

    fn view(&self, v: VersionId) -> Result<VersionView<'_>> {
        Ok(VersionView {
            parents: &self.parents,
            sizes: &self.sizes,
            generation: self.generation(v)?,
        })
    }

    /// Representative of `x`'s set under version `v`.
    pub fn find(&self, v: VersionId, x: usize) -> Result<usize> {
        self.check_element(x)?;
        let view = self.view(v)?;
        Ok(find_root(&view, x))
    }

    /// Whether `x` and `y` share a set under version `v`.
    pub fn same_set(&self, v: VersionId, x: usize, y: usize) -> Result<bool> {
        self.check_element(x)?;
        self.check_element(y)?;
        let view = self.view(v)?;
        Ok(same_set(&view, x, y))
    }

    /// Cardinality of `x`'s set under version `v`.
    pub fn size_of(&self, v: VersionId, x: usize) -> Result<usize> {
        self.check_element(x)?;
        let view = self.view(v)?;
        let root = find_root(&view, x);
        Ok(view.size_of(root) as usize)
    }

    /// Derive a new version from `from` with the sets of `x` and `y` merged.
    ///
    /// Always yields a fresh version id. If `x` and `y` were already joined
    /// under `from`, the derived version shares both roots with `from` and
    /// no nodes are allocated; re-running a union is a detected no-op, not
    /// an error.
    pub fn union(&mut self, from: VersionId, x: usize, y: usize) -> Result<VersionId> {
        self.check_element(x)?;
        self.check_element(y)?;
        let source = self.generation(from)?;
        let mut store = VersionStore {
            parents: &mut self.parents,
            sizes: &mut self.sizes,
            generation: Generation {
                predecessor: Some(from),
                ..source
            },
        };
        unite(&mut store, x, y);
        let generation = store.generation;
        Ok(self.versions.push(generation))
    }

    /// Derive a new version aliasing `from`: an O(1) copy.
    ///
    /// Queries on the new version answer exactly as `from` does, until the
    /// two lineages diverge through later `union`s.
    pub fn branch(&mut self, from: VersionId) -> Result<VersionId> {
        let source = self.generation(from)?;
        Ok(self.versions.push(Generation {
            predecessor: Some(from),
            ..source
        }))
    }
}
