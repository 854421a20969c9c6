//! # Versioned Union-Find
//!
//! Disjoint-set (union-find) structures that keep their history: merge
//! elements into sets while retaining the ability to inspect, branch, or
//! roll back to any earlier state of the merge sequence.
//!
//! Three variants share one [union-find core](crate::store):
//!
//! - [`PersistentUnionFind`](crate::persistent::PersistentUnionFind) —
//!   *branching-persistent*: every `union` derives a fresh, immutable
//!   version; any version can be queried or branched from forever after.
//!   Versions form a tree:
//!
//! ```text
//!               union(v0, 0, 1)      union(v1, 2, 3)
//!          v0 ─────────────────► v1 ─────────────────► v2
//!                                 │
//!                                 │ branch(v1)
//!                                 ▼
//!                                 v3
//! ```
//!
//! - [`UndoUnionFind`](crate::undo::UndoUnionFind) — *linearly-undoable*:
//!   merges are journaled and popped in strict LIFO order, restoring the
//!   exact prior state. Built for depth-first backtracking.
//!
//! - [`ExtendedUnionFind`](crate::extended::ExtendedUnionFind) —
//!   *extended-domain*: each logical element is represented by `k` virtual
//!   copies, so richer relations (such as ternary cyclic dominance) reduce
//!   to plain same-set queries against a permutation table.
//!
//! None of the variants use path compression. That is an invariant, not a
//! missed optimization: compressing chains in place would leak writes into
//! versions sharing the same nodes, and would make the undo journal
//! insufficient for exact rollback. Union-by-size alone bounds chain length
//! at O(log n).
//!
//! # Example
//!
//! ```rust
//! use versioned_union_find::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let mut uf = PersistentUnionFind::new(5);
//! let v0 = VersionId(0);
//!
//! let v1 = uf.union(v0, 0, 1)?; // {0,1} joined in v1
//! let v2 = uf.union(v1, 2, 3)?; // {2,3} joined on top of v1
//! let v3 = uf.branch(v1)?;      // v3 is an O(1) alias of v1
//!
//! assert!(uf.same_set(v1, 0, 1)?);
//! assert!(uf.same_set(v2, 2, 3)?);
//! // v3 branched *before* 2 and 3 were merged:
//! assert!(!uf.same_set(v3, 2, 3)?);
//! // ...and v0 still sees five singletons:
//! assert_eq!(uf.size_of(v0, 0)?, 1);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod store;

pub mod persistent;

pub mod extended;
pub mod undo;

pub mod ops;

pub mod prelude {
    //! One-stop imports for the three union-find variants.
    pub use crate::error::{Error, Result};
    pub use crate::extended::{ExtendedUnionFind, RelationKind, RelationTable, Verdict};
    pub use crate::persistent::{PersistentArray, PersistentUnionFind, VersionId};
    pub use crate::undo::{Mark, UndoUnionFind};
}
