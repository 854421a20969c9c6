//! Branching-persistent union-find.
//!
//! Built from two parallel [`PersistentArray`]s (`parent` and `size`) and an
//! append-only [version table](version). Deriving a version costs O(log n)
//! fresh nodes (a `union`) or none at all (a `branch`); everything else is
//! shared, so any number of versions stay queryable at once.

pub mod array;
pub mod union_find;
pub mod version;

pub use array::{NodeId, PersistentArray};
pub use union_find::PersistentUnionFind;
pub use version::VersionId;
