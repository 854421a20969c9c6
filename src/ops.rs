//! The external operation vocabulary.
//!
//! This is the seam an outer protocol (a parser, a recorded trace, a fuzzer)
//! feeds. Element ids here are **1-indexed** in `[1, n]`, as they arrive on
//! the wire; `apply_*` validates and translates them before touching a
//! structure, so a malformed operation is rejected with no side effect.
//! Version numbers and relation kinds are the crate's own 0-based ids.
//!
//! With the `serde` feature enabled the op and outcome types serialize, so
//! recorded operation sequences round-trip through JSON.

use crate::error::{Error, Result};
use crate::extended::{ExtendedUnionFind, RelationKind, Verdict};
use crate::persistent::{PersistentUnionFind, VersionId};
use crate::undo::UndoUnionFind;

/// Operations accepted by the branching-persistent variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PersistentOp {
    /// Derive a new version from `version` by merging the sets of `x`, `y`.
    Union { version: usize, x: usize, y: usize },
    /// Derive a new version aliasing `source`.
    Copy { source: usize },
    /// Same-set test under `version`.
    Query { version: usize, x: usize, y: usize },
}

/// What a [`PersistentOp`] produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PersistentOutcome {
    /// The version derived by a `Union` or `Copy`.
    Version(usize),
    /// The answer to a `Query`.
    Connected(bool),
}

/// Operations accepted by the undoable variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UndoOp {
    /// Merge the sets of `x` and `y`.
    Union { x: usize, y: usize },
    /// Revert the most recent effective merge.
    Undo,
}

/// What an [`UndoOp`] produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UndoOutcome {
    /// Whether the `Union` actually merged two sets.
    Merged(bool),
    /// The `Undo` was applied.
    Undone,
}

/// Operations accepted by the extended-domain variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExtendedOp {
    /// Assert relation `kind` between `x` and `y`.
    Relate { kind: usize, x: usize, y: usize },
}

/// Translate a 1-indexed wire id into an internal 0-based element id.
fn element(x: usize, len: usize) -> Result<usize> {
    if (1..=len).contains(&x) {
        Ok(x - 1)
    } else {
        Err(Error::OutOfRange { index: x, len })
    }
}

/// Apply one operation to the persistent variant.
pub fn apply_persistent(
    uf: &mut PersistentUnionFind,
    op: PersistentOp,
) -> Result<PersistentOutcome> {
    match op {
        PersistentOp::Union { version, x, y } => {
            let x = element(x, uf.len())?;
            let y = element(y, uf.len())?;
            let derived = uf.union(VersionId(version), x, y)?;
            Ok(PersistentOutcome::Version(derived.0))
        }
        PersistentOp::Copy { source } => {
            let derived = uf.branch(VersionId(source))?;
            Ok(PersistentOutcome::Version(derived.0))
        }
        PersistentOp::Query { version, x, y } => {
            let x = element(x, uf.len())?;
            let y = element(y, uf.len())?;
            let connected = uf.same_set(VersionId(version), x, y)?;
            Ok(PersistentOutcome::Connected(connected))
        }
    }
}

/// Apply one operation to the undoable variant.
pub fn apply_undo(uf: &mut UndoUnionFind, op: UndoOp) -> Result<UndoOutcome> {
    match op {
        UndoOp::Union { x, y } => {
            let x = element(x, uf.len())?;
            let y = element(y, uf.len())?;
            Ok(UndoOutcome::Merged(uf.union(x, y)?))
        }
        UndoOp::Undo => {
            uf.undo()?;
            Ok(UndoOutcome::Undone)
        }
    }
}

/// Apply one operation to the extended-domain variant.
pub fn apply_extended(uf: &mut ExtendedUnionFind, op: ExtendedOp) -> Result<Verdict> {
    match op {
        ExtendedOp::Relate { kind, x, y } => {
            let x = element(x, uf.len())?;
            let y = element(y, uf.len())?;
            uf.relate(RelationKind(kind), x, y)
        }
    }
}

/// Drive a whole operation sequence, collecting outcomes in order.
///
/// Stops at the first structural error (out-of-range ids, undo underflow);
/// contradictions are outcomes, not errors, so an extended run continues
/// past them.
pub fn run_persistent(
    uf: &mut PersistentUnionFind,
    ops: &[PersistentOp],
) -> Result<Vec<PersistentOutcome>> {
    ops.iter().map(|&op| apply_persistent(uf, op)).collect()
}

pub fn run_undo(uf: &mut UndoUnionFind, ops: &[UndoOp]) -> Result<Vec<UndoOutcome>> {
    ops.iter().map(|&op| apply_undo(uf, op)).collect()
}

pub fn run_extended(uf: &mut ExtendedUnionFind, ops: &[ExtendedOp]) -> Result<Vec<Verdict>> {
    ops.iter().map(|&op| apply_extended(uf, op)).collect()
}
