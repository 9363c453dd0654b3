//! AcreWalkError: Unified error type for acre-walk public APIs
//!
//! This error type is used throughout the acre-walk library to provide robust,
//! non-panicking error handling for all public APIs. Every variant is a
//! programmer-error class: callers are expected to fix the call site, not
//! retry.

use crate::mesh::acre::AcreId;
use thiserror::Error;

/// Unified error type for acre-walk operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AcreWalkError {
    /// `next()` was called on an exhausted navigator.
    #[error("no more acres remain in this traversal")]
    NoMoreAcres,
    /// An operation that needs a current acre was called before `next()`,
    /// or after the current acre was removed.
    #[error("no current acre: `{0}` requires a preceding call to next()")]
    NoCurrentAcre(&'static str),
    /// Mutation of a frozen id set (`EMPTY`, `all_acres`, array views).
    #[error("read-only id set rejects `{0}`")]
    ReadOnlyIdSet(&'static str),
    /// Mutation of a read-only acre set (e.g. `AllAcresSet`).
    #[error("read-only acre set rejects `{0}`")]
    ReadOnlyAcreSet(&'static str),
    /// The navigator kind does not support the operation (e.g. `push` on a
    /// read-only navigator, `reset` on a boundary trace).
    #[error("unsupported navigator operation: {0}")]
    UnsupportedNavigatorOperation(&'static str),
    /// A boundary trace was seeded with an acre outside its bounds.
    #[error("seed acre {0} is not within the traversal bounds")]
    SeedOutsideBounds(AcreId),
    /// Internal bookkeeping drifted out of its documented shape.
    /// Only produced by [`validate_invariants`](crate::debug_invariants::DebugInvariants::validate_invariants).
    #[error("invariant violated: {0}")]
    InvariantViolated(&'static str),
}
