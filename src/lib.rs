//! # acre-walk
//!
//! acre-walk is a traversal and region-assembly library for fixed planetary
//! cell meshes. A mesh is a static graph of adjacency-linked cells
//! ("acres", hexagonal almost everywhere, pentagonal at twelve fixed
//! points); this crate walks it with frontier-expansion algorithms and
//! incrementally assembles named subsets ("acre sets") of it.
//!
//! ## Features
//! - Compact hybrid id sets with frozen universal/empty singletons
//! - Array-backed id→record lookups shared through cheap `Arc` handles
//! - A push-back cursor protocol: pull acres with `next()`, extend the
//!   frontier with `push()`, freeze the result with `done()`
//! - Unconstrained level-by-level wavefront growth with a fixed ring of
//!   reusable wave buffers (no per-wave allocation in steady state)
//! - Predicate-filtered, priority-ordered boundary traces for watershed and
//!   contour extraction
//!
//! ## Determinism
//!
//! Boundary traces pop pending acres under a caller-supplied total order
//! with id tie-breaks; read-only replays iterate sorted by id. Wavefront
//! membership is order-independent, so results are reproducible even where
//! the drain order within a wave is not specified.
//!
//! ## Usage
//! Add `acre-walk` as a dependency in your `Cargo.toml` and enable features
//! as needed:
//!
//! ```toml
//! [dependencies]
//! acre-walk = "0.4"
//! # Optional features:
//! # features = ["check-invariants"]
//! ```
//!
//! The traversal engine performs no I/O and no locking; a navigator is
//! exclusively owned by its caller until `done()` consumes it.

// Re-export our major subsystems:
pub mod debug_invariants;
pub mod mesh;
pub mod navigate;
pub mod sets;
pub mod walk_error;

pub use debug_invariants::DebugInvariants;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::debug_invariants::DebugInvariants;
    pub use crate::mesh::acre::{Acre, AcreId, MAX_NEIGHBORS};
    pub use crate::mesh::id_set::AcreIdSet;
    pub use crate::mesh::lookup::{AcreLookup, ArrayLookup, SharedLookup};
    pub use crate::navigate::basic::BasicAcreSetNavigator;
    pub use crate::navigate::boundary::{
        AcreOrdering, BoundaryAcreSetBuilder, NeighborPredicate, StandardOrdering,
        StandardPredicate,
    };
    pub use crate::navigate::navigator::{AcreNavigator, Neighbors};
    pub use crate::navigate::set_builder::AcreSetBuilder;
    pub use crate::sets::acre_set::{AcreSet, InMemoryAcreSet};
    pub use crate::sets::all_acres::AllAcresSet;
    pub use crate::walk_error::AcreWalkError;
}
