//! The traversal engine: navigators that walk the mesh and accumulate
//! acre sets.
//!
//! All navigators share the [`AcreNavigator`](navigator::AcreNavigator)
//! contract; they differ in how (and whether) the frontier grows.

pub mod basic;
pub mod boundary;
pub mod navigator;
pub mod set_builder;

pub use basic::BasicAcreSetNavigator;
pub use boundary::{
    AcreOrdering, BoundaryAcreSetBuilder, NeighborPredicate, StandardOrdering, StandardPredicate,
};
pub use navigator::{AcreNavigator, Neighbors};
pub use set_builder::AcreSetBuilder;
