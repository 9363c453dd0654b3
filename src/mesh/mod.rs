//! The static world: cell identifiers, cell records, id sets, and the
//! read-only lookups that resolve one into the other.
//!
//! Nothing in this module walks the mesh; it only represents it. The
//! traversal engine lives in [`crate::navigate`].

pub mod acre;
pub mod id_set;
pub mod lookup;

pub use acre::{Acre, AcreId, MAX_NEIGHBORS};
pub use id_set::{AcreIdIter, AcreIdSet};
pub use lookup::{AcreLookup, ArrayLookup, SharedLookup, resolve};
