//! Read-only id→record resolution for the whole mesh.
//!
//! An [`AcreLookup`] turns a bare [`AcreId`] into the full [`Acre`] record.
//! The canonical backing is [`ArrayLookup`], a dense array indexed directly
//! by id: O(1), no hashing. Lookups are expected to be effectively
//! immutable for the duration of any traversal; sharing happens through
//! [`SharedLookup`] handles, so traversal clones the handle, never the mesh.

use std::sync::Arc;

use crate::mesh::acre::{Acre, AcreId};
use crate::mesh::id_set::AcreIdSet;

/// Id→record resolution over a fixed mesh.
pub trait AcreLookup {
    /// Total number of acres in the mesh.
    fn len(&self) -> usize;

    /// Resolves an id into its record.
    ///
    /// # Panics
    ///
    /// Out-of-range ids are a programming error and panic; a lookup never
    /// silently substitutes a sentinel record.
    fn acre(&self, id: AcreId) -> &Acre;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Shared handle to a lookup. Sets and navigators clone the handle (cheap)
/// without copying the mesh.
pub type SharedLookup = Arc<dyn AcreLookup>;

/// Dense array-backed lookup: `acres[i]` is the record with id `i`.
pub struct ArrayLookup {
    acres: Vec<Acre>,
}

impl ArrayLookup {
    /// Wraps a dense record array.
    ///
    /// # Panics
    ///
    /// Panics if the records are not dense and 0-based (`acres[i].id() != i`).
    pub fn new(acres: Vec<Acre>) -> Self {
        for (i, acre) in acres.iter().enumerate() {
            assert_eq!(
                acre.id().get() as usize,
                i,
                "acre ids must be dense and 0-based"
            );
        }
        Self { acres }
    }

    /// Convenience constructor producing the shared handle form directly.
    pub fn shared(acres: Vec<Acre>) -> SharedLookup {
        Arc::new(Self::new(acres))
    }

    pub fn as_slice(&self) -> &[Acre] {
        &self.acres
    }
}

impl AcreLookup for ArrayLookup {
    #[inline]
    fn len(&self) -> usize {
        self.acres.len()
    }

    #[inline]
    fn acre(&self, id: AcreId) -> &Acre {
        &self.acres[id.index()]
    }
}

/// Resolves every id of a set into its record, in the set's iteration order.
pub fn resolve<'a>(
    lookup: &'a dyn AcreLookup,
    ids: &'a AcreIdSet,
) -> impl Iterator<Item = &'a Acre> + 'a {
    ids.iter().map(move |id| lookup.acre(id))
}
