//! The traversal contract: a stateful cursor with push-back and
//! finalization.
//!
//! Navigators combine pull-based iteration (`next`) with push-based frontier
//! extension (`push`). That pairing does not fit the standard `Iterator`
//! abstraction, so the contract is an explicit cursor object: advance,
//! inspect neighbors, enqueue more work, finish. A navigator is exclusively
//! owned by its caller; finalization consumes it, so a finished navigator
//! cannot be touched again.

use smallvec::SmallVec;

use crate::mesh::acre::{Acre, MAX_NEIGHBORS};
use crate::mesh::lookup::AcreLookup;
use crate::sets::acre_set::AcreSet;
use crate::walk_error::AcreWalkError;

/// A stateful cursor over a working frontier of acres.
///
/// Implementations differ in how the frontier grows: unconstrained
/// wavefronts ([`AcreSetBuilder`](crate::navigate::set_builder::AcreSetBuilder)),
/// predicate-constrained ordered growth
/// ([`BoundaryAcreSetBuilder`](crate::navigate::boundary::BoundaryAcreSetBuilder)),
/// or no growth at all
/// ([`BasicAcreSetNavigator`](crate::navigate::basic::BasicAcreSetNavigator)).
pub trait AcreNavigator {
    /// True iff another acre remains in the current or next wave.
    fn has_next(&self) -> bool;

    /// Advances the cursor, marking the returned id visited and included.
    ///
    /// Fails with [`AcreWalkError::NoMoreAcres`] when [`has_next`](Self::has_next)
    /// is false.
    fn next(&mut self) -> Result<Acre, AcreWalkError>;

    /// Removes the most recently returned acre from the accumulating result.
    ///
    /// Fails when no current acre exists (before the first `next`, or twice
    /// in a row).
    fn remove_current(&mut self) -> Result<(), AcreWalkError>;

    /// Snapshot of the current acre's adjacent records, resolved through the
    /// bound lookup. Fails when no current acre exists.
    fn neighbors(&self) -> Result<Neighbors, AcreWalkError>;

    /// Requests that an acre join the result and, if not already visited or
    /// queued, the frontier. Idempotent: pushing a visited-or-queued id is a
    /// silent no-op, never a duplicate queue entry.
    fn push(&mut self, acre: &Acre) -> Result<(), AcreWalkError>;

    /// Restarts the walk over the full accumulated membership, clearing the
    /// visited record. Not every navigator supports this.
    fn reset(&mut self) -> Result<(), AcreWalkError>;

    /// Finalizes the traversal, freezing the accumulated membership into an
    /// [`AcreSet`]. Consumes the navigator: there is no after.
    fn done(self: Box<Self>) -> Result<Box<dyn AcreSet>, AcreWalkError>;
}

/// An owned snapshot of one acre's neighborhood, at most [`MAX_NEIGHBORS`]
/// records, stored inline.
///
/// The records are copies taken at the moment of the call; the mesh is
/// immutable for the duration of a traversal, so a snapshot cannot go
/// stale.
#[derive(Clone, Debug)]
pub struct Neighbors {
    acres: SmallVec<[Acre; MAX_NEIGHBORS]>,
}

impl Neighbors {
    pub(crate) fn of(lookup: &dyn AcreLookup, acre: &Acre) -> Self {
        let mut acres = SmallVec::new();
        for id in acre.neighbor_ids() {
            acres.push(*lookup.acre(id));
        }
        Self { acres }
    }

    pub fn len(&self) -> usize {
        self.acres.len()
    }

    pub fn is_empty(&self) -> bool {
        self.acres.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Acre> {
        self.acres.iter()
    }
}

impl IntoIterator for Neighbors {
    type Item = Acre;
    type IntoIter = smallvec::IntoIter<[Acre; MAX_NEIGHBORS]>;

    fn into_iter(self) -> Self::IntoIter {
        self.acres.into_iter()
    }
}

impl<'a> IntoIterator for &'a Neighbors {
    type Item = &'a Acre;
    type IntoIter = std::slice::Iter<'a, Acre>;

    fn into_iter(self) -> Self::IntoIter {
        self.acres.iter()
    }
}
