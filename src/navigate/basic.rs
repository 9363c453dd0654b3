//! `BasicAcreSetNavigator`: read-only replay of a fixed membership.
//!
//! Walks a snapshot of an already-fixed id set, supporting neighbor
//! inspection and `reset`, and rejecting everything that would mutate or
//! finalize. This navigator never produces a new set.

use itertools::Itertools;

use crate::mesh::acre::{Acre, AcreId};
use crate::mesh::id_set::AcreIdSet;
use crate::mesh::lookup::SharedLookup;
use crate::navigate::navigator::{AcreNavigator, Neighbors};
use crate::sets::acre_set::AcreSet;
use crate::walk_error::AcreWalkError;

/// Read-only cursor over a fixed acre membership.
pub struct BasicAcreSetNavigator {
    lookup: SharedLookup,
    /// Snapshot of the membership, sorted by id for deterministic replay.
    ids: Vec<AcreId>,
    cursor: usize,
    current: Option<AcreId>,
}

impl BasicAcreSetNavigator {
    pub fn new(lookup: SharedLookup, included: &AcreIdSet) -> Self {
        let ids: Vec<AcreId> = included.iter().sorted().collect();
        Self {
            lookup,
            ids,
            cursor: 0,
            current: None,
        }
    }
}

impl AcreNavigator for BasicAcreSetNavigator {
    fn has_next(&self) -> bool {
        self.cursor < self.ids.len()
    }

    fn next(&mut self) -> Result<Acre, AcreWalkError> {
        let id = *self
            .ids
            .get(self.cursor)
            .ok_or(AcreWalkError::NoMoreAcres)?;
        self.cursor += 1;
        self.current = Some(id);
        Ok(*self.lookup.acre(id))
    }

    fn remove_current(&mut self) -> Result<(), AcreWalkError> {
        Err(AcreWalkError::UnsupportedNavigatorOperation("remove_current"))
    }

    fn neighbors(&self) -> Result<Neighbors, AcreWalkError> {
        let id = self
            .current
            .ok_or(AcreWalkError::NoCurrentAcre("neighbors"))?;
        Ok(Neighbors::of(self.lookup.as_ref(), self.lookup.acre(id)))
    }

    fn push(&mut self, _acre: &Acre) -> Result<(), AcreWalkError> {
        Err(AcreWalkError::UnsupportedNavigatorOperation("push"))
    }

    fn reset(&mut self) -> Result<(), AcreWalkError> {
        self.cursor = 0;
        self.current = None;
        Ok(())
    }

    fn done(self: Box<Self>) -> Result<Box<dyn AcreSet>, AcreWalkError> {
        Err(AcreWalkError::UnsupportedNavigatorOperation("done"))
    }
}
