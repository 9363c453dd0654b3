//! `AcreSetBuilder`: unconstrained level-by-level wavefront growth.
//!
//! Classic two-generation BFS with caller feedback. The current wave is
//! drained one acre at a time through `next()`; `push()` calls made during
//! the drain land in the next wave. When the current wave empties, the
//! waves swap. Drained wave buffers cycle through a small fixed ring of
//! reusable id sets, so steady-state growth allocates nothing per wave.

use log::{debug, trace};

use crate::debug_invariants::DebugInvariants;
use crate::mesh::acre::{Acre, AcreId};
use crate::mesh::id_set::AcreIdSet;
use crate::mesh::lookup::SharedLookup;
use crate::navigate::navigator::{AcreNavigator, Neighbors};
use crate::sets::acre_set::{AcreSet, InMemoryAcreSet};
use crate::walk_error::AcreWalkError;

/// Ring capacity: the wave being drained and the wave being filled may both
/// be live, and `reset()` needs a third buffer transiently.
const WAVE_BUFFERS: usize = 3;

/// Fixed-capacity ring of reusable wave buffers owned by one builder.
struct ScratchRing {
    free: Vec<AcreIdSet>,
    universe: u32,
}

impl ScratchRing {
    fn new(universe: u32) -> Self {
        let free = (0..WAVE_BUFFERS)
            .map(|_| AcreIdSet::with_universe(universe))
            .collect();
        Self { free, universe }
    }

    /// Hands out a cleared buffer. The ring is sized so this does not
    /// allocate during traversal.
    fn take(&mut self) -> AcreIdSet {
        match self.free.pop() {
            Some(mut set) => {
                set.clear_open();
                set
            }
            None => AcreIdSet::with_universe(self.universe),
        }
    }

    fn put_back(&mut self, set: AcreIdSet) {
        if self.free.len() < WAVE_BUFFERS && !set.is_frozen() {
            self.free.push(set);
        }
    }

    #[cfg(test)]
    fn free_count(&self) -> usize {
        self.free.len()
    }
}

/// The unconstrained, level-by-level growth navigator.
///
/// ```
/// use acre_walk::prelude::*;
///
/// let acres: Vec<Acre> = (0u32..10)
///     .map(|i| {
///         let neighbors = [AcreId::new((i + 1) % 10), AcreId::new((i + 9) % 10)];
///         Acre::new(AcreId::new(i), &neighbors, 6.0 - i as f32)
///     })
///     .collect();
/// let lookup = ArrayLookup::shared(acres);
///
/// let mut builder = AcreSetBuilder::new(lookup, [AcreId::new(2)]);
/// while builder.has_next() {
///     let acre = builder.next()?;
///     for neighbor in &builder.neighbors()? {
///         if neighbor.elevation() > 0.0 {
///             builder.push(neighbor)?;
///         }
///     }
/// }
/// let region = builder.done();
/// assert_eq!(region.len(), 6);
/// # Ok::<(), acre_walk::walk_error::AcreWalkError>(())
/// ```
pub struct AcreSetBuilder {
    lookup: SharedLookup,
    visited: AcreIdSet,
    included: AcreIdSet,
    /// The wave currently being drained.
    pending: AcreIdSet,
    /// The wave being filled by `push()`.
    pending_next: AcreIdSet,
    scratch: ScratchRing,
    current: Option<AcreId>,
}

impl AcreSetBuilder {
    /// New builder seeded from an id iterator. The seeds form the first
    /// wave and are part of the result from the start.
    pub fn new(lookup: SharedLookup, seeds: impl IntoIterator<Item = AcreId>) -> Self {
        let universe = lookup.len() as u32;
        let mut included = AcreIdSet::with_universe(universe);
        for id in seeds {
            included.insert_open(id);
        }
        Self::with_included(lookup, universe, included)
    }

    /// New builder seeded with every id of an existing set.
    pub fn from_id_set(lookup: SharedLookup, ids: &AcreIdSet) -> Self {
        let universe = lookup.len() as u32;
        Self::with_included(lookup, universe, ids.to_open())
    }

    fn with_included(lookup: SharedLookup, universe: u32, included: AcreIdSet) -> Self {
        let pending = included.to_open();
        let mut scratch = ScratchRing::new(universe);
        let pending_next = scratch.take();
        Self {
            lookup,
            visited: AcreIdSet::with_universe(universe),
            included,
            pending,
            pending_next,
            scratch,
            current: None,
        }
    }

    /// Finalizes into the accumulated set, releasing all working state.
    pub fn done(self) -> InMemoryAcreSet {
        debug!(
            "acre set builder finished: {} acres included, {} visited",
            self.included.len(),
            self.visited.len()
        );
        InMemoryAcreSet::from_ids(self.lookup, self.included)
    }

    fn is_visited_or_pending(&self, id: AcreId) -> bool {
        self.visited.contains(id)
            || self.pending.contains(id)
            || self.pending_next.contains(id)
    }

    /// Retires the drained wave and promotes the next one.
    fn swap_waves(&mut self) {
        let fresh = self.scratch.take();
        let next_wave = std::mem::replace(&mut self.pending_next, fresh);
        let drained = std::mem::replace(&mut self.pending, next_wave);
        self.scratch.put_back(drained);
        debug!("wave swap: {} acres in the new wave", self.pending.len());
        self.debug_assert_invariants();
    }
}

impl AcreNavigator for AcreSetBuilder {
    fn has_next(&self) -> bool {
        !self.pending.is_empty() || !self.pending_next.is_empty()
    }

    fn next(&mut self) -> Result<Acre, AcreWalkError> {
        if self.pending.is_empty() {
            if self.pending_next.is_empty() {
                return Err(AcreWalkError::NoMoreAcres);
            }
            self.swap_waves();
        }
        let id = self
            .pending
            .take_any()
            .ok_or(AcreWalkError::NoMoreAcres)?;
        self.visited.insert(id)?;
        self.included.insert(id)?;
        self.current = Some(id);
        Ok(*self.lookup.acre(id))
    }

    fn remove_current(&mut self) -> Result<(), AcreWalkError> {
        let id = self
            .current
            .take()
            .ok_or(AcreWalkError::NoCurrentAcre("remove_current"))?;
        self.included.remove(id)?;
        Ok(())
    }

    fn neighbors(&self) -> Result<Neighbors, AcreWalkError> {
        let id = self
            .current
            .ok_or(AcreWalkError::NoCurrentAcre("neighbors"))?;
        Ok(Neighbors::of(self.lookup.as_ref(), self.lookup.acre(id)))
    }

    fn push(&mut self, acre: &Acre) -> Result<(), AcreWalkError> {
        let id = acre.id();
        self.included.insert(id)?;
        if !self.is_visited_or_pending(id) {
            trace!("push: acre {id} queued for the next wave");
            self.pending_next.insert(id)?;
        }
        Ok(())
    }

    fn reset(&mut self) -> Result<(), AcreWalkError> {
        self.current = None;
        self.visited.clear()?;
        let mut fresh = self.scratch.take();
        for id in self.included.iter() {
            fresh.insert_open(id);
        }
        let old = std::mem::replace(&mut self.pending, fresh);
        self.scratch.put_back(old);
        let fresh_next = self.scratch.take();
        let old_next = std::mem::replace(&mut self.pending_next, fresh_next);
        self.scratch.put_back(old_next);
        self.debug_assert_invariants();
        Ok(())
    }

    fn done(self: Box<Self>) -> Result<Box<dyn AcreSet>, AcreWalkError> {
        Ok(Box::new((*self).done()))
    }
}

impl DebugInvariants for AcreSetBuilder {
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_invariants(), "AcreSetBuilder");
    }

    fn validate_invariants(&self) -> Result<(), AcreWalkError> {
        for id in &self.pending {
            if self.pending_next.contains(id) {
                return Err(AcreWalkError::InvariantViolated(
                    "an id occupies both wave buffers",
                ));
            }
            if self.visited.contains(id) {
                return Err(AcreWalkError::InvariantViolated(
                    "a visited id is still queued in the current wave",
                ));
            }
        }
        for id in &self.pending_next {
            if self.visited.contains(id) {
                return Err(AcreWalkError::InvariantViolated(
                    "a visited id is queued in the next wave",
                ));
            }
        }
        Ok(())
    }
}
