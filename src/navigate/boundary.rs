//! `BoundaryAcreSetBuilder`: constrained, predicate-filtered,
//! priority-ordered growth.
//!
//! Grows a region from a single seed, confined to a caller-supplied bounds
//! set, visiting pending acres in a caller-supplied total order and
//! admitting neighbors edge-by-edge through an admissibility predicate.
//! This is the traversal behind watershed and elevation-contour extraction:
//! seed at a pour point, order by ascending elevation, admit strictly-lower
//! neighbors. A boundary trace is one-shot: `reset` is not supported.

use std::cmp::Ordering;

use log::trace;

use crate::debug_invariants::DebugInvariants;
use crate::mesh::acre::{Acre, AcreId};
use crate::mesh::id_set::AcreIdSet;
use crate::mesh::lookup::SharedLookup;
use crate::navigate::navigator::{AcreNavigator, Neighbors};
use crate::sets::acre_set::{AcreSet, InMemoryAcreSet};
use crate::walk_error::AcreWalkError;

/// Per-edge admissibility: may the frontier cross from `acre` to
/// `neighbor`?
///
/// Evaluated on each `(current, neighbor)` pair. A rejected neighbor stays
/// eligible and may be admitted later from a different edge.
pub trait NeighborPredicate {
    fn admit(&self, acre: &Acre, neighbor: &Acre) -> bool;
}

/// Any `Fn(&Acre, &Acre) -> bool` is a predicate.
impl<F: Fn(&Acre, &Acre) -> bool> NeighborPredicate for F {
    fn admit(&self, acre: &Acre, neighbor: &Acre) -> bool {
        self(acre, neighbor)
    }
}

/// The stock admissibility rules.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StandardPredicate {
    /// Admit every neighbor.
    Always,
    /// Admit nothing; the trace stays at its seed.
    Never,
    /// Admit neighbors strictly lower than the current acre (drainage).
    StrictlyLower,
    /// Admit neighbors strictly higher than the current acre (ridges).
    StrictlyHigher,
}

impl NeighborPredicate for StandardPredicate {
    fn admit(&self, acre: &Acre, neighbor: &Acre) -> bool {
        match self {
            StandardPredicate::Always => true,
            StandardPredicate::Never => false,
            StandardPredicate::StrictlyLower => neighbor.elevation() < acre.elevation(),
            StandardPredicate::StrictlyHigher => neighbor.elevation() > acre.elevation(),
        }
    }
}

/// A total order over acres, driving which pending acre `next()` yields.
pub trait AcreOrdering {
    fn compare(&self, a: &Acre, b: &Acre) -> Ordering;
}

/// Any `Fn(&Acre, &Acre) -> Ordering` is an ordering.
impl<F: Fn(&Acre, &Acre) -> Ordering> AcreOrdering for F {
    fn compare(&self, a: &Acre, b: &Acre) -> Ordering {
        self(a, b)
    }
}

/// The stock orderings. Elevation comparisons use `total_cmp` and break
/// ties by id, so every ordering is total and deterministic.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StandardOrdering {
    /// Ascending id.
    ById,
    /// Ascending elevation, then ascending id.
    LowestFirst,
    /// Descending elevation, then descending id.
    HighestFirst,
}

impl AcreOrdering for StandardOrdering {
    fn compare(&self, a: &Acre, b: &Acre) -> Ordering {
        match self {
            StandardOrdering::ById => a.id().cmp(&b.id()),
            StandardOrdering::LowestFirst => a
                .elevation()
                .total_cmp(&b.elevation())
                .then_with(|| a.id().cmp(&b.id())),
            StandardOrdering::HighestFirst => b
                .elevation()
                .total_cmp(&a.elevation())
                .then_with(|| b.id().cmp(&a.id())),
        }
    }
}

/// The constrained growth navigator used for boundary and drainage-style
/// region tracing.
///
/// Three tracking sets partition the work relative to the bounds:
/// `pushable` (not yet pushed), `pendable` (not yet enqueued), and
/// `pending` (queued, mirrored into an order-respecting queue). Ids enter
/// the queue at most once, so the queue needs no duplicate handling.
pub struct BoundaryAcreSetBuilder<O: AcreOrdering, P: NeighborPredicate> {
    lookup: SharedLookup,
    order: O,
    predicate: P,
    included: AcreIdSet,
    pushable: AcreIdSet,
    pendable: AcreIdSet,
    pending: AcreIdSet,
    /// Sorted descending under `order`; popping the tail yields the least.
    queue: Vec<AcreId>,
    current: Option<AcreId>,
}

impl<O: AcreOrdering, P: NeighborPredicate> BoundaryAcreSetBuilder<O, P> {
    /// Starts a trace at `seed`, confined to `bounds`.
    ///
    /// Fails with [`AcreWalkError::SeedOutsideBounds`], before any state is
    /// built, when the seed is not a member of the bounds.
    pub fn new(
        seed: &Acre,
        bounds: &dyn AcreSet,
        order: O,
        predicate: P,
    ) -> Result<Self, AcreWalkError> {
        if !bounds.contains(seed) {
            return Err(AcreWalkError::SeedOutsideBounds(seed.id()));
        }
        let lookup = bounds.lookup();
        let universe = lookup.len() as u32;
        let mut builder = Self {
            pushable: bounds.acre_ids().to_open(),
            pendable: bounds.acre_ids().to_open(),
            included: AcreIdSet::with_universe(universe),
            pending: AcreIdSet::with_universe(universe),
            queue: Vec::new(),
            lookup,
            order,
            predicate,
            current: None,
        };
        builder.push(seed)?;
        builder.pendable.remove(seed.id())?;
        Ok(builder)
    }

    /// Finalizes into the accumulated set, releasing all working state.
    pub fn done(self) -> InMemoryAcreSet {
        InMemoryAcreSet::from_ids(self.lookup, self.included)
    }

    fn enqueue(&mut self, id: AcreId) {
        let acre = self.lookup.acre(id);
        let pos = self
            .queue
            .binary_search_by(|probe| {
                self.order
                    .compare(self.lookup.acre(*probe), acre)
                    .reverse()
            })
            .unwrap_or_else(|pos| pos);
        self.queue.insert(pos, id);
    }
}

impl<O: AcreOrdering, P: NeighborPredicate> AcreNavigator for BoundaryAcreSetBuilder<O, P> {
    fn has_next(&self) -> bool {
        !self.pending.is_empty()
    }

    fn next(&mut self) -> Result<Acre, AcreWalkError> {
        let id = self.queue.pop().ok_or(AcreWalkError::NoMoreAcres)?;
        self.pending.remove(id)?;
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

    /// Adds `acre` to the result and admits its eligible neighbors into the
    /// pending queue.
    ///
    /// Re-pushing an already-pushed acre is a no-op beyond (re-)including
    /// it: its neighbors were expanded the first time.
    fn push(&mut self, acre: &Acre) -> Result<(), AcreWalkError> {
        let id = acre.id();
        self.included.insert(id)?;
        if !self.pushable.remove(id)? {
            return Ok(());
        }
        for neighbor_id in acre.neighbor_ids() {
            if !self.pendable.contains(neighbor_id) {
                continue;
            }
            let neighbor = *self.lookup.acre(neighbor_id);
            if self.predicate.admit(acre, &neighbor) {
                self.pendable.remove(neighbor_id)?;
                self.pending.insert(neighbor_id)?;
                self.enqueue(neighbor_id);
                trace!("boundary trace: acre {neighbor_id} admitted via {id}");
            }
        }
        self.debug_assert_invariants();
        Ok(())
    }

    /// A boundary trace is one-shot.
    fn reset(&mut self) -> Result<(), AcreWalkError> {
        Err(AcreWalkError::UnsupportedNavigatorOperation("reset"))
    }

    fn done(self: Box<Self>) -> Result<Box<dyn AcreSet>, AcreWalkError> {
        Ok(Box::new((*self).done()))
    }
}

impl<O: AcreOrdering, P: NeighborPredicate> DebugInvariants for BoundaryAcreSetBuilder<O, P> {
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_invariants(), "BoundaryAcreSetBuilder");
    }

    fn validate_invariants(&self) -> Result<(), AcreWalkError> {
        if self.queue.len() != self.pending.len() {
            return Err(AcreWalkError::InvariantViolated(
                "pending set and priority queue disagree",
            ));
        }
        for id in &self.queue {
            if !self.pending.contains(*id) {
                return Err(AcreWalkError::InvariantViolated(
                    "queued id missing from the pending set",
                ));
            }
            if self.pendable.contains(*id) {
                return Err(AcreWalkError::InvariantViolated(
                    "a pending id is still marked pendable",
                ));
            }
        }
        Ok(())
    }
}
