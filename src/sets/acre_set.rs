//! `AcreSet`: named collections of acres, and the id-set-backed
//! implementation every builder produces.
//!
//! A set is either mutable or read-only; read-only instances reject every
//! mutator with a capability error. Both navigation modes are spawned from
//! here: a read-only replay over a snapshot of the membership, or a fresh
//! wavefront builder seeded with it.

use crate::mesh::acre::{Acre, AcreId};
use crate::mesh::id_set::AcreIdSet;
use crate::mesh::lookup::SharedLookup;
use crate::navigate::basic::BasicAcreSetNavigator;
use crate::navigate::navigator::AcreNavigator;
use crate::navigate::set_builder::AcreSetBuilder;
use crate::walk_error::AcreWalkError;

/// A collection of acres over a shared mesh lookup.
///
/// Invariant: every id in the backing set resolves via the lookup.
pub trait AcreSet {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn contains(&self, acre: &Acre) -> bool {
        self.contains_id(acre.id())
    }

    fn contains_id(&self, id: AcreId) -> bool;

    /// The member with this id, or `None` when the id is not included.
    fn get(&self, id: AcreId) -> Option<Acre>;

    /// Adds one acre. Fails on read-only sets.
    fn insert(&mut self, acre: &Acre) -> Result<(), AcreWalkError>;

    /// Adds every id of `ids`. Fails on read-only sets.
    fn insert_all(&mut self, ids: &AcreIdSet) -> Result<(), AcreWalkError>;

    /// Removes one acre. Fails on read-only sets.
    fn remove(&mut self, acre: &Acre) -> Result<(), AcreWalkError>;

    /// Removes every id of `ids`. Fails on read-only sets.
    fn remove_all(&mut self, ids: &AcreIdSet) -> Result<(), AcreWalkError>;

    /// Independent clone of the backing id set.
    fn acre_ids(&self) -> AcreIdSet;

    /// The shared mesh lookup behind this set.
    fn lookup(&self) -> SharedLookup;

    /// The member records, in unspecified order.
    fn iter(&self) -> Box<dyn Iterator<Item = Acre> + '_>;

    /// Read-only replay over a snapshot of the current membership.
    fn navigate_read_only(&self) -> Box<dyn AcreNavigator>;

    /// A fresh wavefront builder seeded with the current membership, for
    /// growing a new set outward from this one.
    fn navigate_grow(&self) -> Box<dyn AcreNavigator>;
}

/// The id-set-backed [`AcreSet`] implementation.
pub struct InMemoryAcreSet {
    read_only: bool,
    lookup: SharedLookup,
    included: AcreIdSet,
}

impl InMemoryAcreSet {
    /// New empty mutable set over `lookup`.
    pub fn new(lookup: SharedLookup) -> Self {
        let included = AcreIdSet::with_universe(lookup.len() as u32);
        Self {
            read_only: false,
            lookup,
            included,
        }
    }

    /// Mutable set with the given membership. Frozen id sets are copied
    /// into open storage so the set's mutability is real.
    pub fn from_ids(lookup: SharedLookup, ids: AcreIdSet) -> Self {
        let included = if ids.is_frozen() { ids.to_open() } else { ids };
        Self {
            read_only: false,
            lookup,
            included,
        }
    }

    /// Read-only set with the given membership.
    pub fn read_only(lookup: SharedLookup, ids: AcreIdSet) -> Self {
        Self {
            read_only: true,
            lookup,
            included: ids,
        }
    }

    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    fn ensure_mutable(&self, op: &'static str) -> Result<(), AcreWalkError> {
        if self.read_only {
            Err(AcreWalkError::ReadOnlyAcreSet(op))
        } else {
            Ok(())
        }
    }
}

impl AcreSet for InMemoryAcreSet {
    fn len(&self) -> usize {
        self.included.len()
    }

    fn contains_id(&self, id: AcreId) -> bool {
        self.included.contains(id)
    }

    fn get(&self, id: AcreId) -> Option<Acre> {
        self.included
            .contains(id)
            .then(|| *self.lookup.acre(id))
    }

    fn insert(&mut self, acre: &Acre) -> Result<(), AcreWalkError> {
        self.ensure_mutable("insert")?;
        self.included.insert(acre.id())?;
        Ok(())
    }

    fn insert_all(&mut self, ids: &AcreIdSet) -> Result<(), AcreWalkError> {
        self.ensure_mutable("insert_all")?;
        for id in ids {
            self.included.insert(id)?;
        }
        Ok(())
    }

    fn remove(&mut self, acre: &Acre) -> Result<(), AcreWalkError> {
        self.ensure_mutable("remove")?;
        self.included.remove(acre.id())?;
        Ok(())
    }

    fn remove_all(&mut self, ids: &AcreIdSet) -> Result<(), AcreWalkError> {
        self.ensure_mutable("remove_all")?;
        for id in ids {
            self.included.remove(id)?;
        }
        Ok(())
    }

    fn acre_ids(&self) -> AcreIdSet {
        self.included.clone()
    }

    fn lookup(&self) -> SharedLookup {
        self.lookup.clone()
    }

    fn iter(&self) -> Box<dyn Iterator<Item = Acre> + '_> {
        Box::new(self.included.iter().map(|id| *self.lookup.acre(id)))
    }

    fn navigate_read_only(&self) -> Box<dyn AcreNavigator> {
        Box::new(BasicAcreSetNavigator::new(
            self.lookup.clone(),
            &self.included,
        ))
    }

    fn navigate_grow(&self) -> Box<dyn AcreNavigator> {
        Box::new(AcreSetBuilder::from_id_set(
            self.lookup.clone(),
            &self.included,
        ))
    }
}
