//! `AllAcresSet`: the universal set over the whole mesh.
//!
//! The identity element for "no filtering": always full, never empty,
//! permanently read-only. Useful as the bounds of a boundary trace that
//! should range over the entire planet, and as the seed of a growth that
//! starts from everywhere.

use crate::mesh::acre::{Acre, AcreId};
use crate::mesh::id_set::AcreIdSet;
use crate::mesh::lookup::SharedLookup;
use crate::navigate::basic::BasicAcreSetNavigator;
use crate::navigate::navigator::AcreNavigator;
use crate::navigate::set_builder::AcreSetBuilder;
use crate::sets::acre_set::AcreSet;
use crate::walk_error::AcreWalkError;

/// The always-full, add/remove-rejecting [`AcreSet`] covering the entire
/// mesh.
pub struct AllAcresSet {
    lookup: SharedLookup,
}

impl AllAcresSet {
    pub fn new(lookup: SharedLookup) -> Self {
        Self { lookup }
    }

    fn universe(&self) -> u32 {
        self.lookup.len() as u32
    }
}

impl AcreSet for AllAcresSet {
    fn len(&self) -> usize {
        self.lookup.len()
    }

    // A mesh always has acres.
    fn is_empty(&self) -> bool {
        false
    }

    fn contains(&self, _acre: &Acre) -> bool {
        true
    }

    fn contains_id(&self, id: AcreId) -> bool {
        id.get() < self.universe()
    }

    fn get(&self, id: AcreId) -> Option<Acre> {
        (id.get() < self.universe()).then(|| *self.lookup.acre(id))
    }

    fn insert(&mut self, _acre: &Acre) -> Result<(), AcreWalkError> {
        Err(AcreWalkError::ReadOnlyAcreSet("insert"))
    }

    fn insert_all(&mut self, _ids: &AcreIdSet) -> Result<(), AcreWalkError> {
        Err(AcreWalkError::ReadOnlyAcreSet("insert_all"))
    }

    fn remove(&mut self, _acre: &Acre) -> Result<(), AcreWalkError> {
        Err(AcreWalkError::ReadOnlyAcreSet("remove"))
    }

    fn remove_all(&mut self, _ids: &AcreIdSet) -> Result<(), AcreWalkError> {
        Err(AcreWalkError::ReadOnlyAcreSet("remove_all"))
    }

    fn acre_ids(&self) -> AcreIdSet {
        AcreIdSet::all_acres(self.universe())
    }

    fn lookup(&self) -> SharedLookup {
        self.lookup.clone()
    }

    fn iter(&self) -> Box<dyn Iterator<Item = Acre> + '_> {
        Box::new((0..self.universe()).map(|raw| *self.lookup.acre(AcreId::new(raw))))
    }

    fn navigate_read_only(&self) -> Box<dyn AcreNavigator> {
        Box::new(BasicAcreSetNavigator::new(
            self.lookup.clone(),
            &AcreIdSet::all_acres(self.universe()),
        ))
    }

    fn navigate_grow(&self) -> Box<dyn AcreNavigator> {
        Box::new(AcreSetBuilder::from_id_set(
            self.lookup.clone(),
            &AcreIdSet::all_acres(self.universe()),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::lookup::ArrayLookup;

    fn lookup(n: u32) -> SharedLookup {
        let acres = (0..n)
            .map(|i| Acre::new(AcreId::new(i), &[], 0.0))
            .collect();
        ArrayLookup::shared(acres)
    }

    #[test]
    fn universal_membership() {
        let all = AllAcresSet::new(lookup(8));
        assert_eq!(all.len(), 8);
        assert!(!all.is_empty());
        assert!(all.contains_id(AcreId::new(7)));
        assert!(!all.contains_id(AcreId::new(8)));
        let foreign = Acre::new(AcreId::new(999), &[], 0.0);
        assert!(all.contains(&foreign));
    }

    #[test]
    fn every_mutator_fails() {
        let mut all = AllAcresSet::new(lookup(4));
        let acre = *all.lookup().acre(AcreId::new(0));
        assert!(all.insert(&acre).is_err());
        assert!(all.remove(&acre).is_err());
        let ids = AcreIdSet::EMPTY;
        assert!(all.insert_all(&ids).is_err());
        assert!(all.remove_all(&ids).is_err());
    }

    #[test]
    fn acre_ids_is_the_frozen_universal_set() {
        let all = AllAcresSet::new(lookup(4));
        let ids = all.acre_ids();
        assert!(ids.is_frozen());
        assert_eq!(ids.len(), 4);
    }
}
