mod util;

use acre_walk::prelude::*;
use util::{aid, ring_lookup};

#[test]
fn next_past_the_end_fails() {
    let lookup = ring_lookup(3, |_| 0.0);
    let mut builder = AcreSetBuilder::new(lookup, [aid(0)]);
    builder.next().unwrap();
    assert!(!builder.has_next());
    assert_eq!(builder.next(), Err(AcreWalkError::NoMoreAcres));
}

#[test]
fn neighbors_and_remove_need_a_current_acre() {
    let lookup = ring_lookup(3, |_| 0.0);
    let mut builder = AcreSetBuilder::new(lookup, [aid(0)]);
    assert!(matches!(
        builder.neighbors(),
        Err(AcreWalkError::NoCurrentAcre("neighbors"))
    ));
    assert!(matches!(
        builder.remove_current(),
        Err(AcreWalkError::NoCurrentAcre("remove_current"))
    ));
    builder.next().unwrap();
    assert!(builder.neighbors().is_ok());
    builder.remove_current().unwrap();
    // The current acre is gone; both calls fail again.
    assert!(builder.neighbors().is_err());
    assert!(builder.remove_current().is_err());
}

#[test]
fn finalization_consumes_the_navigator() {
    let lookup = ring_lookup(3, |_| 0.0);
    let mut set = InMemoryAcreSet::new(lookup.clone());
    let a0 = *lookup.acre(aid(0));
    set.insert(&a0).unwrap();

    let nav = set.navigate_grow();
    let region = nav.done().unwrap();
    assert_eq!(region.len(), 1);
    // `nav` is moved out by `done`; reuse is a compile error, not a runtime
    // state to test.
}

#[test]
fn read_only_navigation_rejects_mutation() {
    let lookup = ring_lookup(4, |_| 0.0);
    let mut set = InMemoryAcreSet::new(lookup.clone());
    let ids: AcreIdSet = (0..4).map(aid).collect();
    set.insert_all(&ids).unwrap();

    let mut nav = set.navigate_read_only();
    let acre = nav.next().unwrap();
    assert!(matches!(
        nav.push(&acre),
        Err(AcreWalkError::UnsupportedNavigatorOperation("push"))
    ));
    assert!(matches!(
        nav.remove_current(),
        Err(AcreWalkError::UnsupportedNavigatorOperation(_))
    ));
    nav.reset().unwrap();
    let mut count = 0;
    while nav.has_next() {
        nav.next().unwrap();
        count += 1;
    }
    assert_eq!(count, 4);
    assert!(nav.done().is_err());
}

#[test]
fn read_only_navigation_snapshots_the_membership() {
    let lookup = ring_lookup(4, |_| 0.0);
    let mut set = InMemoryAcreSet::new(lookup.clone());
    let a0 = *lookup.acre(aid(0));
    let a2 = *lookup.acre(aid(2));
    set.insert(&a0).unwrap();
    set.insert(&a2).unwrap();

    let mut nav = set.navigate_read_only();
    // Mutating the set after spawning the navigator does not affect the
    // replay: it walks a clone of the ids.
    set.remove(&a2).unwrap();
    let mut seen = Vec::new();
    while nav.has_next() {
        seen.push(nav.next().unwrap().id().get());
    }
    assert_eq!(seen, vec![0, 2]);
}

#[test]
fn read_only_sets_deny_mutation() {
    let lookup = ring_lookup(4, |_| 0.0);
    let a1 = *lookup.acre(aid(1));
    let ids: AcreIdSet = [aid(1)].into_iter().collect();
    let mut set = InMemoryAcreSet::read_only(lookup, ids);
    assert_eq!(
        set.insert(&a1),
        Err(AcreWalkError::ReadOnlyAcreSet("insert"))
    );
    assert_eq!(
        set.remove(&a1),
        Err(AcreWalkError::ReadOnlyAcreSet("remove"))
    );
}

#[test]
fn frozen_id_sets_deny_mutation() {
    let mut empty = AcreIdSet::EMPTY;
    assert_eq!(
        empty.insert(aid(0)),
        Err(AcreWalkError::ReadOnlyIdSet("insert"))
    );
    let mut all = AcreIdSet::all_acres(12);
    assert_eq!(
        all.remove(aid(3)),
        Err(AcreWalkError::ReadOnlyIdSet("remove"))
    );
    assert_eq!(all.clear(), Err(AcreWalkError::ReadOnlyIdSet("clear")));
}

/// The result of `done` keeps growing independently of the source set.
#[test]
fn done_produces_an_independent_mutable_set() {
    let lookup = ring_lookup(5, |_| 0.0);
    let mut builder = AcreSetBuilder::new(lookup.clone(), [aid(0)]);
    while builder.has_next() {
        builder.next().unwrap();
    }
    let mut region = builder.done();
    assert!(!region.is_read_only());
    let a3 = *lookup.acre(aid(3));
    region.insert(&a3).unwrap();
    assert_eq!(region.len(), 2);
}
