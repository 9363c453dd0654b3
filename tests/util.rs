#![allow(dead_code)]
use acre_walk::mesh::{Acre, AcreId, ArrayLookup, SharedLookup};

pub fn aid(raw: u32) -> AcreId {
    AcreId::new(raw)
}

/// Ring mesh: acre `i` neighbors `(i+1) % n` and `(i-1) % n`.
pub fn ring_lookup(n: u32, elevation: impl Fn(u32) -> f32) -> SharedLookup {
    let acres = (0..n)
        .map(|i| {
            let neighbors = [aid((i + 1) % n), aid((i + n - 1) % n)];
            Acre::new(aid(i), &neighbors, elevation(i))
        })
        .collect();
    ArrayLookup::shared(acres)
}

/// Line mesh: acre `i` neighbors `i-1` and `i+1` where they exist.
pub fn line_lookup(n: u32, elevation: impl Fn(u32) -> f32) -> SharedLookup {
    let acres = (0..n)
        .map(|i| {
            let mut neighbors = Vec::new();
            if i > 0 {
                neighbors.push(aid(i - 1));
            }
            if i + 1 < n {
                neighbors.push(aid(i + 1));
            }
            Acre::new(aid(i), &neighbors, elevation(i))
        })
        .collect();
    ArrayLookup::shared(acres)
}

/// Assert vec is a permutation of another vec (order-agnostic).
pub fn assert_permutation<T: Ord + Copy + std::fmt::Debug>(got: &[T], want: &[T]) {
    let mut a = got.to_vec();
    a.sort_unstable();
    let mut b = want.to_vec();
    b.sort_unstable();
    assert_eq!(a, b, "not a permutation\n got={:?}\nwant={:?}", got, want);
}
