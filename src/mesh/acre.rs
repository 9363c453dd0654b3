//! `AcreId` and `Acre`: strong handles and records for mesh cells
//!
//! Every cell of the planetary tessellation is represented by a dense,
//! 0-based, stable identifier. `AcreId` wraps a `u32` so ids cannot be
//! confused with counts, indices into unrelated arrays, or elevations.
//!
//! This module provides:
//! - A transparent `AcreId` newtype for zero-cost layout guarantees.
//! - The `Acre` record: id, up to six neighbor ids, and the scalar
//!   attributes traversal strategies order and filter by.
//! - Implementations of common traits (`Debug`, `Display`, ordering,
//!   hashing) so `AcreId` can be used in maps, sets, and printed easily.

use std::fmt;

/// Most acres are hexagonal; twelve fixed cells of the tessellation are
/// pentagonal and carry five neighbors instead of six.
pub const MAX_NEIGHBORS: usize = 6;

/// Internal padding for unused neighbor slots. Never observable through the
/// public API: `neighbor_ids()` stops at the stored neighbor count.
pub(crate) const NO_NEIGHBOR: u32 = u32::MAX;

/// Identifier of a single mesh cell.
///
/// Ids are dense and 0-based, so 0 is a *valid* id here (unlike a
/// non-zero-reserving handle); absence is expressed by leaving a neighbor
/// slot out of the count rather than by a reserved id value.
///
/// # Memory layout
/// This type is `repr(transparent)`: same ABI and alignment as `u32`.
#[derive(
    Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[repr(transparent)]
pub struct AcreId(u32);

impl AcreId {
    /// Creates a new `AcreId` from a raw `u32` value.
    #[inline]
    pub const fn new(raw: u32) -> Self {
        AcreId(raw)
    }

    /// Returns the inner `u32` value of this `AcreId`.
    #[inline]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// The id as a direct array index into a dense mesh.
    #[inline]
    pub(crate) const fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for AcreId {
    #[inline]
    fn from(raw: u32) -> Self {
        AcreId(raw)
    }
}

/// Custom `Debug` implementation to display as `AcreId(raw_value)`.
impl fmt::Debug for AcreId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AcreId").field(&self.get()).finish()
    }
}

/// Custom `Display` implementation to print only the raw integer.
impl fmt::Display for AcreId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

/// A single mesh cell: identity, adjacency, and the scalar attributes read
/// (never written) by traversal strategies.
///
/// Records are owned by the mesh-generation subsystem and treated as
/// immutable here. `Acre` is `Copy`, so navigators hand out snapshots
/// rather than live views into the mesh.
#[derive(Copy, Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Acre {
    id: AcreId,
    neighbors: [u32; MAX_NEIGHBORS],
    neighbor_count: u8,
    elevation: f32,
}

impl Acre {
    /// Creates a new acre record.
    ///
    /// # Panics
    ///
    /// Panics if more than [`MAX_NEIGHBORS`] neighbors are supplied; the
    /// tessellation guarantees a fixed upper bound, so exceeding it is a
    /// mesh-construction bug.
    pub fn new(id: AcreId, neighbors: &[AcreId], elevation: f32) -> Self {
        assert!(
            neighbors.len() <= MAX_NEIGHBORS,
            "an acre has at most {MAX_NEIGHBORS} neighbors, got {}",
            neighbors.len()
        );
        let mut slots = [NO_NEIGHBOR; MAX_NEIGHBORS];
        for (slot, n) in slots.iter_mut().zip(neighbors) {
            *slot = n.get();
        }
        Self {
            id,
            neighbors: slots,
            neighbor_count: neighbors.len() as u8,
            elevation,
        }
    }

    #[inline]
    pub fn id(&self) -> AcreId {
        self.id
    }

    /// Elevation in normalized units: -1.0 deep ocean, 0.0 coastline,
    /// 1.0 high mountains.
    #[inline]
    pub fn elevation(&self) -> f32 {
        self.elevation
    }

    /// Number of adjacent cells: 6 for hexagonal acres, 5 for the twelve
    /// pentagonal ones.
    #[inline]
    pub fn neighbor_count(&self) -> usize {
        self.neighbor_count as usize
    }

    /// The present neighbor ids, in stored order.
    #[inline]
    pub fn neighbor_ids(&self) -> impl ExactSizeIterator<Item = AcreId> + '_ {
        self.neighbors[..self.neighbor_count as usize]
            .iter()
            .map(|&raw| AcreId::new(raw))
    }
}
