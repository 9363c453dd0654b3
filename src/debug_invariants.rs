//! Opt-in validation of traversal bookkeeping.
//!
//! The navigators maintain several id sets whose pairwise relationships
//! (wave disjointness, queue↔pending mirroring) the algorithms rely on.
//! These checks are too expensive for release hot paths, so they run only
//! in debug builds or under the `check-invariants`/`strict-invariants`
//! features.

use crate::walk_error::AcreWalkError;

/// Trait for validating data structure invariants.
pub trait DebugInvariants {
    /// Assert invariants in debug builds or when invariant checking is enabled.
    fn debug_assert_invariants(&self);
    /// Validate invariants and return the first error encountered.
    fn validate_invariants(&self) -> Result<(), AcreWalkError>;
}

// Blanket impl for Box<T>
impl<T: DebugInvariants + ?Sized> DebugInvariants for Box<T> {
    #[inline]
    fn debug_assert_invariants(&self) {
        (**self).debug_assert_invariants();
    }

    #[inline]
    fn validate_invariants(&self) -> Result<(), AcreWalkError> {
        (**self).validate_invariants()
    }
}

/// Helper macro to run a fallible check and panic on error when invariant
/// checking is enabled.
#[macro_export]
macro_rules! debug_invariants {
    ($expr:expr, $($ctx:tt)*) => {
        #[cfg(any(debug_assertions, feature = "strict-invariants", feature = "check-invariants"))]
        if let Err(e) = $expr {
            panic!(concat!("[invariants] ", $($ctx)*, ": {}"), e);
        }
    };
}
