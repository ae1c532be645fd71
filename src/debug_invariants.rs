//! Structural self-checks for graph storage.
//!
//! Types implementing [`DebugInvariants`] can validate their own bookkeeping
//! (dense ids, mirrored adjacency, edge counts). The [`debug_invariants!`]
//! macro wraps a fallible check so it only fires in debug builds or when one
//! of the `strict-invariants` / `check-invariants` features is on.

use crate::cdindex_error::CdIndexError;

/// Trait for validating data structure invariants.
pub trait DebugInvariants {
    /// Panic if invariants fail, in debug builds or when invariant checking is enabled.
    fn debug_assert_invariants(&self);

    /// Validate invariants and return the first violation encountered.
    fn validate_invariants(&self) -> Result<(), CdIndexError>;

    /// `true` when [`validate_invariants`](Self::validate_invariants) passes.
    fn invariants_hold(&self) -> bool {
        match self.validate_invariants() {
            Ok(()) => true,
            Err(e) => {
                log::warn!("invariant check failed: {e}");
                false
            }
        }
    }
}

/// Run a fallible check and panic with context on error when invariant
/// checking is enabled. Compiles to nothing otherwise.
#[macro_export]
macro_rules! debug_invariants {
    ($expr:expr, $($ctx:tt)*) => {
        #[cfg(any(debug_assertions, feature = "strict-invariants", feature = "check-invariants"))]
        if let Err(e) = $expr {
            panic!(concat!("[invariants] ", $($ctx)*, ": {}"), e);
        }
    };
}
