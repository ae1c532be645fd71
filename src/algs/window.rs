//! Time windows anchored at a focal vertex's timestamp.

use crate::cdindex_error::CdIndexError;
use crate::graph::Timestamp;

/// The window `(start, start + delta]` following a focal timestamp.
///
/// The CD index counts witnesses strictly after the focal vertex and up to
/// and including `start + delta` ([`TimeWindow::contains`]). The I index has
/// no lower bound ([`TimeWindow::reaches`]). The upper bound saturates at
/// `i64::MAX` instead of overflowing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    start: Timestamp,
    end: Timestamp,
}

impl TimeWindow {
    /// Fails with [`CdIndexError::NegativeTimeDelta`] if `delta < 0`.
    pub fn after(start: Timestamp, delta: i64) -> Result<Self, CdIndexError> {
        if delta < 0 {
            return Err(CdIndexError::NegativeTimeDelta(delta));
        }
        Ok(Self {
            start,
            end: start.saturating_add(delta),
        })
    }

    #[inline]
    pub fn start(&self) -> Timestamp {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Timestamp {
        self.end
    }

    /// `start < t <= end`.
    #[inline]
    pub fn contains(&self, t: Timestamp) -> bool {
        self.start < t && t <= self.end
    }

    /// `t <= end`.
    #[inline]
    pub fn reaches(&self, t: Timestamp) -> bool {
        t <= self.end
    }
}
