//! Re-export public algorithms.

pub mod disruption;
pub mod report;
pub mod window;

pub use disruption::{
    CdOutcome, UNDEFINED_INDEX, cdindex, cdindex_outcome, iindex, mcdindex, witnesses,
};
pub use report::{IndexReport, index_report, index_reports};
pub use window::TimeWindow;
