//! Frame-driven animation progress.

pub(crate) mod ease;
pub(crate) mod progress;
