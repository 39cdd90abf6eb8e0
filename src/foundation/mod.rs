//! Shared primitives: error taxonomy, frame clock types and geometry re-exports.

pub(crate) mod core;
pub(crate) mod error;
