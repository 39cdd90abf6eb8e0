//! Navigation effect configuration and resolution.

pub(crate) mod config;
pub(crate) mod direction;
pub(crate) mod resolve;
