//! Screens and the transition orchestrator that animates between them.

pub(crate) mod orchestrator;
pub(crate) mod screen;
