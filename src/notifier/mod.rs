//! Minimal cooperative multicast events.
//!
//! An [`Emitter`] holds a single-slot, drop-oldest buffer with no replay. A [`Collector`]
//! consumes it in one of three modes (once, forever, until a predicate holds) as a task on a
//! [`TaskScope`]. Tasks only make progress when the scope is driven, which keeps everything on
//! the thread that owns the scope.

pub(crate) mod collector;
pub(crate) mod emitter;
pub(crate) mod scope;
