//! navfx drives screen-to-screen transition animations for frame-driven UI layers.
//!
//! Given the screen that should be shown and a navigation direction, the [`Orchestrator`]
//! computes, frame by frame, the [`EffectDescription`] (opacity, offset, darkening overlay)
//! of the outgoing and incoming screens and commits the new screen once the transition has
//! settled.
//!
//! # Pieces
//!
//! 1. **Notifier**: [`Emitter`] / [`Collector`] single-slot events, run as cooperative tasks on
//!    a [`TaskScope`].
//! 2. **Progress**: [`AnimationProgress`], a `StartIdle -> Running -> EndIdle` machine over a
//!    pure reducer ([`ProgressState::reduce`]) that hands out per-consumer tweened floats.
//! 3. **Effects**: [`EffectConfig`] per screen and [`resolve`] / [`Motion`] to turn a progress
//!    value into an [`EffectDescription`].
//! 4. **Orchestration**: [`Orchestrator::render`], called once per frame with a [`FrameCtx`].
//!
//! Everything runs on the caller's thread; nothing blocks and nothing spawns threads.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod effects;
mod foundation;
mod navigation;
mod notifier;

pub use animation::ease::{AnimSpec, Ease};
pub use animation::progress::{AnimationProgress, ProgressEvent, ProgressState, Reduced, Step};
pub use effects::config::{
    EffectConfig, EffectConfigBuilder, EffectVariant, FADE_DURATION_MS, HorizontalEntrance,
    SLIDE_HORIZONTAL_DURATION_MS, SLIDE_HORIZONTAL_OUT_DARK_ALPHA_FACTOR,
    SLIDE_VERTICAL_DURATION_MS, SLIDE_VERTICAL_OUT_DARK_ALPHA_FACTOR, Scope, SlideEffect,
    VerticalEntrance,
};
pub use effects::direction::{ContentRole, NavDirection};
pub use effects::resolve::{EffectDescription, Motion, SlidePhase, resolve};
pub use foundation::core::{Affine, FrameCtx, FrameIndex, Fps, Size, Vec2};
pub use foundation::error::{NavFxError, NavFxResult};
pub use navigation::orchestrator::{Orchestrator, VisiblePair};
pub use navigation::screen::{Screen, screens_from_json};
pub use notifier::collector::Collector;
pub use notifier::emitter::Emitter;
pub use notifier::scope::{Job, TaskScope};
