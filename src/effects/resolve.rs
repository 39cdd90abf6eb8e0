use crate::{
    animation::{ease::AnimSpec, progress::AnimationProgress},
    effects::{
        config::{EffectVariant, SlideEffect},
        direction::{ContentRole, NavDirection},
    },
    foundation::core::{Affine, Size, Vec2},
};

/// Visual effect applied to one screen for one frame.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct EffectDescription {
    /// Opacity multiplier in `[0, 1]`.
    pub opacity: f64,
    /// Translation in viewport units.
    pub offset: Vec2,
    /// Alpha of a black overlay drawn over the screen, in `[0, 1]`.
    pub overlay_alpha: f64,
}

impl EffectDescription {
    /// No-op effect.
    pub const IDENTITY: Self = Self {
        opacity: 1.0,
        offset: Vec2::ZERO,
        overlay_alpha: 0.0,
    };

    /// Whether applying this effect changes nothing.
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// Offset as an affine transform.
    pub fn transform(&self) -> Affine {
        Affine::translate(self.offset)
    }
}

impl Default for EffectDescription {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Which half of a slide a screen plays.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlidePhase {
    /// Moves between the viewport edge and its resting place; never darkened.
    In,
    /// The covered screen; moves partially and darkens.
    Out,
}

impl SlidePhase {
    /// Entering on push and exiting on pop play `In`; the other two play `Out`.
    pub fn select(direction: NavDirection, role: ContentRole) -> Self {
        match (role, direction) {
            (ContentRole::Entering, NavDirection::Push) | (ContentRole::Exiting, NavDirection::Pop) => {
                Self::In
            }
            (ContentRole::Exiting, NavDirection::Push) | (ContentRole::Entering, NavDirection::Pop) => {
                Self::Out
            }
        }
    }

    fn endpoints(self, direction: NavDirection) -> (f64, f64) {
        match (self, direction) {
            (Self::In, NavDirection::Push) => (1.0, 0.0),
            (Self::In, NavDirection::Pop) => (0.0, 1.0),
            (Self::Out, NavDirection::Push) => (0.0, -1.0),
            (Self::Out, NavDirection::Pop) => (-1.0, 0.0),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    fn extent(self, viewport: Size) -> f64 {
        match self {
            Self::Horizontal => viewport.width,
            Self::Vertical => viewport.height,
        }
    }

    fn vector(self, distance: f64) -> Vec2 {
        match self {
            Self::Horizontal => Vec2::new(distance, 0.0),
            Self::Vertical => Vec2::new(0.0, distance),
        }
    }

    /// Fraction of the extent a `CoverPush` covered screen travels.
    fn cover_push_scale(self) -> f64 {
        match self {
            Self::Horizontal => 0.5,
            Self::Vertical => 0.25,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Shape {
    Identity,
    Opacity,
    Slide {
        axis: Axis,
        phase: SlidePhase,
        entrance_factor: f64,
        out_scale: f64,
        out_dark_alpha_factor: f64,
    },
}

/// Resolved motion of one screen: the progress curve it follows and how a progress value
/// turns into an [`EffectDescription`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Motion {
    /// Progress value while the transition has not started.
    pub start: f64,
    /// Progress value once the transition has finished.
    pub end: f64,
    /// Timing of the curve.
    pub spec: AnimSpec,
    shape: Shape,
}

impl Motion {
    /// Motion that leaves the screen untouched.
    pub fn identity() -> Self {
        Self {
            start: 0.0,
            end: 0.0,
            spec: AnimSpec::snap(),
            shape: Shape::Identity,
        }
    }

    /// Plan the motion of a screen playing `role` in a `direction` transition.
    pub fn plan(variant: EffectVariant, direction: NavDirection, role: ContentRole) -> Self {
        match variant {
            EffectVariant::None => Self::identity(),
            EffectVariant::Fade { duration_ms } => {
                let (start, end) = match role {
                    ContentRole::Entering => (0.0, 1.0),
                    ContentRole::Exiting => (1.0, 0.5),
                };
                Self {
                    start,
                    end,
                    spec: AnimSpec::linear(duration_ms),
                    shape: Shape::Opacity,
                }
            }
            EffectVariant::SlideHorizontal {
                duration_ms,
                out_dark_alpha_factor,
                entrance,
                effect,
            } => Self::slide(
                Axis::Horizontal,
                direction,
                role,
                duration_ms,
                entrance.factor(),
                effect,
                out_dark_alpha_factor,
            ),
            EffectVariant::SlideVertical {
                duration_ms,
                out_dark_alpha_factor,
                entrance,
                effect,
            } => Self::slide(
                Axis::Vertical,
                direction,
                role,
                duration_ms,
                entrance.factor(),
                effect,
                out_dark_alpha_factor,
            ),
        }
    }

    fn slide(
        axis: Axis,
        direction: NavDirection,
        role: ContentRole,
        duration_ms: u32,
        entrance_factor: f64,
        effect: SlideEffect,
        out_dark_alpha_factor: f64,
    ) -> Self {
        let phase = SlidePhase::select(direction, role);
        let (start, end) = phase.endpoints(direction);
        let out_scale = match effect {
            SlideEffect::Push => 1.0,
            SlideEffect::Cover => 0.0,
            SlideEffect::CoverPush => axis.cover_push_scale(),
        };
        Self {
            start,
            end,
            spec: AnimSpec::linear(duration_ms),
            shape: Shape::Slide {
                axis,
                phase,
                entrance_factor,
                out_scale,
                out_dark_alpha_factor,
            },
        }
    }

    /// Slide sub-case, if this is a slide.
    pub fn slide_phase(&self) -> Option<SlidePhase> {
        match self.shape {
            Shape::Slide { phase, .. } => Some(phase),
            Shape::Identity | Shape::Opacity => None,
        }
    }

    /// Current progress value of this motion on `progress`.
    pub fn value(&self, progress: &AnimationProgress) -> f64 {
        progress.animate_float(self.start, self.end, self.spec)
    }

    /// Effect for a given progress value.
    pub fn describe(&self, value: f64, viewport: Size) -> EffectDescription {
        match self.shape {
            Shape::Identity => EffectDescription::IDENTITY,
            Shape::Opacity => EffectDescription {
                opacity: value.clamp(0.0, 1.0),
                ..EffectDescription::IDENTITY
            },
            Shape::Slide {
                axis,
                phase,
                entrance_factor,
                out_scale,
                out_dark_alpha_factor,
            } => {
                let span = axis.extent(viewport) * entrance_factor;
                match phase {
                    SlidePhase::In => EffectDescription {
                        offset: axis.vector(span * value),
                        ..EffectDescription::IDENTITY
                    },
                    SlidePhase::Out => EffectDescription {
                        offset: axis.vector(span * out_scale * value),
                        overlay_alpha: (-value * out_dark_alpha_factor).clamp(0.0, 1.0),
                        ..EffectDescription::IDENTITY
                    },
                }
            }
        }
    }
}

/// Effect of `variant` for a screen playing `role` in a `direction` transition at `value`.
pub fn resolve(
    variant: EffectVariant,
    direction: NavDirection,
    role: ContentRole,
    value: f64,
    viewport: Size,
) -> EffectDescription {
    Motion::plan(variant, direction, role).describe(value, viewport)
}

#[cfg(test)]
#[path = "../../tests/unit/effects/resolve.rs"]
mod tests;
