use crate::foundation::core::{FrameIndex, Fps};

/// Easing applied to normalized progress.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Ease {
    /// Progress follows time linearly.
    #[default]
    Linear,
    /// Jump straight to the end value.
    Snap,
}

impl Ease {
    /// Map `t` in `[0, 1]` to eased progress in `[0, 1]`.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::Snap => 1.0,
        }
    }
}

/// How one consumer moves from its start value to its end value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AnimSpec {
    /// Total duration in milliseconds.
    pub duration_ms: u32,
    /// Easing over that duration.
    pub ease: Ease,
}

impl AnimSpec {
    /// Linear tween over `duration_ms`.
    pub fn linear(duration_ms: u32) -> Self {
        Self {
            duration_ms,
            ease: Ease::Linear,
        }
    }

    /// Zero-duration jump.
    pub fn snap() -> Self {
        Self {
            duration_ms: 0,
            ease: Ease::Snap,
        }
    }

    /// Eased progress in `[0, 1]` after `elapsed_ms`.
    pub fn fraction(self, elapsed_ms: f64) -> f64 {
        if self.duration_ms == 0 {
            return 1.0;
        }
        self.ease.apply(elapsed_ms / f64::from(self.duration_ms))
    }

    /// Eased progress between two frames.
    pub fn fraction_between(self, from: FrameIndex, to: FrameIndex, fps: Fps) -> f64 {
        self.fraction(fps.frames_to_millis(to.since(from)))
    }
}

/// Linear interpolation between `a` and `b`.
pub(crate) fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
