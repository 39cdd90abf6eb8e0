use crate::foundation::error::{NavFxError, NavFxResult};

pub use kurbo::{Affine, Size, Vec2};

/// Monotonic frame counter supplied by the rendering layer.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize,
    serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

impl FrameIndex {
    /// Frames elapsed since `earlier`, saturating at zero.
    pub fn since(self, earlier: FrameIndex) -> u64 {
        self.0.saturating_sub(earlier.0)
    }

    /// Next.
    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

/// Rational frame rate (`num / den` frames per second).
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    /// Numerator.
    pub num: u32,
    /// Denominator.
    pub den: u32, // must be > 0
}

impl Fps {
    /// Build a validated frame rate.
    pub fn new(num: u32, den: u32) -> NavFxResult<Self> {
        let fps = Self { num, den };
        fps.validate()?;
        Ok(fps)
    }

    /// Both parts must be non-zero.
    pub fn validate(self) -> NavFxResult<()> {
        if self.num == 0 || self.den == 0 {
            return Err(NavFxError::validation(format!(
                "frame rate {}/{} cannot time a transition; both parts must be non-zero",
                self.num, self.den
            )));
        }
        Ok(())
    }

    /// Duration of `frames` frames in milliseconds.
    ///
    /// The integer product is formed before the single division so that frame-aligned
    /// durations (12 frames at 60 fps is exactly 200 ms) compare exactly.
    pub fn frames_to_millis(self, frames: u64) -> f64 {
        let scaled = u128::from(frames) * 1000 * u128::from(self.den);
        scaled as f64 / f64::from(self.num)
    }
}

/// Everything the rendering layer hands over for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameCtx {
    /// Frame being rendered.
    pub frame: FrameIndex,
    /// Clock rate.
    pub fps: Fps,
    /// Slide offsets are measured against this size.
    pub viewport: Size,
}

impl FrameCtx {
    /// New context.
    pub fn new(frame: FrameIndex, fps: Fps, viewport: Size) -> Self {
        Self {
            frame,
            fps,
            viewport,
        }
    }

    /// Next frame.
    pub fn next(self) -> Self {
        Self {
            frame: self.frame.next(),
            ..self
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
