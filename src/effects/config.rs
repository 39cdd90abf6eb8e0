use crate::{
    effects::direction::{ContentRole, NavDirection},
    foundation::error::{NavFxError, NavFxResult},
};

/// Default fade duration.
pub const FADE_DURATION_MS: u32 = 250;
/// Default horizontal slide duration.
pub const SLIDE_HORIZONTAL_DURATION_MS: u32 = 200;
/// Default darkening of a screen sliding out horizontally.
pub const SLIDE_HORIZONTAL_OUT_DARK_ALPHA_FACTOR: f64 = 0.75;
/// Default vertical slide duration.
pub const SLIDE_VERTICAL_DURATION_MS: u32 = 300;
/// Default darkening of a screen sliding out vertically.
pub const SLIDE_VERTICAL_OUT_DARK_ALPHA_FACTOR: f64 = 0.60;

/// Edge a horizontally sliding screen enters from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum HorizontalEntrance {
    /// Trailing edge (positive x).
    #[default]
    FromEnd,
    /// Leading edge (negative x).
    FromStart,
}

impl HorizontalEntrance {
    /// Sign multiplier of the slide offset.
    pub fn factor(self) -> f64 {
        match self {
            Self::FromEnd => 1.0,
            Self::FromStart => -1.0,
        }
    }
}

/// Edge a vertically sliding screen enters from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum VerticalEntrance {
    /// Bottom edge (positive y).
    #[default]
    FromBottom,
    /// Top edge (negative y).
    FromTop,
}

impl VerticalEntrance {
    /// Offset sign.
    pub fn factor(self) -> f64 {
        match self {
            Self::FromBottom => 1.0,
            Self::FromTop => -1.0,
        }
    }
}

/// How far the screen being covered moves along with the incoming one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum SlideEffect {
    /// Covered screen moves by a fraction of the viewport (half horizontally, quarter
    /// vertically).
    #[default]
    CoverPush,
    /// Covered screen stays put.
    Cover,
    /// Covered screen moves by the full viewport.
    Push,
}

/// One visual effect choice.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind")]
pub enum EffectVariant {
    /// No effect; the screen is drawn as is.
    None,
    /// Opacity fade.
    Fade {
        /// Duration in milliseconds.
        #[serde(default = "default_fade_duration_ms")]
        duration_ms: u32,
    },
    /// Horizontal slide with darkening of the covered screen.
    SlideHorizontal {
        /// Duration in milliseconds.
        #[serde(default = "default_slide_horizontal_duration_ms")]
        duration_ms: u32,
        /// Overlay alpha reached by the covered screen, in `[0, 1]`.
        #[serde(default = "default_slide_horizontal_dark")]
        out_dark_alpha_factor: f64,
        /// Entry edge.
        #[serde(default)]
        entrance: HorizontalEntrance,
        /// Covered screen motion.
        #[serde(default)]
        effect: SlideEffect,
    },
    /// Vertical slide with darkening of the covered screen.
    SlideVertical {
        /// Duration in milliseconds.
        #[serde(default = "default_slide_vertical_duration_ms")]
        duration_ms: u32,
        /// Overlay alpha reached by the covered screen, in `[0, 1]`.
        #[serde(default = "default_slide_vertical_dark")]
        out_dark_alpha_factor: f64,
        /// Entry edge.
        #[serde(default)]
        entrance: VerticalEntrance,
        /// Covered screen motion.
        #[serde(default)]
        effect: SlideEffect,
    },
}

fn default_fade_duration_ms() -> u32 {
    FADE_DURATION_MS
}

fn default_slide_horizontal_duration_ms() -> u32 {
    SLIDE_HORIZONTAL_DURATION_MS
}

fn default_slide_horizontal_dark() -> f64 {
    SLIDE_HORIZONTAL_OUT_DARK_ALPHA_FACTOR
}

fn default_slide_vertical_duration_ms() -> u32 {
    SLIDE_VERTICAL_DURATION_MS
}

fn default_slide_vertical_dark() -> f64 {
    SLIDE_VERTICAL_OUT_DARK_ALPHA_FACTOR
}

impl EffectVariant {
    /// Fade with the default duration.
    pub fn fade() -> Self {
        Self::Fade {
            duration_ms: FADE_DURATION_MS,
        }
    }

    /// Horizontal slide with default parameters.
    pub fn slide_horizontal() -> Self {
        Self::SlideHorizontal {
            duration_ms: SLIDE_HORIZONTAL_DURATION_MS,
            out_dark_alpha_factor: SLIDE_HORIZONTAL_OUT_DARK_ALPHA_FACTOR,
            entrance: HorizontalEntrance::default(),
            effect: SlideEffect::default(),
        }
    }

    /// Vertical slide with default parameters.
    pub fn slide_vertical() -> Self {
        Self::SlideVertical {
            duration_ms: SLIDE_VERTICAL_DURATION_MS,
            out_dark_alpha_factor: SLIDE_VERTICAL_OUT_DARK_ALPHA_FACTOR,
            entrance: VerticalEntrance::default(),
            effect: SlideEffect::default(),
        }
    }

    /// Animation length; zero for [`EffectVariant::None`].
    pub fn duration_ms(&self) -> u32 {
        match *self {
            Self::None => 0,
            Self::Fade { duration_ms }
            | Self::SlideHorizontal { duration_ms, .. }
            | Self::SlideVertical { duration_ms, .. } => duration_ms,
        }
    }

    /// Slides carry an `out_dark_alpha_factor` that must lie in `[0, 1]`; everything else
    /// is valid by construction.
    pub fn validate(&self) -> NavFxResult<()> {
        match *self {
            Self::None | Self::Fade { .. } => Ok(()),
            Self::SlideHorizontal {
                out_dark_alpha_factor,
                ..
            }
            | Self::SlideVertical {
                out_dark_alpha_factor,
                ..
            } => {
                if !out_dark_alpha_factor.is_finite()
                    || !(0.0..=1.0).contains(&out_dark_alpha_factor)
                {
                    return Err(NavFxError::validation(format!(
                        "out_dark_alpha_factor must be finite and in [0, 1], got {out_dark_alpha_factor}"
                    )));
                }
                Ok(())
            }
        }
    }
}

impl Default for EffectVariant {
    fn default() -> Self {
        Self::fade()
    }
}

/// Push and pop variants for one content role.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Scope {
    /// Used when navigating forward.
    #[serde(default)]
    pub push: EffectVariant,
    /// Used when navigating back.
    #[serde(default)]
    pub pop: EffectVariant,
}

impl Scope {
    /// Both directions.
    pub fn uniform(variant: EffectVariant) -> Self {
        Self {
            push: variant,
            pop: variant,
        }
    }

    /// Select by direction.
    pub fn for_direction(&self, direction: NavDirection) -> EffectVariant {
        match direction {
            NavDirection::Push => self.push,
            NavDirection::Pop => self.pop,
        }
    }
}

/// Per-screen transition configuration.
///
/// The configuration of the *entering* screen drives both sides of a transition: its `enter`
/// scope animates the entering screen and its `exit` scope the exiting one.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct EffectConfig {
    /// Variants applied to the entering screen.
    #[serde(default)]
    pub enter: Scope,
    /// Variants applied to the exiting screen.
    #[serde(default)]
    pub exit: Scope,
}

impl EffectConfig {
    /// All four slots.
    pub fn uniform(variant: EffectVariant) -> Self {
        Self {
            enter: Scope::uniform(variant),
            exit: Scope::uniform(variant),
        }
    }

    /// Start a builder where every slot holds `default`.
    pub fn builder(default: EffectVariant) -> EffectConfigBuilder {
        EffectConfigBuilder {
            config: Self::uniform(default),
        }
    }

    /// Variant played by a screen in `role` during a `direction` transition.
    ///
    /// Only the entering screen's configuration is consulted by the orchestrator, so the
    /// exiting screen's own `exit` scope never applies.
    pub fn variant(&self, role: ContentRole, direction: NavDirection) -> EffectVariant {
        match role {
            ContentRole::Entering => self.enter.for_direction(direction),
            ContentRole::Exiting => self.exit.for_direction(direction),
        }
    }

    /// Validate every slot.
    pub fn validate(&self) -> NavFxResult<()> {
        for (slot, variant) in [
            ("enter.push", self.enter.push),
            ("enter.pop", self.enter.pop),
            ("exit.push", self.exit.push),
            ("exit.pop", self.exit.pop),
        ] {
            variant.validate().map_err(|e| match e {
                NavFxError::Validation(msg) => NavFxError::validation(format!("{slot}: {msg}")),
                other => other,
            })?;
        }
        Ok(())
    }

    /// Parse and validate a JSON configuration.
    pub fn from_json(json: &str) -> NavFxResult<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| NavFxError::serde(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}

/// Consuming builder for [`EffectConfig`].
#[derive(Clone, Debug)]
pub struct EffectConfigBuilder {
    config: EffectConfig,
}

impl EffectConfigBuilder {
    /// Enter scope.
    pub fn enter(mut self, scope: Scope) -> Self {
        self.config.enter = scope;
        self
    }

    /// Exit scope.
    pub fn exit(mut self, scope: Scope) -> Self {
        self.config.exit = scope;
        self
    }

    /// `enter.push`.
    pub fn enter_push(mut self, variant: EffectVariant) -> Self {
        self.config.enter.push = variant;
        self
    }

    /// `enter.pop`.
    pub fn enter_pop(mut self, variant: EffectVariant) -> Self {
        self.config.enter.pop = variant;
        self
    }

    /// `exit.push`.
    pub fn exit_push(mut self, variant: EffectVariant) -> Self {
        self.config.exit.push = variant;
        self
    }

    /// `exit.pop`.
    pub fn exit_pop(mut self, variant: EffectVariant) -> Self {
        self.config.exit.pop = variant;
        self
    }

    /// Validate and return the configuration.
    pub fn build(self) -> NavFxResult<EffectConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/config.rs"]
mod tests;
