use crate::{
    effects::{config::EffectConfig, resolve::EffectDescription},
    foundation::error::{NavFxError, NavFxResult},
};

/// One navigable unit of content.
///
/// `id` and `config` are fixed at construction. `effect` is written by the
/// [`Orchestrator`](crate::Orchestrator) every frame of a transition and read by the renderer.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Screen {
    id: String,
    #[serde(default)]
    config: EffectConfig,
    #[serde(skip)]
    effect: EffectDescription,
}

impl Screen {
    /// Screen with an explicit effect configuration.
    pub fn new(id: impl Into<String>, config: EffectConfig) -> Self {
        Self {
            id: id.into(),
            config,
            effect: EffectDescription::IDENTITY,
        }
    }

    /// Screen that fades in and out.
    pub fn with_default_config(id: impl Into<String>) -> Self {
        Self::new(id, EffectConfig::default())
    }

    /// Stable identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Effect configuration used when this screen is the one being entered.
    pub fn config(&self) -> &EffectConfig {
        &self.config
    }

    /// Effect to apply this frame.
    pub fn effect(&self) -> EffectDescription {
        self.effect
    }

    pub(crate) fn set_effect(&mut self, effect: EffectDescription) {
        self.effect = effect;
    }

    pub(crate) fn validate(&self) -> NavFxResult<()> {
        if self.id.trim().is_empty() {
            return Err(NavFxError::validation("screen id must be non-empty"));
        }
        self.config.validate().map_err(|e| match e {
            NavFxError::Validation(msg) => {
                NavFxError::validation(format!("screen '{}': {msg}", self.id))
            }
            other => other,
        })
    }
}

/// Parse a JSON array of screens (`[{ "id": ..., "config": { ... } }, ...]`).
pub fn screens_from_json(json: &str) -> NavFxResult<Vec<Screen>> {
    let screens: Vec<Screen> =
        serde_json::from_str(json).map_err(|e| NavFxError::serde(e.to_string()))?;
    for screen in &screens {
        screen.validate()?;
    }
    Ok(screens)
}

#[cfg(test)]
#[path = "../../tests/unit/navigation/screen.rs"]
mod tests;
