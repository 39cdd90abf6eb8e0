/// Navigation direction of a transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum NavDirection {
    /// Forward navigation.
    Push,
    /// Back navigation.
    Pop,
}

impl NavDirection {
    /// Map a "navigating back" flag to a direction.
    pub fn from_is_back(is_back: bool) -> Self {
        if is_back { Self::Pop } else { Self::Push }
    }
}

/// Whether a screen is appearing or disappearing, independent of the direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ContentRole {
    /// The requested screen.
    Entering,
    /// The previously settled screen.
    Exiting,
}
