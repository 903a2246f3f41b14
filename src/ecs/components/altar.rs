use bevy_ecs::component::Component;

/// A sacrificial altar. Each altar carries out at most one rite.
#[derive(Component, Debug, Clone)]
pub struct SacrificialAltar {
    pub used: bool,
    /// Duration of the rite, in seconds.
    pub rite_secs: u32,
}

impl Default for SacrificialAltar {
    fn default() -> Self {
        Self {
            used: false,
            rite_secs: 30,
        }
    }
}

/// Marker for the herald spawned when the summoning completes.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Herald;
