use bevy_app::{App, Plugin};

use super::systems::camera::CameraPlugin;
use super::systems::rite::RitePlugin;
use super::systems::telepathy::TelepathyPlugin;
use super::systems::wardrobe::WardrobePlugin;

/// Aggregate plugin that installs all four content feature plugins.
/// Corruption has no system of its own — it is entirely command-driven.
pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((CameraPlugin, RitePlugin, WardrobePlugin, TelepathyPlugin));
    }
}
