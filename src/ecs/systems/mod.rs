pub mod camera;
pub mod rite;
pub mod telepathy;
pub mod wardrobe;

use bevy_ecs::entity::Entity;
use bevy_ecs::query::QueryFilter;
use bevy_ecs::system::Query;

use super::components::GameEntity;

pub use camera::CameraPlugin;
pub use rite::RitePlugin;
pub use telepathy::TelepathyPlugin;
pub use wardrobe::WardrobePlugin;

/// Display name for journal descriptions; entities without identity get a
/// generic stand-in.
pub(crate) fn name_of<F: QueryFilter>(names: &Query<&GameEntity, F>, entity: Entity) -> String {
    names
        .get(entity)
        .map(|g| g.name.clone())
        .unwrap_or_else(|_| "someone".into())
}
