use bevy_ecs::component::Component;

/// Identity carried by every content entity: stable journal ID plus display name.
#[derive(Component, Debug, Clone)]
pub struct GameEntity {
    pub id: u64,
    pub name: String,
}

/// Position on the station grid.
#[derive(Component, Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// A spot directly beside this one, used when dropping items next to a body.
    pub fn beside(self) -> Self {
        Self {
            x: self.x + 0.5,
            y: self.y,
        }
    }
}

/// Marker for entities that have died. The entity stays in the world as a
/// corpse; systems treat it as inert.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Dead;
