use bevy_ecs::component::Component;
use bevy_ecs::entity::Entity;

use super::items::SlotId;

/// Slot ID used to hold a mounted camera on its target.
pub const CAMERA_SLOT: SlotId = SlotId("camera_mount");

/// State of a spy camera gadget, carried by the camera item itself.
///
/// `attached == true` must always agree with the presence of a
/// `MountedCamera` marker on the target; both are updated inside the same
/// applicator step.
#[derive(Component, Debug, Clone)]
pub struct SpyCamera {
    pub attached: bool,
    pub slot_id: SlotId,
    /// Confirmation delay for mounting, in seconds.
    pub attach_secs: u32,
    /// Confirmation delay for unmounting, in seconds.
    pub detach_secs: u32,
}

impl Default for SpyCamera {
    fn default() -> Self {
        Self {
            attached: false,
            slot_id: CAMERA_SLOT,
            attach_secs: 3,
            detach_secs: 3,
        }
    }
}

/// Eligibility marker: only entities carrying this accept a camera.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Mountable;

/// A camera is currently mounted on the bearer. At most one per target.
///
/// `camera` is a weak back-reference — the camera entity may be despawned
/// independently, so it is only ever resolved through a store lookup.
#[derive(Component, Debug, Clone, Copy)]
pub struct MountedCamera {
    pub camera: Entity,
    pub installed_by: Entity,
    pub slot_id: SlotId,
}
