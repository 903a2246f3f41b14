pub mod altar;
pub mod camera;
pub mod common;
pub mod crew;
pub mod items;
pub mod telepathy;
pub mod wardrobe;

pub use altar::{Herald, SacrificialAltar};
pub use camera::{CAMERA_SLOT, Mountable, MountedCamera, SpyCamera};
pub use common::{Dead, GameEntity, Position};
pub use crew::{Ascended, Crew, CrewRole, Cultist, SacrificeTarget, Strapped};
pub use items::{Corrupted, Hands, Item, ItemKind, ItemSlot, ItemSlots, SlotFilter, SlotId};
pub use telepathy::{ChannelId, OCCULT_CHANNEL, Telepathy};
pub use wardrobe::{Irremovable, Sealed, Wardrobe, WearSlot};
