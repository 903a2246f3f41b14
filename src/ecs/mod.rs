pub mod app;
pub mod clock;
pub mod commands;
pub mod components;
pub mod events;
pub mod inventory;
pub mod messages;
pub mod plugin;
pub mod resources;
pub mod schedule;
pub mod slots;
pub mod spawn;
pub mod systems;
pub mod test_helpers;
pub mod timed;

pub use app::{
    build_game_app, build_game_app_deterministic, build_game_app_seeded,
    build_game_app_with_executor,
};
pub use clock::GameClock;
pub use commands::{GameCommand, GameCommandKind, apply_game_commands};
pub use components::{
    Ascended, CAMERA_SLOT, ChannelId, Corrupted, Crew, CrewRole, Cultist, Dead, GameEntity, Hands,
    Herald, Irremovable, Item, ItemKind, ItemSlot, ItemSlots, Mountable, MountedCamera,
    OCCULT_CHANNEL, Position, SacrificeTarget, SacrificialAltar, Sealed, SlotFilter, SlotId,
    SpyCamera, Strapped, Telepathy, Wardrobe, WearSlot,
};
pub use events::GameReactiveEvent;
pub use messages::{
    BeginSacrifice, InteractUsing, ItemEquipped, ItemPickedUp, TelepathyBroadcast, TelepathySend,
    UnmountVerb,
};
pub use plugin::ContentPlugin;
pub use resources::{EventLog, GameEntityMap, GameIds, GameRng, PopupEntry, Popups, SummoningRule};
pub use schedule::{FeatureSet, GameTick, TickPhase, configure_game_schedule};
pub use timed::{TimedActionFinished, TimedActionKind, TimedActionQueue};
