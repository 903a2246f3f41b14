pub mod entity_map;
pub mod event_log;
pub mod game_resources;

pub use entity_map::GameEntityMap;
pub use event_log::EventLog;
pub use game_resources::{GameIds, GameRng, PopupEntry, Popups, SummoningRule};
