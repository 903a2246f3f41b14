use bevy_ecs::component::Component;

/// Identifier of a telepathy channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChannelId(pub &'static str);

/// Channel used by the cult; the summoning completion announces on it.
pub const OCCULT_CHANNEL: ChannelId = ChannelId("occult");

/// Telepathy ability. Every bearer hears its channel; only bearers with
/// `can_send` may transmit.
#[derive(Component, Debug, Clone, Copy)]
pub struct Telepathy {
    pub can_send: bool,
    pub channel: ChannelId,
}
