use bevy_ecs::component::Component;
use bevy_ecs::entity::Entity;

/// Marker for station crew (anything that can act, wear clothing, and die).
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Crew;

/// Station role, used for sacrifice-target tier eligibility.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrewRole {
    Captain,
    Command,
    Rank,
}

/// Marker for cult members; only cultists may begin a rite.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Cultist;

/// Marker for cultists who have ascended. The rite requires a quorum of
/// living ascended cultists to proceed.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Ascended;

/// The bearer is strapped down to the referenced altar.
#[derive(Component, Debug, Clone, Copy)]
pub struct Strapped {
    pub altar: Entity,
}

/// The bearer has been chosen as a sacrifice target of the given tier.
///
/// The tier is kept on the target so a fallen target can be replaced by
/// another crewmate of the same tier.
#[derive(Component, Debug, Clone, Copy)]
pub struct SacrificeTarget {
    pub tier: u8,
}
