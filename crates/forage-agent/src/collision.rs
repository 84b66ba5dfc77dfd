//! Contacts reported by the host.

use forage_core::ResourceId;

/// The category of the object the forager touched.
///
/// Hosts classify their contacts into this closed set; the forager dispatches
/// on it in [`ForagingAgent::on_collision`][crate::ForagingAgent::on_collision].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Collision {
    /// A consumable resource instance.
    Resource(ResourceId),
    /// The dependent target resources are delivered to.
    DependentTarget,
    /// Something that ends the episode on contact (a wanderer).
    Hazard,
    /// Anything else (walls, other foragers, obstacles).
    Other,
}

/// What an [`on_collision`][crate::ForagingAgent::on_collision] call did.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CollisionOutcome {
    /// Nothing changed (full while touching a resource, empty at the target,
    /// an `Other` contact, or the episode had already ended).
    Ignored,
    PickedUp(ResourceId),
    Delivered,
    /// Hazard contact; the episode is over.
    Caught,
}
