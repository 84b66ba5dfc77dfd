//! The feeding area: resources, the dependent target, and layout sampling.

use forage_agent::Area;
use forage_core::{
    AreaId, ForageError, ForageResult, ResourceId, Sector, SimRng, Vec3, sample_in_sector,
};
use tracing::debug;

use crate::{SimError, SimResult};

// ── AreaLayout ────────────────────────────────────────────────────────────────

/// Where things are placed when an area resets, and how large they are for
/// contact detection.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AreaLayout {
    /// Anchor for every placement sector.
    pub centre: Vec3,

    /// Resources scattered on each reset.
    pub resource_count: u32,

    pub target_sector:   Sector,
    pub resource_sector: Sector,
    /// Where agent bodies are placed when their episode begins.
    pub agent_spawn:     Sector,

    pub agent_radius:    f32,
    pub resource_radius: f32,
    pub target_radius:   f32,
    pub hazard_radius:   f32,
}

impl Default for AreaLayout {
    fn default() -> Self {
        Self {
            centre:          Vec3::ZERO,
            resource_count:  4,
            target_sector:   Sector::new(-45.0, 45.0, 4.0, 9.0),
            resource_sector: Sector::new(100.0, 260.0, 2.0, 13.0),
            agent_spawn:     Sector::disc(9.0),
            agent_radius:    0.5,
            resource_radius: 0.5,
            target_radius:   0.75,
            hazard_radius:   1.0,
        }
    }
}

impl AreaLayout {
    pub fn validate(&self) -> SimResult<()> {
        for (name, sector) in [
            ("target_sector", &self.target_sector),
            ("resource_sector", &self.resource_sector),
            ("agent_spawn", &self.agent_spawn),
        ] {
            if !sector.is_valid() {
                return Err(SimError::Config(format!("{name} is not a valid sector: {sector:?}")));
            }
        }
        for (name, radius) in [
            ("agent_radius", self.agent_radius),
            ("resource_radius", self.resource_radius),
            ("target_radius", self.target_radius),
            ("hazard_radius", self.hazard_radius),
        ] {
            if !radius.is_finite() || radius < 0.0 {
                return Err(SimError::Config(format!("{name} must be finite and >= 0, got {radius}")));
            }
        }
        if !self.centre.is_finite() {
            return Err(SimError::Config(format!("centre must be finite, got {}", self.centre)));
        }
        Ok(())
    }
}

// ── FeedingArea ───────────────────────────────────────────────────────────────

/// One consumable resource lying in the area.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Resource {
    pub id:       ResourceId,
    pub position: Vec3,
}

/// The host's [`Area`]: owns the resources and the dependent target and lays
/// them out from its own RNG stream.
///
/// Resource ids increase monotonically across resets.
pub struct FeedingArea {
    id:            AreaId,
    layout:        AreaLayout,
    resources:     Vec<Resource>,
    target:        Vec3,
    rng:           SimRng,
    next_resource: u32,
    resets:        u32,
}

impl FeedingArea {
    /// An empty area.  Nothing is placed until the first
    /// [`reset_layout`][Area::reset_layout].
    pub fn new(id: AreaId, layout: AreaLayout, rng: SimRng) -> Self {
        Self {
            id,
            target: layout.centre,
            layout,
            resources: Vec::new(),
            rng,
            next_resource: 0,
            resets: 0,
        }
    }

    #[inline]
    pub fn id(&self) -> AreaId {
        self.id
    }

    #[inline]
    pub fn layout(&self) -> &AreaLayout {
        &self.layout
    }

    /// Resources currently in the area, in placement order.
    #[inline]
    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    pub fn resource(&self, id: ResourceId) -> ForageResult<&Resource> {
        self.resources
            .iter()
            .find(|r| r.id == id)
            .ok_or(ForageError::ResourceNotFound(id))
    }

    /// Layout resets since creation.
    #[inline]
    pub fn resets(&self) -> u32 {
        self.resets
    }

    /// A uniformly random heading in degrees, from the area's stream.
    pub fn random_yaw(&mut self) -> f32 {
        self.rng.gen_range(0.0f32..360.0)
    }
}

impl Area for FeedingArea {
    fn reset_layout(&mut self) {
        let centre = self.layout.centre;
        self.target = sample_in_sector(&mut self.rng, centre, &self.layout.target_sector);

        self.resources.clear();
        for _ in 0..self.layout.resource_count {
            let position = sample_in_sector(&mut self.rng, centre, &self.layout.resource_sector);
            self.resources.push(Resource { id: ResourceId(self.next_resource), position });
            self.next_resource += 1;
        }
        self.resets += 1;

        debug!(area = %self.id, resets = self.resets, resources = self.resources.len(), "area layout reset");
    }

    fn remove_resource(&mut self, resource: ResourceId) {
        self.resources.retain(|r| r.id != resource);
    }

    fn remaining_resources(&self) -> usize {
        self.resources.len()
    }

    fn target_position(&self) -> Vec3 {
        self.target
    }

    fn sample_random_point(&mut self, anchor: Vec3, sector: &Sector) -> Vec3 {
        sample_in_sector(&mut self.rng, anchor, sector)
    }
}
