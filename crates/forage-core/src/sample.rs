//! Random destination sampling inside an angular sector around an anchor.
//!
//! Wanderers pick their next destination with [`sample_in_sector`]; hosts use
//! the same function to scatter resources and spawn agents.  Randomness comes
//! through the [`Sampler`] trait so tests can substitute fixed values.

use glam::Vec3;

use crate::geo::heading;

/// A source of uniform scalars.
pub trait Sampler {
    /// Uniform value in `[lo, hi)`.  Returns `lo` when `hi <= lo`.
    fn range(&mut self, lo: f32, hi: f32) -> f32;
}

/// A planar annular sector: headings in `[min_angle_deg, max_angle_deg)`
/// (yaw, degrees, `0°` = `+Z`) and distances in `[min_radius, max_radius)`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sector {
    pub min_angle_deg: f32,
    pub max_angle_deg: f32,
    pub min_radius:    f32,
    pub max_radius:    f32,
}

impl Sector {
    pub const fn new(min_angle_deg: f32, max_angle_deg: f32, min_radius: f32, max_radius: f32) -> Self {
        Self { min_angle_deg, max_angle_deg, min_radius, max_radius }
    }

    /// Full circle of radius `max_radius`.
    pub const fn disc(max_radius: f32) -> Self {
        Self::new(0.0, 360.0, 0.0, max_radius)
    }

    /// `true` when every bound is finite and the radii are non-negative and
    /// ordered.  Angle bounds may be given in either order; an inverted
    /// angle range collapses to `min_angle_deg`.
    pub fn is_valid(&self) -> bool {
        [self.min_angle_deg, self.max_angle_deg, self.min_radius, self.max_radius]
            .iter()
            .all(|v| v.is_finite())
            && self.min_radius >= 0.0
            && self.max_radius >= self.min_radius
    }
}

/// Pick a point in `sector` around `anchor` (on the anchor's horizontal
/// plane).
///
/// Each of radius and angle is sampled only when its range is non-empty;
/// otherwise the minimum is used as-is.
pub fn sample_in_sector<S: Sampler + ?Sized>(sampler: &mut S, anchor: Vec3, sector: &Sector) -> Vec3 {
    let radius = if sector.max_radius > sector.min_radius {
        sampler.range(sector.min_radius, sector.max_radius)
    } else {
        sector.min_radius
    };
    let angle = if sector.max_angle_deg > sector.min_angle_deg {
        sampler.range(sector.min_angle_deg, sector.max_angle_deg)
    } else {
        sector.min_angle_deg
    };
    anchor + heading(angle) * radius
}
