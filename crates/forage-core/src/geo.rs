//! World transform type and the small amount of 3-D geometry the core needs.
//!
//! Conventions: `+Y` is up and `+Z` is the local forward axis.  A positive
//! yaw turns the forward vector toward `+X`.  `f32` throughout, matching the
//! precision hosts typically store transforms in.

use glam::{Quat, Vec3};

/// Squared distance below which two points are treated as coincident.
const COINCIDENT_EPS_SQ: f32 = 1e-12;

/// Position and orientation of a simulated body.
///
/// Authoritative storage lives in the host; components receive `&mut
/// Transform` for the duration of one update.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
}

impl Default for Transform {
    fn default() -> Self {
        Self::at(Vec3::ZERO)
    }
}

impl Transform {
    /// Identity orientation at `position`.
    #[inline]
    pub fn at(position: Vec3) -> Self {
        Self { position, rotation: Quat::IDENTITY }
    }

    /// Unit vector the body is facing.
    #[inline]
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::Z
    }

    /// Local up axis.
    #[inline]
    pub fn up(&self) -> Vec3 {
        self.rotation * Vec3::Y
    }

    /// Reorient so that [`forward`][Self::forward] points at `target`.
    ///
    /// World up is the roll reference, so the body never banks.  When
    /// `target` coincides with the current position there is no direction to
    /// face and the orientation is left as it is.
    pub fn look_at(&mut self, target: Vec3) {
        let d = target - self.position;
        if d.length_squared() <= COINCIDENT_EPS_SQ {
            return;
        }
        let yaw = d.x.atan2(d.z);
        let horizontal = (d.x * d.x + d.z * d.z).sqrt();
        let pitch = -d.y.atan2(horizontal);
        self.rotation = Quat::from_rotation_y(yaw) * Quat::from_rotation_x(pitch);
    }

    /// Rotate about the local up axis by `degrees`.
    pub fn yaw_degrees(&mut self, degrees: f32) {
        if degrees == 0.0 {
            return;
        }
        self.rotation = (self.rotation * Quat::from_rotation_y(degrees.to_radians())).normalize();
    }

    /// Move by `delta` in world space.
    #[inline]
    pub fn translate(&mut self, delta: Vec3) {
        self.position += delta;
    }

    #[inline]
    pub fn distance_to(&self, point: Vec3) -> f32 {
        self.position.distance(point)
    }

    /// Unit vector from this body toward `point`; zero when coincident.
    #[inline]
    pub fn direction_to(&self, point: Vec3) -> Vec3 {
        (point - self.position).normalize_or_zero()
    }
}

/// Rotate `+Z` by `degrees` of yaw: the planar heading used by sector
/// sampling.
#[inline]
pub fn heading(degrees: f32) -> Vec3 {
    Quat::from_rotation_y(degrees.to_radians()) * Vec3::Z
}

impl std::fmt::Display for Transform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let fwd = self.forward();
        write!(
            f,
            "({:.3}, {:.3}, {:.3}) facing ({:.3}, {:.3}, {:.3})",
            self.position.x, self.position.y, self.position.z, fwd.x, fwd.y, fwd.z,
        )
    }
}
