//! The fixed-layout observation vector handed to the decision provider.

use forage_core::{Transform, Vec3};

/// Number of scalars in an [`Observation`].
pub const OBSERVATION_SIZE: usize = 8;

/// Order-stable observation:
///
/// | Index | Value                                  |
/// |-------|----------------------------------------|
/// | 0     | resource held (0 / 1)                  |
/// | 1     | distance to the dependent target       |
/// | 2..5  | unit direction to the target (x, y, z) |
/// | 5..8  | own forward vector (x, y, z)           |
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct Observation(pub [f32; OBSERVATION_SIZE]);

impl Observation {
    /// Build the observation for a body at `body` relative to `target`.
    pub fn collect(has_resource: bool, body: &Transform, target: Vec3) -> Self {
        let direction = body.direction_to(target);
        let forward = body.forward();
        Self([
            if has_resource { 1.0 } else { 0.0 },
            body.distance_to(target),
            direction.x,
            direction.y,
            direction.z,
            forward.x,
            forward.y,
            forward.z,
        ])
    }

    #[inline]
    pub fn as_slice(&self) -> &[f32] {
        &self.0
    }

    #[inline]
    pub fn has_resource(&self) -> bool {
        self.0[0] > 0.5
    }

    #[inline]
    pub fn target_distance(&self) -> f32 {
        self.0[1]
    }

    #[inline]
    pub fn target_direction(&self) -> Vec3 {
        Vec3::new(self.0[2], self.0[3], self.0[4])
    }

    #[inline]
    pub fn forward(&self) -> Vec3 {
        Vec3::new(self.0[5], self.0[6], self.0[7])
    }
}
