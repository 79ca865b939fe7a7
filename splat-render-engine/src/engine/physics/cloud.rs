use bevy::prelude::*;

/// Simulation state of the sprite as parallel buffers of equal length.
///
/// `rest_positions` and `colors` are fixed after creation; `positions`
/// and `velocities` belong to the integrator and change every frame.
#[derive(Resource, Debug, Default)]
pub struct SpriteCloud {
    pub rest_positions: Vec<Vec3>,
    pub positions: Vec<Vec3>,
    pub velocities: Vec<Vec3>,
    pub colors: Vec<Vec3>,
}

impl SpriteCloud {
    /// Build buffers from sampled positions and colours. Rest positions
    /// are an independent copy; velocities start at zero.
    pub fn from_samples(positions: Vec<Vec3>, colors: Vec<Vec3>) -> Self {
        debug_assert_eq!(positions.len(), colors.len());
        let rest_positions = positions.clone();
        let velocities = vec![Vec3::ZERO; positions.len()];
        Self {
            rest_positions,
            positions,
            velocities,
            colors,
        }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffers_share_length_and_velocities_start_at_zero() {
        let positions = vec![Vec3::X, Vec3::Y, Vec3::Z];
        let colors = vec![Vec3::ONE; 3];
        let cloud = SpriteCloud::from_samples(positions.clone(), colors);

        assert_eq!(cloud.len(), 3);
        assert_eq!(cloud.rest_positions, positions);
        assert_eq!(cloud.velocities, vec![Vec3::ZERO; 3]);
    }

    #[test]
    fn rest_positions_are_an_independent_copy() {
        let mut cloud = SpriteCloud::from_samples(vec![Vec3::X], vec![Vec3::ONE]);
        cloud.positions[0] = Vec3::splat(5.0);
        assert_eq!(cloud.rest_positions[0], Vec3::X);
    }
}
