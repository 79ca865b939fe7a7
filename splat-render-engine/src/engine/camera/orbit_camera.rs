use bevy::prelude::*;

use constants::camera::{ROTATE_SPEED, START_DISTANCE, ZOOM_MAX, ZOOM_MIN, ZOOM_SPEED};

/// Orbit state: a yaw angle around the scene origin and a zoom
/// distance. Purely additive; no other camera state is kept.
#[derive(Resource, Debug, Clone, Copy)]
pub struct OrbitCamera {
    pub angle: f32,
    pub distance: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            angle: 0.0,
            distance: START_DISTANCE,
        }
    }
}

impl OrbitCamera {
    /// Apply one frame of held input. Directions are -1, 0 or +1; the
    /// zoom distance is clamped after every update.
    pub fn advance(&mut self, rotate_dir: f32, zoom_dir: f32, dt: f32) {
        self.angle += rotate_dir * ROTATE_SPEED * dt;
        self.distance = (self.distance + zoom_dir * ZOOM_SPEED * dt).clamp(ZOOM_MIN, ZOOM_MAX);
    }

    /// Camera transform on the orbit circle, looking at the origin.
    pub fn transform(&self) -> Transform {
        let eye = Quat::from_rotation_y(self.angle) * Vec3::new(0.0, 0.0, self.distance);
        Transform::from_translation(eye).looking_at(Vec3::ZERO, Vec3::Y)
    }
}

/// Keyboard orbit: A/D rotate the view, W/S zoom in and out. Rotating
/// the camera the opposite way reads as the scene spinning with A.
pub fn camera_controller(
    mut orbit: ResMut<OrbitCamera>,
    keyboard: Res<ButtonInput<KeyCode>>,
    time: Res<Time>,
    mut cameras: Query<&mut Transform, With<Camera3d>>,
) {
    let mut rotate_dir = 0.0;
    if keyboard.pressed(KeyCode::KeyA) {
        rotate_dir -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) {
        rotate_dir += 1.0;
    }

    let mut zoom_dir = 0.0;
    if keyboard.pressed(KeyCode::KeyW) {
        zoom_dir -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyS) {
        zoom_dir += 1.0;
    }

    orbit.advance(rotate_dir, zoom_dir, time.delta_secs());

    if let Ok(mut camera_transform) = cameras.single_mut() {
        *camera_transform = orbit.transform();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    #[test]
    fn rotation_accumulates_at_fixed_rate() {
        let mut orbit = OrbitCamera::default();
        orbit.advance(1.0, 0.0, 1.0);
        assert!((orbit.angle - ROTATE_SPEED).abs() < 1e-6);
        assert_eq!(orbit.distance, START_DISTANCE);
    }

    #[test]
    fn zoom_out_clamps_exactly_at_the_far_limit() {
        let mut orbit = OrbitCamera {
            angle: 0.0,
            distance: ZOOM_MIN,
        };
        // Long enough to blow past the limit several times over.
        for _ in 0..600 {
            orbit.advance(0.0, 1.0, DT);
            assert!(orbit.distance <= ZOOM_MAX);
        }
        assert_eq!(orbit.distance, ZOOM_MAX);
    }

    #[test]
    fn zoom_in_clamps_at_the_near_limit() {
        let mut orbit = OrbitCamera::default();
        for _ in 0..600 {
            orbit.advance(0.0, -1.0, DT);
        }
        assert_eq!(orbit.distance, ZOOM_MIN);
    }

    #[test]
    fn transform_stays_on_the_orbit_circle() {
        let orbit = OrbitCamera {
            angle: 1.2,
            distance: 20.0,
        };
        let transform = orbit.transform();
        assert!((transform.translation.length() - 20.0).abs() < 1e-4);
        assert!((transform.translation.y).abs() < 1e-6);
    }
}
