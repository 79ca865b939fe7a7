use bevy::prelude::*;

use constants::physics::{
    DAMPING, DEFORM_RADIUS, DIST_EPSILON, MAX_FRAME_DT, POINT_MASS, PUSH_STRENGTH,
    SPRING_STIFFNESS,
};

use crate::engine::physics::cloud::SpriteCloud;
use crate::tools::drag_deform::DragState;

/// Total force on one point: spring toward rest, damping against the
/// current velocity, plus the radial cursor push when inside the field.
pub fn point_force(rest: Vec3, position: Vec3, velocity: Vec3, hit: Option<Vec3>) -> Vec3 {
    let mut force = SPRING_STIFFNESS * (rest - position) - DAMPING * velocity;

    if let Some(hit) = hit {
        let offset = position - hit;
        let dist_sq = offset.length_squared();
        if dist_sq < DEFORM_RADIUS * DEFORM_RADIUS {
            let dist = dist_sq.sqrt() + DIST_EPSILON;
            // Linear falloff: 1 at the hit point, 0 at the field edge.
            let influence = 1.0 - dist / DEFORM_RADIUS;
            force += PUSH_STRENGTH * influence * (offset / dist);
        }
    }

    force
}

/// Advance every point by one semi-implicit Euler step.
pub fn step_cloud(cloud: &mut SpriteCloud, hit: Option<Vec3>, dt: f32) {
    for i in 0..cloud.positions.len() {
        let force = point_force(
            cloud.rest_positions[i],
            cloud.positions[i],
            cloud.velocities[i],
            hit,
        );
        let accel = force / POINT_MASS;
        cloud.velocities[i] += accel * dt;
        cloud.positions[i] += cloud.velocities[i] * dt;
    }
}

/// Per-frame integration. A missing cloud is a benign no-op; the system
/// resumes automatically once the loading pipeline creates it.
pub fn physics_step(cloud: Option<ResMut<SpriteCloud>>, drag: Res<DragState>, time: Res<Time>) {
    let Some(mut cloud) = cloud else {
        return;
    };
    if cloud.is_empty() {
        return;
    }

    let dt = time.delta_secs().min(MAX_FRAME_DT);
    step_cloud(&mut cloud, drag.hit, dt);
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    fn single_point_cloud(position: Vec3) -> SpriteCloud {
        let mut cloud = SpriteCloud::from_samples(vec![Vec3::ZERO], vec![Vec3::ONE]);
        cloud.positions[0] = position;
        cloud
    }

    #[test]
    fn point_at_rest_with_no_hit_feels_no_force() {
        assert_eq!(point_force(Vec3::X, Vec3::X, Vec3::ZERO, None), Vec3::ZERO);
    }

    #[test]
    fn push_force_falls_off_linearly_with_distance() {
        for d in [0.25_f32, 0.5, 1.0, 1.5, 1.99] {
            let position = Vec3::new(d, 0.0, 0.0);
            let force = point_force(position, position, Vec3::ZERO, Some(Vec3::ZERO));
            let expected = PUSH_STRENGTH * (1.0 - d / DEFORM_RADIUS);
            assert!(
                (force.length() - expected).abs() < 1e-2,
                "d = {d}: |force| = {}, expected {expected}",
                force.length()
            );
            // Push points away from the hit.
            assert!(force.x > 0.0);
            assert_eq!(force.y, 0.0);
        }
    }

    #[test]
    fn push_force_is_zero_at_and_beyond_the_radius() {
        for d in [DEFORM_RADIUS, DEFORM_RADIUS + 0.01, 10.0] {
            let position = Vec3::new(d, 0.0, 0.0);
            let force = point_force(position, position, Vec3::ZERO, Some(Vec3::ZERO));
            assert_eq!(force, Vec3::ZERO, "d = {d}");
        }
    }

    #[test]
    fn spring_converges_to_rest_without_a_hit() {
        let mut cloud = single_point_cloud(Vec3::new(1.0, -0.5, 0.25));

        // Peak displacement per window must settle monotonically once
        // the initial oscillation passes.
        let mut window_peaks = Vec::new();
        for _ in 0..10 {
            let mut peak = 0.0_f32;
            for _ in 0..30 {
                step_cloud(&mut cloud, None, DT);
                let displacement = (cloud.rest_positions[0] - cloud.positions[0]).length();
                peak = peak.max(displacement);
            }
            window_peaks.push(peak);
        }

        for pair in window_peaks.windows(2) {
            assert!(pair[1] <= pair[0] + 1e-6, "peaks must not grow: {window_peaks:?}");
        }
        let final_displacement = (cloud.rest_positions[0] - cloud.positions[0]).length();
        assert!(final_displacement < 1e-3, "still {final_displacement} from rest");
    }

    #[test]
    fn held_hit_pushes_points_outward_then_release_recovers() {
        let mut cloud = single_point_cloud(Vec3::new(0.5, 0.0, 0.0));
        let hit = Some(Vec3::ZERO);

        for _ in 0..30 {
            step_cloud(&mut cloud, hit, DT);
        }
        assert!(cloud.positions[0].x > 0.5, "point should be pushed outward");

        for _ in 0..600 {
            step_cloud(&mut cloud, None, DT);
        }
        let displacement = (cloud.rest_positions[0] - cloud.positions[0]).length();
        assert!(displacement < 1e-3);
    }

    #[test]
    fn empty_cloud_steps_without_panicking() {
        let mut cloud = SpriteCloud::default();
        step_cloud(&mut cloud, Some(Vec3::ZERO), DT);
        assert!(cloud.is_empty());
    }
}
