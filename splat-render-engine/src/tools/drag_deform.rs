use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use constants::render_settings::DEFORM_PLANE_HALF_EXTENT;

/// Pointer drag state machine: `Idle` while `dragging` is false,
/// `Dragging` while true. The hit point survives intersection misses
/// during a drag and is cleared only on release.
#[derive(Resource, Default, Debug)]
pub struct DragState {
    pub dragging: bool,
    /// Last pointer position in window coordinates, polled per frame.
    pub cursor: Option<Vec2>,
    /// Current deform point on the plane, `None` while idle.
    pub hit: Option<Vec3>,
}

impl DragState {
    pub fn begin(&mut self) {
        self.dragging = true;
    }

    /// Drag-end clears the hit unconditionally.
    pub fn release(&mut self) {
        self.dragging = false;
        self.hit = None;
    }

    /// Record a projection result. A miss (`None`) keeps the previous
    /// hit so the push field does not flicker while the pointer skims
    /// past the plane edge.
    pub fn record_hit(&mut self, hit: Option<Vec3>) {
        if !self.dragging {
            return;
        }
        if let Some(point) = hit {
            self.hit = Some(point);
        }
    }
}

/// Poll pointer input once per frame, before the cursor projection and
/// the physics step read it.
pub fn track_drag_input(
    mut drag: ResMut<DragState>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
) {
    if mouse_button.just_pressed(MouseButton::Left) {
        drag.begin();
    }
    if mouse_button.just_released(MouseButton::Left) {
        drag.release();
    }

    if let Ok(window) = windows.single() {
        drag.cursor = window.cursor_position();
    }
}

/// While dragging, project the pointer through the camera onto the
/// deform plane and update the hit point.
pub fn project_cursor(
    mut drag: ResMut<DragState>,
    cameras: Query<(&Camera, &GlobalTransform), With<Camera3d>>,
) {
    if !drag.dragging {
        return;
    }
    let Some(cursor_pos) = drag.cursor else {
        return;
    };
    let Ok((camera, camera_transform)) = cameras.single() else {
        return;
    };
    let Ok(ray) = camera.viewport_to_world(camera_transform, cursor_pos) else {
        return;
    };

    let hit = deform_plane_intersection(ray.origin, *ray.direction);
    drag.record_hit(hit);
}

/// Intersect a ray with the fixed 20x20 deform plane at z = 0 facing
/// the camera's default axis. Returns `None` for rays parallel to the
/// plane, pointing away from it, or hitting outside the plane extent.
pub fn deform_plane_intersection(ray_origin: Vec3, ray_direction: Vec3) -> Option<Vec3> {
    if ray_direction.z.abs() < 0.001 {
        return None;
    }
    let t = -ray_origin.z / ray_direction.z;
    if t <= 0.0 {
        return None;
    }

    let point = ray_origin + ray_direction * t;
    if point.x.abs() > DEFORM_PLANE_HALF_EXTENT || point.y.abs() > DEFORM_PLANE_HALF_EXTENT {
        return None;
    }
    Some(point)
}
