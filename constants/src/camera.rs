/// Orbit speed while A/D is held, radians per second.
pub const ROTATE_SPEED: f32 = 1.3;

/// Zoom speed while W/S is held, world units per second.
pub const ZOOM_SPEED: f32 = 13.0;

/// Zoom distance limits, applied after every update.
pub const ZOOM_MIN: f32 = 8.0;
pub const ZOOM_MAX: f32 = 35.0;

/// Camera distance at startup, inside the zoom limits.
pub const START_DISTANCE: f32 = 18.0;
