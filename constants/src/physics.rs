/// Radius of the cursor push field in world units.
pub const DEFORM_RADIUS: f32 = 2.0;

/// Spring constant pulling each point back to its rest position.
pub const SPRING_STIFFNESS: f32 = 45.0;

/// Velocity damping applied against the spring.
pub const DAMPING: f32 = 9.0;

/// Per-point mass. Forces divide by this before integration.
pub const POINT_MASS: f32 = 1.0;

/// Peak outward force at the centre of the push field.
pub const PUSH_STRENGTH: f32 = 130.0;

/// Added to the cursor distance before normalising, avoids a
/// divide-by-zero when a point sits exactly on the hit point.
pub const DIST_EPSILON: f32 = 1e-6;

/// Frame delta clamp. Bounds integration error on slow frames; the
/// stiffness/damping pair above is stable up to this step.
pub const MAX_FRAME_DT: f32 = 1.0 / 30.0;
