/// World-space size of one screen-aligned splat quad.
pub const SPLAT_SIZE: f32 = 0.14;

/// Scene background, RGB of #050509.
pub const BACKGROUND_COLOUR: [f32; 3] = [5.0 / 255.0, 5.0 / 255.0, 9.0 / 255.0];

/// Linear distance fog range, matched to the background colour.
pub const FOG_START: f32 = 10.0;
pub const FOG_END: f32 = 50.0;

/// Slight forward tilt applied to the cloud so it is not perfectly flat.
pub const CLOUD_TILT: f32 = -0.14;

/// Half-extent of the invisible 20x20 deform plane at z = 0 used to
/// convert pointer positions into 3D hit points.
pub const DEFORM_PLANE_HALF_EXTENT: f32 = 10.0;
