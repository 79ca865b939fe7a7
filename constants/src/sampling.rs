/// Pixels with alpha below this (out of 255) are skipped, carving the
/// cloud to the opaque silhouette of the source image.
pub const ALPHA_THRESHOLD: u8 = 60;

/// World-space width/height of the sampled sprite.
pub const CLOUD_SCALE: f32 = 9.5;

/// Half-range of the uniform per-point depth jitter giving the sprite
/// visual thickness. Unseeded on purpose; cosmetic only.
pub const DEPTH_JITTER: f32 = 0.35;

/// Exponent applied to each normalised colour channel. Below 1.0
/// brightens the sprite slightly.
pub const COLOUR_GAMMA: f32 = 0.8;

/// Fallback sampling stride when the manifest omits one.
pub const DEFAULT_SAMPLE_STEP: u32 = 3;
