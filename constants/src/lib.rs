//! Shared tuning constants for the splat render engine.
//!
//! Kept in a leaf crate so the physics, sampling and rendering layers
//! agree on one set of values without depending on each other.

/// Orbit camera rotation/zoom speeds and zoom limits.
pub mod camera;

/// Asset paths for the sprite manifest.
pub mod path;

/// Spring-damper and cursor push parameters.
pub mod physics;

/// Splat size, scene background and fog settings.
pub mod render_settings;

/// Image sampling stride, alpha cutoff and colour shaping.
pub mod sampling;
