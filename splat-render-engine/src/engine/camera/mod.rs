//! Orbit camera for viewing the sprite.
//!
//! Discrete key-driven rotation and zoom around the scene origin.

/// Orbit camera resource and controller system.
pub mod orbit_camera;
