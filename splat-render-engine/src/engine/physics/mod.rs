//! Spring-damper simulation of the sprite cloud.
//!
//! Each point is an independent particle pulled toward its rest
//! position and pushed away from the cursor hit point. There is no
//! inter-point coupling, so the update is order-independent.

/// Parallel simulation buffers created from the sampled image.
pub mod cloud;

/// Per-frame semi-implicit Euler step with cursor push force.
pub mod integrator;
