//! Mesh generation for the splat cloud.
//!
//! Each point becomes a screen-aligned quad: six vertices carrying the
//! point centre, its colour and a corner offset that the vertex shader
//! expands in view space.

/// Splat quad mesh creation and per-frame position upload.
pub mod splat_mesh;
