//! Asset management for the sprite image and its manifest.
//!
//! Handles the JSON sprite manifest and the raster image handle that
//! the sampling stage turns into simulation buffers.

/// Image handle and manifest handle resource for the loading pipeline.
pub mod sprite_assets;

/// Sprite manifest describing the image and sampling parameters.
pub mod sprite_manifest;
