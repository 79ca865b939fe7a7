//! Asset loading and initialisation systems for the sprite cloud.
//!
//! Manages the staged loading pipeline from manifest parsing through
//! image decoding and pixel sampling to final cloud entity creation.

/// Sprite cloud entity creation from the sampled image.
///
/// Builds simulation buffers and the splat mesh once the image is ready.
pub mod cloud_creator;

/// Sprite image loading state monitoring.
///
/// Tracks load completion and fail-stops on decode errors.
pub mod image_loader;

/// Sprite manifest loading and image load kick-off from JSON configuration.
pub mod manifest_loader;

/// Loading progress tracking resource for state transitions.
pub mod progress;

/// Raster image to point cloud sampling.
///
/// Converts the opaque silhouette of an RGBA image into positions and colours.
pub mod sampler;
