//! Custom splat material for the point cloud.

/// Billboarded splat shader material with alpha blending.
pub mod splat_material;
