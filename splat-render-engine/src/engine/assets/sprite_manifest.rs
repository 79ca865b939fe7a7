use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use constants::sampling::DEFAULT_SAMPLE_STEP;

/// Sprite description as a Bevy asset. Mirrors the JSON structure
/// exactly: the image path (relative to the asset root) plus the grid
/// stride used when sampling pixels into points.
#[derive(Asset, Debug, Clone, Serialize, Deserialize, TypePath, Resource)]
pub struct SpriteManifest {
    pub image: String,
    #[serde(default = "default_sample_step")]
    pub sample_step: u32,
}

fn default_sample_step() -> u32 {
    DEFAULT_SAMPLE_STEP
}

impl SpriteManifest {
    /// Sampling stride, never zero.
    pub fn sample_step(&self) -> u32 {
        self.sample_step.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manifest_defaults_sample_step_when_omitted() {
        let manifest: SpriteManifest =
            serde_json::from_str(r#"{ "image": "sprite/jellycat.png" }"#).unwrap();
        assert_eq!(manifest.sample_step(), DEFAULT_SAMPLE_STEP);
    }

    #[test]
    fn zero_stride_is_clamped_to_one() {
        let manifest = SpriteManifest {
            image: "sprite/jellycat.png".into(),
            sample_step: 0,
        };
        assert_eq!(manifest.sample_step(), 1);
    }
}
