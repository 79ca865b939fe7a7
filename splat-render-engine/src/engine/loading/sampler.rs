use bevy::prelude::*;
use rand::Rng;

use constants::sampling::{ALPHA_THRESHOLD, CLOUD_SCALE, COLOUR_GAMMA, DEPTH_JITTER};

/// Positions and colours sampled from an image, one entry per retained
/// pixel. Consumed by `SpriteCloud::from_samples`.
#[derive(Debug, Default)]
pub struct SampledSprite {
    pub positions: Vec<Vec3>,
    pub colors: Vec<Vec3>,
}

impl SampledSprite {
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Sample an RGBA8 pixel grid at the given stride into a point cloud.
///
/// Pixels below the alpha threshold are skipped, carving the cloud to
/// the opaque silhouette. Retained pixels map to centred image-space
/// coordinates scaled to world units, with an unseeded depth jitter for
/// visual thickness. Colours are normalised and slightly brightened.
pub fn sample_rgba_image(data: &[u8], width: u32, height: u32, step: u32) -> SampledSprite {
    let step = step.max(1);
    let mut sampled = SampledSprite::default();
    if width == 0 || height == 0 {
        return sampled;
    }

    let mut rng = rand::thread_rng();

    for y in (0..height).step_by(step as usize) {
        for x in (0..width).step_by(step as usize) {
            let idx = ((y * width + x) * 4) as usize;
            let alpha = data[idx + 3];
            if alpha < ALPHA_THRESHOLD {
                continue;
            }

            // Centre and scale into world space, image y points down.
            let nx = x as f32 / width as f32 - 0.5;
            let ny = y as f32 / height as f32 - 0.5;
            let depth = rng.gen_range(-DEPTH_JITTER..=DEPTH_JITTER);
            sampled
                .positions
                .push(Vec3::new(nx * CLOUD_SCALE, -ny * CLOUD_SCALE, depth));

            sampled.colors.push(Vec3::new(
                brighten(data[idx]),
                brighten(data[idx + 1]),
                brighten(data[idx + 2]),
            ));
        }
    }

    sampled
}

fn brighten(channel: u8) -> f32 {
    (channel as f32 / 255.0).powf(COLOUR_GAMMA)
}
