/// Sprite manifest location, relative to the bevy asset root.
pub const SPRITE_MANIFEST_PATH: &str = "sprite/manifest.json";
