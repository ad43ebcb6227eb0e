use glam::Vec3;

// Shared tuning constants for the glyph field and its scene.

// Vertical wrap band
pub const TOP_LIMIT: f32 = 18.0;
pub const BOTTOM_LIMIT: f32 = -18.0;
pub const BAND_HEIGHT: f32 = TOP_LIMIT - BOTTOM_LIMIT;

// Spawn volume
pub const X_RANGE: [f32; 2] = [-7.0, 7.0];
pub const SPAWN_Y_RANGE: [f32; 2] = [-17.5, 17.5];
pub const Z_RANGE: [f32; 2] = [-25.0, 5.0]; // -25 far, 5 close to the camera
pub const SPEED_RANGE: [f32; 2] = [0.2, 0.7]; // upward drift, units per second

pub const ITEM_COUNT: usize = 120;

// Category mix and relative sizes
pub const TEXT_PROBABILITY: f64 = 0.6;
pub const TEXT_SCALE: f32 = 1.0;
pub const ICON_SCALE: f32 = 0.7;

// Horizontal sway
pub const PHASE_OFFSET_MAX: f32 = 1000.0;
pub const SWAY_FREQUENCY: f32 = 0.5; // radians per second of elapsed time
pub const SWAY_STEP: f32 = 0.005; // per frame, not scaled by delta

// Opacity
pub const EDGE_FADE_WIDTH: f32 = 4.0; // fade-out distance from either limit
pub const DEPTH_FADE_NEAR: f32 = 10.0; // fully opaque at or below this distance
pub const DEPTH_FADE_SPAN: f32 = 30.0; // distance over which depth fade reaches the floor
pub const DEPTH_MIN_OPACITY: f32 = 0.1;

// Camera
pub const CAMERA_EYE: Vec3 = Vec3::new(0.0, 0.0, 15.0);
pub const CAMERA_FOV_DEGREES: f32 = 45.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 1000.0;

// Glyph styling. Text is rendered large and scaled down so the 3D transform
// does not alias the glyph edges.
pub const GLYPH_FONT_PX: f32 = 80.0;
pub const GLYPH_FONT_FAMILY: &str = "\"ZCOOL KuaiLe\", sans-serif";
pub const GLYPH_STYLE_SCALE: f32 = 0.2; // css scale = base_scale * this
pub const HTML_DISTANCE_FACTOR: f32 = 10.0;
pub const OPACITY_TRANSITION_MS: u32 = 300;

/// World units covered by one CSS pixel of a glyph element.
#[inline]
pub fn px_to_world() -> f32 {
    HTML_DISTANCE_FACTOR / 400.0
}
