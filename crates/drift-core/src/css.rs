//! CSS 3D transforms for DOM-rendered glyphs.
//!
//! The glyph layer is a perspective `view` element holding a `preserve-3d`
//! `camera` element; each glyph element is a child of the camera element.
//! CSS has +Y pointing down, so the camera matrix flips its Y row and each
//! glyph matrix flips its local Y column.

use crate::animate::GlyphPose;
use crate::camera::Camera;
use crate::constants::px_to_world;
use glam::{Mat4, Vec3};
use std::fmt::Write;

// Values this small are written as 0 so the browser never sees exponents.
const EPSILON: f32 = 1e-10;

/// Highest z-index handed out; the nearest glyph gets it.
pub const Z_INDEX_MAX: f32 = 16_777_271.0;

fn matrix3d(values: [f32; 16]) -> String {
    let mut out = String::with_capacity(16 * 12);
    out.push_str("matrix3d(");
    for (i, v) in values.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        let v = if v.abs() < EPSILON { 0.0 } else { *v };
        _ = write!(out, "{v}");
    }
    out.push(')');
    out
}

/// CSS `perspective` in pixels for a viewport `viewport_h` pixels tall.
pub fn perspective_px(camera: &Camera, viewport_h: f32) -> f32 {
    camera.projection_matrix().y_axis.y * viewport_h * 0.5
}

/// Transform of the camera element.
pub fn camera_transform(camera: &Camera, viewport_w: f32, viewport_h: f32) -> String {
    let fov = perspective_px(camera, viewport_h);
    let e = camera.view_matrix().to_cols_array();
    let flipped = [
        e[0], -e[1], e[2], e[3], e[4], -e[5], e[6], e[7], e[8], -e[9], e[10], e[11], e[12],
        -e[13], e[14], e[15],
    ];
    format!(
        "translateZ({fov}px){}translate({}px,{}px)",
        matrix3d(flipped),
        viewport_w * 0.5,
        viewport_h * 0.5
    )
}

/// World matrix of a glyph element: pose rotation and position, with one CSS
/// pixel scaled to `px_to_world()` world units.
pub fn glyph_matrix(pose: &GlyphPose) -> Mat4 {
    Mat4::from_scale_rotation_translation(Vec3::splat(px_to_world()), pose.rotation, pose.position)
}

/// Transform of a glyph element, centred on its anchor point.
pub fn glyph_transform(pose: &GlyphPose) -> String {
    let e = glyph_matrix(pose).to_cols_array();
    let flipped = [
        e[0], e[1], e[2], e[3], -e[4], -e[5], -e[6], -e[7], e[8], e[9], e[10], e[11], e[12],
        e[13], e[14], e[15],
    ];
    format!("translate(-50%,-50%){}", matrix3d(flipped))
}

/// Stacking order by camera distance: near glyphs draw over far ones.
pub fn z_index(camera: &Camera, distance: f32) -> i32 {
    let slope = -Z_INDEX_MAX / (camera.zfar - camera.znear);
    let offset = -slope * camera.zfar;
    (slope * distance + offset).round().clamp(0.0, Z_INDEX_MAX) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matrix3d_snaps_tiny_values_and_keeps_order() {
        let mut v = [0.0; 16];
        v[0] = 1.0;
        v[1] = 1e-12;
        v[15] = -2.5;
        let s = matrix3d(v);
        assert!(s.starts_with("matrix3d(1,0,"));
        assert!(s.ends_with(",-2.5)"));
        assert_eq!(s.matches(',').count(), 15);
    }
}
