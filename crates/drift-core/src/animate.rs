//! Per-frame motion and visibility of a single floating element.
//!
//! Each frame an element drifts up by `speed * delta`, sways sideways by a
//! fixed per-frame step, wraps from the top of the band back to the bottom,
//! and derives its opacity from how close it is to either band limit and how
//! far it is from the camera. Its rotation always faces the camera.

use crate::camera::Camera;
use crate::config::FieldConfig;
use crate::constants::*;
use crate::items::{sample, FloatingElement};
use glam::{Mat3, Quat, Vec3};
use rand::Rng;

/// Clock values handed to every element in a frame, in seconds.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameTime {
    pub elapsed: f32,
    pub delta: f32,
}

/// What the renderer needs to draw an element this frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlyphPose {
    pub position: Vec3,
    pub rotation: Quat,
    pub opacity: f32,
    /// Camera distance used for the depth fade.
    pub distance: f32,
}

impl GlyphPose {
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            rotation: Quat::IDENTITY,
            opacity: 0.0,
            distance: 0.0,
        }
    }
}

/// Linear fade to zero within `EDGE_FADE_WIDTH` of either band limit.
#[inline]
pub fn edge_opacity(y: f32, bottom: f32, top: f32) -> f32 {
    let edge_dist = (y - top).abs().min((y - bottom).abs());
    (edge_dist / EDGE_FADE_WIDTH).clamp(0.0, 1.0)
}

/// Atmospheric fade: opaque up to `DEPTH_FADE_NEAR`, floored at
/// `DEPTH_MIN_OPACITY` past `DEPTH_FADE_NEAR + DEPTH_FADE_SPAN`.
#[inline]
pub fn depth_opacity(distance: f32) -> f32 {
    (1.0 - (distance - DEPTH_FADE_NEAR) / DEPTH_FADE_SPAN).clamp(DEPTH_MIN_OPACITY, 1.0)
}

#[inline]
pub fn final_opacity(y: f32, distance: f32, bottom: f32, top: f32) -> f32 {
    edge_opacity(y, bottom, top) * depth_opacity(distance)
}

/// Rotation that points the local +Z axis at `eye`, with world +Y as the up
/// hint. Same result as three.js `Object3D::lookAt` on a non-camera node.
pub fn face_camera(position: Vec3, eye: Vec3) -> Quat {
    let mut z = eye - position;
    if z.length_squared() == 0.0 {
        z = Vec3::Z;
    }
    z = z.normalize();
    let up = Vec3::Y;
    let mut x = up.cross(z);
    if x.length_squared() == 0.0 {
        // Looking straight up or down: nudge the forward axis off the up axis.
        z.z += 0.0001;
        z = z.normalize();
        x = up.cross(z);
    }
    x = x.normalize();
    let y = z.cross(x);
    Quat::from_mat3(&Mat3::from_cols(x, y, z))
}

/// Advance one element by a frame and return its pose.
///
/// Drift scales with `delta`; the sway is a fixed step per frame.
pub fn advance(
    element: &mut FloatingElement,
    config: &FieldConfig,
    time: FrameTime,
    camera: &Camera,
    rng: &mut impl Rng,
) -> GlyphPose {
    let pos = &mut element.position;
    pos.y += element.speed * time.delta;
    pos.x += (time.elapsed * SWAY_FREQUENCY + element.phase_offset).sin() * SWAY_STEP;

    if pos.y > config.top_limit {
        // Whole band heights, so a long frame gap cannot leave it above the top.
        pos.y = config.bottom_limit + (pos.y - config.bottom_limit).rem_euclid(config.band_height());
        pos.x = sample(rng, config.x_range);
        log::trace!("[animate] item {} wrapped to y={:.2}", element.id, pos.y);
    }

    let position = *pos;
    let distance = camera.distance_to(position);
    GlyphPose {
        position,
        rotation: face_camera(position, camera.eye),
        opacity: final_opacity(position.y, distance, config.bottom_limit, config.top_limit),
        distance,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn face_camera_points_local_z_at_eye() {
        let pos = Vec3::new(3.0, -2.0, -10.0);
        let eye = Vec3::new(0.0, 0.0, 15.0);
        let q = face_camera(pos, eye);
        let fwd = q * Vec3::Z;
        assert!((fwd - (eye - pos).normalize()).length() < 1e-5);
        // No roll: local +X stays horizontal.
        assert!((q * Vec3::X).y.abs() < 1e-5);
    }

    #[test]
    fn face_camera_is_identity_when_eye_is_straight_ahead() {
        let q = face_camera(Vec3::ZERO, Vec3::new(0.0, 0.0, 15.0));
        assert!((q.dot(Quat::IDENTITY).abs() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn face_camera_handles_degenerate_directions() {
        let overhead = face_camera(Vec3::ZERO, Vec3::new(0.0, 10.0, 0.0));
        assert!(overhead.is_finite());
        assert!((overhead * Vec3::Z).y > 0.99);

        let same = face_camera(Vec3::ONE, Vec3::ONE);
        assert!(same.is_finite());
    }
}
