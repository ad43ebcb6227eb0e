// Host-side tests for the per-frame animator and opacity model.

use drift_core::*;
use glam::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn element_at(position: Vec3, speed: f32) -> FloatingElement {
    FloatingElement {
        id: 0,
        style: &GLYPH_POOL[0],
        position,
        base_scale: TEXT_SCALE,
        speed,
        phase_offset: 0.0,
    }
}

fn scene_camera() -> Camera {
    Camera::scene_default(16.0 / 9.0)
}

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

#[test]
fn edge_opacity_fades_linearly_near_limits() {
    assert_eq!(edge_opacity(18.0, BOTTOM_LIMIT, TOP_LIMIT), 0.0);
    assert_eq!(edge_opacity(-18.0, BOTTOM_LIMIT, TOP_LIMIT), 0.0);
    assert_eq!(edge_opacity(14.0, BOTTOM_LIMIT, TOP_LIMIT), 1.0);
    assert!(approx(edge_opacity(16.0, BOTTOM_LIMIT, TOP_LIMIT), 0.5));
    assert!(approx(edge_opacity(-17.0, BOTTOM_LIMIT, TOP_LIMIT), 0.25));
    assert_eq!(edge_opacity(0.0, BOTTOM_LIMIT, TOP_LIMIT), 1.0);
}

#[test]
fn depth_opacity_is_clamped_between_floor_and_one() {
    assert!(approx(depth_opacity(10.0), 1.0));
    assert!(approx(depth_opacity(40.0), 0.1));
    assert!(approx(depth_opacity(55.0), 0.1));
    assert_eq!(depth_opacity(5.0), 1.0);
    assert!(approx(depth_opacity(25.0), 0.5));
}

#[test]
fn final_opacity_stays_in_unit_range() {
    let mut y = -25.0;
    while y <= 25.0 {
        let mut d = 0.0;
        while d <= 80.0 {
            let o = final_opacity(y, d, BOTTOM_LIMIT, TOP_LIMIT);
            assert!((0.0..=1.0).contains(&o), "opacity {o} at y={y} d={d}");
            assert!(approx(o, edge_opacity(y, BOTTOM_LIMIT, TOP_LIMIT) * depth_opacity(d)));
            d += 0.5;
        }
        y += 0.25;
    }
}

#[test]
fn drift_without_wrap() {
    let cfg = FieldConfig::default();
    let mut rng = StdRng::seed_from_u64(1);
    let mut el = element_at(Vec3::new(2.0, 17.5, -3.0), 0.3);
    let time = FrameTime {
        elapsed: 0.0,
        delta: 1.0,
    };
    let pose = advance(&mut el, &cfg, time, &scene_camera(), &mut rng);
    assert!(approx(el.position.y, 17.8));
    // sin(0) sway leaves x untouched
    assert_eq!(el.position.x, 2.0);
    assert_eq!(el.position.z, -3.0);
    assert_eq!(pose.position, el.position);
}

#[test]
fn crossing_the_top_wraps_by_band_height_and_resamples_x() {
    let cfg = FieldConfig::default();
    let mut rng = StdRng::seed_from_u64(7);
    let mut el = element_at(Vec3::new(100.0, 17.9, -3.0), 0.3);
    let time = FrameTime {
        elapsed: 0.0,
        delta: 0.5,
    };
    advance(&mut el, &cfg, time, &scene_camera(), &mut rng);
    assert!(approx(el.position.y, -17.95), "y = {}", el.position.y);
    assert!(el.position.x >= X_RANGE[0] && el.position.x <= X_RANGE[1]);
    assert_eq!(el.position.z, -3.0);
}

#[test]
fn huge_delta_still_lands_inside_band() {
    let cfg = FieldConfig::default();
    let mut rng = StdRng::seed_from_u64(3);
    let mut el = element_at(Vec3::new(0.0, 10.0, 0.0), 0.7);
    let time = FrameTime {
        elapsed: 2.0,
        delta: 500.0,
    };
    advance(&mut el, &cfg, time, &scene_camera(), &mut rng);
    assert!(el.position.y >= BOTTOM_LIMIT && el.position.y <= TOP_LIMIT);
}

#[test]
fn sway_step_ignores_delta() {
    let cfg = FieldConfig::default();
    let mut rng = StdRng::seed_from_u64(5);
    let elapsed = 1.3;
    let mut slow = element_at(Vec3::new(0.0, 0.0, 0.0), 0.5);
    let mut fast = slow.clone();
    advance(
        &mut slow,
        &cfg,
        FrameTime { elapsed, delta: 0.001 },
        &scene_camera(),
        &mut rng,
    );
    advance(
        &mut fast,
        &cfg,
        FrameTime { elapsed, delta: 0.1 },
        &scene_camera(),
        &mut rng,
    );
    let expected = (elapsed * SWAY_FREQUENCY).sin() * SWAY_STEP;
    assert!(approx(slow.position.x, expected));
    assert!(approx(fast.position.x, expected));
    assert!(fast.position.y > slow.position.y);
}

#[test]
fn pose_combines_edge_and_depth_fade() {
    let cfg = FieldConfig::default();
    let mut rng = StdRng::seed_from_u64(9);
    // Ten units in front of the camera, mid-band: fully opaque.
    let mut near = element_at(Vec3::new(0.0, 0.0, 5.0), 0.0);
    let pose = advance(&mut near, &cfg, FrameTime::default(), &scene_camera(), &mut rng);
    assert!(approx(pose.distance, 10.0));
    assert!(approx(pose.opacity, 1.0));

    // Far plane of the spawn volume, 2 units from the top limit.
    let mut far = element_at(Vec3::new(0.0, 16.0, -25.0), 0.0);
    let pose = advance(&mut far, &cfg, FrameTime::default(), &scene_camera(), &mut rng);
    let expected = 0.5 * depth_opacity(Vec3::new(0.0, 16.0, -25.0).distance(CAMERA_EYE));
    assert!(approx(pose.opacity, expected));
}

#[test]
fn pose_rotation_faces_the_camera() {
    let cfg = FieldConfig::default();
    let mut rng = StdRng::seed_from_u64(11);
    let camera = Camera {
        eye: Vec3::new(4.0, 3.0, 15.0),
        ..scene_camera()
    };
    let mut el = element_at(Vec3::new(-5.0, 2.0, -12.0), 0.0);
    let pose = advance(&mut el, &cfg, FrameTime::default(), &camera, &mut rng);
    let forward = pose.rotation * Vec3::Z;
    assert!((forward - (camera.eye - pose.position).normalize()).length() < 1e-5);
    assert!((pose.distance - camera.distance_to(pose.position)).abs() < 1e-5);
}
