#![allow(clippy::clone_on_copy, clippy::float_cmp)]

use std::num::NonZeroU32;

use super::*;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn vec_approx_eq(a: Vec2, b: Vec2) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y)
}

fn size(w: u32, h: u32) -> WorldSize {
    WorldSize::new(NonZeroU32::new(w).unwrap(), NonZeroU32::new(h).unwrap())
}

fn camera_at(level: ZoomLevel) -> Camera {
    Camera { offset: Vec2::ZERO, level }
}

// --- ZoomLevel ---

#[test]
fn default_level_is_in() {
    assert_eq!(ZoomLevel::default(), ZoomLevel::In);
    assert_eq!(Camera::default().level, ZoomLevel::In);
}

#[test]
fn radius_lookup() {
    assert_eq!(ZoomLevel::In.radius(), 48.0);
    assert_eq!(ZoomLevel::Normal.radius(), 24.0);
    assert_eq!(ZoomLevel::Out.radius(), 12.0);
}

#[test]
fn stepping_out_saturates() {
    // Three scroll-downs from In land on Out and stay there.
    let mut level = ZoomLevel::In;
    level = level.stepped_out();
    assert_eq!(level, ZoomLevel::Normal);
    level = level.stepped_out();
    assert_eq!(level, ZoomLevel::Out);
    level = level.stepped_out();
    assert_eq!(level, ZoomLevel::Out);
}

#[test]
fn stepping_in_saturates() {
    let mut level = ZoomLevel::Out;
    level = level.stepped_in();
    assert_eq!(level, ZoomLevel::Normal);
    level = level.stepped_in();
    assert_eq!(level, ZoomLevel::In);
    level = level.stepped_in();
    assert_eq!(level, ZoomLevel::In);
}

// --- Hex metrics ---

#[test]
fn hex_width_is_one_and_a_half_radii() {
    let cam = camera_at(ZoomLevel::Normal);
    assert!(approx_eq(cam.hex_width(), 36.0));
}

#[test]
fn hex_height_is_sqrt_three_radii() {
    let cam = camera_at(ZoomLevel::Normal);
    assert!(approx_eq(cam.hex_height(), 24.0 * crate::consts::SQRT_3));
}

// --- Projection ---

#[test]
fn origin_hex_center_without_pan() {
    // 3x3 grid, Normal zoom, no pan: the first column carries no parity
    // shift, so the center is (r, r sin 60°).
    let cam = camera_at(ZoomLevel::Normal);
    let r = cam.radius();
    let center = cam.hex_center(GridCoord::new(0, 0));
    assert!(vec_approx_eq(center, Vec2::new(r, r * crate::consts::SQRT_3 / 2.0)));
}

#[test]
fn far_even_hex_center_without_pan() {
    let cam = camera_at(ZoomLevel::Normal);
    let r = cam.radius();
    let center = cam.hex_center(GridCoord::new(2, 2));
    let expected = Vec2::new(
        r + 2.0 * cam.hex_width(),
        r * crate::consts::SQRT_3 / 2.0 + 2.0 * cam.hex_height(),
    );
    assert!(vec_approx_eq(center, expected));
}

#[test]
fn odd_column_center_is_half_a_hex_lower() {
    let cam = camera_at(ZoomLevel::Normal);
    let even = cam.hex_center(GridCoord::new(0, 0));
    let odd = cam.hex_center(GridCoord::new(1, 0));
    assert!(approx_eq(odd.y - even.y, cam.hex_height() * 0.5));
    assert!(approx_eq(odd.x - even.x, cam.hex_width()));
}

#[test]
fn pan_translates_every_center() {
    let mut cam = camera_at(ZoomLevel::Normal);
    let before = cam.hex_center(GridCoord::new(2, 1));
    let delta = Vec2::new(-40.0, 15.5);
    cam.apply(CameraCommand::PanBy(delta));
    let after = cam.hex_center(GridCoord::new(2, 1));
    assert!(vec_approx_eq(after, before.add(delta)));
}

#[test]
fn centered_on_puts_the_world_middle_at_the_viewport_middle() {
    let viewport = Vec2::new(800.0, 600.0);
    let cam = Camera::centered_on(size(20, 20), viewport);
    let expected = Vec2::new(
        400.0 - 10.0 * cam.hex_width(),
        300.0 - 10.0 * cam.hex_height(),
    );
    assert!(vec_approx_eq(cam.offset, expected));
    assert_eq!(cam.level, ZoomLevel::In);
}

// --- grid_position ---

#[test]
fn grid_position_is_zero_at_the_offset() {
    let cam = Camera { offset: Vec2::new(17.0, -3.0), level: ZoomLevel::Normal };
    assert!(vec_approx_eq(cam.grid_position(cam.offset), Vec2::ZERO));
}

#[test]
fn grid_position_counts_hex_strides() {
    let cam = camera_at(ZoomLevel::Normal);
    let screen = Vec2::new(cam.hex_width() * 2.0, cam.hex_height() * 3.0);
    assert!(vec_approx_eq(cam.grid_position(screen), Vec2::new(2.0, 3.0)));
}

// --- Pan commands ---

#[test]
fn pan_accumulates_linearly() {
    let mut cam = camera_at(ZoomLevel::Normal);
    let start = cam.offset;
    let v1 = Vec2::new(10.0, -4.0);
    let v2 = Vec2::new(-2.5, 30.0);
    cam.apply(CameraCommand::PanBy(v1));
    cam.apply(CameraCommand::PanBy(v2));
    assert!(vec_approx_eq(cam.offset, start.add(v1).add(v2)));
}

#[test]
fn pan_does_not_touch_zoom() {
    let mut cam = camera_at(ZoomLevel::Out);
    cam.apply(CameraCommand::PanBy(Vec2::new(5.0, 5.0)));
    assert_eq!(cam.level, ZoomLevel::Out);
}

// --- Zoom commands ---

#[test]
fn zoom_step_changes_level() {
    let mut cam = camera_at(ZoomLevel::In);
    cam.apply(CameraCommand::ZoomStep {
        direction: ZoomDirection::Out,
        anchor: Vec2::new(100.0, 100.0),
    });
    assert_eq!(cam.level, ZoomLevel::Normal);
}

#[test]
fn zoom_keeps_the_grid_point_under_the_cursor() {
    let mut cam = Camera { offset: Vec2::new(-37.0, 12.0), level: ZoomLevel::In };
    let anchor = Vec2::new(412.0, 233.0);
    let before = cam.grid_position(anchor);
    cam.apply(CameraCommand::ZoomStep { direction: ZoomDirection::Out, anchor });
    let after = cam.grid_position(anchor);
    assert!(vec_approx_eq(before, after));
}

#[test]
fn zoom_invariant_holds_across_the_whole_ladder() {
    let mut cam = Camera { offset: Vec2::new(250.0, -80.0), level: ZoomLevel::In };
    let anchor = Vec2::new(33.3, 666.6);
    let reference = cam.grid_position(anchor);
    for direction in [ZoomDirection::Out, ZoomDirection::Out, ZoomDirection::In, ZoomDirection::In] {
        cam.apply(CameraCommand::ZoomStep { direction, anchor });
        assert!(vec_approx_eq(cam.grid_position(anchor), reference));
    }
}

#[test]
fn saturated_zoom_leaves_the_camera_unchanged() {
    let mut cam = Camera { offset: Vec2::new(5.0, 6.0), level: ZoomLevel::Out };
    cam.apply(CameraCommand::ZoomStep {
        direction: ZoomDirection::Out,
        anchor: Vec2::new(40.0, 40.0),
    });
    assert_eq!(cam.level, ZoomLevel::Out);
    assert!(vec_approx_eq(cam.offset, Vec2::new(5.0, 6.0)));
}

// --- Corners ---

#[test]
fn corners_sit_on_the_radius() {
    let center = Vec2::new(100.0, 50.0);
    for corner in hex_corners(center, 24.0) {
        assert!(approx_eq(center.distance_to(corner), 24.0));
    }
}

#[test]
fn first_corner_is_due_east() {
    let center = Vec2::new(10.0, 10.0);
    let corners = hex_corners(center, 8.0);
    assert!(vec_approx_eq(corners[0], Vec2::new(18.0, 10.0)));
}

#[test]
fn fourth_corner_is_due_west() {
    let center = Vec2::new(10.0, 10.0);
    let corners = hex_corners(center, 8.0);
    assert!(vec_approx_eq(corners[3], Vec2::new(2.0, 10.0)));
}

#[test]
fn corners_step_sixty_degrees() {
    let center = Vec2::ZERO;
    let corners = hex_corners(center, 1.0);
    for (i, corner) in corners.iter().enumerate() {
        let angle = crate::consts::CORNER_STEP * i as f64;
        assert!(approx_eq(corner.x, angle.cos()));
        assert!(approx_eq(corner.y, angle.sin()));
    }
}
