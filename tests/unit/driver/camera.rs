use super::*;

#[test]
fn target_projects_near_screen_center() {
    let cam = Camera::default();
    let ndc = cam.project(Vec3::ZERO);
    assert!(ndc.x.abs() < 1e-5);
    // Eye sits slightly above the target, so the origin is on the center line.
    assert!(ndc.y.abs() < 1e-5);
    assert!(ndc.z > 0.0 && ndc.z < 1.0);
}

#[test]
fn points_behind_camera_fail_depth_test() {
    let cam = Camera::default();
    let behind = cam.project(Vec3::new(0.0, 2.0, 40.0));
    assert!(behind.z >= 1.0, "{behind:?}");
}

#[test]
fn right_and_up_map_to_positive_ndc() {
    let cam = Camera::default();
    assert!(cam.project(Vec3::new(3.0, 0.0, 0.0)).x > 0.0);
    assert!(cam.project(Vec3::new(0.0, 3.0, 0.0)).y > 0.0);
}

#[test]
fn pointer_mapping_round_trips() {
    let p = Vec2::new(0.25, 0.8);
    let ndc = pointer_to_ndc(p);
    assert!((ndc.x + 0.5).abs() < 1e-6);
    assert!((ndc.y + 0.6).abs() < 1e-6);
    assert!((ndc_to_pointer(ndc) - p).length() < 1e-6);
    assert_eq!(pointer_to_ndc(Vec2::new(0.5, 0.5)), Vec2::ZERO);
}

#[test]
fn invalid_aspect_falls_back_to_square() {
    assert_eq!(Camera::with_aspect(0.0).aspect, 1.0);
    assert_eq!(Camera::with_aspect(f32::NAN).aspect, 1.0);
    assert_eq!(Camera::with_aspect(2.0).aspect, 2.0);
}
