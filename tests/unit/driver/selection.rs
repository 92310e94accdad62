use super::*;
use crate::driver::camera::{Camera, ndc_to_pointer};

fn pointer_at(cam: &Camera, world: Vec3) -> Vec2 {
    ndc_to_pointer(cam.project(world).truncate())
}

#[test]
fn picks_nearest_candidate_within_threshold() {
    let cam = Camera::default();
    let a = Vec3::new(0.0, 0.0, 0.0);
    let b = Vec3::new(0.1, 0.0, 0.0);
    let far = Vec3::new(6.0, 3.0, 0.0);

    let hit = nearest_in_screen(pointer_at(&cam, b), [a, b, far], cam.view_proj(), 0.05);
    assert_eq!(hit, Some(1));

    let hit = nearest_in_screen(pointer_at(&cam, far), [a, b, far], cam.view_proj(), 0.05);
    assert_eq!(hit, Some(2));
}

#[test]
fn misses_outside_threshold() {
    let cam = Camera::default();
    let hit = nearest_in_screen(
        Vec2::new(0.95, 0.05),
        [Vec3::ZERO],
        cam.view_proj(),
        0.05,
    );
    assert_eq!(hit, None);
}

#[test]
fn ignores_points_behind_the_camera() {
    let cam = Camera::default();
    // Mirror image of the origin behind the eye would land on screen center.
    let behind = Vec3::new(0.0, 4.0, 44.0);
    let hit = nearest_in_screen(Vec2::new(0.5, 0.5), [behind], cam.view_proj(), 0.5);
    assert_eq!(hit, None);
}

#[test]
fn ties_keep_first_candidate() {
    let cam = Camera::default();
    let p = Vec3::new(1.0, 1.0, 0.0);
    let hit = nearest_in_screen(pointer_at(&cam, p), [p, p], cam.view_proj(), 0.05);
    assert_eq!(hit, Some(0));
}

#[test]
fn cooldown_blocks_changes() {
    let mut sel = PhotoSelector::new(&SelectionConfig::default());
    assert!(sel.apply(Some("/photos/a.jpg"), 0.0));
    assert_eq!(sel.selected(), Some("/photos/a.jpg"));

    assert!(!sel.apply(Some("/photos/b.jpg"), 1.0));
    assert!(!sel.apply(None, 2.9));
    assert_eq!(sel.selected(), Some("/photos/a.jpg"));

    assert!(sel.apply(Some("/photos/b.jpg"), 3.5));
    assert_eq!(sel.selected(), Some("/photos/b.jpg"));
}

#[test]
fn same_photo_or_miss_after_cooldown_deselects() {
    let mut sel = PhotoSelector::new(&SelectionConfig::default());
    sel.apply(Some("x"), 10.0);
    assert!(sel.apply(Some("x"), 13.5));
    assert_eq!(sel.selected(), None);

    sel.apply(Some("y"), 20.0);
    assert!(sel.cooling_down(21.0));
    assert!(!sel.cooling_down(23.0));
    assert!(sel.apply(None, 23.5));
    assert_eq!(sel.selected(), None);

    // Nothing selected and nothing hit is a no-op.
    assert!(!sel.apply(None, 30.0));
}

#[test]
fn observe_reports_counter_changes() {
    let mut sel = PhotoSelector::new(&SelectionConfig::default());
    assert!(!sel.observe(0));
    assert!(sel.observe(1));
    assert!(!sel.observe(1));
    assert!(sel.observe(2));
}
