use super::*;

#[test]
fn fps_rejects_zero() {
    assert!(Fps::new(0, 1).is_err());
    assert!(Fps::new(60, 0).is_err());
}

#[test]
fn fps_tick_math() {
    let fps = Fps::new(60, 1).unwrap();
    assert!((fps.frame_duration_secs() - 1.0 / 60.0).abs() < 1e-12);
    assert_eq!(fps.ticks_for_secs(10.0), 600);
    assert_eq!(fps.ticks_for_secs(0.0), 0);

    let ntsc = Fps::new(30000, 1001).unwrap();
    assert_eq!(ntsc.ticks_for_secs(1.0), 30);
}
