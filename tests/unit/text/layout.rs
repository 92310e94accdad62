use super::*;

#[test]
fn rejects_non_positive_size() {
    let mut engine = TextLayoutEngine::new();
    for size in [0.0, -4.0, f32::NAN] {
        let Err(err) = engine.layout_bold_line("x", &[], 0, size) else {
            panic!("size {size} produced a layout");
        };
        assert!(matches!(err, EngineError::Validation(_)), "{size}");
    }
    assert!(engine.last_family_name().is_none());
}

#[test]
fn garbage_bytes_register_no_family() {
    let mut engine = TextLayoutEngine::default();
    let result = engine.layout_bold_line("x", b"definitely not a font", 0, 32.0);
    assert!(matches!(result.err(), Some(EngineError::Font(_))));
    assert!(engine.last_family_name().is_none());
}
