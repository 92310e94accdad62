use super::*;

fn small_config() -> EngineConfig {
    let mut cfg = EngineConfig::default();
    cfg.foliage.count = 300;
    cfg.lights.count = 40;
    cfg.text = None;
    cfg
}

#[test]
fn layout_is_deterministic_and_index_aligned() {
    let a = FormationSnapshot::layout(&small_config()).unwrap();
    let b = FormationSnapshot::layout(&small_config()).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.foliage.chaos.len(), 300);
    assert_eq!(a.foliage.tree.len(), 300);
    assert_eq!(a.lights.len(), 40);
    assert_eq!(a.photos.len(), 31);
    assert_eq!(a.text_source, TextSource::Disabled);
}

#[test]
fn groups_share_one_generator_in_order() {
    let base = FormationSnapshot::layout(&small_config()).unwrap();
    let mut cfg = small_config();
    cfg.foliage.count = 301;
    let shifted = FormationSnapshot::layout(&cfg).unwrap();
    // Same first 300 foliage particles, but the lights start further down the stream.
    assert_eq!(&shifted.foliage.chaos[..300], &base.foliage.chaos[..]);
    assert_ne!(shifted.lights.chaos, base.lights.chaos);
}

#[test]
fn disabled_text_targets_tree_positions() {
    let snap = FormationSnapshot::build(&small_config()).unwrap();
    assert!(snap.foliage.text.is_none());
    for i in [0, 150, 299] {
        assert_eq!(snap.foliage.text_target(i), Some(snap.foliage.tree[i]));
    }
}

#[test]
fn missing_font_falls_back_without_failing() {
    let mut cfg = small_config();
    cfg.text = Some(TextConfig {
        font_path: Some("/nonexistent/evergreen-font.ttf".into()),
        ..TextConfig::default()
    });
    let snap = FormationSnapshot::build(&cfg).unwrap();
    assert!(snap.foliage.text.is_none());
    match &snap.text_source {
        TextSource::TreeFallback { reason } => {
            assert!(reason.starts_with("font error:"), "{reason}")
        }
        other => panic!("unexpected text source {other:?}"),
    }
}

#[test]
fn invalid_config_fails_the_build() {
    let mut cfg = small_config();
    cfg.lights.count = 0;
    let err = FormationSnapshot::build(&cfg).unwrap_err();
    assert!(matches!(err, EngineError::Validation(_)));
}

#[test]
fn blank_mask_is_reported_for_fallback() {
    let cfg = TextConfig::default();
    let err = silhouette_from_mask(&GlyphMask::blank(64, 64), &cfg, 10, 12345).unwrap_err();
    assert!(matches!(err, EngineError::Raster(_)));
}

#[test]
fn mask_sampling_uses_the_text_seed() {
    let cfg = TextConfig {
        canvas_width: 64,
        canvas_height: 64,
        ..TextConfig::default()
    };
    let mut mask = GlyphMask::blank(64, 64);
    for y in 16..48 {
        for x in 8..56 {
            mask.coverage[y * 64 + x] = 255;
        }
    }
    let (a, candidates) = silhouette_from_mask(&mask, &cfg, 300, 12345).unwrap();
    let (b, _) = silhouette_from_mask(&mask, &cfg, 300, 12345).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.len(), 300);
    assert_eq!(candidates, 12 * 8);

    let mut snap = FormationSnapshot::layout(&small_config()).unwrap();
    snap.foliage.attach_text(a.clone()).unwrap();
    assert_eq!(snap.foliage.text_target(5), Some(a[5]));
}

#[test]
fn photo_guide_follows_manifest_order() {
    let snap = FormationSnapshot::layout(&small_config()).unwrap();
    let guide = snap.photo_guide();
    assert_eq!(guide.len(), snap.photos.len());
    assert_eq!(guide[3], snap.photos[3].tree_position);
}
