use super::*;

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| (*s).to_owned()).collect()
}

#[test]
fn parse_decodes_year_month_and_sequence() {
    let e = ManifestEntry::parse("2025_01_7.jpg").unwrap();
    assert_eq!(e.year, 2025);
    assert_eq!(e.month, "01");
    assert_eq!(e.seq, 7);
    assert_eq!(e.file, "2025_01_7.jpg");

    assert!(ManifestEntry::parse("2025_01_7").is_ok());
}

#[test]
fn parse_rejects_malformed_names() {
    for bad in [
        "holiday.jpg",
        "2025_13_1.jpg",
        "25_01_1.jpg",
        "2025_1_1.jpg",
        "2025_01_x.jpg",
        "2025_01_1_2.jpg",
    ] {
        let err = ManifestEntry::parse(bad).unwrap_err();
        assert!(
            err.to_string().starts_with("validation error:"),
            "{bad}: {err}"
        );
    }
}

#[test]
fn manifest_is_sorted_by_file_name() {
    let decoded =
        decode_manifest(&names(&["2025_02_1.jpg", "2024_06_1.jpg", "2025_01_1.jpg"])).unwrap();
    let files = decoded.iter().map(|e| e.file.as_str()).collect::<Vec<_>>();
    assert_eq!(files, ["2024_06_1.jpg", "2025_01_1.jpg", "2025_02_1.jpg"]);
}

#[test]
fn reference_manifest_spiral() {
    let photos = layout_photos(&PhotoConfig::default(), &mut SeededRng::new(42)).unwrap();
    assert_eq!(photos.len(), 31);

    assert_eq!(photos[0].id, "photo-0");
    assert_eq!(photos[0].image_ref, "/photos/2024_06_1.jpg");
    assert!((photos[0].tree_position.y + 7.0).abs() < 1e-5);
    assert!((photos[30].tree_position.y - 7.0).abs() < 1e-5);
    for w in photos.windows(2) {
        assert!(w[1].tree_position.y >= w[0].tree_position.y);
    }

    // Base of the spiral is wider than the top.
    let base_r = photos[0].tree_position.x.hypot(photos[0].tree_position.z);
    let top_r = photos[30].tree_position.x.hypot(photos[30].tree_position.z);
    assert!((base_r - 4.3).abs() < 1e-4, "{base_r}");
    assert!((top_r - 1.3).abs() < 1e-4, "{top_r}");

    // Angle zero faces a quarter turn around Y.
    assert!((photos[0].tree_rotation.y - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
    assert_eq!(photos[0].tree_rotation.x, 0.0);
}

#[test]
fn year_labels_only_on_year_change() {
    let photos = layout_photos(&PhotoConfig::default(), &mut SeededRng::new(42)).unwrap();
    let labelled = photos
        .iter()
        .enumerate()
        .filter_map(|(i, p)| p.label.as_deref().map(|l| (i, l)))
        .collect::<Vec<_>>();
    assert_eq!(labelled, [(0, "2024-06"), (14, "2025-01")]);
}

#[test]
fn scattered_shell_and_tilt_ranges() {
    let cfg = PhotoConfig::default();
    let photos = layout_photos(&cfg, &mut SeededRng::new(42)).unwrap();
    for p in &photos {
        let c = p.chaos_position;
        // Undo the vertical squash to recover the shell radius.
        let r = Vec3::new(c.x, c.y / 0.6, c.z).length();
        assert!((12.0 - 1e-3..16.0 + 1e-3).contains(&r), "{r}");
        assert!(p.chaos_rotation.x.abs() <= 0.1);
        assert!(p.chaos_rotation.y.abs() <= 0.1);
        assert!(p.chaos_rotation.z.abs() <= 0.05);
        assert!((0.9..1.2).contains(&p.scale));
    }
}

#[test]
fn single_photo_sits_at_spiral_base() {
    let cfg = PhotoConfig {
        files: names(&["2024_12_1.png"]),
        image_prefix: "assets/".to_owned(),
        ..PhotoConfig::default()
    };
    let mut rng = SeededRng::new(42);
    let photos = layout_photos(&cfg, &mut rng).unwrap();
    assert_eq!(photos.len(), 1);
    assert!((photos[0].tree_position.y + 7.0).abs() < 1e-6);
    assert_eq!(photos[0].image_ref, "assets/2024_12_1.png");
    assert_eq!(photos[0].label.as_deref(), Some("2024-12"));

    let mut expected = SeededRng::new(42);
    for _ in 0..5 {
        expected.next_u32();
    }
    assert_eq!(rng, expected);
}

#[test]
fn empty_manifest_is_allowed() {
    let cfg = PhotoConfig {
        files: Vec::new(),
        ..PhotoConfig::default()
    };
    assert!(layout_photos(&cfg, &mut SeededRng::new(42)).unwrap().is_empty());
}
