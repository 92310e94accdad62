use super::*;

fn small_foliage() -> FoliageConfig {
    FoliageConfig {
        count: 4000,
        ..FoliageConfig::default()
    }
}

#[test]
fn foliage_stays_in_bounds() {
    let set = generate_foliage(&small_foliage(), &mut SeededRng::new(42));
    assert_eq!(set.len(), 4000);
    assert_eq!(set.tree.len(), 4000);
    assert_eq!(set.sizes.len(), 4000);
    for p in &set.chaos {
        assert!(p.length() <= 28.0 + 1e-3, "chaos {p:?}");
    }
    for p in &set.tree {
        // Cone spans 16 units from -7.5; vertical jitter adds up to 0.4 on top.
        assert!((-7.5..=8.9).contains(&p.y), "tree {p:?}");
        let radial = (p.x * p.x + p.z * p.z).sqrt();
        assert!(radial <= 8.0 + 0.4 + 1e-3, "radial {radial}");
    }
    for s in &set.sizes {
        assert!((0.5..3.5).contains(s), "size {s}");
    }
}

#[test]
fn foliage_base_is_denser_than_top() {
    let set = generate_foliage(&small_foliage(), &mut SeededRng::new(42));
    let mid = -7.5 + 8.0;
    let lower = set.tree.iter().filter(|p| p.y < mid).count();
    let upper = set.len() - lower;
    // t^1.8 < 0.5 for t < 0.68, so roughly two thirds land in the lower half.
    assert!(lower > upper * 3 / 2, "lower {lower} upper {upper}");
}

#[test]
fn chaos_sphere_is_volumetric() {
    let set = generate_foliage(&small_foliage(), &mut SeededRng::new(7));
    let inner = set.chaos.iter().filter(|p| p.length() < 14.0).count() as f32;
    let fraction = inner / set.len() as f32;
    // Half the radius holds an eighth of the volume.
    assert!((0.09..0.16).contains(&fraction), "fraction {fraction}");
}

#[test]
fn chaos_sphere_point_extremes() {
    let p = chaos_sphere_point(0.0, 0.5, 1.0, 10.0);
    assert!((p.x - 10.0).abs() < 1e-4 && p.y.abs() < 1e-4 && p.z.abs() < 1e-4);
    assert_eq!(chaos_sphere_point(0.3, 0.2, 0.0, 10.0), Vec3::ZERO);
}

#[test]
fn generators_consume_a_fixed_number_of_draws() {
    let mut rng = SeededRng::new(42);
    generate_foliage(
        &FoliageConfig {
            count: 10,
            ..FoliageConfig::default()
        },
        &mut rng,
    );
    let mut expected = SeededRng::new(42);
    for _ in 0..80 {
        expected.next_u32();
    }
    assert_eq!(rng, expected);

    generate_lights(
        &LightConfig {
            count: 3,
            ..LightConfig::default()
        },
        &mut rng,
    );
    for _ in 0..18 {
        expected.next_u32();
    }
    assert_eq!(rng, expected);
}

#[test]
fn lights_stay_in_bounds() {
    let set = generate_lights(&LightConfig::default(), &mut SeededRng::new(42));
    assert_eq!(set.len(), 500);
    for (c, t) in set.chaos.iter().zip(&set.tree) {
        assert!(c.length() <= 22.0 + 1e-3);
        assert!((-7.0..8.0).contains(&t.y), "tree {t:?}");
    }
    assert!(set.sizes.iter().all(|s| (0.5..1.0).contains(s)));
}

#[test]
fn same_seed_same_layout() {
    let a = generate_foliage(&small_foliage(), &mut SeededRng::new(42));
    let b = generate_foliage(&small_foliage(), &mut SeededRng::new(42));
    assert_eq!(a, b);
    let c = generate_foliage(&small_foliage(), &mut SeededRng::new(43));
    assert_ne!(a.chaos, c.chaos);
}

#[test]
fn text_target_falls_back_to_tree() {
    let mut set = generate_lights(
        &LightConfig {
            count: 4,
            ..LightConfig::default()
        },
        &mut SeededRng::new(1),
    );
    assert_eq!(set.text_target(2), Some(set.tree[2]));
    assert_eq!(set.text_target(4), None);

    assert!(set.attach_text(vec![Vec3::ONE; 3]).is_err());
    set.attach_text(vec![Vec3::ONE; 4]).unwrap();
    assert_eq!(set.text_target(2), Some(Vec3::ONE));
}

#[test]
fn ragged_set_is_read_as_its_aligned_prefix() {
    let set = ParticleSet {
        chaos: vec![Vec3::X; 5],
        tree: vec![Vec3::Y; 3],
        text: None,
        sizes: vec![1.0; 4],
    };
    assert_eq!(set.len(), 3);
    let items = set.iter().collect::<Vec<_>>();
    assert_eq!(items.len(), 3);
    assert!(
        items
            .iter()
            .all(|&(c, t, text, s)| c == Vec3::X && t == Vec3::Y && text == t && s == 1.0)
    );
}
