use globe_core::{spawn_particles, Particle};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn particles_stay_within_ranges() {
    let mut rng = StdRng::seed_from_u64(7);
    let ps = spawn_particles(&mut rng, 100);
    assert_eq!(ps.len(), 100);
    for p in &ps {
        assert!((0.0..100.0).contains(&p.left_vw));
        assert!((0.0..100.0).contains(&p.top_vh));
        assert!((1.0..4.0).contains(&p.size_px));
        assert!((0.0..5.0).contains(&p.delay_sec));
    }
}

#[test]
fn same_seed_same_layout() {
    let a = spawn_particles(&mut StdRng::seed_from_u64(42), 16);
    let b = spawn_particles(&mut StdRng::seed_from_u64(42), 16);
    assert_eq!(a, b);
    let c = spawn_particles(&mut StdRng::seed_from_u64(43), 16);
    assert_ne!(a, c);
}

#[test]
fn zero_count_spawns_nothing() {
    assert!(spawn_particles(&mut StdRng::seed_from_u64(1), 0).is_empty());
}

#[test]
fn css_sets_square_white_dot() {
    let p = Particle {
        left_vw: 12.5,
        top_vh: 80.0,
        size_px: 2.0,
        delay_sec: 1.25,
    };
    let css = p.css();
    assert!(css.contains("left: 12.500vw"));
    assert!(css.contains("top: 80.000vh"));
    assert!(css.contains("width: 2.000px"));
    assert!(css.contains("height: 2.000px"));
    assert!(css.contains("background: white"));
    assert!(css.contains("animation-delay: 1.250s"));
}
