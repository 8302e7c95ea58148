//! Integration tests for the public simulation API.
//!
//! These drive `ShatterSimulation` the way a rendering host does: create,
//! update once per frame, read particles or exports in between.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use shatter::prelude::*;
use shatter::{export, ShatterError, LIFETIME_RANGE, MAX_INTENSITY, SIZE_RANGE};

fn seeded(center: Vec2, intensity: f32, seed: u64) -> ShatterSimulation {
    ShatterSimulation::with_rng(center, intensity, SmallRng::seed_from_u64(seed))
}

fn is_palette_color(color: Vec3) -> bool {
    EmberColor::ALL.iter().any(|c| c.rgb() == color)
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn test_full_intensity_burst_is_100() {
    let sim = ShatterSimulation::new(0.0, 0.0, 1.0);
    assert_eq!(sim.len(), 100);
}

#[test]
fn test_zero_intensity_burst_is_20() {
    let sim = ShatterSimulation::new(0.0, 0.0, 0.0);
    assert_eq!(sim.len(), 20);
}

#[test]
fn test_overshooting_particle() {
    let mut p = Particle::new(Vec2::ZERO, Vec2::new(1.0, 1.0), 0.5, 4.0, EmberColor::Red.rgb());
    p.advance(0.6);
    assert!((p.lifetime() + 0.1).abs() < 1e-6);
    assert!(p.is_expired());
}

#[test]
fn test_empty_export() {
    let mut sim = seeded(Vec2::ZERO, 0.0, 1);
    // All burst lifetimes are at most 2s and intensity 0 never spawns
    sim.step(2.5);
    assert!(sim.is_empty());
    assert_eq!(sim.export_json().unwrap(), "[]");
    assert!(sim.instance_bytes().is_empty());
}

// ============================================================================
// Invariants over a long run
// ============================================================================

#[test]
fn test_long_run_invariants() {
    let anchor = Vec2::new(320.0, 240.0);
    let mut sim = seeded(anchor, 0.7, 42);
    let batch = sim.emission().batch_size(0.7);
    assert_eq!(batch, 4);

    for frame in 0..600 {
        let intensity = (frame % 100) as f32 / 100.0;
        let before = sim.len();
        let report = sim.update(1.0 / 60.0, intensity);

        assert_eq!(report.alive, sim.len());
        assert_eq!(before - report.expired + report.spawned, report.alive);
        assert!(report.spawned == 0 || report.spawned == sim.emission().batch_size(intensity));

        for p in sim.particles() {
            assert!(p.lifetime() > 0.0);
            assert!(p.lifetime() <= LIFETIME_RANGE.1);
            assert!((SIZE_RANGE.0..=SIZE_RANGE.1).contains(&p.size()));
            assert!(is_palette_color(p.color()));
        }
    }
}

#[test]
fn test_particles_move_away_from_anchor() {
    let anchor = Vec2::new(-5.0, 8.0);
    let mut sim = seeded(anchor, 0.0, 3);
    let initial: Vec<Particle> = sim.particles().to_vec();

    sim.step(0.25);

    // Nothing expires within 0.25s (min lifetime 0.5) and nothing spawns
    assert_eq!(sim.len(), initial.len());
    for (before, after) in initial.iter().zip(sim.particles()) {
        assert_eq!(after.position(), before.position() + before.velocity() * 0.25);
        assert_eq!(after.lifetime(), before.lifetime() - 0.25);
        assert_eq!(after.velocity(), before.velocity());
        assert_eq!(after.size(), before.size());
        assert_eq!(after.color(), before.color());
    }
}

#[test]
fn test_reads_are_idempotent() {
    let mut sim = seeded(Vec2::new(1.0, 1.0), 0.9, 5);
    sim.step(0.1);

    let a = sim.export_json().unwrap();
    let b = sim.export_json().unwrap();
    assert_eq!(a, b);
    assert_eq!(sim.particles(), sim.particles());

    let records = export::records_from_json(&a).unwrap();
    assert_eq!(records.len(), sim.len());
    assert_eq!(records, export::to_records(sim.particles()));
}

// ============================================================================
// Registry
// ============================================================================

#[test]
fn test_registry_lifecycle() {
    let mut registry = SimulationRegistry::new();
    let id = registry.create(100.0, 100.0, 1.0);

    registry.update(id, 1.0 / 60.0, 0.5).unwrap();
    let json = registry.export(id).unwrap();
    assert_eq!(export::records_from_json(&json).unwrap().len(), registry.get(id).unwrap().len());

    assert!(registry.destroy(id));
    assert!(registry.is_empty());
    match registry.export(id) {
        Err(ShatterError::UnknownSimulation(missing)) => assert_eq!(missing, id),
        other => panic!("expected UnknownSimulation, got {other:?}"),
    }
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn prop_burst_count_matches_formula(intensity in 0.0f32..4.0) {
        let sim = seeded(Vec2::ZERO, intensity, 9);
        prop_assert_eq!(sim.len(), (20.0 + intensity * 80.0).floor() as usize);
    }

    #[test]
    fn prop_non_positive_intensity_bursts_20(intensity in -100.0f32..=0.0) {
        let sim = seeded(Vec2::ZERO, intensity, 9);
        prop_assert_eq!(sim.len(), 20);
    }

    #[test]
    fn prop_any_intensity_is_bounded(intensity in any::<f32>(), seed in any::<u64>()) {
        let mut sim = seeded(Vec2::ZERO, intensity, seed);
        let burst = sim.len();
        prop_assert!(burst <= sim.emission().burst_count(MAX_INTENSITY));
        let report = sim.update(0.0, intensity);
        prop_assert!(report.spawned <= sim.emission().batch_size(MAX_INTENSITY));
        prop_assert!((0.0..=MAX_INTENSITY).contains(&sim.intensity()));
    }

    #[test]
    fn prop_no_expired_after_step(dt in 0.0f32..3.0, intensity in 0.0f32..1.0, seed in any::<u64>()) {
        let mut sim = seeded(Vec2::new(2.0, 3.0), intensity, seed);
        sim.step(dt);
        prop_assert!(sim.particles().iter().all(|p| !p.is_expired()));
    }

    #[test]
    fn prop_advance_is_exact(
        x in -1000.0f32..1000.0,
        y in -1000.0f32..1000.0,
        dt in 0.0f32..5.0,
        seed in any::<u64>(),
    ) {
        let mut ctx = SpawnContext::from_rng(SmallRng::seed_from_u64(seed));
        let start = Particle::spawn(Vec2::new(x, y), &mut ctx);
        let mut p = start;
        p.advance(dt);
        prop_assert_eq!(p.position().x, x + start.velocity().x * dt);
        prop_assert_eq!(p.position().y, y + start.velocity().y * dt);
        prop_assert_eq!(p.lifetime(), start.lifetime() - dt);
        prop_assert_eq!(p.is_expired(), p.lifetime() <= 0.0);
    }
}
