// tests/core.rs
use flock_trial::mechanics::{gaussian01, seeded, unit01, whole_in};
use flock_trial::systems::Spawner;
use flock_trial::{refine_generations, run_episode, ConfigError, Contender, Sensors, SimConfig, Sprites};

/* ──────────────────────────────────────────────────────────────────────────
1) Config validation
────────────────────────────────────────────────────────────────────────── */

#[test]
fn defaults_validate() {
    assert_eq!(SimConfig::default().validate(), Ok(()));
}

#[test]
fn gap_that_cannot_fit_above_the_floor_is_fatal() {
    let mut cfg = SimConfig::default();
    cfg.course.gap = 300.0;
    assert_eq!(
        cfg.validate(),
        Err(ConfigError::GapDoesNotFit { gap: 300.0, hi: 450.0, floor_y: 730.0 })
    );
}

#[test]
fn degenerate_layouts_are_rejected() {
    let mut cfg = SimConfig::default();
    cfg.course.gap_range = (300.0, 300.0);
    assert!(matches!(cfg.validate(), Err(ConfigError::EmptyGapRange { .. })));

    let mut cfg = SimConfig::default();
    cfg.course.gap_range = (-10.0, 100.0);
    assert!(matches!(cfg.validate(), Err(ConfigError::EmptyGapRange { .. })));

    let mut cfg = SimConfig::default();
    cfg.world_height = 0.0;
    assert!(matches!(cfg.validate(), Err(ConfigError::NonPositive { field: "world_height", .. })));

    let mut cfg = SimConfig::default();
    cfg.floor_y = 900.0;
    assert!(matches!(cfg.validate(), Err(ConfigError::FloorOutsideWorld { .. })));

    let mut cfg = SimConfig::default();
    cfg.course.speed = f64::NAN;
    assert!(matches!(cfg.validate(), Err(ConfigError::NonPositive { field: "course.speed", .. })));

    let mut cfg = SimConfig::default();
    cfg.start.0 = -1.0;
    assert!(matches!(cfg.validate(), Err(ConfigError::StartOutsideWorld { .. })));
}

#[cfg(feature = "json-config")]
#[test]
fn json_overrides_only_what_it_names() {
    let cfg = SimConfig::from_json_str(r#"{ "seed": 7, "course": { "gap": 180.0 } }"#).unwrap();
    assert_eq!(cfg.seed, 7);
    assert_eq!(cfg.course.gap, 180.0);
    assert_eq!(cfg.course.speed, 5.0);
    assert_eq!(cfg.physics.jump_velocity, -10.5);

    assert!(matches!(SimConfig::from_json_str("{ nope"), Err(ConfigError::Parse(_))));
    assert!(matches!(
        SimConfig::from_json_str(r#"{ "course": { "gap": 500.0 } }"#),
        Err(ConfigError::GapDoesNotFit { .. })
    ));
}

#[cfg(feature = "json-config")]
#[test]
fn json_partial_tilt_keeps_the_other_limits() {
    let cfg = SimConfig::from_json_str(r#"{ "physics": { "tilt": { "max": 30.0 } } }"#).unwrap();
    assert_eq!(cfg.physics.tilt.max, 30.0);
    assert_eq!(cfg.physics.tilt.rate, 20.0);
    assert_eq!(cfg.physics.tilt.hold, 50.0);
    assert_eq!(cfg.physics.tilt.floor, -90.0);
    assert_eq!(cfg.physics.gravity, 3.0);
}

/* ──────────────────────────────────────────────────────────────────────────
2) Seeded draws
────────────────────────────────────────────────────────────────────────── */

#[test]
fn gap_heights_are_whole_in_range_and_replayable() {
    let course = SimConfig::default().course;
    let mut a = Spawner::new(9, course, 104.0, 640.0);
    let mut b = Spawner::new(9, course, 104.0, 640.0);
    let mut c = Spawner::new(10, course, 104.0, 640.0);

    let first = a.first();
    assert_eq!(first.x, 700.0);
    assert_eq!(first, b.first());
    let _ = c.first();

    let mut differs = false;
    for _ in 0..500 {
        let (oa, ob, oc) = (a.spawn(), b.spawn(), c.spawn());
        assert_eq!(oa, ob);
        assert_eq!(oa.x, 600.0);
        assert!((50.0..450.0).contains(&oa.gap_top()));
        assert_eq!(oa.gap_top().fract(), 0.0);
        assert_eq!(oa.gap_bottom() - oa.gap_top(), 200.0);
        assert_eq!(oa.top_origin(), oa.gap_top() - 640.0);
        differs |= oa.gap_top() != oc.gap_top();
    }
    assert!(differs, "different seeds should produce different courses");
}

#[test]
fn retire_drops_only_pipes_fully_off_the_left_edge() {
    let course = SimConfig::default().course;
    let mut s = Spawner::new(1, course, 104.0, 640.0);
    let mut pipes = vec![s.first(), s.spawn(), s.spawn()];
    pipes[0].x = -105.0;
    pipes[1].x = -104.0;
    assert_eq!(s.retire(&mut pipes), 1);
    assert_eq!(pipes.len(), 2);
    assert_eq!(pipes[0].x, -104.0);
}

#[test]
fn unit_and_gaussian_draws_behave() {
    let mut rng = seeded(3);
    let mut sum = 0.0;
    for _ in 0..10_000 {
        let u = unit01(&mut rng);
        assert!((0.0..1.0).contains(&u));
        let g = gaussian01(&mut rng);
        assert!(g.is_finite());
        sum += g;
    }
    assert!((sum / 10_000.0).abs() < 0.05);
    assert_eq!(whole_in(&mut rng, 5.0, 5.5), 5.0);
}

/* ──────────────────────────────────────────────────────────────────────────
3) Generation loop
────────────────────────────────────────────────────────────────────────── */

#[test]
fn generations_stop_when_the_predicate_holds() {
    let out = refine_generations(
        1.0_f64,
        |p, _generation| *p * 2.0,
        |_, m| *m,
        |_, m| *m >= 64.0,
        100,
    );
    assert!(out.stopped);
    assert_eq!(out.generations, 6);
    assert_eq!(out.population, 32.0);
    assert_eq!(out.last, Some(64.0));
}

#[test]
fn generations_respect_the_cap() {
    let out = refine_generations(0u32, |p, g| *p + g as u32, |p, m| *p + *m, |_, _| false, 4);
    assert!(!out.stopped);
    assert_eq!(out.generations, 4);
    // p: 0 → 0 → 1 → 4 → 11
    assert_eq!(out.population, 11);
    assert_eq!(out.last, Some(7));
}

/// Jump when lower than `threshold`.
#[derive(Clone, Copy, Debug)]
struct Threshold(f64);

impl flock_trial::Controller for Threshold {
    fn activate(&mut self, s: &Sensors) -> f64 {
        if s.y > self.0 { 1.0 } else { 0.0 }
    }
}

#[test]
fn episodes_drive_a_population_to_a_fitter_generation() {
    let mut cfg = SimConfig::default();
    cfg.course.gap_range = (250.0, 251.0);
    cfg.max_ticks = Some(300);
    let sprites = Sprites::classic().unwrap();

    // seeds at the floor, in the gap, and at the ceiling
    let start: Vec<Contender<Threshold>> =
        [700.0, 360.0, -100.0].into_iter().map(|t| Contender::new(Threshold(t))).collect();

    let out = refine_generations(
        start,
        |pop, _| {
            for p in pop.iter_mut() {
                p.fitness = 0.0;
            }
            run_episode(&cfg, &sprites, pop).unwrap();
            pop.iter().map(|p| p.fitness).fold(f64::MIN, f64::max)
        },
        |pop, _| {
            let best = pop
                .iter()
                .max_by(|a, b| a.fitness.total_cmp(&b.fitness))
                .map(|p| p.brain)
                .unwrap();
            vec![Contender::new(best); pop.len()]
        },
        |_, best| *best >= 30.0,
        3,
    );
    assert!(out.stopped);
    assert_eq!(out.generations, 1);
    assert_eq!(out.population[1].brain.0, 360.0);
    assert!(out.population[1].fitness > out.population[0].fitness);
}
