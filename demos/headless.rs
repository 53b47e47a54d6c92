// demos/headless.rs
// Run with:
//   RUST_LOG=info cargo run --example headless
//   RUST_LOG=info cargo run --example headless -- --paced   (30 ticks/s for the best run)
//
// Evolves a flock of tiny linear controllers: elitist selection plus Gaussian
// weight noise. Deliberately crude; a real optimizer plugs in the same way.

use std::ops::ControlFlow;

use bevy_prng::WyRand;
use flock_trial::episode::{Episode, FixedRate};
use flock_trial::mechanics::{gaussian01, seeded};
use flock_trial::{refine_generations, Contender, Controller, Sensors, SimConfig, Sprites};
use tracing::info;
use tracing_subscriber::EnvFilter;

const POPULATION: usize = 50;
const GENERATIONS: usize = 50;
const FITNESS_GOAL: f64 = 100.0;

/// tanh(w·x + b) over the three sensor readings.
#[derive(Clone, Copy, Debug)]
struct Linear {
    w: [f64; 3],
    b: f64,
}

impl Linear {
    fn random(rng: &mut WyRand) -> Self {
        Self { w: [gaussian01(rng), gaussian01(rng), gaussian01(rng)], b: gaussian01(rng) }
    }

    fn mutated(&self, rng: &mut WyRand, sigma: f64) -> Self {
        let mut next = *self;
        for w in next.w.iter_mut() {
            *w += gaussian01(rng) * sigma;
        }
        next.b += gaussian01(rng) * sigma;
        next
    }
}

impl Controller for Linear {
    fn activate(&mut self, s: &Sensors) -> f64 {
        let x = s.as_array();
        // sensors are in pixels; scale to keep tanh out of saturation
        let z: f64 = self.w.iter().zip(x).map(|(w, x)| w * x / 100.0).sum::<f64>() + self.b;
        z.tanh()
    }
}

fn main() {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let paced = std::env::args().any(|a| a == "--paced");
    let mut cfg = SimConfig::default();
    cfg.max_ticks = Some(30 * 60);
    let sprites = match Sprites::classic() {
        Ok(s) => s,
        Err(e) => {
            eprintln!("bad sprites: {e}");
            return;
        }
    };

    let mut rng = seeded(0xF1A9);
    let population: Vec<Contender<Linear>> =
        (0..POPULATION).map(|_| Contender::new(Linear::random(&mut rng))).collect();

    // best controller over every evaluated generation; the final population
    // is freshly bred and carries no fitness yet
    let mut champion: Option<(f64, Linear)> = None;
    let out = refine_generations(
        population,
        |pop, generation| {
            for p in pop.iter_mut() {
                p.fitness = 0.0;
            }
            cfg.seed = generation as u64;
            let summary = match flock_trial::run_episode(&cfg, &sprites, pop) {
                Ok(s) => s,
                Err(e) => {
                    eprintln!("bad config: {e}");
                    return f64::MIN;
                }
            };
            let Some(leader) = pop.iter().max_by(|a, b| a.fitness.total_cmp(&b.fitness)) else {
                return f64::MIN;
            };
            let best = leader.fitness;
            if champion.is_none_or(|(f, _)| best > f) {
                champion = Some((best, leader.brain));
            }
            info!(generation, score = summary.score, ticks = summary.ticks, best, "generation done");
            best
        },
        |pop, _| {
            let mut ranked: Vec<&Contender<Linear>> = pop.iter().collect();
            ranked.sort_by(|a, b| b.fitness.total_cmp(&a.fitness));
            let elite: Vec<Linear> = ranked.iter().take(POPULATION / 5).map(|p| p.brain).collect();
            (0..POPULATION)
                .map(|i| {
                    let parent = elite[i % elite.len()];
                    let child = if i < elite.len() { parent } else { parent.mutated(&mut rng, 0.3) };
                    Contender::new(child)
                })
                .collect()
        },
        |_, best| *best >= FITNESS_GOAL,
        GENERATIONS,
    );

    info!(generations = out.generations, stopped = out.stopped, "evolution finished");

    let Some((best, brain)) = champion else {
        return;
    };
    info!(best, "replaying champion");
    let mut replay = vec![Contender::new(brain)];
    let mut episode = match Episode::new(&cfg, &sprites, &mut replay) {
        Ok(e) => e,
        Err(e) => {
            eprintln!("bad config: {e}");
            return;
        }
    };
    let mut pacer = FixedRate::new(cfg.tick_rate);
    let summary = episode.run_until(|frame| {
        if frame.tick % cfg.tick_rate as u64 == 0 {
            if let Some(a) = frame.agents.first() {
                println!("t={:>5} score={:>3} y={:>6.1} tilt={:>5.1}", frame.tick, frame.score, a.y, a.tilt);
            }
        }
        if paced {
            pacer.wait();
        }
        ControlFlow::Continue(())
    });
    println!("champion: {:?} -> {:?}", brain, summary);
}
