/*!
`flock_trial` — a deterministic side-scroller trial for evolving flyers.

What it does
- Runs a flock of agents through a scrolling course of pipe pairs under
  jump/gravity physics, one shared fixed time step for everyone.
- Tests contact pixel-by-pixel between agent and pipe silhouettes.
- Reports fitness per controller: survival credit each tick, a pass bonus to
  every survivor when the flock clears a pipe, a penalty on collision.
- Repeats generations with caller-supplied closures
  (`evaluate : &mut Pop → M`, `breed : (&Pop, &M) → Pop`, `stop`)
  via [`refine_generations`].

How to use (call surface only)
- Build a [`SimConfig`] (defaults are the classic course) and [`Sprites`].
- Wrap each controller as a [`systems::sdk::Pilot`]; any
  `FnMut(&Sensors) -> f64` in a [`systems::sdk::Contender`] will do.
- Call [`episode::run_episode`] or drive an [`episode::Episode`] tick by tick.

What it does NOT do
- No neural networks, no genetic operators, no rendering. Those live outside
  and plug in through the traits above.
*/

pub mod config;
pub mod episode;
pub mod error;
pub mod mechanics;
pub mod systems;

pub use config::{SimConfig, Sprites};
pub use episode::{run_episode, Episode, EpisodeSummary, Frame, StopReason};
pub use error::ConfigError;
pub use systems::sdk::{Contender, Controller, Credit, FitnessSink, Pilot, Sensors};

use tracing::info;

/// Result of a generation loop.
#[derive(Clone, Debug)]
pub struct GenerationOutcome<Pop, M> {
    pub population: Pop,
    /// Measurements of the last evaluated generation.
    pub last: Option<M>,
    pub generations: usize,
    /// `stop` fired before the generation cap.
    pub stopped: bool,
}

/// Generational refinement: P_{g+1} = breed(P_g, evaluate(P_g)).
/// `evaluate` gets the generation index and may mutate the population
/// (that is how fitness lands on it); `stop` is checked before breeding.
pub fn refine_generations<Pop, M, Eval, Breed, Stop>(
    mut population: Pop,
    mut evaluate: Eval,
    mut breed: Breed,
    stop: Stop,
    max_generations: usize,
) -> GenerationOutcome<Pop, M>
where
    Eval: FnMut(&mut Pop, usize) -> M,
    Breed: FnMut(&Pop, &M) -> Pop,
    Stop: Fn(&Pop, &M) -> bool,
{
    let mut last = None;
    for generation in 0..max_generations {
        let measured = evaluate(&mut population, generation);
        if stop(&population, &measured) {
            info!(generation, "stop condition met");
            return GenerationOutcome {
                population,
                last: Some(measured),
                generations: generation + 1,
                stopped: true,
            };
        }
        population = breed(&population, &measured);
        last = Some(measured);
    }
    GenerationOutcome { population, last, generations: max_generations, stopped: false }
}
