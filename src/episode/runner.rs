use std::ops::ControlFlow;
use std::thread;
use std::time::{Duration, Instant};

use tracing::info;

use crate::config::{SimConfig, Sprites};
use crate::episode::step::{self, TickReport};
use crate::episode::world::{Frame, Roster, World};
use crate::error::ConfigError;
use crate::systems::sdk::Pilot;
use crate::systems::{Floor, Spawner};

/// Why an episode stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StopReason {
    /// No agent left alive.
    Extinct,
    /// The observer asked to stop between ticks.
    Interrupted,
    /// `max_ticks` reached with agents still flying.
    TickCap,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EpisodeSummary {
    pub ticks: u64,
    pub score: u32,
    pub eliminations: usize,
    pub survivors: usize,
    pub stop: StopReason,
}

/// One generation's trial. Borrows the pilots for its whole lifetime; they
/// are only touched through `Pilot` calls made by `tick`.
pub struct Episode<'a, P> {
    cfg: &'a SimConfig,
    sprites: &'a Sprites,
    pilots: &'a mut [P],
    world: World,
    spawner: Spawner,
}

impl<'a, P: Pilot> Episode<'a, P> {
    /// Validate the config and seat one agent per pilot.
    pub fn new(cfg: &'a SimConfig, sprites: &'a Sprites, pilots: &'a mut [P]) -> Result<Self, ConfigError> {
        cfg.validate()?;
        let mut spawner =
            Spawner::new(cfg.seed, cfg.course, sprites.barrier_width(), sprites.barrier_height());
        let world = World {
            roster: Roster::seed(pilots.len(), cfg.start),
            obstacles: vec![spawner.first()],
            floor: Floor::new(cfg.floor_y, sprites.floor_width),
            score: 0,
            tick: 0,
            eliminations: 0,
        };
        Ok(Self { cfg, sprites, pilots, world, spawner })
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn frame(&self) -> Frame<'_> {
        self.world.frame()
    }

    pub fn is_terminal(&self) -> bool {
        self.world.is_terminal()
    }

    pub fn tick(&mut self) -> TickReport {
        step::advance(&mut self.world, &mut self.spawner, self.cfg, self.sprites, self.pilots)
    }

    /// Tick until extinction, the tick cap, or until `observer` breaks.
    /// The observer sees every frame after its tick completes, which makes
    /// it the place to render, pace, or poll for a quit signal.
    pub fn run_until(&mut self, mut observer: impl FnMut(&Frame<'_>) -> ControlFlow<()>) -> EpisodeSummary {
        let stop = loop {
            if self.is_terminal() {
                break StopReason::Extinct;
            }
            if self.cfg.max_ticks.is_some_and(|cap| self.world.tick >= cap) {
                break StopReason::TickCap;
            }
            self.tick();
            if observer(&self.world.frame()).is_break() {
                break StopReason::Interrupted;
            }
        };
        let summary = EpisodeSummary {
            ticks: self.world.tick,
            score: self.world.score,
            eliminations: self.world.eliminations,
            survivors: self.world.roster.live_count(),
            stop,
        };
        info!(
            ticks = summary.ticks,
            score = summary.score,
            eliminations = summary.eliminations,
            survivors = summary.survivors,
            stop = ?summary.stop,
            "episode finished"
        );
        summary
    }
}

/// Run one full episode headless. Fitness lands in the pilots.
pub fn run_episode<P: Pilot>(
    cfg: &SimConfig,
    sprites: &Sprites,
    pilots: &mut [P],
) -> Result<EpisodeSummary, ConfigError> {
    let mut episode = Episode::new(cfg, sprites, pilots)?;
    Ok(episode.run_until(|_| ControlFlow::Continue(())))
}

/// Caps a loop to a fixed number of iterations per second.
#[derive(Clone, Copy, Debug)]
pub struct FixedRate {
    period: Duration,
    next: Instant,
}

impl FixedRate {
    pub fn new(ticks_per_second: u32) -> Self {
        let period = Duration::from_secs(1) / ticks_per_second.max(1);
        Self { period, next: Instant::now() + period }
    }

    /// Sleep until the next slot. A late caller does not try to catch up.
    pub fn wait(&mut self) {
        let now = Instant::now();
        if self.next > now {
            thread::sleep(self.next - now);
            self.next += self.period;
        } else {
            self.next = now + self.period;
        }
    }
}
