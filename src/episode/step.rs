//! One fixed time step over the whole flock.
//!
//! Order within a tick:
//! 1. pick the pipe ahead of the lead agent;
//! 2. per live agent: integrate, credit survival, poll its controller, jump;
//! 3. per pipe, per live agent: collision (penalty + elimination), then
//!    pass-through marking, which still counts an agent that just collided;
//! 4. scroll pipes; on a pass, score once, reward survivors, spawn one pipe;
//!    retire pipes that left the screen;
//! 5. eliminate agents touching the floor or above the ceiling;
//! 6. scroll the floor;
//! 7. compact the roster.
//!
//! Eliminated seats are only marked until step 7, so indices taken at the
//! start of the tick stay valid and a dead agent is never integrated,
//! polled or credited again.

use tracing::{debug, trace, warn};

use crate::config::{SimConfig, Sprites};
use crate::episode::world::World;
use crate::systems::sdk::{wants_jump, Credit, Pilot, Sensors};
use crate::systems::{Obstacle, Spawner};

/// What happened during one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickReport {
    pub tick: u64,
    /// The flock cleared a pipe (at most once per tick).
    pub passed: bool,
    pub collisions: usize,
    pub out_of_bounds: usize,
    pub live: usize,
}

/// Index of the pipe whose gap the controllers should aim for.
pub fn target_index(world: &World, barrier_width: f64) -> usize {
    match (world.roster.lead(), world.obstacles.first()) {
        (Some(lead), Some(first)) if world.obstacles.len() > 1 && lead.x() > first.x + barrier_width => 1,
        _ => 0,
    }
}

/// Sensor reading for an agent at height `y` aiming at `target`.
pub fn sense(y: f64, target: Option<&Obstacle>) -> Sensors {
    match target {
        Some(o) => Sensors { y, to_gap_top: (y - o.gap_top()).abs(), to_gap_bottom: (y - o.gap_bottom()).abs() },
        None => Sensors { y, ..Sensors::default() },
    }
}

/// Advance `world` by one tick. A terminal world is left untouched.
pub fn advance<P: Pilot>(
    world: &mut World,
    spawner: &mut Spawner,
    cfg: &SimConfig,
    sprites: &Sprites,
    pilots: &mut [P],
) -> TickReport {
    if world.is_terminal() {
        return TickReport { tick: world.tick, ..TickReport::default() };
    }
    let rewards = cfg.rewards;
    let mut report = TickReport::default();

    // 1) target pipe
    let target = world.obstacles.get(target_index(world, sprites.barrier_width())).copied();

    // 2) physics + decisions
    for i in 0..world.roster.len() {
        let Some(pilot_idx) = world.roster.seat(i).filter(|s| s.is_alive()).map(|s| s.pilot) else { continue };
        let (Some(agent), Some(pilot)) = (world.roster.agent_mut(i), pilots.get_mut(pilot_idx)) else { continue };
        agent.step_physics(&cfg.physics);
        pilot.credit(Credit::Survival, rewards.survival);
        let out = pilot.activate(&sense(agent.y, target.as_ref()));
        if !out.is_finite() {
            warn!(pilot = pilot_idx, out, "non-finite controller output, treating as no jump");
        }
        if wants_jump(out, cfg.jump_threshold) {
            agent.jump(&cfg.physics);
        }
    }

    // 3) collisions and pass-through
    let mut add_pipe = false;
    for obstacle in world.obstacles.iter_mut() {
        for i in 0..world.roster.len() {
            let Some(seat) = world.roster.seat(i).filter(|s| s.is_alive()).copied() else { continue };
            if obstacle.collides_with(&seat.agent, sprites) {
                if let Some(pilot) = world.roster.eliminate(i) {
                    if let Some(p) = pilots.get_mut(pilot) {
                        p.credit(Credit::Collision, rewards.collision);
                    }
                    debug!(pilot, tick = world.tick, y = seat.agent.y, "agent hit a pipe");
                    report.collisions += 1;
                }
            }
            if !obstacle.passed && obstacle.x < seat.agent.x() {
                obstacle.passed = true;
                add_pipe = true;
            }
        }
    }

    // 4) pipe lifecycle
    for obstacle in world.obstacles.iter_mut() {
        obstacle.advance(cfg.course.speed);
    }
    if add_pipe {
        world.score += 1;
        for seat in world.roster.live() {
            if let Some(p) = pilots.get_mut(seat.pilot) {
                p.credit(Credit::Pass, rewards.pass);
            }
        }
        world.obstacles.push(spawner.spawn());
        report.passed = true;
    }
    spawner.retire(&mut world.obstacles);

    // 5) floor and ceiling
    let agent_height = sprites.agent_height();
    for i in 0..world.roster.len() {
        let Some(seat) = world.roster.seat(i).filter(|s| s.is_alive()).copied() else { continue };
        let y = seat.agent.y;
        if y + agent_height >= world.floor.y || y < 0.0 {
            world.roster.eliminate(i);
            debug!(pilot = seat.pilot, tick = world.tick, y, "agent left the sky");
            report.out_of_bounds += 1;
        }
    }

    // 6) floor scroll
    world.floor.advance(cfg.course.speed);

    // 7) compact
    world.roster.compact();
    world.eliminations += report.collisions + report.out_of_bounds;
    world.tick += 1;
    report.tick = world.tick;
    report.live = world.roster.live_count();
    trace!(tick = world.tick, live = report.live, score = world.score, pipes = world.obstacles.len(), "tick");
    report
}
