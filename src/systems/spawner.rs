use bevy_prng::WyRand;
use tracing::debug;

use crate::config::Course;
use crate::mechanics::stoch;
use crate::systems::obstacle::Obstacle;

/// Owns the course RNG; decides where new pipes appear and when old ones go.
#[derive(Clone, Debug)]
pub struct Spawner {
    rng: WyRand,
    course: Course,
    barrier_height: f64,
    barrier_width: f64,
}

impl Spawner {
    pub fn new(seed: u64, course: Course, barrier_width: f64, barrier_height: f64) -> Self {
        Self { rng: stoch::seeded(seed), course, barrier_height, barrier_width }
    }

    fn at(&mut self, x: f64) -> Obstacle {
        let (lo, hi) = self.course.gap_range;
        let gap_top = stoch::whole_in(&mut self.rng, lo, hi);
        debug!(x, gap_top, "spawned pipe");
        Obstacle::new(x, gap_top, self.course.gap, self.barrier_height)
    }

    /// The pipe an episode starts with.
    pub fn first(&mut self) -> Obstacle {
        self.at(self.course.first_x)
    }

    /// The pipe added after the flock clears one.
    pub fn spawn(&mut self) -> Obstacle {
        self.at(self.course.spawn_x)
    }

    /// Drop pipes whose right edge scrolled past x = 0. Returns how many went.
    pub fn retire(&self, obstacles: &mut Vec<Obstacle>) -> usize {
        let before = obstacles.len();
        obstacles.retain(|o| !o.is_offscreen(self.barrier_width));
        let gone = before - obstacles.len();
        if gone > 0 {
            debug!(gone, "retired pipes");
        }
        gone
    }
}
