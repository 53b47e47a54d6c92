//! Tunables and the read-only sprite bundle.
//!
//! Defaults reproduce the classic 500×800 course at 2× sprite scale: a floor
//! at y = 730, pipes 104 px wide with a 200 px gap, 30 ticks per second.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::mechanics::{Silhouette, TiltRule};

/// Vertical motion constants.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Physics {
    /// Displacement gains ½·gravity·t² per tick count t.
    pub gravity: f64,
    pub jump_velocity: f64,
    /// Largest downward displacement in one tick.
    pub terminal: f64,
    /// Extra upward displacement while rising.
    pub rise_boost: f64,
    pub tilt: TiltRule,
}

impl Default for Physics {
    fn default() -> Self {
        Self {
            gravity: 3.0,
            jump_velocity: -10.5,
            terminal: 16.0,
            rise_boost: 2.0,
            tilt: TiltRule::default(),
        }
    }
}

/// Obstacle course layout.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Course {
    /// Horizontal scroll per tick, shared by pipes and floor.
    pub speed: f64,
    /// Vertical span between the two barriers.
    pub gap: f64,
    /// Gap-top heights are drawn as whole numbers from `[lo, hi)`.
    pub gap_range: (f64, f64),
    pub first_x: f64,
    pub spawn_x: f64,
}

impl Default for Course {
    fn default() -> Self {
        Self { speed: 5.0, gap: 200.0, gap_range: (50.0, 450.0), first_x: 700.0, spawn_x: 600.0 }
    }
}

/// Fitness adjustments reported to each controller.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rewards {
    pub survival: f64,
    pub pass: f64,
    pub collision: f64,
}

impl Default for Rewards {
    fn default() -> Self {
        Self { survival: 0.1, pass: 5.0, collision: -1.0 }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub world_width: f64,
    pub world_height: f64,
    pub floor_y: f64,
    pub tick_rate: u32,
    pub start: (f64, f64),
    /// Controller output above this means jump.
    pub jump_threshold: f64,
    pub physics: Physics,
    pub course: Course,
    pub rewards: Rewards,
    /// Stop an episode after this many ticks even if agents survive.
    pub max_ticks: Option<u64>,
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            world_width: 500.0,
            world_height: 800.0,
            floor_y: 730.0,
            tick_rate: 30,
            start: (230.0, 350.0),
            jump_threshold: 0.5,
            physics: Physics::default(),
            course: Course::default(),
            rewards: Rewards::default(),
            max_ticks: None,
            seed: 0,
        }
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { field, value })
    }
}

impl SimConfig {
    /// Reject layouts that could produce a degenerate or off-world gap.
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("world_width", self.world_width)?;
        positive("world_height", self.world_height)?;
        positive("floor_y", self.floor_y)?;
        positive("tick_rate", self.tick_rate as f64)?;
        positive("course.speed", self.course.speed)?;
        positive("course.gap", self.course.gap)?;
        positive("physics.terminal", self.physics.terminal)?;
        if self.floor_y > self.world_height {
            return Err(ConfigError::FloorOutsideWorld {
                floor_y: self.floor_y,
                world_height: self.world_height,
            });
        }
        if !(0.0..self.world_width).contains(&self.start.0) {
            return Err(ConfigError::StartOutsideWorld { x: self.start.0, world_width: self.world_width });
        }
        let (lo, hi) = self.course.gap_range;
        if !(lo.is_finite() && hi.is_finite()) || lo < 0.0 || hi.ceil() - lo.ceil() < 1.0 {
            return Err(ConfigError::EmptyGapRange { lo, hi });
        }
        if hi + self.course.gap > self.floor_y {
            return Err(ConfigError::GapDoesNotFit { gap: self.course.gap, hi, floor_y: self.floor_y });
        }
        Ok(())
    }

    #[cfg(feature = "json-config")]
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let cfg: Self = serde_json::from_str(s).map_err(|e| ConfigError::Parse(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }
}

/// Collision shapes and strip widths. Built once, shared read-only by every
/// tick of every episode; no graphics handles live here.
#[derive(Clone, Debug, PartialEq)]
pub struct Sprites {
    pub agent: Silhouette,
    /// Bottom barrier as drawn; `barrier_top` is its vertical flip.
    pub barrier: Silhouette,
    pub barrier_top: Silhouette,
    pub floor_width: f64,
}

impl Sprites {
    pub fn new(agent: Silhouette, barrier: Silhouette, floor_width: f64) -> Result<Self, ConfigError> {
        positive("floor_width", floor_width)?;
        let barrier_top = barrier.flipped_vertical();
        Ok(Self { agent, barrier, barrier_top, floor_width })
    }

    /// 68×48 oval flyer, 104×640 pipe whose 48 px lip overhangs a body
    /// inset by 4 px per side, 672 px floor strip.
    pub fn classic() -> Result<Self, ConfigError> {
        let agent = Silhouette::ellipse(68, 48)?;
        let barrier = Silhouette::from_fn(104, 640, |x, y| y < 48 || (4..100).contains(&x))?;
        Self::new(agent, barrier, 672.0)
    }

    pub fn barrier_width(&self) -> f64 {
        self.barrier.width() as f64
    }

    pub fn barrier_height(&self) -> f64 {
        self.barrier.height() as f64
    }

    pub fn agent_height(&self) -> f64 {
        self.agent.height() as f64
    }
}
