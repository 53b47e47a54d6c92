// src/systems/sdk.rs

//! # Systems SDK
//!
//! The seams between the simulation core and whatever drives it.
//!
//! The core never knows what a controller *is*. Each tick it hands every live
//! agent's controller a [`Sensors`] reading and gets one scalar back; above
//! the configured threshold (0.5 by default) the agent jumps. Separately it
//! reports fitness adjustments through [`FitnessSink`]:
//!
//! - [`Credit::Survival`]: small positive amount every tick an agent lives.
//! - [`Credit::Pass`]: larger positive amount to every survivor when the
//!   flock clears a pipe.
//! - [`Credit::Collision`]: negative amount, once, to an agent that hits a
//!   pipe.
//!
//! A type implementing both traits is a [`Pilot`]; episodes borrow a slice of
//! pilots and only mutate them through these two calls. Once an agent is
//! eliminated its pilot is never called again during that episode.
//!
//! ## Writing a controller
//! - Any `FnMut(&Sensors) -> f64` is already a [`Controller`].
//! - Wrap it in [`Contender`] to get a pilot with an `f64` fitness field.
//! - Non-finite outputs are treated as "no jump", never as errors.
//!
//! ## Determinism
//! Given the same seed, the same controllers and the same config, an
//! episode replays exactly. Controllers that keep internal state are
//! responsible for their own reproducibility.

/// What a controller sees each tick.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Sensors {
    pub y: f64,
    /// |y − gap top| for the pipe ahead.
    pub to_gap_top: f64,
    /// |y − gap bottom| for the pipe ahead.
    pub to_gap_bottom: f64,
}

impl Sensors {
    pub fn as_array(&self) -> [f64; 3] {
        [self.y, self.to_gap_top, self.to_gap_bottom]
    }
}

/// Maps a sensor reading to a jump score.
pub trait Controller {
    fn activate(&mut self, input: &Sensors) -> f64;
}

impl<F: FnMut(&Sensors) -> f64> Controller for F {
    fn activate(&mut self, input: &Sensors) -> f64 {
        self(input)
    }
}

/// Why fitness moved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Credit {
    Survival,
    Pass,
    Collision,
}

/// Receives fitness adjustments for one controller.
pub trait FitnessSink {
    fn credit(&mut self, kind: Credit, delta: f64);
}

/// A controller that also accumulates its own fitness.
pub trait Pilot: Controller + FitnessSink {}
impl<T: Controller + FitnessSink> Pilot for T {}

/// Jump decision with untrusted output: NaN and infinities never jump.
#[inline]
pub fn wants_jump(output: f64, threshold: f64) -> bool {
    output.is_finite() && output > threshold
}

/// A controller paired with a plain fitness accumulator.
#[derive(Clone, Debug, Default)]
pub struct Contender<C> {
    pub brain: C,
    pub fitness: f64,
}

impl<C> Contender<C> {
    pub fn new(brain: C) -> Self {
        Self { brain, fitness: 0.0 }
    }
}

impl<C: Controller> Controller for Contender<C> {
    fn activate(&mut self, input: &Sensors) -> f64 {
        self.brain.activate(input)
    }
}

impl<C> FitnessSink for Contender<C> {
    fn credit(&mut self, _kind: Credit, delta: f64) {
        self.fitness += delta;
    }
}
