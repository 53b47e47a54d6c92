use crate::config::Physics;
use crate::mechanics::kinematics;

/// One flyer. `x` is fixed for life; the world scrolls past it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Agent {
    x: f64,
    pub y: f64,
    /// Ticks since the last jump (or since spawn).
    ticks: u32,
    velocity: f64,
    /// y at the last jump, the reference for tilt.
    reference: f64,
    tilt: f64,
}

impl Agent {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y, ticks: 0, velocity: 0.0, reference: y, tilt: 0.0 }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn tilt(&self) -> f64 {
        self.tilt
    }

    pub fn ticks_since_jump(&self) -> u32 {
        self.ticks
    }

    pub fn jump(&mut self, phys: &Physics) {
        self.ticks = 0;
        self.velocity = phys.jump_velocity;
        self.reference = self.y;
    }

    /// Integrate one tick and return the displacement applied.
    pub fn step_physics(&mut self, phys: &Physics) -> f64 {
        self.ticks += 1;
        let raw = kinematics::displacement(self.velocity, phys.gravity, self.ticks as f64);
        let d = kinematics::clamp_displacement(raw, phys.terminal, phys.rise_boost);
        self.y += d;
        self.tilt = kinematics::tilt_after(self.tilt, self.y, self.reference, d, &phys.tilt);
        d
    }
}
