use crate::config::Sprites;
use crate::systems::agent::Agent;
use crate::systems::collision;

/// A pipe pair. The gap runs from `gap_top` down to `gap_bottom`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Obstacle {
    pub x: f64,
    gap_top: f64,
    gap_bottom: f64,
    /// Screen y of the top barrier sprite's origin (its bottom edge is `gap_top`).
    top: f64,
    pub passed: bool,
}

impl Obstacle {
    /// `gap_top` is the drawn height; the top sprite hangs above it.
    pub fn new(x: f64, gap_top: f64, gap: f64, barrier_height: f64) -> Self {
        Self { x, gap_top, gap_bottom: gap_top + gap, top: gap_top - barrier_height, passed: false }
    }

    pub fn gap_top(&self) -> f64 {
        self.gap_top
    }

    pub fn gap_bottom(&self) -> f64 {
        self.gap_bottom
    }

    /// Origin of the top barrier sprite.
    pub fn top_origin(&self) -> f64 {
        self.top
    }

    /// Origin of the bottom barrier sprite.
    pub fn bottom_origin(&self) -> f64 {
        self.gap_bottom
    }

    pub fn advance(&mut self, speed: f64) {
        self.x -= speed;
    }

    pub fn is_offscreen(&self, width: f64) -> bool {
        self.x + width < 0.0
    }

    pub fn collides_with(&self, agent: &Agent, sprites: &Sprites) -> bool {
        collision::hits(agent, self, sprites)
    }
}
