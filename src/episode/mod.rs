// src/episode/mod.rs

// Orchestration: the world state, the per-tick step, and the loop that runs
// a generation's flock until it is gone.

pub mod runner;
pub mod step;
pub mod world;

pub use runner::*;
pub use step::{advance, TickReport};
pub use world::*;
