//! Pixel-level contact between a flyer and a pipe pair.
//!
//! Offsets are measured from the agent sprite's origin to each barrier
//! sprite's origin, on whole pixels: x positions are rounded, and so is the
//! agent's fractional y. Only solid pixels count, so a flyer may graze the
//! transparent corners of its own box without dying.

use crate::config::Sprites;
use crate::systems::agent::Agent;
use crate::systems::obstacle::Obstacle;

/// Offsets of the (top, bottom) barrier origins relative to the agent origin.
pub fn offsets(agent: &Agent, obstacle: &Obstacle) -> ((i64, i64), (i64, i64)) {
    let dx = (obstacle.x - agent.x()).round() as i64;
    let ay = agent.y.round();
    let top = (dx, (obstacle.top_origin() - ay).round() as i64);
    let bottom = (dx, (obstacle.bottom_origin() - ay).round() as i64);
    (top, bottom)
}

/// True if either barrier's silhouette meets the agent's.
pub fn hits(agent: &Agent, obstacle: &Obstacle, sprites: &Sprites) -> bool {
    let ((tx, ty), (bx, by)) = offsets(agent, obstacle);
    sprites.agent.overlaps(&sprites.barrier_top, tx, ty)
        || sprites.agent.overlaps(&sprites.barrier, bx, by)
}
