//! Side-effect events emitted by the simulation
//!
//! The core never consumes these. The host drains them from `jump`/`step`/
//! `reset` and fans them out to the audio, renderer and HUD collaborators.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::Obstacle;

/// One event per observable side effect of a simulation call
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// The bird flapped; any phase change it caused is already applied
    Jump,
    /// An obstacle was cleared; carries the new total
    Score(u32),
    /// Terminal: boundary violation or obstacle collision
    GameOver {
        score: u32,
        best: u32,
        /// True when this run beat the persisted best score
        new_best: bool,
    },
    /// A new obstacle entered at the right field edge
    ObstacleSpawned(Obstacle),
    /// An obstacle left the field (or was cleared away by a reset)
    ObstacleRemoved { id: u32 },
    /// A one-shot decorative burst was spawned
    ParticleBurst { pos: Vec2, color: u32, count: u32 },
    /// End-of-tick snapshot for presentation (position + tilt source)
    Tick { bird_y: f32, bird_vy: f32 },
}
