//! Game state and core simulation types

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the first flap
    Idle,
    /// Active gameplay
    Running,
    /// Run ended, waiting for reset
    Over,
}

/// The player-controlled bird
///
/// Horizontal position is fixed at `BIRD_X`; the world scrolls instead.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bird {
    /// Vertical position of the top edge
    pub y: f32,
    /// Vertical velocity in px/tick (positive = falling)
    pub vy: f32,
}

impl Default for Bird {
    fn default() -> Self {
        Self {
            y: BIRD_START_Y,
            vy: 0.0,
        }
    }
}

impl Bird {
    /// Flap: velocity snaps to the impulse constant. Not additive, so
    /// mashing the input cannot stack upward speed.
    pub fn apply_impulse(&mut self) {
        self.vy = JUMP_IMPULSE;
    }

    /// Advance one tick under gravity. There is no terminal-velocity clamp;
    /// long falls keep accelerating (accepted behavior, part of the feel).
    pub fn integrate(&mut self) {
        self.vy += GRAVITY;
        self.y += self.vy;
    }

    pub fn left(&self) -> f32 {
        BIRD_X
    }

    pub fn right(&self) -> f32 {
        BIRD_X + BIRD_SIZE
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + BIRD_SIZE
    }

    /// Center point, where feedback bursts spawn
    pub fn center(&self) -> Vec2 {
        Vec2::new(BIRD_X, self.y + BIRD_SIZE / 2.0)
    }
}

/// A scrolling obstacle: a full-height column with a passable gap
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    /// Left edge; decreases by the scroll speed each tick
    pub x: f32,
    /// Top of the passable gap, fixed at spawn
    pub gap_start: f32,
    /// Set once the bird has fully cleared this obstacle
    pub scored: bool,
}

impl Obstacle {
    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + OBSTACLE_WIDTH
    }

    /// Bottom of the passable gap
    pub fn gap_end(&self) -> f32 {
        self.gap_start + GAP_HEIGHT
    }

    /// True once the whole column is past the left edge of the field
    pub fn off_field(&self) -> bool {
        self.x < -OBSTACLE_WIDTH
    }
}

/// A particle for visual effects
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    /// Packed 0xRRGGBB for the renderer
    pub color: u32,
    /// 1.0 at spawn, decays to 0
    pub life: f32,
    pub size: f32,
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Current phase
    pub phase: GamePhase,
    /// Player bird
    pub bird: Bird,
    /// Live obstacles in spawn order (stable order keeps rendering deterministic)
    pub obstacles: Vec<Obstacle>,
    /// Visual particles (not gameplay-affecting)
    pub particles: Vec<Particle>,
    /// Score for the current run
    pub score: u32,
    /// Highest score across runs, persisted by the host
    pub best_score: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Ticks until the next obstacle spawn while running
    pub spawn_countdown: u32,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Fresh pre-game state carrying over the persisted best score
    pub fn new(best_score: u32) -> Self {
        Self {
            phase: GamePhase::Idle,
            bird: Bird::default(),
            obstacles: Vec::new(),
            particles: Vec::new(),
            score: 0,
            best_score,
            time_ticks: 0,
            spawn_countdown: SPAWN_INTERVAL_TICKS,
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}
