//! Flapbox - a flappy-style side-scroller for the browser
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, obstacles, scoring, particles)
//! - `renderer`: DOM element rendering (wasm only)
//! - `audio`: Web Audio sound effects (wasm only)
//! - `persistence`: Best score save/load
//! - `settings`: Player preferences

pub mod persistence;
pub mod settings;
pub mod sim;

#[cfg(target_arch = "wasm32")]
pub mod audio;
#[cfg(target_arch = "wasm32")]
pub mod renderer;

pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation tick rate
    pub const TICK_RATE: u32 = 60;
    /// Fixed simulation timestep in seconds
    pub const SIM_DT: f32 = 1.0 / TICK_RATE as f32;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Play field dimensions (logical pixels)
    pub const FIELD_WIDTH: f32 = 400.0;
    pub const FIELD_HEIGHT: f32 = 600.0;
    /// Height of the ground band; only the lower bounds check uses it
    pub const GROUND_OFFSET: f32 = 24.0;

    /// Bird bounding box edge (the bird is a square)
    pub const BIRD_SIZE: f32 = 40.0;
    /// Fixed horizontal position of the bird's left edge
    pub const BIRD_X: f32 = 100.0;
    /// Starting vertical position (top edge)
    pub const BIRD_START_Y: f32 = 250.0;
    /// Gravity, added to vertical velocity every tick (px/tick²)
    pub const GRAVITY: f32 = 0.5;
    /// Flap impulse; velocity snaps to this on jump (px/tick, negative = up)
    pub const JUMP_IMPULSE: f32 = -10.0;

    /// Obstacle column width
    pub const OBSTACLE_WIDTH: f32 = 80.0;
    /// Vertical extent of the passable gap
    pub const GAP_HEIGHT: f32 = 180.0;
    /// Minimum distance between the gap and the field's top/bottom edges
    pub const GAP_MARGIN: f32 = 100.0;
    /// Horizontal scroll per tick
    pub const SCROLL_SPEED: f32 = 3.0;
    /// Ticks between obstacle spawns (2 seconds)
    pub const SPAWN_INTERVAL_TICKS: u32 = 2 * TICK_RATE;

    /// Particle cap; oldest particles are evicted past this
    pub const MAX_PARTICLES: usize = 256;
    /// Downward pull on particle velocity per tick
    pub const PARTICLE_GRAVITY: f32 = 0.4;
    /// Life drained per tick (spawn life is 1.0)
    pub const PARTICLE_LIFE_DECAY: f32 = 0.02;

    /// Burst tuning per feedback kind (packed 0xRRGGBB + particle count)
    pub const JUMP_BURST_COLOR: u32 = 0x60a5fa;
    pub const JUMP_BURST_COUNT: u32 = 6;
    pub const SCORE_BURST_COLOR: u32 = 0x22c55e;
    pub const SCORE_BURST_COUNT: u32 = 10;
    pub const CRASH_BURST_COLOR: u32 = 0xef4444;
    pub const CRASH_BURST_COUNT: u32 = 15;
}
