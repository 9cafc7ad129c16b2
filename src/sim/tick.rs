//! Simulation orchestration: flap input, fixed-rate stepping, reset
//!
//! One `step` per clock tick while Running. A tick either completes the whole
//! update sequence (physics, bounds, obstacles, particles, collision,
//! scoring) or ends the run partway through; the host never observes a
//! half-applied tick. Outside Running, `step` is a guaranteed no-op, so late
//! ticks from the host driver cannot mutate a dead or reset game.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::collision;
use super::events::GameEvent;
use super::particles;
use super::state::{GamePhase, GameState, Obstacle};
use crate::consts::*;
use crate::persistence;

/// The simulation core. Owns all game state; collaborators only ever see the
/// events returned from [`jump`](Simulation::jump), [`step`](Simulation::step)
/// and [`reset`](Simulation::reset).
pub struct Simulation {
    pub state: GameState,
    rng: Pcg32,
}

impl Simulation {
    /// Create a simulation seeded for this run, picking up the persisted
    /// best score (0 when storage is unavailable).
    pub fn new(seed: u64) -> Self {
        Self::with_best_score(seed, persistence::load_best_score())
    }

    /// Create a simulation with an explicit best score (used by tests and
    /// hosts that manage persistence themselves)
    pub fn with_best_score(seed: u64, best_score: u32) -> Self {
        Self {
            state: GameState::new(best_score),
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// The single input command.
    ///
    /// Idle: starts the run, arms the spawn countdown and flaps — the first
    /// jump both starts and acts. Running: flaps. Over: silent no-op.
    /// Velocity is overwritten, never summed, so repeated calls are safe.
    pub fn jump(&mut self) -> Vec<GameEvent> {
        let mut events = Vec::new();
        match self.state.phase {
            GamePhase::Over => return events,
            GamePhase::Idle => {
                self.state.phase = GamePhase::Running;
                self.state.spawn_countdown = SPAWN_INTERVAL_TICKS;
            }
            GamePhase::Running => {}
        }
        self.state.bird.apply_impulse();
        events.push(GameEvent::Jump);
        self.feedback_burst(JUMP_BURST_COLOR, JUMP_BURST_COUNT, &mut events);
        events
    }

    /// Advance the simulation by one fixed tick
    pub fn step(&mut self) -> Vec<GameEvent> {
        let mut events = Vec::new();
        if self.state.phase != GamePhase::Running {
            return events;
        }

        self.state.time_ticks += 1;
        self.state.bird.integrate();

        // Boundary death ends the tick before anything else advances
        if collision::out_of_bounds(&self.state.bird, GROUND_OFFSET) {
            self.end_game(&mut events);
            return events;
        }

        self.advance_obstacles(&mut events);
        particles::advance(&mut self.state);

        if self.hit_any() {
            self.end_game(&mut events);
            return events;
        }
        self.score_cleared(&mut events);

        events.push(GameEvent::Tick {
            bird_y: self.state.bird.y,
            bird_vy: self.state.bird.vy,
        });
        events
    }

    /// Clear the field and return to Idle; the best score survives
    pub fn reset(&mut self) -> Vec<GameEvent> {
        let events = self
            .state
            .obstacles
            .iter()
            .map(|o| GameEvent::ObstacleRemoved { id: o.id })
            .collect();
        self.state = GameState::new(self.state.best_score);
        events
    }

    /// Scroll the stream, retire off-field obstacles, spawn on the countdown
    fn advance_obstacles(&mut self, events: &mut Vec<GameEvent>) {
        for obstacle in &mut self.state.obstacles {
            obstacle.x -= SCROLL_SPEED;
        }

        // Partition retired obstacles first, keeping survivor order stable
        let retired: Vec<u32> = self
            .state
            .obstacles
            .iter()
            .filter(|o| o.off_field())
            .map(|o| o.id)
            .collect();
        if !retired.is_empty() {
            self.state.obstacles.retain(|o| !o.off_field());
            for id in retired {
                events.push(GameEvent::ObstacleRemoved { id });
            }
        }

        // Spawn countdown lives inside the tick; there is no second timer
        // to cancel on phase exits
        self.state.spawn_countdown -= 1;
        if self.state.spawn_countdown == 0 {
            self.state.spawn_countdown = SPAWN_INTERVAL_TICKS;
            let obstacle = self.spawn_obstacle();
            events.push(GameEvent::ObstacleSpawned(obstacle));
        }
    }

    /// Append a new obstacle at the right field edge with a uniformly
    /// placed gap kept away from the extremes
    fn spawn_obstacle(&mut self) -> Obstacle {
        let gap_start = self
            .rng
            .random_range(GAP_MARGIN..FIELD_HEIGHT - GAP_HEIGHT - GAP_MARGIN);
        let obstacle = Obstacle {
            id: self.state.next_entity_id(),
            x: FIELD_WIDTH,
            gap_start,
            scored: false,
        };
        self.state.obstacles.push(obstacle);
        obstacle
    }

    fn hit_any(&self) -> bool {
        self.state
            .obstacles
            .iter()
            .any(|o| collision::hits_obstacle(&self.state.bird, o))
    }

    /// Credit every obstacle the bird has fully passed, exactly once each
    fn score_cleared(&mut self, events: &mut Vec<GameEvent>) {
        let bird = self.state.bird;
        let mut newly_cleared = 0;
        for obstacle in &mut self.state.obstacles {
            if collision::cleared(&bird, obstacle) {
                obstacle.scored = true;
                newly_cleared += 1;
            }
        }
        for _ in 0..newly_cleared {
            self.state.score += 1;
            events.push(GameEvent::Score(self.state.score));
            self.feedback_burst(SCORE_BURST_COLOR, SCORE_BURST_COUNT, events);
        }
    }

    /// Terminal transition shared by boundary and obstacle deaths
    fn end_game(&mut self, events: &mut Vec<GameEvent>) {
        self.state.phase = GamePhase::Over;
        let score = self.state.score;
        let new_best = score > self.state.best_score;
        if new_best {
            self.state.best_score = score;
            persistence::save_best_score(score);
        }
        self.feedback_burst(CRASH_BURST_COLOR, CRASH_BURST_COUNT, events);
        events.push(GameEvent::GameOver {
            score,
            best: self.state.best_score,
            new_best,
        });
    }

    /// Burst at the bird's center plus the matching event
    fn feedback_burst(&mut self, color: u32, count: u32, events: &mut Vec<GameEvent>) {
        let pos = self.state.bird.center();
        particles::burst(&mut self.state, &mut self.rng, pos, color, count);
        events.push(GameEvent::ParticleBurst { pos, color, count });
    }
}
