//! Decorative particle pool
//!
//! Particles are pure visual feedback: nothing here may touch phase, score
//! or collision state. Bursts draw from the simulation's seeded RNG so runs
//! stay reproducible.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::state::{GameState, Particle};
use crate::consts::*;

/// Spawn `count` particles at `pos`. Horizontal spread is symmetric, the
/// vertical spread is biased slightly upward. Oldest particles are evicted
/// once the pool cap is reached.
pub fn burst(state: &mut GameState, rng: &mut Pcg32, pos: Vec2, color: u32, count: u32) {
    for _ in 0..count {
        if state.particles.len() >= MAX_PARTICLES {
            state.particles.remove(0);
        }
        let vel = Vec2::new(
            rng.random_range(-5.0..5.0),
            rng.random_range(-5.0..5.0) - 2.0,
        );
        let id = state.next_entity_id();
        state.particles.push(Particle {
            id,
            pos,
            vel,
            color,
            life: 1.0,
            size: rng.random_range(2.0..6.0),
        });
    }
}

/// Advance every particle one tick and drop the expired ones
pub fn advance(state: &mut GameState) {
    for p in &mut state.particles {
        p.pos += p.vel;
        p.vel.y += PARTICLE_GRAVITY;
        p.life -= PARTICLE_LIFE_DECAY;
    }
    state.particles.retain(|p| p.life > 0.0);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn state_and_rng() -> (GameState, Pcg32) {
        (GameState::new(0), Pcg32::seed_from_u64(7))
    }

    #[test]
    fn test_burst_spawns_count_particles() {
        let (mut state, mut rng) = state_and_rng();
        burst(&mut state, &mut rng, Vec2::new(100.0, 270.0), 0x60a5fa, 6);

        assert_eq!(state.particles.len(), 6);
        for p in &state.particles {
            assert_eq!(p.pos, Vec2::new(100.0, 270.0));
            assert_eq!(p.color, 0x60a5fa);
            assert_eq!(p.life, 1.0);
            assert!((-5.0..5.0).contains(&p.vel.x));
            assert!((-7.0..3.0).contains(&p.vel.y));
            assert!((2.0..6.0).contains(&p.size));
        }
    }

    #[test]
    fn test_burst_ids_are_unique() {
        let (mut state, mut rng) = state_and_rng();
        burst(&mut state, &mut rng, Vec2::ZERO, 0, 15);

        let mut ids: Vec<u32> = state.particles.iter().map(|p| p.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 15);
    }

    #[test]
    fn test_cap_evicts_oldest_first() {
        let (mut state, mut rng) = state_and_rng();
        burst(&mut state, &mut rng, Vec2::ZERO, 0, MAX_PARTICLES as u32);
        let first_id = state.particles[0].id;

        burst(&mut state, &mut rng, Vec2::ZERO, 1, 1);
        assert_eq!(state.particles.len(), MAX_PARTICLES);
        assert!(state.particles.iter().all(|p| p.id != first_id));
    }

    #[test]
    fn test_advance_integrates_and_expires() {
        let (mut state, mut rng) = state_and_rng();
        burst(&mut state, &mut rng, Vec2::new(50.0, 50.0), 0, 1);
        let before = state.particles[0];

        advance(&mut state);
        let after = state.particles[0];
        assert_eq!(after.pos, before.pos + before.vel);
        assert_eq!(after.vel.y, before.vel.y + PARTICLE_GRAVITY);
        assert!((after.life - (1.0 - PARTICLE_LIFE_DECAY)).abs() < 1e-6);

        // Life 1.0 at a 0.02 drain lasts ~50 ticks
        for _ in 0..48 {
            advance(&mut state);
        }
        assert_eq!(state.particles.len(), 1);
        for _ in 0..3 {
            advance(&mut state);
        }
        assert!(state.particles.is_empty());
    }
}
