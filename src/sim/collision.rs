//! Collision, bounds and scoring predicates
//!
//! All checks are pure functions over the state types; the tick loop decides
//! what to do with a positive result. Interval tests are half-open and strict
//! so a bird edge exactly touching an obstacle edge does not collide.

use super::state::{Bird, Obstacle};
use crate::consts::*;

/// Strict horizontal overlap between the bird's fixed span and an obstacle
pub fn spans_overlap(bird: &Bird, obstacle: &Obstacle) -> bool {
    bird.right() > obstacle.left() && bird.left() < obstacle.right()
}

/// True when the obstacle overlaps the bird horizontally and the bird's
/// vertical span is not fully inside the gap
pub fn hits_obstacle(bird: &Bird, obstacle: &Obstacle) -> bool {
    spans_overlap(bird, obstacle)
        && (bird.top() < obstacle.gap_start || bird.bottom() > obstacle.gap_end())
}

/// Boundary check, run once per tick after integration.
///
/// `ground_offset` raises the lower bound only; the upper bound is the bare
/// field top. The asymmetry is inherited game feel, not a bug.
pub fn out_of_bounds(bird: &Bird, ground_offset: f32) -> bool {
    bird.y < 0.0 || bird.y > FIELD_HEIGHT - BIRD_SIZE - ground_offset
}

/// True once an unscored obstacle is fully behind the bird
pub fn cleared(bird: &Bird, obstacle: &Obstacle) -> bool {
    !obstacle.scored && obstacle.right() < bird.left()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bird_at(y: f32) -> Bird {
        Bird { y, vy: 0.0 }
    }

    fn obstacle_at(x: f32, gap_start: f32) -> Obstacle {
        Obstacle {
            id: 1,
            x,
            gap_start,
            scored: false,
        }
    }

    #[test]
    fn test_overlap_is_strict_at_edges() {
        let bird = bird_at(250.0);

        // Obstacle left edge exactly at the bird's right edge: no overlap yet
        let touching_right = obstacle_at(BIRD_X + BIRD_SIZE, 200.0);
        assert!(!spans_overlap(&bird, &touching_right));

        // One scroll step further left and the spans overlap
        let overlapping = obstacle_at(BIRD_X + BIRD_SIZE - SCROLL_SPEED, 200.0);
        assert!(spans_overlap(&bird, &overlapping));

        // Obstacle right edge exactly at the bird's left edge: already clear
        let touching_left = obstacle_at(BIRD_X - OBSTACLE_WIDTH, 200.0);
        assert!(!spans_overlap(&bird, &touching_left));
    }

    #[test]
    fn test_no_hit_inside_gap() {
        // Gap [200, 380], bird spans [250, 290]
        let bird = bird_at(250.0);
        let obstacle = obstacle_at(BIRD_X, 200.0);
        assert!(spans_overlap(&bird, &obstacle));
        assert!(!hits_obstacle(&bird, &obstacle));
    }

    #[test]
    fn test_hit_above_and_below_gap() {
        let obstacle = obstacle_at(BIRD_X, 200.0);

        // Top edge pokes above the gap
        assert!(hits_obstacle(&bird_at(199.0), &obstacle));
        // Bottom edge pokes below the gap (380 - BIRD_SIZE = 340)
        assert!(hits_obstacle(&bird_at(341.0), &obstacle));
        // Flush against either gap edge is safe
        assert!(!hits_obstacle(&bird_at(200.0), &obstacle));
        assert!(!hits_obstacle(&bird_at(340.0), &obstacle));
    }

    #[test]
    fn test_no_hit_without_horizontal_overlap() {
        // Bird far outside any gap vertically, obstacle still far ahead
        let bird = bird_at(0.0);
        let obstacle = obstacle_at(FIELD_WIDTH, 200.0);
        assert!(!hits_obstacle(&bird, &obstacle));
    }

    #[test]
    fn test_out_of_bounds_asymmetry() {
        let floor = FIELD_HEIGHT - BIRD_SIZE - GROUND_OFFSET;

        assert!(out_of_bounds(&bird_at(-0.1), GROUND_OFFSET));
        assert!(!out_of_bounds(&bird_at(0.0), GROUND_OFFSET));
        assert!(!out_of_bounds(&bird_at(floor), GROUND_OFFSET));
        assert!(out_of_bounds(&bird_at(floor + 0.1), GROUND_OFFSET));

        // Without the ground band the same position is legal
        assert!(!out_of_bounds(&bird_at(floor + 0.1), 0.0));
    }

    #[test]
    fn test_cleared_requires_full_pass() {
        let bird = bird_at(250.0);

        // Right edge exactly at the bird's left edge: not yet cleared
        let flush = obstacle_at(BIRD_X - OBSTACLE_WIDTH, 200.0);
        assert!(!cleared(&bird, &flush));

        let past = obstacle_at(BIRD_X - OBSTACLE_WIDTH - 1.0, 200.0);
        assert!(cleared(&bird, &past));

        // Already-scored obstacles never clear twice
        let mut scored = past;
        scored.scored = true;
        assert!(!cleared(&bird, &scored));
    }
}
