//! Rule-based autopilot for idle/demo mode and headless runs
//!
//! Looks one frame ahead: if an obstacle is about to touch the standing
//! body, slide when the low body clears it, otherwise jump.

use super::state::{FieldEntity, GameState, Motion};
use crate::input::Command;

/// Frames of scroll to project obstacles forward
const LOOKAHEAD_FRAMES: f32 = 1.0;

/// Pick a command for the coming frame, if any
pub fn decide(state: &GameState) -> Option<Command> {
    if state.game_over || state.player.motion() != Motion::Running {
        return None;
    }

    let standing = state.player.standing_hitbox();
    let sliding = state.player.sliding_hitbox();
    let shift = -state.speed * LOOKAHEAD_FRAMES;

    let threat = state
        .obstacles
        .iter()
        .map(|o| o.hitbox().shifted_x(shift))
        .find(|ahead| standing.overlaps(ahead))?;

    if sliding.overlaps(&threat) {
        Some(Command::Jump)
    } else {
        Some(Command::Slide)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Obstacle, ObstacleKind};
    use crate::tuning::Tuning;

    fn quiet_state() -> GameState {
        GameState::with_tuning(5, 800.0, 600.0, Tuning::without_spawns())
    }

    #[test]
    fn test_clear_field_does_nothing() {
        let state = quiet_state();
        assert_eq!(decide(&state), None);
    }

    #[test]
    fn test_slides_under_aerial() {
        let mut state = quiet_state();
        let radius = state.tuning.obstacle_radius;
        // Hitbox left edge one frame from the player's right edge
        let x = state.player.pos.x + state.player.width + radius + state.speed;
        state
            .obstacles
            .push(Obstacle::new(ObstacleKind::Aerial, x, state.ground_y, radius));
        assert_eq!(decide(&state), Some(Command::Slide));
    }

    #[test]
    fn test_jumps_over_low_hazard() {
        let mut state = quiet_state();
        let radius = state.tuning.obstacle_radius;
        let mut obstacle = Obstacle::new(ObstacleKind::Aerial, 180.0, state.ground_y, radius);
        // Sitting on the ground, nothing to slide under
        obstacle.pos.y = state.ground_y - radius * 2.0;
        state.obstacles.push(obstacle);
        assert_eq!(decide(&state), Some(Command::Jump));
    }

    #[test]
    fn test_ignores_cloud_overhead() {
        let mut state = quiet_state();
        let radius = state.tuning.obstacle_radius;
        state.obstacles.push(Obstacle::new(
            ObstacleKind::Ground,
            state.player.pos.x,
            state.ground_y,
            radius,
        ));
        assert_eq!(decide(&state), None);
    }

    #[test]
    fn test_waits_while_airborne() {
        let mut state = quiet_state();
        let tuning = state.tuning.clone();
        state.player.jump(&tuning);
        let radius = tuning.obstacle_radius;
        let mut obstacle = Obstacle::new(ObstacleKind::Aerial, 180.0, state.ground_y, radius);
        obstacle.pos.y = state.ground_y - radius * 2.0;
        state.obstacles.push(obstacle);
        assert_eq!(decide(&state), None);
    }
}
