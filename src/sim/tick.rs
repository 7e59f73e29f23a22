//! Per-frame simulation tick
//!
//! Advances one display frame: commands, movement, pruning, spawning,
//! collisions, then the distance/speed ramp. Drawing happens elsewhere.

use super::autopilot;
use super::collision::resolve_collisions;
use super::spawn::spawn_entities;
use super::state::{FieldEntity, GameState};
use crate::input::Command;

/// Input commands queued since the last frame
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub jump: bool,
    pub slide: bool,
    /// Idle/demo mode - the autopilot plays
    pub idle_mode: bool,
}

impl TickInput {
    pub fn push(&mut self, command: Command) {
        match command {
            Command::Jump => self.jump = true,
            Command::Slide => self.slide = true,
        }
    }

    /// Clear one-shot commands after a frame consumed them
    pub fn clear_commands(&mut self) {
        self.jump = false;
        self.slide = false;
    }
}

/// Whether the driver should schedule another frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameStatus {
    Continue,
    Stopped,
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &TickInput) -> FrameStatus {
    if state.game_over {
        return FrameStatus::Stopped;
    }

    state.frame += 1;

    let mut input = input.clone();
    if input.idle_mode {
        if let Some(command) = autopilot::decide(state) {
            input.push(command);
        }
    }

    // Jump wins when both arrive in the same frame
    if input.jump && state.player.jump(&state.tuning) {
        log::debug!("Jump at frame {}", state.frame);
    }
    if input.slide && state.player.slide(&state.tuning) {
        log::debug!("Slide at frame {}", state.frame);
    }

    state.player.update(&state.tuning);

    let speed = state.speed;
    for obstacle in &mut state.obstacles {
        obstacle.advance(speed);
    }
    for coin in &mut state.coins {
        coin.advance(speed);
    }

    state.obstacles.retain(|o| !o.is_off_field());
    state.coins.retain(|c| !c.is_off_field());

    spawn_entities(state);

    let report = resolve_collisions(state);
    if report.coins_collected > 0 {
        log::debug!(
            "Collected {} coin(s), total {}",
            report.coins_collected,
            state.coin_count
        );
    }

    state.distance += state.speed * state.tuning.distance_factor;
    state.speed += state.tuning.speed_ramp;

    if state.game_over {
        log::info!(
            "Game over at frame {}: distance {:.0}, coins {}",
            state.frame,
            state.distance,
            state.coin_count
        );
        FrameStatus::Stopped
    } else {
        FrameStatus::Continue
    }
}
