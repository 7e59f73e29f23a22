//! Per-frame obstacle and coin spawning
//!
//! Each frame rolls independently for an obstacle and a coin. There is no
//! cooldown, so back-to-back spawns are possible.

use rand::Rng;

use super::state::{COIN_BAND, COIN_MIN_ALTITUDE, Coin, GameState, Obstacle, ObstacleKind};

/// What the spawner added this frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpawnReport {
    pub obstacle: bool,
    pub coin: bool,
}

/// Roll the spawn chances and append new entities at the right edge
pub fn spawn_entities(state: &mut GameState) -> SpawnReport {
    let mut report = SpawnReport::default();
    if state.game_over {
        return report;
    }

    let x = state.spawn_x();

    if state.rng.random::<f32>() < state.tuning.obstacle_chance {
        let kind = if state.rng.random::<f32>() < 0.5 {
            ObstacleKind::Aerial
        } else {
            ObstacleKind::Ground
        };
        state.obstacles.push(Obstacle::new(
            kind,
            x,
            state.ground_y,
            state.tuning.obstacle_radius,
        ));
        log::trace!("Spawned {:?} obstacle at frame {}", kind, state.frame);
        report.obstacle = true;
    }

    if state.rng.random::<f32>() < state.tuning.coin_chance {
        let y = state.ground_y - COIN_MIN_ALTITUDE - state.rng.random::<f32>() * COIN_BAND;
        state.coins.push(Coin::new(x, y, state.tuning.coin_size));
        log::trace!("Spawned coin at frame {}", state.frame);
        report.coin = true;
    }

    report
}
