//! Data-driven game balance
//!
//! Every constant the simulation reads lives here so a page can override
//! them with a JSON block without rebuilding.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors from parsing or validating a tuning override
#[derive(Debug, Error)]
pub enum TuningError {
    /// The override was not valid JSON for [`Tuning`]
    #[error("malformed tuning JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// A spawn chance outside [0, 1]
    #[error("{name} must be within [0, 1], got {value}")]
    ChanceOutOfRange { name: &'static str, value: f32 },

    /// A size, speed or duration that must be strictly positive
    #[error("{name} must be positive, got {value}")]
    NotPositive { name: &'static str, value: f32 },

    /// Slide height must fit inside the standing body
    #[error("slide height {slide} exceeds player height {height}")]
    SlideTallerThanPlayer { slide: f32, height: f32 },
}

/// Game balance knobs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Player physics ===
    pub gravity: f32,
    pub jump_impulse: f32,
    pub slide_frames: u32,

    // === Player geometry ===
    pub player_x: f32,
    pub player_width: f32,
    pub player_height: f32,
    pub slide_height: f32,

    // === Field ===
    pub ground_offset: f32,
    pub spawn_margin: f32,

    // === Difficulty ramp ===
    pub start_speed: f32,
    pub speed_ramp: f32,
    pub distance_factor: f32,
    pub start_distance: f32,

    // === Spawning ===
    pub obstacle_chance: f32,
    pub coin_chance: f32,
    pub obstacle_radius: f32,
    pub coin_size: f32,

    // === Input ===
    pub swipe_threshold: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            jump_impulse: JUMP_IMPULSE,
            slide_frames: SLIDE_FRAMES,

            player_x: PLAYER_X,
            player_width: PLAYER_WIDTH,
            player_height: PLAYER_HEIGHT,
            slide_height: PLAYER_SLIDE_HEIGHT,

            ground_offset: GROUND_OFFSET,
            spawn_margin: SPAWN_MARGIN,

            start_speed: START_SPEED,
            speed_ramp: SPEED_RAMP,
            distance_factor: DISTANCE_FACTOR,
            start_distance: START_DISTANCE,

            obstacle_chance: OBSTACLE_SPAWN_CHANCE,
            coin_chance: COIN_SPAWN_CHANCE,
            obstacle_radius: OBSTACLE_RADIUS,
            coin_size: COIN_SIZE,

            swipe_threshold: SWIPE_THRESHOLD,
        }
    }
}

impl Tuning {
    /// Parse a JSON override; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Tuning with spawning switched off, for scripted sessions
    pub fn without_spawns() -> Self {
        Self {
            obstacle_chance: 0.0,
            coin_chance: 0.0,
            ..Self::default()
        }
    }

    /// Check ranges the simulation relies on
    pub fn validate(&self) -> Result<(), TuningError> {
        for (name, value) in [
            ("obstacle_chance", self.obstacle_chance),
            ("coin_chance", self.coin_chance),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(TuningError::ChanceOutOfRange { name, value });
            }
        }

        for (name, value) in [
            ("gravity", self.gravity),
            ("player_width", self.player_width),
            ("player_height", self.player_height),
            ("slide_height", self.slide_height),
            ("start_speed", self.start_speed),
            ("obstacle_radius", self.obstacle_radius),
            ("coin_size", self.coin_size),
            ("swipe_threshold", self.swipe_threshold),
            ("slide_frames", self.slide_frames as f32),
        ] {
            // `!(v > 0)` also rejects NaN
            if !(value > 0.0) {
                return Err(TuningError::NotPositive { name, value });
            }
        }

        if self.slide_height > self.player_height {
            return Err(TuningError::SlideTallerThanPlayer {
                slide: self.slide_height,
                height: self.player_height,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(Tuning::default().validate().is_ok());
        assert!(Tuning::without_spawns().validate().is_ok());
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "start_speed": 6.0, "coin_chance": 0.1 }"#).unwrap();
        assert_eq!(tuning.start_speed, 6.0);
        assert_eq!(tuning.coin_chance, 0.1);
        assert_eq!(tuning.gravity, GRAVITY);
        assert_eq!(tuning.slide_frames, SLIDE_FRAMES);
    }

    #[test]
    fn test_rejects_bad_chance() {
        let err = Tuning::from_json(r#"{ "obstacle_chance": 1.5 }"#).unwrap_err();
        assert!(matches!(
            err,
            TuningError::ChanceOutOfRange {
                name: "obstacle_chance",
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_non_positive_speed() {
        let err = Tuning::from_json(r#"{ "start_speed": 0.0 }"#).unwrap_err();
        assert!(matches!(err, TuningError::NotPositive { name: "start_speed", .. }));
    }

    #[test]
    fn test_rejects_tall_slide() {
        let err = Tuning::from_json(r#"{ "slide_height": 120.0 }"#).unwrap_err();
        assert!(matches!(err, TuningError::SlideTallerThanPlayer { .. }));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = Tuning::from_json("{ not json").unwrap_err();
        assert!(matches!(err, TuningError::Parse(_)));
        assert!(err.to_string().starts_with("malformed tuning JSON"));
    }
}
