//! Dash Runner - A single-screen endless runner
//!
//! Core modules:
//! - `sim`: Deterministic simulation (player physics, spawning, collisions, game state)
//! - `renderer`: Display list generation and the Canvas 2D painter
//! - `input`: Keyboard and touch-swipe mapping to player commands
//! - `tuning`: Data-driven game balance
//! - `ui`: HUD and game-over overlay text

pub mod input;
pub mod renderer;
pub mod sim;
pub mod tuning;
pub mod ui;

pub use input::{Command, SwipeTracker};
pub use tuning::{Tuning, TuningError};

/// Game configuration constants (defaults for [`Tuning`])
pub mod consts {
    /// Downward acceleration applied to the player (units/frame²)
    pub const GRAVITY: f32 = 0.6;
    /// Vertical velocity set by a jump (negative is up)
    pub const JUMP_IMPULSE: f32 = -15.0;
    /// Frames a slide lasts
    pub const SLIDE_FRAMES: u32 = 30;

    /// Player geometry
    pub const PLAYER_X: f32 = 100.0;
    pub const PLAYER_WIDTH: f32 = 60.0;
    pub const PLAYER_HEIGHT: f32 = 80.0;
    pub const PLAYER_SLIDE_HEIGHT: f32 = 50.0;

    /// Ground line sits this far above the bottom of the field
    pub const GROUND_OFFSET: f32 = 150.0;

    /// Scroll speed at session start (units/frame)
    pub const START_SPEED: f32 = 4.0;
    /// Added to the scroll speed every frame
    pub const SPEED_RAMP: f32 = 0.0005;
    /// Distance gained per unit of speed each frame
    pub const DISTANCE_FACTOR: f32 = 0.1;
    pub const START_DISTANCE: f32 = 1.0;

    /// Per-frame spawn chances
    pub const OBSTACLE_SPAWN_CHANCE: f32 = 0.02;
    pub const COIN_SPAWN_CHANCE: f32 = 0.03;

    /// Entities appear this far past the right edge
    pub const SPAWN_MARGIN: f32 = 50.0;

    pub const OBSTACLE_RADIUS: f32 = 30.0;
    pub const COIN_SIZE: f32 = 24.0;

    /// Vertical swipe distance needed to count as a gesture
    pub const SWIPE_THRESHOLD: f32 = 50.0;
}
