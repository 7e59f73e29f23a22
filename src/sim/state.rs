//! Game state and core simulation types
//!
//! One `GameState` is one session: the player, everything scrolling across
//! the field, the score, and the seeded RNG that feeds the spawner.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::collision::Rect;
use crate::tuning::Tuning;

/// Height of an aerial obstacle's underside above the ground, on top of its diameter
pub const AERIAL_CLEARANCE: f32 = 80.0;
/// Height of a ground obstacle's anchor point above the ground
pub const CLOUD_ALTITUDE: f32 = 130.0;
/// Ground obstacle hitbox: starts at the anchor x, rises above the anchor y
pub const CLOUD_HITBOX_WIDTH: f32 = 60.0;
pub const CLOUD_HITBOX_HEIGHT: f32 = 30.0;
pub const CLOUD_HITBOX_RISE: f32 = 20.0;
/// Cloud puffs as (dx, dy, radius) from the anchor point
pub const CLOUD_PUFFS: [(f32, f32, f32); 4] = [
    (0.0, 0.0, 15.0),
    (20.0, 5.0, 18.0),
    (40.0, 0.0, 15.0),
    (25.0, -10.0, 20.0),
];

/// Coins appear in a band this far above the ground
pub const COIN_MIN_ALTITUDE: f32 = 100.0;
pub const COIN_BAND: f32 = 150.0;

/// Anything that scrolls across the field
pub trait FieldEntity {
    /// Move left by the current scroll speed
    fn advance(&mut self, speed: f32);

    /// Collision rectangle
    fn hitbox(&self) -> Rect;

    /// Drawn extent (defaults to the hitbox)
    fn bounds(&self) -> Rect {
        self.hitbox()
    }

    /// Fully past the left edge of the field
    fn is_off_field(&self) -> bool {
        self.bounds().right() < 0.0
    }
}

/// Player movement state, derived from the jumping/sliding flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    Running,
    Jumping,
    Sliding,
}

/// The runner
#[derive(Debug, Clone)]
pub struct Player {
    /// Top-left of the standing body
    pub pos: Vec2,
    /// Vertical velocity (negative is up)
    pub vel_y: f32,
    pub width: f32,
    pub height: f32,
    pub slide_height: f32,
    pub jumping: bool,
    pub sliding: bool,
    /// Frames of slide remaining
    pub slide_ticks: u32,
    ground_y: f32,
}

impl Player {
    pub fn new(tuning: &Tuning, ground_y: f32) -> Self {
        Self {
            pos: Vec2::new(tuning.player_x, ground_y - tuning.player_height),
            vel_y: 0.0,
            width: tuning.player_width,
            height: tuning.player_height,
            slide_height: tuning.slide_height,
            jumping: false,
            sliding: false,
            slide_ticks: 0,
            ground_y,
        }
    }

    pub fn motion(&self) -> Motion {
        if self.sliding {
            Motion::Sliding
        } else if self.jumping {
            Motion::Jumping
        } else {
            Motion::Running
        }
    }

    /// Body top when standing on the ground
    #[inline]
    pub fn standing_y(&self) -> f32 {
        self.ground_y - self.height
    }

    pub fn is_grounded(&self) -> bool {
        self.pos.y >= self.standing_y()
    }

    /// Start a jump. Returns false (and changes nothing) unless running.
    pub fn jump(&mut self, tuning: &Tuning) -> bool {
        if self.motion() != Motion::Running {
            return false;
        }
        self.vel_y = tuning.jump_impulse;
        self.jumping = true;
        true
    }

    /// Start a slide. Returns false (and changes nothing) unless running.
    pub fn slide(&mut self, tuning: &Tuning) -> bool {
        if self.motion() != Motion::Running {
            return false;
        }
        self.sliding = true;
        self.slide_ticks = tuning.slide_frames;
        self.vel_y = 0.0;
        self.pos.y = self.standing_y();
        true
    }

    /// Advance one frame of physics
    pub fn update(&mut self, tuning: &Tuning) {
        if self.sliding {
            // Pinned to the ground while the slide lasts
            self.vel_y = 0.0;
            self.pos.y = self.standing_y();
            self.slide_ticks = self.slide_ticks.saturating_sub(1);
            if self.slide_ticks == 0 {
                self.sliding = false;
            }
            return;
        }

        self.vel_y += tuning.gravity;
        self.pos.y += self.vel_y;

        if self.is_grounded() {
            self.pos.y = self.standing_y();
            self.vel_y = 0.0;
            self.jumping = false;
        }
    }

    /// Full body at the current position
    pub fn standing_hitbox(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.width, self.height)
    }

    /// Lower portion of the body, resting on the ground
    pub fn sliding_hitbox(&self) -> Rect {
        Rect::new(
            self.pos.x,
            self.ground_y - self.slide_height,
            self.width,
            self.slide_height,
        )
    }

    pub fn hitbox(&self) -> Rect {
        if self.sliding {
            self.sliding_hitbox()
        } else {
            self.standing_hitbox()
        }
    }
}

/// Obstacle variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObstacleKind {
    /// High ball with a compact square hitbox
    Aerial,
    /// Floating cloud at mid height with a wide hitbox
    Ground,
}

/// A hazard scrolling toward the player
#[derive(Debug, Clone)]
pub struct Obstacle {
    pub kind: ObstacleKind,
    /// Aerial: top-centre of the ball. Ground: anchor of the first cloud puff.
    pub pos: Vec2,
    pub radius: f32,
}

impl Obstacle {
    pub fn new(kind: ObstacleKind, x: f32, ground_y: f32, radius: f32) -> Self {
        let y = match kind {
            ObstacleKind::Aerial => ground_y - radius * 2.0 - AERIAL_CLEARANCE,
            ObstacleKind::Ground => ground_y - CLOUD_ALTITUDE,
        };
        Self {
            kind,
            pos: Vec2::new(x, y),
            radius,
        }
    }
}

impl FieldEntity for Obstacle {
    fn advance(&mut self, speed: f32) {
        self.pos.x -= speed;
    }

    fn hitbox(&self) -> Rect {
        match self.kind {
            ObstacleKind::Aerial => Rect::new(
                self.pos.x - self.radius,
                self.pos.y,
                self.radius * 2.0,
                self.radius * 2.0,
            ),
            ObstacleKind::Ground => Rect::new(
                self.pos.x,
                self.pos.y - CLOUD_HITBOX_RISE,
                CLOUD_HITBOX_WIDTH,
                CLOUD_HITBOX_HEIGHT,
            ),
        }
    }

    fn bounds(&self) -> Rect {
        match self.kind {
            ObstacleKind::Aerial => self.hitbox(),
            ObstacleKind::Ground => {
                let (mut min, mut max) = (Vec2::splat(f32::MAX), Vec2::splat(f32::MIN));
                for (dx, dy, r) in CLOUD_PUFFS {
                    let c = self.pos + Vec2::new(dx, dy);
                    min = min.min(c - Vec2::splat(r));
                    max = max.max(c + Vec2::splat(r));
                }
                Rect::new(min.x, min.y, max.x - min.x, max.y - min.y)
            }
        }
    }
}

/// A collectible
#[derive(Debug, Clone)]
pub struct Coin {
    /// Centre
    pub pos: Vec2,
    pub size: f32,
}

impl Coin {
    pub fn new(x: f32, y: f32, size: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size,
        }
    }
}

impl FieldEntity for Coin {
    fn advance(&mut self, speed: f32) {
        self.pos.x -= speed;
    }

    fn hitbox(&self) -> Rect {
        let half = self.size / 2.0;
        Rect::new(self.pos.x - half, self.pos.y - half, self.size, self.size)
    }
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub tuning: Tuning,
    /// Field size (follows the viewport)
    pub width: f32,
    pub height: f32,
    /// Ground line, fixed for the whole session
    pub ground_y: f32,
    pub player: Player,
    /// Live obstacles, oldest first
    pub obstacles: Vec<Obstacle>,
    /// Live coins, oldest first
    pub coins: Vec<Coin>,
    pub distance: f32,
    pub coin_count: u32,
    /// Current scroll speed
    pub speed: f32,
    pub game_over: bool,
    /// Frames simulated so far
    pub frame: u64,
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// New session with default tuning
    pub fn new(seed: u64, width: f32, height: f32) -> Self {
        Self::with_tuning(seed, width, height, Tuning::default())
    }

    pub fn with_tuning(seed: u64, width: f32, height: f32, tuning: Tuning) -> Self {
        let ground_y = height - tuning.ground_offset;
        Self {
            seed,
            player: Player::new(&tuning, ground_y),
            obstacles: Vec::new(),
            coins: Vec::new(),
            distance: tuning.start_distance,
            coin_count: 0,
            speed: tuning.start_speed,
            game_over: false,
            frame: 0,
            rng: Pcg32::seed_from_u64(seed),
            width,
            height,
            ground_y,
            tuning,
        }
    }

    /// Follow a viewport resize. The ground line stays where the session started.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    /// x coordinate new entities appear at
    pub fn spawn_x(&self) -> f32 {
        self.width + self.tuning.spawn_margin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player() -> (Player, Tuning) {
        let tuning = Tuning::default();
        (Player::new(&tuning, 450.0), tuning)
    }

    #[test]
    fn test_player_starts_running_on_ground() {
        let (p, _) = player();
        assert_eq!(p.motion(), Motion::Running);
        assert_eq!(p.pos.y, 370.0);
        assert!(p.is_grounded());
    }

    #[test]
    fn test_jump_arc_lands() {
        let (mut p, tuning) = player();
        assert!(p.jump(&tuning));
        assert_eq!(p.motion(), Motion::Jumping);

        p.update(&tuning);
        assert!(p.pos.y < p.standing_y());

        let mut frames = 1;
        while p.motion() == Motion::Jumping {
            p.update(&tuning);
            frames += 1;
            assert!(frames < 200, "jump never landed");
        }
        assert_eq!(p.pos.y, p.standing_y());
        assert_eq!(p.vel_y, 0.0);
    }

    #[test]
    fn test_slide_lasts_configured_frames() {
        let (mut p, tuning) = player();
        assert!(p.slide(&tuning));
        assert_eq!(p.motion(), Motion::Sliding);

        for _ in 0..tuning.slide_frames - 1 {
            p.update(&tuning);
            assert_eq!(p.motion(), Motion::Sliding);
            assert_eq!(p.pos.y, p.standing_y());
        }
        p.update(&tuning);
        assert_eq!(p.motion(), Motion::Running);
        assert_eq!(p.pos.y, p.standing_y());
    }

    #[test]
    fn test_commands_ignored_unless_running() {
        let (mut p, tuning) = player();
        p.jump(&tuning);
        p.update(&tuning);
        let before = (p.pos, p.vel_y, p.slide_ticks);
        assert!(!p.slide(&tuning));
        assert!(!p.jump(&tuning));
        assert_eq!((p.pos, p.vel_y, p.slide_ticks), before);
        assert!(!p.sliding);

        let (mut p, tuning) = player();
        p.slide(&tuning);
        let ticks = p.slide_ticks;
        assert!(!p.jump(&tuning));
        assert!(!p.slide(&tuning));
        assert!(!p.jumping);
        assert_eq!(p.slide_ticks, ticks);
    }

    #[test]
    fn test_sliding_hitbox_is_lower_body() {
        let (mut p, tuning) = player();
        let standing = p.hitbox();
        p.slide(&tuning);
        let sliding = p.hitbox();
        assert_eq!(sliding.h, tuning.slide_height);
        assert_eq!(sliding.bottom(), standing.bottom());
        assert!(sliding.y > standing.y);
    }

    #[test]
    fn test_obstacle_geometry() {
        let aerial = Obstacle::new(ObstacleKind::Aerial, 500.0, 450.0, 30.0);
        assert_eq!(aerial.hitbox(), Rect::new(470.0, 310.0, 60.0, 60.0));
        assert_eq!(aerial.bounds(), aerial.hitbox());

        let cloud = Obstacle::new(ObstacleKind::Ground, 500.0, 450.0, 30.0);
        assert_eq!(cloud.hitbox(), Rect::new(500.0, 300.0, 60.0, 30.0));
        assert_eq!(cloud.bounds(), Rect::new(485.0, 290.0, 70.0, 53.0));
    }

    #[test]
    fn test_entities_scroll_off_field() {
        let mut coin = Coin::new(10.0, 200.0, 24.0);
        assert!(!coin.is_off_field());
        coin.advance(22.0);
        assert!(!coin.is_off_field()); // right edge at 0
        coin.advance(0.5);
        assert!(coin.is_off_field());
    }

    #[test]
    fn test_resize_keeps_ground() {
        let mut state = GameState::new(1, 800.0, 600.0);
        state.resize(1024.0, 700.0);
        assert_eq!(state.ground_y, 450.0);
        assert_eq!(state.spawn_x(), 1074.0);
    }
}
