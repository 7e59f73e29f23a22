//! Axis-aligned collision detection and resolution
//!
//! Every hitbox in the game is an axis-aligned rectangle, so a single
//! inclusive AABB test covers both obstacle hits and coin pickups.

use super::state::{FieldEntity, GameState};

/// Axis-aligned rectangle (top-left origin, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Same rectangle moved horizontally
    #[inline]
    pub fn shifted_x(&self, dx: f32) -> Self {
        Self { x: self.x + dx, ..*self }
    }

    /// Inclusive overlap test: touching edges count as overlapping
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        rects_overlap(self, other)
    }
}

/// Two rectangles overlap unless they are separated along x or y
#[inline]
pub fn rects_overlap(a: &Rect, b: &Rect) -> bool {
    !(a.x > b.right() || a.right() < b.x || a.y > b.bottom() || a.bottom() < b.y)
}

/// What happened during one collision pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollisionReport {
    /// The player touched an obstacle (the run is over)
    pub hit_obstacle: bool,
    /// Coins picked up this frame
    pub coins_collected: u32,
}

/// Check the player against every live obstacle and coin
///
/// The first obstacle hit ends the run and stops further obstacle checks.
/// Coins have no early exit: every overlapping coin is collected.
pub fn resolve_collisions(state: &mut GameState) -> CollisionReport {
    let player_box = state.player.hitbox();

    // Newest obstacles first
    let hit_obstacle = state
        .obstacles
        .iter()
        .rev()
        .any(|obstacle| player_box.overlaps(&obstacle.hitbox()));

    if hit_obstacle {
        state.game_over = true;
    }

    let before = state.coins.len();
    state.coins.retain(|coin| !player_box.overlaps(&coin.hitbox()));
    let coins_collected = (before - state.coins.len()) as u32;
    state.coin_count += coins_collected;

    CollisionReport {
        hit_obstacle,
        coins_collected,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Coin, Obstacle, ObstacleKind};
    use crate::tuning::Tuning;
    use proptest::prelude::*;

    fn quiet_state() -> GameState {
        GameState::with_tuning(7, 800.0, 600.0, Tuning::without_spawns())
    }

    #[test]
    fn test_overlapping_rects() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        assert!(rects_overlap(&a, &b));
    }

    #[test]
    fn test_separated_on_x() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(20.0, 0.0, 10.0, 10.0);
        assert!(!rects_overlap(&a, &b));
    }

    #[test]
    fn test_separated_on_y() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(0.0, 10.5, 10.0, 10.0);
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn test_touching_edges_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(10.0, 0.0, 10.0, 10.0);
        assert!(a.overlaps(&b));
        let c = Rect::new(0.0, 10.0, 10.0, 10.0);
        assert!(a.overlaps(&c));
    }

    #[test]
    fn test_obstacle_hit_sets_game_over() {
        let mut state = quiet_state();
        let mut obstacle = Obstacle::new(
            ObstacleKind::Aerial,
            state.player.pos.x,
            state.ground_y,
            state.tuning.obstacle_radius,
        );
        // Drop it onto the player's body
        obstacle.pos.y = state.player.pos.y;
        state.obstacles.push(obstacle);

        let report = resolve_collisions(&mut state);
        assert!(report.hit_obstacle);
        assert!(state.game_over);
        // Obstacles stay in the field, only coins are consumed
        assert_eq!(state.obstacles.len(), 1);
    }

    #[test]
    fn test_distant_obstacle_is_harmless() {
        let mut state = quiet_state();
        let radius = state.tuning.obstacle_radius;
        state
            .obstacles
            .push(Obstacle::new(ObstacleKind::Aerial, 700.0, state.ground_y, radius));

        let report = resolve_collisions(&mut state);
        assert!(!report.hit_obstacle);
        assert!(!state.game_over);
    }

    #[test]
    fn test_collects_every_overlapping_coin() {
        let mut state = quiet_state();
        let body = state.player.hitbox();
        let size = state.tuning.coin_size;
        state.coins.push(Coin::new(body.x + 10.0, body.y + 10.0, size));
        state.coins.push(Coin::new(600.0, body.y, size));
        state.coins.push(Coin::new(body.x + 40.0, body.y + 60.0, size));

        let report = resolve_collisions(&mut state);
        assert_eq!(report.coins_collected, 2);
        assert_eq!(state.coin_count, 2);
        assert_eq!(state.coins.len(), 1);
        assert_eq!(state.coins[0].pos.x, 600.0);
    }

    proptest! {
        #[test]
        fn prop_overlap_is_symmetric(
            ax in -500.0f32..500.0, ay in -500.0f32..500.0,
            aw in 0.0f32..200.0, ah in 0.0f32..200.0,
            bx in -500.0f32..500.0, by in -500.0f32..500.0,
            bw in 0.0f32..200.0, bh in 0.0f32..200.0,
        ) {
            let a = Rect::new(ax, ay, aw, ah);
            let b = Rect::new(bx, by, bw, bh);
            prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
        }

        #[test]
        fn prop_rect_overlaps_itself(
            x in -500.0f32..500.0, y in -500.0f32..500.0,
            w in 0.0f32..200.0, h in 0.0f32..200.0,
        ) {
            let r = Rect::new(x, y, w, h);
            prop_assert!(r.overlaps(&r));
        }
    }
}
