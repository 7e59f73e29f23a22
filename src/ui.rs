//! HUD and game-over overlay text

use crate::sim::GameState;

/// Distance shown to the player (rounded half away from zero)
fn whole_distance(distance: f32) -> i64 {
    distance.round() as i64
}

pub fn distance_text(distance: f32) -> String {
    format!("Distance: {}", whole_distance(distance))
}

pub fn coins_text(coins: u32) -> String {
    format!("Coins: {}", coins)
}

/// Summary line for the game-over overlay
pub fn final_score_text(distance: f32, coins: u32) -> String {
    format!("Distance: {} | Coins: {}", whole_distance(distance), coins)
}

/// Everything the DOM layer needs for one frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HudText {
    pub distance: String,
    pub coins: String,
    /// Present once the run is over
    pub final_score: Option<String>,
}

impl HudText {
    pub fn from_state(state: &GameState) -> Self {
        Self {
            distance: distance_text(state.distance),
            coins: coins_text(state.coin_count),
            final_score: state
                .game_over
                .then(|| final_score_text(state.distance, state.coin_count)),
        }
    }
}
