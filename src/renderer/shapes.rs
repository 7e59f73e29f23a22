//! Display list generation for 2D primitives
//!
//! Turns the game state into a flat list of vector shapes. The list is
//! backend independent; the canvas painter replays it each frame.

use glam::Vec2;
use std::f32::consts::PI;

use crate::sim::state::CLOUD_PUFFS;
use crate::sim::{Coin, GameState, Obstacle, ObstacleKind, Player, Rect};

/// RGBA, each channel 0-1
pub type Color = [f32; 4];

/// Colors for game elements
pub mod colors {
    use super::Color;

    pub const PLAYER: Color = [0.949, 0.788, 0.298, 1.0];
    pub const PLAYER_EARS: Color = [0.0, 0.0, 0.0, 1.0];
    pub const AERIAL_TOP: Color = [0.733, 0.133, 0.133, 1.0];
    pub const AERIAL_BOTTOM: Color = [1.0, 1.0, 1.0, 1.0];
    pub const CLOUD: Color = [1.0, 1.0, 1.0, 1.0];
    pub const OUTLINE: Color = [0.0, 0.0, 0.0, 1.0];
    pub const COIN_RIM: Color = [0.722, 0.525, 0.043, 1.0];
    pub const COIN_FACE: Color = [1.0, 0.843, 0.0, 1.0];
    pub const COIN_HIGHLIGHT: Color = [1.0, 1.0, 0.878, 0.7];
    pub const COIN_SHADOW: Color = [0.722, 0.525, 0.043, 0.6];
    pub const COIN_STROKE: Color = [0.855, 0.647, 0.125, 1.0];
}

const OUTLINE_WIDTH: f32 = 3.0;
const COIN_STROKE_WIDTH: f32 = 2.0;

/// Fill or outline
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Paint {
    Fill(Color),
    Stroke { color: Color, width: f32 },
}

/// One drawing primitive (screen space, y grows downward)
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Rect { rect: Rect, fill: Color },
    Triangle { points: [Vec2; 3], fill: Color },
    Circle { center: Vec2, radius: f32, paint: Paint },
    /// Filled circular segment from `start` to `end` (radians, clockwise on screen)
    Arc {
        center: Vec2,
        radius: f32,
        start: f32,
        end: f32,
        fill: Color,
    },
    Ellipse { center: Vec2, radii: Vec2, fill: Color },
    Line {
        from: Vec2,
        to: Vec2,
        color: Color,
        width: f32,
    },
}

/// CSS color string for a canvas fill/stroke style
pub fn to_css(color: Color) -> String {
    let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    format!(
        "rgba({}, {}, {}, {})",
        channel(color[0]),
        channel(color[1]),
        channel(color[2]),
        color[3].clamp(0.0, 1.0)
    )
}

/// Shapes for the runner: a body with two ears, or a low body with one ear while sliding
pub fn player_shapes(player: &Player) -> Vec<Shape> {
    let body = player.hitbox();
    let ear = |x: f32, dx: f32, top: f32, tip: f32| Shape::Triangle {
        points: [
            Vec2::new(x + dx * 10.0, top),
            Vec2::new(x + dx * 20.0, top - tip),
            Vec2::new(x + dx * 30.0, top),
        ],
        fill: colors::PLAYER_EARS,
    };

    let mut shapes = vec![Shape::Rect {
        rect: body,
        fill: colors::PLAYER,
    }];
    if player.sliding {
        shapes.push(ear(body.x, 1.0, body.y, 15.0));
    } else {
        shapes.push(ear(body.x, 1.0, body.y, 20.0));
        shapes.push(ear(body.right(), -1.0, body.y, 20.0));
    }
    shapes
}

pub fn obstacle_shapes(obstacle: &Obstacle) -> Vec<Shape> {
    match obstacle.kind {
        ObstacleKind::Aerial => {
            let center = obstacle.pos + Vec2::new(0.0, obstacle.radius);
            let radius = obstacle.radius;
            vec![
                Shape::Arc {
                    center,
                    radius,
                    start: PI,
                    end: 0.0,
                    fill: colors::AERIAL_TOP,
                },
                Shape::Arc {
                    center,
                    radius,
                    start: 0.0,
                    end: PI,
                    fill: colors::AERIAL_BOTTOM,
                },
                Shape::Circle {
                    center,
                    radius,
                    paint: Paint::Stroke {
                        color: colors::OUTLINE,
                        width: OUTLINE_WIDTH,
                    },
                },
            ]
        }
        ObstacleKind::Ground => {
            let puffs = CLOUD_PUFFS
                .iter()
                .map(|&(dx, dy, r)| (obstacle.pos + Vec2::new(dx, dy), r));
            let fills = puffs.clone().map(|(center, radius)| Shape::Circle {
                center,
                radius,
                paint: Paint::Fill(colors::CLOUD),
            });
            let outlines = puffs.map(|(center, radius)| Shape::Circle {
                center,
                radius,
                paint: Paint::Stroke {
                    color: colors::OUTLINE,
                    width: OUTLINE_WIDTH,
                },
            });
            fills.chain(outlines).collect()
        }
    }
}

pub fn coin_shapes(coin: &Coin) -> Vec<Shape> {
    let radius = coin.size / 2.0;
    let c = coin.pos;
    let glint = Vec2::new(radius * 0.3, radius * 0.15);
    let offset = Vec2::splat(radius * 0.3);
    let arm = radius * 0.5;

    vec![
        Shape::Circle {
            center: c,
            radius,
            paint: Paint::Fill(colors::COIN_RIM),
        },
        Shape::Circle {
            center: c,
            radius: radius * 0.85,
            paint: Paint::Fill(colors::COIN_FACE),
        },
        Shape::Ellipse {
            center: c - offset,
            radii: glint,
            fill: colors::COIN_HIGHLIGHT,
        },
        Shape::Ellipse {
            center: c + offset,
            radii: glint,
            fill: colors::COIN_SHADOW,
        },
        Shape::Line {
            from: c - Vec2::new(arm, 0.0),
            to: c + Vec2::new(arm, 0.0),
            color: colors::COIN_STROKE,
            width: COIN_STROKE_WIDTH,
        },
        Shape::Line {
            from: c - Vec2::new(0.0, arm),
            to: c + Vec2::new(0.0, arm),
            color: colors::COIN_STROKE,
            width: COIN_STROKE_WIDTH,
        },
    ]
}

/// Whole frame in draw order: player, obstacles, coins
pub fn build_frame(state: &GameState) -> Vec<Shape> {
    let mut shapes = player_shapes(&state.player);
    for obstacle in &state.obstacles {
        shapes.extend(obstacle_shapes(obstacle));
    }
    for coin in &state.coins {
        shapes.extend(coin_shapes(coin));
    }
    shapes
}
