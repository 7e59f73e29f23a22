//! Rendering module
//!
//! `shapes` builds a vector display list from the game state; `canvas`
//! (browser only) paints it with the Canvas 2D API.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod shapes;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasPainter;
pub use shapes::{Paint, Shape, build_frame};
