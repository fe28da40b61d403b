//! Rendering module
//!
//! `shapes` turns the game state into a display list, `canvas` paints it
//! with the Canvas 2D API, `hud` holds the DOM-side text.

pub mod hud;
pub mod shapes;

#[cfg(target_arch = "wasm32")]
pub mod canvas;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;
pub use shapes::{PathOp, Scene, Shape, scene};
