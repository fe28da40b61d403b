//! Display list generation for 2D primitives
//!
//! The scene is described as plain data so it can be inspected without a
//! canvas; `canvas.rs` replays it onto a `CanvasRenderingContext2d`.

use glam::Vec2;

use crate::consts::PADDLE_CORNER_RADIUS;
use crate::sim::{Ball, GameState, Paddle};

/// Colors for game elements (CSS color strings)
pub mod colors {
    pub const PADDLE: &str = "#fff";
    pub const BALL: &str = "#fff";
}

/// One path-building instruction
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathOp {
    MoveTo(Vec2),
    LineTo(Vec2),
    /// Quadratic curve through `ctrl` ending at `to`
    QuadTo { ctrl: Vec2, to: Vec2 },
    Close,
}

/// A filled primitive
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Rounded rectangle, top-left anchored
    RoundedRect {
        pos: Vec2,
        size: Vec2,
        radius: f32,
        color: &'static str,
    },
    Circle {
        center: Vec2,
        radius: f32,
        color: &'static str,
    },
}

/// A full frame: clear, then fill each shape in order
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub width: f32,
    pub height: f32,
    pub shapes: Vec<Shape>,
}

/// Outline of a rectangle with quadratic-curve corners, clockwise from the
/// top edge
pub fn rounded_rect_path(pos: Vec2, size: Vec2, radius: f32) -> Vec<PathOp> {
    let (x, y) = (pos.x, pos.y);
    let (w, h) = (size.x, size.y);
    let r = radius;

    vec![
        PathOp::MoveTo(Vec2::new(x + r, y)),
        PathOp::LineTo(Vec2::new(x + w - r, y)),
        PathOp::QuadTo {
            ctrl: Vec2::new(x + w, y),
            to: Vec2::new(x + w, y + r),
        },
        PathOp::LineTo(Vec2::new(x + w, y + h - r)),
        PathOp::QuadTo {
            ctrl: Vec2::new(x + w, y + h),
            to: Vec2::new(x + w - r, y + h),
        },
        PathOp::LineTo(Vec2::new(x + r, y + h)),
        PathOp::QuadTo {
            ctrl: Vec2::new(x, y + h),
            to: Vec2::new(x, y + h - r),
        },
        PathOp::LineTo(Vec2::new(x, y + r)),
        PathOp::QuadTo {
            ctrl: Vec2::new(x, y),
            to: Vec2::new(x + r, y),
        },
        PathOp::Close,
    ]
}

fn paddle_shape(paddle: &Paddle) -> Shape {
    Shape::RoundedRect {
        pos: Vec2::new(paddle.x, paddle.y),
        size: Vec2::new(paddle.width, paddle.height),
        radius: PADDLE_CORNER_RADIUS,
        color: colors::PADDLE,
    }
}

fn ball_shape(ball: &Ball) -> Shape {
    Shape::Circle {
        center: ball.center(),
        radius: ball.size / 2.0,
        color: colors::BALL,
    }
}

/// Build the frame for the current state
pub fn scene(state: &GameState) -> Scene {
    Scene {
        width: state.field.width,
        height: state.field.height,
        shapes: vec![
            paddle_shape(&state.left),
            paddle_shape(&state.right),
            ball_shape(&state.ball),
        ],
    }
}
