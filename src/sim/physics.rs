//! Ball integration and collision response
//!
//! Everything is axis-aligned: the ball is a square box, paddles are
//! rectangles, walls are the top and bottom edges of the playfield. A paddle
//! contact discards the incoming direction entirely and relaunches the ball
//! at an angle chosen by where it struck the paddle face.

use std::f32::consts::PI;

use super::state::{Ball, GameEvent, Paddle, Playfield, Side};
use crate::consts::MAX_BOUNCE_ANGLE;
use crate::velocity_from_angle;

/// Bounce off the top/bottom edges
///
/// Clamps the ball back inside and inverts the vertical velocity. Returns
/// whether a bounce happened; a ball strictly inside the field is untouched.
pub fn resolve_walls(ball: &mut Ball, field: &Playfield) -> bool {
    let mut bounced = false;

    if ball.pos.y <= 0.0 {
        ball.pos.y = 0.0;
        ball.vel.y = -ball.vel.y;
        bounced = true;
    }
    if ball.pos.y + ball.size >= field.height {
        ball.pos.y = field.height - ball.size;
        ball.vel.y = -ball.vel.y;
        bounced = true;
    }

    bounced
}

/// Whether the ball's leading edge has reached the paddle face while
/// overlapping the paddle vertically
pub fn paddle_contact(ball: &Ball, paddle: &Paddle, side: Side) -> bool {
    let reached_face = match side {
        Side::Left => ball.pos.x <= paddle.x + paddle.width,
        Side::Right => ball.pos.x + ball.size >= paddle.x,
    };
    reached_face && ball.pos.y + ball.size >= paddle.y && ball.pos.y <= paddle.y + paddle.height
}

/// Strike offset from the paddle center in [-1, 1] (top edge = +1)
pub fn normalized_intersect(ball: &Ball, paddle: &Paddle) -> f32 {
    let relative = paddle.center_y() - ball.center().y;
    (relative / (paddle.height / 2.0)).clamp(-1.0, 1.0)
}

/// Outgoing angle for a strike at `intersect` on the given paddle
pub fn bounce_angle(side: Side, intersect: f32) -> f32 {
    match side {
        Side::Left => intersect * MAX_BOUNCE_ANGLE,
        Side::Right => PI - intersect * MAX_BOUNCE_ANGLE,
    }
}

/// Return the ball off a paddle if they touch
///
/// The ball is pushed back to the paddle face, and its new velocity has
/// magnitude `speed` and always heads away from the paddle.
pub fn resolve_paddle(ball: &mut Ball, paddle: &Paddle, side: Side, speed: f32) -> bool {
    if !paddle_contact(ball, paddle, side) {
        return false;
    }

    ball.pos.x = match side {
        Side::Left => paddle.x + paddle.width,
        Side::Right => paddle.x - ball.size,
    };

    let angle = bounce_angle(side, normalized_intersect(ball, paddle));
    ball.vel = velocity_from_angle(angle, speed);

    match side {
        Side::Left => ball.vel.x = ball.vel.x.abs(),
        Side::Right => ball.vel.x = -ball.vel.x.abs(),
    }

    true
}

/// Side that wins the point if the ball has left the field horizontally
pub fn out_of_bounds(ball: &Ball, field: &Playfield) -> Option<Side> {
    if ball.pos.x < 0.0 {
        Some(Side::Right)
    } else if ball.pos.x > field.width {
        Some(Side::Left)
    } else {
        None
    }
}

/// Advance the ball one frame
///
/// Integrates position with a single step, then resolves walls, the left
/// paddle and the right paddle in that order. Contacts are appended to
/// `events`. Returns the scoring side if the ball ended up out of bounds;
/// the caller is responsible for the serve.
///
/// There is no sub-stepping. The paddle tests are half-planes (anything at or
/// past a paddle face counts), so a fast ball cannot slip between frames
/// through a paddle it overlaps vertically.
pub fn advance(
    ball: &mut Ball,
    left: &Paddle,
    right: &Paddle,
    field: &Playfield,
    speed: f32,
    events: &mut Vec<GameEvent>,
) -> Option<Side> {
    ball.pos += ball.vel;

    if resolve_walls(ball, field) {
        events.push(GameEvent::WallBounce);
    }

    for (paddle, side) in [(left, Side::Left), (right, Side::Right)] {
        if resolve_paddle(ball, paddle, side, speed) {
            events.push(GameEvent::PaddleHit { side });
        }
    }

    out_of_bounds(ball, field)
}
