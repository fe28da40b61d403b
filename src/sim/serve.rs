//! Scoring and serves
//!
//! After every point the ball goes back to the exact center of the field and
//! is relaunched immediately at a random angle, no pause in between.

use std::f32::consts::PI;

use rand::Rng;

use super::state::{Ball, GameEvent, GameState, Side};
use crate::consts::{SERVE_MAX_ANGLE, SERVE_MIN_ANGLE};
use crate::velocity_from_angle;

/// Draw a serve angle
///
/// The magnitude is uniform in [π/9, π/3.5] off horizontal. Two independent
/// coin flips pick up/down and left/right, so every quadrant is equally
/// likely and the ball never launches flat or steep.
pub fn serve_angle<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    let mut angle = SERVE_MIN_ANGLE + rng.random::<f32>() * (SERVE_MAX_ANGLE - SERVE_MIN_ANGLE);
    if rng.random_bool(0.5) {
        angle = -angle;
    }
    if rng.random_bool(0.5) {
        angle = PI - angle;
    }
    angle
}

/// Put the ball back in the center with a fresh serve at the configured speed
///
/// Returns the chosen angle.
pub fn serve(state: &mut GameState) -> f32 {
    let angle = serve_angle(&mut state.rng);
    state.ball = Ball::centered(&state.field);
    state.ball.vel = velocity_from_angle(angle, state.settings.ball_speed_f32());
    angle
}

/// Award a point to `side` and serve again
pub fn score_point(state: &mut GameState, side: Side, events: &mut Vec<GameEvent>) {
    state.score.increment(side);
    log::info!(
        "{:?} scores ({} - {})",
        side,
        state.score.left,
        state.score.right
    );
    events.push(GameEvent::Scored {
        side,
        score: state.score,
    });

    let angle = serve(state);
    events.push(GameEvent::Served { angle });
}
