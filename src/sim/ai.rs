//! Bot paddle controller
//!
//! Fixed-step chase: each frame the paddle moves exactly `ai_speed` pixels
//! toward the ball, never a partial step. Near the target it overshoots and
//! jitters; that wobble is what makes low difficulties beatable.

use std::cmp::Ordering;

use super::state::{Ball, Paddle, Playfield};

/// Top edge the paddle would need to center itself on the ball
#[inline]
pub fn target_y(paddle: &Paddle, ball: &Ball) -> f32 {
    ball.center().y - paddle.height / 2.0
}

/// Move the bot paddle one step toward the ball, then clamp it in bounds
pub fn move_ai_paddle(paddle: &mut Paddle, ball: &Ball, ai_speed: f32, field: &Playfield) {
    match target_y(paddle, ball).partial_cmp(&paddle.y) {
        Some(Ordering::Greater) => paddle.y += ai_speed,
        Some(Ordering::Less) => paddle.y -= ai_speed,
        _ => {}
    }
    paddle.clamp_to(field);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::state::Side;
    use glam::Vec2;
    use proptest::prelude::*;

    fn setup(paddle_y: f32, ball_center_y: f32) -> (Paddle, Ball, Playfield) {
        let field = Playfield::default();
        let mut paddle = Paddle::new(Side::Right, &field);
        paddle.y = paddle_y;
        let mut ball = Ball::centered(&field);
        ball.pos.y = ball_center_y - ball.size / 2.0;
        ball.vel = Vec2::new(4.0, 3.0);
        (paddle, ball, field)
    }

    #[test]
    fn test_single_fixed_step_toward_target() {
        // Target top edge 80 = ball center 130 - half paddle 50
        let (mut paddle, ball, field) = setup(50.0, 130.0);
        assert_eq!(target_y(&paddle, &ball), 80.0);

        move_ai_paddle(&mut paddle, &ball, 4.0, &field);
        assert_eq!(paddle.y, 54.0);
    }

    #[test]
    fn test_moves_up_when_ball_above() {
        let (mut paddle, ball, field) = setup(300.0, 100.0);
        move_ai_paddle(&mut paddle, &ball, 7.0, &field);
        assert_eq!(paddle.y, 293.0);
    }

    #[test]
    fn test_no_move_on_target() {
        let (mut paddle, ball, field) = setup(150.0, 200.0);
        move_ai_paddle(&mut paddle, &ball, 10.0, &field);
        assert_eq!(paddle.y, 150.0);
    }

    #[test]
    fn test_overshoots_then_oscillates() {
        // One pixel off with step 4: overshoot, then come back
        let (mut paddle, ball, field) = setup(99.0, 150.0);
        move_ai_paddle(&mut paddle, &ball, 4.0, &field);
        assert_eq!(paddle.y, 103.0);
        move_ai_paddle(&mut paddle, &ball, 4.0, &field);
        assert_eq!(paddle.y, 99.0);
    }

    #[test]
    fn test_clamped_at_margins() {
        let (mut paddle, ball, field) = setup(PADDLE_VERTICAL_MARGIN + 1.0, 0.0);
        move_ai_paddle(&mut paddle, &ball, 10.0, &field);
        assert_eq!(paddle.y, PADDLE_VERTICAL_MARGIN);

        let (mut paddle, ball, field) = setup(385.0, 500.0);
        move_ai_paddle(&mut paddle, &ball, 10.0, &field);
        assert_eq!(paddle.y, field.height - paddle.height - PADDLE_VERTICAL_MARGIN);
    }

    proptest! {
        #[test]
        fn prop_paddle_stays_in_bounds(
            paddle_y in -100.0f32..600.0,
            ball_center_y in 0.0f32..500.0,
            ai_speed in 1u8..=10,
        ) {
            let (mut paddle, ball, field) = setup(paddle_y, ball_center_y);
            move_ai_paddle(&mut paddle, &ball, ai_speed as f32, &field);
            let (min, max) = paddle.y_bounds(&field);
            prop_assert!(paddle.y >= min && paddle.y <= max);
        }
    }
}
