//! Per-frame simulation tick
//!
//! Input handlers never touch the state directly; they queue `Command`s that
//! the tick applies all at once before any physics runs.

use super::ai::move_ai_paddle;
use super::physics::advance;
use super::serve::score_point;
use super::state::{GameEvent, GamePhase, GameState};
use crate::settings::Settings;

/// Input intents, applied in arrival order at the start of a tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// Pointer moved; `y` is relative to the top of the playfield
    PointerMoved { y: f32 },
    /// Pause key pressed (edge-triggered toggle)
    TogglePause,
    /// Ball speed slider moved
    SetBallSpeed(u8),
    /// Bot difficulty slider moved
    SetAiSpeed(u8),
}

/// Apply a single command
pub fn apply_command(state: &mut GameState, command: Command, events: &mut Vec<GameEvent>) {
    match command {
        Command::PointerMoved { y } => {
            state.left.center_on(y, &state.field);
        }
        Command::TogglePause => {
            state.phase = state.phase.toggled();
            let paused = state.is_paused();
            log::info!("{}", if paused { "Paused" } else { "Resumed" });
            events.push(GameEvent::PauseChanged { paused });
        }
        Command::SetBallSpeed(speed) => {
            state.settings = Settings::new(speed, state.settings.ai_speed);
            // Keep the current heading, only the magnitude changes
            state.ball.set_speed(state.settings.ball_speed_f32());
            log::info!("Ball speed set to {}", state.settings.ball_speed);
            events.push(GameEvent::SettingsChanged {
                settings: state.settings,
            });
        }
        Command::SetAiSpeed(speed) => {
            state.settings = Settings::new(state.settings.ball_speed, speed);
            log::info!("Bot difficulty set to {}", state.settings.ai_speed);
            events.push(GameEvent::SettingsChanged {
                settings: state.settings,
            });
        }
    }
}

/// Advance the game by one frame
///
/// Queued commands are applied first. Unless paused, the ball then moves and
/// collides (possibly scoring and re-serving) and the bot reacts to where
/// the ball ended up. Returns everything that happened, for the HUD.
pub fn tick(
    state: &mut GameState,
    commands: impl IntoIterator<Item = Command>,
) -> Vec<GameEvent> {
    let mut events = Vec::new();

    for command in commands {
        apply_command(state, command, &mut events);
    }

    if state.phase == GamePhase::Paused {
        return events;
    }

    state.time_ticks += 1;

    let speed = state.settings.ball_speed_f32();
    if let Some(scorer) = advance(
        &mut state.ball,
        &state.left,
        &state.right,
        &state.field,
        speed,
        &mut events,
    ) {
        score_point(state, scorer, &mut events);
    }

    move_ai_paddle(
        &mut state.right,
        &state.ball,
        state.settings.ai_speed_f32(),
        &state.field,
    );

    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Playfield, Side};
    use glam::Vec2;

    fn new_state() -> GameState {
        GameState::new(12345, Playfield::default(), Settings::default())
    }

    #[test]
    fn test_tick_moves_ball() {
        let mut state = new_state();
        let before = state.ball;
        tick(&mut state, []);
        assert_eq!(state.ball.pos, before.pos + before.vel);
        assert_eq!(state.time_ticks, 1);
    }

    #[test]
    fn test_tick_pause() {
        let mut state = new_state();
        tick(&mut state, []);

        let events = tick(&mut state, [Command::TogglePause]);
        assert_eq!(events, vec![GameEvent::PauseChanged { paused: true }]);
        assert_eq!(state.phase, GamePhase::Paused);

        let frozen = state.ball;
        let right = state.right;
        for _ in 0..50 {
            assert!(tick(&mut state, []).is_empty());
        }
        assert_eq!(state.ball, frozen);
        assert_eq!(state.right, right);
        assert_eq!(state.time_ticks, 1);

        // Unpause
        tick(&mut state, [Command::TogglePause]);
        assert_eq!(state.phase, GamePhase::Running);
        assert_ne!(state.ball, frozen);
    }

    #[test]
    fn test_pointer_moves_left_paddle_even_when_paused() {
        let mut state = new_state();
        tick(&mut state, [Command::TogglePause]);
        tick(&mut state, [Command::PointerMoved { y: 120.0 }]);
        assert_eq!(state.left.y, 70.0);

        tick(&mut state, [Command::PointerMoved { y: 2.0 }]);
        assert_eq!(state.left.y, 10.0);
    }

    #[test]
    fn test_ball_speed_change_rescales_velocity() {
        let mut state = new_state();
        state.ball.vel = Vec2::new(3.0, 4.0);
        tick(&mut state, [Command::TogglePause]);

        let events = tick(&mut state, [Command::SetBallSpeed(10)]);
        assert_eq!(
            events,
            vec![GameEvent::SettingsChanged {
                settings: Settings::new(10, 4)
            }]
        );
        assert!(state.ball.vel.abs_diff_eq(Vec2::new(6.0, 8.0), 1e-4));
    }

    #[test]
    fn test_ai_speed_change_leaves_ball_alone() {
        let mut state = new_state();
        tick(&mut state, [Command::TogglePause]);
        let ball = state.ball;

        tick(&mut state, [Command::SetAiSpeed(9)]);
        assert_eq!(state.settings.ai_speed, 9);
        assert_eq!(state.ball, ball);
    }

    #[test]
    fn test_slider_values_are_clamped() {
        let mut state = new_state();
        tick(&mut state, [Command::SetBallSpeed(0), Command::SetAiSpeed(99)]);
        assert_eq!(state.settings, Settings::new(1, 10));
    }

    #[test]
    fn test_ai_reacts_after_collision() {
        let mut state = new_state();
        state.ball.pos = Vec2::new(400.0, 100.0);
        state.ball.vel = Vec2::new(3.0, 4.0);
        state.right.y = 200.0;

        tick(&mut state, []);

        // Ball center now at 104 + 8 = 112, target 62 < 200: one step up
        assert_eq!(state.right.y, 196.0);
    }

    #[test]
    fn test_right_side_scores_when_ball_exits_left() {
        let mut state = new_state();
        state.ball.pos = Vec2::new(0.0, 20.0);
        state.ball.vel = Vec2::new(-3.0, 0.0);

        let events = tick(&mut state, []);

        assert_eq!(state.score.right, 1);
        assert_eq!(state.score.left, 0);
        assert!(events.iter().any(|e| matches!(
            e,
            GameEvent::Scored {
                side: Side::Right,
                ..
            }
        )));
        assert_eq!(state.ball.center(), state.field.center());
        assert!((state.ball.speed() - 5.0).abs() < 1e-4);
    }

    #[test]
    fn test_determinism() {
        // Two states with same seed should produce identical results
        let mut state1 = GameState::new(99999, Playfield::default(), Settings::default());
        let mut state2 = GameState::new(99999, Playfield::default(), Settings::default());

        for i in 0..2_000 {
            let y = (i as f32 * 0.37).sin() * 200.0 + 250.0;
            let commands = [Command::PointerMoved { y }];
            tick(&mut state1, commands);
            tick(&mut state2, commands);
        }

        assert_eq!(state1.score, state2.score);
        assert_eq!(state1.ball, state2.ball);
        assert_eq!(state1.right, state2.right);
    }
}
