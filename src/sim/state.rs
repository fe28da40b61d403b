//! Game state and core simulation types
//!
//! Everything the per-frame update reads or writes lives in `GameState`,
//! which is owned by the loop driver and passed by reference.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::settings::Settings;

/// Which side of the playfield
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    /// Human player
    Left,
    /// Bot
    Right,
}

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Physics and AI advance every frame
    #[default]
    Running,
    /// Updates frozen, rendering continues
    Paused,
}

impl GamePhase {
    pub fn toggled(self) -> Self {
        match self {
            GamePhase::Running => GamePhase::Paused,
            GamePhase::Paused => GamePhase::Running,
        }
    }
}

/// Rectangular simulation/render surface
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
}

impl Default for Playfield {
    fn default() -> Self {
        Self {
            width: DEFAULT_PLAYFIELD_WIDTH,
            height: DEFAULT_PLAYFIELD_HEIGHT,
        }
    }
}

impl Playfield {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Center point of the surface
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// A paddle (axis-aligned box, top-left anchored)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Paddle {
    /// Vertically centered paddle on the given side
    pub fn new(side: Side, field: &Playfield) -> Self {
        let x = match side {
            Side::Left => PADDLE_SIDE_INSET,
            Side::Right => field.width - PADDLE_WIDTH - PADDLE_SIDE_INSET,
        };
        Self {
            x,
            y: field.height / 2.0 - PADDLE_HEIGHT / 2.0,
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
        }
    }

    /// Vertical center of the paddle
    #[inline]
    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    /// Lowest and highest allowed top edge
    pub fn y_bounds(&self, field: &Playfield) -> (f32, f32) {
        (
            PADDLE_VERTICAL_MARGIN,
            field.height - self.height - PADDLE_VERTICAL_MARGIN,
        )
    }

    /// Clamp the paddle inside the vertical margins
    pub fn clamp_to(&mut self, field: &Playfield) {
        let (min, max) = self.y_bounds(field);
        // Lower bound wins on a field too short for the paddle
        self.y = self.y.min(max).max(min);
    }

    /// Center the paddle on `center_y` (pointer control), then clamp
    pub fn center_on(&mut self, center_y: f32, field: &Playfield) {
        self.y = center_y - self.height / 2.0;
        self.clamp_to(field);
    }
}

/// The ball (square bounding box, top-left anchored)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
}

impl Ball {
    /// Stationary ball centered in the playfield
    pub fn centered(field: &Playfield) -> Self {
        Self {
            pos: field.center() - Vec2::splat(BALL_SIZE / 2.0),
            vel: Vec2::ZERO,
            size: BALL_SIZE,
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(self.size / 2.0)
    }

    /// Current speed (velocity magnitude)
    #[inline]
    pub fn speed(&self) -> f32 {
        self.vel.length()
    }

    /// Rescale the velocity to `speed`, keeping the direction of travel
    pub fn set_speed(&mut self, speed: f32) {
        self.vel = crate::velocity_from_angle(crate::heading(self.vel), speed);
    }
}

/// Points per side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Score {
    pub left: u32,
    pub right: u32,
}

impl Score {
    pub fn increment(&mut self, side: Side) {
        match side {
            Side::Left => self.left += 1,
            Side::Right => self.right += 1,
        }
    }
}

/// Events produced by a tick, consumed by the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ball bounced off the top or bottom edge
    WallBounce,
    /// Ball was returned by a paddle
    PaddleHit { side: Side },
    /// A point was scored; carries the updated score
    Scored { side: Side, score: Score },
    /// Ball relaunched from the center
    Served { angle: f32 },
    /// Pause flag flipped
    PauseChanged { paused: bool },
    /// A preference changed and should be persisted
    SettingsChanged { settings: Settings },
}

/// Snapshot of the visible state (for logging/debug output)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub seed: u64,
    pub time_ticks: u64,
    pub phase: GamePhase,
    pub score: Score,
    pub settings: Settings,
    pub left_paddle: Paddle,
    pub right_paddle: Paddle,
    pub ball: Ball,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Serve RNG
    pub rng: Pcg32,
    pub field: Playfield,
    pub phase: GamePhase,
    /// Simulated (unpaused) frames
    pub time_ticks: u64,
    pub settings: Settings,
    pub score: Score,
    /// Human paddle
    pub left: Paddle,
    /// Bot paddle
    pub right: Paddle,
    pub ball: Ball,
}

impl GameState {
    /// Create a fresh game with the ball already served
    pub fn new(seed: u64, field: Playfield, settings: Settings) -> Self {
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            field,
            phase: GamePhase::Running,
            time_ticks: 0,
            settings,
            score: Score::default(),
            left: Paddle::new(Side::Left, &field),
            right: Paddle::new(Side::Right, &field),
            ball: Ball::centered(&field),
        };

        super::serve::serve(&mut state);

        state
    }

    pub fn is_paused(&self) -> bool {
        self.phase == GamePhase::Paused
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            seed: self.seed,
            time_ticks: self.time_ticks,
            phase: self.phase,
            score: self.score,
            settings: self.settings,
            left_paddle: self.left,
            right_paddle: self.right,
            ball: self.ball,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_layout() {
        let field = Playfield::new(800.0, 500.0);
        let state = GameState::new(1, field, Settings::default());

        assert_eq!(state.left.x, 10.0);
        assert_eq!(state.right.x, 800.0 - 12.0 - 10.0);
        assert_eq!(state.left.y, 200.0);
        assert_eq!(state.right.y, 200.0);
        assert_eq!(state.ball.center(), field.center());
        assert!((state.ball.speed() - 5.0).abs() < 1e-4);
        assert_eq!(state.score, Score::default());
        assert!(!state.is_paused());
    }

    #[test]
    fn test_paddle_center_on_clamps() {
        let field = Playfield::default();
        let mut paddle = Paddle::new(Side::Left, &field);

        paddle.center_on(-50.0, &field);
        assert_eq!(paddle.y, PADDLE_VERTICAL_MARGIN);

        paddle.center_on(10_000.0, &field);
        assert_eq!(paddle.y, field.height - PADDLE_HEIGHT - PADDLE_VERTICAL_MARGIN);

        paddle.center_on(250.0, &field);
        assert_eq!(paddle.y, 200.0);
    }

    #[test]
    fn test_ball_set_speed_keeps_direction() {
        let mut ball = Ball::centered(&Playfield::default());
        ball.vel = Vec2::new(3.0, -4.0);
        ball.set_speed(10.0);
        assert!((ball.vel.x - 6.0).abs() < 1e-4);
        assert!((ball.vel.y + 8.0).abs() < 1e-4);
    }

    #[test]
    fn test_phase_toggle() {
        assert_eq!(GamePhase::Running.toggled(), GamePhase::Paused);
        assert_eq!(GamePhase::Paused.toggled(), GamePhase::Running);
    }
}
