//! HUD text shown around the canvas

/// Hint under the playfield describing what the pause key will do
pub fn pause_hint(paused: bool) -> &'static str {
    if paused {
        "Press Space to Unpause"
    } else {
        "Press Space to Pause"
    }
}

/// DOM element ids the HUD writes to
pub mod ids {
    pub const CANVAS: &str = "pong";
    pub const LEFT_SCORE: &str = "left-score";
    pub const RIGHT_SCORE: &str = "right-score";
    pub const PAUSE_HINT: &str = "pause-hint";
    pub const BALL_SPEED_SLIDER: &str = "ball-speed-slider";
    pub const BALL_SPEED_VALUE: &str = "ball-speed-value";
    pub const BOT_DIFFICULTY_SLIDER: &str = "bot-difficulty-slider";
    pub const BOT_DIFFICULTY_VALUE: &str = "bot-difficulty-value";
}
