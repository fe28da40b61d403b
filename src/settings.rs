//! Player preferences
//!
//! Persisted in LocalStorage as two independent keys so the values stay
//! readable (and editable) from the browser devtools.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::persistence::KeyValueStore;

/// Game settings/preferences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Ball speed in pixels per frame (1-10)
    pub ball_speed: u8,
    /// Bot paddle step in pixels per frame (1-10)
    pub ai_speed: u8,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ball_speed: DEFAULT_BALL_SPEED,
            ai_speed: DEFAULT_AI_SPEED,
        }
    }
}

/// Clamp a raw numeric preference into the slider range
pub fn clamp_setting(value: f64) -> u8 {
    value
        .round()
        .clamp(SETTING_MIN as f64, SETTING_MAX as f64) as u8
}

impl Settings {
    /// Storage key for ball speed
    pub const BALL_SPEED_KEY: &'static str = "ballSpeed";
    /// Storage key for bot difficulty
    pub const AI_SPEED_KEY: &'static str = "botDifficulty";

    pub fn new(ball_speed: u8, ai_speed: u8) -> Self {
        Self {
            ball_speed: clamp_setting(ball_speed as f64),
            ai_speed: clamp_setting(ai_speed as f64),
        }
    }

    /// Load settings, falling back to defaults per key and clamping whatever
    /// was stored into range
    pub fn load(store: &impl KeyValueStore) -> Self {
        let defaults = Self::default();
        let ball_speed = store.load_number(Self::BALL_SPEED_KEY, defaults.ball_speed as f64);
        let ai_speed = store.load_number(Self::AI_SPEED_KEY, defaults.ai_speed as f64);

        let settings = Self {
            ball_speed: clamp_setting(ball_speed),
            ai_speed: clamp_setting(ai_speed),
        };
        log::info!(
            "Loaded settings: ball speed {}, bot difficulty {}",
            settings.ball_speed,
            settings.ai_speed
        );
        settings
    }

    /// Persist both values
    pub fn save(&self, store: &mut impl KeyValueStore) {
        store.save_number(Self::BALL_SPEED_KEY, self.ball_speed as f64);
        store.save_number(Self::AI_SPEED_KEY, self.ai_speed as f64);
    }

    /// Ball speed as a velocity magnitude
    pub fn ball_speed_f32(&self) -> f32 {
        self.ball_speed as f32
    }

    /// Bot paddle step size
    pub fn ai_speed_f32(&self) -> f32 {
        self.ai_speed as f32
    }
}
