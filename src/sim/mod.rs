//! Simulation module
//!
//! All gameplay logic lives here. No rendering, DOM or storage dependencies:
//! - One frame per tick, no variable timestep
//! - Seeded RNG only (serves)
//! - Inputs arrive as queued commands, outputs leave as events

pub mod ai;
pub mod physics;
pub mod serve;
pub mod state;
pub mod tick;

pub use ai::move_ai_paddle;
pub use physics::{advance, bounce_angle, normalized_intersect, resolve_paddle, resolve_walls};
pub use serve::{score_point, serve, serve_angle};
pub use state::{Ball, GameEvent, GamePhase, GameState, Paddle, Playfield, Score, Side, Snapshot};
pub use tick::{Command, apply_command, tick};
