//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Per-frame step and 1 Hz countdown tick only, in a fixed internal order
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod movement;
pub mod particles;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{CatchEvent, aabb_overlap};
pub use spawn::spawn_interval_ms;
pub use state::{
    DifficultyPreset, Dir, FallingItem, GameState, InputState, ItemKind, Particle, Player,
};
pub use tick::{frame_step, second_tick};
