//! Catch My Skills - a falling-item catcher arcade mini-game
//!
//! Core modules:
//! - `sim`: deterministic simulation (spawning, movement, collision, scoring)
//! - `engine`: session lifecycle and the presentation-facing surface
//! - `platform`: storage abstraction (LocalStorage on web)
//! - `audio`: procedural Web Audio beeps

pub mod audio;
pub mod engine;
pub mod platform;
pub mod prefs;
pub mod sim;

pub use engine::{Engine, FrameView};
pub use sim::{DifficultyPreset, GameState};

/// Game configuration constants
pub mod consts {
    /// Default play area in px (4:3, matching the canvas cap)
    pub const PLAY_WIDTH: f32 = 600.0;
    pub const PLAY_HEIGHT: f32 = 450.0;

    /// Session length in seconds
    pub const SESSION_SECS: u32 = 60;
    /// Lives at session start
    pub const START_LIVES: u8 = 3;
    /// Lives cap (power-ups cannot push past this)
    pub const MAX_LIVES: u8 = 5;

    /// Combo multiplier cap
    pub const COMBO_MAX: u32 = 5;
    /// Seconds of inactivity before the combo resets
    pub const COMBO_WINDOW_SECS: u32 = 3;
    /// Base score per skill catch, multiplied by the combo
    pub const SKILL_POINTS: u32 = 10;

    /// Difficulty added per countdown second
    pub const DIFFICULTY_RAMP: f32 = 0.03;
    /// Difficulty removed by the slow-down power-up
    pub const POWER_RELIEF: f32 = 0.8;
    /// The relief never drops difficulty below this
    pub const DIFFICULTY_FLOOR: f32 = 1.0;

    /// Spawn pacing: interval = max(FLOOR, BASE - difficulty * SCALE), in ms
    pub const SPAWN_BASE_MS: f64 = 900.0;
    pub const SPAWN_SCALE_MS: f64 = 140.0;
    pub const SPAWN_FLOOR_MS: f64 = 250.0;

    /// Item kind weights, resolved from one uniform draw
    pub const HAZARD_CHANCE: f32 = 0.15;
    pub const POWER_CHANCE: f32 = 0.10;

    /// Item width shrinks with difficulty down to a minimum; height is fixed
    pub const ITEM_WIDTH_BASE: f32 = 90.0;
    pub const ITEM_WIDTH_SCALE: f32 = 10.0;
    pub const ITEM_WIDTH_MIN: f32 = 44.0;
    pub const ITEM_HEIGHT: f32 = 28.0;
    /// Fall speed: BASE + uniform(0, JITTER) + difficulty, px per frame
    pub const FALL_SPEED_BASE: f32 = 2.0;
    pub const FALL_SPEED_JITTER: f32 = 2.0;
    /// Items this far past the bottom edge are discarded
    pub const DESPAWN_MARGIN: f32 = 40.0;

    /// Player box side as a fraction of the smaller play dimension
    pub const PLAYER_SIZE_FRAC: f32 = 0.08;
    /// Keyboard movement step, px per frame per held axis
    pub const PLAYER_SPEED: f32 = 6.0;
    /// Fraction of the remaining distance covered toward the pointer each frame
    pub const POINTER_EASE: f32 = 0.2;
    /// Gap between the starting player box and the bottom edge
    pub const PLAYER_BOTTOM_GAP: f32 = 10.0;

    /// Particles per burst
    pub const PARTICLE_COUNT: usize = 10;
    /// Particle lifetime in frames (alpha fades linearly over this)
    pub const PARTICLE_LIFE_FRAMES: f32 = 30.0;
    /// Per-frame velocity damping
    pub const PARTICLE_DRAG: f32 = 0.98;
    /// Radial burst speed: BASE + uniform(0, JITTER), px per frame
    pub const PARTICLE_SPEED_BASE: f32 = 2.0;
    pub const PARTICLE_SPEED_JITTER: f32 = 2.0;

    /// Burst colors per event
    pub const SKILL_COLOR: &str = "#22c55e";
    pub const HAZARD_COLOR: &str = "#ef4444";
    pub const POWER_COLOR: &str = "#f59e0b";

    /// Event tones (Hz), their length (seconds) and gain
    pub const TONE_SKILL_HZ: f32 = 880.0;
    pub const TONE_HAZARD_HZ: f32 = 220.0;
    pub const TONE_POWER_HZ: f32 = 1320.0;
    pub const TONE_SECS: f64 = 0.12;
    pub const TONE_GAIN: f32 = 0.04;

    /// Closing message tiers (inclusive lower bounds, highest wins)
    pub const TIER_AMAZING: u32 = 250;
    pub const TIER_GREAT: u32 = 150;
    pub const TIER_NICE: u32 = 80;
}
