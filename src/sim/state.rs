//! Session state and core simulation types
//!
//! Everything a session mutates per frame/tick lives here. The only source
//! of randomness is the seeded RNG owned by the state.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Difficulty presets selectable before a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DifficultyPreset {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl DifficultyPreset {
    /// Starting difficulty multiplier
    pub fn multiplier(&self) -> f32 {
        match self {
            DifficultyPreset::Easy => 0.6,
            DifficultyPreset::Normal => 1.0,
            DifficultyPreset::Hard => 1.4,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DifficultyPreset::Easy => "easy",
            DifficultyPreset::Normal => "normal",
            DifficultyPreset::Hard => "hard",
        }
    }

    /// Unknown strings default to Normal rather than failing
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "easy" => DifficultyPreset::Easy,
            "hard" => DifficultyPreset::Hard,
            _ => DifficultyPreset::Normal,
        }
    }
}

/// What a falling item is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemKind {
    /// Index into the engine's skill-label list
    Skill(usize),
    Hazard,
    PowerUp,
}

/// A falling item entity
#[derive(Debug, Clone)]
pub struct FallingItem {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Downward speed, px per frame
    pub vy: f32,
    pub kind: ItemKind,
}

/// The player's catch box (top-left corner + size)
#[derive(Debug, Clone)]
pub struct Player {
    pub pos: Vec2,
    pub size: Vec2,
}

/// A particle for visual effects; never feeds back into game state
#[derive(Debug, Clone, Serialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Fades linearly from 1.0; the particle dies at 0
    pub alpha: f32,
    /// Lifetime in frames, fixed at spawn
    pub life: f32,
    pub color: &'static str,
}

/// Direction keys the simulation understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dir {
    Left,
    Right,
    Up,
    Down,
}

/// Held directional keys and the active pointer - latest state only,
/// the simulation never waits on input
#[derive(Debug, Clone, Copy, Default)]
pub struct InputState {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    /// Active pointer/touch position in play-area space; overrides keys
    pub pointer: Option<Vec2>,
}

impl InputState {
    pub fn set_held(&mut self, dir: Dir, held: bool) {
        match dir {
            Dir::Left => self.left = held,
            Dir::Right => self.right = held,
            Dir::Up => self.up = held,
            Dir::Down => self.down = held,
        }
    }
}

/// Complete session state for one playthrough
#[derive(Clone)]
pub struct GameState {
    pub running: bool,
    pub paused: bool,
    pub score: u32,
    /// Clamped to [0, MAX_LIVES]
    pub lives: u8,
    /// Seconds remaining, counts down from SESSION_SECS
    pub time_left: u32,
    /// Ramps up while running and unpaused; presets may seed it below 1.0
    pub difficulty: f32,
    /// Score multiplier in [1, COMBO_MAX]
    pub combo: u32,
    /// Seconds left in the combo window; combo resets to 1 when it runs out
    pub combo_timer: u32,
    pub player: Player,
    pub items: Vec<FallingItem>,
    pub particles: Vec<Particle>,
    pub input: InputState,
    /// Timestamp (ms) of the most recent spawn
    pub last_spawn_ms: f64,
    /// Play area (width, height)
    pub bounds: Vec2,
    pub rng: Pcg32,
}

impl GameState {
    /// Fresh session: full time, starting lives, combo 1, player box
    /// bottom-centered and sized from the play area.
    pub fn new(preset: DifficultyPreset, bounds: Vec2, seed: u64) -> Self {
        let side = (bounds.x.min(bounds.y) * PLAYER_SIZE_FRAC).floor();
        let player = Player {
            pos: Vec2::new(
                (bounds.x - side) / 2.0,
                bounds.y - side - PLAYER_BOTTOM_GAP,
            ),
            size: Vec2::splat(side),
        };
        Self {
            running: true,
            paused: false,
            score: 0,
            lives: START_LIVES,
            time_left: SESSION_SECS,
            difficulty: preset.multiplier(),
            combo: 1,
            combo_timer: 0,
            player,
            items: Vec::new(),
            particles: Vec::new(),
            input: InputState::default(),
            last_spawn_ms: 0.0,
            bounds,
            rng: Pcg32::seed_from_u64(seed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_session_defaults() {
        let state = GameState::new(DifficultyPreset::Normal, Vec2::new(600.0, 450.0), 1);
        assert!(state.running);
        assert!(!state.paused);
        assert_eq!(state.score, 0);
        assert_eq!(state.lives, START_LIVES);
        assert_eq!(state.time_left, SESSION_SECS);
        assert_eq!(state.combo, 1);
        assert!(state.items.is_empty());
    }

    #[test]
    fn test_preset_multipliers() {
        assert_eq!(DifficultyPreset::Easy.multiplier(), 0.6);
        assert_eq!(DifficultyPreset::Normal.multiplier(), 1.0);
        assert_eq!(DifficultyPreset::Hard.multiplier(), 1.4);
    }

    #[test]
    fn test_preset_from_str_defaults_to_normal() {
        assert_eq!(DifficultyPreset::from_str("easy"), DifficultyPreset::Easy);
        assert_eq!(DifficultyPreset::from_str("HARD"), DifficultyPreset::Hard);
        assert_eq!(DifficultyPreset::from_str("???"), DifficultyPreset::Normal);
    }

    #[test]
    fn test_player_starts_bottom_centered() {
        let bounds = Vec2::new(600.0, 450.0);
        let state = GameState::new(DifficultyPreset::Normal, bounds, 1);
        let side = (450.0_f32 * PLAYER_SIZE_FRAC).floor();
        assert_eq!(state.player.size, Vec2::splat(side));
        assert_eq!(state.player.pos.x, (bounds.x - side) / 2.0);
        assert_eq!(state.player.pos.y, bounds.y - side - PLAYER_BOTTOM_GAP);
    }
}
