//! Session orchestration
//!
//! Owns the live session, the persisted high score and mute flag, and the
//! audio surface. The presentation layer's two timers call `on_frame` and
//! `on_second`; both check the disposal and lifecycle flags up front, so a
//! torn-down engine never mutates a discarded session.

use glam::Vec2;
use serde::Serialize;

use crate::audio::AudioManager;
use crate::consts::*;
use crate::platform::KvStore;
use crate::prefs;
use crate::sim::{self, DifficultyPreset, Dir, GameState, ItemKind, Particle};

/// Closing messages, highest tier first
const MSG_AMAZING: &str = "\u{1f31f} Amazing! You'd make a great addition to any development team!";
const MSG_GREAT: &str = "\u{1f3af} Great job! Ready to explore the projects below!";
const MSG_NICE: &str = "\u{1f44d} Nice run! Check out more of my work below.";
const MSG_THANKS: &str = "\u{1f3ae} Thanks for playing! Scroll to see real projects.";

/// Tiered closing message; the highest threshold met wins (inclusive)
pub fn closing_message(score: u32) -> &'static str {
    if score >= TIER_AMAZING {
        MSG_AMAZING
    } else if score >= TIER_GREAT {
        MSG_GREAT
    } else if score >= TIER_NICE {
        MSG_NICE
    } else {
        MSG_THANKS
    }
}

/// One live item as the presentation layer sees it
#[derive(Debug, Clone, Serialize)]
pub struct ItemView<'a> {
    pub pos: Vec2,
    pub size: Vec2,
    pub kind: ItemKind,
    pub label: Option<&'a str>,
}

/// Redraw snapshot handed to the presentation adapter each frame
#[derive(Debug, Clone, Serialize)]
pub struct FrameView<'a> {
    pub player_pos: Vec2,
    pub player_size: Vec2,
    pub items: Vec<ItemView<'a>>,
    pub particles: &'a [Particle],
}

/// The game engine: session lifecycle plus the read-only surface an
/// external presentation layer displays.
pub struct Engine {
    state: Option<GameState>,
    skills: Vec<String>,
    store: Box<dyn KvStore>,
    audio: AudioManager,
    bounds: Vec2,
    high_score: u32,
    muted: bool,
    message: Option<&'static str>,
    disposed: bool,
}

impl Engine {
    /// Build an engine over a skill-label list and a persistence surface.
    /// The stored high score and mute preference are read once, up front.
    pub fn new(skills: Vec<String>, store: Box<dyn KvStore>) -> Self {
        let high_score = prefs::load_high_score(store.as_ref());
        let muted = prefs::load_muted(store.as_ref());
        let mut audio = AudioManager::new();
        audio.set_muted(muted);
        Self {
            state: None,
            skills,
            store,
            audio,
            bounds: Vec2::new(PLAY_WIDTH, PLAY_HEIGHT),
            high_score,
            muted,
            message: None,
            disposed: false,
        }
    }

    /// Resize the play area. A live session adopts the new bounds; the
    /// player box gets re-clamped on its next movement step.
    pub fn set_bounds(&mut self, width: f32, height: f32) {
        self.bounds = Vec2::new(width.max(1.0), height.max(1.0));
        if let Some(state) = &mut self.state {
            state.bounds = self.bounds;
        }
    }

    /// Start a fresh session, replacing any session already in flight.
    /// `seed` makes every random draw of the run reproducible.
    pub fn start(&mut self, preset: DifficultyPreset, seed: u64) {
        if self.disposed {
            return;
        }
        self.message = None;
        self.state = Some(GameState::new(preset, self.bounds, seed));
        log::info!("session started ({}, seed {})", preset.as_str(), seed);
    }

    /// Toggle pause. No-op unless a session is running.
    pub fn toggle_pause(&mut self) {
        if self.disposed {
            return;
        }
        if let Some(state) = &mut self.state {
            if state.running {
                state.paused = !state.paused;
            }
        }
    }

    /// Finish the session: stop the simulation, settle the high score
    /// exactly once, pick the closing message. Safe to call repeatedly.
    pub fn end(&mut self) {
        if self.disposed {
            return;
        }
        let Some(state) = &mut self.state else { return };
        if !state.running {
            return;
        }
        state.running = false;

        let final_score = state.score;
        if final_score > self.high_score {
            self.high_score = final_score;
            prefs::save_high_score(self.store.as_ref(), final_score);
        }
        self.message = Some(closing_message(final_score));
        log::info!("session ended, score {}", final_score);
    }

    /// Tear down. Both timer callbacks become no-ops from here on.
    pub fn dispose(&mut self) {
        self.disposed = true;
        self.state = None;
    }

    /// 1 Hz countdown tick
    pub fn on_second(&mut self) {
        if self.disposed {
            return;
        }
        let Some(state) = &mut self.state else { return };
        if !state.running {
            return;
        }
        if sim::second_tick(state) {
            self.end();
        }
    }

    /// Per-frame simulation step; routes catch events to the audio surface
    pub fn on_frame(&mut self, now_ms: f64) {
        if self.disposed {
            return;
        }
        let Some(state) = &mut self.state else { return };
        let events = sim::frame_step(state, now_ms, self.skills.len());
        for event in events {
            self.audio.play(event);
        }
    }

    /// Toggle and persist the mute preference
    pub fn toggle_mute(&mut self) {
        if self.disposed {
            return;
        }
        self.muted = !self.muted;
        self.audio.set_muted(self.muted);
        prefs::save_muted(self.store.as_ref(), self.muted);
    }

    /// Latest directional-key state from the input surface
    pub fn set_key(&mut self, dir: Dir, held: bool) {
        if let Some(state) = &mut self.state {
            state.input.set_held(dir, held);
        }
    }

    /// Latest pointer/touch position (play-area space), or None when released
    pub fn set_pointer(&mut self, pos: Option<Vec2>) {
        if let Some(state) = &mut self.state {
            state.input.pointer = pos;
        }
    }

    // --- read-only surface for the presentation layer ---

    pub fn score(&self) -> u32 {
        self.state.as_ref().map_or(0, |s| s.score)
    }

    pub fn lives(&self) -> u8 {
        self.state.as_ref().map_or(START_LIVES, |s| s.lives)
    }

    pub fn time_left(&self) -> u32 {
        self.state.as_ref().map_or(SESSION_SECS, |s| s.time_left)
    }

    pub fn combo(&self) -> u32 {
        self.state.as_ref().map_or(1, |s| s.combo)
    }

    pub fn difficulty(&self) -> f32 {
        self.state.as_ref().map_or(1.0, |s| s.difficulty)
    }

    pub fn is_running(&self) -> bool {
        self.state.as_ref().is_some_and(|s| s.running)
    }

    pub fn is_paused(&self) -> bool {
        self.state.as_ref().is_some_and(|s| s.running && s.paused)
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn muted(&self) -> bool {
        self.muted
    }

    /// Closing message of the most recently ended session
    pub fn message(&self) -> Option<&'static str> {
        self.message
    }

    pub fn skills(&self) -> &[String] {
        &self.skills
    }

    /// Snapshot for the presentation adapter's redraw
    pub fn frame(&self) -> Option<FrameView<'_>> {
        let state = self.state.as_ref()?;
        let items = state
            .items
            .iter()
            .map(|item| ItemView {
                pos: item.pos,
                size: item.size,
                kind: item.kind,
                label: match item.kind {
                    ItemKind::Skill(i) => self.skills.get(i).map(String::as_str),
                    ItemKind::Hazard => Some("Bug"),
                    ItemKind::PowerUp => Some("Power"),
                },
            })
            .collect();
        Some(FrameView {
            player_pos: state.player.pos,
            player_size: state.player.size,
            items,
            particles: &state.particles,
        })
    }
}
