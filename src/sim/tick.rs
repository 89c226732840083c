//! Frame and countdown orchestration
//!
//! Two independent cadences drive a session: the per-frame step (spawn ->
//! move -> collide -> particles, always in that order) and the 1 Hz countdown
//! tick (time, difficulty ramp, combo window, end condition). Both bail out
//! up front on the shared running/paused flags, so a paused session is
//! frozen on every axis at once.

use super::collision::{self, CatchEvent};
use super::movement;
use super::particles;
use super::spawn;
use super::state::GameState;
use crate::consts::*;

/// Advance the session one animation frame.
/// `now_ms` is the frame timestamp the spawner paces itself against.
pub fn frame_step(state: &mut GameState, now_ms: f64, skill_count: usize) -> Vec<CatchEvent> {
    if !state.running || state.paused {
        return Vec::new();
    }

    spawn::maybe_spawn(state, now_ms, skill_count);
    movement::move_player(state);
    movement::move_items(state);
    let events = collision::resolve(state);
    particles::step(state);
    events
}

/// One countdown tick: time down, difficulty up, combo window down.
/// Returns true when the session should end (time or lives exhausted).
pub fn second_tick(state: &mut GameState) -> bool {
    if !state.running || state.paused {
        return false;
    }

    state.time_left = state.time_left.saturating_sub(1);
    state.difficulty += DIFFICULTY_RAMP;

    if state.combo_timer > 0 {
        state.combo_timer -= 1;
    }
    if state.combo_timer == 0 {
        state.combo = 1;
    }

    state.time_left == 0 || state.lives == 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{DifficultyPreset, Dir, ItemKind};
    use glam::Vec2;

    fn fresh(seed: u64) -> GameState {
        GameState::new(DifficultyPreset::Normal, Vec2::new(600.0, 450.0), seed)
    }

    #[test]
    fn test_second_tick_counts_down_and_ramps() {
        let mut state = fresh(1);
        assert!(!second_tick(&mut state));
        assert_eq!(state.time_left, SESSION_SECS - 1);
        assert!((state.difficulty - (1.0 + DIFFICULTY_RAMP)).abs() < 1e-5);
    }

    #[test]
    fn test_pause_suppresses_both_cadences() {
        let mut state = fresh(1);
        state.paused = true;

        assert!(!second_tick(&mut state));
        assert_eq!(state.time_left, SESSION_SECS);
        assert_eq!(state.difficulty, 1.0);

        let events = frame_step(&mut state, 10_000.0, 4);
        assert!(events.is_empty());
        assert!(state.items.is_empty());
    }

    #[test]
    fn test_end_condition_only_observed_by_countdown() {
        let mut state = fresh(1);
        state.lives = 0;
        // The frame loop never ends the session itself
        frame_step(&mut state, 10_000.0, 4);
        assert!(state.running);
        // The countdown tick does
        assert!(second_tick(&mut state));
    }

    #[test]
    fn test_time_zero_ends_session() {
        let mut state = fresh(1);
        state.time_left = 1;
        assert!(second_tick(&mut state));
        assert_eq!(state.time_left, 0);
    }

    #[test]
    fn test_end_condition_deferred_while_paused() {
        let mut state = fresh(1);
        state.time_left = 1;
        state.paused = true;
        assert!(!second_tick(&mut state));
        assert_eq!(state.time_left, 1);

        state.paused = false;
        assert!(second_tick(&mut state));
    }

    #[test]
    fn test_combo_window_decay() {
        let mut state = fresh(1);
        state.combo = 4;
        state.combo_timer = 2;

        assert!(!second_tick(&mut state));
        assert_eq!(state.combo, 4); // window still open
        assert!(!second_tick(&mut state));
        assert_eq!(state.combo, 1); // window ran out
        assert_eq!(state.combo_timer, 0);
    }

    #[test]
    fn test_frame_order_spawns_then_moves_then_resolves() {
        let mut state = fresh(9);
        // Park an item directly above the player so this frame's movement
        // drops it into the box and collision removes it.
        let above = state.player.pos - Vec2::new(0.0, 20.0);
        state.items.push(crate::sim::FallingItem {
            pos: above,
            size: Vec2::new(60.0, 28.0),
            vy: 25.0,
            kind: ItemKind::Skill(0),
        });
        state.last_spawn_ms = 0.0;

        let events = frame_step(&mut state, 10_000.0, 4);
        assert_eq!(events, vec![CatchEvent::Skill]);
        assert_eq!(state.score, SKILL_POINTS);
        // A fresh spawn happened this frame as well
        assert_eq!(state.items.len(), 1);
        assert_eq!(state.last_spawn_ms, 10_000.0);
    }

    #[test]
    fn test_determinism_same_seed_same_run() {
        let mut a = fresh(4242);
        let mut b = fresh(4242);
        a.input.set_held(Dir::Left, true);
        b.input.set_held(Dir::Left, true);

        let mut now = 0.0;
        for _ in 0..10 {
            for _ in 0..60 {
                now += 16.0;
                frame_step(&mut a, now, 4);
                frame_step(&mut b, now, 4);
            }
            second_tick(&mut a);
            second_tick(&mut b);
        }

        assert_eq!(a.score, b.score);
        assert_eq!(a.lives, b.lives);
        assert_eq!(a.items.len(), b.items.len());
        assert_eq!(a.player.pos, b.player.pos);
        assert_eq!(a.combo, b.combo);
    }
}
