//! Collision resolution and scoring
//!
//! Items are resolved against the player box in existing order, one outcome
//! per item per frame: any resolution removes the item, so later rules never
//! see it again.

use glam::Vec2;
use rand::Rng;

use super::particles;
use super::state::{GameState, ItemKind};
use crate::consts::*;

/// What a resolved catch was, for audio and presentation routing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatchEvent {
    Skill,
    Hazard,
    PowerUp,
}

/// Axis-aligned box overlap test (top-left corners + sizes)
#[inline]
pub fn aabb_overlap(a_pos: Vec2, a_size: Vec2, b_pos: Vec2, b_size: Vec2) -> bool {
    a_pos.x < b_pos.x + b_size.x
        && a_pos.x + a_size.x > b_pos.x
        && a_pos.y < b_pos.y + b_size.y
        && a_pos.y + a_size.y > b_pos.y
}

/// Resolve every live item against the player box. Caught items score,
/// hurt, or boost; items past the bottom edge are discarded silently.
/// Returns the events that fired this frame.
pub fn resolve(state: &mut GameState) -> Vec<CatchEvent> {
    let mut events = Vec::new();
    let items = std::mem::take(&mut state.items);
    let mut kept = Vec::with_capacity(items.len());

    for item in items {
        if aabb_overlap(item.pos, item.size, state.player.pos, state.player.size) {
            let center = item.pos + item.size * 0.5;
            match item.kind {
                ItemKind::Skill(_) => {
                    state.score += SKILL_POINTS * state.combo;
                    state.combo = (state.combo + 1).min(COMBO_MAX);
                    state.combo_timer = COMBO_WINDOW_SECS;
                    particles::burst(state, center, SKILL_COLOR);
                    events.push(CatchEvent::Skill);
                }
                ItemKind::Hazard => {
                    state.lives = state.lives.saturating_sub(1);
                    state.combo = 1;
                    state.combo_timer = 0;
                    particles::burst(state, center, HAZARD_COLOR);
                    events.push(CatchEvent::Hazard);
                }
                ItemKind::PowerUp => {
                    // Fair coin: an extra life or a difficulty relief
                    if state.rng.random_bool(0.5) {
                        state.lives = (state.lives + 1).min(MAX_LIVES);
                    } else {
                        state.difficulty =
                            (state.difficulty - POWER_RELIEF).max(DIFFICULTY_FLOOR);
                    }
                    particles::burst(state, center, POWER_COLOR);
                    events.push(CatchEvent::PowerUp);
                }
            }
            continue;
        }

        if item.pos.y > state.bounds.y + DESPAWN_MARGIN {
            continue; // fell out, no score effect
        }
        kept.push(item);
    }

    state.items = kept;
    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{DifficultyPreset, FallingItem};

    fn fresh(seed: u64) -> GameState {
        GameState::new(DifficultyPreset::Normal, Vec2::new(600.0, 450.0), seed)
    }

    fn item_on_player(state: &GameState, kind: ItemKind) -> FallingItem {
        FallingItem {
            pos: state.player.pos,
            size: Vec2::new(60.0, 28.0),
            vy: 3.0,
            kind,
        }
    }

    #[test]
    fn test_aabb_overlap() {
        let a = Vec2::new(0.0, 0.0);
        let sa = Vec2::new(10.0, 10.0);
        assert!(aabb_overlap(a, sa, Vec2::new(5.0, 5.0), sa));
        assert!(!aabb_overlap(a, sa, Vec2::new(10.0, 0.0), sa)); // touching edges don't overlap
        assert!(!aabb_overlap(a, sa, Vec2::new(0.0, 11.0), sa));
    }

    #[test]
    fn test_skill_catch_scores_by_current_combo() {
        let mut state = fresh(1);
        state.combo = 3;
        state.items.push(item_on_player(&state, ItemKind::Skill(0)));
        let events = resolve(&mut state);
        assert_eq!(events, vec![CatchEvent::Skill]);
        assert_eq!(state.score, 30);
        assert_eq!(state.combo, 4);
        assert_eq!(state.combo_timer, COMBO_WINDOW_SECS);
        assert!(state.items.is_empty());
        assert_eq!(state.particles.len(), PARTICLE_COUNT);
    }

    #[test]
    fn test_combo_caps_at_five() {
        let mut state = fresh(1);
        state.combo = COMBO_MAX;
        state.items.push(item_on_player(&state, ItemKind::Skill(0)));
        resolve(&mut state);
        assert_eq!(state.combo, COMBO_MAX);
        assert_eq!(state.score, SKILL_POINTS * COMBO_MAX);
    }

    #[test]
    fn test_hazard_resets_combo_and_costs_a_life() {
        for prior_combo in 1..=COMBO_MAX {
            let mut state = fresh(2);
            state.combo = prior_combo;
            state.combo_timer = COMBO_WINDOW_SECS;
            state.items.push(item_on_player(&state, ItemKind::Hazard));
            let events = resolve(&mut state);
            assert_eq!(events, vec![CatchEvent::Hazard]);
            assert_eq!(state.lives, START_LIVES - 1);
            assert_eq!(state.combo, 1);
            assert_eq!(state.combo_timer, 0);
        }
    }

    #[test]
    fn test_hazard_never_drops_lives_below_zero() {
        let mut state = fresh(2);
        state.lives = 0;
        state.items.push(item_on_player(&state, ItemKind::Hazard));
        resolve(&mut state);
        assert_eq!(state.lives, 0);
    }

    #[test]
    fn test_power_up_outcomes_are_life_or_relief() {
        // Both branches must show up across seeds, and each is exclusive
        let mut saw_life = false;
        let mut saw_relief = false;
        for seed in 0..32 {
            let mut state = fresh(seed);
            state.difficulty = 3.0;
            state.items.push(item_on_player(&state, ItemKind::PowerUp));
            let events = resolve(&mut state);
            assert_eq!(events, vec![CatchEvent::PowerUp]);
            if state.lives == START_LIVES + 1 {
                saw_life = true;
                assert_eq!(state.difficulty, 3.0);
            } else {
                saw_relief = true;
                assert_eq!(state.lives, START_LIVES);
                assert!((state.difficulty - 2.2).abs() < 1e-4);
            }
        }
        assert!(saw_life && saw_relief);
    }

    #[test]
    fn test_power_up_life_caps_at_five() {
        for seed in 0..32 {
            let mut state = fresh(seed);
            state.lives = MAX_LIVES;
            state.items.push(item_on_player(&state, ItemKind::PowerUp));
            resolve(&mut state);
            assert!(state.lives <= MAX_LIVES);
        }
    }

    #[test]
    fn test_power_up_relief_floors_at_one() {
        for seed in 0..32 {
            let mut state = fresh(seed);
            state.difficulty = 1.2;
            state.items.push(item_on_player(&state, ItemKind::PowerUp));
            resolve(&mut state);
            assert!(state.difficulty >= DIFFICULTY_FLOOR);
        }
    }

    #[test]
    fn test_missed_item_past_bottom_is_discarded() {
        let mut state = fresh(3);
        state.items.push(FallingItem {
            pos: Vec2::new(10.0, state.bounds.y + DESPAWN_MARGIN + 1.0),
            size: Vec2::new(60.0, 28.0),
            vy: 3.0,
            kind: ItemKind::Skill(0),
        });
        let events = resolve(&mut state);
        assert!(events.is_empty());
        assert!(state.items.is_empty());
        assert_eq!(state.score, 0);
        assert_eq!(state.combo, 1);
    }

    #[test]
    fn test_untouched_item_survives() {
        let mut state = fresh(3);
        state.items.push(FallingItem {
            pos: Vec2::new(10.0, 10.0),
            size: Vec2::new(60.0, 28.0),
            vy: 3.0,
            kind: ItemKind::Skill(0),
        });
        resolve(&mut state);
        assert_eq!(state.items.len(), 1);
    }

    #[test]
    fn test_one_outcome_per_item_per_frame() {
        let mut state = fresh(4);
        state.items.push(item_on_player(&state, ItemKind::Skill(0)));
        state.items.push(item_on_player(&state, ItemKind::Skill(1)));
        let events = resolve(&mut state);
        // Both resolve, in order, each exactly once
        assert_eq!(events, vec![CatchEvent::Skill, CatchEvent::Skill]);
        assert_eq!(state.score, 10 + 20); // combo 1 then combo 2
        assert_eq!(state.combo, 3);
    }
}
