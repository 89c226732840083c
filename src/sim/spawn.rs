//! Falling-item spawner
//!
//! Spawn pacing shrinks as difficulty rises, down to a hard floor so the
//! field never becomes unplayably dense.

use glam::Vec2;
use rand::Rng;

use super::state::{FallingItem, GameState, ItemKind};
use crate::consts::*;

/// Interval between spawns (ms) at a given difficulty
#[inline]
pub fn spawn_interval_ms(difficulty: f32) -> f64 {
    (SPAWN_BASE_MS - difficulty as f64 * SPAWN_SCALE_MS).max(SPAWN_FLOOR_MS)
}

/// Spawn at most one item if the interval has elapsed since the last spawn.
/// `skill_count` is the length of the label list skill items index into.
pub fn maybe_spawn(state: &mut GameState, now_ms: f64, skill_count: usize) {
    if now_ms - state.last_spawn_ms < spawn_interval_ms(state.difficulty) {
        return;
    }
    state.last_spawn_ms = now_ms;

    // One draw decides the kind: bottom slice hazard, top slice power-up
    let roll: f32 = state.rng.random();
    let kind = if roll < HAZARD_CHANCE {
        ItemKind::Hazard
    } else if roll >= 1.0 - POWER_CHANCE {
        ItemKind::PowerUp
    } else {
        ItemKind::Skill(state.rng.random_range(0..skill_count.max(1)))
    };

    let w = (ITEM_WIDTH_BASE - state.difficulty * ITEM_WIDTH_SCALE).max(ITEM_WIDTH_MIN);
    let x = state.rng.random_range(0.0..(state.bounds.x - w).max(1.0));
    let vy = FALL_SPEED_BASE + state.rng.random::<f32>() * FALL_SPEED_JITTER + state.difficulty;

    state.items.push(FallingItem {
        pos: Vec2::new(x, -ITEM_HEIGHT),
        size: Vec2::new(w, ITEM_HEIGHT),
        vy,
        kind,
    });
}
