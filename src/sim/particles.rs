//! Cosmetic particle bursts
//!
//! Purely visual: nothing here feeds back into scoring, lives or timing.

use std::f32::consts::TAU;

use glam::Vec2;
use rand::Rng;

use super::state::{GameState, Particle};
use crate::consts::*;

/// Spawn a radial burst at an impact point
pub fn burst(state: &mut GameState, at: Vec2, color: &'static str) {
    for _ in 0..PARTICLE_COUNT {
        let angle = state.rng.random_range(0.0..TAU);
        let speed = PARTICLE_SPEED_BASE + state.rng.random::<f32>() * PARTICLE_SPEED_JITTER;
        state.particles.push(Particle {
            pos: at,
            vel: Vec2::new(angle.cos(), angle.sin()) * speed,
            alpha: 1.0,
            life: PARTICLE_LIFE_FRAMES,
            color,
        });
    }
}

/// Advance particles one frame and drop the fully faded ones
pub fn step(state: &mut GameState) {
    for p in state.particles.iter_mut() {
        p.pos += p.vel;
        p.vel *= PARTICLE_DRAG;
        p.alpha -= 1.0 / p.life;
    }
    state.particles.retain(|p| p.alpha > 0.0);
}
