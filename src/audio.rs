//! Audio system using the Web Audio API
//!
//! Procedurally generated beeps - no sound files. Every call is
//! fire-and-forget: a missing or failing audio backend never reaches the
//! simulation.

#[cfg(target_arch = "wasm32")]
use web_sys::{AudioContext, GainNode, OscillatorNode, OscillatorType};

use crate::consts::*;
use crate::sim::CatchEvent;

/// Audio manager for the game
pub struct AudioManager {
    #[cfg(target_arch = "wasm32")]
    ctx: Option<AudioContext>,
    muted: bool,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioManager {
    #[cfg(target_arch = "wasm32")]
    pub fn new() -> Self {
        // May fail outside a secure context
        let ctx = AudioContext::new().ok();
        if ctx.is_none() {
            log::warn!("Failed to create AudioContext - audio disabled");
        }
        Self { ctx, muted: false }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn new() -> Self {
        Self { muted: false }
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    pub fn muted(&self) -> bool {
        self.muted
    }

    /// Play the tone for a catch event
    pub fn play(&self, event: CatchEvent) {
        let freq = match event {
            CatchEvent::Skill => TONE_SKILL_HZ,
            CatchEvent::Hazard => TONE_HAZARD_HZ,
            CatchEvent::PowerUp => TONE_POWER_HZ,
        };
        self.beep(freq, TONE_SECS);
    }

    /// Fire-and-forget sine beep with a short fade-out envelope
    #[cfg(target_arch = "wasm32")]
    pub fn beep(&self, freq: f32, secs: f64) {
        if self.muted {
            return;
        }
        let Some(ctx) = &self.ctx else { return };

        // Resume context if suspended (browsers require a user gesture)
        if ctx.state() == web_sys::AudioContextState::Suspended {
            let _ = ctx.resume();
        }

        let Some((osc, gain)) = self.create_osc(ctx, freq, OscillatorType::Sine) else {
            return;
        };
        let t = ctx.current_time();

        gain.gain().set_value_at_time(TONE_GAIN, t).ok();
        gain.gain()
            .exponential_ramp_to_value_at_time(0.001, t + secs)
            .ok();

        osc.start().ok();
        osc.stop_with_when(t + secs).ok();
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn beep(&self, _freq: f32, _secs: f64) {}

    /// Create an oscillator wired through a gain node
    #[cfg(target_arch = "wasm32")]
    fn create_osc(
        &self,
        ctx: &AudioContext,
        freq: f32,
        osc_type: OscillatorType,
    ) -> Option<(OscillatorNode, GainNode)> {
        let osc = ctx.create_oscillator().ok()?;
        let gain = ctx.create_gain().ok()?;

        osc.set_type(osc_type);
        osc.frequency().set_value(freq);
        osc.connect_with_audio_node(&gain).ok()?;
        gain.connect_with_audio_node(&ctx.destination()).ok()?;

        Some((osc, gain))
    }
}
