//! Audio system using Web Audio API
//!
//! Procedurally generated sound effects - no external files needed. Audio is
//! strictly best-effort: a missing or broken AudioContext degrades to
//! silence and the game keeps running.

use web_sys::{AudioContext, GainNode, OscillatorNode, OscillatorType};

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Bird flapped
    Jump,
    /// Obstacle cleared
    Score,
    /// Run ended
    GameOver,
    /// Run ended with a new best score
    NewBest,
}

/// Audio manager for the game
pub struct AudioManager {
    ctx: Option<AudioContext>,
    volume: f32,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioManager {
    pub fn new() -> Self {
        // May fail outside a secure context; the game stays playable muted
        let ctx = AudioContext::new().ok();
        if ctx.is_none() {
            log::warn!("Failed to create AudioContext - audio disabled");
        }
        Self { ctx, volume: 0.8 }
    }

    /// Set the effective volume (0.0 mutes entirely)
    pub fn set_volume(&mut self, volume: f32) {
        self.volume = volume.clamp(0.0, 1.0);
    }

    /// Play a sound effect
    pub fn play(&self, effect: SoundEffect) {
        if self.volume <= 0.0 {
            return;
        }

        let Some(ctx) = &self.ctx else { return };

        // Resume context if suspended (browsers require a user gesture)
        if ctx.state() == web_sys::AudioContextState::Suspended {
            let _ = ctx.resume();
        }

        match effect {
            SoundEffect::Jump => self.play_jump(ctx),
            SoundEffect::Score => self.play_score(ctx),
            SoundEffect::GameOver => self.play_game_over(ctx),
            SoundEffect::NewBest => self.play_new_best(ctx),
        }
    }

    // === Sound generators ===

    /// Create an oscillator with gain envelope
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

    /// One oscillator note with an exponential decay envelope
    fn play_note(
        &self,
        ctx: &AudioContext,
        freq: f32,
        osc_type: OscillatorType,
        gain_level: f32,
        start_offset: f64,
        duration: f64,
    ) {
        let Some((osc, gain)) = self.create_osc(ctx, freq, osc_type) else {
            return;
        };
        let t = ctx.current_time() + start_offset;

        gain.gain().set_value_at_time(self.volume * gain_level, t).ok();
        gain.gain()
            .exponential_ramp_to_value_at_time(0.01, t + duration)
            .ok();

        osc.start_with_when(t).ok();
        osc.stop_with_when(t + duration).ok();
    }

    /// Flap - short square blip
    fn play_jump(&self, ctx: &AudioContext) {
        self.play_note(ctx, 520.0, OscillatorType::Square, 0.2, 0.0, 0.1);
    }

    /// Score - bright sine ping
    fn play_score(&self, ctx: &AudioContext) {
        self.play_note(ctx, 800.0, OscillatorType::Sine, 0.25, 0.0, 0.15);
    }

    /// Game over - low sawtooth groan
    fn play_game_over(&self, ctx: &AudioContext) {
        self.play_note(ctx, 150.0, OscillatorType::Sawtooth, 0.3, 0.0, 0.4);
    }

    /// New best score - rising two-note jingle after the crash
    fn play_new_best(&self, ctx: &AudioContext) {
        self.play_note(ctx, 523.0, OscillatorType::Sine, 0.25, 0.45, 0.12);
        self.play_note(ctx, 784.0, OscillatorType::Sine, 0.25, 0.6, 0.2);
    }
}
