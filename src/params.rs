//! Tunable synthesis parameters and named presets.
//!
//! The store is a plain struct read at the moment an effect is triggered,
//! never cached inside a chain, so slider edits take effect on the very
//! next trigger. Presets overwrite a fixed subset of keys atomically.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Keys addressable by slider commands.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Param {
    JumpFreqStart,
    PunchDecay,
    CoinFreqEnd,
    ExplosionIntensity,
    KickFreqStart,
    PowerUpFreqStart,
    LaserFreqStart,
}

/// Current parameter values.
///
/// Defaults are the 8-bit preset. That duplication is deliberate (the
/// factory sound IS the 8-bit preset) and pinned by a test below.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Params {
    pub jump_freq_start: f32,
    pub punch_decay: f32,
    pub coin_freq_end: f32,
    pub explosion_intensity: f32,
    pub kick_freq_start: f32,
    pub power_up_freq_start: f32,
    pub laser_freq_start: f32,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            jump_freq_start: 380.0,
            punch_decay: 0.2,
            coin_freq_end: 1200.0,
            explosion_intensity: 1.0,
            kick_freq_start: 250.0,
            power_up_freq_start: 400.0,
            laser_freq_start: 800.0,
        }
    }
}

impl Params {
    pub fn get(&self, param: Param) -> f32 {
        match param {
            Param::JumpFreqStart => self.jump_freq_start,
            Param::PunchDecay => self.punch_decay,
            Param::CoinFreqEnd => self.coin_freq_end,
            Param::ExplosionIntensity => self.explosion_intensity,
            Param::KickFreqStart => self.kick_freq_start,
            Param::PowerUpFreqStart => self.power_up_freq_start,
            Param::LaserFreqStart => self.laser_freq_start,
        }
    }

    pub fn set(&mut self, param: Param, value: f32) {
        match param {
            Param::JumpFreqStart => self.jump_freq_start = value,
            Param::PunchDecay => self.punch_decay = value,
            Param::CoinFreqEnd => self.coin_freq_end = value,
            Param::ExplosionIntensity => self.explosion_intensity = value,
            Param::KickFreqStart => self.kick_freq_start = value,
            Param::PowerUpFreqStart => self.power_up_freq_start = value,
            Param::LaserFreqStart => self.laser_freq_start = value,
        }
    }
}

/// The named presets.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresetId {
    EightBit,
    Modern,
    Arcade,
}

/// The subset of keys a preset overwrites.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Preset {
    pub jump_freq_start: f32,
    pub punch_decay: f32,
    pub coin_freq_end: f32,
    pub explosion_intensity: f32,
}

impl PresetId {
    pub const ALL: [PresetId; 3] = [PresetId::EightBit, PresetId::Modern, PresetId::Arcade];

    pub fn name(self) -> &'static str {
        match self {
            PresetId::EightBit => "8-bit",
            PresetId::Modern => "modern",
            PresetId::Arcade => "arcade",
        }
    }

    pub fn values(self) -> Preset {
        match self {
            // Classic 8-bit style: square and triangle waves
            PresetId::EightBit => Preset {
                jump_freq_start: 380.0,
                punch_decay: 0.2,
                coin_freq_end: 1200.0,
                explosion_intensity: 1.0,
            },
            // Modern style: sawtooth and sine for a smoother, richer sound
            PresetId::Modern => Preset {
                jump_freq_start: 500.0,
                punch_decay: 0.3,
                coin_freq_end: 1500.0,
                explosion_intensity: 1.5,
            },
            // Arcade style: all square waves for that retro feel
            PresetId::Arcade => Preset {
                jump_freq_start: 300.0,
                punch_decay: 0.15,
                coin_freq_end: 1000.0,
                explosion_intensity: 0.8,
            },
        }
    }

    /// Which preset the current parameters correspond to, judged by the jump
    /// start frequency. Anything that matches neither table is arcade.
    pub fn detect(params: &Params) -> PresetId {
        if params.jump_freq_start == PresetId::EightBit.values().jump_freq_start {
            PresetId::EightBit
        } else if params.jump_freq_start == PresetId::Modern.values().jump_freq_start {
            PresetId::Modern
        } else {
            PresetId::Arcade
        }
    }
}

impl Preset {
    /// Overwrite the preset's keys in `params`, leaving the rest untouched.
    pub fn apply(&self, params: &mut Params) {
        params.jump_freq_start = self.jump_freq_start;
        params.punch_decay = self.punch_decay;
        params.coin_freq_end = self.coin_freq_end;
        params.explosion_intensity = self.explosion_intensity;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_equal_the_8bit_preset() {
        let defaults = Params::default();
        let preset = PresetId::EightBit.values();
        assert_eq!(defaults.jump_freq_start, preset.jump_freq_start);
        assert_eq!(defaults.punch_decay, preset.punch_decay);
        assert_eq!(defaults.coin_freq_end, preset.coin_freq_end);
        assert_eq!(defaults.explosion_intensity, preset.explosion_intensity);
    }

    #[test]
    fn get_set_roundtrip() {
        let mut params = Params::default();
        params.set(Param::CoinFreqEnd, 1_600.0);
        assert_eq!(params.get(Param::CoinFreqEnd), 1_600.0);
        // untouched keys keep their defaults
        assert_eq!(params.get(Param::JumpFreqStart), 380.0);
    }

    #[test]
    fn preset_overwrites_only_its_subset() {
        let mut params = Params::default();
        params.set(Param::KickFreqStart, 320.0);

        PresetId::Modern.values().apply(&mut params);

        assert_eq!(params.jump_freq_start, 500.0);
        assert_eq!(params.punch_decay, 0.3);
        assert_eq!(params.coin_freq_end, 1500.0);
        assert_eq!(params.explosion_intensity, 1.5);
        // outside the preset subset
        assert_eq!(params.kick_freq_start, 320.0);
    }

    #[test]
    fn detect_follows_jump_freq() {
        let mut params = Params::default();
        assert_eq!(PresetId::detect(&params), PresetId::EightBit);

        PresetId::Modern.values().apply(&mut params);
        assert_eq!(PresetId::detect(&params), PresetId::Modern);

        params.set(Param::JumpFreqStart, 432.0);
        assert_eq!(PresetId::detect(&params), PresetId::Arcade);
    }
}
