// note-tone -- render a single musical note into audio
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! Parameters describing a single tone, and their validation.

use crate::error::{Error, Result};
use crate::note::{NoteDesignation, Pitch};
use crate::synth::oscillator::WaveShape;
use crate::synth::tuning::Tuning;

pub const DEFAULT_DURATION: f64 = 0.5;
pub const DEFAULT_WAVEFORM: WaveShape = WaveShape::Sine;
pub const DEFAULT_BLUR: f64 = 0.05;
pub const DEFAULT_DECAY: f64 = 5.0;
pub const DEFAULT_VOLUME: f64 = 0.3;

/// Longest tone that can be rendered, in seconds.
pub const MAX_DURATION: f64 = 10.0;

/// Everything needed to render a tone, as given by the caller.
///
/// # Examples
///
/// ```
/// use note_tone::config::ToneConfig;
/// use note_tone::synth::oscillator::WaveShape;
///
/// let config = ToneConfig::new("C4").with_waveform(WaveShape::Square).with_volume(0.5);
/// assert_eq!(config.duration, 0.5);
/// assert!(config.validate().is_ok());
/// assert!(config.with_duration(0.0).validate().is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ToneConfig {
    pub note: String,
    /// Length in seconds, in `(0, 10]`.
    pub duration: f64,
    pub waveform: WaveShape,
    /// Weight of the current sample in the smoothing filter, in `[0, 1]`.
    pub blur: f64,
    /// Exponential decay rate per second, at least 0.
    pub decay: f64,
    /// Peak amplitude, in `(0, 1]`.
    pub volume: f64,
}

/// A configuration that passed validation.
#[derive(Debug, Clone)]
pub struct ValidTone {
    /// The note as given, trimmed and upper-cased.
    pub label: String,
    pub note: NoteDesignation,
    pub pitch: Pitch,
    /// Fundamental frequency in concert tuning.
    pub frequency: f64,
    pub duration: f64,
    pub waveform: WaveShape,
    pub blur: f64,
    pub decay: f64,
    pub volume: f64,
}

impl ToneConfig {
    /// A configuration for `note` with all other parameters at their defaults.
    pub fn new(note: impl Into<String>) -> Self {
        ToneConfig {
            note: note.into(),
            duration: DEFAULT_DURATION,
            waveform: DEFAULT_WAVEFORM,
            blur: DEFAULT_BLUR,
            decay: DEFAULT_DECAY,
            volume: DEFAULT_VOLUME,
        }
    }

    pub fn with_duration(self, duration: f64) -> Self {
        Self { duration, ..self }
    }

    pub fn with_waveform(self, waveform: WaveShape) -> Self {
        Self { waveform, ..self }
    }

    pub fn with_blur(self, blur: f64) -> Self {
        Self { blur, ..self }
    }

    pub fn with_decay(self, decay: f64) -> Self {
        Self { decay, ..self }
    }

    pub fn with_volume(self, volume: f64) -> Self {
        Self { volume, ..self }
    }

    /// Check all parameters, returning the first violation.
    ///
    /// The numeric parameters are checked before the note.
    pub fn validate(&self) -> Result<ValidTone> {
        // written as negated ranges so that NaN is rejected as well
        if !(self.duration > 0.0 && self.duration <= MAX_DURATION) {
            return Err(Error::parameter(
                "duration",
                self.duration,
                "must be in (0, 10] seconds",
            ));
        }
        if !(self.blur >= 0.0 && self.blur <= 1.0) {
            return Err(Error::parameter("blur", self.blur, "must be in [0, 1]"));
        }
        if !(self.decay >= 0.0 && self.decay.is_finite()) {
            return Err(Error::parameter(
                "decay",
                self.decay,
                "must be finite and non-negative",
            ));
        }
        if !(self.volume > 0.0 && self.volume <= 1.0) {
            return Err(Error::parameter("volume", self.volume, "must be in (0, 1]"));
        }

        let label = self.note.trim().to_uppercase();
        let note = NoteDesignation::parse(&label)?;
        let pitch = note.pitch()?;

        // the phase `2 * pi * f * t` must stay finite for every sample time,
        // which lies below `2 * duration` whenever there is any sample at all
        let frequency = Tuning::default().frequency(pitch);
        if !(4.0 * std::f64::consts::PI * frequency * self.duration).is_finite() {
            return Err(Error::UnsupportedNote { note: label });
        }

        Ok(ValidTone {
            label,
            note,
            pitch,
            frequency,
            duration: self.duration,
            waveform: self.waveform,
            blur: self.blur,
            decay: self.decay,
            volume: self.volume,
        })
    }
}
