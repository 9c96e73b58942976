// note-tone -- render a single musical note into audio
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

use crate::note::*;

/// Defines the tuning of an instrument by assinging a frequency to a certain MIDI note number.
/// This defines the frequencies of all other notes at a standard tuning of 12 half-tones per octave.
///
/// No range is enforced, arbitrarily high or low octaves yield correspondingly extreme frequencies.
///
/// # Examples
///
/// ```
/// use note_tone::note::*;
/// use note_tone::synth::tuning::*;
/// assert_eq!(Tuning::default().frequency(parse_pitch("A4").unwrap()), 440.0);
/// assert_eq!(Tuning::default().frequency(parse_pitch("A3").unwrap()), 220.0);
/// assert_eq!(Tuning::default().frequency(parse_pitch("A5").unwrap()), 880.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Tuning {
    pub reference_midi: i64,
    pub reference_frequency: f64,
}

impl Tuning {
    /// Return the frequency of a pitch relative to this tuning.
    pub fn frequency(&self, pitch: Pitch) -> f64 {
        self.frequency_of_midi(pitch.midi_number())
    }

    /// Return the frequency of a MIDI note number relative to this tuning.
    pub fn frequency_of_midi(&self, midi_number: i64) -> f64 {
        let semitones = (midi_number - self.reference_midi) as f64;
        self.reference_frequency * 2.0f64.powf(semitones / 12.0)
    }
}

/// Default concert tuning, where A4 corresponds to 440 Hz.
impl Default for Tuning {
    fn default() -> Self {
        Tuning {
            reference_midi: 69,
            reference_frequency: 440.0,
        }
    }
}

/// Frequency of a pitch in concert tuning.
pub fn frequency(pitch: Pitch) -> f64 {
    Tuning::default().frequency(pitch)
}

#[cfg(test)]
mod test {
    use super::*;

    fn freq(note: &str) -> f64 {
        frequency(parse_pitch(note).unwrap())
    }

    #[test]
    fn reference_pitches() {
        assert_eq!(freq("A4"), 440.0);
        assert!((freq("C4") - 261.63).abs() < 0.01);
        assert!((freq("Eb4") - 311.13).abs() < 0.01);
    }

    #[test]
    fn enharmonics_are_identical() {
        assert_eq!(freq("Eb4").to_bits(), freq("D#4").to_bits());
        assert_eq!(freq("Gb2").to_bits(), freq("F#2").to_bits());
        assert_eq!(freq("Bb7").to_bits(), freq("A#7").to_bits());
    }

    #[test]
    fn extreme_octaves_are_computed() {
        let low = freq("C0");
        assert!((low - 16.3516).abs() < 1e-3);
        let high = freq("C20");
        assert!(high.is_finite() && high > 1e7);
    }
}
