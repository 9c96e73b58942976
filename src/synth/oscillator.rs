// note-tone -- render a single musical note into audio
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum WaveShape {
    Sine,
    Square,
    Sawtooth,
    Triangle,
}

impl WaveShape {
    pub const ALL: [WaveShape; 4] = [
        WaveShape::Sine,
        WaveShape::Square,
        WaveShape::Sawtooth,
        WaveShape::Triangle,
    ];

    pub fn name(self) -> &'static str {
        match self {
            WaveShape::Sine => "sine",
            WaveShape::Square => "square",
            WaveShape::Sawtooth => "sawtooth",
            WaveShape::Triangle => "triangle",
        }
    }

    /// Evaluate the wave after `cycles` periods, i.e. at `frequency * time`.
    /// All shapes stay within `[-1, 1]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use note_tone::synth::oscillator::WaveShape;
    ///
    /// assert_eq!(WaveShape::Sine.eval(0.0), 0.0);
    /// assert_eq!(WaveShape::Square.eval(0.25), 1.0);
    /// assert_eq!(WaveShape::Square.eval(0.0), 0.0);
    /// assert_eq!(WaveShape::Sawtooth.eval(0.25), 0.5);
    /// assert_eq!(WaveShape::Triangle.eval(0.0), -1.0);
    /// assert_eq!(WaveShape::Triangle.eval(0.5), 1.0);
    /// ```
    pub fn eval(self, cycles: f64) -> f64 {
        use std::f64::consts::PI;
        match self {
            WaveShape::Sine => (2.0 * PI * cycles).sin(),
            WaveShape::Square => signum((2.0 * PI * cycles).sin()),
            WaveShape::Sawtooth => 2.0 * (cycles - (0.5 + cycles).floor()),
            WaveShape::Triangle => 2.0 * (2.0 * (cycles - (0.5 + cycles).floor())).abs() - 1.0,
        }
    }
}

/// Like `f64::signum`, but zero (of either sign) maps to zero.
fn signum(x: f64) -> f64 {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else {
        0.0
    }
}

impl FromStr for WaveShape {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        WaveShape::ALL
            .iter()
            .copied()
            .find(|shape| shape.name() == normalized)
            .ok_or_else(|| {
                Error::parameter(
                    "waveform",
                    normalized,
                    "must be one of sine, square, sawtooth, triangle",
                )
            })
    }
}

impl fmt::Display for WaveShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An oscillator sampling a wave of some shape at a fixed sample rate.
///
/// Every sample is a pure function of its index, there is no accumulated phase.
#[derive(Debug, Clone)]
pub struct Oscillator {
    shape: WaveShape,
    sample_rate: f64,
    frequency: f64,
}

impl Oscillator {
    pub fn new(shape: WaveShape, sample_rate: f64, frequency: f64) -> Self {
        Self {
            shape,
            sample_rate,
            frequency,
        }
    }

    /// The sample at `t = index / sample_rate`.
    pub fn sample(&self, index: usize) -> f64 {
        let t = index as f64 / self.sample_rate;
        self.shape.eval(self.frequency * t)
    }

    /// Generate the first `sample_count` samples, starting at `t = 0`.
    pub fn render(&self, sample_count: usize) -> Vec<f64> {
        (0..sample_count).map(|i| self.sample(i)).collect()
    }
}
