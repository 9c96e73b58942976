// note-tone -- render a single musical note into audio
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! Smoothing of raw oscillator output.

/// Single-pole recursive low-pass filter.
///
/// Each output blends the current input with the previous output:
/// `y[i] = blur * x[i] + (1 - blur) * y[i - 1]`, where the first output equals the first input.
///
/// A `blur` of 1 lets the signal pass unchanged, smaller values smooth more strongly.
/// With a `blur` of 0 the first sample is held forever.
///
/// # Example
///
/// ```
/// use note_tone::synth::filter::OnePole;
///
/// let mut filter = OnePole::new(0.5);
/// assert_eq!(filter.step(1.0), 1.0);
/// assert_eq!(filter.step(0.0), 0.5);
/// assert_eq!(filter.step(0.0), 0.25);
/// ```
#[derive(Debug, Clone)]
pub struct OnePole {
    blur: f64,
    previous: Option<f64>,
}

impl OnePole {
    pub fn new(blur: f64) -> Self {
        Self {
            blur,
            previous: None,
        }
    }

    /// Feed the next value through the filter.
    pub fn step(&mut self, input: f64) -> f64 {
        let output = match self.previous {
            None => input,
            Some(previous) => self.blur * input + (1.0 - self.blur) * previous,
        };
        self.previous = Some(output);
        output
    }

    /// Filter a whole buffer in place, strictly in index order.
    pub fn process(&mut self, samples: &mut [f64]) {
        for sample in samples.iter_mut() {
            *sample = self.step(*sample);
        }
    }
}

/// Smooth a fresh buffer with a new filter.
pub fn smooth(samples: &mut [f64], blur: f64) {
    OnePole::new(blur).process(samples)
}
