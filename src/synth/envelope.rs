/// An exponentially decaying envelope, scaled by a constant volume.
/// The amplitude at `t` seconds is `volume * exp(-decay * t)`.
///
/// A `decay` of zero keeps the amplitude constant at `volume`.
///
/// # Example
///
/// ```
/// use note_tone::synth::envelope::*;
/// let e = ExponentialDecay {
///     decay: 2.0,
///     volume: 0.5,
/// };
/// assert_eq!(e.eval(0.0), 0.5);
/// assert!((e.eval(0.5) - 0.5 * (-1.0f64).exp()).abs() < 1e-12);
///
/// let flat = ExponentialDecay { decay: 0.0, volume: 0.3 };
/// assert_eq!(flat.eval(7.0), 0.3);
/// ```
#[derive(Debug, Clone)]
pub struct ExponentialDecay {
    /// Rate of decay per second, never negative.
    pub decay: f64,
    /// Amplitude at `t = 0`.
    pub volume: f64,
}

impl ExponentialDecay {
    /// Evaluate the envelope curve at this point in time.
    pub fn eval(&self, t: f64) -> f64 {
        (-self.decay * t).exp() * self.volume
    }

    /// Multiply each sample with the envelope, where sample `i` lies at `i / sample_rate`.
    pub fn apply(&self, samples: &mut [f64], sample_rate: f64) {
        for (i, sample) in samples.iter_mut().enumerate() {
            let t = i as f64 / sample_rate;
            *sample *= self.eval(t);
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn flat_envelope_only_scales() {
        let e = ExponentialDecay {
            decay: 0.0,
            volume: 0.3,
        };
        let input: Vec<f64> = (0..100).map(|i| (i as f64 * 0.37).sin()).collect();
        let mut output = input.clone();
        e.apply(&mut output, 44100.0);
        for (x, y) in input.iter().zip(output.iter()) {
            assert_eq!(*y, x * 0.3);
        }
    }

    #[test]
    fn decay_never_amplifies() {
        let e = ExponentialDecay {
            decay: 5.0,
            volume: 1.0,
        };
        let mut output = vec![1.0; 44100];
        e.apply(&mut output, 44100.0);
        assert_eq!(output[0], 1.0);
        for pair in output.windows(2) {
            assert!(pair[1] <= pair[0]);
        }
        assert!((output[44099] - (-5.0f64 * 44099.0 / 44100.0).exp()).abs() < 1e-12);
    }

    #[test]
    fn apply_follows_the_curve() {
        let e = ExponentialDecay {
            decay: 3.0,
            volume: 0.7,
        };
        let mut output = vec![1.0; 1000];
        e.apply(&mut output, 44100.0);
        for (i, y) in output.iter().enumerate() {
            assert_eq!(*y, e.eval(i as f64 / 44100.0));
        }
    }
}
