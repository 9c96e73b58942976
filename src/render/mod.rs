//! The glue responsible for turning the description of a tone into an actual waveform.

use log::{debug, info, trace};

use crate::config::{ToneConfig, ValidTone};
use crate::error::Result;
use crate::synth::envelope::ExponentialDecay;
use crate::synth::filter::OnePole;
use crate::synth::oscillator::Oscillator;
use crate::wave::{SampleBuffer, SamplerInfo};

/// Media type of the encoded output.
pub const MEDIA_TYPE: &str = "audio/wav";

/// A rendered tone, ready to be handed to an encoder.
#[derive(Debug, Clone)]
pub struct RenderedTone {
    pub buffer: SampleBuffer,
    /// Suggested name of the encoded file, e.g. `A#4_square.wav`.
    pub filename: String,
    pub media_type: &'static str,
    /// Fundamental frequency of the tone in Hz.
    pub frequency: f64,
}

/// Validate the configuration and render the tone it describes.
///
/// Nothing is rendered if any parameter is invalid.
///
/// # Examples
///
/// ```
/// use note_tone::config::ToneConfig;
///
/// let tone = note_tone::render::render(&ToneConfig::new("A4")).unwrap();
/// assert_eq!(tone.frequency, 440.0);
/// assert_eq!(tone.buffer.len(), 22050);
/// assert_eq!(tone.filename, "A4_sine.wav");
/// ```
pub fn render(config: &ToneConfig) -> Result<RenderedTone> {
    let tone = config.validate()?;
    Ok(render_valid(&tone))
}

/// Render an already validated tone.
pub fn render_valid(tone: &ValidTone) -> RenderedTone {
    let info = SamplerInfo::mono();
    let sample_rate = f64::from(info.sample_rate);

    let frequency = tone.frequency;
    let sample_count = info.sample_count(tone.duration);
    debug!(
        "{} is MIDI note {} at {:.3} Hz",
        tone.note,
        tone.pitch.midi_number(),
        frequency
    );

    let mut samples = Oscillator::new(tone.waveform, sample_rate, frequency).render(sample_count);
    trace!("generated {} raw {} samples", samples.len(), tone.waveform);

    OnePole::new(tone.blur).process(&mut samples);
    trace!("smoothed with blur {}", tone.blur);

    ExponentialDecay {
        decay: tone.decay,
        volume: tone.volume,
    }
    .apply(&mut samples, sample_rate);
    trace!("applied decay {} at volume {}", tone.decay, tone.volume);

    let buffer = SampleBuffer::from_f64(info, &samples);
    info!(
        "rendered {} ({}) as {} samples ({:.2} seconds) at {} Hz",
        tone.note,
        tone.waveform,
        buffer.len(),
        buffer.duration(),
        info.sample_rate
    );

    RenderedTone {
        buffer,
        filename: suggested_filename(tone),
        media_type: MEDIA_TYPE,
        frequency,
    }
}

/// `<NOTE>_<waveform>.wav`, where the note is the trimmed and upper-cased input.
pub fn suggested_filename(tone: &ValidTone) -> String {
    format!("{}_{}.wav", tone.label, tone.waveform)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::Error;
    use crate::synth::oscillator::WaveShape;

    #[test]
    fn filenames() {
        let tone = ToneConfig::new(" eb3 ").validate().unwrap();
        assert_eq!(suggested_filename(&tone), "EB3_sine.wav");

        let tone = ToneConfig::new("a#5")
            .with_waveform(WaveShape::Triangle)
            .validate()
            .unwrap();
        assert_eq!(suggested_filename(&tone), "A#5_triangle.wav");

        let tone = ToneConfig::new("a04").validate().unwrap();
        assert_eq!(suggested_filename(&tone), "A04_sine.wav");
    }

    #[test]
    fn out_of_range_octaves_render_nothing() {
        for note in &["C1100", "A2000"] {
            match render(&ToneConfig::new(*note).with_duration(0.01)) {
                Err(Error::UnsupportedNote { .. }) => {}
                other => panic!("expected {} to be rejected, got {:?}", note, other),
            }
        }

        let tone = render(&ToneConfig::new("C1000").with_duration(0.01)).unwrap();
        assert!(tone.buffer.samples().iter().all(|x| x.is_finite()));
    }

    #[test]
    fn metadata() {
        let tone = render(&ToneConfig::new("C4").with_duration(0.01)).unwrap();
        assert_eq!(tone.media_type, "audio/wav");
        assert_eq!(tone.buffer.info.channels, 1);
        assert_eq!(tone.buffer.info.sample_rate, 44100);
        assert_eq!(tone.buffer.len(), 441);
    }
}
