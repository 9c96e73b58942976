//! End-to-end rendering of single tones.

use note_tone::config::ToneConfig;
use note_tone::synth::oscillator::WaveShape;
use note_tone::{render, Error};

#[test]
fn pure_sine_a4() {
    let config = ToneConfig::new("A4")
        .with_duration(1.0)
        .with_waveform(WaveShape::Sine)
        .with_blur(1.0)
        .with_decay(0.0)
        .with_volume(1.0);
    let tone = render(&config).unwrap();
    let samples = tone.buffer.samples();

    assert_eq!(samples.len(), 44100);
    assert_eq!(samples[0], 0.0);
    assert!(samples.iter().all(|x| (-1.0..=1.0).contains(x)));

    // upward zero crossings are one period (44100 / 440 samples) apart
    let crossings: Vec<usize> = samples
        .windows(2)
        .enumerate()
        .filter(|(_, pair)| pair[0] < 0.0 && pair[1] >= 0.0)
        .map(|(i, _)| i)
        .collect();
    assert_eq!(crossings.len(), 439);
    let period = (crossings[crossings.len() - 1] - crossings[0]) as f64 / (crossings.len() - 1) as f64;
    assert!((period - 44100.0 / 440.0).abs() < 0.01, "period {}", period);
}

#[test]
fn square_c4_has_three_levels() {
    let config = ToneConfig::new("C4")
        .with_duration(0.1)
        .with_waveform(WaveShape::Square)
        .with_blur(1.0)
        .with_decay(0.0)
        .with_volume(0.5);
    let tone = render(&config).unwrap();
    let samples = tone.buffer.samples();

    assert_eq!(samples.len(), 4410);
    assert_eq!(samples[0], 0.0);
    assert!(samples.iter().all(|&x| x == -0.5 || x == 0.0 || x == 0.5));
    assert!(samples.contains(&0.5) && samples.contains(&-0.5));
}

#[test]
fn defaults_decay_and_stay_below_volume() {
    let tone = render(&ToneConfig::new("E2")).unwrap();
    let samples = tone.buffer.samples();
    assert_eq!(samples.len(), 22050);
    assert!(tone.buffer.peak() <= 0.3f32);

    let head = samples[..2205].iter().fold(0.0f32, |m, x| m.max(x.abs()));
    let tail = samples[samples.len() - 2205..]
        .iter()
        .fold(0.0f32, |m, x| m.max(x.abs()));
    assert!(tail < head * 0.2, "head {} tail {}", head, tail);
}

#[test]
fn zero_blur_holds_the_first_sample() {
    for shape in WaveShape::ALL.iter() {
        let config = ToneConfig::new("G3")
            .with_waveform(*shape)
            .with_blur(0.0)
            .with_decay(0.0);
        let tone = render(&config).unwrap();
        let first = tone.buffer.samples()[0];
        assert!(tone.buffer.samples().iter().all(|&x| x == first), "{}", shape);
    }
}

#[test]
fn enharmonic_notes_render_identically() {
    let sharp = render(&ToneConfig::new("D#4")).unwrap();
    let flat = render(&ToneConfig::new("Eb4")).unwrap();
    assert_eq!(sharp.frequency.to_bits(), flat.frequency.to_bits());
    assert!((flat.frequency - 311.13).abs() < 0.01);
    assert_eq!(sharp.buffer, flat.buffer);
    assert_eq!(flat.filename, "EB4_sine.wav");
}

#[test]
fn rendering_is_deterministic() {
    let config = ToneConfig::new("F#5").with_waveform(WaveShape::Sawtooth);
    assert_eq!(render(&config).unwrap().buffer, render(&config).unwrap().buffer);
}

#[test]
fn invalid_input_is_reported() {
    let cases = vec![
        (ToneConfig::new("A4").with_duration(0.0), "duration"),
        (ToneConfig::new("A4").with_duration(10.0001), "duration"),
        (ToneConfig::new("A4").with_volume(0.0), "volume"),
        (ToneConfig::new("A4").with_decay(-1.0), "decay"),
    ];
    for (config, field) in cases {
        match render(&config) {
            Err(Error::InvalidParameter { name, .. }) => assert_eq!(name, field),
            other => panic!("expected {} to be rejected, got {:?}", field, other),
        }
    }

    for note in &["H4", "C", "C-1"] {
        match render(&ToneConfig::new(*note)) {
            Err(Error::InvalidNoteFormat { .. }) => {}
            other => panic!("expected {} to be malformed, got {:?}", note, other),
        }
    }

    match render(&ToneConfig::new("Cb4")) {
        Err(Error::UnsupportedNote { .. }) => {}
        other => panic!("expected Cb4 to be unsupported, got {:?}", other),
    }
}

#[test]
fn longest_tone() {
    let tone = render(&ToneConfig::new("A0").with_duration(10.0)).unwrap();
    assert_eq!(tone.buffer.len(), 441_000);
}
