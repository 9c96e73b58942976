// note-tone -- render a single musical note into audio
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! `notetone` renders a single note into a WAV file, or plays it directly.

use std::error::Error;
use std::path::PathBuf;

use log::info;
use structopt::StructOpt;

use note_tone::config::ToneConfig;
use note_tone::output::{sox, wav};
use note_tone::synth::oscillator::WaveShape;

#[derive(Debug, StructOpt)]
#[structopt(name = "notetone", about = "Turning a note into a tone")]
struct Opt {
    #[structopt(short = "v", long = "verbose", parse(from_occurrences))]
    verbose: usize,

    /// The note to render, e.g. C4, A#5 or Eb3.
    note: String,

    /// Length of the tone in seconds, at most 10.
    #[structopt(short, long, default_value = "0.5")]
    duration: f64,

    /// One of sine, square, sawtooth or triangle.
    #[structopt(short, long, default_value = "sine")]
    waveform: WaveShape,

    /// Smoothing between 0 (hold the first sample) and 1 (no smoothing).
    #[structopt(short, long, default_value = "0.05")]
    blur: f64,

    /// Exponential decay rate per second, 0 for a constant volume.
    #[structopt(long, default_value = "5.0")]
    decay: f64,

    /// Peak amplitude between 0 and 1.
    #[structopt(long, default_value = "0.3")]
    volume: f64,

    /// Output WAV file. Defaults to `<NOTE>_<waveform>.wav` unless `--play` is given.
    #[structopt(short, long, parse(from_os_str))]
    output: Option<PathBuf>,

    /// Play the tone using sox.
    #[structopt(short, long)]
    play: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let opt = Opt::from_args();

    let level = match opt.verbose {
        0 => log::Level::Info,
        1 => log::Level::Debug,
        _ => log::Level::Trace,
    };
    simple_logger::init_with_level(level)?;

    let config = ToneConfig {
        note: opt.note,
        duration: opt.duration,
        waveform: opt.waveform,
        blur: opt.blur,
        decay: opt.decay,
        volume: opt.volume,
    };
    let tone = note_tone::render(&config)?;

    let output = match opt.output {
        Some(path) => Some(path),
        None if opt.play => None,
        None => Some(PathBuf::from(&tone.filename)),
    };
    if let Some(path) = output {
        wav::write_file(&path, &tone.buffer)?;
        info!("wrote {} ({})", path.display(), tone.media_type);
    }
    if opt.play {
        sox::play(&tone.buffer)?;
    }
    Ok(())
}
