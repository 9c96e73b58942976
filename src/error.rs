// note-tone -- render a single musical note into audio
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! Everything that can go wrong while turning a note into audio.

use snafu::Snafu;

/// Possible errors when rendering a tone.
///
/// All validation errors are raised before any samples are generated.
#[derive(Debug, Snafu)]
pub enum Error {
    /// A numeric parameter or the waveform name is outside of its domain.
    #[snafu(display("invalid {} {}: {}", name, value, reason))]
    InvalidParameter {
        name: &'static str,
        value: String,
        reason: &'static str,
    },
    /// The note does not look like `<letter><accidental?><octave>`.
    #[snafu(display(
        "invalid note format {:?}: use a letter, an optional accidental and an octave, e.g. 'C4', 'A#5', 'Eb3'",
        note
    ))]
    InvalidNoteFormat { note: String },
    /// The note is spelled correctly but has no pitch class or no representable frequency.
    #[snafu(display("unsupported note {:?}", note))]
    UnsupportedNote { note: String },
    /// The WAV encoder rejected the samples or could not write them.
    #[snafu(display("failed to encode WAV data: {}", source))]
    Encode { source: hound::Error },
    /// Creating an output file or talking to sox failed.
    #[snafu(display("audio output failed: {}", source))]
    Io { source: std::io::Error },
}

impl Error {
    /// Shorthand for an `InvalidParameter` error.
    pub(crate) fn parameter(name: &'static str, value: impl ToString, reason: &'static str) -> Self {
        Error::InvalidParameter {
            name,
            value: value.to_string(),
            reason,
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
