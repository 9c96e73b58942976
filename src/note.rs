// note-tone -- render a single musical note into audio
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! Definitions of what a note is, and how to read one from a string.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// The name of a note in standard notation.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum NoteName {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
}

/// Any offset applied to a note in standard notation.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum NoteOffset {
    /// The note is a half-tone lower then indicated by its name.
    Flat,
    /// The note is left unchanged.
    Base,
    /// The note is a half-tone higher then indicated by its name.
    Sharp,
}

/// Semitone distance from C within an octave, always in `0..12`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct PitchClass(u8);

impl PitchClass {
    /// Look up the pitch class of a spelling.
    ///
    /// Only the naturals, the five sharps and the five conventional flats are known.
    /// Everything else (`Cb`, `Fb`, `E#`, `B#`) yields `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use note_tone::note::*;
    ///
    /// assert_eq!(PitchClass::named(NoteName::C, NoteOffset::Base).map(PitchClass::index), Some(0));
    /// assert_eq!(PitchClass::named(NoteName::E, NoteOffset::Flat).map(PitchClass::index), Some(3));
    /// assert_eq!(PitchClass::named(NoteName::C, NoteOffset::Flat), None);
    /// ```
    pub fn named(name: NoteName, offset: NoteOffset) -> Option<PitchClass> {
        use NoteName::*;
        use NoteOffset::*;
        let index = match (name, offset) {
            (C, Base) => 0,
            (C, Sharp) | (D, Flat) => 1,
            (D, Base) => 2,
            (D, Sharp) | (E, Flat) => 3,
            (E, Base) => 4,
            (F, Base) => 5,
            (F, Sharp) | (G, Flat) => 6,
            (G, Base) => 7,
            (G, Sharp) | (A, Flat) => 8,
            (A, Base) => 9,
            (A, Sharp) | (B, Flat) => 10,
            (B, Base) => 11,
            _ => return None,
        };
        Some(PitchClass(index))
    }

    /// Construct a pitch class from its index, returning `None` outside `0..12`.
    pub fn from_index(index: u8) -> Option<PitchClass> {
        if index < 12 {
            Some(PitchClass(index))
        } else {
            None
        }
    }

    pub fn index(self) -> u8 {
        self.0
    }
}

/// A pitch class in a specific octave.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Pitch {
    pub class: PitchClass,
    pub octave: u32,
}

impl Pitch {
    /// The MIDI note number of this pitch, where C4 is 60 and A4 is 69.
    ///
    /// The value is not restricted to the MIDI range of 0 to 127.
    pub fn midi_number(self) -> i64 {
        12 * (i64::from(self.octave) + 1) + i64::from(self.class.index())
    }
}

/// A note as written by the user, e.g. `A#5` or `Eb3`.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct NoteDesignation {
    pub name: NoteName,
    pub offset: NoteOffset,
    pub octave: u32,
}

impl NoteDesignation {
    /// Parse a note of the format `<letter><accidental?><octave>`.
    ///
    /// Surrounding whitespace is ignored and letters are case-insensitive.
    /// After upper-casing the accidental is `#` for sharp or `B` for flat,
    /// so `bb4` is a B-flat. The octave is any non-negative number.
    ///
    /// # Examples
    ///
    /// ```
    /// # use note_tone::note::*;
    ///
    /// let note = NoteDesignation::parse(" eb3 ").unwrap();
    /// assert_eq!(note.name, NoteName::E);
    /// assert_eq!(note.offset, NoteOffset::Flat);
    /// assert_eq!(note.octave, 3);
    ///
    /// assert!(NoteDesignation::parse("H4").is_err());
    /// assert!(NoteDesignation::parse("C").is_err());
    /// assert!(NoteDesignation::parse("C-1").is_err());
    /// ```
    pub fn parse(note_str: &str) -> Result<NoteDesignation> {
        let normalized = note_str.trim().to_uppercase();
        let invalid = || Error::InvalidNoteFormat {
            note: normalized.clone(),
        };

        let mut chars = normalized.chars();
        let name = match chars.next() {
            Some('A') => NoteName::A,
            Some('B') => NoteName::B,
            Some('C') => NoteName::C,
            Some('D') => NoteName::D,
            Some('E') => NoteName::E,
            Some('F') => NoteName::F,
            Some('G') => NoteName::G,
            _ => return Err(invalid()),
        };

        let rest = chars.as_str();
        let (offset, octave_str) = if let Some(octave_str) = rest.strip_prefix('#') {
            (NoteOffset::Sharp, octave_str)
        } else if let Some(octave_str) = rest.strip_prefix('B') {
            (NoteOffset::Flat, octave_str)
        } else {
            (NoteOffset::Base, rest)
        };

        if octave_str.is_empty() || !octave_str.chars().all(|ch| ch.is_ascii_digit()) {
            return Err(invalid());
        }
        // well-formed, but no frequency exists for an octave this high
        let octave = octave_str
            .parse::<u32>()
            .map_err(|_| Error::UnsupportedNote {
                note: normalized.clone(),
            })?;

        Ok(NoteDesignation {
            name,
            offset,
            octave,
        })
    }

    /// Resolve the spelling to a pitch class.
    pub fn pitch_class(&self) -> Result<PitchClass> {
        PitchClass::named(self.name, self.offset).ok_or_else(|| Error::UnsupportedNote {
            note: self.to_string().to_uppercase(),
        })
    }

    pub fn pitch(&self) -> Result<Pitch> {
        Ok(Pitch {
            class: self.pitch_class()?,
            octave: self.octave,
        })
    }
}

impl FromStr for NoteDesignation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        NoteDesignation::parse(s)
    }
}

impl fmt::Display for NoteDesignation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self.name {
            NoteName::A => 'A',
            NoteName::B => 'B',
            NoteName::C => 'C',
            NoteName::D => 'D',
            NoteName::E => 'E',
            NoteName::F => 'F',
            NoteName::G => 'G',
        };
        let offset = match self.offset {
            NoteOffset::Flat => "b",
            NoteOffset::Base => "",
            NoteOffset::Sharp => "#",
        };
        write!(f, "{}{}{}", name, offset, self.octave)
    }
}

/// Parse a note string straight into a pitch class and octave.
///
/// # Examples
///
/// ```
/// # use note_tone::note::*;
///
/// let pitch = parse_pitch("A4").unwrap();
/// assert_eq!(pitch.class.index(), 9);
/// assert_eq!(pitch.octave, 4);
/// assert_eq!(pitch.midi_number(), 69);
/// ```
pub fn parse_pitch(note_str: &str) -> Result<Pitch> {
    NoteDesignation::parse(note_str)?.pitch()
}
