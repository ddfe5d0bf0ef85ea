// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Pitch classes and their spellings.
//!
//! Every accepted spelling maps to one of twelve canonical (sharp-based)
//! pitch classes. Going the other way, a pitch class is re-spelled for
//! display according to the key it appears in, following the circle of
//! fifths convention: flat keys spell with flats, sharp keys with sharps.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, TheoryError};

/// Semitone offset type
pub type Semitones = i8;

/// Canonical pitch classes, ordered 0..=11 from C
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PitchClass {
    C,
    Cs, // C# / Db
    D,
    Ds, // D# / Eb
    E,
    F,
    Fs, // F# / Gb
    G,
    Gs, // G# / Ab
    A,
    As, // A# / Bb
    B,
}

impl PitchClass {
    /// All pitch classes in chromatic order
    pub const ALL: [PitchClass; 12] = [
        PitchClass::C,
        PitchClass::Cs,
        PitchClass::D,
        PitchClass::Ds,
        PitchClass::E,
        PitchClass::F,
        PitchClass::Fs,
        PitchClass::G,
        PitchClass::Gs,
        PitchClass::A,
        PitchClass::As,
        PitchClass::B,
    ];

    /// Position on the chromatic circle (0-11)
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Pitch class at a chromatic position, wrapping modulo 12
    pub fn from_index(index: u8) -> Self {
        PitchClass::ALL[(index % 12) as usize]
    }

    /// Transpose by semitones
    pub fn transpose(self, semitones: Semitones) -> Self {
        let index = (self.index() as i16 + semitones as i16).rem_euclid(12) as u8;
        PitchClass::from_index(index)
    }

    /// Sharp (canonical) spelling
    pub fn sharp_name(self) -> &'static str {
        match self {
            PitchClass::C => "C",
            PitchClass::Cs => "C#",
            PitchClass::D => "D",
            PitchClass::Ds => "D#",
            PitchClass::E => "E",
            PitchClass::F => "F",
            PitchClass::Fs => "F#",
            PitchClass::G => "G",
            PitchClass::Gs => "G#",
            PitchClass::A => "A",
            PitchClass::As => "A#",
            PitchClass::B => "B",
        }
    }

    /// Flat spelling, for the five black-key pitch classes only
    pub fn flat_name(self) -> Option<&'static str> {
        match self {
            PitchClass::Cs => Some("Db"),
            PitchClass::Ds => Some("Eb"),
            PitchClass::Fs => Some("Gb"),
            PitchClass::Gs => Some("Ab"),
            PitchClass::As => Some("Bb"),
            _ => None,
        }
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.sharp_name())
    }
}

/// How a spelling relates to its pitch class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpellingKind {
    Natural,
    Sharp,
    Flat,
    /// B#, E#, Cb, Fb: valid names that never appear in a generated scale
    Theoretical,
}

/// A recognized note name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spelling {
    pub name: &'static str,
    pub pitch_class: PitchClass,
    pub kind: SpellingKind,
}

const fn spelling(name: &'static str, pitch_class: PitchClass, kind: SpellingKind) -> Spelling {
    Spelling {
        name,
        pitch_class,
        kind,
    }
}

/// The 21 recognized spellings
pub const SPELLINGS: [Spelling; 21] = [
    spelling("C", PitchClass::C, SpellingKind::Natural),
    spelling("D", PitchClass::D, SpellingKind::Natural),
    spelling("E", PitchClass::E, SpellingKind::Natural),
    spelling("F", PitchClass::F, SpellingKind::Natural),
    spelling("G", PitchClass::G, SpellingKind::Natural),
    spelling("A", PitchClass::A, SpellingKind::Natural),
    spelling("B", PitchClass::B, SpellingKind::Natural),
    spelling("C#", PitchClass::Cs, SpellingKind::Sharp),
    spelling("D#", PitchClass::Ds, SpellingKind::Sharp),
    spelling("F#", PitchClass::Fs, SpellingKind::Sharp),
    spelling("G#", PitchClass::Gs, SpellingKind::Sharp),
    spelling("A#", PitchClass::As, SpellingKind::Sharp),
    spelling("Db", PitchClass::Cs, SpellingKind::Flat),
    spelling("Eb", PitchClass::Ds, SpellingKind::Flat),
    spelling("Gb", PitchClass::Fs, SpellingKind::Flat),
    spelling("Ab", PitchClass::Gs, SpellingKind::Flat),
    spelling("Bb", PitchClass::As, SpellingKind::Flat),
    spelling("B#", PitchClass::C, SpellingKind::Theoretical),
    spelling("E#", PitchClass::F, SpellingKind::Theoretical),
    spelling("Cb", PitchClass::B, SpellingKind::Theoretical),
    spelling("Fb", PitchClass::E, SpellingKind::Theoretical),
];

/// Tonics whose keys are written with flats
pub const FLAT_KEYS: [&str; 5] = ["F", "Bb", "Eb", "Ab", "Db"];

/// Tonics whose keys are written with sharps
pub const SHARP_KEYS: [&str; 6] = ["G", "D", "A", "E", "B", "F#"];

/// Look up a spelling in the table. Matching is exact: "bb" or "C##" are not notes.
pub fn lookup(name: &str) -> Option<&'static Spelling> {
    SPELLINGS.iter().find(|s| s.name == name)
}

/// Whether the name is one of the four theoretical spellings
pub fn is_theoretical(name: &str) -> bool {
    lookup(name).is_some_and(|s| s.kind == SpellingKind::Theoretical)
}

/// Resolve any recognized spelling to its canonical pitch class
pub fn normalize(name: &str) -> Result<PitchClass> {
    match lookup(name) {
        Some(s) => Ok(s.pitch_class),
        None => {
            debug!(note = name, "unrecognized note spelling");
            Err(TheoryError::UnrecognizedNote(name.to_string()))
        }
    }
}

/// Spell a pitch class for display inside the key of `key_context`.
///
/// The order of checks matters: naturals pass through, then the flat-key
/// set, then the sharp-key set (or any tonic carrying a sharp), then A#/Bb
/// falls back to Bb, and everything else is written sharp.
pub fn display(pitch_class: PitchClass, key_context: &str) -> &'static str {
    let Some(flat) = pitch_class.flat_name() else {
        return pitch_class.sharp_name();
    };

    if FLAT_KEYS.contains(&key_context) {
        return flat;
    }

    if SHARP_KEYS.contains(&key_context) || key_context.contains('#') {
        return pitch_class.sharp_name();
    }

    if pitch_class == PitchClass::As {
        return flat;
    }

    pitch_class.sharp_name()
}

/// The other practical spelling of a tonic, if there is one.
///
/// Theoretical alternates (B# for C, Cb for B, ...) are never offered.
pub fn practical_alternate(name: &str) -> Option<&'static str> {
    let spelling = lookup(name)?;
    match spelling.kind {
        SpellingKind::Sharp => spelling.pitch_class.flat_name(),
        SpellingKind::Flat => Some(spelling.pitch_class.sharp_name()),
        SpellingKind::Natural | SpellingKind::Theoretical => None,
    }
}
