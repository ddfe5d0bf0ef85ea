// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Diatonic chords, chord symbol parsing, and the reverse search from
//! chords to scales.
//!
//! Chord symbols follow a small grammar:
//!
//! ```text
//! root        [A-G] [#b]?
//! marker      m | M | °                  (optional)
//! long form   maj | min | dim            (optional)
//! extension   digits                     (optional, ignored)
//! bass        "/" [A-G] [#b]?            (optional, ignored)
//! ```
//!
//! Only the marker decides the quality: `m` is minor, `°` is diminished, and
//! `M` or no marker is major. The long form is accepted but does not change
//! the quality, so "Cmin" reads as C major.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;

use super::labeled::LabeledMap;
use super::pitch::{self, display, PitchClass};
use super::quality::{ChordQuality, Quality};
use super::scale::{push_candidate, Scale};
use crate::error::{Result, TheoryError};

/// A triad: root and quality
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Chord {
    root: PitchClass,
    spelling: &'static str,
    quality: ChordQuality,
}

impl Chord {
    /// Create a chord from a recognized root spelling
    pub fn new(root: &str, quality: ChordQuality) -> Result<Self> {
        let spelling =
            pitch::lookup(root).ok_or_else(|| TheoryError::UnrecognizedNote(root.to_string()))?;
        Ok(Self {
            root: spelling.pitch_class,
            spelling: spelling.name,
            quality,
        })
    }

    pub fn root(&self) -> PitchClass {
        self.root
    }

    /// Root as it was spelled
    pub fn root_spelling(&self) -> &'static str {
        self.spelling
    }

    pub fn quality(&self) -> ChordQuality {
        self.quality
    }

    /// Symbol using the root's own spelling ("Bb", "F#m", "B°")
    pub fn symbol(&self) -> String {
        format!("{}{}", self.spelling, self.quality.suffix())
    }

    /// Symbol with the root re-spelled for the key of `key_context`
    pub fn symbol_in(&self, key_context: &str) -> String {
        format!("{}{}", display(self.root, key_context), self.quality.suffix())
    }
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Chord {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self> {
        parse_chord(s)
    }
}

/// Root, optional marker, optional long form, digits, optional slash bass
const CHORD_PATTERN: &str = r"^([A-G][#b]?)([mM°])?(?:maj|min|dim)?\d*(?:/[A-G][#b]?)?$";

static CHORD_REGEX: OnceLock<Regex> = OnceLock::new();

fn chord_regex() -> &'static Regex {
    CHORD_REGEX.get_or_init(|| Regex::new(CHORD_PATTERN).expect("invalid regex pattern"))
}

/// Parse a chord symbol such as "Am", "F#m7", "Cmaj7", "B°" or "Am/C"
pub fn parse_chord(symbol: &str) -> Result<Chord> {
    let invalid = || TheoryError::InvalidChord(symbol.to_string());

    let Some(caps) = chord_regex().captures(symbol) else {
        debug!(chord = symbol, "chord symbol did not match");
        return Err(invalid());
    };

    let quality = match caps.get(2).map(|m| m.as_str()) {
        Some("m") => ChordQuality::Minor,
        Some("°") => ChordQuality::Diminished,
        _ => ChordQuality::Major,
    };

    Chord::new(&caps[1], quality).map_err(|_| invalid())
}

/// Diatonic triads of a scale, or `None` if its quality has no chord ladder
pub fn diatonic_chords(scale: &Scale) -> Option<Vec<Chord>> {
    let pattern = scale.quality().chord_pattern()?;
    let chords = scale
        .notes()
        .iter()
        .zip(pattern)
        .map(|(&note, &quality)| Chord::new(note, quality))
        .collect::<Result<Vec<_>>>();
    chords.ok()
}

/// Chord symbols on each degree of the scale on `tonic`
pub fn chords_from_scale(tonic: &str, quality: Quality) -> Vec<String> {
    let scale = match Scale::new(tonic, quality) {
        Ok(scale) => scale,
        Err(err) => {
            debug!(%err, "no chords derived");
            return Vec::new();
        }
    };

    match diatonic_chords(&scale) {
        Some(chords) => chords.iter().map(Chord::symbol).collect(),
        None => {
            debug!(%quality, "quality has no diatonic chord ladder");
            Vec::new()
        }
    }
}

/// Map each degree label of the quality to the matching chord symbol
pub fn chords_map<S: AsRef<str>>(chords: &[S], quality: Quality) -> LabeledMap {
    quality
        .positions()
        .iter()
        .zip(chords)
        .map(|(&label, chord)| (label, chord.as_ref()))
        .collect()
}

/// Every (tonic, quality) whose diatonic chords include all of the given chords.
///
/// Each input chord is re-spelled in the candidate key before comparison.
/// The diminished scale is never a candidate. An unparseable chord matches
/// nothing, so it empties the result.
pub fn scales_from_chords<S: AsRef<str>>(chords: &[S]) -> Vec<String> {
    if chords.is_empty() {
        return Vec::new();
    }

    let parsed = match chords
        .iter()
        .map(|c| parse_chord(c.as_ref()))
        .collect::<Result<Vec<_>>>()
    {
        Ok(parsed) => parsed,
        Err(err) => {
            debug!(%err, "reverse chord search found no candidates");
            return Vec::new();
        }
    };

    let mut candidates = Vec::new();
    for root in PitchClass::ALL {
        let tonic = root.sharp_name();
        for quality in Quality::ALL {
            if quality == Quality::Diminished {
                continue;
            }
            let derived = chords_from_scale(tonic, quality);
            let matches = parsed
                .iter()
                .all(|chord| derived.contains(&chord.symbol_in(tonic)));
            if matches {
                push_candidate(&mut candidates, tonic, quality);
            }
        }
    }
    candidates
}
