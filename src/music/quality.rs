// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Scale qualities and the fixed tables attached to each.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TheoryError;

/// Triad quality of a diatonic chord
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChordQuality {
    Major,
    Minor,
    Diminished,
}

impl ChordQuality {
    /// Suffix appended to the root in a chord symbol
    pub fn suffix(self) -> &'static str {
        match self {
            ChordQuality::Major => "",
            ChordQuality::Minor => "m",
            ChordQuality::Diminished => "°",
        }
    }
}

impl fmt::Display for ChordQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChordQuality::Major => write!(f, "MAJOR"),
            ChordQuality::Minor => write!(f, "MINOR"),
            ChordQuality::Diminished => write!(f, "DIMINISHED"),
        }
    }
}

use ChordQuality::{Diminished as D, Major as M, Minor as Mi};

/// Scale qualities supported by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Quality {
    Major,           // Ionian
    Minor,           // Aeolian
    HarmonicMinor,   // Minor with raised 7th
    MelodicMinor,    // Raised 6th and 7th (ascending form)
    Dorian,
    Phrygian,
    Lydian,
    Mixolydian,
    Locrian,
    PentatonicMajor, // Major without 4th and 7th
    PentatonicMinor, // Minor without 2nd and 6th
    Diminished,      // Whole-half
}

const MAJOR_POSITIONS: &[&str] = &["I", "ii", "iii", "IV", "V", "vi", "vii°"];
const MINOR_POSITIONS: &[&str] = &["i", "ii°", "III", "iv", "v", "VI", "VII"];
const HARMONIC_POSITIONS: &[&str] = &["i", "ii°", "III", "iv", "V", "VI", "vii°"];
const PENT_MAJOR_POSITIONS: &[&str] = &["I", "ii", "iii", "V", "vi"];
const PENT_MINOR_POSITIONS: &[&str] = &["i", "III", "iv", "v", "VII"];

const MINOR_CHORDS: &[ChordQuality] = &[Mi, D, M, Mi, Mi, M, M];

impl Quality {
    /// All qualities, in the order reverse searches enumerate them
    pub const ALL: [Quality; 12] = [
        Quality::Major,
        Quality::Minor,
        Quality::HarmonicMinor,
        Quality::MelodicMinor,
        Quality::Dorian,
        Quality::Phrygian,
        Quality::Lydian,
        Quality::Mixolydian,
        Quality::Locrian,
        Quality::PentatonicMajor,
        Quality::PentatonicMinor,
        Quality::Diminished,
    ];

    /// Upper-snake-case identifier used in candidate names ("HARMONIC_MINOR")
    pub fn name(self) -> &'static str {
        match self {
            Quality::Major => "MAJOR",
            Quality::Minor => "MINOR",
            Quality::HarmonicMinor => "HARMONIC_MINOR",
            Quality::MelodicMinor => "MELODIC_MINOR",
            Quality::Dorian => "DORIAN",
            Quality::Phrygian => "PHRYGIAN",
            Quality::Lydian => "LYDIAN",
            Quality::Mixolydian => "MIXOLYDIAN",
            Quality::Locrian => "LOCRIAN",
            Quality::PentatonicMajor => "PENTATONIC_MAJOR",
            Quality::PentatonicMinor => "PENTATONIC_MINOR",
            Quality::Diminished => "DIMINISHED",
        }
    }

    /// Full step cycle in semitones. Sums to 12; the last step returns to the tonic.
    pub fn steps(self) -> &'static [u8] {
        match self {
            Quality::Major => &[2, 2, 1, 2, 2, 2, 1],
            Quality::Minor => &[2, 1, 2, 2, 1, 2, 2],
            Quality::HarmonicMinor => &[2, 1, 2, 2, 1, 3, 1],
            Quality::MelodicMinor => &[2, 1, 2, 2, 2, 2, 1],
            Quality::Dorian => &[2, 1, 2, 2, 2, 1, 2],
            Quality::Phrygian => &[1, 2, 2, 2, 1, 2, 2],
            Quality::Lydian => &[2, 2, 2, 1, 2, 2, 1],
            Quality::Mixolydian => &[2, 2, 1, 2, 2, 1, 2],
            Quality::Locrian => &[1, 2, 2, 1, 2, 2, 2],
            Quality::PentatonicMajor => &[2, 2, 3, 2, 3],
            Quality::PentatonicMinor => &[3, 2, 2, 3, 2],
            Quality::Diminished => &[2, 1, 2, 1, 2, 1, 2, 1],
        }
    }

    /// Number of notes in the scale
    pub fn degree_count(self) -> usize {
        self.steps().len()
    }

    /// Triad quality on each scale degree.
    ///
    /// The diminished scale has no conventional chord ladder and returns `None`.
    /// Melodic minor shares the natural minor ladder.
    pub fn chord_pattern(self) -> Option<&'static [ChordQuality]> {
        let pattern: &'static [ChordQuality] = match self {
            Quality::Major => &[M, Mi, Mi, M, M, Mi, D],
            Quality::Minor | Quality::MelodicMinor => MINOR_CHORDS,
            Quality::HarmonicMinor => &[Mi, D, M, Mi, M, M, D],
            Quality::Dorian => &[Mi, Mi, M, M, Mi, D, M],
            Quality::Phrygian => &[Mi, M, M, Mi, D, M, Mi],
            Quality::Lydian => &[M, M, Mi, D, M, Mi, Mi],
            Quality::Mixolydian => &[M, Mi, D, M, Mi, Mi, M],
            Quality::Locrian => &[D, M, Mi, Mi, M, M, Mi],
            Quality::PentatonicMajor => &[M, Mi, Mi, M, Mi],
            Quality::PentatonicMinor => &[Mi, M, Mi, Mi, M],
            Quality::Diminished => return None,
        };
        Some(pattern)
    }

    /// Roman-numeral labels for each scale degree
    pub fn positions(self) -> &'static [&'static str] {
        match self {
            Quality::Major | Quality::Diminished => MAJOR_POSITIONS,
            Quality::HarmonicMinor => HARMONIC_POSITIONS,
            Quality::PentatonicMajor => PENT_MAJOR_POSITIONS,
            Quality::PentatonicMinor => PENT_MINOR_POSITIONS,
            Quality::Minor
            | Quality::MelodicMinor
            | Quality::Dorian
            | Quality::Phrygian
            | Quality::Lydian
            | Quality::Mixolydian
            | Quality::Locrian => MINOR_POSITIONS,
        }
    }

    /// Interval name of each scale degree above the tonic
    pub fn interval_names(self) -> &'static [&'static str] {
        match self {
            Quality::Major => &[
                "Unison", "Major Second", "Major Third",
                "Perfect Fourth", "Perfect Fifth", "Major Sixth", "Major Seventh",
            ],
            Quality::Minor => &[
                "Unison", "Major Second", "Minor Third",
                "Perfect Fourth", "Perfect Fifth", "Minor Sixth", "Minor Seventh",
            ],
            Quality::HarmonicMinor => &[
                "Unison", "Major Second", "Minor Third",
                "Perfect Fourth", "Perfect Fifth", "Minor Sixth", "Major Seventh",
            ],
            Quality::MelodicMinor => &[
                "Unison", "Major Second", "Minor Third",
                "Perfect Fourth", "Perfect Fifth", "Major Sixth", "Major Seventh",
            ],
            Quality::Dorian => &[
                "Unison", "Major Second", "Minor Third",
                "Perfect Fourth", "Perfect Fifth", "Major Sixth", "Minor Seventh",
            ],
            Quality::Phrygian => &[
                "Unison", "Minor Second", "Minor Third",
                "Perfect Fourth", "Perfect Fifth", "Minor Sixth", "Minor Seventh",
            ],
            Quality::Lydian => &[
                "Unison", "Major Second", "Major Third",
                "Augmented Fourth", "Perfect Fifth", "Major Sixth", "Major Seventh",
            ],
            Quality::Mixolydian => &[
                "Unison", "Major Second", "Major Third",
                "Perfect Fourth", "Perfect Fifth", "Major Sixth", "Minor Seventh",
            ],
            Quality::Locrian => &[
                "Unison", "Minor Second", "Minor Third",
                "Perfect Fourth", "Diminished Fifth", "Minor Sixth", "Minor Seventh",
            ],
            Quality::PentatonicMajor => &[
                "Unison", "Major Second", "Major Third", "Perfect Fifth", "Major Sixth",
            ],
            Quality::PentatonicMinor => &[
                "Unison", "Minor Third", "Perfect Fourth", "Perfect Fifth", "Minor Seventh",
            ],
            Quality::Diminished => &[
                "Unison", "Major Second", "Minor Third", "Perfect Fourth",
                "Diminished Fifth", "Minor Sixth", "Diminished Seventh", "Major Seventh",
            ],
        }
    }

    /// Church-mode name, or the quality's own name when it is not a mode
    pub fn mode_name(self) -> &'static str {
        match self {
            Quality::Major => "Ionian",
            Quality::Minor => "Aeolian",
            Quality::Dorian => "Dorian",
            Quality::Phrygian => "Phrygian",
            Quality::Lydian => "Lydian",
            Quality::Mixolydian => "Mixolydian",
            Quality::Locrian => "Locrian",
            other => other.name(),
        }
    }
}

impl FromStr for Quality {
    type Err = TheoryError;

    /// Parse "MAJOR", "harmonic minor", "harmonic_minor", "aeolian", ...
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase().replace([' ', '-', '_'], "");
        let quality = match key.as_str() {
            "major" | "ionian" => Quality::Major,
            "minor" | "naturalminor" | "aeolian" => Quality::Minor,
            "harmonicminor" => Quality::HarmonicMinor,
            "melodicminor" => Quality::MelodicMinor,
            "dorian" => Quality::Dorian,
            "phrygian" => Quality::Phrygian,
            "lydian" => Quality::Lydian,
            "mixolydian" => Quality::Mixolydian,
            "locrian" => Quality::Locrian,
            "pentatonicmajor" | "majorpentatonic" => Quality::PentatonicMajor,
            "pentatonicminor" | "minorpentatonic" => Quality::PentatonicMinor,
            "diminished" | "wholehalf" => Quality::Diminished,
            _ => return Err(TheoryError::InvalidQuality(s.to_string())),
        };
        Ok(quality)
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steps_close_the_octave() {
        for quality in Quality::ALL {
            let total: u32 = quality.steps().iter().map(|&s| s as u32).sum();
            assert_eq!(total, 12, "{quality}");
        }
    }

    #[test]
    fn test_degree_counts() {
        assert_eq!(Quality::Major.degree_count(), 7);
        assert_eq!(Quality::Locrian.degree_count(), 7);
        assert_eq!(Quality::PentatonicMinor.degree_count(), 5);
        assert_eq!(Quality::Diminished.degree_count(), 8);
    }

    #[test]
    fn test_tables_match_degree_count() {
        for quality in Quality::ALL {
            let n = quality.degree_count();
            assert_eq!(quality.interval_names().len(), n, "{quality}");
            if let Some(pattern) = quality.chord_pattern() {
                assert_eq!(pattern.len(), n, "{quality}");
                assert_eq!(quality.positions().len(), n, "{quality}");
            }
        }
    }

    #[test]
    fn test_diminished_has_no_chord_ladder() {
        assert!(Quality::Diminished.chord_pattern().is_none());
        assert_eq!(
            Quality::MelodicMinor.chord_pattern(),
            Quality::Minor.chord_pattern()
        );
    }

    #[test]
    fn test_quality_from_str() {
        assert_eq!("MAJOR".parse::<Quality>(), Ok(Quality::Major));
        assert_eq!("minor".parse::<Quality>(), Ok(Quality::Minor));
        assert_eq!("harmonic_minor".parse::<Quality>(), Ok(Quality::HarmonicMinor));
        assert_eq!("Melodic Minor".parse::<Quality>(), Ok(Quality::MelodicMinor));
        assert_eq!("aeolian".parse::<Quality>(), Ok(Quality::Minor));
        assert_eq!("PENTATONIC_MAJOR".parse::<Quality>(), Ok(Quality::PentatonicMajor));
        assert_eq!(
            "blues".parse::<Quality>(),
            Err(TheoryError::InvalidQuality("blues".to_string()))
        );
    }

    #[test]
    fn test_name_round_trips_through_from_str() {
        for quality in Quality::ALL {
            assert_eq!(quality.name().parse::<Quality>(), Ok(quality));
        }
    }

    #[test]
    fn test_mode_names() {
        assert_eq!(Quality::Major.mode_name(), "Ionian");
        assert_eq!(Quality::Minor.mode_name(), "Aeolian");
        assert_eq!(Quality::Mixolydian.mode_name(), "Mixolydian");
        assert_eq!(Quality::HarmonicMinor.mode_name(), "HARMONIC_MINOR");
    }

    #[test]
    fn test_chord_suffix() {
        assert_eq!(ChordQuality::Major.suffix(), "");
        assert_eq!(ChordQuality::Minor.suffix(), "m");
        assert_eq!(ChordQuality::Diminished.suffix(), "°");
    }
}
