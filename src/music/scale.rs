// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Scale generation and the reverse search from notes to scales.
//!
//! A scale is never stored: it is rebuilt from a (tonic, quality) pair by
//! walking the quality's step cycle from the tonic and re-spelling each
//! pitch class in the key of the tonic as the caller wrote it.

use std::fmt;

use tracing::debug;

use super::labeled::LabeledMap;
use super::pitch::{self, display, normalize, PitchClass};
use super::quality::Quality;
use crate::error::{Result, TheoryError};

/// A generated scale: tonic, quality and the spelled notes
#[derive(Debug, Clone, PartialEq)]
pub struct Scale {
    tonic: String,
    quality: Quality,
    pitch_classes: Vec<PitchClass>,
    notes: Vec<&'static str>,
}

impl Scale {
    /// Build the scale for a tonic spelling and quality
    pub fn new(tonic: &str, quality: Quality) -> Result<Self> {
        let root = normalize(tonic).map_err(|_| TheoryError::InvalidTonic(tonic.to_string()))?;

        let steps = quality.steps();
        let mut pitch_classes = Vec::with_capacity(steps.len());
        pitch_classes.push(root);

        // The final step of the cycle lands back on the tonic
        let mut current = root;
        for &step in &steps[..steps.len() - 1] {
            current = current.transpose(step as i8);
            pitch_classes.push(current);
        }

        let notes = pitch_classes.iter().map(|&pc| display(pc, tonic)).collect();

        Ok(Self {
            tonic: tonic.to_string(),
            quality,
            pitch_classes,
            notes,
        })
    }

    /// Tonic as originally spelled
    pub fn tonic(&self) -> &str {
        &self.tonic
    }

    pub fn quality(&self) -> Quality {
        self.quality
    }

    /// Canonical pitch classes, tonic first
    pub fn pitch_classes(&self) -> &[PitchClass] {
        &self.pitch_classes
    }

    /// Notes spelled for display in this key
    pub fn notes(&self) -> &[&'static str] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Check if a pitch class is in this scale
    pub fn contains(&self, pitch_class: PitchClass) -> bool {
        self.pitch_classes.contains(&pitch_class)
    }

    /// Get the spelled note at a scale degree (1-based)
    pub fn note_at_degree(&self, degree: usize) -> Option<&'static str> {
        if degree == 0 {
            return None;
        }
        self.notes.get(degree - 1).copied()
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.tonic, self.quality)
    }
}

/// Spelled notes of the scale on `tonic`, or an empty list if the tonic is not a note
pub fn semitones_from_scale(tonic: &str, quality: Quality) -> Vec<String> {
    match Scale::new(tonic, quality) {
        Ok(scale) => scale.notes().iter().map(|n| n.to_string()).collect(),
        Err(err) => {
            debug!(%err, "no scale generated");
            Vec::new()
        }
    }
}

/// Candidate name in the external wire format: "<tonic> <QUALITY>"
pub fn candidate_name(tonic: &str, quality: Quality) -> String {
    format!("{} {}", tonic, quality.name())
}

/// Push a candidate under its tonic spelling and, when one exists, its
/// practical enharmonic alternate.
pub(crate) fn push_candidate(candidates: &mut Vec<String>, tonic: &str, quality: Quality) {
    candidates.push(candidate_name(tonic, quality));
    if let Some(alternate) = pitch::practical_alternate(tonic) {
        candidates.push(candidate_name(alternate, quality));
    }
}

/// Every (tonic, quality) whose scale contains all of the given notes.
///
/// Notes match by pitch class, so "Ab" is found in a scale spelled with
/// "G#". Theoretical spellings never match. Unrecognized notes or an empty
/// list yield no candidates.
pub fn scales_from_semitones<S: AsRef<str>>(notes: &[S]) -> Vec<String> {
    if notes.is_empty() {
        return Vec::new();
    }

    let mut wanted = Vec::with_capacity(notes.len());
    for note in notes {
        let note = note.as_ref();
        match normalize(note) {
            Ok(_) if pitch::is_theoretical(note) => wanted.push(None),
            Ok(pc) => wanted.push(Some(pc)),
            Err(err) => {
                debug!(%err, "reverse note search aborted");
                return Vec::new();
            }
        }
    }

    let mut candidates = Vec::new();
    for root in PitchClass::ALL {
        let tonic = root.sharp_name();
        for quality in Quality::ALL {
            let Ok(scale) = Scale::new(tonic, quality) else {
                continue;
            };
            let matches = wanted
                .iter()
                .all(|w| w.is_some_and(|pc| scale.contains(pc)));
            if matches {
                push_candidate(&mut candidates, tonic, quality);
            }
        }
    }
    candidates
}

/// Map each interval name of the quality to the matching scale note
pub fn intervals<S: AsRef<str>>(scale: &[S], quality: Quality) -> LabeledMap {
    quality
        .interval_names()
        .iter()
        .zip(scale)
        .map(|(&name, note)| (name, note.as_ref()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notes(tonic: &str, quality: Quality) -> Vec<String> {
        semitones_from_scale(tonic, quality)
    }

    #[test]
    fn test_natural_scales() {
        assert_eq!(notes("C", Quality::Major), ["C", "D", "E", "F", "G", "A", "B"]);
        assert_eq!(notes("A", Quality::Minor), ["A", "B", "C", "D", "E", "F", "G"]);
    }

    #[test]
    fn test_flat_key_spelling() {
        assert_eq!(notes("F", Quality::Major), ["F", "G", "A", "Bb", "C", "D", "E"]);
        assert_eq!(
            notes("Bb", Quality::Major),
            ["Bb", "C", "D", "Eb", "F", "G", "A"]
        );
    }

    #[test]
    fn test_sharp_key_spelling() {
        assert_eq!(notes("G", Quality::Major), ["G", "A", "B", "C", "D", "E", "F#"]);
        assert_eq!(
            notes("F#", Quality::Minor),
            ["F#", "G#", "A", "B", "C#", "D", "E"]
        );
        assert_eq!(
            notes("G#", Quality::Minor),
            ["G#", "A#", "B", "C#", "D#", "E", "F#"]
        );
    }

    #[test]
    fn test_pentatonic_and_diminished() {
        assert_eq!(notes("C", Quality::PentatonicMajor), ["C", "D", "E", "G", "A"]);
        assert_eq!(notes("A", Quality::PentatonicMinor), ["A", "C", "D", "E", "G"]);
        assert_eq!(
            notes("C", Quality::Diminished),
            ["C", "D", "D#", "F", "F#", "G#", "A", "B"]
        );
    }

    #[test]
    fn test_invalid_tonic() {
        assert!(notes("H", Quality::Major).is_empty());
        assert!(notes("", Quality::Major).is_empty());
        assert_eq!(
            Scale::new("H", Quality::Major),
            Err(TheoryError::InvalidTonic("H".to_string()))
        );
    }

    #[test]
    fn test_scale_queries() {
        let scale = Scale::new("D", Quality::Dorian).unwrap();
        assert_eq!(scale.len(), 7);
        assert_eq!(scale.tonic(), "D");
        assert!(scale.contains(PitchClass::B));
        assert!(!scale.contains(PitchClass::As));
        assert_eq!(scale.note_at_degree(3), Some("F"));
        assert_eq!(scale.note_at_degree(0), None);
        assert_eq!(scale.note_at_degree(8), None);
        assert_eq!(scale.to_string(), "D DORIAN");
    }

    #[test]
    fn test_scales_from_semitones_f_major() {
        let found = scales_from_semitones(&["F", "G", "A", "Bb", "C", "D", "E"]);
        assert!(found.contains(&"F MAJOR".to_string()));
        assert!(found.contains(&"D MINOR".to_string()));
        assert!(found.contains(&"G DORIAN".to_string()));
    }

    #[test]
    fn test_scales_from_semitones_emits_both_spellings() {
        let found = scales_from_semitones(&["G#", "A#", "B", "C#", "D#", "E", "F#"]);
        assert!(found.contains(&"G# MINOR".to_string()));
        assert!(found.contains(&"Ab MINOR".to_string()));
        assert!(found.contains(&"B MAJOR".to_string()));
        assert!(!found.contains(&"Cb MAJOR".to_string()));
    }

    #[test]
    fn test_scales_from_semitones_enharmonic_input() {
        // Ab is written G# in a sharp-spelled scale
        let found = scales_from_semitones(&["E", "Ab", "B"]);
        assert!(found.contains(&"E MAJOR".to_string()));
    }

    #[test]
    fn test_scales_from_semitones_rejects() {
        assert!(scales_from_semitones::<&str>(&[]).is_empty());
        assert!(scales_from_semitones(&["C", "H"]).is_empty());
        assert!(scales_from_semitones(&["B#"]).is_empty());
        assert!(scales_from_semitones(&["B#", "E#"]).is_empty());
    }

    #[test]
    fn test_intervals() {
        let map = intervals(&["C", "D", "E", "F", "G", "A", "B"], Quality::Major);
        assert_eq!(map.len(), 7);
        assert_eq!(map.get("Unison"), Some("C"));
        assert_eq!(map.get("Perfect Fifth"), Some("G"));
        assert_eq!(map.get("Major Seventh"), Some("B"));

        let map = intervals(&["A", "C", "D", "E", "G"], Quality::PentatonicMinor);
        assert_eq!(map.get("Minor Third"), Some("C"));
        assert_eq!(map.get("Minor Seventh"), Some("G"));

        assert!(intervals::<&str>(&[], Quality::Major).is_empty());
    }
}
