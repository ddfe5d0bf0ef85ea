// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Integration tests for Scalesmith
//!
//! These tests verify that scale generation, chord derivation and the
//! reverse searches agree with each other across every key.

use scalesmith::config::{Answer, QueryFile};
use scalesmith::music::pitch::{self, SpellingKind, SPELLINGS};
use scalesmith::music::{
    build_profile, chords_from_scale, display, normalize, parse_chord, scales_from_chords,
    scales_from_semitones, semitones_from_scale, ChordQuality, PitchClass, Quality,
};

/// Every spelling that can head a practical key
fn practical_tonics() -> impl Iterator<Item = &'static str> {
    SPELLINGS
        .iter()
        .filter(|s| s.kind != SpellingKind::Theoretical)
        .map(|s| s.name)
}

fn pitch_classes(notes: &[String]) -> Vec<PitchClass> {
    notes.iter().map(|n| normalize(n).unwrap()).collect()
}

/// Notes of any scale lead back to that scale
#[test]
fn test_note_search_round_trip() {
    for tonic in practical_tonics() {
        for quality in Quality::ALL {
            let notes = semitones_from_scale(tonic, quality);
            assert_eq!(notes.len(), quality.degree_count());

            let found = scales_from_semitones(&notes);
            let expected = format!("{} {}", tonic, quality.name());
            assert!(
                found.contains(&expected),
                "{expected} missing from search over {notes:?}"
            );
        }
    }
}

/// Chords of any scale with a chord ladder lead back to that scale
#[test]
fn test_chord_search_round_trip() {
    for tonic in practical_tonics() {
        for quality in Quality::ALL {
            if quality == Quality::Diminished {
                continue;
            }
            let chords = chords_from_scale(tonic, quality);
            assert_eq!(chords.len(), quality.degree_count());

            let found = scales_from_chords(&chords);
            let expected = format!("{} {}", tonic, quality.name());
            assert!(
                found.contains(&expected),
                "{expected} missing from search over {chords:?}"
            );
        }
    }
}

#[test]
fn test_display_is_idempotent() {
    for spelling in SPELLINGS.iter() {
        for context in practical_tonics() {
            let once = display(normalize(spelling.name).unwrap(), context);
            let twice = display(normalize(once).unwrap(), context);
            assert_eq!(once, twice, "{} in {}", spelling.name, context);
        }
    }
}

#[test]
fn test_enharmonic_minor_keys() {
    let sharp = semitones_from_scale("F#", Quality::Minor);
    let flat = semitones_from_scale("Gb", Quality::Minor);

    assert_eq!(pitch_classes(&sharp), pitch_classes(&flat));
    assert_eq!(sharp[0], "F#");
    assert_eq!(flat[0], "Gb");
}

#[test]
fn test_theoretical_notes_match_nothing() {
    assert!(scales_from_semitones(&["B#"]).is_empty());
    assert!(scales_from_semitones(&["E#"]).is_empty());
    assert!(scales_from_semitones(&["B#", "E#"]).is_empty());
    assert!(scales_from_semitones(&["C", "Fb"]).is_empty());
}

#[test]
fn test_flat_input_matches_sharp_spelled_scale() {
    // E major is spelled with G#
    assert_eq!(semitones_from_scale("E", Quality::Major)[2], "G#");
    let found = scales_from_semitones(&["E", "Ab", "B"]);
    assert!(found.contains(&"E MAJOR".to_string()));
}

#[test]
fn test_candidates_carry_both_spellings() {
    let found = scales_from_semitones(&["C#", "D#", "F", "F#", "G#", "A#", "C"]);
    let sharp = found.iter().position(|s| s == "C# MAJOR").unwrap();
    assert_eq!(found[sharp + 1], "Db MAJOR");
    assert!(!found.iter().any(|s| s.starts_with("B# ")));
}

#[test]
fn test_concrete_scenarios() {
    assert_eq!(
        semitones_from_scale("F", Quality::Major),
        ["F", "G", "A", "Bb", "C", "D", "E"]
    );
    assert_eq!(
        chords_from_scale("C", Quality::Major),
        ["C", "Dm", "Em", "F", "G", "Am", "B°"]
    );

    let chord = parse_chord("Am/C").unwrap();
    assert_eq!(chord.root(), PitchClass::A);
    assert_eq!(chord.quality(), ChordQuality::Minor);

    let found = scales_from_chords(&["C", "F", "G", "Am"]);
    assert!(found.contains(&"C MAJOR".to_string()));
    assert!(found.contains(&"A MINOR".to_string()));

    let profile = build_profile("C", Quality::Major).unwrap();
    assert_eq!(profile.relative_scale(), Some("A MINOR"));
    assert_eq!(profile.parallel_scale(), Some("C MINOR"));
    assert_eq!(profile.mode(), "Ionian");
}

#[test]
fn test_invalid_input_gives_empty_results() {
    assert!(semitones_from_scale("X", Quality::Major).is_empty());
    assert!(chords_from_scale("", Quality::Minor).is_empty());
    assert!(scales_from_semitones(&["C", "Q"]).is_empty());
    assert!(scales_from_semitones::<&str>(&[]).is_empty());
    assert!(scales_from_chords(&["C", "Hm"]).is_empty());
    assert!(scales_from_chords::<&str>(&[]).is_empty());
    assert!(build_profile("Z", Quality::Dorian).is_none());
    assert!(pitch::lookup("c").is_none());
}

#[test]
fn test_every_profile_is_consistent() {
    for tonic in practical_tonics() {
        for quality in Quality::ALL {
            let profile = build_profile(tonic, quality).unwrap();
            assert_eq!(profile.semitones(), semitones_from_scale(tonic, quality));
            assert_eq!(profile.scale_degrees().len(), quality.degree_count());
            assert_eq!(profile.intervals().len(), quality.degree_count());
            assert!(!profile.common_progressions().is_empty());

            let chords = chords_from_scale(tonic, quality);
            assert_eq!(profile.chords().len(), chords.len());
            for ((_, symbol), expected) in profile.chords().iter().zip(&chords) {
                assert_eq!(symbol, expected);
            }
        }
    }
}

#[test]
fn test_batch_file_end_to_end() {
    let yaml = r#"
queries:
  - kind: scale
    tonic: Eb
    quality: MAJOR
  - kind: scales_from_chords
    chords: [Dm, G, C]
  - kind: chords
    tonic: C
    quality: DIMINISHED
  - kind: profile
    tonic: H
    quality: MAJOR
"#;
    let results = QueryFile::from_yaml(yaml).unwrap().run();
    assert_eq!(results.len(), 4);

    assert_eq!(
        results[0].answer,
        Answer::List(
            ["Eb", "F", "G", "Ab", "Bb", "C", "D"]
                .map(String::from)
                .to_vec()
        )
    );
    match &results[1].answer {
        Answer::List(scales) => assert!(scales.contains(&"C MAJOR".to_string())),
        other => panic!("unexpected answer {other:?}"),
    }
    assert!(results[2].answer.is_empty());
    assert_eq!(results[3].answer, Answer::Profile(None));
}
