// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Scalesmith: scales, diatonic chords and their inverses.
//!
//! ```
//! use scalesmith::{chords_from_scale, semitones_from_scale, Quality};
//!
//! assert_eq!(
//!     semitones_from_scale("F", Quality::Major),
//!     ["F", "G", "A", "Bb", "C", "D", "E"]
//! );
//! assert_eq!(
//!     chords_from_scale("C", Quality::Major),
//!     ["C", "Dm", "Em", "F", "G", "Am", "B°"]
//! );
//! ```

pub mod config;
pub mod error;
pub mod music;

pub use error::{Result, TheoryError};
pub use music::{
    build_profile, chords_from_scale, parse_chord, scales_from_chords, scales_from_semitones,
    semitones_from_scale, Chord, ChordQuality, PitchClass, Quality, Scale, ScaleProfile,
};
