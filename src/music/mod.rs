// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Music theory engine.
//!
//! This module provides pitch spelling, scale generation, diatonic chords,
//! progressions and the reverse searches from notes or chords back to the
//! scales that contain them. Everything here is a pure function over static
//! tables.

pub mod chord;
pub mod labeled;
pub mod pitch;
pub mod profile;
pub mod progression;
pub mod quality;
pub mod scale;

pub use chord::{chords_from_scale, chords_map, parse_chord, scales_from_chords, Chord};
pub use labeled::LabeledMap;
pub use pitch::{display, normalize, PitchClass};
pub use profile::{build_profile, try_build_profile, ScaleProfile};
pub use progression::{common_progressions, parallel_scale, relative_scale};
pub use quality::{ChordQuality, Quality};
pub use scale::{intervals, scales_from_semitones, semitones_from_scale, Scale};
