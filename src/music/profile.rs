// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Consolidated description of one (tonic, quality) pair.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use super::chord::{chords_from_scale, chords_map};
use super::labeled::LabeledMap;
use super::progression::{common_progressions, parallel_scale, relative_scale};
use super::quality::Quality;
use super::scale::{intervals, Scale};
use crate::error::{Result, TheoryError};

/// Snapshot of everything the engine knows about a scale
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScaleProfile {
    tonic: String,
    quality: Quality,
    semitones: Vec<String>,
    chords: LabeledMap,
    scale_degrees: BTreeMap<usize, String>,
    intervals: LabeledMap,
    relative_scale: Option<String>,
    parallel_scale: Option<String>,
    common_progressions: Vec<Vec<String>>,
    mode: String,
}

impl ScaleProfile {
    pub fn tonic(&self) -> &str {
        &self.tonic
    }

    pub fn quality(&self) -> Quality {
        self.quality
    }

    /// Spelled scale notes
    pub fn semitones(&self) -> &[String] {
        &self.semitones
    }

    /// Diatonic chords keyed by degree label
    pub fn chords(&self) -> &LabeledMap {
        &self.chords
    }

    /// Scale notes keyed by 1-based degree
    pub fn scale_degrees(&self) -> &BTreeMap<usize, String> {
        &self.scale_degrees
    }

    /// Scale notes keyed by interval name
    pub fn intervals(&self) -> &LabeledMap {
        &self.intervals
    }

    pub fn relative_scale(&self) -> Option<&str> {
        self.relative_scale.as_deref()
    }

    pub fn parallel_scale(&self) -> Option<&str> {
        self.parallel_scale.as_deref()
    }

    pub fn common_progressions(&self) -> &[Vec<String>] {
        &self.common_progressions
    }

    pub fn mode(&self) -> &str {
        &self.mode
    }
}

/// Build the profile, reporting why it could not be built
pub fn try_build_profile(tonic: &str, quality: Quality) -> Result<ScaleProfile> {
    if tonic.is_empty() {
        return Err(TheoryError::MissingField("tonic"));
    }

    let scale = Scale::new(tonic, quality)?;
    let semitones: Vec<String> = scale.notes().iter().map(|n| n.to_string()).collect();

    let chords = chords_map(&chords_from_scale(tonic, quality), quality);
    let scale_degrees = (1..=scale.len())
        .filter_map(|degree| scale.note_at_degree(degree).map(|n| (degree, n.to_string())))
        .collect();
    let intervals = intervals(&semitones, quality);

    let common_progressions = common_progressions(quality)
        .iter()
        .map(|p| p.iter().map(|label| label.to_string()).collect())
        .collect();

    Ok(ScaleProfile {
        tonic: tonic.to_string(),
        quality,
        relative_scale: relative_scale(&semitones, quality),
        parallel_scale: parallel_scale(tonic, quality),
        semitones,
        chords,
        scale_degrees,
        intervals,
        common_progressions,
        mode: quality.mode_name().to_string(),
    })
}

/// Build the profile for a tonic and quality, or `None` for an unrecognized tonic
pub fn build_profile(tonic: &str, quality: Quality) -> Option<ScaleProfile> {
    match try_build_profile(tonic, quality) {
        Ok(profile) => Some(profile),
        Err(err) => {
            debug!(%err, "no profile built");
            None
        }
    }
}
