// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Individual engine queries and their answers.
//!
//! Fields are optional so a query with a missing tonic or quality still
//! deserializes; answering it yields the empty result instead of an error.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::TheoryError;
use crate::music::{
    build_profile, chords_from_scale, scales_from_chords, scales_from_semitones,
    semitones_from_scale, Quality, ScaleProfile,
};

/// One request to the engine
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Query {
    /// Spelled notes of a scale
    Scale {
        #[serde(default)]
        tonic: Option<String>,
        #[serde(default)]
        quality: Option<String>,
    },
    /// Diatonic chords of a scale
    Chords {
        #[serde(default)]
        tonic: Option<String>,
        #[serde(default)]
        quality: Option<String>,
    },
    /// Scales containing every note
    ScalesFromNotes {
        #[serde(default)]
        notes: Vec<String>,
    },
    /// Scales containing every chord
    ScalesFromChords {
        #[serde(default)]
        chords: Vec<String>,
    },
    /// Full scale profile
    Profile {
        #[serde(default)]
        tonic: Option<String>,
        #[serde(default)]
        quality: Option<String>,
    },
}

/// What a query produced
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Answer {
    List(Vec<String>),
    Profile(Option<Box<ScaleProfile>>),
}

impl Answer {
    /// True when the engine found nothing
    pub fn is_empty(&self) -> bool {
        match self {
            Answer::List(items) => items.is_empty(),
            Answer::Profile(profile) => profile.is_none(),
        }
    }
}

/// A query paired with its answer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryResult {
    pub query: Query,
    pub answer: Answer,
}

/// Check that both scale fields are present and the quality is known
fn resolve<'a>(
    tonic: &'a Option<String>,
    quality: &Option<String>,
) -> Result<(&'a str, Quality), TheoryError> {
    let tonic = tonic.as_deref().ok_or(TheoryError::MissingField("tonic"))?;
    let quality = quality
        .as_deref()
        .ok_or(TheoryError::MissingField("quality"))?
        .parse()?;
    Ok((tonic, quality))
}

impl Query {
    /// Run the query against the engine
    pub fn answer(&self) -> QueryResult {
        let answer = match self {
            Query::Scale { tonic, quality } => Answer::List(
                resolve(tonic, quality)
                    .map(|(t, q)| semitones_from_scale(t, q))
                    .unwrap_or_else(rejected),
            ),
            Query::Chords { tonic, quality } => Answer::List(
                resolve(tonic, quality)
                    .map(|(t, q)| chords_from_scale(t, q))
                    .unwrap_or_else(rejected),
            ),
            Query::ScalesFromNotes { notes } => Answer::List(scales_from_semitones(notes)),
            Query::ScalesFromChords { chords } => Answer::List(scales_from_chords(chords)),
            Query::Profile { tonic, quality } => Answer::Profile(
                resolve(tonic, quality)
                    .ok()
                    .and_then(|(t, q)| build_profile(t, q))
                    .map(Box::new),
            ),
        };

        if answer.is_empty() {
            info!(query = ?self, "query produced no result");
        }

        QueryResult {
            query: self.clone(),
            answer,
        }
    }
}

fn rejected(err: TheoryError) -> Vec<String> {
    warn!(%err, "query rejected");
    Vec::new()
}
