// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Error types for the theory engine.
//!
//! Engine operations that face external callers never return these directly:
//! they collapse them into an empty list or `None` and log the reason. The
//! fallible building blocks (`normalize`, `Scale::new`, `parse_chord`, ...)
//! hand them back so callers can report what was wrong.

use thiserror::Error;

/// Errors produced while interpreting note, chord or quality input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TheoryError {
    #[error("unrecognized note '{0}'")]
    UnrecognizedNote(String),
    #[error("invalid tonic '{0}'")]
    InvalidTonic(String),
    #[error("invalid quality '{0}'")]
    InvalidQuality(String),
    #[error("invalid chord symbol '{0}'")]
    InvalidChord(String),
    #[error("missing required field '{0}'")]
    MissingField(&'static str),
}

pub type Result<T> = std::result::Result<T, TheoryError>;
