// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Common progressions and relative/parallel scale relationships.

use tracing::debug;

use super::pitch::normalize;
use super::quality::Quality;
use super::scale::candidate_name;

type Progressions = &'static [&'static [&'static str]];

const MAJOR_PROGRESSIONS: Progressions = &[
    &["I", "IV", "V"],        // Blues
    &["I", "V", "vi", "IV"],  // Pop
    &["ii", "V", "I"],        // Jazz
    &["vi", "IV", "I", "V"],
    &["I", "vi", "IV", "V"],  // 50s
    &["I", "IV", "vi", "V"],
];

const MINOR_PROGRESSIONS: Progressions = &[
    &["i", "iv", "v"],
    &["i", "VI", "VII", "v"],
    &["ii°", "v", "i"],
    &["i", "III", "VII", "VI"],
    &["i", "VII", "VI", "v"],
    &["i", "iv", "VII", "III"],
];

const HARMONIC_MINOR_PROGRESSIONS: Progressions = &[
    &["i", "iv", "V"],
    &["i", "V", "i"],
    &["ii°", "V", "i"],
    &["VI", "V", "i"],
    &["i", "iv", "V", "i"],
];

const PENTATONIC_MAJOR_PROGRESSIONS: Progressions = &[
    &["I", "V"],
    &["I", "vi", "V"],
    &["I", "ii", "V"],
    &["vi", "V", "I"],
    &["I", "iii", "vi"],
];

const PENTATONIC_MINOR_PROGRESSIONS: Progressions = &[
    &["i", "iv", "v"],
    &["i", "VII", "v"],
    &["i", "III", "VII"],
    &["iv", "i", "v"],
    &["i", "v", "iv"],        // Blues
];

/// Canonical progressions as sequences of degree labels.
///
/// Qualities without their own table use the first three minor progressions.
pub fn common_progressions(quality: Quality) -> Progressions {
    match quality {
        Quality::Major => MAJOR_PROGRESSIONS,
        Quality::Minor => MINOR_PROGRESSIONS,
        Quality::HarmonicMinor => HARMONIC_MINOR_PROGRESSIONS,
        Quality::PentatonicMajor => PENTATONIC_MAJOR_PROGRESSIONS,
        Quality::PentatonicMinor => PENTATONIC_MINOR_PROGRESSIONS,
        _ => &MINOR_PROGRESSIONS[..3],
    }
}

/// Relative scale name, read off the given (already generated) scale.
///
/// Major looks to its 6th degree, the minor family to its 3rd, the
/// pentatonics to their 5th/2nd note, and each mode to the degree on which
/// its parent major scale starts.
pub fn relative_scale<S: AsRef<str>>(scale: &[S], quality: Quality) -> Option<String> {
    let (index, relative) = match quality {
        Quality::Major => (5, Quality::Minor),
        Quality::PentatonicMajor => (4, Quality::PentatonicMinor),
        Quality::Minor | Quality::HarmonicMinor | Quality::MelodicMinor => (2, Quality::Major),
        Quality::PentatonicMinor => (1, Quality::PentatonicMajor),
        Quality::Dorian => (6, Quality::Major),
        Quality::Phrygian => (5, Quality::Major),
        Quality::Lydian => (4, Quality::Major),
        Quality::Mixolydian => (3, Quality::Major),
        Quality::Locrian => (1, Quality::Major),
        Quality::Diminished => return None,
    };

    let Some(tonic) = scale.get(index) else {
        debug!(%quality, len = scale.len(), "scale too short for relative lookup");
        return None;
    };
    Some(candidate_name(tonic.as_ref(), relative))
}

/// Same-tonic scale of the complementary quality
pub fn parallel_scale(tonic: &str, quality: Quality) -> Option<String> {
    if let Err(err) = normalize(tonic) {
        debug!(%err, "no parallel scale");
        return None;
    }

    let parallel = match quality {
        Quality::Major => Quality::Minor,
        Quality::PentatonicMajor => Quality::PentatonicMinor,
        Quality::Minor | Quality::HarmonicMinor | Quality::MelodicMinor => Quality::Major,
        Quality::PentatonicMinor => Quality::PentatonicMajor,
        Quality::Dorian
        | Quality::Phrygian
        | Quality::Lydian
        | Quality::Mixolydian
        | Quality::Locrian => Quality::Major,
        Quality::Diminished => return None,
    };
    Some(candidate_name(tonic, parallel))
}
