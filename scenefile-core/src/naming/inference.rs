//! Field-by-field inference over legacy scene filenames.
//!
//! Every function here is a pure function of the input string and resolves
//! ambiguity the same way: when several candidates match, the right-most one
//! wins. Filenames grow left to right from free text towards metadata, so the
//! latest match is the most likely to be the real token.

use std::path::Path;

use once_cell::sync::Lazy;
use regex::{Match, Regex};
use scenefile_model::Discipline;

use super::{DEFAULT_DESCRIPTION, DEFAULT_EXTENSION, UNDETERMINED_VERSION};

static DISCIPLINE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    let codes: Vec<&str> = Discipline::ALL.iter().map(|d| d.code()).collect();
    // ASCII-only folding; `from_code` must accept every match.
    Regex::new(&format!("(?i-u){}", codes.join("|")))
        .expect("discipline regex should compile")
});

static VERSION_MARKER_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[._][vV]([0-9]+)[._]").expect("version marker regex should compile")
});

static BARE_NUMBER_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[._$/]([0-9]+)[._$/]").expect("bare number regex should compile")
});

static INITIALS_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[._]([A-Za-z]{2})[._]").expect("initials regex should compile")
});

/// All matches of the first capture group, allowing neighbouring matches to
/// share a delimiter (`_12_45_` yields both `12` and `45`).
fn overlapping_captures<'h>(pattern: &Regex, haystack: &'h str) -> Vec<Match<'h>> {
    let mut found = Vec::new();
    let mut start = 0;
    while start < haystack.len() {
        let Some(captures) = pattern.captures_at(haystack, start) else {
            break;
        };
        let (Some(whole), Some(group)) = (captures.get(0), captures.get(1)) else {
            break;
        };
        found.push(group);
        // Every pattern here opens with an ASCII delimiter.
        start = whole.start() + 1;
    }
    found
}

/// Right-most discipline code in `filename`, with its match position.
fn rightmost_discipline(filename: &str) -> Option<(Discipline, Match<'_>)> {
    DISCIPLINE_PATTERN
        .find_iter(filename)
        .filter_map(|m| Discipline::from_code(m.as_str()).map(|d| (d, m)))
        .last()
}

/// Discipline named in the filename, or the default when none is present.
pub fn infer_discipline(filename: &str) -> Discipline {
    rightmost_discipline(filename)
        .map(|(discipline, _)| discipline)
        .unwrap_or_default()
}

/// Two-letter author initials, lower-cased; empty when nothing qualifies.
///
/// Tokens that spell a discipline code (`fx`, `rp`, ...) are never initials.
pub fn infer_initials(filename: &str) -> String {
    overlapping_captures(&INITIALS_PATTERN, filename)
        .into_iter()
        .rev()
        .find(|token| Discipline::from_code(token.as_str()).is_none())
        .map(|token| token.as_str().to_ascii_lowercase())
        .unwrap_or_default()
}

/// Version number, or [`UNDETERMINED_VERSION`] when there is no candidate.
///
/// An explicit `_v012_` marker always beats bare numbers, even one too large
/// for `i64` (which saturates). Without a marker the right-most delimited
/// digit run is used, which misfires on names carrying unrelated numbers such
/// as resolutions.
pub fn infer_version(filename: &str) -> i64 {
    rightmost_number(&VERSION_MARKER_PATTERN, filename)
        .or_else(|| rightmost_number(&BARE_NUMBER_PATTERN, filename))
        .unwrap_or(UNDETERMINED_VERSION)
}

fn rightmost_number(pattern: &Regex, filename: &str) -> Option<i64> {
    overlapping_captures(pattern, filename)
        .last()
        // Only digits reach here, so the one parse failure is overflow.
        .map(|digits| digits.as_str().parse().unwrap_or(i64::MAX))
}

/// Extension without its dot, defaulting to `ma`.
pub fn infer_extension(filename: &str) -> String {
    Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .filter(|ext| !ext.is_empty())
        .unwrap_or(DEFAULT_EXTENSION)
        .to_string()
}

/// Free text in front of the right-most discipline code.
pub fn infer_description(filename: &str) -> String {
    rightmost_discipline(filename)
        .map(|(_, m)| &filename[..m.start()])
        .map(|prefix| prefix.rsplit('/').next().unwrap_or(prefix))
        .map(|prefix| prefix.trim_end_matches(['_', '.', '-', ' ']))
        .filter(|description| !description.is_empty())
        .unwrap_or(DEFAULT_DESCRIPTION)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn discipline_prefers_rightmost_code() {
        assert_eq!(infer_discipline("char_mdl_rig_v003.ma"), Discipline::Rig);
        assert_eq!(infer_discipline("CHAR_Lgt_v1.ma"), Discipline::Lgt);
        assert_eq!(infer_discipline("tester.ma"), Discipline::Mdl);
    }

    #[test]
    fn discipline_reads_techanim_as_one_code() {
        assert_eq!(infer_discipline("cloth_techanim_v004.ma"), Discipline::TechAnim);
    }

    #[test]
    fn initials_skip_discipline_codes() {
        assert_eq!(infer_initials("char_rig_aw_v2.ma"), "aw");
        assert_eq!(infer_initials("char_MDL_001_AW_fx.ma"), "aw");
        assert_eq!(infer_initials("char_rig_v2.ma"), "");
    }

    #[test]
    fn discipline_ignores_non_ascii_case_folds() {
        // U+017F folds to `s` under Unicode rules but is not a code letter.
        assert_eq!(infer_discipline("char_rig_\u{17f}hading_v003_aw.ma"), Discipline::Rig);
        assert_eq!(infer_description("char_rig_\u{17f}hading_v003_aw.ma"), "char");
    }

    #[test]
    fn initials_are_letters_only() {
        assert_eq!(infer_initials("file_01_v003.ma"), "");
        assert_eq!(infer_initials("file_v2_v003.ma"), "");
    }

    #[test]
    fn initials_share_delimiters() {
        assert_eq!(infer_initials("shot_aw_jd_v002.ma"), "jd");
    }

    #[test]
    fn version_marker_beats_bare_numbers() {
        assert_eq!(infer_version("asset_99_v007_12.ma"), 7);
        assert_eq!(infer_version("asset.V12.ma"), 12);
    }

    #[test]
    fn oversized_version_marker_saturates() {
        assert_eq!(infer_version("asset_12_v99999999999999999999_.ma"), i64::MAX);
    }

    #[test]
    fn version_falls_back_to_rightmost_bare_number() {
        assert_eq!(infer_version("asset_12_aw_45.ma"), 45);
        assert_eq!(infer_version("/jobs/show/001/file.ma"), 1);
        assert_eq!(infer_version("asset_aw.ma"), UNDETERMINED_VERSION);
    }

    #[test]
    fn extension_defaults_to_ma() {
        assert_eq!(infer_extension("thing.mb"), "mb");
        assert_eq!(infer_extension("archive.tar.gz"), "gz");
        assert_eq!(infer_extension("noext"), "ma");
        assert_eq!(infer_extension("trailing."), "ma");
        assert_eq!(infer_extension(""), "ma");
    }

    #[test]
    fn description_is_text_before_discipline() {
        assert_eq!(infer_description("char_santa_MDL_003_aw.ma"), "char_santa");
        assert_eq!(infer_description("/jobs/x/build/prop_box_rig_v1.ma"), "prop_box");
        assert_eq!(infer_description("MDL_003_aw.ma"), "untitled");
        assert_eq!(infer_description("tester.ma"), "untitled");
    }
}
