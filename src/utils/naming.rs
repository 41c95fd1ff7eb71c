// src/utils/naming.rs
// Canonical naming helpers used across the project.

use crate::constants::{SUFFIX_MODULUS, SUFFIX_WIDTH};

/// Compute the next name in a numbered sequence.
///
/// Rules:
/// - `names` is sorted lexicographically (codepoint order, no locale collation)
///   into a local copy; the input is never mutated
/// - the sorted copy is scanned from greatest to least; the first entry whose
///   last 3 characters are all ASCII digits is the candidate
/// - names shorter than 3 characters are never candidates, even if all-digit
/// - the candidate's 3-digit suffix is incremented by `step` and wrapped
///   modulo 100 into [0, 99], then re-padded to 3 digits (`7` -> "007")
/// - returns `None` when no entry carries a numeric suffix (including for an
///   empty list); absence is not an error
///
/// The wrap point is 100 even though the suffix field is 3 digits wide, so a
/// suffix like "205" renormalizes to "005" before stepping. Downstream
/// sequences depend on the 2-digit wrap; do not widen it to 1000.
///
/// Note the scan order is lexicographic, not numeric: `["vol100", "vol099"]`
/// picks `vol100` (suffix 100 -> 0) and yields `vol000`.
pub fn increment_names<S: AsRef<str>>(names: &[S], step: i64) -> Option<String> {
    let mut sorted: Vec<&str> = names.iter().map(AsRef::as_ref).collect();
    sorted.sort_unstable();

    for name in sorted.into_iter().rev() {
        if let Some((stem, suffix)) = split_numeric_suffix(name) {
            // Infallible for 3 ASCII digits, but stay total.
            if let Ok(number) = suffix.parse::<i64>() {
                let next = (number + step).rem_euclid(SUFFIX_MODULUS);
                return Some(format!("{}{:0width$}", stem, next, width = SUFFIX_WIDTH));
            }
        }
    }
    None
}

/// Split `name` into (stem, trailing 3 characters) when the trailing 3
/// characters are all ASCII decimal digits. Characters, not bytes: multi-byte
/// stems are never sliced mid-codepoint. Names shorter than 3 characters
/// yield `None`.
fn split_numeric_suffix(name: &str) -> Option<(&str, &str)> {
    let (idx, _) = name.char_indices().rev().nth(SUFFIX_WIDTH - 1)?;
    let (stem, suffix) = name.split_at(idx);
    if suffix.chars().all(|c| c.is_ascii_digit()) {
        Some((stem, suffix))
    } else {
        None
    }
}

/// Convert an arbitrary label to a strict ASCII kebab-case slug suitable for
/// feeding into numbered sequences.
/// Rules:
/// - Unicode characters are transliterated to ASCII using `deunicode`
/// - ASCII letters/digits are kept and lowercased
/// - everything else becomes a single `-` separator
/// - collapses consecutive separators, trims leading/trailing `-`
/// - returns "default" if the result would be empty
pub fn to_slug(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut last_dash = false;

    for ch in s.chars() {
        // ASCII fast-path
        if ch.is_ascii() {
            let lc = ch.to_ascii_lowercase();
            if lc.is_ascii_alphanumeric() {
                out.push(lc);
                last_dash = false;
            } else if !last_dash {
                out.push('-');
                last_dash = true;
            }
            continue;
        }

        let mut pushed_any = false;
        for tc in deunicode::deunicode_char(ch).unwrap_or("").chars() {
            let lc = tc.to_ascii_lowercase();
            if lc.is_ascii_alphanumeric() {
                out.push(lc);
                last_dash = false;
                pushed_any = true;
            }
        }
        if !pushed_any && !last_dash {
            out.push('-');
            last_dash = true;
        }
    }

    let trimmed = out.trim_matches('-');
    if trimmed.is_empty() {
        "default".to_string()
    } else {
        trimmed.to_string()
    }
}
