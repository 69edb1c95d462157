// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Splits an argument string into a preamble and prefix/value pairs.
//!
//! A prefix is a single ASCII letter followed by `/`, recognized only at the
//! start of the argument string or directly after whitespace. Everything up
//! to the next prefix (trimmed) is that prefix's value.

use crate::error::ParseError;

/// A named argument marker such as `a/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Prefix(&'static str);

impl Prefix {
    /// Returns the prefix text, e.g. `"a/"`.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for Prefix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

pub const PREFIX_NAME: Prefix = Prefix("n/");
pub const PREFIX_PHONE: Prefix = Prefix("p/");
pub const PREFIX_EMAIL: Prefix = Prefix("e/");
pub const PREFIX_MATRIC: Prefix = Prefix("m/");
pub const PREFIX_TAG: Prefix = Prefix("t/");
pub const PREFIX_AMOUNT: Prefix = Prefix("a/");
pub const PREFIX_DATE: Prefix = Prefix("d/");
pub const PREFIX_REMARKS: Prefix = Prefix("r/");
/// Shares its text with [`PREFIX_PHONE`]; the command decides the meaning.
pub const PREFIX_PAYMENT_INDEX: Prefix = Prefix("p/");

/// The prefixes a command accepts.
#[derive(Debug, Clone, Copy)]
pub struct ArgumentSpec {
    recognized: &'static [Prefix],
    repeatable: &'static [Prefix],
}

impl ArgumentSpec {
    /// Accepts only `recognized`, and every prefix may appear at most once.
    #[must_use]
    pub const fn single(recognized: &'static [Prefix]) -> Self {
        Self {
            recognized,
            repeatable: &[],
        }
    }

    /// Accepts `recognized`; the prefixes in `repeatable` may appear many times.
    #[must_use]
    pub const fn with_repeatable(
        recognized: &'static [Prefix],
        repeatable: &'static [Prefix],
    ) -> Self {
        Self {
            recognized,
            repeatable,
        }
    }

    fn find(&self, text: &str) -> Option<Prefix> {
        self.recognized.iter().copied().find(|p| p.0 == text)
    }

    fn is_repeatable(&self, prefix: Prefix) -> bool {
        self.repeatable.contains(&prefix)
    }
}

/// The tokenized form of an argument string.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ArgumentMap {
    preamble: String,
    values: Vec<(Prefix, String)>,
}

impl ArgumentMap {
    /// Returns the trimmed text before the first prefix.
    #[must_use]
    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    /// Returns the value of a single-valued prefix, if present.
    #[must_use]
    pub fn value(&self, prefix: Prefix) -> Option<&str> {
        self.values
            .iter()
            .find(|(p, _)| *p == prefix)
            .map(|(_, v)| v.as_str())
    }

    /// Returns every value of a prefix in input order.
    #[must_use]
    pub fn all_values(&self, prefix: Prefix) -> Vec<&str> {
        self.values
            .iter()
            .filter(|(p, _)| *p == prefix)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    /// Returns true if the prefix appears at least once.
    #[must_use]
    pub fn contains(&self, prefix: Prefix) -> bool {
        self.values.iter().any(|(p, _)| *p == prefix)
    }
}

/// Tokenizes `args` against `spec`.
///
/// # Errors
///
/// Returns `ParseError::UnknownPrefix` for a `<letter>/` marker `spec` does
/// not recognize, or `ParseError::DuplicatePrefix` naming every
/// non-repeatable prefix that appears more than once.
pub fn tokenize(args: &str, spec: &ArgumentSpec) -> Result<ArgumentMap, ParseError> {
    let mut markers: Vec<(usize, Prefix)> = Vec::new();
    for start in marker_positions(args) {
        let text: &str = &args[start..start + 2];
        let prefix: Prefix = spec
            .find(text)
            .ok_or_else(|| ParseError::UnknownPrefix(text.to_string()))?;
        markers.push((start, prefix));
    }

    let mut duplicates: Vec<Prefix> = Vec::new();
    for (i, (_, prefix)) in markers.iter().enumerate() {
        let repeated: bool = markers[..i].iter().any(|(_, earlier)| earlier == prefix);
        if repeated && !spec.is_repeatable(*prefix) && !duplicates.contains(prefix) {
            duplicates.push(*prefix);
        }
    }
    if !duplicates.is_empty() {
        let names: Vec<&str> = duplicates.iter().map(Prefix::as_str).collect();
        return Err(ParseError::DuplicatePrefix(names.join(" ")));
    }

    let preamble_end: usize = markers.first().map_or(args.len(), |(start, _)| *start);
    let mut map: ArgumentMap = ArgumentMap {
        preamble: args[..preamble_end].trim().to_string(),
        values: Vec::with_capacity(markers.len()),
    };
    for (i, (start, prefix)) in markers.iter().enumerate() {
        let end: usize = markers.get(i + 1).map_or(args.len(), |(next, _)| *next);
        map.values
            .push((*prefix, args[start + 2..end].trim().to_string()));
    }
    Ok(map)
}

/// Byte offsets of every `<letter>/` that starts the string or follows
/// whitespace.
fn marker_positions(args: &str) -> Vec<usize> {
    let bytes: &[u8] = args.as_bytes();
    (0..bytes.len().saturating_sub(1))
        .filter(|&i| {
            bytes[i].is_ascii_alphabetic()
                && bytes[i + 1] == b'/'
                && (i == 0 || bytes[i - 1].is_ascii_whitespace())
        })
        .collect()
}
