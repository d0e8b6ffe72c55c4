// lab-fetch: Model and Taxonomy Fetcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Fragment name parsing and grouping.
//!
//! ```text
//! "ggml-7b.gguf.split.aa"
//!   split at FIRST ".split."
//!   name   = "ggml-7b.gguf"   non-empty, no ' ' '\t' '\n' ','
//!   suffix = "aa"             non-empty, no ' ' '\t' '\n' ','
//!
//! listing --> [FragmentGroup { artifact, fragments (listing order) }]
//!             groups in first-encounter order
//! ```

use std::collections::BTreeMap;

/// Literal separating an artifact name from a fragment suffix.
pub const FRAGMENT_MARKER: &str = ".split.";

/// Characters that may not appear in an artifact name or fragment suffix.
const EXCLUDED_CHARS: [char; 4] = [' ', '\t', '\n', ','];

/// Classification of a single listing entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FragmentName<'a> {
    /// No fragment marker in the name.
    Plain,
    /// Contains the marker but the name or suffix is empty or has excluded characters.
    Malformed,
    /// A fragment of `artifact`.
    Fragment { artifact: &'a str },
}

impl<'a> FragmentName<'a> {
    #[must_use]
    pub fn parse(file_name: &'a str) -> Self {
        let Some((name, suffix)) = file_name.split_once(FRAGMENT_MARKER) else {
            return Self::Plain;
        };
        if is_token(name) && is_token(suffix) {
            Self::Fragment { artifact: name }
        } else {
            Self::Malformed
        }
    }
}

fn is_token(s: &str) -> bool {
    !s.is_empty() && !s.contains(EXCLUDED_CHARS)
}

/// Fragments belonging to one artifact, in listing order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FragmentGroup {
    artifact: String,
    fragments: Vec<String>,
}

impl FragmentGroup {
    #[must_use]
    pub fn artifact(&self) -> &str {
        &self.artifact
    }

    #[must_use]
    pub fn fragments(&self) -> &[String] {
        &self.fragments
    }
}

/// Groups fragment names by artifact.
///
/// Plain names are ignored; `on_malformed` is called with each malformed name.
/// Groups come back in the order their first fragment appeared.
pub fn group_fragments<I, S>(listing: I, mut on_malformed: impl FnMut(&str)) -> Vec<FragmentGroup>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut groups: Vec<FragmentGroup> = Vec::new();
    let mut index: BTreeMap<String, usize> = BTreeMap::new();

    for entry in listing {
        let file_name = entry.as_ref();
        match FragmentName::parse(file_name) {
            FragmentName::Plain => {}
            FragmentName::Malformed => on_malformed(file_name),
            FragmentName::Fragment { artifact } => {
                if let Some(&i) = index.get(artifact) {
                    groups[i].fragments.push(file_name.to_string());
                } else {
                    index.insert(artifact.to_string(), groups.len());
                    groups.push(FragmentGroup {
                        artifact: artifact.to_string(),
                        fragments: vec![file_name.to_string()],
                    });
                }
            }
        }
    }

    groups
}
