// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Human-readable job names.
//!
//! A job name is the shared `metadata.name` of every resource one launch
//! creates, so it doubles as the teardown join key. Names are derived from a
//! seed (the config path) mixed with a microsecond clock reading, hashed, and
//! encoded as `{adjective}-{noun}-{hex}`; two launches of the same config a
//! microsecond apart still get different names.

use crate::clock::Clock;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Kubernetes DNS-1123 label limit.
pub const MAX_NAME_LEN: usize = 63;

const ADJECTIVES: &[&str] = &[
    "amber", "ancient", "autumn", "bold", "brave", "bright", "calm", "clever", "cold", "cool",
    "crimson", "curly", "damp", "dark", "delicate", "divine", "dry", "eager", "empty", "fancy",
    "fierce", "floral", "fragrant", "frosty", "gentle", "glad", "golden", "green", "hidden",
    "holy", "icy", "jolly", "late", "lingering", "little", "lively", "long", "lucky", "misty",
    "muddy", "nameless", "noisy", "odd", "old", "orange", "patient", "plain", "polished",
    "proud", "purple", "quiet", "rapid", "red", "restless", "rough", "round", "royal", "shiny",
    "shy", "silent", "small", "snowy", "soft", "solitary", "sparkling", "spring", "steep", "still",
    "summer", "swift", "tight", "tiny", "twilight", "wandering", "weathered", "white", "wild",
    "winter", "wispy", "withered", "yellow", "young",
];

const NOUNS: &[&str] = &[
    "bird", "breeze", "brook", "bush", "butterfly", "cherry", "cloud", "darkness", "dawn", "dew",
    "dream", "dust", "feather", "field", "fire", "firefly", "flower", "fog", "forest", "frog",
    "frost", "glade", "glitter", "grass", "haze", "hill", "lake", "leaf", "meadow", "moon",
    "morning", "mountain", "night", "paper", "pine", "pond", "rain", "resonance", "river", "sea",
    "shadow", "shape", "silence", "sky", "smoke", "snow", "snowflake", "sound", "star", "sun",
    "sunset", "surf", "thunder", "tree", "violet", "voice", "water", "waterfall", "wave",
    "wildflower", "wind", "wood",
];

/// Unique name shared by every resource of one launched job.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobName(String);

impl JobName {
    /// Wrap an existing name (e.g. one typed by an operator for teardown).
    pub fn from_string(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True when the name is a valid DNS-1123 label.
    pub fn is_dns_label(&self) -> bool {
        let s = self.0.as_str();
        !s.is_empty()
            && s.len() <= MAX_NAME_LEN
            && s.bytes().all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
            && !s.starts_with('-')
            && !s.ends_with('-')
    }
}

impl std::fmt::Display for JobName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for JobName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<&str> for JobName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Deterministic, readable encoding of an arbitrary string.
pub fn codename(input: &str) -> JobName {
    let digest = Sha256::digest(input.as_bytes());
    let pick = |hi: u8, lo: u8, words: &[&'static str]| {
        words[usize::from(u16::from_be_bytes([hi, lo])) % words.len()]
    };
    let adjective = pick(digest[0], digest[1], ADJECTIVES);
    let noun = pick(digest[2], digest[3], NOUNS);
    let suffix: String = digest[4..7].iter().map(|b| format!("{:02x}", b)).collect();
    JobName(format!("{}-{}-{}", adjective, noun, suffix))
}

/// Generates job names from a seed and the current time.
#[derive(Clone, Debug, Default)]
pub struct NameGenerator<C: Clock> {
    clock: C,
}

impl<C: Clock> NameGenerator<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }

    /// Mix `seed` with the clock and encode it.
    pub fn new_name(&self, seed: &str) -> JobName {
        codename(&format!("{}-{}", seed, self.clock.timestamp()))
    }
}

#[cfg(test)]
#[path = "name_tests.rs"]
mod tests;
