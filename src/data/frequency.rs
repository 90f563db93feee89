//! Observed usage frequencies, partitioned by round family.
//!
//! Frequency files key by unit variant (ability-stripped set name, e.g.
//! `"Aero-1"` rather than `"Aero-1-RockHead"`). Five partitions exist; every
//! dataset whose key shares a round prefix reuses the same partition.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Round family a dataset draws its frequencies from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrequencyRound {
    Round1,
    Round2,
    Round3,
    Round4,
    Round5,
}

impl FrequencyRound {
    pub const ALL: [FrequencyRound; 5] = [
        FrequencyRound::Round1,
        FrequencyRound::Round2,
        FrequencyRound::Round3,
        FrequencyRound::Round4,
        FrequencyRound::Round5,
    ];

    /// Map a dataset key to its frequency partition by prefix. Unrecognized
    /// keys fall back to round 1.
    pub fn for_dataset(key: &str) -> FrequencyRound {
        if key == "round1" {
            FrequencyRound::Round1
        } else if key.starts_with("round2") {
            FrequencyRound::Round2
        } else if key.starts_with("round3") {
            FrequencyRound::Round3
        } else if key.starts_with("round4") {
            FrequencyRound::Round4
        } else if key.starts_with("round5") {
            FrequencyRound::Round5
        } else {
            FrequencyRound::Round1
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FrequencyRound::Round1 => "round1",
            FrequencyRound::Round2 => "round2",
            FrequencyRound::Round3 => "round3",
            FrequencyRound::Round4 => "round4",
            FrequencyRound::Round5 => "round5",
        }
    }
}

/// One row of a frequency file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrequencyEntry {
    pub name: String,
    pub frequency: f64,
}

/// Usage weights keyed by unit variant. Absent entries resolve to the
/// neutral 1.0 so a missing observation never drops an opponent from the
/// weighting; an empty table weights every opponent equally.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    weights: HashMap<String, f64>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: Vec<FrequencyEntry>) -> Self {
        FrequencyTable {
            weights: entries
                .into_iter()
                .map(|entry| (entry.name, entry.frequency))
                .collect(),
        }
    }

    pub fn insert(&mut self, unit_variant: impl Into<String>, frequency: f64) {
        self.weights.insert(unit_variant.into(), frequency);
    }

    /// Resolved weight for a unit-variant key; 1.0 when unobserved.
    pub fn resolve(&self, unit_variant: &str) -> f64 {
        self.weights.get(unit_variant).copied().unwrap_or(1.0)
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}

impl FromIterator<(String, f64)> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        FrequencyTable {
            weights: iter.into_iter().collect(),
        }
    }
}

/// Load a frequency file (JSON list of `{name, frequency}` rows). Returns
/// None when the file is missing or malformed; the caller substitutes an
/// empty table so every lookup resolves to 1.0.
pub fn load_frequency_table(path: &Path) -> Option<FrequencyTable> {
    let data = fs::read_to_string(path).ok()?;
    let entries: Vec<FrequencyEntry> = serde_json::from_str(&data).ok()?;
    Some(FrequencyTable::from_entries(entries))
}
