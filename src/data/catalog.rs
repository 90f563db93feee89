//! Matchup catalog: per-set opponent score tables, loaded from normalized
//! JSON (one file per dataset round).

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// One catalog entry: a set and its effectiveness against every opponent it
/// was scored against. `average` is derived output, recomputed once per
/// processing pass; any value carried by the input file is overwritten.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetRecord {
    pub name: String,
    pub scores: HashMap<String, f64>,
    #[serde(default)]
    pub average: f64,
}

pub type Catalog = Vec<SetRecord>;

/// Load a catalog file. Returns None when the file is missing or malformed;
/// the caller skips that dataset and keeps processing the rest.
pub fn load_catalog(path: &Path) -> Option<Catalog> {
    let data = fs::read_to_string(path).ok()?;
    serde_json::from_str(&data).ok()
}

#[cfg(test)]
mod tests {
    use super::SetRecord;

    #[test]
    fn average_defaults_to_zero_when_absent_from_input() {
        let record: SetRecord =
            serde_json::from_str(r#"{"name": "Aero-1", "scores": {"Mono-1": 7.5}}"#)
                .expect("record should parse");
        assert_eq!(record.name, "Aero-1");
        assert_eq!(record.scores.get("Mono-1"), Some(&7.5));
        assert_eq!(record.average, 0.0);
    }
}
