//! Dataset registry: which matchup catalogs a run covers, plus provenance
//! stamps for produced artifacts. Read from `registry.json` under the data
//! root when present; otherwise the built-in layout applies.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::data::frequency::FrequencyRound;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetEntry {
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub last_updated: Option<String>,
}

/// Keyed by dataset name; BTreeMap so a run processes datasets in a stable
/// order.
pub type Registry = BTreeMap<String, DatasetEntry>;

pub const DEFAULT_DATA_ROOT: &str = "data";
pub const REGISTRY_FILE_NAME: &str = "registry.json";

/// Reserved manifest key for the stamped overview artifact; never a dataset.
pub const OVERVIEW_REGISTRY_KEY: &str = "overview";

/// Relative path of a frequency partition file under the data root.
pub fn frequency_path(round: FrequencyRound) -> String {
    format!("frequencies/{}.json", round.as_str())
}

/// Built-in dataset layout, used when no manifest file exists.
pub fn default_registry() -> Registry {
    const DATASETS: [(&str, &str); 10] = [
        ("round1", "matchups/round1.json"),
        ("round2table", "matchups/round2_table.json"),
        ("round2opponents", "matchups/round2_opponents.json"),
        ("round3table", "matchups/round3_table.json"),
        ("round3opponents", "matchups/round3_opponents.json"),
        ("round4table", "matchups/round4_table.json"),
        ("round4elevations", "matchups/round4_elevations.json"),
        ("round4opponents", "matchups/round4_opponents.json"),
        ("round5table", "matchups/round5_table.json"),
        ("round5opponents", "matchups/round5_opponents.json"),
    ];

    DATASETS
        .iter()
        .map(|(key, path)| {
            (
                (*key).to_string(),
                DatasetEntry {
                    path: (*path).to_string(),
                    source: None,
                    last_updated: None,
                },
            )
        })
        .collect()
}

/// Load the registry manifest. Returns None if the file is missing or
/// malformed; the caller falls back to [default_registry].
pub fn load_registry(path: &Path) -> Option<Registry> {
    let data = fs::read_to_string(path).ok()?;
    serde_json::from_str(&data).ok()
}

/// Stamp a produced artifact into the manifest so consumers can see "data
/// as of". Creates the manifest when absent; a malformed manifest is
/// replaced rather than appended to.
pub fn record_artifact(
    registry_path: &Path,
    key: &str,
    artifact_path: &str,
    source: &str,
) -> io::Result<()> {
    let mut registry: Registry = match fs::read_to_string(registry_path) {
        Ok(raw) => serde_json::from_str(&raw).unwrap_or_default(),
        Err(_) => Registry::new(),
    };
    registry.insert(
        key.to_string(),
        DatasetEntry {
            path: artifact_path.to_string(),
            source: Some(source.to_string()),
            last_updated: Some(chrono::Utc::now().to_rfc3339()),
        },
    );
    let serialized = serde_json::to_string_pretty(&registry)
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;
    fs::write(registry_path, serialized)
}
