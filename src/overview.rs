//! Aggregate overview: one entry per processed dataset, written as pretty
//! JSON after all datasets finish. Failed datasets simply have no entry.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;

use crate::analysis::DatasetOverview;

pub type Overview = BTreeMap<String, DatasetOverview>;

pub const DEFAULT_OVERVIEW_PATH: &str = "overview_data.json";

/// Write the aggregate overview. This is the one write whose failure is
/// fatal to a run.
pub fn write_overview(path: &Path, overview: &Overview) -> io::Result<()> {
    let serialized = serde_json::to_string_pretty(overview)
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;
    fs::write(path, serialized)
}

/// Read an overview back, for the export command. Missing or malformed
/// files return None.
pub fn load_overview(path: &Path) -> Option<Overview> {
    let data = fs::read_to_string(path).ok()?;
    serde_json::from_str(&data).ok()
}
