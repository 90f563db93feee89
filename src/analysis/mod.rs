//! Per-dataset analysis pass: weighted averages, ranked top/bottom slices,
//! and team synthesis. Pure functions over materialized inputs; loading and
//! aggregation belong to the caller.

pub mod display;
pub mod synthesis;
pub mod team;
pub mod weighting;

use serde::{Deserialize, Serialize};

use crate::data::catalog::Catalog;
use crate::data::frequency::FrequencyTable;
use self::display::{combine_ability_variants, DisplayEntry};
use self::synthesis::{synthesize_teams, TeamResult};
use self::weighting::weighted_average;

/// Combination pool for most datasets.
pub const TOP_POOL_DEFAULT: usize = 100;
/// Larger pool for the round-5 family, which carries bigger catalogs.
pub const TOP_POOL_ROUND5: usize = 200;
/// Raw slice taken from each end of the ranking before compaction.
pub const RAW_SLICE: usize = 40;
/// Display rows kept per slice after ability pairing.
pub const DISPLAY_COUNT: usize = 20;
/// Ranked teams emitted per dataset.
pub const TEAM_OUTPUT: usize = 20;

/// Result of one dataset pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetOverview {
    pub top_sets: Vec<DisplayEntry>,
    pub bottom_sets: Vec<DisplayEntry>,
    pub top_teams: Vec<TeamResult>,
}

/// Combination pool size for a dataset, capped at the catalog size. The
/// round-5 family gets the larger pool; note this keys on a substring, not
/// the prefix rule frequency partitions use.
pub fn pool_size(dataset_key: &str, catalog_len: usize) -> usize {
    let cap = if dataset_key.contains("round5") {
        TOP_POOL_ROUND5
    } else {
        TOP_POOL_DEFAULT
    };
    cap.min(catalog_len)
}

/// Run the full pass over one dataset: recompute every set's weighted
/// average, rank, compact the top/bottom slices to [DISPLAY_COUNT] rows
/// each, and synthesize [TEAM_OUTPUT] teams from the dataset's pool.
pub fn process_dataset(
    dataset_key: &str,
    mut catalog: Catalog,
    frequencies: &FrequencyTable,
) -> DatasetOverview {
    for set in &mut catalog {
        set.average = weighted_average(&set.scores, frequencies);
    }
    catalog.sort_by(|a, b| b.average.total_cmp(&a.average));

    let top_raw = &catalog[..RAW_SLICE.min(catalog.len())];
    let top_sets = combine_ability_variants(top_raw, DISPLAY_COUNT);

    // Bottom slice runs worst-first.
    let bottom_raw: Vec<_> = catalog[catalog.len().saturating_sub(RAW_SLICE)..]
        .iter()
        .rev()
        .cloned()
        .collect();
    let bottom_sets = combine_ability_variants(&bottom_raw, DISPLAY_COUNT);

    let top_teams = synthesize_teams(
        &catalog,
        frequencies,
        pool_size(dataset_key, catalog.len()),
        TEAM_OUTPUT,
    );

    DatasetOverview {
        top_sets,
        bottom_sets,
        top_teams,
    }
}
