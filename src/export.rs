//! CSV export of an overview for spreadsheet review: one row per display
//! entry and per ranked team, across every dataset.

use std::path::Path;

use crate::overview::Overview;

/// Flatten an overview into CSV. Columns: dataset, kind (top_set /
/// bottom_set / team), rank within its list, display name or member list,
/// score string, and the variant count for teams.
pub fn export_overview_csv(path: &Path, overview: &Overview) -> Result<(), csv::Error> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["dataset", "kind", "rank", "name", "score", "variants"])?;

    for (dataset, result) in overview {
        for (slice, kind) in [(&result.top_sets, "top_set"), (&result.bottom_sets, "bottom_set")] {
            for (index, entry) in slice.iter().enumerate() {
                let rank = (index + 1).to_string();
                writer.write_record([
                    dataset.as_str(),
                    kind,
                    rank.as_str(),
                    entry.display_name.as_str(),
                    entry.display_score.as_str(),
                    "",
                ])?;
            }
        }
        for (index, team) in result.top_teams.iter().enumerate() {
            let rank = (index + 1).to_string();
            let members = team.members.join(" / ");
            let score = format!("{:.3}", team.score);
            let variants = team.all_variants.len().to_string();
            writer.write_record([
                dataset.as_str(),
                "team",
                rank.as_str(),
                members.as_str(),
                score.as_str(),
                variants.as_str(),
            ])?;
        }
    }

    writer.flush()?;
    Ok(())
}
