//! Ranked-list compaction: pair ability variants of the same base into one
//! display row.

use serde::{Deserialize, Serialize};

use crate::data::catalog::SetRecord;
use crate::naming::parse_set_name;

/// One row of a top/bottom ranked list, possibly covering two ability
/// variants of the same base set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayEntry {
    pub display_name: String,
    pub display_score: String,
    pub average: f64,
    pub base_name: String,
}

/// Compact a ranked slice to at most `target_count` display rows.
///
/// Entries without an ability pass through unchanged. An entry with an
/// ability pairs with the nearest later unconsumed entry sharing its base
/// name and also carrying an ability; the pair collapses into one row
/// showing both abilities (`Base-AbA/AbB`) and both averages. Only pairs
/// merge; a third variant of the same base starts a new row. Averages are
/// shown with exactly three decimals.
pub fn combine_ability_variants(ranked: &[SetRecord], target_count: usize) -> Vec<DisplayEntry> {
    let mut result: Vec<DisplayEntry> = Vec::new();
    let mut used = vec![false; ranked.len()];

    for i in 0..ranked.len() {
        if result.len() >= target_count {
            break;
        }
        if used[i] {
            continue;
        }

        let current = &ranked[i];
        let current_info = parse_set_name(&current.name);
        let Some(current_ability) = current_info.ability.as_deref() else {
            result.push(DisplayEntry {
                display_name: current.name.clone(),
                display_score: format!("{:.3}", current.average),
                average: current.average,
                base_name: current_info.base_name,
            });
            used[i] = true;
            continue;
        };

        let mut pair: Option<(usize, String)> = None;
        for j in i + 1..ranked.len() {
            if used[j] {
                continue;
            }
            let other_info = parse_set_name(&ranked[j].name);
            if other_info.base_name == current_info.base_name {
                if let Some(other_ability) = other_info.ability {
                    pair = Some((j, other_ability));
                    break;
                }
            }
        }

        match pair {
            Some((j, other_ability)) => {
                result.push(DisplayEntry {
                    display_name: format!(
                        "{}-{}/{}",
                        current_info.base_name, current_ability, other_ability
                    ),
                    display_score: format!("{:.3} ({:.3})", current.average, ranked[j].average),
                    average: current.average,
                    base_name: current_info.base_name,
                });
                used[i] = true;
                used[j] = true;
            }
            None => {
                result.push(DisplayEntry {
                    display_name: current.name.clone(),
                    display_score: format!("{:.3}", current.average),
                    average: current.average,
                    base_name: current_info.base_name,
                });
                used[i] = true;
            }
        }
    }

    result
}
