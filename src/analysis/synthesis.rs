//! Team synthesis: enumerate 3-set combinations from the top of the
//! ranking, score them, and merge ability variants of the same composition.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::analysis::team::team_score;
use crate::data::catalog::SetRecord;
use crate::data::frequency::FrequencyTable;
use crate::naming::{parse_set_name, unit_base};

/// A scored 3-set combination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredTeam {
    pub members: [String; 3],
    pub score: f64,
}

/// A ranked team entry carrying every equivalently-composed candidate (same
/// three ability-stripped bases, different ability choices). `members` and
/// `score` come from the highest-scoring variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamResult {
    pub members: [String; 3],
    pub score: f64,
    pub all_variants: Vec<ScoredTeam>,
}

/// Enumerate, score, and rank teams drawn from the top `top_n_sets` of the
/// catalog by average.
///
/// A combination is valid only when its three unit bases are pairwise
/// distinct; the same unit may not appear twice even under a different set
/// index or ability. Scoring runs data-parallel over the combinations (the
/// C(n, 3) enumeration dominates the cost of a pass) and is collected in
/// enumeration order, so ranking stays deterministic.
pub fn synthesize_teams(
    catalog: &[SetRecord],
    frequencies: &FrequencyTable,
    top_n_sets: usize,
    output_teams: usize,
) -> Vec<TeamResult> {
    let mut pool: Vec<&SetRecord> = catalog.iter().collect();
    pool.sort_by(|a, b| b.average.total_cmp(&a.average));
    pool.truncate(top_n_sets);

    let bases: Vec<String> = pool.iter().map(|set| unit_base(&set.name)).collect();
    let mut combinations: Vec<[&SetRecord; 3]> = Vec::new();
    for i in 0..pool.len() {
        for j in i + 1..pool.len() {
            if bases[j] == bases[i] {
                continue;
            }
            for k in j + 1..pool.len() {
                if bases[k] == bases[i] || bases[k] == bases[j] {
                    continue;
                }
                combinations.push([pool[i], pool[j], pool[k]]);
            }
        }
    }

    let mut candidates: Vec<ScoredTeam> = combinations
        .par_iter()
        .map(|combination| ScoredTeam {
            members: [
                combination[0].name.clone(),
                combination[1].name.clone(),
                combination[2].name.clone(),
            ],
            score: team_score(*combination, catalog, frequencies),
        })
        .collect();

    candidates.sort_by(|a, b| b.score.total_cmp(&a.score));
    merge_team_variants(candidates, output_teams)
}

/// Greedy variant merge over a score-sorted candidate list.
///
/// Walks best-first; every later unconsumed candidate whose three
/// ability-stripped base names match the current one as an unordered triple
/// folds into it. The first candidate of each composition is the
/// representative; `all_variants` lists every fold (itself included) in
/// sorted order. Stops after `output_teams` entries.
pub fn merge_team_variants(candidates: Vec<ScoredTeam>, output_teams: usize) -> Vec<TeamResult> {
    let compositions: Vec<[String; 3]> = candidates
        .iter()
        .map(|team| {
            let mut bases = [
                parse_set_name(&team.members[0]).base_name,
                parse_set_name(&team.members[1]).base_name,
                parse_set_name(&team.members[2]).base_name,
            ];
            bases.sort();
            bases
        })
        .collect();

    let mut merged: Vec<TeamResult> = Vec::new();
    let mut used = vec![false; candidates.len()];
    for i in 0..candidates.len() {
        if merged.len() >= output_teams {
            break;
        }
        if used[i] {
            continue;
        }
        used[i] = true;

        let mut variants = vec![candidates[i].clone()];
        for j in i + 1..candidates.len() {
            if used[j] || compositions[j] != compositions[i] {
                continue;
            }
            used[j] = true;
            variants.push(candidates[j].clone());
        }

        merged.push(TeamResult {
            members: candidates[i].members.clone(),
            score: candidates[i].score,
            all_variants: variants,
        });
    }

    merged
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::{merge_team_variants, synthesize_teams, ScoredTeam};
    use crate::data::catalog::SetRecord;
    use crate::data::frequency::FrequencyTable;
    use crate::naming::unit_base;

    fn set(name: &str, average: f64) -> SetRecord {
        SetRecord {
            name: name.to_string(),
            scores: HashMap::new(),
            average,
        }
    }

    fn team(members: [&str; 3], score: f64) -> ScoredTeam {
        ScoredTeam {
            members: members.map(str::to_string),
            score,
        }
    }

    #[test]
    fn no_team_shares_a_unit_base() {
        let catalog = vec![
            set("Aero-1", 9.0),
            set("Aero-2", 8.5),
            set("Aero-1-RockHead", 8.0),
            set("Mono-1", 7.0),
            set("Kart-1", 6.0),
            set("Yanma-1", 5.0),
        ];
        let teams = synthesize_teams(&catalog, &FrequencyTable::new(), catalog.len(), 50);

        assert!(!teams.is_empty());
        for result in &teams {
            for variant in &result.all_variants {
                let bases: Vec<String> =
                    variant.members.iter().map(|name| unit_base(name)).collect();
                assert_ne!(bases[0], bases[1], "{:?}", variant.members);
                assert_ne!(bases[0], bases[2], "{:?}", variant.members);
                assert_ne!(bases[1], bases[2], "{:?}", variant.members);
            }
        }
    }

    #[test]
    fn same_composition_collapses_into_one_entry() {
        let candidates = vec![
            team(["Aero-1-RockHead", "Mono-1", "Kart-1"], 9.0),
            team(["Mono-1", "Kart-1", "Aero-1-Pressure"], 8.0),
            team(["Aero-1", "Mono-1", "Yanma-1"], 7.0),
        ];
        let merged = merge_team_variants(candidates, 20);

        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].members[0], "Aero-1-RockHead");
        assert_eq!(merged[0].score, 9.0);
        assert_eq!(merged[0].all_variants.len(), 2);
        assert_eq!(merged[0].all_variants[1].score, 8.0);
        assert_eq!(merged[1].all_variants.len(), 1);
    }

    #[test]
    fn merge_is_idempotent_on_already_merged_output() {
        let candidates = vec![
            team(["Aero-1-RockHead", "Mono-1", "Kart-1"], 9.0),
            team(["Aero-1-Pressure", "Mono-1", "Kart-1"], 8.0),
            team(["Aero-1", "Mono-1", "Yanma-1"], 7.0),
            team(["Yanma-1", "Kart-1", "Mono-1"], 6.0),
        ];
        let first = merge_team_variants(candidates, 20);

        let representatives: Vec<ScoredTeam> = first
            .iter()
            .map(|result| ScoredTeam {
                members: result.members.clone(),
                score: result.score,
            })
            .collect();
        let second = merge_team_variants(representatives, 20);

        assert_eq!(second.len(), first.len());
        for (a, b) in first.iter().zip(&second) {
            assert_eq!(a.members, b.members);
            assert_eq!(a.score, b.score);
            assert_eq!(b.all_variants.len(), 1);
        }
    }

    #[test]
    fn output_count_is_capped() {
        let catalog = vec![
            set("Aero-1", 9.0),
            set("Mono-1", 8.0),
            set("Kart-1", 7.0),
            set("Yanma-1", 6.0),
            set("Xatu-1", 5.0),
        ];
        let teams = synthesize_teams(&catalog, &FrequencyTable::new(), catalog.len(), 3);
        assert_eq!(teams.len(), 3);
    }

    #[test]
    fn pool_is_limited_to_the_top_n_by_average() {
        let catalog = vec![
            set("Aero-1", 9.0),
            set("Mono-1", 8.0),
            set("Kart-1", 7.0),
            set("Yanma-1", 1.0),
        ];
        let teams = synthesize_teams(&catalog, &FrequencyTable::new(), 3, 20);

        assert_eq!(teams.len(), 1);
        assert!(teams[0]
            .members
            .iter()
            .all(|member| member != "Yanma-1"));
    }
}
