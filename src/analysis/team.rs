//! Team scoring: best-responder rule over the full opponent universe.

use std::collections::HashMap;

use crate::data::catalog::SetRecord;
use crate::data::frequency::FrequencyTable;
use crate::naming::unit_variant;

/// Score a 3-set team against every catalog entry.
///
/// The opponent universe is the whole catalog, not just the team. Opponents
/// group by unit variant with the group frequency split evenly across its
/// ability variants (same rule as [super::weighting::weighted_average]);
/// against each concrete opponent only the best member's score counts. A
/// member with no entry for an opponent contributes 0, and the running max
/// starts at 0, so negative scores never drag a matchup below zero.
pub fn team_score(
    team: [&SetRecord; 3],
    catalog: &[SetRecord],
    frequencies: &FrequencyTable,
) -> f64 {
    if catalog.is_empty() {
        return 0.0;
    }

    let mut opponent_groups: HashMap<String, Vec<&str>> = HashMap::new();
    for set in catalog {
        opponent_groups
            .entry(unit_variant(&set.name))
            .or_default()
            .push(set.name.as_str());
    }

    let mut total_weighted = 0.0;
    let mut total_weight = 0.0;
    for (variant, opponents) in &opponent_groups {
        let per_variant = frequencies.resolve(variant) / opponents.len() as f64;
        for opponent in opponents {
            let mut best: f64 = 0.0;
            for member in &team {
                if let Some(&score) = member.scores.get(*opponent) {
                    best = best.max(score);
                }
            }
            total_weighted += best * per_variant;
            total_weight += per_variant;
        }
    }

    if total_weight > 0.0 {
        total_weighted / total_weight
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::team_score;
    use crate::data::catalog::SetRecord;
    use crate::data::frequency::FrequencyTable;

    fn set(name: &str, scores: &[(&str, f64)]) -> SetRecord {
        SetRecord {
            name: name.to_string(),
            scores: scores
                .iter()
                .map(|(opponent, score)| (opponent.to_string(), *score))
                .collect(),
            average: 0.0,
        }
    }

    fn catalog() -> Vec<SetRecord> {
        vec![
            set("Aero-1", &[("Aero-1", 5.0), ("Mono-1", 9.0), ("Kart-1", 1.0)]),
            set("Mono-1", &[("Aero-1", 3.0), ("Mono-1", 5.0), ("Kart-1", 8.0)]),
            set("Kart-1", &[("Aero-1", 7.0), ("Mono-1", 2.0), ("Kart-1", 5.0)]),
        ]
    }

    #[test]
    fn score_is_invariant_under_member_reordering() {
        let catalog = catalog();
        let table = FrequencyTable::new();
        let a = &catalog[0];
        let b = &catalog[1];
        let c = &catalog[2];

        let forward = team_score([a, b, c], &catalog, &table);
        let reversed = team_score([c, b, a], &catalog, &table);
        let rotated = team_score([b, c, a], &catalog, &table);

        assert_eq!(forward, reversed);
        assert_eq!(forward, rotated);
    }

    #[test]
    fn best_responder_wins_each_opponent() {
        let catalog = catalog();
        let table = FrequencyTable::new();
        let score = team_score([&catalog[0], &catalog[1], &catalog[2]], &catalog, &table);

        // Best vs Aero-1 = 7, vs Mono-1 = 9, vs Kart-1 = 8; equal weights.
        assert_eq!(score, 8.0);
    }

    #[test]
    fn missing_opponent_entries_count_as_zero() {
        let mut catalog = catalog();
        catalog.push(set("Ghost-1", &[]));
        let blank = set("Blank-1", &[]);
        let table = FrequencyTable::new();

        let score = team_score([&blank, &blank, &blank], &catalog, &table);
        assert_eq!(score, 0.0);
    }

    #[test]
    fn empty_catalog_scores_zero() {
        let member = set("Aero-1", &[]);
        assert_eq!(
            team_score([&member, &member, &member], &[], &FrequencyTable::new()),
            0.0
        );
    }

    #[test]
    fn opponent_frequency_mass_splits_across_ability_variants() {
        let catalog = vec![
            set("Aero-1", &[("Yanma-1-AbA", 4.0), ("Yanma-1-AbB", 6.0)]),
            set("Yanma-1-AbA", &[]),
            set("Yanma-1-AbB", &[]),
        ];
        let mut table = FrequencyTable::new();
        table.insert("Yanma-1", 2.0);
        table.insert("Aero-1", 0.0);

        let score = team_score(
            [&catalog[0], &catalog[1], &catalog[2]],
            &catalog,
            &table,
        );
        // Aero-1 group has weight 0; Yanma group weight 2.0 split 1.0 each:
        // (4 + 6) / 2.
        assert_eq!(score, 5.0);
    }
}
