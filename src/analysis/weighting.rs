//! Frequency-weighted set scoring.

use std::collections::HashMap;

use crate::data::frequency::FrequencyTable;
use crate::naming::unit_variant;

struct VariantGroup {
    scores: Vec<f64>,
    frequency: f64,
}

/// Frequency-weighted mean of a set's scores across every opponent.
///
/// Opponents group by unit variant; each group's resolved frequency splits
/// evenly across its ability variants, so a unit's total pull on the average
/// equals its observed usage no matter how many ability variants the
/// opponent catalog lists. An empty score map averages to 0.
pub fn weighted_average(scores: &HashMap<String, f64>, frequencies: &FrequencyTable) -> f64 {
    let mut groups: HashMap<String, VariantGroup> = HashMap::new();
    for (opponent, &score) in scores {
        let variant = unit_variant(opponent);
        let frequency = frequencies.resolve(&variant);
        groups
            .entry(variant)
            .or_insert_with(|| VariantGroup {
                scores: Vec::new(),
                frequency,
            })
            .scores
            .push(score);
    }

    let mut total_weighted = 0.0;
    let mut total_weight = 0.0;
    for group in groups.values() {
        let per_variant = group.frequency / group.scores.len() as f64;
        for score in &group.scores {
            total_weighted += score * per_variant;
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

    use super::weighted_average;
    use crate::data::frequency::FrequencyTable;

    fn scores(pairs: &[(&str, f64)]) -> HashMap<String, f64> {
        pairs
            .iter()
            .map(|(name, score)| (name.to_string(), *score))
            .collect()
    }

    #[test]
    fn unique_opponents_reduce_to_plain_frequency_weighted_mean() {
        let mut table = FrequencyTable::new();
        table.insert("Mono-1", 3.0);
        table.insert("Duo-1", 1.0);
        let scores = scores(&[("Mono-1", 10.0), ("Duo-1", 2.0)]);

        // (10*3 + 2*1) / (3 + 1)
        assert_eq!(weighted_average(&scores, &table), 8.0);
    }

    #[test]
    fn group_weight_mass_equals_resolved_frequency_regardless_of_variant_count() {
        let mut table = FrequencyTable::new();
        table.insert("Yanma-1", 2.0);
        let scores = scores(&[("Yanma-1-AbA", 4.0), ("Yanma-1-AbB", 6.0)]);

        // Weight 2.0 split into 1.0 each: (4 + 6) / 2.
        assert_eq!(weighted_average(&scores, &table), 5.0);
    }

    #[test]
    fn ability_siblings_in_the_attacker_do_not_interact() {
        // Two catalog entries for the same unit score independently; only the
        // opponent side of the map is grouped.
        let mut table = FrequencyTable::new();
        table.insert("Xatu-1", 1.0);

        let plain = scores(&[("Xatu-1", 10.0)]);
        let with_ability = scores(&[("Xatu-1", 20.0)]);
        assert_eq!(weighted_average(&plain, &table), 10.0);
        assert_eq!(weighted_average(&with_ability, &table), 20.0);
    }

    #[test]
    fn empty_scores_average_to_zero() {
        assert_eq!(weighted_average(&HashMap::new(), &FrequencyTable::new()), 0.0);
    }

    #[test]
    fn zero_frequency_everywhere_averages_to_zero() {
        let mut table = FrequencyTable::new();
        table.insert("Mono-1", 0.0);
        let scores = scores(&[("Mono-1", 9.0)]);
        assert_eq!(weighted_average(&scores, &table), 0.0);
    }
}
