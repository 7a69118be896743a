//! Group-by-mean aggregation
//!
//! Collapses raw records sharing a `GroupKey` into a single record whose
//! measurement is the arithmetic mean of the group.

use super::types::{AggregatedRecord, GroupKey, RawRecord};
use std::collections::BTreeMap;

/// Running sum and count for one group
#[derive(Debug, Default, Clone, Copy)]
struct Accumulator {
    sum: f64,
    count: usize,
}

impl Accumulator {
    fn push(&mut self, value: f64) {
        self.sum += value;
        self.count += 1;
    }

    fn mean(&self) -> f64 {
        self.sum / self.count as f64
    }
}

/// Aggregate raw records into one record per unique key.
///
/// Output is sorted ascending by key.
pub fn aggregate<I>(raw: I) -> Vec<AggregatedRecord>
where
    I: IntoIterator<Item = RawRecord>,
{
    let mut groups: BTreeMap<GroupKey, Accumulator> = BTreeMap::new();

    for record in raw {
        let value = record.pct_colonies_impacted;
        let key = GroupKey {
            state: record.state,
            ansi: record.ansi,
            affected_by: record.affected_by,
            year: record.year,
            state_code: record.state_code,
        };
        groups.entry(key).or_default().push(value);
    }

    groups
        .into_iter()
        .map(|(key, acc)| AggregatedRecord::from_group(key, acc.mean(), acc.count))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn sample() -> Vec<RawRecord> {
        vec![
            RawRecord::new("California", "6", "Varroa_mites", 2015, "CA", 10.0),
            RawRecord::new("California", "6", "Varroa_mites", 2015, "CA", 20.0),
            RawRecord::new("California", "6", "Varroa_mites", 2016, "CA", 7.0),
            RawRecord::new("Texas", "48", "Other_pests_and_parasites", 2015, "TX", 50.0),
            RawRecord::new("Texas", "48", "Varroa_mites", 2015, "TX", 30.0),
            RawRecord::new("Texas", "48", "Varroa_mites", 2015, "TX", 40.0),
            RawRecord::new("Texas", "48", "Varroa_mites", 2015, "TX", 35.0),
        ]
    }

    #[test]
    fn test_keys_are_unique() {
        let aggregated = aggregate(sample());

        let keys: HashSet<GroupKey> = aggregated.iter().map(|r| r.key()).collect();
        assert_eq!(keys.len(), aggregated.len());
        assert_eq!(aggregated.len(), 4);
    }

    #[test]
    fn test_values_are_group_means() {
        let raw = sample();
        let aggregated = aggregate(raw.clone());

        for record in &aggregated {
            let group: Vec<f64> = raw
                .iter()
                .filter(|r| r.key() == record.key())
                .map(|r| r.pct_colonies_impacted)
                .collect();
            let expected = group.iter().sum::<f64>() / group.len() as f64;

            assert!((record.pct_colonies_impacted - expected).abs() < 1e-9);
            assert_eq!(record.sample_count, group.len());
        }
    }

    #[test]
    fn test_output_sorted_by_key() {
        let aggregated = aggregate(sample());

        let keys: Vec<GroupKey> = aggregated.iter().map(|r| r.key()).collect();
        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(keys, sorted);
    }

    #[test]
    fn test_partial_key_difference_keeps_groups_apart() {
        // Same state and year but different ANSI codes
        let raw = vec![
            RawRecord::new("Other States", "88", "Varroa_mites", 2015, "OT", 10.0),
            RawRecord::new("Other States", "99", "Varroa_mites", 2015, "OT", 30.0),
        ];

        let aggregated = aggregate(raw);

        assert_eq!(aggregated.len(), 2);
        assert_eq!(aggregated[0].pct_colonies_impacted, 10.0);
        assert_eq!(aggregated[1].pct_colonies_impacted, 30.0);
    }

    #[test]
    fn test_empty_input() {
        assert!(aggregate(Vec::new()).is_empty());
    }
}
