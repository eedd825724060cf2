use marquee_core::{generate_row, impact, EntityId, PValueOptions, RatingRecord, WeightedPattern};
use proptest::prelude::*;

fn rating() -> impl Strategy<Value = f64> {
    1.0f64..=10.0
}

fn record() -> impl Strategy<Value = RatingRecord> {
    (rating(), prop::collection::vec(rating(), 0..6))
        .prop_map(|(baseline, history)| RatingRecord::new(baseline, history))
}

fn pattern_with(length: usize, records: &[RatingRecord]) -> (WeightedPattern, Vec<EntityId>) {
    let mut pattern = WeightedPattern::new(length);
    let ids: Vec<EntityId> = (0..records.len()).map(|i| EntityId::new(format!("p{}", i))).collect();
    for (id, rec) in ids.iter().zip(records) {
        pattern.add_row(id.clone(), rec);
    }
    (pattern, ids)
}

proptest! {
    #[test]
    fn row_length_matches_request(rec in record(), length in 0usize..40) {
        prop_assert_eq!(generate_row(&rec, length).len(), length);
    }

    #[test]
    fn empty_history_depends_only_on_baseline(baseline in -50.0f64..50.0, length in 1usize..16) {
        let row = generate_row(&RatingRecord::new(baseline, vec![]), length);
        for (k, w) in row.iter().enumerate() {
            let expected = baseline + (baseline - 5.5) * impact(k + 1);
            prop_assert!((w - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn score_ignores_entries_past_length(
        records in prop::collection::vec(record(), 1..4),
        length in 1usize..6,
        extra in 1usize..4,
    ) {
        let (pattern, ids) = pattern_with(length, &records);
        let cast: Vec<EntityId> = (0..length + extra).map(|i| ids[i % ids.len()].clone()).collect();
        prop_assert_eq!(pattern.score(&cast).unwrap(), pattern.score(&cast[..length]).unwrap());
    }

    #[test]
    fn slice_copies_range_and_leaves_source_untouched(
        records in prop::collection::vec(record(), 1..4),
        length in 1usize..10,
        bounds in (1usize..10, 0usize..10),
        replacement in record(),
    ) {
        let (pattern, ids) = pattern_with(length, &records);
        let start = bounds.0.min(length);
        let stop = (start - 1 + bounds.1).min(length);
        let before = pattern.clone();

        let mut sliced = pattern.slice(start, stop).unwrap();
        prop_assert_eq!(sliced.len(), stop + 1 - start);
        for id in &ids {
            prop_assert_eq!(sliced.row(id).unwrap(), &pattern.row(id).unwrap()[start - 1..stop]);
        }

        for id in &ids {
            sliced.add_row(id.clone(), &replacement);
        }
        sliced.add_row(EntityId::new("extra"), &replacement);
        prop_assert_eq!(&pattern, &before);
    }

    #[test]
    fn length_one_pvalue_is_fraction_clearing_threshold(
        records in prop::collection::vec(record(), 1..6),
        threshold in -5.0f64..30.0,
    ) {
        let (pattern, ids) = pattern_with(1, &records);
        let clearing = ids
            .iter()
            .filter(|id| pattern.weight_at(1, id).unwrap() >= threshold)
            .count() as f64;
        let expected = clearing / ids.len() as f64;
        prop_assert!((pattern.pvalue(threshold).unwrap() - expected).abs() < 1e-9);
    }

    #[test]
    fn pvalue_is_a_probability(
        records in prop::collection::vec(record(), 1..4),
        length in 0usize..5,
        threshold in -10.0f64..80.0,
    ) {
        let (pattern, _) = pattern_with(length, &records);
        let p = pattern.pvalue(threshold).unwrap();
        prop_assert!(p >= -1e-9 && p <= 1.0 + 1e-9, "p = {}", p);
    }

    #[test]
    fn memoization_does_not_change_pvalue(
        records in prop::collection::vec(record(), 1..4),
        length in 0usize..5,
        threshold in -10.0f64..80.0,
    ) {
        let (pattern, _) = pattern_with(length, &records);
        let options = PValueOptions { memoize: true, max_depth: None };
        prop_assert_eq!(
            pattern.pvalue(threshold).unwrap(),
            pattern.pvalue_with(threshold, &options).unwrap()
        );
    }

    #[test]
    fn base_case_is_exact(threshold in -100.0f64..100.0) {
        let p = WeightedPattern::new(0).pvalue(threshold).unwrap();
        prop_assert_eq!(p, if threshold <= 0.0 { 1.0 } else { 0.0 });
    }
}
