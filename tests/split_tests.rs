use data_ingestion::data::{split_sizes, train_test_split, BreastCancer, DatasetSource};
use data_ingestion::RawDataset;
use std::collections::HashSet;

fn indexed(n: usize, width: usize) -> RawDataset {
    RawDataset::new(
        (0..n).map(|i| vec![i as f64; width]).collect(),
        (0..n).map(|i| (i % 3) as i64).collect(),
    )
    .unwrap()
}

#[test]
fn test_partition_is_disjoint_and_exhaustive() {
    let ds = indexed(97, 4);

    for seed in 0..20 {
        let split = train_test_split(&ds, 0.3, Some(seed)).unwrap();

        let train: HashSet<usize> = split.train_indices.iter().copied().collect();
        let test: HashSet<usize> = split.test_indices.iter().copied().collect();

        assert_eq!(train.len(), split.train_indices.len(), "duplicate train row");
        assert_eq!(test.len(), split.test_indices.len(), "duplicate test row");
        assert!(train.is_disjoint(&test));

        let all: HashSet<usize> = train.union(&test).copied().collect();
        assert_eq!(all, (0..97).collect::<HashSet<_>>());
    }
}

#[test]
fn test_test_share_tracks_fraction() {
    let ds = indexed(200, 2);

    for step in 1..20 {
        let fraction = step as f64 / 20.0;
        let split = train_test_split(&ds, fraction, Some(step)).unwrap();

        let realized = split.test.len() as f64 / ds.len() as f64;
        assert!(
            (realized - fraction).abs() <= 1.0 / ds.len() as f64,
            "fraction {} realized {}",
            fraction,
            realized
        );
        assert_eq!(split.train.len() + split.test.len(), ds.len());
    }
}

#[test]
fn test_parts_keep_feature_label_counts_aligned() {
    let ds = BreastCancer.load().unwrap();
    let split = train_test_split(&ds, 0.2, Some(42)).unwrap();

    assert_eq!(split.train.features().len(), split.train.labels().len());
    assert_eq!(split.test.features().len(), split.test.labels().len());
    assert_eq!(split.train.n_features(), 30);
    assert_eq!(split.test.n_features(), 30);
}

#[test]
fn test_labels_follow_their_rows() {
    let ds = indexed(60, 3);
    let split = train_test_split(&ds, 0.25, Some(8)).unwrap();

    for (features, label) in split.train.features().iter().zip(split.train.labels()) {
        let original = features[0] as usize;
        assert_eq!(*label, (original % 3) as i64);
    }
    for (features, label) in split.test.features().iter().zip(split.test.labels()) {
        let original = features[0] as usize;
        assert_eq!(*label, (original % 3) as i64);
    }
}

#[test]
fn test_invalid_fractions_rejected() {
    let ds = indexed(10, 1);
    for fraction in [0.0, 1.0, 1.5] {
        let err = train_test_split(&ds, fraction, Some(0)).unwrap_err();
        assert!(err.is_invalid_argument());
    }
    assert!(split_sizes(10, 0.999).is_err());
}
