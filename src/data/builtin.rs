//! Bundled breast-cancer diagnostic table
//!
//! A fixed binary-classification dataset with the shape of the Wisconsin
//! diagnostic breast-cancer data: 569 rows, 30 features (ten cell-nucleus
//! measurements, each as mean / standard error / worst value) and labels
//! 0 = malignant, 1 = benign.
//!
//! Rows are generated around per-class centres from a fixed seed, so every
//! load yields the identical table without touching the network or disk.

use crate::data::dataset::{DatasetSource, RawDataset};
use crate::error::Result;
use once_cell::sync::Lazy;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

pub const N_SAMPLES: usize = 569;
pub const N_MALIGNANT: usize = 212;
pub const N_FEATURES: usize = 30;

pub const LABEL_NAMES: [&str; 2] = ["malignant", "benign"];

const TABLE_SEED: u64 = 0x5eed_0569;

/// Relative half-width of the uniform jitter around each class centre
const SPREAD: f64 = 0.25;

/// (measurement, [malignant, benign] centre) for the mean, error and worst columns
static MEASUREMENTS: [(&str, [f64; 2], [f64; 2], [f64; 2]); 10] = [
    ("radius", [17.46, 12.15], [0.609, 0.284], [21.13, 13.38]),
    ("texture", [21.60, 17.91], [1.211, 1.220], [29.32, 23.52]),
    ("perimeter", [115.37, 78.08], [4.324, 2.000], [141.37, 87.01]),
    ("area", [978.38, 462.79], [72.67, 21.14], [1422.29, 558.90]),
    ("smoothness", [0.1029, 0.0925], [0.0068, 0.0072], [0.1448, 0.1250]),
    ("compactness", [0.1452, 0.0801], [0.0323, 0.0214], [0.3748, 0.1827]),
    ("concavity", [0.1608, 0.0461], [0.0418, 0.0260], [0.4506, 0.1662]),
    ("concave points", [0.0880, 0.0257], [0.0151, 0.0099], [0.1822, 0.0744]),
    ("symmetry", [0.1929, 0.1742], [0.0205, 0.0206], [0.3235, 0.2702]),
    ("fractal dimension", [0.0627, 0.0629], [0.0041, 0.0036], [0.0915, 0.0794]),
];

static FEATURE_NAMES: Lazy<Vec<String>> = Lazy::new(|| {
    let mut names = Vec::with_capacity(N_FEATURES);
    names.extend(MEASUREMENTS.iter().map(|(m, ..)| format!("mean {}", m)));
    names.extend(MEASUREMENTS.iter().map(|(m, ..)| format!("{} error", m)));
    names.extend(MEASUREMENTS.iter().map(|(m, ..)| format!("worst {}", m)));
    names
});

/// The built-in dataset source
#[derive(Debug, Clone, Copy, Default)]
pub struct BreastCancer;

impl BreastCancer {
    pub fn label_names() -> &'static [&'static str] {
        &LABEL_NAMES
    }

    fn centres(label: usize) -> impl Iterator<Item = f64> {
        let means = MEASUREMENTS.iter().map(move |(_, m, _, _)| m[label]);
        let errors = MEASUREMENTS.iter().map(move |(_, _, e, _)| e[label]);
        let worst = MEASUREMENTS.iter().map(move |(_, _, _, w)| w[label]);
        means.chain(errors).chain(worst)
    }
}

impl DatasetSource for BreastCancer {
    fn name(&self) -> &str {
        "breast_cancer"
    }

    fn load(&self) -> Result<RawDataset> {
        let mut rng = StdRng::seed_from_u64(TABLE_SEED);

        let mut labels: Vec<i64> = (0..N_SAMPLES)
            .map(|i| if i < N_MALIGNANT { 0 } else { 1 })
            .collect();
        labels.shuffle(&mut rng);

        let features: Vec<Vec<f64>> = labels
            .iter()
            .map(|&label| {
                Self::centres(label as usize)
                    .map(|centre| centre * (1.0 + rng.gen_range(-SPREAD..SPREAD)))
                    .collect()
            })
            .collect();

        RawDataset::new(features, labels)
    }

    fn feature_names(&self) -> Option<&[String]> {
        Some(FEATURE_NAMES.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape() {
        let ds = BreastCancer.load().unwrap();
        assert_eq!(ds.len(), N_SAMPLES);
        assert_eq!(ds.n_features(), N_FEATURES);

        let names = BreastCancer.feature_names().unwrap();
        assert_eq!(names.len(), N_FEATURES);
        assert_eq!(names[0], "mean radius");
        assert_eq!(names[10], "radius error");
        assert_eq!(names[29], "worst fractal dimension");
    }

    #[test]
    fn test_label_names_match_label_values() {
        let names = BreastCancer::label_names();
        assert_eq!(names, &["malignant", "benign"]);

        let ds = BreastCancer.load().unwrap();
        let counts: Vec<usize> = (0..names.len() as i64)
            .map(|label| ds.labels().iter().filter(|&&l| l == label).count())
            .collect();
        assert_eq!(counts, vec![212, 357]);
    }

    #[test]
    fn test_class_balance() {
        let ds = BreastCancer.load().unwrap();
        let malignant = ds.labels().iter().filter(|&&l| l == 0).count();
        let benign = ds.labels().iter().filter(|&&l| l == 1).count();
        assert_eq!(malignant, N_MALIGNANT);
        assert_eq!(benign, N_SAMPLES - N_MALIGNANT);
    }

    #[test]
    fn test_identical_across_loads() {
        assert_eq!(BreastCancer.load().unwrap(), BreastCancer.load().unwrap());
    }

    #[test]
    fn test_values_positive_and_finite() {
        let ds = BreastCancer.load().unwrap();
        assert!(ds
            .features()
            .iter()
            .flatten()
            .all(|v| v.is_finite() && *v > 0.0));
    }
}
