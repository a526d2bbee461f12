#![allow(dead_code)]

use proptest::prelude::*;
use proptest::test_runner::{Config as ProptestConfig, FileFailurePersistence};
use scoremap::{CoordinatePair, Dataset};

/// Tolerance for comparing grid masses after smoothing.
pub const EPS_MASS: f64 = 1e-9;

pub fn proptest_config() -> ProptestConfig {
    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|v| v.parse::<u32>().ok())
        .unwrap_or(64);

    let mut config = ProptestConfig::with_failure_persistence(FileFailurePersistence::WithSource(
        "proptest-regressions",
    ));
    config.cases = cases;
    config.max_shrink_iters = 1024;
    config
}

pub fn arb_pair(max_value: u32) -> impl Strategy<Value = CoordinatePair> {
    (0..=max_value, 0..=max_value).prop_map(|(x, y)| CoordinatePair::new(x, y))
}

pub fn arb_dataset(max_value: u32, max_pairs: usize) -> impl Strategy<Value = Dataset> {
    prop::collection::vec(arb_pair(max_value), 0..=max_pairs)
        .prop_map(|pairs| pairs.into_iter().collect())
}

/// Renders a dataset as `x,y` lines.
pub fn to_lines_text(dataset: &Dataset) -> String {
    dataset
        .iter()
        .map(|pair| format!("{},{}\n", pair.x, pair.y))
        .collect()
}

/// Renders a dataset as fully quoted delimited text.
pub fn to_quoted_csv_text(dataset: &Dataset) -> String {
    dataset
        .iter()
        .map(|pair| format!("\"{}\",\"{}\"\n", pair.x, pair.y))
        .collect()
}
