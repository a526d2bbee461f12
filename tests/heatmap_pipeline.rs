use std::fs;

use scoremap::data::read_pairs;
use scoremap::render::{Colormap, Origin};
use scoremap::{HeatmapBuilder, HeatmapConfig, ScoremapError, SourceFormat};

fn config(max_score: u32, sigma: f64) -> HeatmapConfig {
    HeatmapConfig {
        max_score,
        sigma,
        colormap: Colormap::default(),
    }
}

#[test]
fn known_mapping_from_file() {
    let temp = tempfile::tempdir().expect("create temp dir");
    let path = temp.path().join("grades.txt");
    fs::write(&path, "0,0\n5,5\n5,5\n").expect("write grades");

    let heatmap = HeatmapBuilder::new(config(5, 0.0))
        .build_from_path(&path, SourceFormat::from_path(&path))
        .expect("build heatmap");

    let grid = &heatmap.histogram.grid;
    assert_eq!(grid.side(), 6);
    assert_eq!(grid.get(0, 0), 1.0);
    assert_eq!(grid.get(5, 5), 2.0);
    assert_eq!(grid.occupied_cells(), 2);
    assert_eq!(heatmap.histogram.extent.as_tuple(), (0, 5, 0, 5));
    assert_eq!(heatmap.raster.origin, Origin::Lower);
}

#[test]
fn empty_source_yields_zero_grid() {
    let temp = tempfile::tempdir().expect("create temp dir");
    let path = temp.path().join("empty.csv");
    fs::write(&path, "").expect("write empty file");

    let heatmap = HeatmapBuilder::new(config(5, 1.2))
        .build_from_path(&path, SourceFormat::DelimitedText)
        .expect("empty input is not an error");

    assert_eq!(heatmap.pairs, 0);
    assert_eq!(heatmap.raster.width, 6);
    assert_eq!(heatmap.raster.height, 6);
    assert_eq!(heatmap.raster.extent.as_tuple(), (0, 5, 0, 5));
    assert_eq!(heatmap.raster.max_value(), 0.0);
}

#[test]
fn malformed_file_returns_no_grid() {
    let temp = tempfile::tempdir().expect("create temp dir");
    let path = temp.path().join("grades.csv");
    fs::write(&path, "1,2\n12,abc\n").expect("write grades");

    let err = HeatmapBuilder::default()
        .build_from_path(&path, SourceFormat::from_path(&path))
        .unwrap_err();
    match err {
        ScoremapError::MalformedRecord {
            source_name, line, ..
        } => {
            assert_eq!(line, 2);
            assert!(source_name.ends_with("grades.csv"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn rereading_a_file_is_deterministic() {
    let temp = tempfile::tempdir().expect("create temp dir");
    let path = temp.path().join("grades.csv");
    fs::write(&path, "88,92\n\"71\",64\n100,100\n0,13\n").expect("write grades");

    let first = read_pairs(&path).expect("first read");
    let second = read_pairs(&path).expect("second read");
    assert_eq!(first, second);
    assert_eq!(first.len(), 4);
}

#[test]
fn file_can_be_rewritten_after_build() {
    // The source handle is released once ingestion returns.
    let temp = tempfile::tempdir().expect("create temp dir");
    let path = temp.path().join("grades.txt");
    fs::write(&path, "3,4\n").expect("write grades");

    HeatmapBuilder::default()
        .build_from_path(&path, SourceFormat::PlainLines)
        .expect("build heatmap");

    fs::remove_file(&path).expect("remove source after build");
    assert!(!path.exists());
}
