//! Integration test: writers round-trip through the reader.

use kvote_io::{
    Dataset, DatasetConfig, IoError, LabelVocabulary, read_dataset, write_dataset,
    write_predictions,
};
use kvote_knn::{
    ClassifyConfig, LabeledPoint, Prediction, Predictions, QueryFailure, ReferenceSet, classify,
};

fn small_dataset() -> Dataset {
    Dataset::new(
        vec![
            LabeledPoint::new(vec![5.1, 3.5], 0),
            LabeledPoint::new(vec![7.0, 3.2], 1),
            LabeledPoint::new(vec![6.3, 3.3], 2),
            LabeledPoint::new(vec![0.1, 1e-3], 1),
        ],
        vec!["SepalLengthCm".to_string(), "SepalWidthCm".to_string()],
        "Species",
    )
    .unwrap()
}

#[test]
fn dataset_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.csv");
    let vocab = LabelVocabulary::iris();
    let original = small_dataset();

    write_dataset(&path, &original, &vocab).unwrap();
    let read_back = read_dataset(&path, &DatasetConfig::default(), &vocab).unwrap();

    assert_eq!(read_back, original);
}

#[test]
fn dataset_unknown_label_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.csv");
    let ds = Dataset::new(
        vec![LabeledPoint::new(vec![1.0], 9)],
        vec!["x".to_string()],
        "class",
    )
    .unwrap();
    let err = write_dataset(&path, &ds, &LabelVocabulary::iris()).unwrap_err();
    assert!(matches!(err, IoError::Validation { count: 1, .. }));
}

#[test]
fn predictions_csv_contents() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pred.csv");
    let vocab = LabelVocabulary::iris();

    let reference = ReferenceSet::from_points(small_dataset().points(), vocab.len()).unwrap();
    let queries = [[5.0, 3.4], [f64::NAN, 0.0]];
    let predictions = classify(&reference, &queries, &ClassifyConfig::new(1)).unwrap();
    assert_eq!(
        predictions.outcomes()[1],
        Err(QueryFailure::NonFiniteQuery)
    );

    write_predictions(&path, &predictions, &[Some(0), None], &vocab).unwrap();
    let text = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "index,predicted,actual,status,reason");
    assert_eq!(lines[1], "0,Iris-setosa,Iris-setosa,classified,");
    assert!(lines[2].starts_with("1,,,failed,"), "{}", lines[2]);
    assert!(lines[2].contains("non-finite"));
}

#[test]
fn predictions_truth_length_mismatch() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pred.csv");
    let vocab = LabelVocabulary::iris();
    let reference = ReferenceSet::from_points(small_dataset().points(), vocab.len()).unwrap();
    let predictions = classify(&reference, &[[1.0, 1.0]], &ClassifyConfig::new(1)).unwrap();

    let err = write_predictions(&path, &predictions, &[], &vocab).unwrap_err();
    assert!(matches!(
        err,
        IoError::LengthMismatch {
            expected: 1,
            got: 0,
            ..
        }
    ));
}

#[test]
fn predictions_unclassified_written_as_sentinel() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pred.csv");
    let predictions = Predictions::new(
        3,
        vec![
            Ok(Prediction::Unclassified),
            Ok(Prediction::Class(2)),
            Err(QueryFailure::NonFiniteQuery),
        ],
    );

    write_predictions(
        &path,
        &predictions,
        &[Some(1), None, None],
        &LabelVocabulary::iris(),
    )
    .unwrap();
    let text = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[1], "0,-1,Iris-versicolor,unclassified,");
    assert_eq!(lines[2], "1,Iris-virginica,,classified,");
    assert!(lines[3].starts_with("2,,,failed,"), "{}", lines[3]);
}

#[test]
fn dataset_unlabeled_point_has_empty_class_cell() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.csv");
    let ds = Dataset::new(
        vec![
            LabeledPoint::new(vec![1.5], 2),
            LabeledPoint::unlabeled(vec![2.5]),
        ],
        vec!["x".to_string()],
        "Species",
    )
    .unwrap();

    write_dataset(&path, &ds, &LabelVocabulary::iris()).unwrap();
    let text = std::fs::read_to_string(&path).unwrap();
    assert_eq!(text, "x,Species\n1.5,Iris-virginica\n2.5,\n");
}
