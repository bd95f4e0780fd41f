//! Integration test: dataset split written to disk and read back.

use kvote_io::{DatasetConfig, LabelVocabulary, read_dataset, write_dataset};
use kvote_knn::LabeledPoint;

#[test]
fn split_files_partition_the_input() {
    let dir = tempfile::tempdir().unwrap();
    let vocab = LabelVocabulary::iris();

    let input = dir.path().join("iris.csv");
    let mut text = String::from("Id,a,b,Species\n");
    for i in 0..20 {
        text.push_str(&format!("{i},{}.5,{}.25,{}\n", i, i * 2, vocab.names()[i % 3]));
    }
    std::fs::write(&input, text).unwrap();

    let config = DatasetConfig::default().with_drop_columns(["Id"]);
    let ds = read_dataset(&input, &config, &vocab).unwrap();
    assert_eq!(ds.n_features(), 2);

    let (train, test) = ds.split(0.2, 0).unwrap();
    assert_eq!(train.len(), 16);
    assert_eq!(test.len(), 4);

    let train_path = dir.path().join("train.csv");
    let test_path = dir.path().join("test.csv");
    write_dataset(&train_path, &train, &vocab).unwrap();
    write_dataset(&test_path, &test, &vocab).unwrap();

    let train_back = read_dataset(&train_path, &DatasetConfig::default(), &vocab).unwrap();
    let test_back = read_dataset(&test_path, &DatasetConfig::default(), &vocab).unwrap();
    assert_eq!(train_back, train);
    assert_eq!(test_back, test);

    let mut all: Vec<LabeledPoint> = train_back.into_points();
    all.extend(test_back.into_points());
    all.sort_by(|x, y| x.features[0].total_cmp(&y.features[0]));
    assert_eq!(all, ds.into_points());
}
