use anyhow::Result;
use std::io::Write;
use tempfile::TempDir;
use titanic_serve::{dataset, loader, Classifier};

// Startup-path behavior against files on disk, the way main wires it:
// artifact and reference CSV read from configurable paths.

#[test]
fn test_artifact_and_dataset_load_from_disk() -> Result<()> {
    let dir = TempDir::new()?;

    let artifact_path = dir.path().join("forest.json");
    std::fs::copy(
        format!("{}/model/forest.json", env!("CARGO_MANIFEST_DIR")),
        &artifact_path,
    )?;

    let dataset_path = dir.path().join("reference.csv");
    let mut csv_file = std::fs::File::create(&dataset_path)?;
    writeln!(csv_file, "Survived,Pclass,Age,SibSp,Parch,Fare")?;
    writeln!(csv_file, "0,3,22,1,0,7.25")?;
    writeln!(csv_file, "1,1,38,1,0,71.2833")?;
    writeln!(csv_file, "1,3,26,0,0,7.925")?;
    writeln!(csv_file, "0,3,35,0,0,8.05")?;

    let forest = loader::load_forest(&artifact_path)?;
    let proba = forest.predict_proba(&[3.0, 22.0, 1.0, 0.0, 7.25])?;
    assert!((0.0..=1.0).contains(&proba));

    let records = dataset::load_reference(&dataset_path)?;
    assert_eq!(records.len(), 4);
    assert_eq!(dataset::survival_rate(&records), 0.5);
    Ok(())
}

#[test]
fn test_corrupt_artifact_is_rejected_not_panicked() -> Result<()> {
    let dir = TempDir::new()?;
    let artifact_path = dir.path().join("forest.json");
    std::fs::write(&artifact_path, "{\"n_features\": 5")?;

    assert!(loader::load_forest(&artifact_path).is_err());
    Ok(())
}

#[test]
fn test_committed_reference_dataset_parses() -> Result<()> {
    let records = dataset::load_reference(format!(
        "{}/model/processed_titanic.csv",
        env!("CARGO_MANIFEST_DIR")
    ))?;
    assert!(!records.is_empty());

    let rate = dataset::survival_rate(&records);
    assert!(rate > 0.0 && rate < 1.0);
    Ok(())
}
