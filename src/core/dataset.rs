use crate::utils::error::Result;
use serde::Deserialize;
use std::path::Path;

/// One row of the processed training dataset. Only read at startup for
/// a sanity log; the request path never touches it.
#[derive(Debug, Clone, Deserialize)]
pub struct ReferenceRecord {
    #[serde(rename = "Survived")]
    pub survived: u8,
    #[serde(rename = "Pclass")]
    pub pclass: i64,
    #[serde(rename = "Age")]
    pub age: f64,
    #[serde(rename = "SibSp")]
    pub sib_sp: i64,
    #[serde(rename = "Parch")]
    pub parch: i64,
    #[serde(rename = "Fare")]
    pub fare: f64,
}

pub fn load_reference<P: AsRef<Path>>(path: P) -> Result<Vec<ReferenceRecord>> {
    let mut reader = csv::Reader::from_path(path.as_ref())?;
    let mut records = Vec::new();
    for record in reader.deserialize() {
        records.push(record?);
    }
    Ok(records)
}

/// Fraction of reference rows with a positive outcome.
pub fn survival_rate(records: &[ReferenceRecord]) -> f64 {
    if records.is_empty() {
        return 0.0;
    }
    let survived = records.iter().filter(|r| r.survived == 1).count();
    survived as f64 / records.len() as f64
}
