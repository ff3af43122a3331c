use crate::core::forest::Forest;
use crate::utils::error::Result;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Deserialize and validate a forest artifact. Callers treat any
/// failure as "no model": the process keeps serving without one.
pub fn load_forest<P: AsRef<Path>>(path: P) -> Result<Forest> {
    let file = File::open(path.as_ref())?;
    let forest: Forest = serde_json::from_reader(BufReader::new(file))?;
    forest.validate()?;

    tracing::debug!(
        "Model artifact: {} trees over features {:?}",
        forest.n_trees(),
        forest.feature_names
    );
    Ok(forest)
}
