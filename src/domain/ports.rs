use crate::domain::passenger::FEATURE_COUNT;
use crate::utils::error::Result;

/// A loaded binary classifier. Implementations must be safe to share
/// read-only across server workers.
pub trait Classifier: Send + Sync {
    /// Class label for one feature row (1 = survived).
    fn predict(&self, row: &[f64; FEATURE_COUNT]) -> Result<u8>;

    /// Positive-class probability for one feature row, in [0, 1].
    fn predict_proba(&self, row: &[f64; FEATURE_COUNT]) -> Result<f64>;
}
