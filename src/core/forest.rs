use crate::domain::passenger::FEATURE_COUNT;
use crate::domain::ports::Classifier;
use crate::utils::error::{Result, ServeError};
use serde::Deserialize;

/// Index of the positive ("survived") class in per-node value pairs.
const POSITIVE_CLASS: usize = 1;

/// One decision tree in flattened parallel-array form, one entry per
/// node. `left`/`right` index into the same arrays; `-1` marks a leaf.
/// `value` holds per-node training class counts `[class 0, class 1]`.
///
/// This is the layout classifier exporters emit (children/feature/
/// threshold/value arrays), deserialized as-is.
#[derive(Debug, Clone, Deserialize)]
pub struct Tree {
    pub feature: Vec<i32>,
    pub threshold: Vec<f64>,
    pub left: Vec<i32>,
    pub right: Vec<i32>,
    pub value: Vec<[f64; 2]>,
}

impl Tree {
    pub fn n_nodes(&self) -> usize {
        self.feature.len()
    }

    fn is_leaf(&self, node: usize) -> bool {
        self.left[node] < 0
    }

    /// Walk root to leaf and return the leaf's normalized class
    /// distribution. Rows with `x <= threshold` go left.
    fn leaf_distribution(&self, row: &[f64]) -> [f64; 2] {
        let mut node = 0usize;
        while !self.is_leaf(node) {
            let feature = self.feature[node] as usize;
            node = if row[feature] <= self.threshold[node] {
                self.left[node] as usize
            } else {
                self.right[node] as usize
            };
        }

        let [c0, c1] = self.value[node];
        let total = c0 + c1;
        [c0 / total, c1 / total]
    }

    /// Structural checks that make traversal panic-free: parallel
    /// arrays agree in length, children stay in range and come after
    /// their parent, split features exist, leaf counts normalize.
    fn validate(&self, tree_index: usize, n_features: usize) -> Result<()> {
        let n = self.n_nodes();
        let malformed = |message: String| ServeError::ModelFormat {
            message: format!("tree {}: {}", tree_index, message),
        };

        if n == 0 {
            return Err(malformed("empty tree".to_string()));
        }
        if self.threshold.len() != n
            || self.left.len() != n
            || self.right.len() != n
            || self.value.len() != n
        {
            return Err(malformed(format!(
                "node arrays disagree in length ({} features, {} thresholds, {} left, {} right, {} values)",
                n,
                self.threshold.len(),
                self.left.len(),
                self.right.len(),
                self.value.len()
            )));
        }

        for node in 0..n {
            let left = self.left[node];
            let right = self.right[node];

            if (left < 0) != (right < 0) {
                return Err(malformed(format!(
                    "node {} has one child marked leaf ({}, {})",
                    node, left, right
                )));
            }

            if left < 0 {
                let [c0, c1] = self.value[node];
                if c0 < 0.0 || c1 < 0.0 || c0 + c1 <= 0.0 {
                    return Err(malformed(format!(
                        "leaf {} has unusable class counts [{}, {}]",
                        node, c0, c1
                    )));
                }
            } else {
                // Children after their parent guarantees termination.
                if left as usize >= n || right as usize >= n {
                    return Err(malformed(format!(
                        "node {} child out of range ({}, {})",
                        node, left, right
                    )));
                }
                if left as usize <= node || right as usize <= node {
                    return Err(malformed(format!(
                        "node {} children must come after their parent ({}, {})",
                        node, left, right
                    )));
                }
                let feature = self.feature[node];
                if feature < 0 || feature as usize >= n_features {
                    return Err(malformed(format!(
                        "node {} splits on unknown feature {}",
                        node, feature
                    )));
                }
            }
        }

        Ok(())
    }
}

/// A binary random-forest classifier: the mean of the member trees'
/// leaf distributions. Immutable after loading.
#[derive(Debug, Clone, Deserialize)]
pub struct Forest {
    pub n_features: usize,
    pub feature_names: Vec<String>,
    pub trees: Vec<Tree>,
}

impl Forest {
    pub fn n_trees(&self) -> usize {
        self.trees.len()
    }

    pub fn validate(&self) -> Result<()> {
        if self.trees.is_empty() {
            return Err(ServeError::ModelFormat {
                message: "forest has no trees".to_string(),
            });
        }
        if self.n_features == 0 {
            return Err(ServeError::ModelFormat {
                message: "forest declares zero features".to_string(),
            });
        }
        if self.feature_names.len() != self.n_features {
            return Err(ServeError::ModelFormat {
                message: format!(
                    "{} feature names for {} features",
                    self.feature_names.len(),
                    self.n_features
                ),
            });
        }
        for (tree_index, tree) in self.trees.iter().enumerate() {
            tree.validate(tree_index, self.n_features)?;
        }
        Ok(())
    }

    /// Average class distribution over all trees.
    fn class_distribution(&self, row: &[f64]) -> Result<[f64; 2]> {
        if row.len() != self.n_features {
            return Err(ServeError::Prediction {
                message: format!(
                    "row has {} features, model expects {}",
                    row.len(),
                    self.n_features
                ),
            });
        }

        let mut acc = [0.0, 0.0];
        for tree in &self.trees {
            let [p0, p1] = tree.leaf_distribution(row);
            acc[0] += p0;
            acc[1] += p1;
        }
        let n = self.n_trees() as f64;
        Ok([acc[0] / n, acc[1] / n])
    }
}

impl Classifier for Forest {
    fn predict(&self, row: &[f64; FEATURE_COUNT]) -> Result<u8> {
        let dist = self.class_distribution(row)?;
        Ok(if dist[POSITIVE_CLASS] >= 0.5 { 1 } else { 0 })
    }

    fn predict_proba(&self, row: &[f64; FEATURE_COUNT]) -> Result<f64> {
        let dist = self.class_distribution(row)?;
        Ok(dist[POSITIVE_CLASS])
    }
}
