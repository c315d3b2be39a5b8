//! XGBoost JSON model format
//!
//! Reads the document written by `Booster.save_model("model.json")` and turns
//! it into validated trees. Only the `gbtree` booster with numerical splits
//! is supported.

use crate::tree::{Node, Tree};
use crate::{InferenceError, PredictionFailure};
use serde::Deserialize;
use tracing::debug;

#[derive(Debug, Deserialize)]
struct ModelDocument {
    learner: LearnerDocument,
}

#[derive(Debug, Deserialize)]
struct LearnerDocument {
    #[serde(default)]
    feature_names: Vec<String>,
    gradient_booster: BoosterDocument,
    learner_model_param: LearnerModelParam,
    objective: ObjectiveDocument,
}

#[derive(Debug, Deserialize)]
struct BoosterDocument {
    name: String,
    model: Option<TreeEnsembleDocument>,
}

#[derive(Debug, Deserialize)]
struct TreeEnsembleDocument {
    trees: Vec<TreeDocument>,
}

/// XGBoost stores every parameter as a string
#[derive(Debug, Deserialize)]
struct LearnerModelParam {
    base_score: String,
    num_feature: String,
}

#[derive(Debug, Deserialize)]
struct ObjectiveDocument {
    name: String,
}

#[derive(Debug, Deserialize)]
struct TreeDocument {
    left_children: Vec<i64>,
    right_children: Vec<i64>,
    split_indices: Vec<i64>,
    /// Threshold for splits, leaf value for leaves
    split_conditions: Vec<f32>,
    default_left: Vec<Flag>,
    #[serde(default)]
    split_type: Vec<u8>,
}

/// Older writers emit 0/1, newer ones booleans
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(untagged)]
enum Flag {
    Bool(bool),
    Int(u8),
}

impl Flag {
    fn is_set(self) -> bool {
        match self {
            Flag::Bool(b) => b,
            Flag::Int(i) => i != 0,
        }
    }
}

/// Link between the summed margin and the model output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Link {
    /// Output is the margin (squared error and friends)
    Identity,
    /// Output is exp(margin) (gamma, tweedie, poisson)
    Log,
}

impl Link {
    fn for_objective(name: &str) -> Option<Self> {
        match name {
            "reg:squarederror" | "reg:linear" | "reg:absoluteerror" | "reg:pseudohubererror"
            | "reg:quantileerror" => Some(Link::Identity),
            "reg:gamma" | "reg:tweedie" | "count:poisson" => Some(Link::Log),
            _ => None,
        }
    }
}

/// Gradient-boosted tree ensemble
#[derive(Debug, Clone)]
pub struct Booster {
    trees: Vec<Tree>,
    base_margin: f32,
    link: Link,
    num_features: usize,
    feature_names: Vec<String>,
    objective: String,
}

impl Booster {
    /// Parse and validate an XGBoost JSON document
    pub fn from_json_str(json: &str) -> Result<Self, InferenceError> {
        let document: ModelDocument = serde_json::from_str(json)
            .map_err(|e| InferenceError::ModelLoadError(format!("malformed model document: {}", e)))?;
        let learner = document.learner;

        let link = Link::for_objective(&learner.objective.name).ok_or_else(|| {
            InferenceError::ModelLoadError(format!(
                "unsupported objective {:?}",
                learner.objective.name
            ))
        })?;

        if learner.gradient_booster.name != "gbtree" {
            return Err(InferenceError::ModelLoadError(format!(
                "unsupported booster {:?}",
                learner.gradient_booster.name
            )));
        }
        let ensemble = learner
            .gradient_booster
            .model
            .ok_or_else(|| InferenceError::ModelLoadError("booster has no model".to_string()))?;

        let num_features: usize = learner
            .learner_model_param
            .num_feature
            .trim()
            .parse()
            .map_err(|_| {
                InferenceError::ModelLoadError(format!(
                    "invalid num_feature {:?}",
                    learner.learner_model_param.num_feature
                ))
            })?;

        if !learner.feature_names.is_empty() && learner.feature_names.len() != num_features {
            return Err(InferenceError::ModelLoadError(format!(
                "{} feature names for {} features",
                learner.feature_names.len(),
                num_features
            )));
        }

        let base_score = parse_base_score(&learner.learner_model_param.base_score)?;
        let base_margin = match link {
            Link::Identity => base_score,
            Link::Log => {
                if base_score <= 0.0 {
                    return Err(InferenceError::ModelLoadError(format!(
                        "base_score {} invalid for a log link",
                        base_score
                    )));
                }
                base_score.ln()
            }
        };

        let trees = ensemble
            .trees
            .iter()
            .enumerate()
            .map(|(i, t)| {
                convert_tree(t, num_features)
                    .map_err(|msg| InferenceError::ModelLoadError(format!("tree {}: {}", i, msg)))
            })
            .collect::<Result<Vec<_>, _>>()?;

        debug!(
            "Parsed booster: objective={}, trees={}, nodes={}, features={}",
            learner.objective.name,
            trees.len(),
            trees.iter().map(Tree::len).sum::<usize>(),
            num_features
        );

        Ok(Self {
            trees,
            base_margin,
            link,
            num_features,
            feature_names: learner.feature_names,
            objective: learner.objective.name,
        })
    }

    /// Model output for one row
    pub fn predict_row(&self, row: &[f64]) -> Result<f64, PredictionFailure> {
        if row.len() != self.num_features {
            return Err(PredictionFailure::ShapeMismatch {
                expected: self.num_features,
                actual: row.len(),
            });
        }

        let margin = self
            .trees
            .iter()
            .fold(self.base_margin, |acc, tree| acc + tree.leaf_value(row));

        let output = match self.link {
            Link::Identity => f64::from(margin),
            Link::Log => f64::from(margin).exp(),
        };

        if output.is_finite() {
            Ok(output)
        } else {
            Err(PredictionFailure::NonFiniteOutput(output))
        }
    }

    pub fn num_features(&self) -> usize {
        self.num_features
    }

    pub fn num_trees(&self) -> usize {
        self.trees.len()
    }

    /// Feature names recorded in the artifact (may be empty)
    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    pub fn objective(&self) -> &str {
        &self.objective
    }

    pub fn link(&self) -> Link {
        self.link
    }
}

/// `base_score` is either a plain number ("5E-1") or, since XGBoost 2.1, a
/// bracketed vector ("[5E-1]") holding one value per target.
fn parse_base_score(raw: &str) -> Result<f32, InferenceError> {
    let inner = raw.trim().trim_start_matches('[').trim_end_matches(']');
    let first = inner.split(',').next().unwrap_or_default().trim();

    first
        .parse::<f32>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| InferenceError::ModelLoadError(format!("invalid base_score {:?}", raw)))
}

fn convert_tree(doc: &TreeDocument, num_features: usize) -> Result<Tree, String> {
    let n = doc.left_children.len();
    if n == 0 {
        return Err("tree has no nodes".to_string());
    }

    let lengths = [
        ("right_children", doc.right_children.len()),
        ("split_indices", doc.split_indices.len()),
        ("split_conditions", doc.split_conditions.len()),
        ("default_left", doc.default_left.len()),
    ];
    if let Some((field, len)) = lengths.iter().find(|(_, len)| *len != n) {
        return Err(format!("{} has {} entries, expected {}", field, len, n));
    }
    if !doc.split_type.is_empty() && doc.split_type.len() != n {
        return Err(format!("split_type has {} entries, expected {}", doc.split_type.len(), n));
    }

    let mut nodes = Vec::with_capacity(n);
    for i in 0..n {
        let (left, right) = (doc.left_children[i], doc.right_children[i]);

        if left == -1 && right == -1 {
            nodes.push(Node::Leaf {
                value: doc.split_conditions[i],
            });
            continue;
        }

        if doc.split_type.get(i).copied().unwrap_or(0) != 0 {
            return Err(format!("node {} uses a categorical split", i));
        }

        // Children must come after their parent and stay inside the tree.
        let child = |c: i64| -> Result<usize, String> {
            usize::try_from(c)
                .ok()
                .filter(|&c| c > i && c < n)
                .ok_or_else(|| format!("node {} has invalid child {}", i, c))
        };

        let feature = usize::try_from(doc.split_indices[i])
            .ok()
            .filter(|&f| f < num_features)
            .ok_or_else(|| format!("node {} splits on unknown feature {}", i, doc.split_indices[i]))?;

        nodes.push(Node::Split {
            feature,
            threshold: doc.split_conditions[i],
            left: child(left)?,
            right: child(right)?,
            default_left: doc.default_left[i].is_set(),
        });
    }

    Ok(Tree::new(nodes))
}
