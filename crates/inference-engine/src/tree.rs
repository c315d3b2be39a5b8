//! Regression tree evaluation

/// Node of a validated regression tree
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Node {
    Leaf {
        value: f32,
    },
    Split {
        feature: usize,
        threshold: f32,
        left: usize,
        right: usize,
        default_left: bool,
    },
}

/// Regression tree whose child links always point forward, so evaluation
/// terminates
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Tree {
    nodes: Vec<Node>,
}

impl Tree {
    pub(crate) fn new(nodes: Vec<Node>) -> Self {
        Self { nodes }
    }

    /// Leaf value reached by `row`. A NaN feature is treated as missing and
    /// follows the node's default branch.
    pub(crate) fn leaf_value(&self, row: &[f64]) -> f32 {
        let mut idx = 0;
        loop {
            match &self.nodes[idx] {
                Node::Leaf { value } => return *value,
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                    default_left,
                } => {
                    let value = row[*feature];
                    let go_left = if value.is_nan() {
                        *default_left
                    } else {
                        (value as f32) < *threshold
                    };
                    idx = if go_left { *left } else { *right };
                }
            }
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stump() -> Tree {
        Tree::new(vec![
            Node::Split {
                feature: 1,
                threshold: 10.0,
                left: 1,
                right: 2,
                default_left: false,
            },
            Node::Leaf { value: -1.0 },
            Node::Leaf { value: 1.0 },
        ])
    }

    #[test]
    fn test_split_is_strict_less_than() {
        let tree = stump();
        assert_eq!(tree.leaf_value(&[0.0, 9.99]), -1.0);
        assert_eq!(tree.leaf_value(&[0.0, 10.0]), 1.0);
    }

    #[test]
    fn test_missing_value_follows_default() {
        let tree = stump();
        assert_eq!(tree.leaf_value(&[0.0, f64::NAN]), 1.0);
    }

    #[test]
    fn test_single_leaf_tree() {
        let tree = Tree::new(vec![Node::Leaf { value: 0.25 }]);
        assert_eq!(tree.leaf_value(&[]), 0.25);
        assert_eq!(tree.len(), 1);
    }
}
