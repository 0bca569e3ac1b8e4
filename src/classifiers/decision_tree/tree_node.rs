use crate::core::instances::DenseInstance;

#[derive(Debug, Clone)]
pub enum SplitTest {
    NominalMultiway {
        attribute_index: usize,
        arity: usize,
    },
    NumericThreshold {
        attribute_index: usize,
        threshold: f64,
    },
}

impl SplitTest {
    pub fn branch_for_instance(&self, instance: &DenseInstance) -> Option<usize> {
        match self {
            SplitTest::NominalMultiway {
                attribute_index,
                arity,
            } => {
                let value = instance.value_at_index(*attribute_index)?;
                if value.is_nan() {
                    return None;
                }
                let branch = value as usize;
                if branch < *arity { Some(branch) } else { None }
            }
            SplitTest::NumericThreshold {
                attribute_index,
                threshold,
            } => {
                let value = instance.value_at_index(*attribute_index)?;
                if value.is_nan() {
                    return None;
                }
                Some(if value <= *threshold { 0 } else { 1 })
            }
        }
    }

    pub fn max_branches(&self) -> usize {
        match self {
            SplitTest::NominalMultiway { arity, .. } => *arity,
            SplitTest::NumericThreshold { .. } => 2,
        }
    }
}

#[derive(Debug, Clone)]
pub enum TreeNode {
    Leaf {
        distribution: Vec<f64>,
    },
    Split {
        test: SplitTest,
        children: Vec<TreeNode>,
        distribution: Vec<f64>,
    },
}

impl TreeNode {
    pub fn distribution(&self) -> &[f64] {
        match self {
            TreeNode::Leaf { distribution } => distribution,
            TreeNode::Split { distribution, .. } => distribution,
        }
    }

    pub fn leaf_count(&self) -> usize {
        match self {
            TreeNode::Leaf { .. } => 1,
            TreeNode::Split { children, .. } => children.iter().map(TreeNode::leaf_count).sum(),
        }
    }

    pub fn depth(&self) -> usize {
        match self {
            TreeNode::Leaf { .. } => 0,
            TreeNode::Split { children, .. } => {
                1 + children.iter().map(TreeNode::depth).max().unwrap_or(0)
            }
        }
    }

    pub fn training_error(&self) -> f64 {
        match self {
            TreeNode::Leaf { distribution } => {
                let total: f64 = distribution.iter().sum();
                let majority = distribution.iter().fold(0.0, |best: f64, w| best.max(*w));
                total - majority
            }
            TreeNode::Split { children, .. } => {
                children.iter().map(TreeNode::training_error).sum()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::attributes::{Attribute, NominalAttribute, NumericAttribute};
    use crate::core::instance_header::InstanceHeader;
    use std::sync::Arc;

    fn header() -> Arc<InstanceHeader> {
        Arc::new(InstanceHeader::new(
            "records".into(),
            vec![
                Arc::new(Attribute::Nominal(NominalAttribute::from_labels(
                    "sex",
                    &["m", "f"],
                ))),
                Arc::new(Attribute::Numeric(NumericAttribute::new("age".into()))),
                Arc::new(Attribute::Nominal(NominalAttribute::from_labels(
                    "subject",
                    &["CS", "Phil"],
                ))),
            ],
            2,
        ))
    }

    fn instance(values: Vec<f64>) -> DenseInstance {
        DenseInstance::new(header(), values, 1.0)
    }

    #[test]
    fn test_nominal_test_routes_by_domain_index() {
        let test = SplitTest::NominalMultiway {
            attribute_index: 0,
            arity: 2,
        };
        assert_eq!(test.branch_for_instance(&instance(vec![0.0, 30.0, 0.0])), Some(0));
        assert_eq!(test.branch_for_instance(&instance(vec![1.0, 30.0, 0.0])), Some(1));
        assert_eq!(test.max_branches(), 2);
    }

    #[test]
    fn test_nominal_test_rejects_missing_and_out_of_domain_values() {
        let test = SplitTest::NominalMultiway {
            attribute_index: 0,
            arity: 2,
        };
        assert_eq!(test.branch_for_instance(&instance(vec![f64::NAN, 30.0, 0.0])), None);
        assert_eq!(test.branch_for_instance(&instance(vec![5.0, 30.0, 0.0])), None);
    }

    #[test]
    fn test_numeric_test_sends_at_most_threshold_left() {
        let test = SplitTest::NumericThreshold {
            attribute_index: 1,
            threshold: 27.5,
        };
        assert_eq!(test.branch_for_instance(&instance(vec![0.0, 25.0, 0.0])), Some(0));
        assert_eq!(test.branch_for_instance(&instance(vec![0.0, 27.5, 0.0])), Some(0));
        assert_eq!(test.branch_for_instance(&instance(vec![0.0, 30.0, 0.0])), Some(1));
        assert_eq!(test.branch_for_instance(&instance(vec![0.0, f64::NAN, 0.0])), None);
        assert_eq!(test.max_branches(), 2);
    }

    fn sample_tree() -> TreeNode {
        TreeNode::Split {
            test: SplitTest::NominalMultiway {
                attribute_index: 0,
                arity: 2,
            },
            children: vec![
                TreeNode::Leaf {
                    distribution: vec![3.0, 1.0],
                },
                TreeNode::Leaf {
                    distribution: vec![0.0, 4.0],
                },
            ],
            distribution: vec![3.0, 5.0],
        }
    }

    #[test]
    fn test_structure_accessors() {
        let tree = sample_tree();
        assert_eq!(tree.leaf_count(), 2);
        assert_eq!(tree.depth(), 1);
        assert_eq!(tree.distribution(), &[3.0, 5.0]);
    }

    #[test]
    fn test_training_error_sums_minority_weights() {
        let tree = sample_tree();
        assert_eq!(tree.training_error(), 1.0);
        let leaf = TreeNode::Leaf {
            distribution: vec![3.0, 5.0],
        };
        assert_eq!(leaf.training_error(), 3.0);
    }
}
