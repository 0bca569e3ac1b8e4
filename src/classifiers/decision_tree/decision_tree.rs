use crate::classifiers::classifier::{self, Classifier};
use crate::classifiers::decision_tree::tree_node::{SplitTest, TreeNode};
use crate::classifiers::split_criteria::{InformationGainCriterion, SplitCriterion};
use crate::core::attributes::Attribute;
use crate::core::instances::{Dataset, DenseInstance};
use crate::error::{PredictionError, TrainingError};

const MERIT_EPSILON: f64 = 1e-10;
const PRUNE_EPSILON: f64 = 1e-10;

pub struct DecisionTree {
    unpruned: bool,
    min_leaf_size: usize,
    criterion: Box<dyn SplitCriterion>,
    root: Option<TreeNode>,
}

impl DecisionTree {
    pub fn new() -> Self {
        Self::with_params(false, 2)
    }

    pub fn with_params(unpruned: bool, min_leaf_size: usize) -> Self {
        Self::with_criterion(unpruned, min_leaf_size, Box::new(InformationGainCriterion::new()))
    }

    pub fn with_criterion(
        unpruned: bool,
        min_leaf_size: usize,
        criterion: Box<dyn SplitCriterion>,
    ) -> Self {
        Self {
            unpruned,
            min_leaf_size,
            criterion,
            root: None,
        }
    }

    pub fn leaf_count(&self) -> usize {
        self.root.as_ref().map_or(0, TreeNode::leaf_count)
    }

    pub fn depth(&self) -> usize {
        self.root.as_ref().map_or(0, TreeNode::depth)
    }

    pub fn distribution_for_instance(
        &self,
        instance: &DenseInstance,
    ) -> Result<Vec<f64>, PredictionError> {
        let root = self.root.as_ref().ok_or(PredictionError::NotTrained)?;
        Ok(normalized(walk(root, instance, root.distribution())))
    }

    pub(crate) fn fit(&mut self, dataset: &Dataset) {
        let indices: Vec<usize> = (0..dataset.len()).collect();
        self.root = Some(self.build_node(dataset, &indices));
    }

    fn build_node(&self, dataset: &Dataset, indices: &[usize]) -> TreeNode {
        let distribution = class_distribution(dataset, indices);
        if indices.is_empty() || is_pure(&distribution) {
            return TreeNode::Leaf { distribution };
        }

        let (test, merit) = match self.best_split(dataset, indices, &distribution) {
            Some(candidate) => candidate,
            None => return TreeNode::Leaf { distribution },
        };
        if merit <= MERIT_EPSILON {
            return TreeNode::Leaf { distribution };
        }

        let mut branches: Vec<Vec<usize>> = vec![Vec::new(); test.max_branches()];
        for &i in indices {
            if let Some(branch) = test.branch_for_instance(&dataset.instances()[i]) {
                branches[branch].push(i);
            }
        }

        let children: Vec<TreeNode> = branches
            .iter()
            .map(|branch| {
                if branch.is_empty() {
                    TreeNode::Leaf {
                        distribution: vec![0.0; dataset.number_of_classes()],
                    }
                } else {
                    self.build_node(dataset, branch)
                }
            })
            .collect();

        let node = TreeNode::Split {
            test,
            children,
            distribution: distribution.clone(),
        };
        if !self.unpruned
            && leaf_training_error(&distribution) <= node.training_error() + PRUNE_EPSILON
        {
            return TreeNode::Leaf { distribution };
        }
        node
    }

    fn best_split(
        &self,
        dataset: &Dataset,
        indices: &[usize],
        pre_split: &[f64],
    ) -> Option<(SplitTest, f64)> {
        let header = dataset.header();
        let mut best: Option<(SplitTest, f64)> = None;
        for index in 0..header.number_of_attributes() {
            if index == header.class_index() {
                continue;
            }
            let candidate = match header.attribute_at_index(index) {
                Some(Attribute::Nominal(nominal)) => self.nominal_candidate(
                    dataset,
                    indices,
                    index,
                    nominal.values.len(),
                    pre_split,
                ),
                Some(Attribute::Numeric(_)) => {
                    self.numeric_candidate(dataset, indices, index, pre_split)
                }
                None => None,
            };
            if let Some((test, merit)) = candidate {
                let improved = match &best {
                    Some((_, best_merit)) => merit > *best_merit,
                    None => true,
                };
                if improved {
                    best = Some((test, merit));
                }
            }
        }
        best
    }

    fn nominal_candidate(
        &self,
        dataset: &Dataset,
        indices: &[usize],
        attribute_index: usize,
        arity: usize,
        pre_split: &[f64],
    ) -> Option<(SplitTest, f64)> {
        if arity < 2 {
            return None;
        }
        let num_classes = dataset.number_of_classes();
        let mut partitions = vec![vec![0.0; num_classes]; arity];
        let mut partition_weights = vec![0.0; arity];
        for &i in indices {
            let instance = &dataset.instances()[i];
            let value = match instance.value_at_index(attribute_index) {
                Some(value) if !value.is_nan() => value,
                _ => continue,
            };
            let class = match instance.class_value() {
                Some(class) => class as usize,
                None => continue,
            };
            let branch = value as usize;
            if branch >= arity || class >= num_classes {
                continue;
            }
            partitions[branch][class] += instance.weight();
            partition_weights[branch] += instance.weight();
        }

        let admissible = partition_weights
            .iter()
            .filter(|&&weight| weight > 0.0 && weight >= self.min_leaf_size as f64)
            .count();
        if admissible < 2 {
            return None;
        }

        let merit = self.criterion.get_merit_of_split(pre_split, &partitions);
        Some((
            SplitTest::NominalMultiway {
                attribute_index,
                arity,
            },
            merit,
        ))
    }

    fn numeric_candidate(
        &self,
        dataset: &Dataset,
        indices: &[usize],
        attribute_index: usize,
        pre_split: &[f64],
    ) -> Option<(SplitTest, f64)> {
        let num_classes = dataset.number_of_classes();
        let mut points: Vec<(f64, usize, f64)> = Vec::with_capacity(indices.len());
        for &i in indices {
            let instance = &dataset.instances()[i];
            let value = match instance.value_at_index(attribute_index) {
                Some(value) if !value.is_nan() => value,
                _ => continue,
            };
            let class = match instance.class_value() {
                Some(class) => class as usize,
                None => continue,
            };
            if class >= num_classes {
                continue;
            }
            points.push((value, class, instance.weight()));
        }
        if points.len() < 2 {
            return None;
        }
        points.sort_by(|a, b| a.0.total_cmp(&b.0));

        let mut right = vec![0.0; num_classes];
        let mut right_weight = 0.0;
        for (_, class, weight) in &points {
            right[*class] += weight;
            right_weight += weight;
        }
        let mut left = vec![0.0; num_classes];
        let mut left_weight = 0.0;

        let mut best: Option<(f64, f64)> = None;
        for pair in 0..points.len() - 1 {
            let (value, class, weight) = points[pair];
            left[class] += weight;
            left_weight += weight;
            right[class] -= weight;
            right_weight -= weight;

            let next_value = points[pair + 1].0;
            if next_value <= value {
                continue;
            }
            let min_weight = self.min_leaf_size as f64;
            if left_weight < min_weight || right_weight < min_weight {
                continue;
            }

            let merit = self
                .criterion
                .get_merit_of_split(pre_split, &[left.clone(), right.clone()]);
            let improved = match best {
                Some((_, best_merit)) => merit > best_merit,
                None => true,
            };
            if improved {
                best = Some(((value + next_value) / 2.0, merit));
            }
        }

        best.map(|(threshold, merit)| {
            (
                SplitTest::NumericThreshold {
                    attribute_index,
                    threshold,
                },
                merit,
            )
        })
    }
}

impl Classifier for DecisionTree {
    fn train(&mut self, dataset: &Dataset) -> Result<(), TrainingError> {
        classifier::validate_trainable(dataset)?;
        self.fit(dataset);
        Ok(())
    }

    fn classify(&self, instance: &DenseInstance) -> Result<usize, PredictionError> {
        let root = self.root.as_ref().ok_or(PredictionError::NotTrained)?;
        let distribution = walk(root, instance, root.distribution());
        Ok(classifier::index_of_max_value(distribution))
    }
}

fn walk<'a>(node: &'a TreeNode, instance: &DenseInstance, fallback: &'a [f64]) -> &'a [f64] {
    match node {
        TreeNode::Leaf { distribution } => {
            if distribution.iter().any(|weight| *weight > 0.0) {
                distribution
            } else {
                fallback
            }
        }
        TreeNode::Split {
            test,
            children,
            distribution,
        } => {
            let fallback = if distribution.iter().any(|weight| *weight > 0.0) {
                distribution.as_slice()
            } else {
                fallback
            };
            match test.branch_for_instance(instance) {
                Some(branch) if branch < children.len() => {
                    walk(&children[branch], instance, fallback)
                }
                _ => fallback,
            }
        }
    }
}

fn normalized(distribution: &[f64]) -> Vec<f64> {
    let total: f64 = distribution.iter().sum();
    if total > 0.0 {
        distribution.iter().map(|weight| weight / total).collect()
    } else if distribution.is_empty() {
        Vec::new()
    } else {
        vec![1.0 / distribution.len() as f64; distribution.len()]
    }
}

fn class_distribution(dataset: &Dataset, indices: &[usize]) -> Vec<f64> {
    let mut distribution = vec![0.0; dataset.number_of_classes()];
    for &i in indices {
        let instance = &dataset.instances()[i];
        if let Some(class) = instance.class_value() {
            let class = class as usize;
            if class < distribution.len() {
                distribution[class] += instance.weight();
            }
        }
    }
    distribution
}

fn is_pure(distribution: &[f64]) -> bool {
    distribution.iter().filter(|&&weight| weight > 0.0).count() <= 1
}

fn leaf_training_error(distribution: &[f64]) -> f64 {
    let total: f64 = distribution.iter().sum();
    let majority = distribution.iter().fold(0.0, |best: f64, w| best.max(*w));
    total - majority
}
