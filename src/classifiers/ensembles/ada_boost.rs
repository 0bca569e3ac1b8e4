use crate::classifiers::classifier::{self, Classifier};
use crate::classifiers::decision_tree::DecisionTree;
use crate::classifiers::ensembles::committee;
use crate::core::instances::{Dataset, DenseInstance};
use crate::error::{PredictionError, TrainingError};

const ROUNDS: usize = 10;

pub struct AdaBoost {
    members: Vec<(f64, DecisionTree)>,
}

impl AdaBoost {
    pub fn new() -> Self {
        Self {
            members: Vec::new(),
        }
    }

    pub fn committee_size(&self) -> usize {
        self.members.len()
    }
}

impl Classifier for AdaBoost {
    fn train(&mut self, dataset: &Dataset) -> Result<(), TrainingError> {
        classifier::validate_trainable(dataset)?;
        let mut working = Dataset::new(dataset.header().clone(), dataset.instances().to_vec());
        let mut members: Vec<(f64, DecisionTree)> = Vec::new();

        for _ in 0..ROUNDS {
            let mut tree = DecisionTree::new();
            tree.fit(&working);
            let error = committee::weighted_error(&tree, &working);

            if error >= 0.5 - committee::ERROR_EPSILON {
                if members.is_empty() {
                    members.push((1.0, tree));
                }
                break;
            }
            if error <= committee::ERROR_EPSILON {
                members.push((committee::dominant_alpha(), tree));
                break;
            }

            let reweight = (1.0 - error) / error;
            committee::boost_weights(&tree, &mut working, reweight);
            members.push((reweight.ln(), tree));
        }

        self.members = members;
        Ok(())
    }

    fn classify(&self, instance: &DenseInstance) -> Result<usize, PredictionError> {
        committee::weighted_vote(&self.members, instance)
    }
}
