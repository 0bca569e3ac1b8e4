use crate::classifiers::classifier::{self, Classifier};
use crate::classifiers::decision_tree::DecisionTree;
use crate::classifiers::ensembles::committee;
use crate::core::instances::{Dataset, DenseInstance};
use crate::error::{PredictionError, TrainingError};
use rand::SeedableRng;
use rand::rngs::StdRng;

const ROUNDS: usize = 10;
const SUB_COMMITTEES: usize = 3;
const WAGGING_SEED: u64 = 1;

pub struct MultiBoost {
    members: Vec<(f64, DecisionTree)>,
}

impl MultiBoost {
    pub fn new() -> Self {
        Self {
            members: Vec::new(),
        }
    }

    pub fn committee_size(&self) -> usize {
        self.members.len()
    }
}

impl Classifier for MultiBoost {
    fn train(&mut self, dataset: &Dataset) -> Result<(), TrainingError> {
        classifier::validate_trainable(dataset)?;
        let sub_committee_length = ROUNDS.div_ceil(SUB_COMMITTEES);
        let mut rng = StdRng::seed_from_u64(WAGGING_SEED);
        let mut working = Dataset::new(dataset.header().clone(), dataset.instances().to_vec());
        let mut members: Vec<(f64, DecisionTree)> = Vec::new();

        let mut round = 0;
        while round < ROUNDS {
            if round > 0 && round % sub_committee_length == 0 {
                committee::wag_weights(&mut working, &mut rng);
            }

            let mut tree = DecisionTree::new();
            tree.fit(&working);
            let error = committee::weighted_error(&tree, &working);

            if error >= 0.5 - committee::ERROR_EPSILON {
                if members.is_empty() {
                    members.push((1.0, tree));
                }
                round = next_sub_committee(round, sub_committee_length);
                continue;
            }
            if error <= committee::ERROR_EPSILON {
                members.push((committee::dominant_alpha(), tree));
                round = next_sub_committee(round, sub_committee_length);
                continue;
            }

            let reweight = (1.0 - error) / error;
            committee::boost_weights(&tree, &mut working, reweight);
            members.push((reweight.ln(), tree));
            round += 1;
        }

        self.members = members;
        Ok(())
    }

    fn classify(&self, instance: &DenseInstance) -> Result<usize, PredictionError> {
        committee::weighted_vote(&self.members, instance)
    }
}

fn next_sub_committee(round: usize, sub_committee_length: usize) -> usize {
    ((round / sub_committee_length) + 1) * sub_committee_length
}
