use crate::classifiers::classifier::{self, Classifier};
use crate::classifiers::decision_tree::DecisionTree;
use crate::core::instances::{Dataset, DenseInstance};
use crate::error::PredictionError;
use rand::Rng;

pub(crate) const ERROR_EPSILON: f64 = 1e-10;

pub(crate) fn weighted_error(tree: &DecisionTree, dataset: &Dataset) -> f64 {
    let mut total = 0.0;
    let mut wrong = 0.0;
    for instance in dataset.instances() {
        let actual = match instance.class_value() {
            Some(class) => class as usize,
            None => continue,
        };
        total += instance.weight();
        if tree.classify(instance).ok() != Some(actual) {
            wrong += instance.weight();
        }
    }
    if total > 0.0 { wrong / total } else { 0.0 }
}

pub(crate) fn weighted_vote(
    members: &[(f64, DecisionTree)],
    instance: &DenseInstance,
) -> Result<usize, PredictionError> {
    if members.is_empty() {
        return Err(PredictionError::NotTrained);
    }
    let mut votes: Vec<f64> = Vec::new();
    for (alpha, tree) in members {
        let predicted = tree.classify(instance)?;
        if predicted >= votes.len() {
            votes.resize(predicted + 1, 0.0);
        }
        votes[predicted] += alpha;
    }
    Ok(classifier::index_of_max_value(&votes))
}

pub(crate) fn boost_weights(tree: &DecisionTree, dataset: &mut Dataset, reweight: f64) {
    let old_total: f64 = dataset.instances().iter().map(DenseInstance::weight).sum();
    for instance in dataset.instances_mut() {
        let actual = match instance.class_value() {
            Some(class) => class as usize,
            None => continue,
        };
        if tree.classify(instance).ok() != Some(actual) {
            instance.set_weight(instance.weight() * reweight);
        }
    }
    normalize_weights(dataset, old_total);
}

pub(crate) fn normalize_weights(dataset: &mut Dataset, target_total: f64) {
    let current: f64 = dataset.instances().iter().map(DenseInstance::weight).sum();
    if current <= 0.0 {
        return;
    }
    let scale = target_total / current;
    for instance in dataset.instances_mut() {
        instance.set_weight(instance.weight() * scale);
    }
}

pub(crate) fn wag_weights<R: Rng>(dataset: &mut Dataset, rng: &mut R) {
    let target_total = dataset.len() as f64;
    for instance in dataset.instances_mut() {
        let u = rng.random::<f64>();
        instance.set_weight(-(1.0 - u).ln());
    }
    normalize_weights(dataset, target_total);
}

pub(crate) fn dominant_alpha() -> f64 {
    ((1.0 - ERROR_EPSILON) / ERROR_EPSILON).ln()
}
