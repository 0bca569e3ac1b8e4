use crate::classifiers::classifier::{self, Classifier};
use crate::classifiers::svm::smo::{self, LinearDecisionFunction, SmoParameters};
use crate::core::instances::{Dataset, DenseInstance};
use crate::error::{PredictionError, TrainingError};

struct PairwiseMachine {
    first_class: usize,
    second_class: usize,
    decision: LinearDecisionFunction,
}

pub struct Svm {
    parameters: SmoParameters,
    machines: Vec<PairwiseMachine>,
    number_of_classes: usize,
}

impl Svm {
    pub fn new() -> Self {
        Self {
            parameters: SmoParameters::default(),
            machines: Vec::new(),
            number_of_classes: 0,
        }
    }

    pub fn machine_count(&self) -> usize {
        self.machines.len()
    }
}

impl Classifier for Svm {
    fn train(&mut self, dataset: &Dataset) -> Result<(), TrainingError> {
        classifier::validate_trainable(dataset)?;
        let number_of_classes = dataset.number_of_classes();
        let mut machines = Vec::new();

        for first_class in 0..number_of_classes {
            for second_class in first_class + 1..number_of_classes {
                let mut features = Vec::new();
                let mut labels = Vec::new();
                for instance in dataset.instances() {
                    let class = match instance.class_value() {
                        Some(class) => class as usize,
                        None => continue,
                    };
                    if class == first_class {
                        features.push(feature_vector(instance));
                        labels.push(1.0);
                    } else if class == second_class {
                        features.push(feature_vector(instance));
                        labels.push(-1.0);
                    }
                }
                if !labels.contains(&1.0) || !labels.contains(&-1.0) {
                    continue;
                }
                machines.push(PairwiseMachine {
                    first_class,
                    second_class,
                    decision: smo::solve(&features, &labels, &self.parameters),
                });
            }
        }

        self.machines = machines;
        self.number_of_classes = number_of_classes;
        Ok(())
    }

    fn classify(&self, instance: &DenseInstance) -> Result<usize, PredictionError> {
        if self.machines.is_empty() {
            return Err(PredictionError::NotTrained);
        }
        let features = feature_vector(instance);
        let mut votes = vec![0.0; self.number_of_classes];
        for machine in &self.machines {
            let vote = if machine.decision.evaluate(&features) >= 0.0 {
                machine.first_class
            } else {
                machine.second_class
            };
            if vote < votes.len() {
                votes[vote] += 1.0;
            }
        }
        Ok(classifier::index_of_max_value(&votes))
    }
}

fn feature_vector(instance: &DenseInstance) -> Vec<f64> {
    let class_index = instance.class_index();
    instance
        .values()
        .iter()
        .enumerate()
        .filter(|(index, _)| *index != class_index)
        .map(|(_, value)| *value)
        .collect()
}
