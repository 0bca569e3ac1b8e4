use crate::classifiers::classifier::{self, Classifier};
use crate::classifiers::decision_tree::DecisionTree;
use crate::core::instances::{Dataset, DenseInstance};
use crate::error::{PredictionError, TrainingError};
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

const ENSEMBLE_SIZE: usize = 10;
const BOOTSTRAP_SEED: u64 = 1;

pub struct RandomForest {
    unpruned: bool,
    min_leaf_size: usize,
    members: Vec<DecisionTree>,
}

impl RandomForest {
    pub fn new() -> Self {
        Self::with_params(false, 2)
    }

    pub fn with_params(unpruned: bool, min_leaf_size: usize) -> Self {
        Self {
            unpruned,
            min_leaf_size,
            members: Vec::new(),
        }
    }

    pub fn committee_size(&self) -> usize {
        self.members.len()
    }
}

impl Classifier for RandomForest {
    fn train(&mut self, dataset: &Dataset) -> Result<(), TrainingError> {
        classifier::validate_trainable(dataset)?;
        let mut rng = StdRng::seed_from_u64(BOOTSTRAP_SEED);
        let mut members = Vec::with_capacity(ENSEMBLE_SIZE);
        for _ in 0..ENSEMBLE_SIZE {
            let sample: Vec<DenseInstance> = (0..dataset.len())
                .map(|_| dataset.instances()[rng.random_range(0..dataset.len())].clone())
                .collect();
            let bag = Dataset::new(dataset.header().clone(), sample);
            let mut tree = DecisionTree::with_params(self.unpruned, self.min_leaf_size);
            tree.fit(&bag);
            members.push(tree);
        }
        self.members = members;
        Ok(())
    }

    fn classify(&self, instance: &DenseInstance) -> Result<usize, PredictionError> {
        if self.members.is_empty() {
            return Err(PredictionError::NotTrained);
        }
        let mut votes = vec![0.0; instance.header().number_of_classes()];
        for tree in &self.members {
            let distribution = tree.distribution_for_instance(instance)?;
            for (index, probability) in distribution.iter().enumerate() {
                if index < votes.len() {
                    votes[index] += probability;
                }
            }
        }
        Ok(classifier::index_of_max_value(&votes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{encoder, Record, SchemaBuilder};
    use std::sync::Arc;

    fn sex_subject_dataset(rows: &[(&str, &str)]) -> Dataset {
        let mut builder = SchemaBuilder::new();
        for (sex, subject) in rows {
            builder.add_record(Record::new().with("sex", *sex).with("subject", *subject));
        }
        let header = Arc::new(builder.finalize("subject").unwrap());
        encoder::encode_dataset(&header, builder.records()).unwrap()
    }

    fn query(dataset: &Dataset, sex: &str) -> DenseInstance {
        encoder::encode_query(dataset.header(), &Record::new().with("sex", sex)).unwrap()
    }

    #[test]
    fn test_untrained_forest_rejects_classification() {
        let dataset = sex_subject_dataset(&[("m", "CS"), ("f", "Phil")]);
        let forest = RandomForest::new();
        assert_eq!(
            forest.classify(&query(&dataset, "m")),
            Err(PredictionError::NotTrained)
        );
    }

    #[test]
    fn test_forest_grows_full_committee() {
        let dataset = sex_subject_dataset(&[
            ("m", "CS"),
            ("m", "CS"),
            ("m", "CS"),
            ("m", "CS"),
            ("m", "CS"),
            ("f", "Phil"),
            ("f", "Phil"),
            ("f", "Phil"),
            ("f", "Phil"),
            ("f", "Phil"),
        ]);
        let mut forest = RandomForest::new();
        forest.train(&dataset).unwrap();
        assert_eq!(forest.committee_size(), 10);
    }

    #[test]
    fn test_forest_separates_balanced_classes() {
        let dataset = sex_subject_dataset(&[
            ("m", "CS"),
            ("m", "CS"),
            ("m", "CS"),
            ("m", "CS"),
            ("m", "CS"),
            ("f", "Phil"),
            ("f", "Phil"),
            ("f", "Phil"),
            ("f", "Phil"),
            ("f", "Phil"),
        ]);
        let mut forest = RandomForest::new();
        forest.train(&dataset).unwrap();

        let class_of = |sex: &str| {
            let index = forest.classify(&query(&dataset, sex)).unwrap();
            dataset
                .header()
                .class_attribute()
                .and_then(|attribute| attribute.as_nominal())
                .and_then(|nominal| nominal.value(index))
                .unwrap()
                .to_string()
        };
        assert_eq!(class_of("m"), "CS");
        assert_eq!(class_of("f"), "Phil");
    }

    #[test]
    fn test_retraining_replaces_the_committee() {
        let dataset = sex_subject_dataset(&[
            ("m", "CS"),
            ("m", "CS"),
            ("m", "CS"),
            ("f", "Phil"),
            ("f", "Phil"),
            ("f", "Phil"),
        ]);
        let mut forest = RandomForest::new();
        forest.train(&dataset).unwrap();
        forest.train(&dataset).unwrap();
        assert_eq!(forest.committee_size(), 10);
    }

    #[test]
    fn test_training_rejects_single_class() {
        let dataset = sex_subject_dataset(&[("m", "CS"), ("f", "CS")]);
        let mut forest = RandomForest::new();
        assert_eq!(
            forest.train(&dataset),
            Err(TrainingError::TooFewClasses { found: 1 })
        );
    }
}
