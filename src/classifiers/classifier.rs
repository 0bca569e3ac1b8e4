use crate::core::instances::{Dataset, DenseInstance};
use crate::error::{PredictionError, TrainingError};

pub trait Classifier {
    fn train(&mut self, dataset: &Dataset) -> Result<(), TrainingError>;
    fn classify(&self, instance: &DenseInstance) -> Result<usize, PredictionError>;
}

pub fn validate_trainable(dataset: &Dataset) -> Result<(), TrainingError> {
    if dataset.is_empty() {
        return Err(TrainingError::EmptyDataset);
    }
    let found = dataset.distinct_class_count();
    if found < 2 {
        return Err(TrainingError::TooFewClasses { found });
    }
    Ok(())
}

pub(crate) fn index_of_max_value(values: &[f64]) -> usize {
    let mut best = 0;
    for (index, value) in values.iter().enumerate() {
        if *value > values[best] {
            best = index;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{encoder, Record, SchemaBuilder};
    use std::sync::Arc;

    fn dataset_of(rows: &[(&str, &str)]) -> Dataset {
        let mut builder = SchemaBuilder::new();
        for (sex, subject) in rows {
            builder.add_record(Record::new().with("sex", *sex).with("subject", *subject));
        }
        let header = Arc::new(builder.finalize("subject").unwrap());
        encoder::encode_dataset(&header, builder.records()).unwrap()
    }

    #[test]
    fn test_validate_trainable_accepts_two_classes() {
        let dataset = dataset_of(&[("m", "CS"), ("f", "Phil")]);
        assert!(validate_trainable(&dataset).is_ok());
    }

    #[test]
    fn test_validate_trainable_rejects_empty_dataset() {
        let builder = SchemaBuilder::new();
        let mut seeded = SchemaBuilder::new();
        seeded.add_record(Record::new().with("sex", "m").with("subject", "CS"));
        let header = Arc::new(seeded.finalize("subject").unwrap());
        let dataset = encoder::encode_dataset(&header, builder.records()).unwrap();
        assert_eq!(
            validate_trainable(&dataset),
            Err(TrainingError::EmptyDataset)
        );
    }

    #[test]
    fn test_validate_trainable_rejects_single_class() {
        let dataset = dataset_of(&[("m", "CS"), ("f", "CS")]);
        assert_eq!(
            validate_trainable(&dataset),
            Err(TrainingError::TooFewClasses { found: 1 })
        );
    }

    #[test]
    fn test_validate_trainable_rejects_numeric_class() {
        let mut builder = SchemaBuilder::with_numeric_attributes(&["age"]);
        builder.add_record(Record::new().with("age", 30).with("sex", "m"));
        builder.add_record(Record::new().with("age", 25).with("sex", "f"));
        let header = Arc::new(builder.finalize("age").unwrap());
        let dataset = encoder::encode_dataset(&header, builder.records()).unwrap();
        assert_eq!(
            validate_trainable(&dataset),
            Err(TrainingError::TooFewClasses { found: 0 })
        );
    }

    #[test]
    fn test_index_of_max_value_picks_highest() {
        assert_eq!(index_of_max_value(&[0.1, 0.7, 0.2]), 1);
    }

    #[test]
    fn test_index_of_max_value_breaks_ties_towards_lower_index() {
        assert_eq!(index_of_max_value(&[0.5, 0.5]), 0);
        assert_eq!(index_of_max_value(&[0.0, 0.5, 0.5]), 1);
    }

    #[test]
    fn test_index_of_max_value_on_empty_slice() {
        assert_eq!(index_of_max_value(&[]), 0);
    }
}
