pub mod classifiers;
pub mod core;
pub mod error;
pub mod record_classifier;
pub mod records;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;

pub use classifiers::Classifier;
pub use classifiers::choices::{ClassifierChoice, ClassifierKind};
pub use error::{ClassifierError, EncodingError, PredictionError, SchemaError, TrainingError};
pub use record_classifier::RecordClassifier;
pub use records::{RawValue, Record, SchemaBuilder};
