use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SchemaError {
    #[error("Class attribute '{name}' was never declared or observed")]
    UnknownClassAttribute { name: String },

    #[error("Attribute '{name}' is declared both numeric and categorical")]
    KindConflict { name: String },
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EncodingError {
    #[error("Record is missing a value for attribute '{name}'")]
    MissingAttribute { name: String },

    #[error("Record carries unknown attribute '{name}'")]
    UnknownAttribute { name: String },

    #[error("Value '{value}' not found in domain of attribute '{attribute}'")]
    ValueOutsideDomain { attribute: String, value: String },

    #[error("Invalid numeric value '{value}' for attribute '{attribute}'")]
    InvalidNumericValue { attribute: String, value: String },
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TrainingError {
    #[error("Cannot train on an empty dataset")]
    EmptyDataset,

    #[error("Need at least two distinct class values, found {found}")]
    TooFewClasses { found: usize },
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PredictionError {
    #[error("Classifier has not been trained")]
    NotTrained,

    #[error("Predicted class index {index} is outside the class domain")]
    ClassIndexOutOfRange { index: usize },
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClassifierError {
    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error(transparent)]
    Encoding(#[from] EncodingError),

    #[error(transparent)]
    Training(#[from] TrainingError),

    #[error(transparent)]
    Prediction(#[from] PredictionError),
}
