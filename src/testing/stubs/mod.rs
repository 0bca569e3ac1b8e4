mod fixed_classifier;

pub use fixed_classifier::FixedClassifier;
