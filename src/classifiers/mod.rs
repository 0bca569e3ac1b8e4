pub mod choices;
pub mod classifier;
pub mod decision_tree;
pub mod ensembles;
pub mod split_criteria;
pub mod svm;

pub use choices::{ClassifierChoice, ClassifierKind};
pub use classifier::Classifier;
pub use decision_tree::DecisionTree;
pub use ensembles::{AdaBoost, MultiBoost, RandomForest};
pub use svm::Svm;
