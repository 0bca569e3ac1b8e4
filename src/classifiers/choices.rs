use crate::classifiers::classifier::Classifier;
use crate::classifiers::decision_tree::DecisionTree;
use crate::classifiers::ensembles::{AdaBoost, MultiBoost, RandomForest};
use crate::classifiers::svm::Svm;
use schemars::{JsonSchema, Schema, schema_for};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumDiscriminants, EnumIter, EnumMessage, EnumString, IntoStaticStr};

const DEFAULT_MIN_LEAF_SIZE: usize = 2;
fn default_min_leaf_size() -> usize {
    DEFAULT_MIN_LEAF_SIZE
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct DecisionTreeParameters {
    #[serde(default)]
    #[schemars(
        title = "Unpruned",
        description = "Skip subtree replacement after the tree is grown?"
    )]
    pub unpruned: bool,

    #[serde(default = "default_min_leaf_size")]
    #[schemars(
        title = "Minimum Leaf Size",
        description = "Minimum record weight a branch needs for a split to be admissible",
        default = "default_min_leaf_size"
    )]
    pub min_leaf_size: usize,
}

impl Default for DecisionTreeParameters {
    fn default() -> Self {
        Self {
            unpruned: false,
            min_leaf_size: DEFAULT_MIN_LEAF_SIZE,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct RandomForestParameters {
    #[serde(default)]
    #[schemars(title = "Unpruned", description = "Skip pruning inside each bagged tree?")]
    pub unpruned: bool,

    #[serde(default = "default_min_leaf_size")]
    #[schemars(
        title = "Minimum Leaf Size",
        description = "Minimum record weight a branch needs for a split to be admissible",
        default = "default_min_leaf_size"
    )]
    pub min_leaf_size: usize,
}

impl Default for RandomForestParameters {
    fn default() -> Self {
        Self {
            unpruned: false,
            min_leaf_size: DEFAULT_MIN_LEAF_SIZE,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, EnumDiscriminants)]
#[serde(tag = "type", content = "params", rename_all = "kebab-case")]
#[strum_discriminants(name(ClassifierKind))]
#[strum_discriminants(derive(EnumIter, EnumString, Display, IntoStaticStr, EnumMessage))]
#[strum_discriminants(strum(serialize_all = "kebab-case"))]
pub enum ClassifierChoice {
    #[strum_discriminants(strum(
        message = "Decision Tree",
        detailed_message = "A single batch-grown decision tree with optional subtree replacement."
    ))]
    DecisionTree(DecisionTreeParameters),

    #[strum_discriminants(strum(
        message = "Random Forest",
        detailed_message = "A bootstrap committee of decision trees voting by averaged distributions."
    ))]
    RandomForest(RandomForestParameters),

    #[strum_discriminants(strum(
        message = "AdaBoost",
        detailed_message = "A boosted committee that reweights records after every round."
    ))]
    AdaBoost,

    #[strum_discriminants(strum(
        message = "MultiBoost",
        detailed_message = "Boosting with wagged weight restarts between sub-committees."
    ))]
    MultiBoost,

    #[strum_discriminants(strum(
        message = "SVM",
        detailed_message = "Pairwise linear support vector machines trained with sequential minimal optimization."
    ))]
    Svm,
}

impl ClassifierChoice {
    pub fn build(&self) -> Box<dyn Classifier> {
        match self {
            ClassifierChoice::DecisionTree(parameters) => Box::new(DecisionTree::with_params(
                parameters.unpruned,
                parameters.min_leaf_size,
            )),
            ClassifierChoice::RandomForest(parameters) => Box::new(RandomForest::with_params(
                parameters.unpruned,
                parameters.min_leaf_size,
            )),
            ClassifierChoice::AdaBoost => Box::new(AdaBoost::new()),
            ClassifierChoice::MultiBoost => Box::new(MultiBoost::new()),
            ClassifierChoice::Svm => Box::new(Svm::new()),
        }
    }

    pub fn schema() -> Schema {
        schema_for!(ClassifierChoice)
    }
}

impl Default for ClassifierChoice {
    fn default() -> Self {
        ClassifierChoice::DecisionTree(DecisionTreeParameters::default())
    }
}
