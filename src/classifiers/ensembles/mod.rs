mod ada_boost;
mod committee;
mod multi_boost;
mod random_forest;

pub use ada_boost::AdaBoost;
pub use multi_boost::MultiBoost;
pub use random_forest::RandomForest;
