mod gini_criterion;
mod information_gain_criterion;
mod split_criterion;

pub use gini_criterion::GiniCriterion;
pub use information_gain_criterion::InformationGainCriterion;
pub use split_criterion::SplitCriterion;
