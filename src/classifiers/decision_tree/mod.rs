mod decision_tree;
mod tree_node;

pub use decision_tree::DecisionTree;
pub use tree_node::{SplitTest, TreeNode};
