use termtree::Tree;
use tracing::instrument;

use crate::domain::arena::Hierarchy;
use crate::domain::view::StaffView;

pub trait TreeNodeConvert {
    fn to_tree_string(&self) -> Tree<String>;
}

impl TreeNodeConvert for StaffView<'_> {
    #[instrument(level = "trace")]
    fn to_tree_string(&self) -> Tree<String> {
        let leaves: Vec<_> = self.reports().iter().map(|r| r.to_tree_string()).collect();
        Tree::new(self.to_string()).with_leaves(leaves)
    }
}

// One tree per root, hung below a synthetic organisation node
impl TreeNodeConvert for Hierarchy {
    fn to_tree_string(&self) -> Tree<String> {
        if self.is_empty() {
            return Tree::new("Empty hierarchy".to_string());
        }
        let leaves: Vec<_> = self
            .roots()
            .into_iter()
            .filter_map(|root| self.view(root).ok())
            .map(|view| view.to_tree_string())
            .collect();
        Tree::new("Organisation".to_string()).with_leaves(leaves)
    }
}
