//! Text rendering of trees via `termtree`.

use std::fmt;

use generational_arena::Index;
use termtree::Tree;
use tracing::instrument;

use crate::config::RenderSettings;
use crate::domain::{BinaryTree, Node, ParentTree};

pub trait TreeRender {
    fn to_tree_string(&self, settings: &RenderSettings) -> Tree<String>;
}

/// Children to draw below a node: none for a leaf, otherwise both sides with a
/// placeholder for the missing one when `show_vacant` is set.
fn child_slots<C>(left: Option<C>, right: Option<C>, settings: &RenderSettings) -> Vec<Option<C>> {
    match (left, right) {
        (None, None) => Vec::new(),
        (l, r) if settings.show_vacant => vec![l, r],
        (l, r) => [l, r].into_iter().filter(Option::is_some).collect(),
    }
}

fn vacant(settings: &RenderSettings) -> Tree<String> {
    Tree::new(settings.vacant_label.clone())
}

impl<T: fmt::Display> TreeRender for BinaryTree<T> {
    #[instrument(level = "debug", skip_all)]
    fn to_tree_string(&self, settings: &RenderSettings) -> Tree<String> {
        fn build<T: fmt::Display>(node: &Node<T>, settings: &RenderSettings) -> Tree<String> {
            let leaves: Vec<_> = child_slots(node.left(), node.right(), settings)
                .into_iter()
                .map(|slot| slot.map_or_else(|| vacant(settings), |c| build(c, settings)))
                .collect();
            Tree::new(node.value.to_string()).with_leaves(leaves)
        }

        match self.root() {
            Some(root) => build(root, settings),
            None => Tree::new(settings.empty_tree_label.clone()),
        }
    }
}

impl<T: fmt::Display> TreeRender for ParentTree<T> {
    #[instrument(level = "debug", skip_all)]
    fn to_tree_string(&self, settings: &RenderSettings) -> Tree<String> {
        fn build<T: fmt::Display>(
            tree: &ParentTree<T>,
            idx: Index,
            settings: &RenderSettings,
        ) -> Tree<String> {
            let label = tree.value(idx).map(ToString::to_string).unwrap_or_default();
            let leaves: Vec<_> = child_slots(tree.left(idx), tree.right(idx), settings)
                .into_iter()
                .map(|slot| slot.map_or_else(|| vacant(settings), |c| build(tree, c, settings)))
                .collect();
            Tree::new(label).with_leaves(leaves)
        }

        match self.root() {
            Some(root) => build(self, root, settings),
            None => Tree::new(settings.empty_tree_label.clone()),
        }
    }
}

impl<T: fmt::Display> fmt::Display for BinaryTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_tree_string(&RenderSettings::default()))
    }
}

impl<T: fmt::Display> fmt::Display for ParentTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_tree_string(&RenderSettings::default()))
    }
}
