//! Owned binary tree: every node exclusively owns its two optional subtrees.

use tracing::instrument;

use crate::domain::balance::{check_balance, BalanceStatus};
use crate::domain::error::{DomainError, TreeResult};
use crate::domain::iter::{InOrder, InOrderMut};
use crate::domain::lca::{lowest_common_ancestor, BinaryLinks, NodeRef};
use crate::domain::path_sum;
use crate::domain::symmetry;
use crate::domain::traversal::{PostOrder, PreOrder};

/// Owning link to a subtree, `None` for an empty subtree.
pub type Link<T> = Option<Box<Node<T>>>;

/// Tree node holding a value and up to two owned children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<T> {
    pub value: T,
    pub left: Link<T>,
    pub right: Link<T>,
}

impl<T> Node<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    pub fn left(&self) -> Option<&Node<T>> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&Node<T>> {
        self.right.as_deref()
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

/// Creates a node that takes ownership of the supplied subtrees.
pub fn make_node<T>(value: T, left: Link<T>, right: Link<T>) -> Box<Node<T>> {
    Box::new(Node { value, left, right })
}

/// Creates a childless node.
pub fn leaf<T>(value: T) -> Box<Node<T>> {
    Box::new(Node::new(value))
}

/// Binary tree referenced through a single owning handle to its root.
///
/// Dropping the tree drops every node depth-first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryTree<T> {
    root: Link<T>,
}

impl<T> Default for BinaryTree<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> From<Box<Node<T>>> for BinaryTree<T> {
    fn from(root: Box<Node<T>>) -> Self {
        Self::new(root)
    }
}

impl<T> From<Link<T>> for BinaryTree<T> {
    fn from(root: Link<T>) -> Self {
        Self { root }
    }
}

impl<T> BinaryTree<T> {
    pub fn new(root: Box<Node<T>>) -> Self {
        Self { root: Some(root) }
    }

    pub fn empty() -> Self {
        Self { root: None }
    }

    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    pub fn into_root(self) -> Link<T> {
        self.root
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn len(&self) -> usize {
        self.iter_preorder().count()
    }

    /// Edges on the longest root-to-leaf path; `-1` for the empty tree.
    pub fn height(&self) -> isize {
        self.balance().height
    }

    pub fn balance(&self) -> BalanceStatus {
        check_balance(self.root())
    }

    pub fn is_balanced(&self) -> bool {
        self.balance().balanced
    }

    pub fn iter(&self) -> InOrder<'_, T> {
        InOrder::new(self.root())
    }

    pub fn iter_mut(&mut self) -> InOrderMut<'_, T> {
        InOrderMut::new(self.root.as_deref_mut())
    }

    pub fn iter_preorder(&self) -> PreOrder<'_, T> {
        PreOrder::new(self.root())
    }

    pub fn iter_postorder(&self) -> PostOrder<'_, T> {
        PostOrder::new(self.root())
    }

    /// Values of all leaves, left to right.
    pub fn leaves(&self) -> Vec<&T> {
        let mut leaves = Vec::new();
        if let Some(root) = self.root() {
            collect_leaves(root, &mut leaves);
        }
        leaves
    }

    /// Lowest common ancestor of two nodes of this tree.
    ///
    /// Targets are matched by address, so `a` and `b` must be borrowed from this
    /// tree; equal values in different nodes are different targets.
    #[instrument(level = "debug", skip_all)]
    pub fn lca<'a>(&'a self, a: &Node<T>, b: &Node<T>) -> TreeResult<&'a Node<T>> {
        lowest_common_ancestor(self.root().map(NodeRef), NodeRef(a).id(), NodeRef(b).id())
            .map(|found| found.0)
            .ok_or(DomainError::NodeNotFound)
    }
}

impl<T: PartialEq> BinaryTree<T> {
    pub fn is_symmetric(&self) -> bool {
        symmetry::is_symmetric(self.root())
    }
}

impl<T: Copy + Into<u64>> BinaryTree<T> {
    pub fn sum_root_to_leaf(&self) -> u64 {
        path_sum::sum_root_to_leaf(self.root())
    }
}

impl<T: Copy + Into<i64>> BinaryTree<T> {
    pub fn has_path_sum(&self, target: i64) -> bool {
        path_sum::has_path_sum(self.root(), target)
    }
}

fn collect_leaves<'a, T>(node: &'a Node<T>, leaves: &mut Vec<&'a T>) {
    if node.is_leaf() {
        leaves.push(&node.value);
    } else {
        for child in [node.left(), node.right()].into_iter().flatten() {
            collect_leaves(child, leaves);
        }
    }
}

impl<'a, T> IntoIterator for &'a BinaryTree<T> {
    type Item = &'a T;
    type IntoIter = InOrder<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut BinaryTree<T> {
    type Item = &'a mut T;
    type IntoIter = InOrderMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    #[test]
    fn given_no_children_when_making_node_then_is_leaf() {
        let node = make_node(3, None, None);
        assert!(node.is_leaf());
        assert_eq!(*node, Node::new(3));
    }

    #[test]
    fn given_one_child_when_making_node_then_owns_it_on_that_side() {
        let node = make_node(5, None, Some(leaf(2)));
        assert!(node.left().is_none());
        assert_eq!(node.right().map(|n| n.value), Some(2));
    }

    #[test]
    fn given_tree_when_collecting_leaves_then_left_to_right() {
        let tree = BinaryTree::new(make_node(
            1,
            Some(make_node(2, Some(leaf(4)), None)),
            Some(make_node(3, Some(leaf(5)), Some(leaf(6)))),
        ));
        assert_eq!(tree.leaves(), vec![&4, &5, &6]);
        assert_eq!(tree.len(), 6);
        assert_eq!(tree.height(), 2);
    }

    #[test]
    fn given_empty_tree_then_len_zero_and_height_minus_one() {
        let tree: BinaryTree<i32> = BinaryTree::default();
        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
        assert_eq!(tree.height(), -1);
        assert!(tree.leaves().is_empty());
    }

    #[test]
    fn given_built_tree_when_dropped_then_releases_every_value() {
        let token = Rc::new(());
        let tree = BinaryTree::new(make_node(
            Rc::clone(&token),
            Some(make_node(Rc::clone(&token), Some(leaf(Rc::clone(&token))), None)),
            Some(leaf(Rc::clone(&token))),
        ));
        assert_eq!(Rc::strong_count(&token), 5);

        drop(tree);

        assert_eq!(Rc::strong_count(&token), 1);
    }

    #[test]
    fn given_node_from_other_tree_when_lca_then_node_not_found() {
        let tree = BinaryTree::new(make_node(1, Some(leaf(2)), Some(leaf(3))));
        let other = leaf(2);
        let root = tree.root().expect("non-empty");
        let left = root.left().expect("left child");

        assert_eq!(tree.lca(left, &other), Err(DomainError::NodeNotFound));
    }
}
