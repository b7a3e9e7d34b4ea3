use generational_arena::{Arena, Index};
use tracing::{instrument, trace};

use crate::domain::error::{DomainError, TreeResult};
use crate::domain::lca::{self, ArenaRef};
use crate::domain::node::{BinaryTree, Link};

/// Tree node in the arena-based parent-aware structure.
#[derive(Debug)]
struct ArenaNode<T> {
    value: T,
    /// Index of the parent node, None for the root and for detached nodes.
    /// Set once when the node is attached, never owning.
    parent: Option<Index>,
    left: Option<Index>,
    right: Option<Index>,
}

/// Binary tree whose nodes know their parent.
///
/// The arena owns every node; parent and child links are plain indices, so a
/// parent link can never keep a node alive. Trees are built bottom-up: the most
/// recently made node is the root.
#[derive(Debug)]
pub struct ParentTree<T> {
    arena: Arena<ArenaNode<T>>,
    root: Option<Index>,
}

impl<T> Default for ParentTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ParentTree<T> {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
        }
    }

    /// Inserts a node owning `left` and `right`, then points both children back at it.
    ///
    /// Children must be live, distinct and not yet attached anywhere, which keeps
    /// the structure acyclic.
    #[instrument(level = "trace", skip(self, value))]
    pub fn make_node(
        &mut self,
        value: T,
        left: Option<Index>,
        right: Option<Index>,
    ) -> TreeResult<Index> {
        for child in [left, right].into_iter().flatten() {
            let node = self.node(child)?;
            if node.parent.is_some() {
                return Err(DomainError::AlreadyAttached(child));
            }
        }
        if let (Some(l), Some(r)) = (left, right) {
            if l == r {
                return Err(DomainError::DuplicateChild(l));
            }
        }

        let node_idx = self.arena.insert(ArenaNode {
            value,
            parent: None,
            left,
            right,
        });
        for child in [left, right].into_iter().flatten() {
            if let Some(child) = self.arena.get_mut(child) {
                child.parent = Some(node_idx);
            }
        }
        self.root = Some(node_idx);
        trace!(?node_idx, "node attached");

        Ok(node_idx)
    }

    fn node(&self, idx: Index) -> TreeResult<&ArenaNode<T>> {
        self.arena.get(idx).ok_or(DomainError::UnknownNode(idx))
    }

    pub fn root(&self) -> Option<Index> {
        self.root
    }

    pub fn value(&self, idx: Index) -> Option<&T> {
        self.arena.get(idx).map(|node| &node.value)
    }

    pub fn value_mut(&mut self, idx: Index) -> Option<&mut T> {
        self.arena.get_mut(idx).map(|node| &mut node.value)
    }

    pub fn parent(&self, idx: Index) -> Option<Index> {
        self.arena.get(idx).and_then(|node| node.parent)
    }

    pub fn left(&self, idx: Index) -> Option<Index> {
        self.arena.get(idx).and_then(|node| node.left)
    }

    pub fn right(&self, idx: Index) -> Option<Index> {
        self.arena.get(idx).and_then(|node| node.right)
    }

    /// Number of nodes stored, including nodes not reachable from the root.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Walks parent links from `idx` (inclusive) up to the top of its chain.
    pub fn ancestors(&self, idx: Index) -> Ancestors<'_, T> {
        Ancestors {
            tree: self,
            next: self.arena.get(idx).map(|_| idx),
        }
    }

    /// Edges between `idx` and the root.
    ///
    /// Fails if the index is stale or its parent chain ends somewhere other
    /// than this tree's root.
    #[instrument(level = "trace", skip(self))]
    pub fn depth(&self, idx: Index) -> TreeResult<usize> {
        self.node(idx)?;
        let mut depth = 0;
        let mut top = idx;
        while let Some(parent) = self.parent(top) {
            top = parent;
            depth += 1;
        }
        if Some(top) != self.root {
            return Err(DomainError::NodeNotFound);
        }
        Ok(depth)
    }

    /// True if `idx` is live and reachable from the root.
    pub fn contains(&self, idx: Index) -> bool {
        self.depth(idx).is_ok()
    }

    pub fn lca_with_parent(&self, a: Index, b: Index) -> TreeResult<Index> {
        lca::lca_with_parent(self, a, b)
    }

    /// LCA computed by descending from the root, ignoring parent links.
    #[instrument(level = "debug", skip(self))]
    pub fn lca_by_descent(&self, a: Index, b: Index) -> TreeResult<Index> {
        let root = self.root.map(|idx| ArenaRef { tree: self, idx });
        lca::lowest_common_ancestor(root, a, b)
            .map(|found| found.idx)
            .ok_or(DomainError::NodeNotFound)
    }

    /// Moves an owned subtree into the arena, returning the index of its root.
    fn insert_subtree(&mut self, link: Link<T>) -> Option<Index> {
        let node = *link?;
        let left = self.insert_subtree(node.left);
        let right = self.insert_subtree(node.right);
        let idx = self.arena.insert(ArenaNode {
            value: node.value,
            parent: None,
            left,
            right,
        });
        for child in [left, right].into_iter().flatten() {
            if let Some(child) = self.arena.get_mut(child) {
                child.parent = Some(idx);
            }
        }
        Some(idx)
    }
}

impl<T> From<BinaryTree<T>> for ParentTree<T> {
    fn from(tree: BinaryTree<T>) -> Self {
        let mut parent_tree = Self::new();
        parent_tree.root = parent_tree.insert_subtree(tree.into_root());
        parent_tree
    }
}

/// Iterator over a node and its ancestors, nearest first.
pub struct Ancestors<'a, T> {
    tree: &'a ParentTree<T>,
    next: Option<Index>,
}

impl<T> Iterator for Ancestors<'_, T> {
    type Item = Index;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = self.tree.parent(current);
        Some(current)
    }
}
