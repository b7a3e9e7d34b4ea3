//! Lowest common ancestor, with and without parent links.

use std::cmp::Ordering;

use generational_arena::Index;
use tracing::{debug, instrument, trace};

use crate::domain::arena::ParentTree;
use crate::domain::error::{DomainError, TreeResult};
use crate::domain::node::Node;

/// Copyable handle to a node that can reach its children.
///
/// `id` is the identity LCA targets are matched against; it must never be
/// derived from the node's value.
pub trait BinaryLinks: Copy {
    type Id: Copy + PartialEq;

    fn id(self) -> Self::Id;
    fn left(self) -> Option<Self>;
    fn right(self) -> Option<Self>;
}

/// Borrowed owned-tree node, identified by address.
#[derive(Debug)]
pub struct NodeRef<'a, T>(pub &'a Node<T>);

impl<T> Clone for NodeRef<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodeRef<'_, T> {}

impl<T> BinaryLinks for NodeRef<'_, T> {
    type Id = *const Node<T>;

    fn id(self) -> Self::Id {
        self.0 as *const Node<T>
    }

    fn left(self) -> Option<Self> {
        self.0.left().map(NodeRef)
    }

    fn right(self) -> Option<Self> {
        self.0.right().map(NodeRef)
    }
}

/// Arena node handle, identified by its index.
#[derive(Debug)]
pub struct ArenaRef<'a, T> {
    pub tree: &'a ParentTree<T>,
    pub idx: Index,
}

impl<T> Clone for ArenaRef<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ArenaRef<'_, T> {}

impl<T> BinaryLinks for ArenaRef<'_, T> {
    type Id = Index;

    fn id(self) -> Self::Id {
        self.idx
    }

    fn left(self) -> Option<Self> {
        self.tree.left(self.idx).map(|idx| ArenaRef { tree: self.tree, idx })
    }

    fn right(self) -> Option<Self> {
        self.tree.right(self.idx).map(|idx| ArenaRef { tree: self.tree, idx })
    }
}

struct LcaStatus<H> {
    found: u8,
    ancestor: Option<H>,
}

fn descend<H: BinaryLinks>(subtree: Option<H>, a: H::Id, b: H::Id) -> LcaStatus<H> {
    let Some(node) = subtree else {
        return LcaStatus {
            found: 0,
            ancestor: None,
        };
    };
    let found_here = u8::from(node.id() == a) + u8::from(node.id() == b);

    let left = descend(node.left(), a, b);
    if left.ancestor.is_some() {
        return left;
    }
    let right = descend(node.right(), a, b);
    if right.ancestor.is_some() {
        return right;
    }

    let found = found_here + left.found + right.found;
    LcaStatus {
        found,
        ancestor: (found == 2).then_some(node),
    }
}

/// Deepest node whose subtree contains both `a` and `b`, found in one descent.
///
/// Returns `None` unless both targets occur below `root`.
pub fn lowest_common_ancestor<H: BinaryLinks>(root: Option<H>, a: H::Id, b: H::Id) -> Option<H> {
    descend(root, a, b).ancestor
}

/// LCA by walking parent links: equalize depths, then climb in lockstep.
///
/// Runs in O(h) and never looks at children.
#[instrument(level = "debug", skip(tree))]
pub fn lca_with_parent<T>(tree: &ParentTree<T>, a: Index, b: Index) -> TreeResult<Index> {
    let depth_a = tree.depth(a)?;
    let depth_b = tree.depth(b)?;

    let (mut a, mut b) = (a, b);
    let climb = depth_a.abs_diff(depth_b);
    let deeper = match depth_a.cmp(&depth_b) {
        Ordering::Greater => &mut a,
        _ => &mut b,
    };
    for _ in 0..climb {
        *deeper = tree.parent(*deeper).ok_or(DomainError::NodeNotFound)?;
    }
    trace!(?a, ?b, "depths equalized");

    while a != b {
        a = tree.parent(a).ok_or(DomainError::NodeNotFound)?;
        b = tree.parent(b).ok_or(DomainError::NodeNotFound)?;
    }
    debug!(lca = ?a, "lowest common ancestor found");
    Ok(a)
}
