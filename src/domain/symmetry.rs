//! Mirror-symmetry check.

use tracing::{debug, instrument};

use crate::domain::node::Node;

/// An empty tree is symmetric; otherwise the root's subtrees must mirror each other.
#[instrument(level = "trace", skip_all)]
pub fn is_symmetric<T: PartialEq>(root: Option<&Node<T>>) -> bool {
    let symmetric = root.map_or(true, |node| mirrors(node.left(), node.right()));
    debug!(symmetric, "symmetry checked");
    symmetric
}

fn mirrors<T: PartialEq>(left: Option<&Node<T>>, right: Option<&Node<T>>) -> bool {
    match (left, right) {
        (None, None) => true,
        (Some(l), Some(r)) => {
            l.value == r.value && mirrors(l.left(), r.right()) && mirrors(l.right(), r.left())
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::node::{leaf, make_node};

    #[test]
    fn given_empty_tree_then_symmetric() {
        assert!(is_symmetric::<i32>(None));
    }

    #[test]
    fn given_single_node_then_symmetric() {
        assert!(is_symmetric(Some(&*leaf(7))));
    }

    #[test]
    fn given_one_sided_child_then_not_symmetric() {
        let root = make_node(1, Some(leaf(2)), None);
        assert!(!is_symmetric(Some(&*root)));
    }

    #[test]
    fn given_same_shape_different_values_then_not_symmetric() {
        let root = make_node(1, Some(leaf(2)), Some(leaf(3)));
        assert!(!is_symmetric(Some(&*root)));
    }
}
