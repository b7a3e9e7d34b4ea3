//! Root-to-leaf path queries.

use tracing::{debug, instrument};

use crate::domain::node::Node;

/// Sum over all leaves of the binary number spelled by the root-to-leaf path.
///
/// Every value must be 0 or 1; the root is the most significant bit. Arithmetic
/// is modulo 2^64: a path longer than 64 nodes keeps its low 64 bits and the
/// total wraps instead of overflowing.
#[instrument(level = "trace", skip_all)]
pub fn sum_root_to_leaf<T: Copy + Into<u64>>(root: Option<&Node<T>>) -> u64 {
    let sum = root.map_or(0, |node| sum_below(node, 0));
    debug!(sum, "root-to-leaf sum computed");
    sum
}

fn sum_below<T: Copy + Into<u64>>(node: &Node<T>, path_so_far: u64) -> u64 {
    let bit = node.value.into();
    debug_assert!(bit <= 1, "root-to-leaf sum needs 0/1 values, got {bit}");
    let path = (path_so_far << 1) | (bit & 1);
    if node.is_leaf() {
        return path;
    }
    [node.left(), node.right()]
        .into_iter()
        .flatten()
        .map(|child| sum_below(child, path))
        .fold(0, u64::wrapping_add)
}

/// True if some complete root-to-leaf path adds up to `target`.
///
/// Internal nodes never end a path. The empty tree has no paths.
#[instrument(level = "trace", skip(root))]
pub fn has_path_sum<T: Copy + Into<i64>>(root: Option<&Node<T>>, target: i64) -> bool {
    let found = root.is_some_and(|node| has_path_below(node, i128::from(target), 0));
    debug!(found, "path sum checked");
    found
}

/// Sums in `i128`: a path deeper than 2^64 nodes cannot be built, so this never overflows.
fn has_path_below<T: Copy + Into<i64>>(node: &Node<T>, target: i128, sum_so_far: i128) -> bool {
    let sum = sum_so_far + i128::from(node.value.into());
    if node.is_leaf() {
        return sum == target;
    }
    node.left().is_some_and(|l| has_path_below(l, target, sum))
        || node.right().is_some_and(|r| has_path_below(r, target, sum))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::node::{leaf, make_node};

    /// `len` nodes of value 1, each the left child of the one above.
    fn ones_chain(len: usize) -> Box<Node<u8>> {
        let mut node = leaf(1u8);
        for _ in 1..len {
            node = make_node(1, Some(node), None);
        }
        node
    }

    #[test]
    fn given_empty_tree_then_sum_is_zero() {
        assert_eq!(sum_root_to_leaf::<u8>(None), 0);
    }

    #[test]
    fn given_single_bit_then_sum_is_that_bit() {
        assert_eq!(sum_root_to_leaf(Some(&*leaf(1u8))), 1);
        assert_eq!(sum_root_to_leaf(Some(&*leaf(0u8))), 0);
    }

    #[test]
    fn given_two_leaves_then_sum_of_their_numbers() {
        // 10 + 11
        let root = make_node(1u8, Some(leaf(0)), Some(leaf(1)));
        assert_eq!(sum_root_to_leaf(Some(&*root)), 5);
    }

    #[test]
    fn given_one_sided_internal_node_then_only_leaf_paths_count() {
        // 1 -> 0 -> 1 is the only path: 101
        let root = make_node(1u8, None, Some(make_node(0, Some(leaf(1)), None)));
        assert_eq!(sum_root_to_leaf(Some(&*root)), 5);
    }

    #[test]
    fn given_bool_bits_then_sum_works() {
        let root = make_node(true, Some(leaf(true)), Some(leaf(false)));
        assert_eq!(sum_root_to_leaf(Some(&*root)), 3 + 2);
    }

    #[test]
    fn given_empty_tree_then_no_path_sum() {
        assert!(!has_path_sum::<i32>(None, 0));
    }

    #[test]
    fn given_single_node_equal_to_target_then_path_sum() {
        assert!(has_path_sum(Some(&*leaf(8)), 8));
    }

    #[test]
    fn given_target_equal_to_internal_sum_then_no_path_sum() {
        // 5 + 4 = 9 is only a partial sum; full paths are 9 + 11 = 20 and 5 + 8 = 13
        let root = make_node(5, Some(make_node(4, Some(leaf(11)), None)), Some(leaf(8)));
        assert!(!has_path_sum(Some(&*root), 9));
        assert!(has_path_sum(Some(&*root), 20));
        assert!(has_path_sum(Some(&*root), 13));
    }

    #[test]
    fn given_negative_values_then_path_sum_uses_plain_addition() {
        let root = make_node(-2, None, Some(leaf(-3)));
        assert!(has_path_sum(Some(&*root), -5));
        assert!(!has_path_sum(Some(&*root), -2));
    }

    #[test]
    fn given_values_summing_past_i64_max_then_no_overflow() {
        let root = make_node(i64::MAX, Some(leaf(1i64)), Some(leaf(-1i64)));
        assert!(has_path_sum(Some(&*root), i64::MAX - 1));
        assert!(!has_path_sum(Some(&*root), i64::MIN));

        let one_sided = make_node(i64::MAX, Some(leaf(1i64)), None);
        assert!(!has_path_sum(Some(&*one_sided), i64::MIN));
        assert!(!has_path_sum(Some(&*one_sided), i64::MAX));
    }

    #[test]
    fn given_values_below_i64_min_then_no_overflow() {
        let root = make_node(i64::MIN, None, Some(leaf(-1i64)));
        assert!(!has_path_sum(Some(&*root), i64::MAX));
        assert!(!has_path_sum(Some(&*root), i64::MIN));
    }

    #[test]
    fn given_path_of_64_ones_then_sum_is_u64_max() {
        assert_eq!(sum_root_to_leaf(Some(&*ones_chain(64))), u64::MAX);
    }

    #[test]
    fn given_path_longer_than_64_nodes_then_low_bits_are_kept() {
        assert_eq!(sum_root_to_leaf(Some(&*ones_chain(65))), u64::MAX);
    }

    #[test]
    fn given_leaf_totals_past_u64_max_then_sum_wraps() {
        let root = make_node(1u8, Some(ones_chain(63)), Some(ones_chain(63)));
        assert_eq!(sum_root_to_leaf(Some(&*root)), u64::MAX.wrapping_add(u64::MAX));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "0/1 values")]
    fn given_value_other_than_bit_then_debug_build_panics() {
        sum_root_to_leaf(Some(&*make_node(1u8, Some(leaf(2)), None)));
    }
}
