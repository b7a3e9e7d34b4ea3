//! Height-balance check in a single bottom-up pass.

use tracing::{debug, instrument};

use crate::domain::node::Node;

/// Result of checking one subtree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BalanceStatus {
    pub balanced: bool,
    /// Edges on the longest path down to a leaf, `-1` for an empty subtree.
    pub height: isize,
}

impl BalanceStatus {
    const EMPTY: Self = Self {
        balanced: true,
        height: -1,
    };
}

/// Balance and height of the subtree rooted at `node`.
///
/// Heights are still combined below an unbalanced node, so each node is
/// visited exactly once.
pub fn check_balance<T>(node: Option<&Node<T>>) -> BalanceStatus {
    let Some(node) = node else {
        return BalanceStatus::EMPTY;
    };
    let left = check_balance(node.left());
    let right = check_balance(node.right());

    BalanceStatus {
        balanced: (left.height - right.height).abs() <= 1 && left.balanced && right.balanced,
        height: 1 + left.height.max(right.height),
    }
}

#[instrument(level = "trace", skip_all)]
pub fn is_balanced<T>(root: Option<&Node<T>>) -> bool {
    let status = check_balance(root);
    debug!(?status, "balance checked");
    status.balanced
}
