//! Domain layer: tree structures and the algorithms over them
//!
//! This layer is independent of external concerns (no I/O, no config loading).

pub mod arena;
pub mod balance;
pub mod error;
pub mod iter;
pub mod lca;
pub mod node;
pub mod path_sum;
pub mod symmetry;
pub mod traversal;

pub use arena::{Ancestors, ParentTree};
pub use balance::{check_balance, is_balanced, BalanceStatus};
pub use error::{DomainError, TreeResult};
pub use iter::{InOrder, InOrderMut};
pub use lca::{lca_with_parent, lowest_common_ancestor, BinaryLinks};
pub use node::{leaf, make_node, BinaryTree, Link, Node};
pub use path_sum::{has_path_sum, sum_root_to_leaf};
pub use symmetry::is_symmetric;
pub use traversal::{PostOrder, PreOrder};

pub use generational_arena::Index;
