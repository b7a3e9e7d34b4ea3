//! Binary tree algorithms.
//!
//! Two tree representations share the same algorithms:
//! - [`BinaryTree`]: owned recursive nodes (`Box`), no parent links
//! - [`ParentTree`]: arena-backed nodes with non-owning parent links
//!
//! Queries: balance, mirror symmetry, lowest common ancestor (by descent and by
//! parent walk), root-to-leaf binary sums and path-sum existence, plus in-order,
//! pre-order and post-order traversal.

pub mod config;
pub mod domain;
pub mod errors;
pub mod render;
pub mod util;

pub use config::{RenderSettings, Settings};
pub use domain::{
    leaf, make_node, BinaryTree, DomainError, InOrder, InOrderMut, Index, Node, ParentTree,
    TreeResult,
};
pub use errors::{BintreeError, BintreeResult};
pub use render::TreeRender;
