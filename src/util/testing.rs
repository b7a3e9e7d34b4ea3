use std::env;
use std::sync::Once;
use tracing::{debug, info};
use tracing_subscriber::{
    filter::filter_fn,
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::domain::{leaf, make_node, BinaryTree};

static TEST_SETUP: Once = Once::new();

pub fn init_test_setup() {
    TEST_SETUP.call_once(|| {
        if env::var("RUST_LOG").is_err() {
            env::set_var("RUST_LOG", "trace");
        }
        // global logging subscriber, used by all tracing log macros
        setup_test_logging();
        info!("Test Setup complete");
    });
}

fn setup_test_logging() {
    debug!("INIT: Attempting logger init from testing.rs");

    // Create a filter for noisy modules
    let noisy_modules = ["config"];
    let module_filter = filter_fn(move |metadata| {
        !noisy_modules
            .iter()
            .any(|name| metadata.target().starts_with(name))
    });

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::ENTER | FmtSpan::CLOSE)
            .with_filter(module_filter)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}

/// Nine-node tree with repeated values, in-order `8 6 9 561 3 314 561 6 123`.
///
/// ```text
///            314
///         /       \
///        6         6
///       / \       / \
///      8  561   561  123
///         / \
///        9   3
/// ```
pub fn repeated_values_tree() -> BinaryTree<i32> {
    BinaryTree::new(make_node(
        314,
        Some(make_node(
            6,
            Some(leaf(8)),
            Some(make_node(561, Some(leaf(9)), Some(leaf(3)))),
        )),
        Some(make_node(6, Some(leaf(561)), Some(leaf(123)))),
    ))
}

/// Mirror-symmetric tree whose subtrees are single-child chains.
///
/// ```text
///        314
///       /   \
///      6     6
///       \   /
///        2 2
///         \ /
///         3 3
/// ```
pub fn mirrored_chain_tree() -> BinaryTree<i32> {
    BinaryTree::new(make_node(
        314,
        Some(make_node(6, None, Some(make_node(2, None, Some(leaf(3)))))),
        Some(make_node(6, Some(make_node(2, Some(leaf(3)), None)), None)),
    ))
}
