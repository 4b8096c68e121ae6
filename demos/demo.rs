//! Walk through the basic operations of a `t = 3` tree.
//!
//! Logs root splits and shrinks by default. Run with
//! `RUST_LOG=btree_index=trace cargo run --example demo` to also see every
//! child split, merge and borrow.

use btree_index::{BTree, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "btree_index=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut tree = BTree::new(3)?;
    println!("=== B-Tree Demo ===\n");

    println!("Inserting keys: 10, 20, 5, 6, 12, 30, 7, 17");
    tree.extend([10, 20, 5, 6, 12, 30, 7, 17]);

    println!("\nTraversal of the constructed tree:");
    println!("{}\n", tree);

    for key in [6, 15] {
        let result = if tree.contains(&key) {
            "Present"
        } else {
            "Not Present"
        };
        println!("Search for {}: {}", key, result);
    }

    println!("\nDeleting key 6...");
    tree.delete(&6);
    println!("Traversal after deletion:");
    println!("{}", tree);

    println!("\nHeight: {}, nodes: {}", tree.height(), tree.node_count());
    println!("{}", tree.stats());

    Ok(())
}
