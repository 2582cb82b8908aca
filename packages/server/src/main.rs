//! Treeline Server Binary
//!
//! Loads the node records, then serves the tree API.
//!
//! # Usage
//!
//! ```bash
//! # Defaults: data/nodes.csv on port 8080
//! cargo run -p treeline-server
//!
//! # Custom source and port
//! TREELINE_DATA_FILE=/srv/forest.csv TREELINE_PORT=9000 cargo run -p treeline-server
//! ```
//!
//! # Environment Variables
//!
//! - `TREELINE_DATA_FILE`: CSV record source (default: data/nodes.csv)
//! - `TREELINE_PORT`: Server port (default: 8080)
//! - `RUST_LOG`: Logging level (e.g. "info", "debug", "trace")

use std::env;

use treeline_core::services::loader;
use treeline_core::TreeService;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tracing::info!("🌲 Treeline Tree API Server");
    tracing::info!("==================================");

    let port = env::var("TREELINE_PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(8080);

    let data_file =
        env::var("TREELINE_DATA_FILE").unwrap_or_else(|_| "data/nodes.csv".to_string());

    tracing::info!("📡 Port: {}", port);
    tracing::info!("📦 Record source: {}", data_file);

    // Load the whole forest before accepting any traffic. A malformed
    // source aborts startup here.
    let forest = loader::load_path(&data_file)?;
    let tree = TreeService::new(forest);

    tracing::info!("✅ Forest ready: {} nodes", tree.node_count().await);

    treeline_server::start_server(tree, port).await?;

    Ok(())
}
