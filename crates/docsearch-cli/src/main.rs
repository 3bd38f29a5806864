//! docsearch
//!
//! Document-store operations against a remote search server.
//!
//! # Usage
//!
//! ```bash
//! docsearch create --hostname localhost --index widgets '{"name": "a"}'
//! docsearch update --hostname localhost --index widgets --id abc123 '{"name": "b"}'
//! docsearch destroy --hostname localhost --index widgets --id abc123
//! docsearch search --hostname localhost --index widgets "cute dogs" --ids-only
//! ```
//!
//! Each outcome maps to a distinct exit code: success=0, connection
//! failure=10, index not found=11, document not found=12, malformed
//! response=13, anything else=1.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use docsearch_cli::{run, Cli};

fn init_tracing(level: Option<&str>) {
    let filter = match level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::new("warn"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_level.as_deref());

    let code = run(cli).await?;
    std::process::exit(code);
}
