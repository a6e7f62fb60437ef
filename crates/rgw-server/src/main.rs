//! RAG gateway entry point
//!
//! A thin HTTP gateway in front of a Postgres/pgvector store and an
//! optional Redis cache: document ingestion and retrieval-augmented query
//! answering, with identity verification delegated to an external
//! provider.

use clap::Parser;

/// Command line interface for the RAG gateway
#[derive(Parser, Debug)]
#[command(name = "rgw")]
#[command(about = "RAG gateway - scoped retrieval over pgvector")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file (defaults to ./rgw.toml when present)
    #[arg(short, long)]
    pub config: Option<std::path::PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    rgw_server::run(cli.config.as_deref()).await
}
