//! RAG gateway server
//!
//! The HTTP surface over the application services: identity request
//! guards, CORS, route handlers, error translation, and startup wiring.
//!
//! ## Layers
//!
//! - Domain: contracts and types (rgw-domain)
//! - Application: ingest and query use cases (rgw-application)
//! - Infrastructure: configuration and logging (rgw-infrastructure)
//! - Providers: cache, chunk store, embedding, completion, identity
//!   adapters (rgw-providers)

/// CORS response fairing
pub mod cors;
/// HTTP error translation
pub mod error;
/// Identity request guards
pub mod guards;
/// Route handlers
pub mod handlers;
/// Provider construction and state wiring
pub mod init;
/// Rocket assembly
pub mod routes;

use rgw_infrastructure::config::ConfigLoader;
use rgw_infrastructure::logging::init_logging;
use std::path::Path;

/// Load configuration, wire the providers, and serve until shutdown
pub async fn run(config_path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let mut loader = ConfigLoader::new();
    if let Some(path) = config_path {
        loader = loader.with_config_path(path);
    }
    let config = loader.load()?;
    init_logging(&config.logging)?;

    let state = init::build_state(&config).await?;
    let figment = rocket::Config::figment()
        .merge(("address", config.server.host.clone()))
        .merge(("port", config.server.port));

    routes::gateway(state, config.cors.clone())
        .configure(figment)
        .launch()
        .await?;
    Ok(())
}
