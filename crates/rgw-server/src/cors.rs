//! CORS response fairing
//!
//! Adds CORS headers for browser access. Origins are matched exactly
//! against the configured allowlist; a request from any other origin
//! receives no CORS headers at all. Preflight requests are answered by a
//! catch-all OPTIONS route (see `routes`), with this fairing attaching
//! the headers.

use rocket::fairing::{Fairing, Info, Kind};
use rocket::http::Header;
use rocket::{Request, Response};

use rgw_infrastructure::config::CorsConfig;

/// CORS fairing with an exact-origin allowlist
pub struct Cors {
    config: CorsConfig,
}

impl Cors {
    /// Create the fairing from configuration
    pub fn new(config: CorsConfig) -> Self {
        Self { config }
    }
}

#[rocket::async_trait]
impl Fairing for Cors {
    fn info(&self) -> Info {
        Info {
            name: "CORS Headers",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, request: &'r Request<'_>, response: &mut Response<'r>) {
        let Some(origin) = request.headers().get_one("Origin") else {
            return;
        };
        if !self.config.is_allowed(origin) {
            return;
        }

        // Echo the matched origin rather than a wildcard; responses vary
        // by Origin and caches must know that.
        response.set_header(Header::new(
            "Access-Control-Allow-Origin",
            origin.to_string(),
        ));
        response.set_header(Header::new("Vary", "Origin"));
        response.set_header(Header::new(
            "Access-Control-Allow-Methods",
            "GET, POST, DELETE, OPTIONS",
        ));
        response.set_header(Header::new(
            "Access-Control-Allow-Headers",
            "Authorization, Content-Type, X-User-Id",
        ));
        if self.config.allow_credentials {
            response.set_header(Header::new("Access-Control-Allow-Credentials", "true"));
        }
    }
}
