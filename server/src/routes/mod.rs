//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Stitches Leptos SSR rendering, the compiled client bundle under `/pkg`, and
//! the static media directory under a single Axum router. Anything that is not
//! a Leptos route or a bundle file is looked up in the asset directory; a miss
//! there renders the app, whose router fallback answers with the 404 page.

use std::path::{Path, PathBuf};

use axum::Router;
use axum::handler::Handler;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, file_and_error_handler, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

/// Health probe plus static assets. Paths missing from `assets_dir` are
/// rendered by Leptos so unknown pages get the app's "Page not found" view.
fn static_routes(assets_dir: &Path, leptos_options: LeptosOptions) -> Router {
    let not_found = file_and_error_handler::<LeptosOptions, _>(client::app::shell).with_state(leptos_options);
    let assets = ServeDir::new(assets_dir)
        .append_index_html_on_directories(false)
        .not_found_service(not_found);
    Router::new().route("/healthz", get(healthz)).fallback_service(assets)
}

/// Full site: Leptos SSR at `/`, bundle at `/pkg`, media and images elsewhere.
pub fn app(config: &ServerConfig, leptos_options: LeptosOptions) -> Router {
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    // Serve Leptos static assets (WASM, CSS, JS) from the site root /pkg directory.
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());
    let pkg_dir = site_root_path.join(leptos_options.site_pkg_dir.as_ref());

    leptos_router
        .nest_service("/pkg", ServeDir::new(pkg_dir))
        .merge(static_routes(&config.assets_dir, leptos_options))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
