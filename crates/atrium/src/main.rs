mod config;
mod demo;
mod flatten;

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::get;
use axum::Router;
use tracing_subscriber::EnvFilter;

use crate::config::AtriumConfig;
use crate::demo::DemoStore;
use webapp::{PrivateApplication, Resolution};

struct AppState {
    app: PrivateApplication,
    store: DemoStore,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AtriumConfig::load("atrium.toml")?;

    let mut store = DemoStore::new();
    let app = PrivateApplication::builder(demo::theme_registry())
        .with_prefix(&config.prefix)
        .build();
    if let Some(theme) = &config.preferred_theme {
        app.set_preferred_theme(Some(theme.clone()));
    }
    app.install_on(&mut store);

    let router = Router::new()
        .route(&format!("/{}", config.prefix), get(root))
        .route(&format!("/{}/", config.prefix), get(root))
        .route(&format!("/{}/:token", config.prefix), get(page))
        .with_state(Arc::new(AppState { app, store }));

    let listener = tokio::net::TcpListener::bind(&config.bind)
        .await
        .with_context(|| format!("binding {}", config.bind))?;
    tracing::info!(bind = %config.bind, prefix = %config.prefix, "atrium listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serving atrium")?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(%err, "failed to listen for ctrl-c");
        return;
    }
    tracing::info!("shutdown signal received");
}

async fn root(State(state): State<Arc<AppState>>) -> Response {
    match state.app.resolve_root(&state.store) {
        Ok(resolution) => render(resolution),
        Err(err) => configuration_error(err),
    }
}

async fn page(State(state): State<Arc<AppState>>, Path(token): Path<String>) -> Response {
    match state.app.resolve(&state.store, &token) {
        Ok(resolution) => render(resolution),
        Err(err) => configuration_error(err),
    }
}

fn render(resolution: Resolution) -> Response {
    match resolution {
        Resolution::Page(page) => Html(flatten::flatten_page(&page)).into_response(),
        Resolution::Resource(resource) => (
            [(header::CONTENT_TYPE, resource.content_type().to_owned())],
            resource.body(),
        )
            .into_response(),
        Resolution::Redirect(link) => Redirect::to(&link).into_response(),
        Resolution::NotFound => (StatusCode::NOT_FOUND, "no such resource").into_response(),
    }
}

/// Deployment defects surface as explicit server errors, never as silently
/// degraded pages.
fn configuration_error(err: webapp::WebAppError) -> Response {
    tracing::error!(%err, "configuration error while resolving page");
    (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()).into_response()
}
