use std::{future::IntoFuture, net::SocketAddr, process::exit, sync::Arc, time::Duration};

use anyhow::Result;
use axum::{
    Router,
    body::Body,
    http::{Request, Response},
    middleware,
    routing::{get, post},
};
use mailer::Deliver;
use tokio::{
    net::TcpListener,
    signal::unix::{SignalKind, signal},
};
use tower_http::trace::{self, TraceLayer};
use tracing::{Level, Span};

pub(crate) use self::auth::Credentials;
use crate::store::Store;

mod admin;
mod auth;
mod error;
mod export;
mod home;
mod html;
mod speakers;
mod subscriptions;
mod talks;


pub(crate) struct AppState<S> {
    pub(crate) store: S,
    pub(crate) mailer: Arc<dyn Deliver>,
    pub(crate) from_email: String,
    pub(crate) admin: Option<Credentials>,
}

pub(crate) fn router<S: Store>(state: AppState<S>) -> Router {
    let trace_layer = TraceLayer::new_for_http()
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!("request: {} {}", request.method(), request.uri())
        })
        .on_response(|response: &Response<Body>, latency: Duration, _span: &Span| {
            tracing::info!("response: {} in {latency:?}", response.status())
        })
        .on_failure(trace::DefaultOnFailure::new().level(Level::ERROR));

    let admin = Router::new()
        .route("/subscriptions", get(admin::subscriptions::<S>))
        .route("/subscriptions/mark-as-paid", post(admin::mark_as_paid::<S>))
        .route("/export-subscriptions", get(export::subscriptions::<S>))
        .route_layer(middleware::from_fn_with_state(state.admin.clone(), auth::require_admin));

    Router::new()
        .route("/", get(home::index::<S>))
        .route("/speakers/{slug}", get(speakers::detail::<S>))
        .route("/talks", get(talks::index::<S>))
        .route("/talks/{id}", get(talks::detail::<S>))
        .route("/subscribe", get(subscriptions::new).post(subscriptions::create::<S>))
        .route("/subscribe/{id}", get(subscriptions::detail::<S>))
        .nest("/admin", admin)
        .fallback(error::not_found)
        .layer(trace_layer)
        .with_state(Arc::new(state))
}

pub(crate) async fn serve<S: Store>(address: SocketAddr, state: AppState<S>) -> Result<()> {
    let listener = TcpListener::bind(address).await?;
    tracing::info!("listening on {}", listener.local_addr()?);

    let server = axum::serve(listener, router(state)).into_future();

    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        result = server => result?,
        _ = sigint.recv() => {
            tracing::info!("received SIGINT, shutting down");
            exit(130);
        },
        _ = sigterm.recv() => {
            tracing::info!("received SIGTERM, shutting down");
            exit(143);
        },
    }

    Ok(())
}
