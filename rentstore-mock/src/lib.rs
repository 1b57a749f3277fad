//! In-memory store API.
//!
//! Serves genres, customers, movies and rentals under `/api/*` with the
//! store's wire format, token check and error responses. Used by the
//! provider's lifecycle tests and runnable standalone for manual checks.

use axum::{middleware, routing::get, Router};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

pub mod routes;
pub mod state;

pub use state::AppState;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/genres",
            get(routes::genres::list_genres).post(routes::genres::create_genre),
        )
        .route(
            "/api/genres/{id}",
            get(routes::genres::get_genre)
                .put(routes::genres::update_genre)
                .delete(routes::genres::delete_genre),
        )
        .route(
            "/api/customers",
            get(routes::customers::list_customers).post(routes::customers::create_customer),
        )
        .route(
            "/api/customers/{id}",
            get(routes::customers::get_customer)
                .put(routes::customers::update_customer)
                .delete(routes::customers::delete_customer),
        )
        .route(
            "/api/movies",
            get(routes::movies::list_movies).post(routes::movies::create_movie),
        )
        .route(
            "/api/movies/{id}",
            get(routes::movies::get_movie)
                .put(routes::movies::update_movie)
                .delete(routes::movies::delete_movie),
        )
        .route(
            "/api/rentals",
            get(routes::rentals::list_rentals).post(routes::rentals::create_rental),
        )
        .route(
            "/api/rentals/{id}",
            get(routes::rentals::get_rental)
                .put(routes::rentals::update_rental)
                .delete(routes::rentals::delete_rental),
        )
        .layer(middleware::from_fn_with_state(
            state.clone(),
            routes::require_token,
        ))
        .with_state(state)
}

/// A running mock server on an ephemeral local port.
pub struct MockServer {
    pub addr: SocketAddr,
    pub state: AppState,
    shutdown_tx: oneshot::Sender<()>,
    handle: JoinHandle<()>,
}

impl MockServer {
    /// Bind `127.0.0.1:0` and serve in a background task.
    pub async fn spawn(token: &str) -> std::io::Result<Self> {
        let state = AppState::new(token);
        let router = create_router(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
        let handle = tokio::spawn(async move {
            let _ = axum::serve(listener, router)
                .with_graceful_shutdown(async {
                    let _ = shutdown_rx.await;
                })
                .await;
        });

        Ok(MockServer {
            addr,
            state,
            shutdown_tx,
            handle,
        })
    }

    /// Address without port, as the provider expects it.
    pub fn address(&self) -> String {
        format!("http://{}", self.addr.ip())
    }

    pub fn port(&self) -> u16 {
        self.addr.port()
    }

    pub fn request_count(&self) -> usize {
        self.state.request_count()
    }

    pub async fn shutdown(self) {
        let _ = self.shutdown_tx.send(());
        let _ = self.handle.await;
    }
}
