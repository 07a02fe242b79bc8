//! HTTP surface — maps the student routes onto a [`StudentStore`].
//!
//! Uses axum for routing and tower-http for CORS.
//!
//! ## Routes
//!
//! - `GET /` — browser management page.
//! - `GET /students` — all students, in insertion order.
//! - `POST /students` — create; responds `201 { message, student }`.
//! - `PUT /students/:id` — partial update; `404` when the id is unknown.
//! - `DELETE /students/:id` — remove; `404` when the id is unknown.
//!
//! ## Example
//!
//! ```ignore
//! use student_records::{http, StudentStore};
//!
//! // Compose with other axum routes
//! let app = http::router(StudentStore::seeded());
//!
//! // Or serve directly
//! http::serve(StudentStore::seeded(), "0.0.0.0:3000").await?;
//! ```

mod error;
mod handlers;
mod page;

use axum::routing::{get, put};
use axum::Router;
use tokio::net::{TcpListener, ToSocketAddrs};
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::store::StudentStore;

pub use error::ApiError;
pub use handlers::StudentResponse;

/// Build an axum `Router` serving the student API and page.
pub fn router(store: StudentStore) -> Router {
    Router::new()
        .route("/", get(page::index))
        .route(
            "/students",
            get(handlers::list_students).post(handlers::create_student),
        )
        .route(
            "/students/:id",
            put(handlers::update_student).delete(handlers::delete_student),
        )
        .layer(CorsLayer::permissive())
        .with_state(store)
}

/// Serve the store over HTTP at the given address (e.g. `"0.0.0.0:3000"`).
pub async fn serve(store: StudentStore, addr: impl ToSocketAddrs) -> Result<(), std::io::Error> {
    let app = router(store);
    let listener = TcpListener::bind(addr).await?;
    info!("server running on {}", listener.local_addr()?);
    axum::serve(listener, app).await
}
