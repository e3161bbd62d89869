//! Search HTTP Server.
//!
//! Exposes the search service over HTTP:
//! - `GET /health`: static liveness payload with the current UTC time
//! - `GET /search?q=&page=&page_size=`: paginated message search
//!
//! Domain errors map onto status codes: invalid pagination 400, page out of
//! range 404, upstream failure 503, anything else 500.

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{self, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, warn};

use crate::domain::errors::DomainError;
use crate::domain::models::{SearchPage, ServerConfig};
use crate::domain::ports::MessageSource;
use crate::services::SearchService;

/// Query parameters accepted by `/search`.
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    /// Substring to search for; empty or absent matches everything
    #[serde(default)]
    pub q: Option<String>,
    /// 1-indexed page number
    #[serde(default)]
    pub page: Option<usize>,
    /// Results per page
    #[serde(default)]
    pub page_size: Option<usize>,
}

/// Health check response.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `healthy`
    pub status: String,
    /// Current UTC time, RFC 3339
    pub timestamp: String,
}

/// Error response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable message
    pub error: String,
    /// Machine-readable error code
    pub code: String,
}

/// Shared state for the search HTTP server.
struct AppState<S: MessageSource> {
    service: SearchService<S>,
}

/// Search HTTP Server.
pub struct SearchHttpServer<S: MessageSource + 'static> {
    config: ServerConfig,
    service: SearchService<S>,
}

impl<S: MessageSource + 'static> SearchHttpServer<S> {
    /// Create a server for `service` bound per `config`.
    pub fn new(service: SearchService<S>, config: ServerConfig) -> Self {
        Self { config, service }
    }

    /// Build the router.
    pub fn build_router(self) -> Router {
        let state = Arc::new(AppState {
            service: self.service,
        });

        let app = Router::new()
            .route("/search", get(search::<S>))
            .route("/health", get(health_check))
            .with_state(state)
            .layer(CatchPanicLayer::custom(handle_panic));

        if self.config.enable_cors {
            app.layer(
                CorsLayer::new()
                    .allow_origin(cors::Any)
                    .allow_methods(cors::Any)
                    .allow_headers(cors::Any),
            )
            .layer(TraceLayer::new_for_http())
        } else {
            app.layer(TraceLayer::new_for_http())
        }
    }

    /// Start the server with a shutdown signal.
    ///
    /// `host` may be an IP literal or a resolvable hostname.
    pub async fn serve_with_shutdown<F>(
        self,
        shutdown: F,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let host = self.config.host.clone();
        let port = self.config.port;
        let router = self.build_router();

        let listener = TcpListener::bind((host.as_str(), port)).await?;
        tracing::info!("Search HTTP server listening on {}", listener.local_addr()?);

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown)
            .await?;
        Ok(())
    }
}

// Handler functions

async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

async fn search<S: MessageSource + 'static>(
    State(state): State<Arc<AppState<S>>>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<SearchPage>, (StatusCode, Json<ErrorResponse>)> {
    let Query(params) = params.map_err(|rejection| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: rejection.body_text(),
                code: "INVALID_QUERY".to_string(),
            }),
        )
    })?;

    state
        .service
        .search(params.q.as_deref(), params.page, params.page_size)
        .await
        .map(Json)
        .map_err(error_response)
}

/// Map a domain error onto its HTTP status and JSON body.
pub fn error_response(err: DomainError) -> (StatusCode, Json<ErrorResponse>) {
    let status = match &err {
        DomainError::InvalidPagination(_) => StatusCode::BAD_REQUEST,
        DomainError::PageNotFound { .. } => StatusCode::NOT_FOUND,
        DomainError::Upstream(_) => StatusCode::SERVICE_UNAVAILABLE,
        DomainError::Parse(_) | DomainError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    let error = match &err {
        DomainError::Parse(cause) => DomainError::Internal(cause.clone()).to_string(),
        other => other.to_string(),
    };

    if status.is_server_error() {
        error!(%status, error = %error, "search request failed");
    } else {
        warn!(%status, error = %error, "search request rejected");
    }

    (
        status,
        Json(ErrorResponse {
            error,
            code: err.code().to_string(),
        }),
    )
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .cloned()
        .or_else(|| err.downcast_ref::<&str>().map(ToString::to_string))
        .unwrap_or_else(|| "unknown panic".to_string());

    error_response(DomainError::Internal(detail)).into_response()
}
