//! HTTP surface for the search service.

pub mod search_http;

pub use search_http::{error_response, ErrorResponse, HealthResponse, SearchHttpServer, SearchParams};
