//! HTTP API for the quotes daemon.
//!
//! Provides REST endpoints for:
//! - Health check
//! - Create quote
//! - List quotes (optionally filtered by author)
//! - Random quote
//! - Delete quote by id

use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use quotes_domain::{Quote, QuoteId};
use quotes_store::{QuoteRepository, StoreError};

// =============================================================================
// API State
// =============================================================================

/// Shared state for API handlers.
pub struct ApiState {
    /// The storage engine, behind its port trait so tests can substitute it.
    pub store: Arc<dyn QuoteRepository>,
}

// =============================================================================
// Request/Response Types
// =============================================================================

/// Health check response.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Request to create a new quote.
#[derive(Debug, Deserialize)]
pub struct CreateQuoteRequest {
    pub author: String,
    #[serde(rename = "quote")]
    pub text: String,
}

/// Query parameters for listing quotes.
#[derive(Debug, Deserialize)]
pub struct ListQuotesParams {
    pub author: Option<String>,
}

/// Error response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

// =============================================================================
// Router
// =============================================================================

/// Create the API router.
pub fn create_router(state: Arc<ApiState>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/quotes", post(create_quote_handler))
        .route("/quotes", get(list_quotes_handler))
        .route("/quotes/random", get(random_quote_handler))
        .route("/quotes/:id", delete(delete_quote_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// =============================================================================
// Handlers
// =============================================================================

/// Health check endpoint.
async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Create a new quote.
///
/// The body is decoded by hand so malformed JSON yields the enveloped 400
/// instead of axum's plain-text rejection.
async fn create_quote_handler(
    State(state): State<Arc<ApiState>>,
    body: Bytes,
) -> Result<Json<Quote>, (StatusCode, Json<ErrorResponse>)> {
    let req: CreateQuoteRequest = serde_json::from_slice(&body).map_err(|e| {
        warn!(error = %e, "Failed to decode create request");
        bad_request("Invalid input")
    })?;

    if req.author.is_empty() || req.text.is_empty() {
        return Err(bad_request("Author and quote cannot be empty"));
    }

    let created = state
        .store
        .create(&req.author, &req.text)
        .await
        .map_err(store_error_response)?;

    info!(id = created.id, author = %created.author, "Created quote");
    Ok(Json(created))
}

/// List all quotes, or filter by author when the query parameter is present.
async fn list_quotes_handler(
    State(state): State<Arc<ApiState>>,
    Query(params): Query<ListQuotesParams>,
) -> Result<Json<Vec<Quote>>, (StatusCode, Json<ErrorResponse>)> {
    // An absent or empty author parameter means the unfiltered listing.
    let author = params.author.as_deref().unwrap_or("");

    let quotes = if author.is_empty() {
        state.store.get_all().await.map_err(store_error_response)?
    } else {
        let matched = state
            .store
            .get_by_author(author)
            .await
            .map_err(store_error_response)?;

        // Empty filtered result is a 404; empty unfiltered result is a 200.
        if matched.is_empty() {
            info!(author, "No quotes found for author");
            return Err((
                StatusCode::NOT_FOUND,
                Json(ErrorResponse {
                    error: "No quotes found for author".to_string(),
                }),
            ));
        }
        matched
    };

    Ok(Json(quotes))
}

/// Return one quote picked uniformly at random.
async fn random_quote_handler(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Quote>, (StatusCode, Json<ErrorResponse>)> {
    let quote = state
        .store
        .get_random()
        .await
        .map_err(store_error_response)?;

    info!(id = quote.id, "Retrieved random quote");
    Ok(Json(quote))
}

/// Delete a quote by id.
///
/// The id segment is taken as a string and parsed here so a non-numeric id
/// yields the enveloped 400 rather than a path-rejection response.
async fn delete_quote_handler(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, (StatusCode, Json<ErrorResponse>)> {
    let id: QuoteId = id.parse().map_err(|_| {
        warn!(id = %id, "Invalid quote id");
        bad_request("Invalid ID")
    })?;

    state.store.delete(id).await.map_err(store_error_response)?;

    info!(id, "Deleted quote");
    Ok(StatusCode::NO_CONTENT)
}

// =============================================================================
// Helpers
// =============================================================================

fn bad_request(message: &str) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
}

fn store_error_response(error: StoreError) -> (StatusCode, Json<ErrorResponse>) {
    let status = match &error {
        StoreError::Empty | StoreError::NotFound { .. } => StatusCode::NOT_FOUND,
    };

    (
        status,
        Json(ErrorResponse {
            error: error.to_string(),
        }),
    )
}
