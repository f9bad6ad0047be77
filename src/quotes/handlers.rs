use axum::{
    Json, Router,
    extract::{
        Extension, Path, Query,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
    routing::{delete, get, post},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use super::protocol::{
    CreateQuoteResponse, DeleteQuoteResponse, ENDPOINT_QUOTE_BY_ID, ENDPOINT_QUOTES,
    ENDPOINT_RANDOM, ListQuotesParams, ListQuotesResponse, MSG_BAD_ID, MSG_BAD_REQUEST,
    RandomQuoteResponse,
};
use super::service::QuotesService;
use super::types::{NewQuote, QuoteError, QuoteId};

/// Builds the HTTP router for the quotes API.
pub fn router(service: Arc<QuotesService>) -> Router {
    Router::new()
        .route(
            ENDPOINT_QUOTES,
            post(handle_create_quote).get(handle_list_quotes),
        )
        .route(
            ENDPOINT_RANDOM,
            get(handle_random_quote).delete(handle_delete_non_numeric_id),
        )
        .route(ENDPOINT_QUOTE_BY_ID, delete(handle_delete_quote))
        .layer(TraceLayer::new_for_http())
        .layer(Extension(service))
}

fn error_status(err: &QuoteError) -> StatusCode {
    match err {
        QuoteError::Validation(_) => StatusCode::BAD_REQUEST,
        QuoteError::EmptyStore | QuoteError::NotFound => StatusCode::NOT_FOUND,
        QuoteError::CapacityExceeded => StatusCode::INSUFFICIENT_STORAGE,
    }
}

pub async fn handle_create_quote(
    Extension(service): Extension<Arc<QuotesService>>,
    payload: Result<Json<NewQuote>, JsonRejection>,
) -> (StatusCode, Json<CreateQuoteResponse>) {
    let quote = match payload {
        Ok(Json(quote)) => quote,
        Err(e) => {
            tracing::warn!("Rejected create request: {}", e);
            return (
                StatusCode::BAD_REQUEST,
                Json(CreateQuoteResponse::failure(MSG_BAD_REQUEST)),
            );
        }
    };

    let result = service.create(quote);
    let status = match &result {
        Ok(_) => StatusCode::CREATED,
        Err(e) => {
            tracing::debug!("Create failed: {}", e);
            error_status(e)
        }
    };

    (status, Json(result.into()))
}

pub async fn handle_list_quotes(
    Extension(service): Extension<Arc<QuotesService>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> (StatusCode, Json<ListQuotesResponse>) {
    let params = ListQuotesParams::from(pairs);
    let quotes = service.get(params.author.as_deref());
    tracing::debug!("Listing {} quotes", quotes.len());

    (StatusCode::OK, Json(quotes.into()))
}

pub async fn handle_random_quote(
    Extension(service): Extension<Arc<QuotesService>>,
) -> (StatusCode, Json<RandomQuoteResponse>) {
    let result = service.get_random();
    let status = match &result {
        Ok(_) => StatusCode::OK,
        Err(e) => error_status(e),
    };

    (status, Json(result.into()))
}

pub async fn handle_delete_quote(
    Extension(service): Extension<Arc<QuotesService>>,
    id: Result<Path<u64>, PathRejection>,
) -> (StatusCode, Json<DeleteQuoteResponse>) {
    let id = match id {
        Ok(Path(id)) => QuoteId(id),
        Err(e) => {
            tracing::warn!("Rejected delete request: {}", e);
            return (
                StatusCode::BAD_REQUEST,
                Json(DeleteQuoteResponse::failure(MSG_BAD_ID)),
            );
        }
    };

    let result = service.delete(id);
    let status = match &result {
        Ok(()) => StatusCode::OK,
        Err(e) => {
            tracing::debug!("Delete of {} failed: {}", id, e);
            error_status(e)
        }
    };

    (status, Json(result.into()))
}

/// `DELETE /quotes/random` lands on the static route instead of `/quotes/:id`.
pub async fn handle_delete_non_numeric_id() -> (StatusCode, Json<DeleteQuoteResponse>) {
    (
        StatusCode::BAD_REQUEST,
        Json(DeleteQuoteResponse::failure(MSG_BAD_ID)),
    )
}
