use axum::{
    extract::{Json, Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::{
    errors::ServiceError,
    services::quotation_numbers::generate_quotation_number,
    services::quotation_queries::{QuotationListData, QuotationListParams},
    services::quotations::{
        CopyQuotationResponse, CreateQuotationRequest, QuotationResponse, SyncMode,
        UpdateQuotationRequest,
    },
    ApiResponse, AppState,
};

/// Controls summary propagation on writes.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct SyncQuery {
    /// `skip` leaves the customer quotation summary untouched;
    /// anything else propagates.
    pub sync: Option<String>,
}

impl SyncQuery {
    fn mode(&self) -> SyncMode {
        match self.sync.as_deref().map(str::trim) {
            Some(value) if value.eq_ignore_ascii_case("skip") => SyncMode::Skip,
            _ => SyncMode::Propagate,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QuotationNumberResponse {
    #[schema(example = "250101-034883")]
    pub quotation_number: String,
}

/// List customer quotations
///
/// Returns customer quotation summaries matching the filters, each with
/// its full version tree. The endpoint always answers 200; failures are
/// reported through the response envelope.
#[utoipa::path(
    get,
    path = "/api/v1/quotations",
    params(QuotationListParams),
    responses(
        (status = 200, description = "Customer quotations with their version trees")
    ),
    tag = "quotations"
)]
pub async fn list_quotations(
    State(state): State<Arc<AppState>>,
    Query(params): Query<QuotationListParams>,
) -> Json<ApiResponse<QuotationListData>> {
    match state.services.quotation_queries.list(params).await {
        Ok(data) => Json(ApiResponse::success(data)),
        Err(err) => Json(ApiResponse::error(err.response_message())),
    }
}

/// Create a quotation version
#[utoipa::path(
    post,
    path = "/api/v1/quotations",
    request_body = CreateQuotationRequest,
    params(SyncQuery),
    responses(
        (status = 201, description = "Quotation created"),
        (status = 400, description = "Invalid request", body = crate::errors::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::errors::ErrorResponse)
    ),
    tag = "quotations"
)]
pub async fn create_quotation(
    State(state): State<Arc<AppState>>,
    Query(sync): Query<SyncQuery>,
    Json(payload): Json<CreateQuotationRequest>,
) -> Result<(StatusCode, Json<ApiResponse<QuotationResponse>>), ServiceError> {
    let data = state
        .services
        .quotations
        .create_quotation(payload, sync.mode())
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success_with_message(data, "Quotation created")),
    ))
}

/// Generate a quotation number
///
/// Issues a date-and-time derived quotation number for a new lineage.
#[utoipa::path(
    post,
    path = "/api/v1/quotations/generate-number",
    responses(
        (status = 200, description = "Generated quotation number", body = QuotationNumberResponse)
    ),
    tag = "quotations"
)]
pub async fn generate_number() -> Json<ApiResponse<QuotationNumberResponse>> {
    Json(ApiResponse::success(QuotationNumberResponse {
        quotation_number: generate_quotation_number(),
    }))
}

/// Get a quotation version by id
#[utoipa::path(
    get,
    path = "/api/v1/quotations/{id}",
    params(("id" = Uuid, Path, description = "Quotation version id")),
    responses(
        (status = 200, description = "Quotation version with details")
    ),
    tag = "quotations"
)]
pub async fn get_quotation(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Json<ApiResponse<QuotationResponse>> {
    match state.services.quotations.get_quotation(id).await {
        Ok(data) => Json(ApiResponse::success(data)),
        Err(err) => Json(ApiResponse::error(err.response_message())),
    }
}

/// Update a quotation version
#[utoipa::path(
    put,
    path = "/api/v1/quotations/{id}",
    params(("id" = Uuid, Path, description = "Quotation version id"), SyncQuery),
    request_body = UpdateQuotationRequest,
    responses(
        (status = 200, description = "Quotation updated"),
        (status = 400, description = "Invalid request", body = crate::errors::ErrorResponse),
        (status = 404, description = "Quotation not found", body = crate::errors::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::errors::ErrorResponse)
    ),
    tag = "quotations"
)]
pub async fn update_quotation(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Query(sync): Query<SyncQuery>,
    Json(payload): Json<UpdateQuotationRequest>,
) -> Result<Json<ApiResponse<QuotationResponse>>, ServiceError> {
    let data = state
        .services
        .quotations
        .update_quotation(id, payload, sync.mode())
        .await?;
    Ok(Json(ApiResponse::success_with_message(
        data,
        "Quotation updated",
    )))
}

/// Get the latest quotation version under a number
#[utoipa::path(
    get,
    path = "/api/v1/quotations/by-number/{quotation_number}",
    params(("quotation_number" = String, Path, description = "Quotation number")),
    responses(
        (status = 200, description = "Most recently created version under the number")
    ),
    tag = "quotations"
)]
pub async fn get_quotation_by_number(
    State(state): State<Arc<AppState>>,
    Path(quotation_number): Path<String>,
) -> Json<ApiResponse<QuotationResponse>> {
    match state
        .services
        .quotations
        .get_quotation_by_number(&quotation_number)
        .await
    {
        Ok(data) => Json(ApiResponse::success(data)),
        Err(err) => Json(ApiResponse::error(err.response_message())),
    }
}

/// Copy a quotation
///
/// Copies the adopted version of the named lineage into a fresh draft
/// under a newly generated quotation number.
#[utoipa::path(
    post,
    path = "/api/v1/quotations/by-number/{quotation_number}/copy",
    params(("quotation_number" = String, Path, description = "Quotation number")),
    responses(
        (status = 201, description = "Quotation copied", body = CopyQuotationResponse),
        (status = 400, description = "Lineage has no adopted version", body = crate::errors::ErrorResponse),
        (status = 404, description = "Quotation not found", body = crate::errors::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::errors::ErrorResponse)
    ),
    tag = "quotations"
)]
pub async fn copy_quotation(
    State(state): State<Arc<AppState>>,
    Path(quotation_number): Path<String>,
) -> Result<(StatusCode, Json<ApiResponse<CopyQuotationResponse>>), ServiceError> {
    let data = state
        .services
        .quotations
        .copy_quotation(&quotation_number)
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success_with_message(data, "Quotation copied")),
    ))
}

pub fn quotation_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(list_quotations).post(create_quotation))
        .route("/generate-number", post(generate_number))
        .route(
            "/by-number/:quotation_number",
            get(get_quotation_by_number),
        )
        .route("/by-number/:quotation_number/copy", post(copy_quotation))
        .route("/:id", get(get_quotation).put(update_quotation))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sync_query_defaults_to_propagate() {
        assert_eq!(SyncQuery { sync: None }.mode(), SyncMode::Propagate);
        assert_eq!(
            SyncQuery {
                sync: Some("propagate".into())
            }
            .mode(),
            SyncMode::Propagate
        );
    }

    #[test]
    fn sync_query_accepts_skip_case_insensitively() {
        assert_eq!(
            SyncQuery {
                sync: Some("skip".into())
            }
            .mode(),
            SyncMode::Skip
        );
        assert_eq!(
            SyncQuery {
                sync: Some(" SKIP ".into())
            }
            .mode(),
            SyncMode::Skip
        );
    }
}
