use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "QuoteDesk API",
        version = "1.0.0",
        description = r#"
# QuoteDesk Quotation Management API

An API for managing customer quotations in a manufacturing sales workflow: versioned
quotation documents, adoption tracking, and copy-based revisioning.

## Features

- **Quotation Versions**: Create and update quotation versions with per-part detail lines
- **Customer Quotation Summaries**: One summary row per quotation number, kept in sync on writes
- **Copy Workflow**: Duplicate an adopted quotation into a fresh draft lineage
- **List & Search**: Filtered, paginated listings with full version trees attached
- **Number Generation**: Date-and-time derived quotation numbers

## Error Handling

Write endpoints use consistent error response formats with appropriate HTTP status codes:

```json
{
  "error": "Bad Request",
  "message": "Only an adopted quotation can be copied",
  "timestamp": "2024-01-01T00:00:00Z"
}
```

Read endpoints always answer 200 and report failures through the response envelope's
`success` flag and `message` field.

## Pagination

The listing endpoint supports pagination with the following query parameters:
- `page`: Page number (default: 1, max: 1000000)
- `page_size`: Items per page (default: 20, max: 200)
- `order_by`: Comma separated ordering fields
- `order_direction`: Comma separated directions (asc/desc)

## Summary Sync

Write endpoints accept a `sync` query parameter; `sync=skip` leaves the customer
quotation summary untouched.
        "#,
        contact(
            name = "QuoteDesk Support",
            email = "support@quotedesk.io",
            url = "https://quotedesk.io"
        ),
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    ),
    servers(
        (url = "https://api.quotedesk.io", description = "Production server"),
        (url = "http://localhost:8080", description = "Local development")
    ),
    tags(
        (name = "quotations", description = "Quotation management endpoints"),
        (name = "Health", description = "Health check endpoints")
    ),
    paths(
        crate::handlers::quotations::list_quotations,
        crate::handlers::quotations::create_quotation,
        crate::handlers::quotations::generate_number,
        crate::handlers::quotations::get_quotation,
        crate::handlers::quotations::update_quotation,
        crate::handlers::quotations::get_quotation_by_number,
        crate::handlers::quotations::copy_quotation,
    ),
    components(
        schemas(
            // Common types
            crate::ApiResponse<serde_json::Value>,

            // Quotation types
            crate::services::quotations::CreateQuotationRequest,
            crate::services::quotations::UpdateQuotationRequest,
            crate::services::quotations::QuotationDetailInput,
            crate::services::quotations::QuotationResponse,
            crate::services::quotations::QuotationDetailResponse,
            crate::services::quotations::CopyQuotationResponse,
            crate::services::quotation_queries::CustomerQuotationResponse,
            crate::services::quotation_queries::QuotationListData,
            crate::services::quotation_queries::PaginationMeta,
            crate::handlers::quotations::QuotationNumberResponse,

            // Error types
            crate::errors::ErrorResponse
        )
    )
)]
pub struct ApiDocV1;

pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new("/swagger-ui")
        .url("/api-docs/openapi.json", ApiDocV1::openapi())
        .config(utoipa_swagger_ui::Config::from("/api-docs/openapi.json").try_it_out_enabled(true))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn openapi_document_lists_quotation_paths() {
        let openapi = ApiDocV1::openapi();
        let json = serde_json::to_string_pretty(&openapi).expect("openapi should serialize");
        assert!(json.contains("QuoteDesk API"));
        assert!(json.contains("/api/v1/quotations"));
        assert!(json.contains("/api/v1/quotations/by-number/{quotation_number}/copy"));
        assert!(json.contains("/api/v1/quotations/generate-number"));
    }
}
