use std::sync::Arc;

use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::{Expr, Func, Query, SimpleExpr},
    ColumnTrait, Condition, DbErr, EntityTrait, Order, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect,
};
use serde::{Deserialize, Serialize};
use tracing::{error, instrument, warn};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::{
    audit::{categories, AuditLog},
    db::DbPool,
    entities::{customer_quotation, quotation},
    errors::ServiceError,
    services::quotations::{load_details, quotation_response, QuotationResponse},
};

/// Query parameters for the customer quotation listing.
///
/// `order_by` and `order_direction` take comma separated lists; fields
/// outside the orderable set are ignored and unparseable directions
/// fall back to descending.
#[derive(Debug, Clone, Deserialize, Validate, IntoParams)]
pub struct QuotationListParams {
    /// Case-insensitive substring match on the customer name.
    pub customer_name: Option<String>,
    /// Case-insensitive substring match on the product description.
    pub product_name: Option<String>,
    /// Case-insensitive substring match on the quotation number.
    pub quotation_number: Option<String>,
    /// Case-insensitive substring match against version ids of the
    /// lineage's version rows.
    pub version_id: Option<String>,
    #[serde(default = "default_page")]
    #[validate(range(min = 1, max = 1_000_000))]
    pub page: u64,
    #[serde(default = "default_page_size")]
    #[validate(range(min = 1, max = 200))]
    pub page_size: u64,
    #[serde(default = "default_order_by")]
    pub order_by: String,
    #[serde(default = "default_order_direction")]
    pub order_direction: String,
}

fn default_page() -> u64 {
    1
}

fn default_page_size() -> u64 {
    20
}

fn default_order_by() -> String {
    "created_at".to_string()
}

fn default_order_direction() -> String {
    "desc".to_string()
}

impl Default for QuotationListParams {
    fn default() -> Self {
        Self {
            customer_name: None,
            product_name: None,
            quotation_number: None,
            version_id: None,
            page: default_page(),
            page_size: default_page_size(),
            order_by: default_order_by(),
            order_direction: default_order_direction(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CustomerQuotationResponse {
    pub id: Uuid,
    pub quotation_number: String,
    pub customer_name: String,
    pub product_name: Option<String>,
    pub is_adopted: bool,
    pub adopted_version_id: Option<String>,
    pub adopted_version_name: Option<String>,
    pub adopted_at: Option<DateTime<Utc>>,
    pub adopted_by: Option<String>,
    pub adoption_reason: Option<String>,
    pub total_versions: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// All version rows under this quotation number, each with its
    /// detail lines.
    pub versions: Vec<QuotationResponse>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PaginationMeta {
    pub page: u64,
    pub page_size: u64,
    pub total: u64,
    pub total_pages: u64,
    pub has_next: bool,
    pub has_prev: bool,
}

impl PaginationMeta {
    pub fn new(page: u64, page_size: u64, total: u64) -> Self {
        let total_pages = if page_size == 0 {
            0
        } else {
            total.div_ceil(page_size)
        };
        Self {
            page,
            page_size,
            total,
            total_pages,
            has_next: page < total_pages,
            has_prev: page > 1,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QuotationListData {
    pub items: Vec<CustomerQuotationResponse>,
    pub pagination: PaginationMeta,
}

/// Resolved ordering for the summary query. A `version_id` sort cannot
/// be expressed against the summary table, so it is carried separately
/// and applied to the fetched page.
#[derive(Debug, Clone)]
struct OrderSpec {
    columns: Vec<(customer_quotation::Column, Order)>,
    version_sort: Option<Order>,
}

/// Read side of the quotation module: filtered, paginated listings of
/// customer quotation summaries with their version trees attached.
#[derive(Clone)]
pub struct QuotationQueryService {
    db_pool: Arc<DbPool>,
    audit: AuditLog,
}

impl QuotationQueryService {
    /// Creates a new quotation query service instance
    pub fn new(db_pool: Arc<DbPool>, audit: AuditLog) -> Self {
        Self { db_pool, audit }
    }

    /// Lists customer quotation summaries with filtering, ordering and
    /// pagination. Each returned summary carries its full version tree.
    #[instrument(skip(self, params), fields(page = params.page, page_size = params.page_size))]
    pub async fn list(
        &self,
        params: QuotationListParams,
    ) -> Result<QuotationListData, ServiceError> {
        params
            .validate()
            .map_err(|e| ServiceError::ValidationError(e.to_string()))?;

        match self.list_inner(&params).await {
            Ok(data) => Ok(data),
            Err(err) => {
                error!(error = %err, "customer quotation listing failed");
                self.audit
                    .record(
                        categories::QUOTATION_LIST,
                        format!("Failed to list customer quotations: {}", err),
                    )
                    .await;
                Err(err)
            }
        }
    }

    async fn list_inner(
        &self,
        params: &QuotationListParams,
    ) -> Result<QuotationListData, ServiceError> {
        let db = &*self.db_pool;
        let page = params.page;
        let page_size = params.page_size;

        let mut condition = Condition::all();
        if let Some(customer) = non_blank(&params.customer_name) {
            condition = condition.add(contains_insensitive(
                customer_quotation::Column::CustomerName,
                customer,
            ));
        }
        if let Some(product) = non_blank(&params.product_name) {
            condition = condition.add(contains_insensitive(
                customer_quotation::Column::ProductName,
                product,
            ));
        }
        if let Some(number) = non_blank(&params.quotation_number) {
            condition = condition.add(contains_insensitive(
                customer_quotation::Column::QuotationNumber,
                number,
            ));
        }

        if let Some(version) = non_blank(&params.version_id) {
            if let Some(number) = non_blank(&params.quotation_number) {
                // Combined number and version filter: probe the version
                // rows once and serve an empty page when nothing can
                // match, instead of filtering every summary away later.
                let matches = quotation::Entity::find()
                    .filter(contains_insensitive(
                        quotation::Column::QuotationNumber,
                        number,
                    ))
                    .filter(contains_insensitive(quotation::Column::VersionId, version))
                    .count(db)
                    .await?;
                if matches == 0 {
                    return Ok(QuotationListData {
                        items: Vec::new(),
                        pagination: PaginationMeta::new(page, page_size, 0),
                    });
                }
            } else {
                condition = condition.add(
                    customer_quotation::Column::QuotationNumber.in_subquery(
                        Query::select()
                            .column(quotation::Column::QuotationNumber)
                            .distinct()
                            .from(quotation::Entity)
                            .and_where(contains_insensitive(
                                quotation::Column::VersionId,
                                version,
                            ))
                            .to_owned(),
                    ),
                );
            }
        }

        let base = customer_quotation::Entity::find().filter(condition);
        let total = base.clone().count(db).await?;

        let spec = build_order_spec(&params.order_by, &params.order_direction);
        let mut query = base;
        if spec.version_sort.is_some() || spec.columns.is_empty() {
            query = query.order_by_desc(customer_quotation::Column::CreatedAt);
        } else {
            for (column, direction) in &spec.columns {
                query = query.order_by(*column, direction.clone());
            }
        }

        let rows = query
            .offset(page.saturating_sub(1).saturating_mul(page_size))
            .limit(page_size)
            .all(db)
            .await?;

        let version_needle = non_blank(&params.version_id).map(str::to_ascii_lowercase);

        let mut items = Vec::with_capacity(rows.len());
        for summary in rows {
            let mut versions = self.load_versions_or_empty(&summary.quotation_number).await;
            if let Some(needle) = &version_needle {
                versions.retain(|v| v.version_id.to_ascii_lowercase().contains(needle));
            }
            items.push(summary_response(summary, versions));
        }

        // A version_id ordering is resolved against the page that was
        // fetched, using each lineage's leading version.
        if let Some(direction) = &spec.version_sort {
            items.sort_by(|a, b| match direction {
                Order::Asc => leading_version_id(a).cmp(leading_version_id(b)),
                _ => leading_version_id(b).cmp(leading_version_id(a)),
            });
        }

        Ok(QuotationListData {
            items,
            pagination: PaginationMeta::new(page, page_size, total),
        })
    }

    async fn load_versions_or_empty(&self, quotation_number: &str) -> Vec<QuotationResponse> {
        match self.load_versions(quotation_number).await {
            Ok(versions) => versions,
            Err(err) => {
                warn!(
                    error = %err,
                    quotation_number = %quotation_number,
                    "failed to load quotation versions; returning none"
                );
                self.audit
                    .record(
                        categories::QUOTATION_VERSIONS,
                        format!(
                            "Failed to fetch versions for quotation number {}: {}",
                            quotation_number, err
                        ),
                    )
                    .await;
                Vec::new()
            }
        }
    }

    async fn load_versions(&self, quotation_number: &str) -> Result<Vec<QuotationResponse>, DbErr> {
        let db = &*self.db_pool;
        let models = quotation::Entity::find()
            .filter(quotation::Column::QuotationNumber.eq(quotation_number))
            .order_by_asc(quotation::Column::VersionId)
            .order_by_desc(quotation::Column::CreatedAt)
            .all(db)
            .await?;

        let mut versions = Vec::with_capacity(models.len());
        for model in models {
            let details = match load_details(db, model.id).await {
                Ok(details) => details,
                Err(err) => {
                    warn!(
                        error = %err,
                        quotation_id = %model.id,
                        "failed to load details for listed version; returning none"
                    );
                    self.audit
                        .record(
                            categories::QUOTATION_DETAILS,
                            format!(
                                "Failed to fetch details for quotation {}: {}",
                                model.id, err
                            ),
                        )
                        .await;
                    Vec::new()
                }
            };
            versions.push(quotation_response(model, &details));
        }
        Ok(versions)
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// Case-insensitive substring match via LOWER(column) LIKE %needle%.
fn contains_insensitive<C>(column: C, needle: &str) -> SimpleExpr
where
    C: ColumnTrait,
{
    Expr::expr(Func::lower(Expr::col(column)))
        .like(format!("%{}%", needle.to_ascii_lowercase()))
}

fn order_column(field: &str) -> Option<customer_quotation::Column> {
    match field {
        "id" => Some(customer_quotation::Column::Id),
        "quotation_number" => Some(customer_quotation::Column::QuotationNumber),
        "customer_name" => Some(customer_quotation::Column::CustomerName),
        "product_name" => Some(customer_quotation::Column::ProductName),
        "created_at" => Some(customer_quotation::Column::CreatedAt),
        "updated_at" => Some(customer_quotation::Column::UpdatedAt),
        _ => None,
    }
}

fn parse_direction(raw: &str) -> Order {
    match raw.trim().to_ascii_lowercase().as_str() {
        "asc" => Order::Asc,
        _ => Order::Desc,
    }
}

/// Pairs ordering fields with directions by position; when directions
/// run out the last one repeats. Unknown fields drop out, `version_id`
/// is routed to the page-local sort.
fn build_order_spec(order_by: &str, order_direction: &str) -> OrderSpec {
    let fields: Vec<&str> = order_by
        .split(',')
        .map(str::trim)
        .filter(|field| !field.is_empty())
        .collect();
    let directions: Vec<Order> = order_direction.split(',').map(parse_direction).collect();

    let mut columns = Vec::new();
    let mut version_sort = None;
    for (index, field) in fields.iter().enumerate() {
        let direction = directions
            .get(index)
            .or_else(|| directions.last())
            .cloned()
            .unwrap_or(Order::Desc);
        if *field == "version_id" {
            version_sort = Some(direction);
        } else if let Some(column) = order_column(field) {
            columns.push((column, direction));
        }
    }

    OrderSpec {
        columns,
        version_sort,
    }
}

fn leading_version_id(item: &CustomerQuotationResponse) -> &str {
    item.versions
        .first()
        .map(|v| v.version_id.as_str())
        .unwrap_or("")
}

fn summary_response(
    model: customer_quotation::Model,
    versions: Vec<QuotationResponse>,
) -> CustomerQuotationResponse {
    CustomerQuotationResponse {
        id: model.id,
        quotation_number: model.quotation_number,
        customer_name: model.customer_name,
        product_name: model.product_name,
        is_adopted: model.is_adopted,
        adopted_version_id: model.adopted_version_id,
        adopted_version_name: model.adopted_version_name,
        adopted_at: model.adopted_at,
        adopted_by: model.adopted_by,
        adoption_reason: model.adoption_reason,
        total_versions: model.total_versions,
        created_at: model.created_at,
        updated_at: model.updated_at,
        versions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::sea_query::SqliteQueryBuilder;

    #[test]
    fn order_spec_defaults_to_created_at_desc() {
        let spec = build_order_spec("created_at", "desc");
        assert!(spec.version_sort.is_none());
        assert_eq!(spec.columns.len(), 1);
        assert!(matches!(
            spec.columns[0],
            (customer_quotation::Column::CreatedAt, Order::Desc)
        ));
    }

    #[test]
    fn order_spec_drops_unknown_fields() {
        let spec = build_order_spec("created_at,favorite_color", "asc");
        assert_eq!(spec.columns.len(), 1);
        assert!(matches!(
            spec.columns[0],
            (customer_quotation::Column::CreatedAt, Order::Asc)
        ));
    }

    #[test]
    fn order_spec_repeats_last_direction() {
        let spec = build_order_spec("customer_name,created_at,updated_at", "asc,desc");
        assert_eq!(spec.columns.len(), 3);
        assert!(matches!(
            spec.columns[0],
            (customer_quotation::Column::CustomerName, Order::Asc)
        ));
        assert!(matches!(
            spec.columns[1],
            (customer_quotation::Column::CreatedAt, Order::Desc)
        ));
        assert!(matches!(
            spec.columns[2],
            (customer_quotation::Column::UpdatedAt, Order::Desc)
        ));
    }

    #[test]
    fn order_spec_treats_invalid_direction_as_desc() {
        let spec = build_order_spec("customer_name", "sideways");
        assert!(matches!(
            spec.columns[0],
            (customer_quotation::Column::CustomerName, Order::Desc)
        ));
    }

    #[test]
    fn order_spec_routes_version_id_to_page_sort() {
        let spec = build_order_spec("version_id,created_at", "asc,desc");
        assert!(matches!(spec.version_sort, Some(Order::Asc)));
        assert_eq!(spec.columns.len(), 1);
        assert!(matches!(
            spec.columns[0],
            (customer_quotation::Column::CreatedAt, Order::Desc)
        ));
    }

    #[test]
    fn order_spec_handles_blank_input() {
        let spec = build_order_spec("", "");
        assert!(spec.columns.is_empty());
        assert!(spec.version_sort.is_none());
    }

    #[test]
    fn contains_insensitive_lowers_both_sides() {
        let sql = Query::select()
            .column(customer_quotation::Column::Id)
            .from(customer_quotation::Entity)
            .and_where(contains_insensitive(
                customer_quotation::Column::CustomerName,
                "ACME",
            ))
            .to_owned()
            .to_string(SqliteQueryBuilder);

        assert!(sql.contains("LOWER"));
        assert!(sql.contains("%acme%"));
    }

    #[test]
    fn non_blank_trims_and_filters() {
        assert_eq!(non_blank(&Some("  Acme ".to_string())), Some("Acme"));
        assert_eq!(non_blank(&Some("   ".to_string())), None);
        assert_eq!(non_blank(&None), None);
    }

    #[test]
    fn pagination_meta_computes_page_count() {
        let meta = PaginationMeta::new(2, 10, 25);
        assert_eq!(meta.total_pages, 3);
        assert!(meta.has_next);
        assert!(meta.has_prev);

        let last = PaginationMeta::new(3, 10, 25);
        assert!(!last.has_next);

        let first = PaginationMeta::new(1, 10, 25);
        assert!(!first.has_prev);
        assert!(first.has_next);
    }

    #[test]
    fn pagination_meta_handles_empty_results() {
        let meta = PaginationMeta::new(1, 20, 0);
        assert_eq!(meta.total_pages, 0);
        assert!(!meta.has_next);
        assert!(!meta.has_prev);
    }
}
