use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
    Set, TransactionTrait,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, instrument, warn};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::{
    audit::{categories, AuditLog},
    db::DbPool,
    entities::{customer_quotation, quotation, quotation_detail},
    errors::ServiceError,
    events::{Event, EventSender},
    services::quotation_numbers::generate_quotation_number,
};

/// Version id a freshly copied quotation starts from.
pub const DRAFT_VERSION_ID: &str = "V0";

/// Whether a version write propagates to its customer quotation
/// summary. Callers that maintain the summary themselves (the copy
/// workflow) skip the propagation explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SyncMode {
    #[default]
    Propagate,
    Skip,
}

/// Request/Response types for the quotation service
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct QuotationDetailInput {
    #[validate(length(min = 1, max = 140, message = "Part name is required"))]
    pub part_name: String,
    pub material: Option<String>,
    pub process_type: Option<String>,
    #[serde(default)]
    pub unit_weight: Decimal,
    #[serde(default)]
    pub cycle_time: Decimal,
    #[serde(default)]
    pub daily_output: Decimal,
    #[serde(default)]
    pub mold_cost: Decimal,
    #[serde(default)]
    pub raw_material_price: Decimal,
    #[serde(default)]
    pub injection_price: Decimal,
    #[serde(default)]
    pub processing_fee: Decimal,
    #[serde(default)]
    pub cost_total: Decimal,
    #[serde(default)]
    pub quotation_total: Decimal,
    #[serde(default)]
    pub profit: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateQuotationRequest {
    /// Omit (or send blank) to let the server assign a generated number.
    #[validate(length(min = 1, max = 50, message = "Quotation number must be 1-50 characters"))]
    pub quotation_number: Option<String>,
    /// May be blank; a blank customer suppresses the summary sync.
    #[serde(default)]
    pub customer_name: String,
    pub product_name: Option<String>,
    #[serde(default = "default_version_id")]
    pub version_id: String,
    pub version_name: Option<String>,
    pub active_version_id: Option<String>,
    pub quotation_date: Option<NaiveDate>,
    pub validity_period: Option<i32>,
    #[serde(default)]
    pub include_tax: bool,
    #[serde(default)]
    pub tax_rate: Decimal,
    #[serde(default)]
    pub profit_rate: Decimal,
    #[serde(default)]
    pub total_mold_cost: Decimal,
    #[serde(default)]
    pub total_cost: Decimal,
    #[serde(default)]
    pub total_quotation: Decimal,
    #[serde(default)]
    pub total_profit: Decimal,
    #[serde(default)]
    #[validate]
    pub details: Vec<QuotationDetailInput>,
}

fn default_version_id() -> String {
    DRAFT_VERSION_ID.to_string()
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateQuotationRequest {
    pub customer_name: Option<String>,
    pub product_name: Option<String>,
    #[validate(length(min = 1, max = 50, message = "Version id must be 1-50 characters"))]
    pub version_id: Option<String>,
    pub version_name: Option<String>,
    pub active_version_id: Option<String>,
    pub quotation_date: Option<NaiveDate>,
    pub validity_period: Option<i32>,
    pub include_tax: Option<bool>,
    pub tax_rate: Option<Decimal>,
    pub profit_rate: Option<Decimal>,
    pub total_mold_cost: Option<Decimal>,
    pub total_cost: Option<Decimal>,
    pub total_quotation: Option<Decimal>,
    pub total_profit: Option<Decimal>,
    /// When present, replaces the whole detail list.
    #[validate]
    pub details: Option<Vec<QuotationDetailInput>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QuotationDetailResponse {
    pub id: Uuid,
    pub idx: i32,
    pub part_name: String,
    pub material: Option<String>,
    pub process_type: Option<String>,
    pub unit_weight: Decimal,
    pub cycle_time: Decimal,
    pub daily_output: Decimal,
    pub mold_cost: Decimal,
    pub raw_material_price: Decimal,
    pub injection_price: Decimal,
    pub processing_fee: Decimal,
    pub cost_total: Decimal,
    pub quotation_total: Decimal,
    pub profit: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QuotationResponse {
    pub id: Uuid,
    pub quotation_number: String,
    pub customer_name: String,
    pub product_name: Option<String>,
    pub version_id: String,
    pub version_name: Option<String>,
    pub active_version_id: Option<String>,
    pub is_adopted: bool,
    pub adopted_version_id: Option<String>,
    pub adopted_version_name: Option<String>,
    pub adopted_at: Option<DateTime<Utc>>,
    pub adopted_by: Option<String>,
    pub adoption_reason: Option<String>,
    pub quotation_date: Option<NaiveDate>,
    pub validity_period: Option<i32>,
    pub include_tax: bool,
    pub tax_rate: Decimal,
    pub profit_rate: Decimal,
    pub total_mold_cost: Decimal,
    pub total_cost: Decimal,
    pub total_quotation: Decimal,
    pub total_profit: Decimal,
    pub item_count: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub details: Vec<QuotationDetailResponse>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CopyQuotationResponse {
    pub id: Uuid,
    pub quotation_number: String,
}

/// Service for quotation versions and the copy workflow.
#[derive(Clone)]
pub struct QuotationService {
    db_pool: Arc<DbPool>,
    audit: AuditLog,
    event_sender: Option<Arc<EventSender>>,
}

impl QuotationService {
    /// Creates a new quotation service instance
    pub fn new(db_pool: Arc<DbPool>, audit: AuditLog, event_sender: Option<Arc<EventSender>>) -> Self {
        Self {
            db_pool,
            audit,
            event_sender,
        }
    }

    /// Persists a new quotation version together with its detail rows.
    #[instrument(skip(self, request), fields(quotation_number = ?request.quotation_number))]
    pub async fn create_quotation(
        &self,
        request: CreateQuotationRequest,
        sync: SyncMode,
    ) -> Result<QuotationResponse, ServiceError> {
        request
            .validate()
            .map_err(|e| ServiceError::ValidationError(e.to_string()))?;

        let quotation_number = match request.quotation_number.as_deref().map(str::trim) {
            Some(number) if !number.is_empty() => number.to_string(),
            _ => generate_quotation_number(),
        };

        let db = &*self.db_pool;
        let now = Utc::now();
        let quotation_id = Uuid::new_v4();

        let txn = db.begin().await.map_err(|e| {
            error!(error = %e, "Failed to start transaction for quotation creation");
            ServiceError::DatabaseError(e)
        })?;

        let quotation = quotation::ActiveModel {
            id: Set(quotation_id),
            quotation_number: Set(quotation_number),
            customer_name: Set(request.customer_name.clone()),
            product_name: Set(request.product_name.clone()),
            version_id: Set(request.version_id.clone()),
            version_name: Set(request.version_name.clone()),
            active_version_id: Set(request.active_version_id.clone()),
            is_adopted: Set(false),
            adopted_version_id: Set(None),
            adopted_version_name: Set(None),
            adopted_at: Set(None),
            adopted_by: Set(None),
            adoption_reason: Set(None),
            quotation_date: Set(request.quotation_date),
            validity_period: Set(request.validity_period),
            include_tax: Set(request.include_tax),
            tax_rate: Set(request.tax_rate),
            profit_rate: Set(request.profit_rate),
            total_mold_cost: Set(request.total_mold_cost),
            total_cost: Set(request.total_cost),
            total_quotation: Set(request.total_quotation),
            total_profit: Set(request.total_profit),
            item_count: Set(request.details.len() as i32),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&txn)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to insert quotation");
            ServiceError::DatabaseError(e)
        })?;

        let details = insert_details(&txn, quotation_id, &request.details, now)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to insert quotation details");
                ServiceError::DatabaseError(e)
            })?;

        txn.commit().await.map_err(|e| {
            error!(error = %e, "Failed to commit quotation creation");
            ServiceError::DatabaseError(e)
        })?;

        info!(
            quotation_id = %quotation.id,
            quotation_number = %quotation.quotation_number,
            "quotation created"
        );

        if sync == SyncMode::Propagate {
            self.sync_to_customer_quotation(&quotation).await;
        }

        if let Some(event_sender) = &self.event_sender {
            if let Err(e) = event_sender.send(Event::QuotationCreated(quotation.id)).await {
                warn!(error = %e, "Failed to send quotation created event");
            }
        }

        Ok(quotation_response(quotation, &details))
    }

    /// Applies a partial update to a quotation version; replaces the
    /// detail list when the request carries one.
    #[instrument(skip(self, request), fields(quotation_id = %id))]
    pub async fn update_quotation(
        &self,
        id: Uuid,
        request: UpdateQuotationRequest,
        sync: SyncMode,
    ) -> Result<QuotationResponse, ServiceError> {
        request
            .validate()
            .map_err(|e| ServiceError::ValidationError(e.to_string()))?;

        let db = &*self.db_pool;
        let existing = quotation::Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Quotation {} not found", id)))?;

        let now = Utc::now();
        let txn = db.begin().await.map_err(|e| {
            error!(error = %e, "Failed to start transaction for quotation update");
            ServiceError::DatabaseError(e)
        })?;

        let mut active: quotation::ActiveModel = existing.into();
        if let Some(customer_name) = request.customer_name.clone() {
            active.customer_name = Set(customer_name);
        }
        if let Some(product_name) = request.product_name.clone() {
            active.product_name = Set(Some(product_name));
        }
        if let Some(version_id) = request.version_id.clone() {
            active.version_id = Set(version_id);
        }
        if let Some(version_name) = request.version_name.clone() {
            active.version_name = Set(Some(version_name));
        }
        if let Some(active_version_id) = request.active_version_id.clone() {
            active.active_version_id = Set(Some(active_version_id));
        }
        if let Some(quotation_date) = request.quotation_date {
            active.quotation_date = Set(Some(quotation_date));
        }
        if let Some(validity_period) = request.validity_period {
            active.validity_period = Set(Some(validity_period));
        }
        if let Some(include_tax) = request.include_tax {
            active.include_tax = Set(include_tax);
        }
        if let Some(tax_rate) = request.tax_rate {
            active.tax_rate = Set(tax_rate);
        }
        if let Some(profit_rate) = request.profit_rate {
            active.profit_rate = Set(profit_rate);
        }
        if let Some(total_mold_cost) = request.total_mold_cost {
            active.total_mold_cost = Set(total_mold_cost);
        }
        if let Some(total_cost) = request.total_cost {
            active.total_cost = Set(total_cost);
        }
        if let Some(total_quotation) = request.total_quotation {
            active.total_quotation = Set(total_quotation);
        }
        if let Some(total_profit) = request.total_profit {
            active.total_profit = Set(total_profit);
        }
        if let Some(details) = &request.details {
            active.item_count = Set(details.len() as i32);
        }
        active.updated_at = Set(now);

        let quotation = active.update(&txn).await.map_err(|e| {
            error!(error = %e, "Failed to update quotation");
            ServiceError::DatabaseError(e)
        })?;

        let mut replaced_details = None;
        if let Some(inputs) = &request.details {
            quotation_detail::Entity::delete_many()
                .filter(quotation_detail::Column::QuotationId.eq(id))
                .exec(&txn)
                .await
                .map_err(|e| {
                    error!(error = %e, "Failed to clear quotation details");
                    ServiceError::DatabaseError(e)
                })?;

            let models = insert_details(&txn, id, inputs, now).await.map_err(|e| {
                error!(error = %e, "Failed to insert quotation details");
                ServiceError::DatabaseError(e)
            })?;
            replaced_details = Some(models);
        }

        txn.commit().await.map_err(|e| {
            error!(error = %e, "Failed to commit quotation update");
            ServiceError::DatabaseError(e)
        })?;

        let details = match replaced_details {
            Some(models) => models,
            None => self.load_details_or_empty(id).await,
        };

        if sync == SyncMode::Propagate {
            self.sync_to_customer_quotation(&quotation).await;
        }

        if let Some(event_sender) = &self.event_sender {
            if let Err(e) = event_sender.send(Event::QuotationUpdated(quotation.id)).await {
                warn!(error = %e, "Failed to send quotation updated event");
            }
        }

        Ok(quotation_response(quotation, &details))
    }

    /// Keeps the customer quotation summary in step with a version.
    ///
    /// Creates the summary when the number has none yet; otherwise only
    /// refreshes the product description. Runs best-effort: a failure
    /// lands in the audit log and the caller's write stands.
    pub async fn sync_to_customer_quotation(&self, quotation: &quotation::Model) {
        if quotation.quotation_number.trim().is_empty() || quotation.customer_name.trim().is_empty()
        {
            debug!(
                quotation_id = %quotation.id,
                "quotation lacks number or customer; skipping customer quotation sync"
            );
            return;
        }

        if let Err(err) = self.upsert_customer_quotation(quotation).await {
            warn!(
                error = %err,
                quotation_number = %quotation.quotation_number,
                "customer quotation sync failed"
            );
            self.audit
                .record(
                    categories::QUOTATION_SYNC,
                    format!(
                        "Failed to sync quotation {} to its customer quotation: {}",
                        quotation.quotation_number, err
                    ),
                )
                .await;
        }
    }

    async fn upsert_customer_quotation(
        &self,
        quotation: &quotation::Model,
    ) -> Result<(), ServiceError> {
        let db = &*self.db_pool;
        let existing = customer_quotation::Entity::find()
            .filter(
                customer_quotation::Column::QuotationNumber
                    .eq(quotation.quotation_number.as_str()),
            )
            .one(db)
            .await?;

        let now = Utc::now();
        match existing {
            Some(summary) => {
                let mut summary: customer_quotation::ActiveModel = summary.into();
                summary.product_name = Set(quotation.product_name.clone());
                summary.updated_at = Set(now);
                summary.update(db).await?;
            }
            None => {
                customer_quotation::ActiveModel {
                    id: Set(Uuid::new_v4()),
                    quotation_number: Set(quotation.quotation_number.clone()),
                    customer_name: Set(quotation.customer_name.clone()),
                    product_name: Set(quotation.product_name.clone()),
                    is_adopted: Set(false),
                    adopted_version_id: Set(None),
                    adopted_version_name: Set(None),
                    adopted_at: Set(None),
                    adopted_by: Set(None),
                    adoption_reason: Set(None),
                    total_versions: Set(None),
                    created_at: Set(now),
                    updated_at: Set(now),
                }
                .insert(db)
                .await?;
            }
        }

        if let Some(event_sender) = &self.event_sender {
            if let Err(e) = event_sender
                .send(Event::CustomerQuotationSynced {
                    quotation_number: quotation.quotation_number.clone(),
                })
                .await
            {
                warn!(error = %e, "Failed to send customer quotation synced event");
            }
        }

        Ok(())
    }

    /// Copies the adopted version of a quotation into a fresh draft
    /// lineage with a newly generated number.
    #[instrument(skip(self))]
    pub async fn copy_quotation(
        &self,
        quotation_number: &str,
    ) -> Result<CopyQuotationResponse, ServiceError> {
        let db = &*self.db_pool;

        // Preconditions: the lineage must exist and carry an adopted version.
        let summary = customer_quotation::Entity::find()
            .filter(customer_quotation::Column::QuotationNumber.eq(quotation_number))
            .one(db)
            .await?
            .ok_or_else(|| {
                ServiceError::NotFound(format!(
                    "No customer quotation found for quotation number {}",
                    quotation_number
                ))
            })?;

        if !summary.is_adopted {
            return Err(ServiceError::InvalidOperation(
                "Only an adopted quotation can be copied".to_string(),
            ));
        }

        let adopted_version_id = summary
            .adopted_version_id
            .clone()
            .filter(|version| !version.trim().is_empty())
            .ok_or_else(|| {
                ServiceError::InvalidOperation(
                    "Customer quotation is adopted but records no adopted version".to_string(),
                )
            })?;

        let source = quotation::Entity::find()
            .filter(quotation::Column::QuotationNumber.eq(quotation_number))
            .filter(quotation::Column::VersionId.eq(adopted_version_id.as_str()))
            .one(db)
            .await?
            .ok_or_else(|| {
                ServiceError::NotFound(format!(
                    "No quotation found for quotation number {} and version {}",
                    quotation_number, adopted_version_id
                ))
            })?;

        let source_details = load_details(db, source.id).await?;

        // The copy is a fresh draft: new number, V0, adoption cleared.
        // It goes through the normal write path with sync skipped since
        // the summary row is created explicitly below.
        let new_number = generate_quotation_number();
        let copy_request = CreateQuotationRequest {
            quotation_number: Some(new_number.clone()),
            customer_name: source.customer_name.clone(),
            product_name: source.product_name.clone(),
            version_id: DRAFT_VERSION_ID.to_string(),
            version_name: Some(DRAFT_VERSION_ID.to_string()),
            active_version_id: Some(DRAFT_VERSION_ID.to_string()),
            quotation_date: source.quotation_date,
            validity_period: source.validity_period,
            include_tax: source.include_tax,
            tax_rate: source.tax_rate,
            profit_rate: source.profit_rate,
            total_mold_cost: source.total_mold_cost,
            total_cost: source.total_cost,
            total_quotation: source.total_quotation,
            total_profit: source.total_profit,
            details: source_details.iter().map(detail_input_from_model).collect(),
        };

        let created = self.create_quotation(copy_request, SyncMode::Skip).await?;

        // Summary for the new lineage is best-effort: its failure must
        // not abort the copy.
        let now = Utc::now();
        let new_summary = customer_quotation::ActiveModel {
            id: Set(Uuid::new_v4()),
            quotation_number: Set(new_number.clone()),
            customer_name: Set(source.customer_name.clone()),
            product_name: Set(source.product_name.clone()),
            is_adopted: Set(false),
            adopted_version_id: Set(None),
            adopted_version_name: Set(None),
            adopted_at: Set(None),
            adopted_by: Set(None),
            adoption_reason: Set(None),
            total_versions: Set(Some(1)),
            created_at: Set(now),
            updated_at: Set(now),
        };
        if let Err(err) = new_summary.insert(db).await {
            warn!(
                error = %err,
                quotation_number = %new_number,
                "failed to create customer quotation for copied quotation"
            );
            self.audit
                .record(
                    categories::QUOTATION_COPY,
                    format!(
                        "Failed to create customer quotation {} for copied quotation: {}",
                        new_number, err
                    ),
                )
                .await;
        }

        // Version counter on the source lineage: a missing counter
        // counts as 1, so the first copy lands on 2.
        let prior_versions = summary.total_versions.unwrap_or(1);
        let mut original: customer_quotation::ActiveModel = summary.into();
        original.total_versions = Set(Some(prior_versions + 1));
        original.updated_at = Set(Utc::now());
        original.update(db).await?;

        info!(
            source_id = %source.id,
            new_id = %created.id,
            quotation_number = %new_number,
            "quotation copied"
        );

        if let Some(event_sender) = &self.event_sender {
            if let Err(e) = event_sender
                .send(Event::QuotationCopied {
                    source_id: source.id,
                    new_id: created.id,
                    quotation_number: new_number.clone(),
                })
                .await
            {
                warn!(error = %e, "Failed to send quotation copied event");
            }
        }

        Ok(CopyQuotationResponse {
            id: created.id,
            quotation_number: new_number,
        })
    }

    /// Fetches one quotation version with its details.
    pub async fn get_quotation(&self, id: Uuid) -> Result<QuotationResponse, ServiceError> {
        let db = &*self.db_pool;
        let quotation = match quotation::Entity::find_by_id(id).one(db).await {
            Ok(Some(model)) => model,
            Ok(None) => {
                return Err(ServiceError::NotFound(format!("Quotation {} not found", id)))
            }
            Err(err) => {
                error!(error = %err, quotation_id = %id, "failed to load quotation");
                self.audit
                    .record(
                        categories::QUOTATION_READ,
                        format!("Failed to load quotation {}: {}", id, err),
                    )
                    .await;
                return Err(ServiceError::DatabaseError(err));
            }
        };

        let details = self.load_details_or_empty(quotation.id).await;
        Ok(quotation_response(quotation, &details))
    }

    /// Fetches the most recently created version under a number.
    pub async fn get_quotation_by_number(
        &self,
        quotation_number: &str,
    ) -> Result<QuotationResponse, ServiceError> {
        let db = &*self.db_pool;
        let latest = match quotation::Entity::find()
            .filter(quotation::Column::QuotationNumber.eq(quotation_number))
            .order_by_desc(quotation::Column::CreatedAt)
            .one(db)
            .await
        {
            Ok(Some(model)) => model,
            Ok(None) => {
                return Err(ServiceError::NotFound(format!(
                    "No quotation found for quotation number {}",
                    quotation_number
                )))
            }
            Err(err) => {
                error!(
                    error = %err,
                    quotation_number = %quotation_number,
                    "failed to load quotation by number"
                );
                self.audit
                    .record(
                        categories::QUOTATION_READ,
                        format!(
                            "Failed to load quotation for number {}: {}",
                            quotation_number, err
                        ),
                    )
                    .await;
                return Err(ServiceError::DatabaseError(err));
            }
        };

        self.get_quotation(latest.id).await
    }

    /// Detail loading that degrades to an empty list. The read paths
    /// prefer serving a version without lines over failing entirely.
    pub(crate) async fn load_details_or_empty(
        &self,
        quotation_id: Uuid,
    ) -> Vec<quotation_detail::Model> {
        match load_details(&self.db_pool, quotation_id).await {
            Ok(details) => details,
            Err(err) => {
                warn!(
                    error = %err,
                    quotation_id = %quotation_id,
                    "failed to load quotation details; returning none"
                );
                self.audit
                    .record(
                        categories::QUOTATION_DETAILS,
                        format!("Failed to fetch details for quotation {}: {}", quotation_id, err),
                    )
                    .await;
                Vec::new()
            }
        }
    }
}

pub(crate) async fn load_details(
    db: &DbPool,
    quotation_id: Uuid,
) -> Result<Vec<quotation_detail::Model>, DbErr> {
    quotation_detail::Entity::find()
        .filter(quotation_detail::Column::QuotationId.eq(quotation_id))
        .order_by_asc(quotation_detail::Column::Idx)
        .all(db)
        .await
}

async fn insert_details<C: ConnectionTrait>(
    conn: &C,
    quotation_id: Uuid,
    inputs: &[QuotationDetailInput],
    now: DateTime<Utc>,
) -> Result<Vec<quotation_detail::Model>, DbErr> {
    let mut models = Vec::with_capacity(inputs.len());
    for (position, input) in inputs.iter().enumerate() {
        let detail = quotation_detail::ActiveModel {
            id: Set(Uuid::new_v4()),
            quotation_id: Set(quotation_id),
            idx: Set(position as i32 + 1),
            part_name: Set(input.part_name.clone()),
            material: Set(input.material.clone()),
            process_type: Set(input.process_type.clone()),
            unit_weight: Set(input.unit_weight),
            cycle_time: Set(input.cycle_time),
            daily_output: Set(input.daily_output),
            mold_cost: Set(input.mold_cost),
            raw_material_price: Set(input.raw_material_price),
            injection_price: Set(input.injection_price),
            processing_fee: Set(input.processing_fee),
            cost_total: Set(input.cost_total),
            quotation_total: Set(input.quotation_total),
            profit: Set(input.profit),
            created_at: Set(now),
        }
        .insert(conn)
        .await?;
        models.push(detail);
    }
    Ok(models)
}

fn detail_input_from_model(model: &quotation_detail::Model) -> QuotationDetailInput {
    QuotationDetailInput {
        part_name: model.part_name.clone(),
        material: model.material.clone(),
        process_type: model.process_type.clone(),
        unit_weight: model.unit_weight,
        cycle_time: model.cycle_time,
        daily_output: model.daily_output,
        mold_cost: model.mold_cost,
        raw_material_price: model.raw_material_price,
        injection_price: model.injection_price,
        processing_fee: model.processing_fee,
        cost_total: model.cost_total,
        quotation_total: model.quotation_total,
        profit: model.profit,
    }
}

fn detail_response(model: &quotation_detail::Model) -> QuotationDetailResponse {
    QuotationDetailResponse {
        id: model.id,
        idx: model.idx,
        part_name: model.part_name.clone(),
        material: model.material.clone(),
        process_type: model.process_type.clone(),
        unit_weight: model.unit_weight,
        cycle_time: model.cycle_time,
        daily_output: model.daily_output,
        mold_cost: model.mold_cost,
        raw_material_price: model.raw_material_price,
        injection_price: model.injection_price,
        processing_fee: model.processing_fee,
        cost_total: model.cost_total,
        quotation_total: model.quotation_total,
        profit: model.profit,
    }
}

pub(crate) fn quotation_response(
    model: quotation::Model,
    details: &[quotation_detail::Model],
) -> QuotationResponse {
    QuotationResponse {
        id: model.id,
        quotation_number: model.quotation_number,
        customer_name: model.customer_name,
        product_name: model.product_name,
        version_id: model.version_id,
        version_name: model.version_name,
        active_version_id: model.active_version_id,
        is_adopted: model.is_adopted,
        adopted_version_id: model.adopted_version_id,
        adopted_version_name: model.adopted_version_name,
        adopted_at: model.adopted_at,
        adopted_by: model.adopted_by,
        adoption_reason: model.adoption_reason,
        quotation_date: model.quotation_date,
        validity_period: model.validity_period,
        include_tax: model.include_tax,
        tax_rate: model.tax_rate,
        profit_rate: model.profit_rate,
        total_mold_cost: model.total_mold_cost,
        total_cost: model.total_cost,
        total_quotation: model.total_quotation,
        total_profit: model.total_profit,
        item_count: model.item_count,
        created_at: model.created_at,
        updated_at: model.updated_at,
        details: details.iter().map(detail_response).collect(),
    }
}
