use std::sync::Arc;

use axum::{
    body::Body,
    http::{Method, Request},
    Router,
};
use chrono::{NaiveDate, Utc};
use rust_decimal_macros::dec;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectOptions, Database, EntityTrait, QueryFilter, Set,
};
use serde_json::Value;
use tokio::sync::mpsc;
use tower::ServiceExt;

use quotedesk_api::{
    config::AppConfig,
    db::{self, DbPool},
    entities::customer_quotation,
    events::{self, EventSender},
    handlers::AppServices,
    services::quotations::{CreateQuotationRequest, QuotationDetailInput},
    AppState,
};

/// Helper harness for spinning up an application state backed by an
/// in-memory SQLite database. Each harness owns its own database, so
/// tests can run in parallel.
pub struct TestApp {
    router: Router,
    pub state: Arc<AppState>,
    _event_task: tokio::task::JoinHandle<()>,
}

impl TestApp {
    /// Construct a new test application with fresh database state.
    pub async fn new() -> Self {
        // A single pooled connection keeps every query on the same
        // in-memory database.
        let mut options = ConnectOptions::new("sqlite::memory:".to_string());
        options
            .max_connections(1)
            .min_connections(1)
            .sqlx_logging(false);
        let pool = Database::connect(options)
            .await
            .expect("failed to create test database");

        db::run_migrations(&pool)
            .await
            .expect("failed to run migrations in tests");

        let mut cfg = AppConfig::new(
            "sqlite::memory:".to_string(),
            "127.0.0.1".to_string(),
            18_080,
            "test".to_string(),
        );
        cfg.db_max_connections = 1;
        cfg.db_min_connections = 1;

        let db_arc = Arc::new(pool);
        let (event_tx, event_rx) = mpsc::channel(256);
        let event_sender = EventSender::new(event_tx);
        let event_task = tokio::spawn(events::process_events(event_rx));

        let services = AppServices::new(db_arc.clone(), Some(Arc::new(event_sender.clone())));

        let state = Arc::new(AppState {
            db: db_arc,
            config: cfg,
            event_sender,
            services,
        });

        let router = Router::new()
            .nest("/api/v1", quotedesk_api::api_v1_routes())
            .with_state(state.clone());

        Self {
            router,
            state,
            _event_task: event_task,
        }
    }

    pub fn db(&self) -> &DbPool {
        &self.state.db
    }

    /// Send a JSON request against the router.
    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> axum::response::Response {
        let mut builder = Request::builder().method(method).uri(uri);

        let body = if let Some(json) = body {
            builder = builder.header("content-type", "application/json");
            Body::from(serde_json::to_vec(&json).expect("failed to serialize json request body"))
        } else {
            Body::empty()
        };

        let request = builder.body(body).expect("failed to build request");
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("router error during test request")
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        self._event_task.abort();
    }
}

/// Read a response body as JSON.
#[allow(dead_code)]
pub async fn read_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    serde_json::from_slice(&bytes).expect("response body should be json")
}

#[allow(dead_code)]
pub fn sample_detail(part_name: &str) -> QuotationDetailInput {
    QuotationDetailInput {
        part_name: part_name.to_string(),
        material: Some("ABS".to_string()),
        process_type: Some("injection".to_string()),
        unit_weight: dec!(1.25),
        cycle_time: dec!(30),
        daily_output: dec!(2400),
        mold_cost: dec!(15000),
        raw_material_price: dec!(1.85),
        injection_price: dec!(0.42),
        processing_fee: dec!(3.15),
        cost_total: dec!(9000),
        quotation_total: dec!(11800),
        profit: dec!(2800),
    }
}

#[allow(dead_code)]
pub fn create_request(number: &str, customer: &str, version: &str) -> CreateQuotationRequest {
    CreateQuotationRequest {
        quotation_number: Some(number.to_string()),
        customer_name: customer.to_string(),
        product_name: Some("Dashboard housing".to_string()),
        version_id: version.to_string(),
        version_name: Some(format!("Version {}", version)),
        active_version_id: Some(version.to_string()),
        quotation_date: NaiveDate::from_ymd_opt(2025, 3, 14),
        validity_period: Some(30),
        include_tax: true,
        tax_rate: dec!(0.13),
        profit_rate: dec!(0.22),
        total_mold_cost: dec!(15000),
        total_cost: dec!(9000),
        total_quotation: dec!(11800),
        total_profit: dec!(2800),
        details: vec![sample_detail("Housing"), sample_detail("Bracket")],
    }
}

/// Mark a customer quotation summary as adopted, the way the version
/// management flow would.
#[allow(dead_code)]
pub async fn adopt_summary(db: &DbPool, quotation_number: &str, version_id: &str) {
    let summary = customer_quotation::Entity::find()
        .filter(customer_quotation::Column::QuotationNumber.eq(quotation_number))
        .one(db)
        .await
        .expect("failed to query summary")
        .expect("summary should exist before adoption");

    let mut active: customer_quotation::ActiveModel = summary.into();
    active.is_adopted = Set(true);
    active.adopted_version_id = Set(Some(version_id.to_string()));
    active.adopted_version_name = Set(Some(format!("Version {}", version_id)));
    active.adopted_at = Set(Some(Utc::now()));
    active.adopted_by = Set(Some("tester".to_string()));
    active.adoption_reason = Set(Some("Meets target price".to_string()));
    active
        .update(db)
        .await
        .expect("failed to mark summary adopted");
}
