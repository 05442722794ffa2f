mod common;

use assert_matches::assert_matches;
use common::{adopt_summary, create_request, TestApp};
use quotedesk_api::db::DbPool;
use quotedesk_api::entities::{customer_quotation, quotation};
use quotedesk_api::errors::ServiceError;
use quotedesk_api::services::quotations::SyncMode;
use regex::Regex;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, Set};

async fn summary_for(db: &DbPool, number: &str) -> Option<customer_quotation::Model> {
    customer_quotation::Entity::find()
        .filter(customer_quotation::Column::QuotationNumber.eq(number))
        .one(db)
        .await
        .expect("failed to query summary")
}

async fn version_count(db: &DbPool) -> u64 {
    quotation::Entity::find()
        .count(db)
        .await
        .expect("failed to count versions")
}

async fn seed_adopted(app: &TestApp, number: &str) {
    app.state
        .services
        .quotations
        .create_quotation(
            create_request(number, "Acme Plastics", "V1"),
            SyncMode::Propagate,
        )
        .await
        .expect("seed create should succeed");
    adopt_summary(app.db(), number, "V1").await;
}

#[tokio::test]
async fn copy_reproduces_the_adopted_version_as_a_draft() {
    let app = TestApp::new().await;
    let svc = app.state.services.quotations.clone();
    seed_adopted(&app, "250314-111111").await;

    let copied = svc
        .copy_quotation("250314-111111")
        .await
        .expect("copy should succeed");

    assert_ne!(copied.quotation_number, "250314-111111");
    let number_shape = Regex::new(r"^\d{6}-\d{6}$").expect("valid regex");
    assert!(
        number_shape.is_match(&copied.quotation_number),
        "generated number {} should match the date-seconds shape",
        copied.quotation_number
    );

    let draft = svc
        .get_quotation(copied.id)
        .await
        .expect("copied version should be readable");
    assert_eq!(draft.quotation_number, copied.quotation_number);
    assert_eq!(draft.version_id, "V0");
    assert_eq!(draft.version_name.as_deref(), Some("V0"));
    assert_eq!(draft.active_version_id.as_deref(), Some("V0"));
    assert!(!draft.is_adopted);
    assert_eq!(draft.adopted_version_id, None);
    assert_eq!(draft.adopted_at, None);
    assert_eq!(draft.adoption_reason, None);
    assert_eq!(draft.customer_name, "Acme Plastics");
    assert_eq!(draft.product_name.as_deref(), Some("Dashboard housing"));

    let source = svc
        .get_quotation_by_number("250314-111111")
        .await
        .expect("source version should be readable");
    assert_eq!(draft.total_quotation, source.total_quotation);
    assert_eq!(draft.total_cost, source.total_cost);
    assert_eq!(draft.item_count, source.item_count);

    let draft_parts: Vec<(&str, i32)> = draft
        .details
        .iter()
        .map(|d| (d.part_name.as_str(), d.idx))
        .collect();
    let source_parts: Vec<(&str, i32)> = source
        .details
        .iter()
        .map(|d| (d.part_name.as_str(), d.idx))
        .collect();
    assert_eq!(draft_parts, source_parts);
}

#[tokio::test]
async fn copy_creates_a_fresh_summary_with_counter_one() {
    let app = TestApp::new().await;
    let svc = app.state.services.quotations.clone();
    seed_adopted(&app, "250314-222222").await;

    let copied = svc
        .copy_quotation("250314-222222")
        .await
        .expect("copy should succeed");

    let new_summary = summary_for(app.db(), &copied.quotation_number)
        .await
        .expect("copy should create a summary for the new lineage");
    assert_eq!(new_summary.total_versions, Some(1));
    assert!(!new_summary.is_adopted);
    assert_eq!(new_summary.customer_name, "Acme Plastics");
    assert_eq!(new_summary.product_name.as_deref(), Some("Dashboard housing"));
}

#[tokio::test]
async fn copy_counts_an_absent_counter_as_one() {
    let app = TestApp::new().await;
    let svc = app.state.services.quotations.clone();
    seed_adopted(&app, "250314-333333").await;

    let before = summary_for(app.db(), "250314-333333")
        .await
        .expect("summary should exist");
    assert_eq!(before.total_versions, None);

    svc.copy_quotation("250314-333333")
        .await
        .expect("copy should succeed");

    let after = summary_for(app.db(), "250314-333333")
        .await
        .expect("summary should exist");
    assert_eq!(after.total_versions, Some(2));
}

#[tokio::test]
async fn copy_increments_an_existing_counter() {
    let app = TestApp::new().await;
    let svc = app.state.services.quotations.clone();
    seed_adopted(&app, "250314-444444").await;

    let summary = summary_for(app.db(), "250314-444444")
        .await
        .expect("summary should exist");
    let mut active: customer_quotation::ActiveModel = summary.into();
    active.total_versions = Set(Some(5));
    active
        .update(app.db())
        .await
        .expect("failed to seed counter");

    svc.copy_quotation("250314-444444")
        .await
        .expect("copy should succeed");

    let after = summary_for(app.db(), "250314-444444")
        .await
        .expect("summary should exist");
    assert_eq!(after.total_versions, Some(6));
}

#[tokio::test]
async fn copy_fails_when_the_lineage_is_unknown() {
    let app = TestApp::new().await;
    let svc = app.state.services.quotations.clone();

    let err = svc
        .copy_quotation("999999-999999")
        .await
        .expect_err("unknown lineage must be rejected");
    assert_matches!(err, ServiceError::NotFound(_));
    assert_eq!(version_count(app.db()).await, 0);
}

#[tokio::test]
async fn copy_fails_when_the_lineage_is_not_adopted() {
    let app = TestApp::new().await;
    let svc = app.state.services.quotations.clone();

    svc.create_quotation(
        create_request("250314-555555", "Acme Plastics", "V1"),
        SyncMode::Propagate,
    )
    .await
    .expect("seed create should succeed");

    let before = version_count(app.db()).await;
    let err = svc
        .copy_quotation("250314-555555")
        .await
        .expect_err("unadopted lineage must be rejected");
    assert_matches!(err, ServiceError::InvalidOperation(_));
    assert_eq!(version_count(app.db()).await, before);
}

#[tokio::test]
async fn copy_fails_when_the_adopted_version_id_is_missing() {
    let app = TestApp::new().await;
    let svc = app.state.services.quotations.clone();

    svc.create_quotation(
        create_request("250314-666666", "Acme Plastics", "V1"),
        SyncMode::Propagate,
    )
    .await
    .expect("seed create should succeed");

    let summary = summary_for(app.db(), "250314-666666")
        .await
        .expect("summary should exist");
    let mut active: customer_quotation::ActiveModel = summary.into();
    active.is_adopted = Set(true);
    active.adopted_version_id = Set(None);
    active
        .update(app.db())
        .await
        .expect("failed to force adoption state");

    let before = version_count(app.db()).await;
    let err = svc
        .copy_quotation("250314-666666")
        .await
        .expect_err("missing adopted version id must be rejected");
    assert_matches!(err, ServiceError::InvalidOperation(_));
    assert_eq!(version_count(app.db()).await, before);
}

#[tokio::test]
async fn copy_fails_when_the_adopted_version_row_is_gone() {
    let app = TestApp::new().await;
    let svc = app.state.services.quotations.clone();

    svc.create_quotation(
        create_request("250314-777777", "Acme Plastics", "V1"),
        SyncMode::Propagate,
    )
    .await
    .expect("seed create should succeed");
    adopt_summary(app.db(), "250314-777777", "V9").await;

    let before = version_count(app.db()).await;
    let err = svc
        .copy_quotation("250314-777777")
        .await
        .expect_err("dangling adopted version must be rejected");
    assert_matches!(err, ServiceError::NotFound(_));
    assert_eq!(version_count(app.db()).await, before);
}
