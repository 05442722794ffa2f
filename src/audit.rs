use crate::db::DbPool;
use crate::entities::error_log;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, Set};
use std::sync::Arc;
use tracing::warn;
use uuid::Uuid;

/// Category labels for audit entries. One per background failure site
/// so operators can filter the error_logs table.
pub mod categories {
    pub const QUOTATION_SYNC: &str = "Quotation Sync Error";
    pub const QUOTATION_COPY: &str = "Quotation Copy Error";
    pub const QUOTATION_LIST: &str = "Quotation List Error";
    pub const QUOTATION_VERSIONS: &str = "Quotation Versions Error";
    pub const QUOTATION_DETAILS: &str = "Quotation Details Error";
    pub const QUOTATION_READ: &str = "Quotation Read Error";
}

/// Best-effort persistent log for failures inside workflows that must
/// keep going (sync, copy bookkeeping, read paths).
#[derive(Debug, Clone)]
pub struct AuditLog {
    db: Arc<DbPool>,
}

impl AuditLog {
    pub fn new(db: Arc<DbPool>) -> Self {
        Self { db }
    }

    /// Writes one entry to the error_logs table. A failure to write the
    /// entry itself is reported to tracing and then dropped; the audit
    /// trail never takes a request down with it.
    pub async fn record(&self, category: &str, message: impl Into<String>) {
        let entry = error_log::ActiveModel {
            id: Set(Uuid::new_v4()),
            category: Set(category.to_string()),
            message: Set(message.into()),
            created_at: Set(Utc::now()),
        };

        if let Err(err) = entry.insert(&*self.db).await {
            warn!(error = %err, category, "failed to persist audit log entry");
        }
    }
}
