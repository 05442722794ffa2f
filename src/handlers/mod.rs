pub mod quotations;

use std::sync::Arc;

use crate::audit::AuditLog;
use crate::db::DbPool;
use crate::events::EventSender;
use crate::services::quotation_queries::QuotationQueryService;
use crate::services::quotations::QuotationService;

// Re-export AppState so handler modules can import it as crate::handlers::AppState
pub use crate::AppState;

/// Services layer that encapsulates business logic used by HTTP handlers
#[derive(Clone)]
pub struct AppServices {
    pub quotations: Arc<QuotationService>,
    pub quotation_queries: Arc<QuotationQueryService>,
}

impl AppServices {
    /// Build the service container; both services share one audit sink.
    pub fn new(db_pool: Arc<DbPool>, event_sender: Option<Arc<EventSender>>) -> Self {
        let audit = AuditLog::new(db_pool.clone());
        let quotations = Arc::new(QuotationService::new(
            db_pool.clone(),
            audit.clone(),
            event_sender,
        ));
        let quotation_queries = Arc::new(QuotationQueryService::new(db_pool, audit));

        Self {
            quotations,
            quotation_queries,
        }
    }
}
