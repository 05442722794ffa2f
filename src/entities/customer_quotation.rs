use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One row per quotation number: the customer-facing summary of a
/// quotation lineage. Version rows live in `quotations` and share the
/// same `quotation_number`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "customer_quotations")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    #[sea_orm(unique)]
    pub quotation_number: String,

    pub customer_name: String,
    pub product_name: Option<String>,

    // Adoption state: which version (if any) the customer accepted.
    pub is_adopted: bool,
    pub adopted_version_id: Option<String>,
    pub adopted_version_name: Option<String>,
    pub adopted_at: Option<DateTime<Utc>>,
    pub adopted_by: Option<String>,
    pub adoption_reason: Option<String>,

    /// Number of versions in the lineage. NULL until the copy workflow
    /// first touches the counter; synced rows start without it.
    pub total_versions: Option<i32>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
