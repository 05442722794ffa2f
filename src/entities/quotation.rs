use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single version of a quotation. All versions of one lineage share a
/// `quotation_number`; `version_id` distinguishes them ("V0" is the
/// draft a copy starts from).
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "quotations")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub quotation_number: String,
    pub customer_name: String,
    pub product_name: Option<String>,

    pub version_id: String,
    pub version_name: Option<String>,
    pub active_version_id: Option<String>,

    // Adoption mirror, maintained when the lineage gets adopted.
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
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::quotation_detail::Entity")]
    QuotationDetail,
}

impl Related<super::quotation_detail::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::QuotationDetail.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
