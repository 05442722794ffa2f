use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Line item of a quotation version. `idx` is the 1-based position in
/// the version's part list.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "quotation_details")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub quotation_id: Uuid,
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

    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::quotation::Entity",
        from = "Column::QuotationId",
        to = "super::quotation::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Quotation,
}

impl Related<super::quotation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Quotation.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
