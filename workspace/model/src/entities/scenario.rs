use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;

/// A saved ROI scenario: the inputs of a projection together with the
/// projection output captured at save time.
///
/// Rows are written once and deleted; they are never updated.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "scenarios")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// User-defined label, not unique.
    pub scenario_name: String,
    #[sea_orm(column_type = "Decimal(Some((16, 6)))")]
    pub monthly_invoice_volume: Decimal,
    /// Stored for clients; does not enter the projection.
    #[sea_orm(column_type = "Decimal(Some((16, 6)))")]
    pub num_ap_staff: Decimal,
    #[sea_orm(column_type = "Decimal(Some((16, 6)))")]
    pub avg_hours_per_invoice: Decimal,
    #[sea_orm(column_type = "Decimal(Some((16, 6)))")]
    pub hourly_wage: Decimal,
    /// Percentage points.
    #[sea_orm(column_type = "Decimal(Some((16, 6)))")]
    pub error_rate_manual: Decimal,
    #[sea_orm(column_type = "Decimal(Some((16, 6)))")]
    pub error_cost: Decimal,
    pub time_horizon_months: i32,
    #[sea_orm(column_type = "Decimal(Some((16, 6)))")]
    pub one_time_implementation_cost: Decimal,
    /// Projection snapshot, serialized `ProjectionResult`.
    #[sea_orm(column_type = "JsonBinary")]
    pub simulation_results: Json,
    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
