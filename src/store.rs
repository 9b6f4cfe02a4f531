//! Persistence of saved scenarios.
//!
//! A scenario is written once, together with the projection computed from its
//! inputs, and afterwards only read or deleted.

use chrono::{DateTime, Utc};
use common::{CreateScenarioRequest, ProjectionResult, ScenarioDto, ScenarioParameters, ScenarioSummary};
use compute::ComputeError;
use model::entities::{prelude::Scenario, scenario};
use sea_orm::{
    ActiveModelTrait, Database, DatabaseConnection, DbErr, EntityTrait, FromQueryResult,
    QueryOrder, QuerySelect, Set,
};
use thiserror::Error;
use tracing::{debug, info, instrument, trace};
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Scenario not found: {0}")]
    NotFound(Uuid),
    #[error("Invalid scenario id: {0}")]
    InvalidId(String),
    #[error("Value out of storable range: {0}")]
    OutOfRange(&'static str),
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
    #[error(transparent)]
    Compute(#[from] ComputeError),
    #[error("Corrupt projection snapshot: {0}")]
    Snapshot(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StoreError>;

/// Listing projection of a scenario row.
#[derive(Debug, FromQueryResult)]
struct SummaryRow {
    id: Uuid,
    scenario_name: String,
    created_at: DateTime<Utc>,
}

impl From<SummaryRow> for ScenarioSummary {
    fn from(row: SummaryRow) -> Self {
        Self {
            id: row.id,
            scenario_name: row.scenario_name,
            created_at: row.created_at,
        }
    }
}

fn to_dto(model: scenario::Model) -> Result<ScenarioDto> {
    let time_horizon_months = u32::try_from(model.time_horizon_months)
        .map_err(|_| StoreError::OutOfRange("time_horizon_months"))?;
    let simulation_results: ProjectionResult = serde_json::from_value(model.simulation_results)?;

    Ok(ScenarioDto {
        id: model.id,
        scenario_name: model.scenario_name,
        parameters: ScenarioParameters {
            monthly_invoice_volume: model.monthly_invoice_volume,
            num_ap_staff: model.num_ap_staff,
            avg_hours_per_invoice: model.avg_hours_per_invoice,
            hourly_wage: model.hourly_wage,
            error_rate_manual: model.error_rate_manual,
            error_cost: model.error_cost,
            time_horizon_months,
            one_time_implementation_cost: model.one_time_implementation_cost,
        },
        simulation_results,
        created_at: model.created_at,
    })
}

/// Handle to the scenario table. Cloning shares the underlying pool.
#[derive(Clone, Debug)]
pub struct ScenarioStore {
    db: DatabaseConnection,
}

impl ScenarioStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn connect(database_url: &str) -> Result<Self> {
        info!("Connecting to database: {}", database_url);
        let db = Database::connect(database_url).await?;
        Ok(Self::new(db))
    }

    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }

    pub async fn ping(&self) -> Result<()> {
        self.db.ping().await?;
        Ok(())
    }

    /// Release the pool. Further calls on clones of this store fail.
    pub async fn close(self) -> Result<()> {
        info!("Closing database connection");
        self.db.close().await?;
        Ok(())
    }

    /// Parse a client supplied identifier.
    pub fn parse_id(raw: &str) -> Result<Uuid> {
        Uuid::parse_str(raw.trim()).map_err(|_| StoreError::InvalidId(raw.to_string()))
    }

    /// Compute the projection for `request` and persist it with the inputs.
    #[instrument(skip(self, request), fields(scenario_name = %request.scenario_name))]
    pub async fn create(&self, request: CreateScenarioRequest) -> Result<ScenarioDto> {
        trace!("Entering create");

        let projection = compute::project(&request.parameters)?;
        let snapshot = serde_json::to_value(projection.result)?;
        let params = request.parameters;
        let time_horizon_months = i32::try_from(params.time_horizon_months)
            .map_err(|_| StoreError::OutOfRange("time_horizon_months"))?;

        let row = scenario::ActiveModel {
            id: Set(Uuid::new_v4()),
            scenario_name: Set(request.scenario_name),
            monthly_invoice_volume: Set(params.monthly_invoice_volume),
            num_ap_staff: Set(params.num_ap_staff),
            avg_hours_per_invoice: Set(params.avg_hours_per_invoice),
            hourly_wage: Set(params.hourly_wage),
            error_rate_manual: Set(params.error_rate_manual),
            error_cost: Set(params.error_cost),
            time_horizon_months: Set(time_horizon_months),
            one_time_implementation_cost: Set(params.one_time_implementation_cost),
            simulation_results: Set(snapshot),
            created_at: Set(Utc::now()),
        };

        let inserted = row.insert(&self.db).await?;
        info!("Scenario saved: id={}", inserted.id);

        // Built from the stored row so a later fetch returns the same body.
        to_dto(inserted)
    }

    /// Summaries of every saved scenario, newest first.
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<ScenarioSummary>> {
        let rows = Scenario::find()
            .select_only()
            .column(scenario::Column::Id)
            .column(scenario::Column::ScenarioName)
            .column(scenario::Column::CreatedAt)
            .order_by_desc(scenario::Column::CreatedAt)
            .into_model::<SummaryRow>()
            .all(&self.db)
            .await?;

        debug!("Listed {} scenarios", rows.len());
        Ok(rows.into_iter().map(ScenarioSummary::from).collect())
    }

    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: Uuid) -> Result<ScenarioDto> {
        let model = Scenario::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(StoreError::NotFound(id))?;

        to_dto(model)
    }

    /// Remove a scenario. Returns whether a row existed; deleting an unknown id
    /// is not an error.
    #[instrument(skip(self))]
    pub async fn delete_by_id(&self, id: Uuid) -> Result<bool> {
        let result = Scenario::delete_by_id(id).exec(&self.db).await?;
        let existed = result.rows_affected > 0;
        debug!("Delete of {} affected {} rows", id, result.rows_affected);
        Ok(existed)
    }
}
