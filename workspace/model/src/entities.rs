//! Root of the SeaORM entity modules.

pub mod scenario;

pub mod prelude {
    //! A prelude module for easy importing of all entities.
    pub use super::scenario::Entity as Scenario;
}

#[cfg(test)]
mod test {
    use chrono::Utc;
    use migration::{Migrator, MigratorTrait};
    use rust_decimal::Decimal;
    use sea_orm::{
        ActiveModelTrait, Database, DatabaseConnection, DbErr, EntityTrait, QueryOrder, Set,
    };
    use uuid::Uuid;

    use super::*;
    use prelude::*;

    async fn setup_db() -> Result<DatabaseConnection, DbErr> {
        let db = Database::connect("sqlite::memory:").await?;
        Migrator::up(&db, None).await.expect("Migrations failed.");
        Ok(db)
    }

    fn new_scenario(name: &str) -> scenario::ActiveModel {
        scenario::ActiveModel {
            id: Set(Uuid::new_v4()),
            scenario_name: Set(name.to_string()),
            monthly_invoice_volume: Set(Decimal::new(1000, 0)),
            num_ap_staff: Set(Decimal::new(2, 0)),
            avg_hours_per_invoice: Set(Decimal::new(1, 1)),
            hourly_wage: Set(Decimal::new(20, 0)),
            error_rate_manual: Set(Decimal::new(5, 0)),
            error_cost: Set(Decimal::new(100, 0)),
            time_horizon_months: Set(12),
            one_time_implementation_cost: Set(Decimal::new(5000, 0)),
            simulation_results: Set(serde_json::json!({ "monthlySavings": 6700.0 })),
            created_at: Set(Utc::now()),
        }
    }

    #[tokio::test]
    async fn test_scenario_round_trip() -> Result<(), DbErr> {
        let db = setup_db().await?;

        let inserted = new_scenario("Baseline").insert(&db).await?;
        let fetched = Scenario::find_by_id(inserted.id)
            .one(&db)
            .await?
            .expect("scenario should exist");

        assert_eq!(fetched.scenario_name, "Baseline");
        assert_eq!(fetched.avg_hours_per_invoice, Decimal::new(1, 1));
        assert_eq!(fetched.time_horizon_months, 12);
        assert_eq!(fetched.simulation_results["monthlySavings"], 6700.0);

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_missing_scenario_affects_nothing() -> Result<(), DbErr> {
        let db = setup_db().await?;
        new_scenario("Keep me").insert(&db).await?;

        let result = Scenario::delete_by_id(Uuid::new_v4()).exec(&db).await?;
        assert_eq!(result.rows_affected, 0);

        let remaining = Scenario::find()
            .order_by_desc(scenario::Column::CreatedAt)
            .all(&db)
            .await?;
        assert_eq!(remaining.len(), 1);

        Ok(())
    }
}
