use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Scenarios::Table)
                    .if_not_exists()
                    .col(pk_uuid(Scenarios::Id))
                    .col(string(Scenarios::ScenarioName))
                    .col(decimal(Scenarios::MonthlyInvoiceVolume).decimal_len(16, 6))
                    .col(decimal(Scenarios::NumApStaff).decimal_len(16, 6))
                    .col(decimal(Scenarios::AvgHoursPerInvoice).decimal_len(16, 6))
                    .col(decimal(Scenarios::HourlyWage).decimal_len(16, 6))
                    .col(decimal(Scenarios::ErrorRateManual).decimal_len(16, 6))
                    .col(decimal(Scenarios::ErrorCost).decimal_len(16, 6))
                    .col(integer(Scenarios::TimeHorizonMonths))
                    .col(decimal(Scenarios::OneTimeImplementationCost).decimal_len(16, 6))
                    .col(json_binary(Scenarios::SimulationResults))
                    .col(timestamp_with_time_zone(Scenarios::CreatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Scenarios::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Scenarios {
    Table,
    Id,
    ScenarioName,
    MonthlyInvoiceVolume,
    NumApStaff,
    AvgHoursPerInvoice,
    HourlyWage,
    ErrorRateManual,
    ErrorCost,
    TimeHorizonMonths,
    OneTimeImplementationCost,
    SimulationResults,
    CreatedAt,
}
