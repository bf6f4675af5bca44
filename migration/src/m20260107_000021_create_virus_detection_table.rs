use sea_orm_migration::{prelude::*, schema::*};

use crate::common;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(VirusDetection::Table)
                    .if_not_exists()
                    .col(common::pk_uuid_gen(VirusDetection::Id))
                    .col(common::created_at(VirusDetection::CreatedAt))
                    .col(common::updated_at(VirusDetection::UpdatedAt))
                    .col(common::is_active(VirusDetection::IsActive))
                    .col(
                        timestamp_with_time_zone(VirusDetection::DetectedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(text(VirusDetection::Detector))
                    .col(text_null(VirusDetection::DetectorVersion))
                    .col(text(VirusDetection::Checksum))
                    .col(boolean(VirusDetection::IsUnsafe))
                    .col(text_null(VirusDetection::Description))
                    .to_owned(),
            )
            .await?;

        common::create_refresh_updated_at_trigger(manager, "virus_detection").await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        common::drop_refresh_updated_at_trigger(manager, "virus_detection").await?;

        manager
            .drop_table(Table::drop().table(VirusDetection::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum VirusDetection {
    Table,
    Id,
    CreatedAt,
    UpdatedAt,
    IsActive,
    DetectedAt,
    Detector,
    DetectorVersion,
    Checksum,
    IsUnsafe,
    Description,
}
