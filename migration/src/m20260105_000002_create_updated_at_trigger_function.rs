use sea_orm_migration::prelude::*;

const CREATE_FUNCTION_SQL: &str = r#"
CREATE OR REPLACE FUNCTION refresh_updated_at()
RETURNS TRIGGER AS
$$
BEGIN
  NEW.updated_at = now();
  RETURN NEW;
END
$$
LANGUAGE plpgsql;
"#;

const DROP_FUNCTION_SQL: &str = "DROP FUNCTION IF EXISTS refresh_updated_at";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(CREATE_FUNCTION_SQL)
            .await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(DROP_FUNCTION_SQL)
            .await?;
        Ok(())
    }
}
