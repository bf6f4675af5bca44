//! Column builders and trigger helpers shared by every table migration.
//!
//! All leaf tables carry the same base columns: a UUID primary key generated by
//! `uuid_generate_v4()`, `created_at` / `updated_at` timestamps defaulted to
//! `now()`, and an `is_active` soft-delete flag defaulted to `true`.
//! `updated_at` is kept fresh outside the ORM by a per-table trigger invoking
//! the `refresh_updated_at()` function installed by an early migration; table
//! migrations attach and detach that trigger with the helpers below.

use sea_orm_migration::{prelude::*, schema::*};

/// UUID primary key column with the database-side `uuid_generate_v4()` default.
pub fn pk_uuid_gen<T: IntoIden>(col: T) -> ColumnDef {
    pk_uuid(col)
        .default(Expr::cust("uuid_generate_v4()"))
        .take()
}

/// `created_at` timestamptz column defaulted to `now()`.
pub fn created_at<T: IntoIden>(col: T) -> ColumnDef {
    timestamp_with_time_zone(col)
        .default(Expr::current_timestamp())
        .take()
}

/// `updated_at` timestamptz column defaulted to `now()`; the per-table
/// `refresh_updated_at` trigger refreshes it on every update.
pub fn updated_at<T: IntoIden>(col: T) -> ColumnDef {
    timestamp_with_time_zone(col)
        .default(Expr::current_timestamp())
        .take()
}

/// `is_active` soft-delete flag defaulted to `true`.
pub fn is_active<T: IntoIden>(col: T) -> ColumnDef {
    boolean(col).default(true).take()
}

/// Attaches the `refresh_updated_at()` trigger to a table.
pub async fn create_refresh_updated_at_trigger(
    manager: &SchemaManager<'_>,
    table_name: &str,
) -> Result<(), DbErr> {
    manager
        .get_connection()
        .execute_unprepared(&format!(
            "CREATE TRIGGER {table_name}_refresh_updated_at_trigger \
             BEFORE UPDATE ON public.\"{table_name}\" \
             FOR EACH ROW EXECUTE PROCEDURE refresh_updated_at()"
        ))
        .await?;
    Ok(())
}

/// Drops a table's `refresh_updated_at()` trigger.
pub async fn drop_refresh_updated_at_trigger(
    manager: &SchemaManager<'_>,
    table_name: &str,
) -> Result<(), DbErr> {
    manager
        .get_connection()
        .execute_unprepared(&format!(
            "DROP TRIGGER IF EXISTS {table_name}_refresh_updated_at_trigger \
             ON public.\"{table_name}\""
        ))
        .await?;
    Ok(())
}

/// Attaches the `refresh_depth_and_lineage()` trigger to a self-referential
/// table. The table must have `parent_id`, `depth`, and `lineage` columns.
pub async fn create_refresh_depth_and_lineage_trigger(
    manager: &SchemaManager<'_>,
    table_name: &str,
) -> Result<(), DbErr> {
    manager
        .get_connection()
        .execute_unprepared(&format!(
            "CREATE TRIGGER {table_name}_refresh_depth_and_lineage_trigger \
             BEFORE INSERT OR UPDATE ON public.\"{table_name}\" \
             FOR EACH ROW EXECUTE PROCEDURE refresh_depth_and_lineage()"
        ))
        .await?;
    Ok(())
}

/// Drops a table's `refresh_depth_and_lineage()` trigger.
pub async fn drop_refresh_depth_and_lineage_trigger(
    manager: &SchemaManager<'_>,
    table_name: &str,
) -> Result<(), DbErr> {
    manager
        .get_connection()
        .execute_unprepared(&format!(
            "DROP TRIGGER IF EXISTS {table_name}_refresh_depth_and_lineage_trigger \
             ON public.\"{table_name}\""
        ))
        .await?;
    Ok(())
}
