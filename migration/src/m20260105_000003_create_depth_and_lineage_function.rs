//! Installs `refresh_depth_and_lineage()`, the recursive trigger function that
//! maintains the derived hierarchy columns on self-referential tables.
//!
//! On each insert (and on any `parent_id` update) the function walks the
//! ancestor chain of the new row's parent with a recursive CTE, then assigns
//! `NEW.depth` = number of ancestors and `NEW.lineage` = the ancestor ids from
//! the root down to the parent, serialized as a JSONB array. Rows with a null
//! `parent_id` end up with depth 0 and an empty lineage.

use sea_orm_migration::prelude::*;

const CREATE_FUNCTION_SQL: &str = r#"
CREATE OR REPLACE FUNCTION refresh_depth_and_lineage()
RETURNS TRIGGER AS
$$
DECLARE
  depth integer;
  lineage uuid[];
BEGIN
    EXECUTE FORMAT('
      WITH
      RECURSIVE ancestry AS (
        SELECT
          id,
          parent_id
        FROM
          %1$I.%2$I
        WHERE
          id = $1
        UNION
          SELECT
            grandparent.id,
            grandparent.parent_id
          FROM
            %1$I.%2$I grandparent
          INNER JOIN
            ancestry
          ON
            grandparent.id = ancestry.parent_id
      )
      SELECT
        COUNT(1) AS depth,
        array_remove(array_append(array_agg(target.parent_id), $1), NULL) AS lineage
      FROM
        ancestry
      INNER JOIN
        %1$I.%2$I target
      ON
        ancestry.id = target.id;
    '::text,
      TG_TABLE_SCHEMA,
      TG_TABLE_NAME
    )
    INTO depth, lineage
    USING NEW.parent_id;
  NEW.depth = depth;
  NEW.lineage = to_jsonb(coalesce(lineage, '{}'::uuid[]));
  RETURN NEW;
END
$$
LANGUAGE plpgsql;
"#;

const DROP_FUNCTION_SQL: &str = "DROP FUNCTION IF EXISTS refresh_depth_and_lineage";

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
