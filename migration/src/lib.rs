pub use sea_orm_migration::prelude::*;

mod common;

mod m20260105_000001_create_uuid_ossp_extension;
mod m20260105_000002_create_updated_at_trigger_function;
mod m20260105_000003_create_depth_and_lineage_function;
mod m20260106_000004_create_user_table;
mod m20260106_000005_create_social_table;
mod m20260106_000006_create_user_social_table;
mod m20260106_000007_create_host_publisher_table;
mod m20260106_000008_create_host_publisher_social_table;
mod m20260106_000009_create_host_table;
mod m20260106_000010_create_host_release_table;
mod m20260106_000011_create_category_table;
mod m20260106_000012_create_age_restriction_table;
mod m20260106_000013_create_tag_table;
mod m20260107_000014_create_mod_table;
mod m20260107_000015_create_mod_tag_table;
mod m20260107_000016_create_mod_release_table;
mod m20260107_000017_create_mod_release_artifact_table;
mod m20260107_000018_create_mod_release_dependency_table;
mod m20260107_000019_create_mod_release_conflict_table;
mod m20260107_000020_create_mod_release_download_table;
mod m20260107_000021_create_virus_detection_table;
mod m20260108_000022_create_image_table;
mod m20260108_000023_create_mod_image_table;
mod m20260108_000024_create_ranking_table;
mod m20260108_000025_create_mod_ranking_table;
mod m20260108_000026_create_image_ranking_table;
mod m20260108_000027_create_comment_table;
mod m20260108_000028_create_comment_ranking_table;
mod m20260108_000029_create_rating_table;
mod m20260108_000030_create_mod_rating_table;
mod m20260109_000031_create_post_table;
mod m20260109_000032_create_mod_post_table;
mod m20260109_000033_create_message_table;
mod m20260109_000034_create_user_message_table;
mod m20260109_000035_create_notification_table;
mod m20260109_000036_create_user_notification_table;
mod m20260109_000037_create_site_notification_table;
mod m20260109_000038_create_ban_table;
mod m20260109_000039_create_user_ban_table;
mod m20260109_000040_create_mod_ban_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260105_000001_create_uuid_ossp_extension::Migration),
            Box::new(m20260105_000002_create_updated_at_trigger_function::Migration),
            Box::new(m20260105_000003_create_depth_and_lineage_function::Migration),
            Box::new(m20260106_000004_create_user_table::Migration),
            Box::new(m20260106_000005_create_social_table::Migration),
            Box::new(m20260106_000006_create_user_social_table::Migration),
            Box::new(m20260106_000007_create_host_publisher_table::Migration),
            Box::new(m20260106_000008_create_host_publisher_social_table::Migration),
            Box::new(m20260106_000009_create_host_table::Migration),
            Box::new(m20260106_000010_create_host_release_table::Migration),
            Box::new(m20260106_000011_create_category_table::Migration),
            Box::new(m20260106_000012_create_age_restriction_table::Migration),
            Box::new(m20260106_000013_create_tag_table::Migration),
            Box::new(m20260107_000014_create_mod_table::Migration),
            Box::new(m20260107_000015_create_mod_tag_table::Migration),
            Box::new(m20260107_000016_create_mod_release_table::Migration),
            Box::new(m20260107_000017_create_mod_release_artifact_table::Migration),
            Box::new(m20260107_000018_create_mod_release_dependency_table::Migration),
            Box::new(m20260107_000019_create_mod_release_conflict_table::Migration),
            Box::new(m20260107_000020_create_mod_release_download_table::Migration),
            Box::new(m20260107_000021_create_virus_detection_table::Migration),
            Box::new(m20260108_000022_create_image_table::Migration),
            Box::new(m20260108_000023_create_mod_image_table::Migration),
            Box::new(m20260108_000024_create_ranking_table::Migration),
            Box::new(m20260108_000025_create_mod_ranking_table::Migration),
            Box::new(m20260108_000026_create_image_ranking_table::Migration),
            Box::new(m20260108_000027_create_comment_table::Migration),
            Box::new(m20260108_000028_create_comment_ranking_table::Migration),
            Box::new(m20260108_000029_create_rating_table::Migration),
            Box::new(m20260108_000030_create_mod_rating_table::Migration),
            Box::new(m20260109_000031_create_post_table::Migration),
            Box::new(m20260109_000032_create_mod_post_table::Migration),
            Box::new(m20260109_000033_create_message_table::Migration),
            Box::new(m20260109_000034_create_user_message_table::Migration),
            Box::new(m20260109_000035_create_notification_table::Migration),
            Box::new(m20260109_000036_create_user_notification_table::Migration),
            Box::new(m20260109_000037_create_site_notification_table::Migration),
            Box::new(m20260109_000038_create_ban_table::Migration),
            Box::new(m20260109_000039_create_user_ban_table::Migration),
            Box::new(m20260109_000040_create_mod_ban_table::Migration),
        ]
    }
}
