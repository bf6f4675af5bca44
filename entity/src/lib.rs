//! SeaORM entities for the modhost schema.
//!
//! One module per table. Leaf tables share the same base column set (UUID primary
//! key, `created_at` / `updated_at` timestamps, `is_active` soft-delete flag);
//! association tables carry composite primary keys and the timestamp pair. The
//! authoritative column types, defaults, and constraints live in the `migration`
//! crate — these definitions mirror them for query building.

pub mod prelude;

pub mod age_restriction;
pub mod ban;
pub mod category;
pub mod comment;
pub mod comment_ranking;
pub mod host;
pub mod host_publisher;
pub mod host_publisher_social;
pub mod host_release;
pub mod image;
pub mod image_ranking;
pub mod message;
pub mod mod_;
pub mod mod_ban;
pub mod mod_image;
pub mod mod_post;
pub mod mod_ranking;
pub mod mod_rating;
pub mod mod_release;
pub mod mod_release_artifact;
pub mod mod_release_conflict;
pub mod mod_release_dependency;
pub mod mod_release_download;
pub mod mod_tag;
pub mod notification;
pub mod post;
pub mod ranking;
pub mod rating;
pub mod site_notification;
pub mod social;
pub mod tag;
pub mod user;
pub mod user_ban;
pub mod user_message;
pub mod user_notification;
pub mod user_social;
pub mod virus_detection;
