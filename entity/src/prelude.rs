pub use super::age_restriction::Entity as AgeRestriction;
pub use super::ban::Entity as Ban;
pub use super::category::Entity as Category;
pub use super::comment::Entity as Comment;
pub use super::comment_ranking::Entity as CommentRanking;
pub use super::host::Entity as Host;
pub use super::host_publisher::Entity as HostPublisher;
pub use super::host_publisher_social::Entity as HostPublisherSocial;
pub use super::host_release::Entity as HostRelease;
pub use super::image::Entity as Image;
pub use super::image_ranking::Entity as ImageRanking;
pub use super::message::Entity as Message;
pub use super::mod_::Entity as Mod;
pub use super::mod_ban::Entity as ModBan;
pub use super::mod_image::Entity as ModImage;
pub use super::mod_post::Entity as ModPost;
pub use super::mod_ranking::Entity as ModRanking;
pub use super::mod_rating::Entity as ModRating;
pub use super::mod_release::Entity as ModRelease;
pub use super::mod_release_artifact::Entity as ModReleaseArtifact;
pub use super::mod_release_conflict::Entity as ModReleaseConflict;
pub use super::mod_release_dependency::Entity as ModReleaseDependency;
pub use super::mod_release_download::Entity as ModReleaseDownload;
pub use super::mod_tag::Entity as ModTag;
pub use super::notification::Entity as Notification;
pub use super::post::Entity as Post;
pub use super::ranking::Entity as Ranking;
pub use super::rating::Entity as Rating;
pub use super::site_notification::Entity as SiteNotification;
pub use super::social::Entity as Social;
pub use super::tag::Entity as Tag;
pub use super::user::Entity as User;
pub use super::user_ban::Entity as UserBan;
pub use super::user_message::Entity as UserMessage;
pub use super::user_notification::Entity as UserNotification;
pub use super::user_social::Entity as UserSocial;
pub use super::virus_detection::Entity as VirusDetection;
