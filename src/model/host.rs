//! Operation parameters for host publishers, hosts, and host releases.
//!
//! Host rows pass through as entity models; only the write parameters get
//! dedicated types here.

use chrono::{DateTime, Utc};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct CreateHostPublisherParams {
    pub slug: String,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CreateHostParams {
    pub slug: String,
    pub name: String,
    pub description: Option<String>,
    pub host_publisher_id: Uuid,
}

#[derive(Debug, Clone)]
pub struct CreateHostReleaseParams {
    pub host_id: Uuid,
    pub version: String,
    pub released_at: Option<DateTime<Utc>>,
    pub description: Option<String>,
}
