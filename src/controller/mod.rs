//! HTTP request handlers. Controllers stay thin: authenticate, convert DTOs to
//! params, delegate to a service, convert the result back to a DTO.

pub mod auth;
pub mod user;
