//! Server-rendered pages.
//!
//! Uses Askama templates from `templates/` for rendering.
//!
//! # Modules
//!
//! - [`dto`] - Form and query payloads
//! - [`handlers`] - Template rendering handlers
//! - [`middleware`] - Method override and request tracing
//! - [`routes`] - Page route configuration

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
