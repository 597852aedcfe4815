//! Middleware for the web layer.

pub mod method_override;
pub mod tracing;
