//! Modules layer - Infrastructure components for external integrations
//!
//! Contains clients and adapters for outbound messaging providers.

pub mod notifications;
