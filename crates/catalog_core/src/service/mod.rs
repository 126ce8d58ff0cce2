//! Catalog use-case services.
//!
//! # Responsibility
//! - Give the RPC/CLI layer list/get entry points shaped like its messages.
//! - Keep callers decoupled from the concrete repository type.

pub mod catalog_service;
