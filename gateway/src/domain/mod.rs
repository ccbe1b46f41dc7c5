//! Domain layer
//!
//! Contains pure business logic with no external dependencies.
//! - `entities`: The upstream forecast payload and the report we serve
//! - `ports`: Trait definitions for external dependencies

pub mod entities;
pub mod ports;
