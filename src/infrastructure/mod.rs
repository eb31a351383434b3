//! Infrastructure layer.
//!
//! Provides technical concerns that support the application without containing
//! business logic.
//!
//! # Submodules
//!
//! - [`app`] - Composition root for a detection run
//! - [`config`] - Configuration loading and validation

pub mod app;
pub mod config;
