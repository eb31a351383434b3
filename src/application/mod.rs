//! Application services (use cases).
//!
//! These services orchestrate domain logic and coordinate adapters
//! through ports to implement the application's use cases.

pub mod detector;
pub mod indexer;
pub mod report;
pub mod scheduler;
pub mod store;
