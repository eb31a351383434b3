//! Implementations of ports (hexagonal adapters).
//!
//! - [`inbound`] drives the application (the CLI).
//! - [`outbound`] is driven by it (odds provider, output directory).

pub mod inbound;
pub mod outbound;
