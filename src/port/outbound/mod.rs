//! Outbound ports (driven side): interfaces implemented by outbound adapters.
//!
//! These contracts describe infrastructure dependencies: the odds provider
//! and the location opportunity documents are persisted to.

pub mod odds;
pub mod sink;
