//! Filesystem adapters.

pub mod sink;
