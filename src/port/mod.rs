//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! Ports define the extension points in the hexagonal architecture.
//! They are traits that adapters implement to integrate with external
//! systems (the odds provider, the filesystem).
//!
//! # Architecture
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │      Application        │
//!     ┌──────────────┤  Domain + Port          ├──────────────┐
//!     │              └─────────────────────────┘              │
//!     ▼                                                       ▼
//! ┌──────────────┐                                    ┌──────────────┐
//! │ Odds API     │                                    │ Directory    │
//! │ Adapter      │                                    │ Sink Adapter │
//! └──────────────┘                                    └──────────────┘
//! ```
//!
//! # Available Ports
//!
//! - [`outbound::odds::OddsSource`] - Sports listing and per-sport odds retrieval
//! - [`outbound::sink::OutputSink`] - Per-sport document persistence

pub mod outbound;
