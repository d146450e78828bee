//! Engine orchestration service.
//!
//! Supervises UCI engine child processes and exposes an HTTP surface for
//! move requests, per-request status polling and multi-PV hints. Concurrent
//! HTTP requests are serialized per engine through a task queue so a
//! line-oriented, stateful subprocess is never shared mid-search.

pub mod api;
pub mod error;
pub mod supervisor;
pub mod uci_client;
