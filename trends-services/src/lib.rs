//! Services for the threat trends pipeline
//!
//! This crate turns loaded news items into a [`trends_core::MetricsSnapshot`]
//! and persists snapshots to the stats directory.

pub mod config;
pub mod metrics;
pub mod sample;
pub mod store;

pub use config::{EngineConfig, MAX_WINDOW_DAYS};
pub use metrics::{MetricsEngine, Window};
pub use sample::sample_items;
pub use store::{SavedSnapshot, SnapshotStore};
