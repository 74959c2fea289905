//! Cluster filter and visibility-synchronization engine for node-link graphs

pub mod cluster;
pub mod config;
pub mod data;
pub mod engine;
pub mod error;
pub mod filter;
pub mod graph;
pub mod interaction;
pub mod storage;
pub mod sync;

pub use anyhow::{Result, anyhow};
pub use engine::FilterEngine;
pub use error::{FilterError, SnapshotError};
