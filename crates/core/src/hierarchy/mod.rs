//! Account hierarchy and rollups.
//!
//! This module provides:
//! - Ordered account and section configuration
//! - Parent → children adjacency
//! - Memoized rollup of account totals through the hierarchy

pub mod config;
pub mod error;
pub mod index;
pub mod rollup;


pub use config::{AccountConfig, AccountSettings, Section, SectionConfig};
pub use error::ConfigError;
pub use index::HierarchyIndex;
pub use rollup::RollupEngine;
