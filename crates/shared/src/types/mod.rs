//! Common types used across the application.

pub mod id;
pub mod scenario;

pub use id::{AccountId, InvalidAccountId};
pub use scenario::{Scenario, UnknownScenario};
