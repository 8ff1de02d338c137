//! Eligibility screening, match scoring, and 90-day action planning for Australian
//! startup funding programs.

pub mod assessment;
pub mod config;
pub mod error;
pub mod telemetry;
