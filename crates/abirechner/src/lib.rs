//! Prognosis engine for the Hamburg Abitur qualification as taught at
//! Gymnasium Blankenese: profile catalog, Block I grade optimization,
//! Block II exam aggregation, and the HTTP surface around them.

pub mod catalog;
pub mod config;
pub mod error;
pub mod import;
pub mod prognose;
pub mod telemetry;
