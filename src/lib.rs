//! # Match Stats
//!
//! Backend for a gaming match statistics dashboard.
//!
//! ## Architecture
//!
//! - **models**: Match records and derived view types
//! - **storage**: Swappable match stores (CSV file, sample generator, memory)
//! - **calculate**: Summary, trend and per-map aggregation
//! - **api**: REST API endpoints and static front-end serving
//! - **config**: Configuration loading and validation

pub mod api;
pub mod calculate;
pub mod config;
pub mod models;
pub mod storage;

pub use models::*;
