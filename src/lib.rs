//! # Draft Assistant
//!
//! A fantasy football draft assistant that ranks players by value over
//! replacement, adjusted for risk, consistency and positional scarcity.
//!
//! ## Architecture
//!
//! - **models**: Core data structures (players, league, settings, draft board)
//! - **calculate**: Replacement levels, VORP, scarcity and scoring
//! - **session**: Draft session that owns the pool and rescores after every change
//! - **fetch**: One-shot player data loading from a URL or file
//! - **api**: REST API endpoints
//! - **config**: Configuration loading and validation

pub mod api;
pub mod calculate;
pub mod config;
pub mod fetch;
pub mod models;
pub mod session;

pub use models::*;
