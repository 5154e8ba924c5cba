//! Shared types and configuration for Santri Ledger.
//!
//! This crate provides common types used across all other crates:
//! - Typed IDs for type-safe record references
//! - The billing period type (year + month)
//! - Engine configuration management

pub mod config;
pub mod types;

pub use config::EngineConfig;
