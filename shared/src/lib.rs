//! Shared types and domain logic for the Agri Insights Hub
//!
//! This crate contains the product model, the pure inventory analyzer
//! (alert classification, statistics, monthly trends), the demand
//! estimation heuristics, and spreadsheet import mapping shared across
//! the backend and any future consumers.

pub mod analyzer;
pub mod demand;
pub mod import;
pub mod models;
pub mod validation;

pub use analyzer::*;
pub use models::*;
