//! Clients for external services

pub mod demand;
pub mod weather;
