//! Business logic services

pub mod demand;
pub mod import;
pub mod product;
