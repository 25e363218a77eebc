//! Domain models for the Agri Insights Hub

pub mod alert;
pub mod demand;
pub mod product;
pub mod stats;
pub mod weather;

pub use alert::*;
pub use demand::*;
pub use product::*;
pub use stats::*;
pub use weather::*;
