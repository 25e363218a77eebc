//! HTTP request handlers

mod demand;
mod products;
mod weather;

pub use demand::*;
pub use products::*;
pub use weather::*;
