//! Validation helpers for the product write path.
//!
//! The analyzer assumes its inputs already satisfy these invariants;
//! enforcement happens here, at add/update time.

use rust_decimal::Decimal;

/// Validate a product name is non-empty after trimming
pub fn validate_product_name(name: &str) -> Result<(), &'static str> {
    if name.trim().is_empty() {
        return Err("Product name cannot be empty");
    }
    Ok(())
}

/// Validate a stock quantity is non-negative
pub fn validate_quantity(quantity: i32) -> Result<(), &'static str> {
    if quantity < 0 {
        return Err("Quantity cannot be negative");
    }
    Ok(())
}

/// Validate a unit cost is non-negative
pub fn validate_cost(cost: Decimal) -> Result<(), &'static str> {
    if cost < Decimal::ZERO {
        return Err("Cost per unit cannot be negative");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_blank_name() {
        assert!(validate_product_name("   ").is_err());
        assert!(validate_product_name("Urea").is_ok());
    }

    #[test]
    fn rejects_negative_quantity() {
        assert!(validate_quantity(-1).is_err());
        assert!(validate_quantity(0).is_ok());
    }

    #[test]
    fn rejects_negative_cost() {
        assert!(validate_cost(Decimal::from(-5)).is_err());
        assert!(validate_cost(Decimal::ZERO).is_ok());
    }
}
