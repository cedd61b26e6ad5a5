//! Domain types for Stockroom
//! Defines the product record and the errors raised around it.

pub mod error;
pub mod product;

pub use error::*;
pub use product::*;

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_new_product_shares_created_and_updated_date() {
        let product = Product::new("P-1", "Widget", "Blue widget", 4, date(2024, 3, 1));
        assert_eq!(product.date_created, product.date_updated);
        assert_eq!(product.quantity, 4);
    }

    #[test]
    fn test_name_matches_is_case_insensitive() {
        let product = Product::new("P-1", "Steel Bolt", "M8", 10, date(2024, 3, 1));
        assert!(product.name_matches(""));
        assert!(product.name_matches("bolt"));
        assert!(product.name_matches("STEEL"));
        assert!(product.name_matches("el B"));
        assert!(!product.name_matches("nut"));
    }

    #[test]
    fn test_name_matches_non_ascii() {
        let product = Product::new("P-2", "Ölfilter", "", 1, date(2024, 3, 1));
        assert!(product.name_matches("ÖL"));
        assert!(product.name_matches("öl"));
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            ProductError::DuplicateId("P-1".into()).to_string(),
            "Duplicate ID: P-1"
        );
        assert!(ProductError::NotFound("P-1".into()).is_not_found());
        assert_eq!(
            FormError::EmptyFields.to_string(),
            "None of the fields can be empty."
        );
    }
}
