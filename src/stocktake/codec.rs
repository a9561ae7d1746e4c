//! The comma-delimited line format for the persisted inventory file.
//!
//! One product per line, exactly four fields:
//!
//! ```text
//! name,quantity,price,last_updated
//! ```
//!
//! There is no quoting or escaping. A name containing a comma will corrupt
//! its row on reload; this matches the on-disk format and is an accepted
//! limitation.

use crate::model::Product;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("expected 4 fields, found {0}")]
    FieldCount(usize),

    #[error("invalid quantity: {0}")]
    Quantity(#[from] std::num::ParseIntError),

    #[error("invalid price: {0}")]
    Price(#[from] std::num::ParseFloatError),
}

pub fn encode(product: &Product) -> String {
    format!(
        "{},{},{},{}",
        product.name, product.quantity, product.price, product.last_updated
    )
}

pub fn decode(line: &str) -> Result<Product, DecodeError> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() != 4 {
        return Err(DecodeError::FieldCount(fields.len()));
    }
    let quantity: u32 = fields[1].parse()?;
    let price: f64 = fields[2].parse()?;
    Ok(Product::from_parts(
        fields[0].to_string(),
        quantity,
        price,
        fields[3].to_string(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_preserves_all_fields() {
        let product = Product::from_parts("Widget".into(), 10, 2.5, "2024-06-01 12:30:00".into());
        let decoded = decode(&encode(&product)).unwrap();
        assert_eq!(decoded, product);
    }

    #[test]
    fn decode_rejects_wrong_field_count() {
        assert!(matches!(
            decode("Widget,10,2.5"),
            Err(DecodeError::FieldCount(3))
        ));
        assert!(matches!(
            decode("Widget,10,2.5,now,extra"),
            Err(DecodeError::FieldCount(5))
        ));
    }

    #[test]
    fn decode_rejects_non_numeric_quantity() {
        assert!(matches!(
            decode("Widget,ten,2.5,2024-06-01 12:30:00"),
            Err(DecodeError::Quantity(_))
        ));
    }

    #[test]
    fn decode_rejects_non_numeric_price() {
        assert!(matches!(
            decode("Widget,10,cheap,2024-06-01 12:30:00"),
            Err(DecodeError::Price(_))
        ));
    }

    #[test]
    fn comma_in_name_corrupts_the_row() {
        let product = Product::from_parts("Nuts, assorted".into(), 1, 1.0, "2024-06-01 12:30:00".into());
        assert!(decode(&encode(&product)).is_err());
    }
}
