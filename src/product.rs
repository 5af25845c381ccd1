//! Catalog data model

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt::Display;

/// Highest rating a product can carry
pub const MAX_RATING: u8 = 5;

/// A product as returned by the backend.
///
/// Products are never patched after they arrive: a new response replaces
/// the whole list.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct Product {
    pub name: String,
    pub category: String,
    pub cost: f64,
    #[serde(deserialize_with = "deserialize_rating")]
    pub rating: u8,
    pub image: String,
    #[serde(rename = "_id")]
    pub id: String,
}

/// Accept any JSON number as a rating, rounded to whole stars and clamped
/// to `0..=MAX_RATING`.
fn deserialize_rating<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = f64::deserialize(deserializer)?;
    if raw.is_nan() {
        return Ok(0);
    }
    Ok(raw.round().clamp(0.0, f64::from(MAX_RATING)) as u8)
}

/// The product shape handed to the card renderer
#[derive(PartialEq, Clone, Debug)]
pub struct CardProduct {
    pub name: String,
    pub category: String,
    pub cost: f64,
    pub rating: Rating,
    pub image: String,
    pub id: String,
}

impl From<&Product> for CardProduct {
    fn from(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            category: product.category.clone(),
            cost: product.cost,
            rating: Rating::new(product.rating),
            image: product.image.clone(),
            id: product.id.clone(),
        }
    }
}

/// Star rating out of five
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct Rating(u8);

impl Rating {
    pub fn new(stars: u8) -> Self {
        Self(stars.min(MAX_RATING))
    }

    pub fn stars(&self) -> u8 {
        self.0
    }
}

impl Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for _ in 0..self.0 {
            "★".fmt(f)?;
        }
        for _ in 0..(MAX_RATING - self.0) {
            "☆".fmt(f)?;
        }
        Ok(())
    }
}

/// Format a cost the way the storefront shows it: whole amounts without
/// decimals, fractional amounts with two.
pub fn format_cost(cost: f64) -> String {
    if cost.fract() == 0.0 {
        format!("${:.0}", cost)
    } else {
        format!("${:.2}", cost)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const IPHONE: &str = r#"{
        "name": "iPhone XR",
        "category": "Phones",
        "cost": 100,
        "rating": 4,
        "image": "https://i.imgur.com/lulqWzW.jpg",
        "_id": "v4sLtEcMpzabRyfx"
    }"#;

    #[test]
    fn deserializes_backend_shape() {
        let product: Product = serde_json::from_str(IPHONE).unwrap();
        assert_eq!(product.id, "v4sLtEcMpzabRyfx");
        assert_eq!(product.name, "iPhone XR");
        assert_eq!(product.category, "Phones");
        assert_eq!(product.cost, 100.0);
        assert_eq!(product.rating, 4);
    }

    #[test]
    fn out_of_range_ratings_are_clamped_on_arrival() {
        let with_rating = |rating: &str| -> Product {
            let json = IPHONE.replace("\"rating\": 4", &format!("\"rating\": {}", rating));
            serde_json::from_str(&json).unwrap()
        };
        assert_eq!(with_rating("-1").rating, 0);
        assert_eq!(with_rating("4.5").rating, 5);
        assert_eq!(with_rating("3.2").rating, 3);
        assert_eq!(with_rating("12").rating, MAX_RATING);
    }

    #[test]
    fn serializes_id_with_underscore() {
        let product: Product = serde_json::from_str(IPHONE).unwrap();
        let value = serde_json::to_value(&product).unwrap();
        assert_eq!(value["_id"], "v4sLtEcMpzabRyfx");
        assert!(value.get("id").is_none());
    }

    #[test]
    fn card_product_keeps_identity_and_clamps_rating() {
        let mut product: Product = serde_json::from_str(IPHONE).unwrap();
        product.rating = 9;
        let card = CardProduct::from(&product);
        assert_eq!(card.id, product.id);
        assert_eq!(card.rating.stars(), MAX_RATING);
    }

    #[test]
    fn rating_renders_five_stars() {
        assert_eq!(Rating::new(4).to_string(), "★★★★☆");
        assert_eq!(Rating::new(0).to_string(), "☆☆☆☆☆");
    }

    #[test]
    fn cost_formatting() {
        assert_eq!(format_cost(100.0), "$100");
        assert_eq!(format_cost(12.5), "$12.50");
    }
}
