// ── Product domain type ──

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use strum::{Display, EnumString};

/// Availability of a product at the selected location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
pub enum StockLevel {
    #[strum(to_string = "High", serialize = "HIGH")]
    High,
    #[strum(to_string = "Low", serialize = "LOW")]
    Low,
    #[strum(to_string = "Out of stock", serialize = "TEMPORARILY_OUT_OF_STOCK")]
    TemporarilyOutOfStock,
    #[strum(to_string = "Unknown")]
    Unknown,
}

impl StockLevel {
    /// Map the catalog's inventory code. Unrecognised or missing codes are
    /// `Unknown`.
    pub fn from_code(code: Option<&str>) -> Self {
        match code {
            Some("HIGH") => Self::High,
            Some("LOW") => Self::Low,
            Some("TEMPORARILY_OUT_OF_STOCK") => Self::TemporarilyOutOfStock,
            _ => Self::Unknown,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub product_id: String,
    pub description: String,
    pub brand: Option<String>,
    pub items: Vec<ProductItem>,
    pub images: Vec<ProductImage>,
    /// Fields the browse flow does not interpret, kept verbatim.
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub extra: Map<String, Value>,
}

/// A purchasable variant of a product at one location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductItem {
    pub item_id: Option<String>,
    /// Raw inventory code (`HIGH`, `LOW`, ...).
    pub stock_level: Option<String>,
    pub size: Option<String>,
    pub regular_price: Option<f64>,
    pub promo_price: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductImage {
    pub perspective: Option<String>,
    pub is_default: bool,
    /// `(size name, url)` pairs, e.g. `("thumbnail", "https://...")`.
    pub sizes: Vec<(String, String)>,
}

impl Product {
    /// Stock level of the first item. `None` when the product has no items
    /// at this location.
    pub fn stock_level(&self) -> Option<StockLevel> {
        self.items
            .first()
            .map(|item| StockLevel::from_code(item.stock_level.as_deref()))
    }

    /// Thumbnail URL of the front-facing image.
    pub fn thumbnail_url(&self) -> Option<&str> {
        self.image_url("front", "thumbnail")
    }

    pub fn image_url(&self, perspective: &str, size: &str) -> Option<&str> {
        self.images
            .iter()
            .find(|img| img.perspective.as_deref() == Some(perspective))?
            .sizes
            .iter()
            .find(|(name, _)| name == size)
            .map(|(_, url)| url.as_str())
    }

    /// Size label of the first item, e.g. "1 gal".
    pub fn size(&self) -> Option<&str> {
        self.items.first().and_then(|item| item.size.as_deref())
    }

    /// Effective price of the first item: promo when set and non-zero,
    /// otherwise regular.
    pub fn price(&self) -> Option<f64> {
        let item = self.items.first()?;
        item.promo_price
            .filter(|p| *p > 0.0)
            .or(item.regular_price)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn product(items: Vec<ProductItem>, images: Vec<ProductImage>) -> Product {
        Product {
            product_id: "0001111041700".into(),
            description: "Kroger 2% Reduced Fat Milk".into(),
            brand: Some("Kroger".into()),
            items,
            images,
            extra: Map::new(),
        }
    }

    fn item(code: Option<&str>) -> ProductItem {
        ProductItem {
            item_id: None,
            stock_level: code.map(String::from),
            size: Some("1 gal".into()),
            regular_price: Some(3.49),
            promo_price: Some(0.0),
        }
    }

    #[test]
    fn stock_level_maps_known_codes() {
        assert_eq!(StockLevel::from_code(Some("HIGH")), StockLevel::High);
        assert_eq!(StockLevel::from_code(Some("LOW")), StockLevel::Low);
        assert_eq!(
            StockLevel::from_code(Some("TEMPORARILY_OUT_OF_STOCK")),
            StockLevel::TemporarilyOutOfStock
        );
        assert_eq!(StockLevel::from_code(Some("DISCONTINUED")), StockLevel::Unknown);
        assert_eq!(StockLevel::from_code(None), StockLevel::Unknown);
    }

    #[test]
    fn stock_level_labels() {
        assert_eq!(StockLevel::TemporarilyOutOfStock.to_string(), "Out of stock");
        assert_eq!(StockLevel::High.to_string(), "High");
        assert_eq!("LOW".parse::<StockLevel>().unwrap(), StockLevel::Low);
    }

    #[test]
    fn stock_level_uses_first_item() {
        let p = product(vec![item(Some("LOW")), item(Some("HIGH"))], vec![]);
        assert_eq!(p.stock_level(), Some(StockLevel::Low));
    }

    #[test]
    fn stock_level_blank_without_items() {
        let p = product(vec![], vec![]);
        assert_eq!(p.stock_level(), None);
    }

    #[test]
    fn thumbnail_needs_front_perspective() {
        let back = ProductImage {
            perspective: Some("back".into()),
            is_default: false,
            sizes: vec![("thumbnail".into(), "https://img/back.jpg".into())],
        };
        let front = ProductImage {
            perspective: Some("front".into()),
            is_default: true,
            sizes: vec![
                ("large".into(), "https://img/front-l.jpg".into()),
                ("thumbnail".into(), "https://img/front-t.jpg".into()),
            ],
        };
        assert_eq!(product(vec![], vec![back.clone()]).thumbnail_url(), None);
        assert_eq!(
            product(vec![], vec![back, front]).thumbnail_url(),
            Some("https://img/front-t.jpg")
        );
    }

    #[test]
    fn price_skips_zero_promo() {
        let p = product(vec![item(None)], vec![]);
        assert_eq!(p.price(), Some(3.49));
        assert_eq!(p.size(), Some("1 gal"));
    }
}
