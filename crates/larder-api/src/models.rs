// Wire types for the catalog API.
//
// These mirror the JSON the catalog proxy relays from the retailer API.
// Only the fields the browse flow reads are typed; everything else on a
// product rides along in `extra` so callers can pass it through untouched.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ── Envelopes ────────────────────────────────────────────────────────

/// `GET /locations` response.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LocationsResponse {
    #[serde(default)]
    pub data: Vec<ApiLocation>,
}

/// `GET /products` response.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProductsResponse {
    #[serde(default)]
    pub data: Vec<ApiProduct>,
    #[serde(default)]
    pub meta: ApiMeta,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ApiMeta {
    #[serde(default)]
    pub pagination: ApiPagination,
    #[serde(default)]
    pub warnings: Vec<String>,
}

/// Pagination block. The service reports `total` for the whole match set,
/// including results beyond the offset ceiling it will actually serve.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ApiPagination {
    #[serde(default)]
    pub start: u32,
    #[serde(default)]
    pub limit: u32,
    #[serde(default)]
    pub total: u32,
}

// ── Locations ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiLocation {
    pub location_id: String,
    /// The retailer API capitalises this one field.
    #[serde(rename = "Name", alias = "name", default)]
    pub name: String,
    #[serde(default)]
    pub chain: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<ApiAddress>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiAddress {
    pub address_line1: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub county: Option<String>,
}

// ── Products ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiProduct {
    pub product_id: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub items: Vec<ApiProductItem>,
    #[serde(default)]
    pub images: Vec<ApiProductImage>,
    /// Every other field (aisle locations, categories, temperature, ...).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiProductItem {
    #[serde(default)]
    pub item_id: Option<String>,
    #[serde(default)]
    pub inventory: Option<ApiInventory>,
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub price: Option<ApiPrice>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiInventory {
    /// `HIGH`, `LOW`, `TEMPORARILY_OUT_OF_STOCK`, or absent.
    #[serde(default)]
    pub stock_level: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiPrice {
    #[serde(default)]
    pub regular: Option<f64>,
    #[serde(default)]
    pub promo: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiProductImage {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub perspective: Option<String>,
    #[serde(default)]
    pub default: bool,
    #[serde(default)]
    pub sizes: Vec<ApiImageSize>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ApiImageSize {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn location_accepts_capitalised_name() {
        let loc: ApiLocation = serde_json::from_value(json!({
            "locationId": "70100023",
            "chain": "FRED",
            "Name": "Fred Meyer - Tigard",
            "address": { "addressLine1": "11565 SW Pacific Hwy", "city": "Tigard", "zipCode": "97223" }
        }))
        .unwrap();
        assert_eq!(loc.name, "Fred Meyer - Tigard");
        assert_eq!(loc.address.unwrap().city.as_deref(), Some("Tigard"));
    }

    #[test]
    fn product_keeps_unknown_fields() {
        let product: ApiProduct = serde_json::from_value(json!({
            "productId": "0001111041700",
            "description": "Kroger 2% Reduced Fat Milk",
            "upc": "0001111041700",
            "categories": ["Dairy"],
            "items": [{ "itemId": "1", "inventory": { "stockLevel": "LOW" }, "favorite": false }]
        }))
        .unwrap();
        assert_eq!(product.extra.get("upc"), Some(&json!("0001111041700")));
        assert_eq!(product.extra.get("categories"), Some(&json!(["Dairy"])));
        assert_eq!(product.items[0].extra.get("favorite"), Some(&json!(false)));
        assert!(product.images.is_empty());
    }

    #[test]
    fn products_response_tolerates_missing_meta() {
        let resp: ProductsResponse = serde_json::from_value(json!({ "data": [] })).unwrap();
        assert_eq!(resp.meta.pagination, ApiPagination::default());
    }
}
