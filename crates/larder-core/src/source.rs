// ── Catalog source seam ──
//
// The controller only needs two reads from the catalog. Abstracting them
// lets the state machine run against scripted sources in tests.

use std::future::Future;

use larder_api::{CatalogClient, ProductQuery};

use crate::convert;
use crate::error::CoreError;
use crate::model::{Location, ProductPage};

/// Read access to a product catalog.
pub trait CatalogSource: Send + Sync + 'static {
    /// Up to `limit` locations near `zip_code`.
    fn locations(
        &self,
        zip_code: &str,
        limit: u32,
    ) -> impl Future<Output = Result<Vec<Location>, CoreError>> + Send;

    /// One page of products for `query`.
    fn products(
        &self,
        query: &ProductQuery,
    ) -> impl Future<Output = Result<ProductPage, CoreError>> + Send;
}

impl CatalogSource for CatalogClient {
    async fn locations(&self, zip_code: &str, limit: u32) -> Result<Vec<Location>, CoreError> {
        let raw = self.get_locations(zip_code, limit).await?;
        Ok(raw.into_iter().map(Location::from).collect())
    }

    async fn products(&self, query: &ProductQuery) -> Result<ProductPage, CoreError> {
        let resp = self.get_products(query).await?;
        Ok(convert::product_page(resp, query))
    }
}
