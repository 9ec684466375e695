// Product search endpoint
//
// `GET /products?filterTerm=&locationId=&filterOffset=&filterLimit=` returns
// one page of products for a term, with stock levels for the location.

use tracing::debug;

use crate::client::CatalogClient;
use crate::error::Error;
use crate::models::ProductsResponse;

/// Largest offset the upstream API documents as valid.
pub const MAX_OFFSET: u32 = 1000;

/// Largest page size the upstream API accepts.
pub const MAX_PAGE_LIMIT: u32 = 50;

/// Parameters of a single product page request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductQuery {
    pub term: String,
    pub location_id: String,
    pub offset: u32,
    pub limit: u32,
}

impl ProductQuery {
    /// Reject parameters the catalog is documented to refuse.
    pub fn validate(&self) -> Result<(), Error> {
        if self.term.trim().is_empty() {
            return Err(Error::InvalidParameter {
                name: "filterTerm",
                reason: "a search term is required".into(),
            });
        }
        if self.offset > MAX_OFFSET {
            return Err(Error::InvalidParameter {
                name: "filterOffset",
                reason: format!("{} is outside 0..={MAX_OFFSET}", self.offset),
            });
        }
        if self.limit == 0 || self.limit > MAX_PAGE_LIMIT {
            return Err(Error::InvalidParameter {
                name: "filterLimit",
                reason: format!("{} is outside 1..={MAX_PAGE_LIMIT}", self.limit),
            });
        }
        Ok(())
    }
}

impl CatalogClient {
    /// Fetch one page of products matching `query.term` at a location.
    pub async fn get_products(&self, query: &ProductQuery) -> Result<ProductsResponse, Error> {
        query.validate()?;

        let url = self.endpoint_url(
            "products",
            &[
                ("filterTerm", query.term.clone()),
                ("locationId", query.location_id.clone()),
                ("filterOffset", query.offset.to_string()),
                ("filterLimit", query.limit.to_string()),
            ],
        )?;
        debug!(
            term = %query.term,
            location_id = %query.location_id,
            offset = query.offset,
            limit = query.limit,
            "searching products"
        );

        self.get(url).await
    }
}
