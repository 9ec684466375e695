// ── API-to-domain type conversions ──
//
// Bridges raw `larder_api::models` wire types into `crate::model`. Blank
// strings become `None`; image sizes without a URL are dropped.

use larder_api::ProductQuery;
use larder_api::models::{
    ApiAddress, ApiLocation, ApiPagination, ApiProduct, ApiProductImage, ApiProductItem,
    ProductsResponse,
};

use crate::model::{
    Address, Location, PaginationMeta, Product, ProductImage, ProductItem, ProductPage,
};

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

impl From<ApiAddress> for Address {
    fn from(a: ApiAddress) -> Self {
        Self {
            line1: non_blank(a.address_line1),
            city: non_blank(a.city),
            state: non_blank(a.state),
            zip_code: non_blank(a.zip_code),
            county: non_blank(a.county),
        }
    }
}

impl From<ApiLocation> for Location {
    fn from(l: ApiLocation) -> Self {
        Self {
            location_id: l.location_id,
            name: l.name,
            chain: non_blank(l.chain),
            phone: non_blank(l.phone),
            address: l.address.map(Address::from),
        }
    }
}

impl From<ApiProductItem> for ProductItem {
    fn from(i: ApiProductItem) -> Self {
        let (regular_price, promo_price) = i
            .price
            .map_or((None, None), |p| (p.regular, p.promo));
        Self {
            item_id: non_blank(i.item_id),
            stock_level: i.inventory.and_then(|inv| non_blank(inv.stock_level)),
            size: non_blank(i.size),
            regular_price,
            promo_price,
        }
    }
}

impl From<ApiProductImage> for ProductImage {
    fn from(img: ApiProductImage) -> Self {
        Self {
            perspective: non_blank(img.perspective),
            is_default: img.default,
            sizes: img
                .sizes
                .into_iter()
                .filter_map(|s| Some((s.size?, non_blank(s.url)?)))
                .collect(),
        }
    }
}

impl From<ApiProduct> for Product {
    fn from(p: ApiProduct) -> Self {
        Self {
            product_id: p.product_id,
            description: p.description.unwrap_or_default(),
            brand: non_blank(p.brand),
            items: p.items.into_iter().map(ProductItem::from).collect(),
            images: p.images.into_iter().map(ProductImage::from).collect(),
            extra: p.extra,
        }
    }
}

impl From<ApiPagination> for PaginationMeta {
    fn from(p: ApiPagination) -> Self {
        Self {
            start: p.start,
            limit: p.limit,
            total: p.total,
        }
    }
}

/// Build a domain page from a products response.
///
/// Some catalog deployments omit `start`/`limit` from the pagination block;
/// the query that produced the page fills them in.
pub fn product_page(resp: ProductsResponse, query: &ProductQuery) -> ProductPage {
    let mut meta = PaginationMeta::from(resp.meta.pagination);
    if meta.limit == 0 {
        meta.limit = query.limit;
        meta.start = query.offset;
    }
    ProductPage {
        items: resp.data.into_iter().map(Product::from).collect(),
        meta,
    }
}
