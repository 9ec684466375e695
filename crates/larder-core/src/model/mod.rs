// ── Domain model ──
//
// Canonical types handed to stores and renderers. Wire shapes live in
// `larder_api::models`; `crate::convert` bridges the two.

pub mod location;
pub mod page;
pub mod product;

pub use location::{Address, Location};
pub use page::{PaginationMeta, ProductPage};
pub use product::{Product, ProductImage, ProductItem, StockLevel};
