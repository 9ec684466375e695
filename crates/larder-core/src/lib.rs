//! Search and browse state for the larder catalog tools.
//!
//! - **[`SearchController`]** turns user intents (load locations, select,
//!   submit, first/prev/next/last) into catalog fetches and writes the
//!   outcomes into a [`SearchStore`]. Only the latest product fetch is ever
//!   applied.
//! - **[`SearchStore`]** holds four independent reactive cells (locations,
//!   selection, current page, last error) backed by `tokio::sync::watch`.
//! - **[`pagination`]** is the pure offset and label arithmetic.
//! - **[`CatalogSource`]** is the seam between the controller and
//!   `larder_api::CatalogClient`.

pub mod config;
pub mod controller;
pub mod convert;
pub mod error;
pub mod model;
pub mod pagination;
pub mod source;
pub mod store;

pub use config::{CatalogConfig, SearchConfig};
pub use controller::{ActiveSearch, Outcome, SearchController, SearchPhase, SearchView};
pub use error::CoreError;
pub use model::{Location, PaginationMeta, Product, ProductPage, StockLevel};
pub use pagination::{Navigation, PageLimits, RangeLabel};
pub use source::CatalogSource;
pub use store::SearchStore;

pub use larder_api::{CatalogClient, ProductQuery};

/// Controller backed by the HTTP catalog client.
pub type CatalogController = SearchController<CatalogClient>;
