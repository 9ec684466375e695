// larder-api: Async Rust client for the grocery catalog API

pub mod client;
pub mod error;
pub mod locations;
pub mod models;
pub mod products;
pub mod transport;

pub use client::CatalogClient;
pub use error::Error;
pub use products::ProductQuery;
pub use transport::{TlsMode, TransportConfig};
