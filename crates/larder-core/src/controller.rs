// ── Search controller ──
//
// Owns the search term and the active search, turns user intents into
// catalog fetches, and dispatches outcomes into the `SearchStore`.
// Only the most recently issued product fetch may land: each request takes
// a generation ticket and a response whose ticket is stale is dropped.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::{Mutex, watch};
use tracing::{debug, info, warn};

use larder_api::{CatalogClient, ProductQuery};

use crate::config::{CatalogConfig, SearchConfig};
use crate::error::CoreError;
use crate::model::{Location, PaginationMeta, ProductPage};
use crate::pagination::{Navigation, PageLimits, RangeLabel};
use crate::source::CatalogSource;
use crate::store::SearchStore;

// ── Outcome ──────────────────────────────────────────────────────

/// What happened to a single intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum Outcome {
    /// Nothing to do (already loaded, no location, already on that page).
    Skipped,
    /// The response was written to the stores.
    Applied,
    /// The request failed; the error store holds the reason.
    Failed,
    /// A newer request or a location change overtook this one.
    Superseded,
}

// ── SearchPhase ──────────────────────────────────────────────────

/// Coarse state of the browse flow, derived from the stores.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchPhase {
    Idle,
    LocationLoading,
    LocationsReady,
    ProductLoading,
    ProductsReady { no_results: bool },
    /// The last fetch failed. `resume` is the state the flow is otherwise in.
    Error { resume: Box<SearchPhase> },
}

/// The term and location that produced the page on screen. Navigation
/// pages through this search, not whatever is currently typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveSearch {
    pub term: String,
    pub location_id: String,
}

// ── SearchView ───────────────────────────────────────────────────

/// Point-in-time snapshot for renderers.
#[derive(Debug, Clone)]
pub struct SearchView {
    pub locations: Arc<Vec<Location>>,
    pub selected_location: Option<Location>,
    pub term: String,
    pub product_page: Option<ProductPage>,
    pub error: Option<CoreError>,
    pub loading_locations: bool,
    pub loading_products: bool,
    pub phase: SearchPhase,
    /// `None` when there is no page or the page is empty.
    pub range_label: Option<RangeLabel>,
    pub can_submit: bool,
    pub can_navigate_first: bool,
    pub can_navigate_prev: bool,
    pub can_navigate_next: bool,
    pub can_navigate_last: bool,
}

impl SearchView {
    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(CoreError::user_message)
    }

    pub fn can_navigate(&self, nav: Navigation) -> bool {
        match nav {
            Navigation::First => self.can_navigate_first,
            Navigation::Prev => self.can_navigate_prev,
            Navigation::Next => self.can_navigate_next,
            Navigation::Last => self.can_navigate_last,
        }
    }
}

// ── SearchController ─────────────────────────────────────────────

/// Entry point for search consumers.
///
/// Cheaply cloneable; clones share the same stores, so a fetch issued from
/// one clone supersedes an in-flight fetch from another.
pub struct SearchController<S: CatalogSource> {
    inner: Arc<ControllerInner<S>>,
}

impl<S: CatalogSource> Clone for SearchController<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

struct ControllerInner<S> {
    source: S,
    search: SearchConfig,
    store: SearchStore,
    term: watch::Sender<String>,
    active: watch::Sender<Option<ActiveSearch>>,
    loading_locations: watch::Sender<bool>,
    loading_products: watch::Sender<bool>,
    /// Bumped by every product fetch and every location change.
    generation: AtomicU64,
    /// Serialises location loads.
    location_load: Mutex<()>,
    /// Completed location loads, successful or not.
    location_attempts: AtomicU64,
}

impl SearchController<CatalogClient> {
    /// Build a controller backed by the HTTP catalog client.
    pub fn connect(config: &CatalogConfig) -> Result<Self, CoreError> {
        let client = CatalogClient::new(config.url.clone(), &config.transport())?;
        info!(url = %config.url, zip_code = %config.search.zip_code, "catalog session ready");
        Ok(Self::new(client, config.search.clone()))
    }
}

impl<S: CatalogSource> SearchController<S> {
    pub fn new(source: S, search: SearchConfig) -> Self {
        Self {
            inner: Arc::new(ControllerInner {
                source,
                search,
                store: SearchStore::new(),
                term: watch::Sender::new(String::new()),
                active: watch::Sender::new(None),
                loading_locations: watch::Sender::new(false),
                loading_products: watch::Sender::new(false),
                generation: AtomicU64::new(0),
                location_load: Mutex::new(()),
                location_attempts: AtomicU64::new(0),
            }),
        }
    }

    pub fn store(&self) -> &SearchStore {
        &self.inner.store
    }

    pub fn search_config(&self) -> &SearchConfig {
        &self.inner.search
    }

    pub fn limits(&self) -> PageLimits {
        self.inner.search.limits
    }

    pub fn term(&self) -> String {
        self.inner.term.borrow().clone()
    }

    pub fn active_search(&self) -> Option<ActiveSearch> {
        self.inner.active.borrow().clone()
    }

    // ── Locations ────────────────────────────────────────────────

    /// Load locations for the configured zip code unless already loaded.
    ///
    /// Callers arriving while a load is in flight wait for it and do not
    /// issue a request of their own, whatever its result.
    pub async fn load_locations(&self) -> Outcome {
        let inner = &self.inner;
        if !inner.store.locations.is_empty() {
            return Outcome::Skipped;
        }

        let seen = inner.location_attempts.load(Ordering::SeqCst);
        let _guard = inner.location_load.lock().await;
        if !inner.store.locations.is_empty() || inner.location_attempts.load(Ordering::SeqCst) != seen {
            debug!("location load already completed by another caller");
            return Outcome::Skipped;
        }

        inner.loading_locations.send_replace(true);
        let zip_code = &inner.search.zip_code;
        debug!(zip_code = %zip_code, limit = inner.search.max_locations, "loading locations");
        let result = inner
            .source
            .locations(zip_code, inner.search.max_locations)
            .await;

        let outcome = match result {
            Ok(locations) => {
                info!(count = locations.len(), zip_code = %zip_code, "locations loaded");
                inner.store.locations.populate(locations);
                inner.store.error.clear();
                Outcome::Applied
            }
            Err(e) => {
                warn!(error = %e, "location load failed");
                inner.store.error.set(e);
                Outcome::Failed
            }
        };
        inner.location_attempts.fetch_add(1, Ordering::SeqCst);
        inner.loading_locations.send_replace(false);
        outcome
    }

    /// Select a loaded location by id.
    pub fn select_by_id(&self, location_id: &str) -> Result<(), CoreError> {
        let location = self.inner.store.locations.find(location_id).ok_or_else(|| {
            CoreError::LocationNotFound {
                location_id: location_id.to_owned(),
            }
        })?;
        self.select(location);
        Ok(())
    }

    /// Make `location` the search target. Clears the page and abandons any
    /// product fetch still in flight, even when the location is unchanged.
    pub fn select(&self, location: Location) {
        let inner = &self.inner;
        inner.generation.fetch_add(1, Ordering::SeqCst);
        inner.loading_products.send_replace(false);
        inner.active.send_replace(None);
        debug!(location_id = %location.location_id, name = %location.name, "location selected");
        inner.store.select_location(location);
    }

    // ── Search ───────────────────────────────────────────────────

    /// Update the typed term without searching.
    pub fn set_term(&self, term: impl Into<String>) {
        self.inner.term.send_replace(term.into());
    }

    /// Search for `term` from the first page. Does nothing until a location
    /// is selected.
    pub async fn submit(&self, term: impl Into<String>) -> Outcome {
        let term = term.into();
        self.set_term(term.clone());

        let Some(location_id) = self.inner.store.selected.location_id() else {
            debug!(%term, "submit ignored: no location selected");
            return Outcome::Skipped;
        };
        self.fetch(ActiveSearch { term, location_id }, 0).await
    }

    /// Re-run the typed term from the first page.
    pub async fn resubmit(&self) -> Outcome {
        self.submit(self.term()).await
    }

    pub async fn navigate(&self, nav: Navigation) -> Outcome {
        let Some((meta, search)) = self.current_search() else {
            return Outcome::Skipped;
        };
        match self.inner.search.limits.target(nav, &meta) {
            Some(offset) => {
                debug!(%nav, from = meta.start, to = offset, "navigating");
                self.fetch(search, offset).await
            }
            None => Outcome::Skipped,
        }
    }

    pub async fn navigate_first(&self) -> Outcome {
        self.navigate(Navigation::First).await
    }

    pub async fn navigate_prev(&self) -> Outcome {
        self.navigate(Navigation::Prev).await
    }

    pub async fn navigate_next(&self) -> Outcome {
        self.navigate(Navigation::Next).await
    }

    pub async fn navigate_last(&self) -> Outcome {
        self.navigate(Navigation::Last).await
    }

    /// Jump to a 1-based page of the active search, clamped to the last
    /// reachable page.
    pub async fn go_to_page(&self, page: u32) -> Outcome {
        let Some((meta, search)) = self.current_search() else {
            return Outcome::Skipped;
        };
        let offset = self.inner.search.limits.page_start(page, meta.total);
        if offset == meta.start {
            return Outcome::Skipped;
        }
        self.fetch(search, offset).await
    }

    fn current_search(&self) -> Option<(PaginationMeta, ActiveSearch)> {
        let meta = self.inner.store.page.meta()?;
        let search = self.active_search()?;
        Some((meta, search))
    }

    async fn fetch(&self, search: ActiveSearch, offset: u32) -> Outcome {
        let inner = &self.inner;
        let ticket = inner.generation.fetch_add(1, Ordering::SeqCst) + 1;
        inner.loading_products.send_replace(true);

        let query = ProductQuery {
            term: search.term.clone(),
            location_id: search.location_id.clone(),
            offset,
            limit: inner.search.limits.page_limit(),
        };
        let result = inner.source.products(&query).await;

        if inner.generation.load(Ordering::SeqCst) != ticket {
            debug!(ticket, offset, "discarding superseded product response");
            return Outcome::Superseded;
        }
        inner.loading_products.send_replace(false);

        match result {
            Ok(page) => {
                debug!(
                    term = %search.term,
                    start = page.meta.start,
                    total = page.meta.total,
                    items = page.items.len(),
                    "product page loaded"
                );
                inner.store.page.replace(page);
                inner.store.error.clear();
                inner.active.send_replace(Some(search));
                Outcome::Applied
            }
            Err(e) => {
                warn!(error = %e, term = %search.term, offset, "product search failed");
                inner.store.error.set(e);
                Outcome::Failed
            }
        }
    }

    // ── View ─────────────────────────────────────────────────────

    pub fn view(&self) -> SearchView {
        let inner = &self.inner;
        let store = &inner.store;
        let limits = inner.search.limits;

        let locations = store.locations.snapshot();
        let selected_location = store.selected.current();
        let product_page = store.page.current();
        let error = store.error.current();
        let loading_locations = *inner.loading_locations.borrow();
        let loading_products = *inner.loading_products.borrow();

        let ready = match &product_page {
            Some(page) => SearchPhase::ProductsReady {
                no_results: page.is_empty(),
            },
            None if !locations.is_empty() => SearchPhase::LocationsReady,
            None => SearchPhase::Idle,
        };
        let phase = if loading_products {
            SearchPhase::ProductLoading
        } else if loading_locations {
            SearchPhase::LocationLoading
        } else if error.is_some() {
            SearchPhase::Error {
                resume: Box::new(ready),
            }
        } else {
            ready
        };

        let meta = product_page
            .as_ref()
            .filter(|p| !p.is_empty())
            .map(|p| p.meta);
        let can = |nav: Navigation| {
            !loading_products
                && product_page
                    .as_ref()
                    .is_some_and(|p| limits.target(nav, &p.meta).is_some())
        };

        SearchView {
            can_submit: selected_location.is_some(),
            can_navigate_first: can(Navigation::First),
            can_navigate_prev: can(Navigation::Prev),
            can_navigate_next: can(Navigation::Next),
            can_navigate_last: can(Navigation::Last),
            range_label: meta.map(|m| limits.range_label(&m)),
            term: self.term(),
            locations,
            selected_location,
            product_page,
            error,
            loading_locations,
            loading_products,
            phase,
        }
    }
}
