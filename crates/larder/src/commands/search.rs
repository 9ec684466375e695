//! One-shot product search.

use serde::Serialize;
use tabled::Tabled;

use larder_core::{CatalogController, Location, PaginationMeta, Product, SearchView};

use crate::cli::{GlobalOpts, OutputFormat, SearchArgs};
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct ProductRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Brand")]
    brand: String,
    #[tabled(rename = "Size")]
    size: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Stock")]
    stock: String,
    #[tabled(rename = "Thumbnail")]
    thumbnail: String,
}

impl ProductRow {
    fn new(p: &Product, color: bool) -> Self {
        Self {
            id: p.product_id.clone(),
            description: p.description.clone(),
            brand: p.brand.clone().unwrap_or_default(),
            size: p.size().unwrap_or_default().to_owned(),
            price: p.price().map(|v| format!("${v:.2}")).unwrap_or_default(),
            stock: output::stock_label(p.stock_level(), color),
            thumbnail: p.thumbnail_url().unwrap_or_default().to_owned(),
        }
    }
}

// ── Serializable result ─────────────────────────────────────────────

#[derive(Serialize)]
pub(super) struct SearchResult<'a> {
    term: &'a str,
    location: Option<&'a Location>,
    /// e.g. "26 to 50 of 250"; absent when nothing matched.
    range: Option<String>,
    pagination: Option<PaginationMeta>,
    products: &'a [Product],
}

impl<'a> SearchResult<'a> {
    pub(super) fn from_view(view: &'a SearchView) -> Self {
        let page = view.product_page.as_ref();
        Self {
            term: &view.term,
            location: view.selected_location.as_ref(),
            range: view.range_label.map(|l| l.to_string()),
            pagination: page.map(|p| p.meta),
            products: page.map_or(&[][..], |p| p.items.as_slice()),
        }
    }
}

/// Table of the current page followed by its range label.
pub(super) fn page_detail(view: &SearchView, color: bool) -> String {
    let Some(page) = view.product_page.as_ref() else {
        return String::new();
    };
    if page.is_empty() {
        return format!("No products match '{}'", view.term);
    }
    let rows: Vec<ProductRow> = page.items.iter().map(|p| ProductRow::new(p, color)).collect();
    let mut out = output::render_table(&rows);
    if let Some(label) = view.range_label {
        out.push('\n');
        out.push_str(&label.to_string());
    }
    out
}

pub(super) fn render_view(
    view: &SearchView,
    format: &OutputFormat,
    color: bool,
) -> Result<String, CliError> {
    let result = SearchResult::from_view(view);
    output::render_single(
        format,
        &result,
        |_| page_detail(view, color),
        |r| {
            r.products
                .iter()
                .map(|p| p.product_id.as_str())
                .collect::<Vec<_>>()
                .join("\n")
        },
    )
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    controller: &CatalogController,
    args: SearchArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    if args.term.trim().is_empty() {
        return Err(CliError::Validation {
            field: "term".into(),
            reason: "a search term is required".into(),
        });
    }

    util::require_locations(controller).await?;
    let location = util::select_location(controller, args.location.as_deref())?;
    tracing::info!(location = %location.name, term = %args.term, "searching");

    util::check(controller, controller.submit(args.term).await)?;
    if let Some(page) = args.page {
        util::check(controller, controller.go_to_page(page).await)?;
    }

    let view = controller.view();
    let out = render_view(&view, &global.output, output::should_color(&global.color))?;
    output::print_output(&out, global.quiet);
    Ok(())
}
