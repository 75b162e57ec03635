//! Shoe listing grid - storefront workload.
//!
//! Renders the listing grid page: every shoe in the catalog as a card with
//! its resolved display treatment (sale flag, new-release flag, or plain).
//! The page has a single synchronous data source, so it renders in one pass
//! and responds with a complete body.

mod config;
mod data;
mod sections;
mod shell;

use chrono::Utc;
use spin_sdk::http::{IntoResponse, Method, Request, Response};
use spin_sdk::http_component;

use sole_commerce::prelude::*;
use sole_observability::{LogLevel, RequestId, StructuredLogger};

use config::StoreConfig;
use data::sample_listings;
use sections::{render_grid_header, render_shoe_grid};

/// Listing grid page handler.
#[http_component]
fn handle_grid(req: Request) -> anyhow::Result<impl IntoResponse> {
    if *req.method() != Method::Get {
        return Ok(Response::builder().status(405).build());
    }

    let store = StoreConfig::load();
    let request_id = RequestId::generate();
    let logger = StructuredLogger::new(request_id.clone())
        .with_component("shoe-grid")
        .with_path(req.path())
        .with_min_level(LogLevel::Debug)
        .with_format(store.log_format());

    logger.info("Grid request started");

    let today = Utc::now().date_naive();
    let listings = load_catalog(&logger, today);
    logger
        .event(LogLevel::Debug, "Catalog loaded")
        .field_u64("listings", listings.len() as u64)
        .emit();

    let sections = format!(
        "{}\n{}",
        render_grid_header(&store.store_name, listings.len()),
        render_shoe_grid(&listings, today, &store.detail_base_path)
    );
    let html = shell::render_page(&store.store_name, &sections);

    logger
        .event(LogLevel::Info, "Grid request complete")
        .field_u64("bytes", html.len() as u64)
        .emit();

    Ok(Response::builder()
        .status(200)
        .header("content-type", "text/html; charset=utf-8")
        .header("x-request-id", request_id.as_str())
        .body(html)
        .build())
}

/// Load the catalog, dropping any listing that fails boundary validation.
fn load_catalog(logger: &StructuredLogger, today: chrono::NaiveDate) -> Vec<ShoeListing> {
    sample_listings(today)
        .into_iter()
        .filter(|listing| match listing.validate() {
            Ok(()) => true,
            Err(e) => {
                logger
                    .event(LogLevel::Warn, "Dropping invalid listing")
                    .field("slug", listing.slug.as_str())
                    .field("error", e.to_string())
                    .emit();
                false
            }
        })
        .collect()
}
