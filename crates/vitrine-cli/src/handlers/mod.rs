pub mod badge;
pub mod basket;
pub mod config;
pub mod convert;
pub mod date;
pub mod price;
pub mod product;
pub mod promotion;
pub mod stars;

use anyhow::{Context, Result};
use std::path::Path;
use vitrine_types::{Product, load_listing};

use crate::presentation::presenters::Catalog;

/// Product list keyed by id; an absent path gives an empty catalog
fn load_catalog(path: Option<&Path>) -> Result<Catalog> {
    let Some(path) = path else {
        return Ok(Catalog::new());
    };

    let products: Vec<Product> = load_listing(path)
        .with_context(|| format!("failed to load catalog {}", path.display()))?;
    tracing::debug!(path = %path.display(), products = products.len(), "loaded catalog");

    Ok(products.into_iter().map(|p| (p.id.clone(), p)).collect())
}
