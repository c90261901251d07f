use anyhow::{Context, Result};
use std::path::Path;
use vitrine_types::{Cart, Order, load_json};

use super::load_catalog;
use crate::context::ExecutionContext;
use crate::presentation::presenters::{present_cart, present_order};

pub fn handle_order(ctx: &ExecutionContext, file: &Path, catalog: Option<&Path>) -> Result<()> {
    let order: Order =
        load_json(file).with_context(|| format!("failed to load order {}", file.display()))?;
    let catalog = load_catalog(catalog)?;
    let currency = ctx.currency()?;

    ctx.renderer()
        .render(&present_order(&order, &catalog, currency.code))
}

pub fn handle_cart(ctx: &ExecutionContext, file: &Path, catalog: Option<&Path>) -> Result<()> {
    let cart: Cart =
        load_json(file).with_context(|| format!("failed to load cart {}", file.display()))?;
    let catalog = load_catalog(catalog)?;
    let currency = ctx.currency()?;

    ctx.renderer()
        .render(&present_cart(&cart, &catalog, currency.code))
}
