use anyhow::{Context, Result};
use std::path::Path;
use vitrine_types::{Product, load_json};

use crate::context::ExecutionContext;
use crate::presentation::presenters::present_product;

pub fn handle(ctx: &ExecutionContext, file: &Path) -> Result<()> {
    let product: Product =
        load_json(file).with_context(|| format!("failed to load product {}", file.display()))?;
    ctx.renderer().render(&present_product(&product))
}
