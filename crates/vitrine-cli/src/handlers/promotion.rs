use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::path::Path;
use vitrine_types::{Promotion, load_json};

use crate::context::ExecutionContext;
use crate::presentation::presenters::present_promotion;

pub fn handle(ctx: &ExecutionContext, file: &Path, on: Option<NaiveDate>) -> Result<()> {
    let promotion: Promotion =
        load_json(file).with_context(|| format!("failed to load promotion {}", file.display()))?;
    if promotion.end_date < promotion.start_date {
        tracing::warn!(id = %promotion.id, "promotion ends before it starts");
    }

    let on = on.unwrap_or_else(|| ctx.today());
    ctx.renderer().render(&present_promotion(&promotion, on))
}
