use anyhow::Result;

use crate::context::ExecutionContext;

pub fn handle(ctx: &ExecutionContext, cents: i64, currency: Option<String>) -> Result<()> {
    let code = currency.unwrap_or_else(|| ctx.config().currency.clone());
    let display = ctx.formatter().price_display(cents, &code)?;
    ctx.renderer().render(&display)
}
