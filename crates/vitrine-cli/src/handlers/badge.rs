use anyhow::Result;

use crate::context::ExecutionContext;
use crate::presentation::presenters::present_badge;

pub fn handle(ctx: &ExecutionContext, status: &str) -> Result<()> {
    ctx.renderer().render(&present_badge(status))
}
