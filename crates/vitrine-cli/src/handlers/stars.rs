use anyhow::Result;

use crate::context::ExecutionContext;
use crate::presentation::presenters::present_stars;

pub fn handle(ctx: &ExecutionContext, rating: f64) -> Result<()> {
    ctx.renderer().render(&present_stars(rating))
}
