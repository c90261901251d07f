use anyhow::Result;

use crate::context::ExecutionContext;
use crate::presentation::view_models::{DateStyle, DateViewModel};

pub fn handle(ctx: &ExecutionContext, timestamp: String, short: bool) -> Result<()> {
    let formatter = ctx.formatter();
    let (style, rendered) = if short {
        (DateStyle::Short, formatter.date_time(&timestamp)?)
    } else {
        (DateStyle::Long, formatter.date(&timestamp)?)
    };

    ctx.renderer().render(&DateViewModel {
        input: timestamp,
        style,
        rendered,
    })
}
