use anyhow::Result;

use crate::args::ConvertCommand;
use crate::context::ExecutionContext;
use crate::presentation::presenters::{present_to_major, present_to_minor};

pub fn handle(ctx: &ExecutionContext, command: ConvertCommand) -> Result<()> {
    let vm = match command {
        ConvertCommand::ToMajor { cents } => present_to_major(cents),
        ConvertCommand::ToMinor { amount } => {
            if !amount.is_finite() {
                anyhow::bail!("amount must be a finite number, got {}", amount);
            }
            present_to_minor(amount)
        }
    };
    ctx.renderer().render(&vm)
}
