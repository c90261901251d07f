use anyhow::Result;
use std::path::Path;
use vitrine_format::Formatter;

use crate::args::OutputFormat;
use crate::config::{CONFIG_FILE, Config};
use crate::context::ExecutionContext;
use crate::presentation::presenters::{present_config, present_config_init};
use crate::presentation::view_models::PathViewModel;
use crate::presentation::{ConsoleRenderer, ViewContext};

/// `init` and `path` run without loading config.toml so a broken file can be replaced
fn bare_renderer(format: OutputFormat) -> ConsoleRenderer {
    ConsoleRenderer::new(
        format,
        ViewContext {
            formatter: Formatter::default(),
            color: false,
        },
    )
}

pub fn handle_show(ctx: &ExecutionContext) -> Result<()> {
    ctx.renderer()
        .render(&present_config(ctx.config(), &ctx.config_path()))
}

pub fn handle_init(data_dir: &Path, format: OutputFormat, force: bool) -> Result<()> {
    let path = data_dir.join(CONFIG_FILE);
    let exists = path.exists();
    if exists && !force {
        anyhow::bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }

    Config::default().save_to(&path)?;
    tracing::info!(path = %path.display(), "wrote default config");

    bare_renderer(format).render(&present_config_init(&path, exists))
}

pub fn handle_path(data_dir: &Path, format: OutputFormat) -> Result<()> {
    bare_renderer(format).render(&PathViewModel {
        path: data_dir.join(CONFIG_FILE).display().to_string(),
    })
}
