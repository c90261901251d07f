use anyhow::Result;
use serde::Serialize;
use vitrine_format::Formatter;

use crate::args::OutputFormat;

/// What a text view needs besides its data
#[derive(Debug, Clone, Copy)]
pub struct ViewContext {
    pub formatter: Formatter,
    pub color: bool,
}

pub trait CreateView {
    fn render_text(&self, ctx: &ViewContext) -> Result<String>;
}

#[derive(Serialize)]
struct JsonOut<'a, T: Serialize> {
    ok: bool,
    data: &'a T,
}

pub struct ConsoleRenderer {
    format: OutputFormat,
    ctx: ViewContext,
}

impl ConsoleRenderer {
    pub fn new(format: OutputFormat, ctx: ViewContext) -> Self {
        Self { format, ctx }
    }

    pub fn render<T>(&self, data: &T) -> Result<()>
    where
        T: Serialize + CreateView,
    {
        print!("{}", self.render_to_string(data)?);
        Ok(())
    }

    pub fn render_to_string<T>(&self, data: &T) -> Result<String>
    where
        T: Serialize + CreateView,
    {
        match self.format {
            OutputFormat::Json => {
                let mut out = serde_json::to_string_pretty(&JsonOut { ok: true, data })?;
                out.push('\n');
                Ok(out)
            }
            OutputFormat::Plain => data.render_text(&self.ctx),
        }
    }
}
