use anyhow::Result;
use owo_colors::{AnsiColors, OwoColorize};
use std::fmt::Write;
use vitrine_format::{BadgeStyle, PriceDisplay};
use vitrine_types::{PromotionPhase, truncate};

use super::renderer::{CreateView, ViewContext};
use super::view_models::{
    BadgeViewModel, BasketKind, BasketSummaryViewModel, ConfigInitViewModel, ConfigViewModel,
    ConversionDirection, ConversionViewModel, DateViewModel, PathViewModel, ProductCardViewModel,
    PromotionViewModel, StarsViewModel,
};

const ITEM_WIDTH: usize = 32;

fn badge_color(style: BadgeStyle) -> AnsiColors {
    match style {
        BadgeStyle::Yellow => AnsiColors::Yellow,
        BadgeStyle::Blue => AnsiColors::Blue,
        BadgeStyle::Indigo => AnsiColors::BrightBlue,
        BadgeStyle::Purple => AnsiColors::Magenta,
        BadgeStyle::Green => AnsiColors::Green,
        BadgeStyle::Red => AnsiColors::Red,
        BadgeStyle::Gray => AnsiColors::BrightBlack,
    }
}

fn paint_badge(label: &str, style: BadgeStyle, ctx: &ViewContext) -> String {
    if ctx.color {
        label.color(badge_color(style)).bold().to_string()
    } else {
        label.to_string()
    }
}

impl CreateView for PriceDisplay {
    fn render_text(&self, _ctx: &ViewContext) -> Result<String> {
        Ok(format!("{}\n", self.formatted))
    }
}

impl CreateView for ConversionViewModel {
    fn render_text(&self, _ctx: &ViewContext) -> Result<String> {
        Ok(match self.direction {
            ConversionDirection::ToMajor => format!("{:.2}\n", self.major),
            ConversionDirection::ToMinor => format!("{}\n", self.cents),
        })
    }
}

impl CreateView for DateViewModel {
    fn render_text(&self, _ctx: &ViewContext) -> Result<String> {
        Ok(format!("{}\n", self.rendered))
    }
}

impl CreateView for BadgeViewModel {
    fn render_text(&self, ctx: &ViewContext) -> Result<String> {
        let label = paint_badge(&self.status.to_uppercase(), self.style, ctx);
        Ok(format!("{}\t{}\t{}\n", label, self.style, self.css_class))
    }
}

impl CreateView for StarsViewModel {
    fn render_text(&self, ctx: &ViewContext) -> Result<String> {
        Ok(format!(
            "{}\n",
            self.stars.render(&ctx.formatter.options().stars)
        ))
    }
}

impl CreateView for ProductCardViewModel {
    fn render_text(&self, ctx: &ViewContext) -> Result<String> {
        let fmt = &ctx.formatter;
        let mut out = String::new();

        match self.vintage {
            Some(vintage) => writeln!(out, "{} {}", self.name, vintage)?,
            None => writeln!(out, "{}", self.name)?,
        }

        let mut details: Vec<String> = Vec::new();
        details.extend(self.producer.clone());
        details.extend(self.region.clone());
        details.push(format!("{} ml", self.volume_ml));
        if let Some(alcohol) = self.alcohol {
            details.push(format!("{}% vol", alcohol));
        }
        writeln!(out, "  {}", details.join(" · "))?;
        writeln!(out, "  SKU:     {}", self.sku)?;

        let current = fmt.price(self.current_price_cents, &self.currency)?;
        match self.discount_percentage {
            Some(pct) => {
                let base = fmt.price(self.base_price_cents, &self.currency)?;
                let base = if ctx.color {
                    base.strikethrough().to_string()
                } else {
                    base
                };
                writeln!(out, "  Price:   {}  (was {}, -{}%)", current, base, pct)?;
            }
            None => writeln!(out, "  Price:   {}", current)?,
        }

        if self.in_stock {
            writeln!(out, "  Stock:   {} in stock", self.stock)?;
        } else {
            let label = paint_badge("Out of stock", BadgeStyle::Red, ctx);
            writeln!(out, "  Stock:   {}", label)?;
        }

        match self.average_rating {
            Some(avg) => writeln!(
                out,
                "  Rating:  {} {:.1}/5 ({} review{})",
                fmt.stars(avg),
                avg,
                self.review_count,
                if self.review_count == 1 { "" } else { "s" }
            )?,
            None => writeln!(out, "  Rating:  No reviews yet")?,
        }

        if let Some(category) = &self.primary_category {
            writeln!(out, "  Category: {}", category)?;
        }
        writeln!(out, "  Listed:  {}", fmt.date(&self.created_at)?)?;

        Ok(out)
    }
}

impl CreateView for BasketSummaryViewModel {
    fn render_text(&self, ctx: &ViewContext) -> Result<String> {
        let fmt = &ctx.formatter;
        let mut out = String::new();

        let (title, created_label) = match self.kind {
            BasketKind::Order => ("Order", "Placed:"),
            BasketKind::Cart => ("Cart", "Created:"),
        };
        writeln!(
            out,
            "{} {}  {}",
            title,
            self.reference,
            paint_badge(&self.status.to_uppercase(), self.badge, ctx)
        )?;
        writeln!(out, "  {:<9} {}", created_label, fmt.date_time(&self.created_at)?)?;
        writeln!(out, "  {:<9} {}", "Customer:", self.user_id)?;
        writeln!(out)?;

        if self.lines.is_empty() {
            writeln!(out, "  (empty)")?;
            return Ok(out);
        }

        writeln!(out, "  {:>4}  {:<width$}  {:>14}", "QTY", "ITEM", "AMOUNT", width = ITEM_WIDTH)?;
        for line in &self.lines {
            let name = line.product_name.as_deref().unwrap_or(&line.product_id);
            writeln!(
                out,
                "  {:>4}  {:<width$}  {:>14}",
                line.quantity,
                truncate(name, ITEM_WIDTH),
                fmt.price(line.price_cents, &self.currency)?,
                width = ITEM_WIDTH
            )?;
        }
        writeln!(out, "  {}", "-".repeat(4 + 2 + ITEM_WIDTH + 2 + 14))?;
        writeln!(
            out,
            "  {} item{}, total {}",
            self.total_items,
            if self.total_items == 1 { "" } else { "s" },
            fmt.price(self.total_amount_cents, &self.currency)?
        )?;

        Ok(out)
    }
}

impl CreateView for PromotionViewModel {
    fn render_text(&self, ctx: &ViewContext) -> Result<String> {
        let fmt = &ctx.formatter;
        let mut out = String::new();

        let (phase, style) = match self.phase {
            PromotionPhase::Upcoming => ("upcoming", BadgeStyle::Blue),
            PromotionPhase::Active => ("active", BadgeStyle::Green),
            PromotionPhase::Expired => ("expired", BadgeStyle::Gray),
        };
        writeln!(out, "{}  [{}]", self.title, paint_badge(phase, style, ctx))?;

        let window = format!(
            "from {} to {}",
            fmt.calendar_date(self.start_date),
            fmt.calendar_date(self.end_date)
        );
        match self.discount_percentage {
            Some(pct) => writeln!(out, "  -{}%  {}", pct, window)?,
            None => writeln!(out, "  {}", window)?,
        }
        writeln!(out, "  Products: {}", self.product_count)?;
        if let Some(description) = &self.description {
            writeln!(out, "  {}", description)?;
        }
        writeln!(
            out,
            "  Checked on {}",
            fmt.calendar_date(self.reference_date)
        )?;

        Ok(out)
    }
}

impl CreateView for ConfigViewModel {
    fn render_text(&self, _ctx: &ViewContext) -> Result<String> {
        let mut out = String::new();
        let suffix = if self.exists { "" } else { " (not created yet)" };
        writeln!(out, "{:<15}{}{}", "config:", self.path, suffix)?;
        writeln!(out, "{:<15}{}", "locale:", self.locale)?;
        writeln!(out, "{:<15}{}", "currency:", self.currency)?;
        writeln!(out, "{:<15}{}", "timezone:", self.timezone)?;
        writeln!(out, "{:<15}{}", "invalid_dates:", self.invalid_dates)?;
        Ok(out)
    }
}

impl CreateView for ConfigInitViewModel {
    fn render_text(&self, _ctx: &ViewContext) -> Result<String> {
        let verb = if self.overwritten { "Overwrote" } else { "Wrote" };
        Ok(format!("{} default configuration to {}\n", verb, self.path))
    }
}

impl CreateView for PathViewModel {
    fn render_text(&self, _ctx: &ViewContext) -> Result<String> {
        Ok(format!("{}\n", self.path))
    }
}
