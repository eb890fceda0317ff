//! Markdown rendering of channel catalogs

use std::fmt::Write;

use crate::models::{Category, Channel, Column, RenderConfig};

/// Cell text used for fields a channel does not define
pub const PLACEHOLDER: &str = "-";

fn push_row<'a, I>(out: &mut String, cells: I)
where
    I: IntoIterator<Item = &'a str>,
{
    out.push('|');
    for cell in cells {
        out.push(' ');
        out.push_str(cell);
        out.push_str(" |");
    }
    out.push('\n');
}

/// Render one table: header row, separator row, one row per channel and a
/// trailing blank line
pub fn render_table(columns: &[Column], channels: &[Channel]) -> String {
    let mut out = String::new();

    push_row(&mut out, columns.iter().map(|c| c.header));
    push_row(&mut out, columns.iter().map(|_| PLACEHOLDER));

    for channel in channels {
        push_row(
            &mut out,
            columns
                .iter()
                .map(|c| channel.field(c.field).unwrap_or(PLACEHOLDER)),
        );
    }

    out.push('\n');
    out
}

/// Render a complete catalog document
///
/// A category's own table is only emitted when it has direct channels;
/// subcategory tables are always emitted.
pub fn render_document(config: &RenderConfig, categories: &[Category]) -> String {
    let mut out = String::new();
    let _ = write!(out, "# {}\n\n", config.title);

    for category in categories {
        let _ = write!(out, "## {}\n\n", category.name);
        if !category.channels.is_empty() {
            out.push_str(&render_table(config.columns, &category.channels));
        }
        for sub in &category.subcategories {
            let _ = write!(out, "### {}\n\n", sub.name);
            out.push_str(&render_table(config.columns, &sub.channels));
        }
    }

    out
}
