//! Plain-text table rendering
//!
//! ```text
//! A ∧ B
//! | A | B | A ∧ B |
//! |---|---|-------|
//! | T | T | T     |
//! | T | F | F     |
//! ```
//!
//! Every column is left-aligned and padded to its widest entry, header
//! included. Widths are counted in characters so the connective glyphs line
//! up. Colour, when enabled, is applied after padding.

use crate::table::engine::TruthTable;
use crate::table::errors::TableError;
use crate::ui::theme::DEFAULT_THEME;
use crossterm::style::{style, Color, Stylize};
use std::io::{self, Write};

/// Rendering switches taken from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Emit ANSI colour codes
    pub color: bool,
    /// Print the source expression above the table
    pub title: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            color: false,
            title: true,
        }
    }
}

/// Cell text for a boolean
pub fn cell(value: bool) -> &'static str {
    if value {
        "T"
    } else {
        "F"
    }
}

/// Widest entry of each column, header included, in characters
pub fn column_widths(table: &TruthTable) -> Vec<usize> {
    table
        .headers()
        .iter()
        .enumerate()
        .map(|(idx, header)| {
            table
                .rows()
                .iter()
                .map(|row| cell(row[idx]).chars().count())
                .chain(std::iter::once(header.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect()
}

fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.chars().count());
    format!("{}{}", text, " ".repeat(fill))
}

fn paint(text: String, color: Color, options: &RenderOptions) -> String {
    if options.color {
        style(text).with(color).to_string()
    } else {
        text
    }
}

fn write_row<W: Write>(
    out: &mut W,
    cells: impl Iterator<Item = String>,
    options: &RenderOptions,
) -> io::Result<()> {
    let bar = |s: &str| paint(s.to_string(), DEFAULT_THEME.border, options);
    let joined = cells.collect::<Vec<_>>().join(bar(" | ").as_str());
    writeln!(out, "{}{}{}", bar("| "), joined, bar(" |"))
}

/// Write `table` to `out`.
pub fn render_table<W: Write>(
    out: &mut W,
    table: &TruthTable,
    options: &RenderOptions,
) -> io::Result<()> {
    let widths = column_widths(table);

    if options.title {
        writeln!(
            out,
            "{}",
            paint(table.expression().to_string(), DEFAULT_THEME.title, options)
        )?;
    }

    let headers = table
        .headers()
        .iter()
        .zip(&widths)
        .map(|(header, &width)| {
            let padded = pad(header, width);
            if options.color {
                style(padded).with(DEFAULT_THEME.header).bold().to_string()
            } else {
                padded
            }
        });
    write_row(out, headers, options)?;

    let dashes: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();
    writeln!(
        out,
        "{}",
        paint(
            format!("|-{}-|", dashes.join("-|-")),
            DEFAULT_THEME.border,
            options
        )
    )?;

    for row in table.rows() {
        let cells = row.iter().zip(&widths).map(|(&value, &width)| {
            let color = if value {
                DEFAULT_THEME.truth
            } else {
                DEFAULT_THEME.falsity
            };
            paint(pad(cell(value), width), color, options)
        });
        write_row(out, cells, options)?;
    }

    Ok(())
}

/// Render into a `String`
pub fn render_to_string(table: &TruthTable, options: &RenderOptions) -> io::Result<String> {
    let mut buf = Vec::new();
    render_table(&mut buf, table, options)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Report a rejected line: `'<expression>' <Stage> error: <message>`
pub fn report_error<W: Write>(
    out: &mut W,
    expression: &str,
    err: &TableError,
    options: &RenderOptions,
) -> io::Result<()> {
    let message = format!("{} error: {}", err.stage(), err);
    writeln!(
        out,
        "{} {}",
        paint(format!("'{}'", expression), DEFAULT_THEME.location, options),
        paint(message, DEFAULT_THEME.error, options)
    )
}
