//! Terminal output for truth tables.
//!
//! - **[`table`]**: plain-text table rendering and per-line error reports
//! - **[`theme`]**: centralized color palette used when colour is enabled
//!
//! Colour goes through [crossterm](https://docs.rs/crossterm) styling and is
//! off unless the caller asks for it.

pub mod table;
pub mod theme;

pub use table::{render_table, report_error, RenderOptions};
