//! Output formatting for subnet reports.
//!
//! - [`terminal`] - field-by-field terminal display with colors
//! - [`text`] - plain-text rendering and file export

pub mod terminal;
mod text;

pub use terminal::print_report;
pub use text::{export_report, render_report};
