//! Terminal output for subnet reports.
//!
//! Prints one `Label : value` line per report field, labels padded to the
//! widest label so values line up.

use colored::{ColoredString, Colorize};

use crate::models::SubnetReport;

/// Pad a label to the given width, left-aligned.
pub fn pad_label(label: &str, width: usize) -> String {
    format!("{label:<width$}")
}

/// Pick the display color for a field value by its label: identity fields
/// in blue, boundary addresses in red, the historical class dimmed.
fn colorize_value(label: &str, value: &str) -> ColoredString {
    if label.contains("Class") {
        value.dimmed()
    } else if label.contains("Broadcast") || label.contains("Range") {
        value.red().bold()
    } else if label.contains("ID")
        || label.contains("Prefix")
        || label.contains("Mask")
        || label.contains("Version")
    {
        value.blue().bold()
    } else {
        value.bold()
    }
}

/// Print the report field-by-field to stdout.
pub fn print_report(report: &SubnetReport) {
    let fields = report.fields();
    let width = fields.iter().map(|(label, _)| label.len()).max().unwrap_or(0);

    for (label, value) in &fields {
        println!(
            "{} : {}",
            pad_label(label, width),
            colorize_value(label, value)
        );
    }
}
