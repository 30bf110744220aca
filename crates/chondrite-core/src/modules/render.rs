use super::table::CompositionTable;
use crate::domain::Element;
use std::fmt::{Display, Formatter};

pub const DEFAULT_PRECISION: usize = 6;

const COLUMN_GAP: &str = "  ";

pub fn format_fixed_f64(value: f64, width: usize, precision: usize) -> String {
    format!(
        "{value:>width$.precision$}",
        width = width,
        precision = precision
    )
}

/// Fixed-width text grid: one header line of class names, then one line per
/// element row with the row label left-aligned and values right-aligned.
pub fn render_table(table: &CompositionTable, precision: usize) -> String {
    let labels = table.row_labels();
    let label_width = labels.iter().map(String::len).max().unwrap_or(0);

    let widths: Vec<usize> = table
        .columns()
        .iter()
        .map(|column| {
            column
                .values
                .iter()
                .map(|(_, value)| format_fixed_f64(value, 0, precision).len())
                .chain(std::iter::once(column.name.len()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut rendered = String::new();
    rendered.push_str(&" ".repeat(label_width));
    for (column, width) in table.columns().iter().zip(&widths) {
        rendered.push_str(COLUMN_GAP);
        rendered.push_str(&format!("{:>width$}", column.name, width = *width));
    }
    rendered.push('\n');

    for (label, element) in labels.iter().zip(Element::ALL) {
        rendered.push_str(&format!("{:<width$}", label, width = label_width));
        for (column, width) in table.columns().iter().zip(&widths) {
            rendered.push_str(COLUMN_GAP);
            rendered.push_str(&format_fixed_f64(column.values[element], *width, precision));
        }
        rendered.push('\n');
    }

    rendered
}

impl Display for CompositionTable {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&render_table(self, DEFAULT_PRECISION))
    }
}
