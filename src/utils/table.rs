//! Plain text tables for the detail views.

use crate::utils::formatting::pad_right;
use unicode_width::UnicodeWidthStr;

pub struct Column {
    pub header: String,
    pub width: usize,
    /// Right-align cells, for numbers.
    pub numeric: bool,
}

impl Column {
    pub fn new(header: &str) -> Self {
        Self {
            header: header.to_string(),
            width: UnicodeWidthStr::width(header),
            numeric: false,
        }
    }

    pub fn numeric(header: &str) -> Self {
        Self {
            numeric: true,
            ..Self::new(header)
        }
    }

    fn cell(&self, text: &str) -> String {
        if self.numeric {
            format!("{:>width$}", text, width = self.width)
        } else {
            pad_right(text, self.width)
        }
    }
}

pub struct Table {
    columns: Vec<Column>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Columns grow to fit the widest cell.
    pub fn add_row(&mut self, row: Vec<String>) {
        for (col, cell) in self.columns.iter_mut().zip(&row) {
            col.width = col.width.max(UnicodeWidthStr::width(cell.as_str()));
        }
        self.rows.push(row);
    }

    pub fn render(&self) -> String {
        let header: Vec<String> = self.columns.iter().map(|c| c.cell(&c.header)).collect();
        let rule: Vec<String> = self.columns.iter().map(|c| "-".repeat(c.width)).collect();

        let mut lines = vec![header.join("  "), rule.join("  ")];
        for row in &self.rows {
            let cells: Vec<String> = self
                .columns
                .iter()
                .enumerate()
                .map(|(i, c)| c.cell(row.get(i).map(String::as_str).unwrap_or("")))
                .collect();
            lines.push(cells.join("  "));
        }

        lines.join("\n")
    }
}
