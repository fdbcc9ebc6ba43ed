//! Common test utilities
//!
//! Builders for small in-memory tables in loader text format.

#![allow(dead_code)]

use energy_analytics::{load_table, SeriesTable, DEFAULT_MAX_ROWS};

/// Render columns as loader text: `,name1,name2` followed by `dN,v1,v2` rows
pub fn table_text(columns: &[(&str, &[f64])]) -> String {
    let mut text = String::new();
    for (name, _) in columns {
        text.push(',');
        text.push_str(name);
    }
    text.push('\n');

    let rows = columns.iter().map(|(_, v)| v.len()).max().unwrap_or(0);
    for i in 0..rows {
        text.push_str(&format!("d{}", i + 1));
        for (_, values) in columns {
            text.push(',');
            if let Some(v) = values.get(i) {
                text.push_str(&v.to_string());
            }
        }
        text.push('\n');
    }
    text
}

/// Table with the given columns
pub fn table_of(columns: &[(&str, &[f64])]) -> SeriesTable {
    load_table(&table_text(columns), DEFAULT_MAX_ROWS)
}

/// Table with one series named "S"
pub fn single_series(values: &[f64]) -> SeriesTable {
    table_of(&[("S", values)])
}
