//! Tab-separated flow dataset parsing
//!
//! Datasets arrive as a TSV block whose header names the `source`, `target`
//! and `value` columns. Columns are located by header name, so column order
//! does not matter and extra columns are ignored. Any malformed row fails
//! the whole parse; no partial record list is ever returned.

use crate::error::{FlowError, FlowResult};
use crate::types::FlowRecord;
use tracing::debug;

/// Positions of the three required columns inside a header row.
struct ColumnLayout {
    source: usize,
    target: usize,
    value: usize,
}

impl ColumnLayout {
    fn from_header(header: &str, line: usize) -> FlowResult<Self> {
        let names: Vec<&str> = header.split('\t').map(str::trim).collect();
        let position = |column: &str| -> FlowResult<usize> {
            names
                .iter()
                .position(|name| *name == column)
                .ok_or_else(|| FlowError::Parse {
                    line,
                    message: format!("missing column '{column}' in header"),
                })
        };

        Ok(Self {
            source: position("source")?,
            target: position("target")?,
            value: position("value")?,
        })
    }

    fn record_from_row(&self, row: &str, line: usize) -> FlowResult<FlowRecord> {
        let fields: Vec<&str> = row.split('\t').map(str::trim).collect();

        let source = field(&fields, self.source, "source", line)?;
        if source.is_empty() {
            return Err(FlowError::Parse {
                line,
                message: "empty source entity".to_string(),
            });
        }

        let target = field(&fields, self.target, "target", line)?;
        if target.is_empty() {
            return Err(FlowError::Parse {
                line,
                message: "empty target entity".to_string(),
            });
        }

        let raw_value = field(&fields, self.value, "value", line)?;
        let value: f64 = raw_value.parse().map_err(|_| FlowError::Parse {
            line,
            message: format!("value '{raw_value}' is not a number"),
        })?;
        if !value.is_finite() {
            return Err(FlowError::Parse {
                line,
                message: format!("value '{raw_value}' is not finite"),
            });
        }
        if value < 0.0 {
            return Err(FlowError::Parse {
                line,
                message: format!("negative value '{raw_value}'"),
            });
        }

        Ok(FlowRecord {
            source: source.to_string(),
            target: target.to_string(),
            value,
        })
    }
}

fn field<'a>(fields: &[&'a str], index: usize, column: &str, line: usize) -> FlowResult<&'a str> {
    fields.get(index).copied().ok_or_else(|| FlowError::Parse {
        line,
        message: format!(
            "row has {} fields, column '{column}' is missing",
            fields.len()
        ),
    })
}

/// Parse a tab-separated flow dataset into records, preserving row order.
pub fn parse_tsv(input: &str) -> FlowResult<Vec<FlowRecord>> {
    let mut rows = input
        .lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line))
        .filter(|(_, line)| !line.trim().is_empty());

    let (header_line, header) = rows.next().ok_or_else(|| FlowError::Parse {
        line: 1,
        message: "dataset is empty".to_string(),
    })?;
    let layout = ColumnLayout::from_header(header, header_line)?;

    let mut records = Vec::new();
    for (line, row) in rows {
        records.push(layout.record_from_row(row, line)?);
    }

    debug!(records = records.len(), "parsed flow dataset");
    Ok(records)
}
