//! Splits comma separated text into rows of fields.

use miette::NamedSource;

use crate::error::{Error, Result};

/// A row is every field of one line, in order. A blank line is a row with no field.
pub type Row = Vec<String>;

/// Read every row of `text`. `name` only shows up in diagnostics.
///
/// A `"` opens a quoted field only at the start of a field; anywhere else it
/// is kept as is. `\n`, `\r\n` and a lone `\r` all end a line.
pub fn read_rows(name: &str, text: &str) -> Result<Vec<Row>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|e| invalid_csv(name, text, &e))?;

        // The reader drops blank lines, put them back so that a row index is
        // the line the row starts on.
        if let Some(position) = record.position() {
            while (rows.len() as u64) + 1 < position.line() {
                rows.push(Row::new());
            }
        }
        rows.push(record.iter().map(str::to_string).collect());
    }

    Ok(rows)
}

fn invalid_csv(name: &str, text: &str, error: &csv::Error) -> Error {
    let offset = error
        .position()
        .map_or(0, |position| position.byte() as usize)
        .min(text.len());
    Error::InvalidCsv {
        reason: error.to_string(),
        src: NamedSource::new(name, text.to_string()),
        span: (offset, 0).into(),
    }
}
