use crate::error::{Error, Result};

/// One day of readings, in whole-degree Fahrenheit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyRecord {
    /// ISO `YYYY-MM-DD` date, kept as written in the input. It is only checked
    /// once a report needs to display it.
    pub date: String,
    pub low: i32,
    pub high: i32,
}

impl DailyRecord {
    pub fn new(date: impl Into<String>, low: i32, high: i32) -> Self {
        Self {
            date: date.into(),
            low,
            high,
        }
    }
}

/// Turn raw rows into records.
///
/// Rows without any field are ignored and the first remaining row is the header.
/// Fields past the third one are ignored. The first malformed data row aborts
/// the whole load.
pub fn load_records<R>(rows: impl IntoIterator<Item = R>) -> Result<Vec<DailyRecord>>
where
    R: IntoIterator,
    R::Item: AsRef<str>,
{
    let mut records = Vec::new();
    let mut header_seen = false;

    for (idx, row) in rows.into_iter().enumerate() {
        let row: Vec<R::Item> = row.into_iter().collect();
        let line = idx + 1;

        if row.is_empty() {
            log::trace!("skipping blank row {line}");
            continue;
        }
        if !header_seen {
            header_seen = true;
            log::debug!("skipping header row {line}");
            continue;
        }

        records.push(parse_record(line, &row)?);
    }

    log::debug!("loaded {} daily records", records.len());
    Ok(records)
}

fn parse_record<F: AsRef<str>>(line: usize, row: &[F]) -> Result<DailyRecord> {
    let [date, low, high, ..] = row else {
        return Err(Error::malformed_row(
            line,
            format!("expected 3 fields, found {}", row.len()),
        ));
    };

    Ok(DailyRecord {
        date: date.as_ref().to_string(),
        low: parse_reading(line, "low", low.as_ref())?,
        high: parse_reading(line, "high", high.as_ref())?,
    })
}

fn parse_reading(line: usize, name: &str, field: &str) -> Result<i32> {
    field.trim().parse().map_err(|_| {
        Error::malformed_row(
            line,
            format!("{name} reading `{field}` is not a whole number"),
        )
    })
}
