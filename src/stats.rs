//! Reductions over numeric series and over daily records.
//!
//! Scalar extremes compare values rounded to one decimal place and the last of
//! several equal values wins. Record extremes compare raw Celsius values and the
//! first of several equal values wins.

use crate::error::{Error, Result};
use crate::record::DailyRecord;
use crate::units::{celsius, round_tenth};

/// An extremum of a series and the index it was found at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aggregate {
    pub value: f64,
    pub position: usize,
}

/// An extremum over records, in unrounded Celsius, with the date it occurred on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extreme<'a> {
    pub value: f64,
    pub date: &'a str,
}

pub fn mean<T: Copy + Into<f64>>(series: &[T]) -> Result<f64> {
    if series.is_empty() {
        return Err(Error::EmptyInput { operation: "mean" });
    }
    let sum: f64 = series.iter().map(|&item| item.into()).sum();
    Ok(sum / series.len() as f64)
}

/// Coerce textual numbers to a series.
pub fn parse_series<S: AsRef<str>>(series: &[S]) -> Result<Vec<f64>> {
    series
        .iter()
        .map(|item| crate::units::parse_number(item.as_ref()))
        .collect()
}

/// Smallest value once rounded to one decimal place. `None` for an empty series.
pub fn find_min<T: Copy + Into<f64>>(series: &[T]) -> Option<Aggregate> {
    find_extreme(series, |candidate, current| candidate <= current)
}

/// Largest value once rounded to one decimal place. `None` for an empty series.
pub fn find_max<T: Copy + Into<f64>>(series: &[T]) -> Option<Aggregate> {
    find_extreme(series, |candidate, current| candidate >= current)
}

fn find_extreme<T: Copy + Into<f64>>(
    series: &[T],
    replaces: impl Fn(f64, f64) -> bool,
) -> Option<Aggregate> {
    let (&first, rest) = series.split_first()?;
    let mut best = Aggregate {
        value: round_tenth(first.into()),
        position: 0,
    };

    for (idx, &item) in rest.iter().enumerate() {
        let value = round_tenth(item.into());
        if replaces(value, best.value) {
            best = Aggregate {
                value,
                position: idx + 1,
            };
        }
    }

    Some(best)
}

/// Coldest low reading, converted to Celsius.
pub fn find_min_record(records: &[DailyRecord]) -> Result<Extreme<'_>> {
    find_record_extreme(records, "minimum", |record| record.low, |a, b| a < b)
}

/// Warmest high reading, converted to Celsius.
pub fn find_max_record(records: &[DailyRecord]) -> Result<Extreme<'_>> {
    find_record_extreme(records, "maximum", |record| record.high, |a, b| a > b)
}

fn find_record_extreme<'a>(
    records: &'a [DailyRecord],
    operation: &'static str,
    reading: impl Fn(&DailyRecord) -> i32,
    replaces: impl Fn(f64, f64) -> bool,
) -> Result<Extreme<'a>> {
    let (first, rest) = records
        .split_first()
        .ok_or(Error::EmptyInput { operation })?;
    let mut best = Extreme {
        value: celsius(reading(first).into()),
        date: &first.date,
    };

    for record in rest {
        let value = celsius(reading(record).into());
        if replaces(value, best.value) {
            best = Extreme {
                value,
                date: &record.date,
            };
        }
    }

    Ok(best)
}
