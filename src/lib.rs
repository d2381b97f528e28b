use std::{path::Path, str::FromStr};

mod error;
pub mod record;
pub mod report;
pub mod rows;
pub mod stats;
pub mod units;

pub use error::{Error, Result};
pub use record::{load_records, DailyRecord};
pub use report::{convert_date, generate_daily_summary, generate_summary, Overview};
pub use stats::{
    find_max, find_max_record, find_min, find_min_record, mean, parse_series, Aggregate, Extreme,
};
pub use units::{
    fahrenheit_str_to_celsius, fahrenheit_to_celsius, format_temperature, DEGREE_SYMBOL,
};

/// Every day of a CSV file, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Forecast {
    pub days: Vec<DailyRecord>,
}

impl Forecast {
    pub fn summary(&self) -> Result<String> {
        generate_summary(&self.days)
    }

    pub fn daily_summary(&self) -> Result<String> {
        generate_daily_summary(&self.days)
    }

    /// Parse `text`, naming it `name` in diagnostics.
    pub fn parse_named(name: &str, text: &str) -> Result<Self> {
        let rows = rows::read_rows(name, text)?;
        Ok(Self {
            days: load_records(rows)?,
        })
    }
}

impl FromStr for Forecast {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_named("input", s)
    }
}

/// Read and parse a CSV file of daily readings.
pub fn load_data_from_csv(path: impl AsRef<Path>) -> Result<Vec<DailyRecord>> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let forecast = Forecast::parse_named(&path.display().to_string(), &text)?;
    Ok(forecast.days)
}
