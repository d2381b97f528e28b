use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("Invalid input: `{value}` is not a finite number")]
    #[diagnostic(code(meteo::invalid_input))]
    InvalidInput { value: String },

    #[error("Malformed row {row}: {reason}")]
    #[diagnostic(
        code(meteo::malformed_row),
        help("data rows must look like `date,low,high` with whole-degree Fahrenheit readings")
    )]
    MalformedRow { row: usize, reason: String },

    #[error("Cannot compute {operation} of an empty collection")]
    #[diagnostic(code(meteo::empty_input))]
    EmptyInput { operation: &'static str },

    #[error("Invalid date `{date}`")]
    #[diagnostic(code(meteo::invalid_date), help("dates are expected as `YYYY-MM-DD`"))]
    InvalidDate { date: String },

    #[error("Could not read CSV input: {reason}")]
    #[diagnostic(code(meteo::invalid_csv))]
    InvalidCsv {
        reason: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("here")]
        span: SourceSpan,
    },

    #[error("Could not read `{}`", path.display())]
    #[diagnostic(code(meteo::io))]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl Error {
    pub(crate) fn malformed_row(row: usize, reason: impl Into<String>) -> Self {
        Self::MalformedRow {
            row,
            reason: reason.into(),
        }
    }
}
