//! Fahrenheit to Celsius conversion and temperature display.
//!
//! Every rounding in the crate goes through [`round_tenth`], which rounds to one
//! decimal place with ties going to the even digit.

use crate::error::{Error, Result};

/// Suffix appended to every rendered temperature.
pub const DEGREE_SYMBOL: &str = "\u{b0}C";

/// Round to one decimal place, ties to even.
pub fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round_ties_even() / 10.0
}

/// Raw conversion, no rounding. Reports compare and average on these values.
pub(crate) fn celsius(fahrenheit: f64) -> f64 {
    ((fahrenheit - 32.0) * 5.0) / 9.0
}

/// Convert a Fahrenheit temperature to Celsius, rounded to one decimal place.
pub fn fahrenheit_to_celsius(fahrenheit: f64) -> Result<f64> {
    if !fahrenheit.is_finite() {
        return Err(Error::InvalidInput {
            value: fahrenheit.to_string(),
        });
    }
    Ok(round_tenth(celsius(fahrenheit)))
}

/// Same as [`fahrenheit_to_celsius`] for a temperature still in its textual form.
pub fn fahrenheit_str_to_celsius(fahrenheit: &str) -> Result<f64> {
    fahrenheit_to_celsius(parse_number(fahrenheit)?)
}

/// Parse a finite number, ignoring surrounding whitespace.
pub fn parse_number(s: &str) -> Result<f64> {
    match s.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(Error::InvalidInput {
            value: s.to_string(),
        }),
    }
}

/// Render a temperature followed by [`DEGREE_SYMBOL`].
///
/// Nothing is rounded here. Integral values keep a trailing `.0` so that `20.0`
/// is shown as `20.0°C` rather than `20°C`.
pub fn format_temperature(temp: f64) -> String {
    if temp.is_finite() && temp.fract() == 0.0 {
        format!("{temp:.1}{DEGREE_SYMBOL}")
    } else {
        format!("{temp}{DEGREE_SYMBOL}")
    }
}
