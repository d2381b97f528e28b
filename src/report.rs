//! Text reports over a list of daily records.

use time::{macros::format_description, Date};

use crate::error::{Error, Result};
use crate::record::DailyRecord;
use crate::stats::{find_max_record, find_min_record, mean, Extreme};
use crate::units::{celsius, fahrenheit_to_celsius, format_temperature, round_tenth};

/// Turn an ISO `YYYY-MM-DD` date into something like `Tuesday 06 July 2021`.
pub fn convert_date(iso: &str) -> Result<String> {
    let invalid = || Error::InvalidDate {
        date: iso.to_string(),
    };
    let date = Date::parse(iso, format_description!("[year]-[month]-[day]")).map_err(|_| invalid())?;
    date.format(format_description!(
        "[weekday] [day] [month repr:long] [year]"
    ))
    .map_err(|_| invalid())
}

/// Figures behind the overview report. Temperatures are unrounded Celsius.
#[derive(Debug, Clone, PartialEq)]
pub struct Overview<'a> {
    pub day_count: usize,
    pub min: Extreme<'a>,
    pub max: Extreme<'a>,
    pub mean_low: f64,
    pub mean_high: f64,
}

impl<'a> Overview<'a> {
    pub fn from_records(records: &'a [DailyRecord]) -> Result<Self> {
        if records.is_empty() {
            return Err(Error::EmptyInput {
                operation: "summary",
            });
        }

        // Convert each reading before averaging, not the other way around.
        let lows: Vec<f64> = records.iter().map(|r| celsius(r.low.into())).collect();
        let highs: Vec<f64> = records.iter().map(|r| celsius(r.high.into())).collect();

        Ok(Self {
            day_count: records.len(),
            min: find_min_record(records)?,
            max: find_max_record(records)?,
            mean_low: mean(&lows)?,
            mean_high: mean(&highs)?,
        })
    }
}

fn display(celsius: f64) -> String {
    format_temperature(round_tenth(celsius))
}

/// Overview of the whole period: extremes with their dates and average lows and highs.
pub fn generate_summary(records: &[DailyRecord]) -> Result<String> {
    let overview = Overview::from_records(records)?;
    log::debug!("rendering overview of {} days", overview.day_count);

    Ok(format!(
        "{} Day Overview\n  The lowest temperature will be {}, and will occur on {}.\n  The highest temperature will be {}, and will occur on {}.\n  The average low this week is {}.\n  The average high this week is {}.\n",
        overview.day_count,
        display(overview.min.value),
        convert_date(overview.min.date)?,
        display(overview.max.value),
        convert_date(overview.max.date)?,
        display(overview.mean_low),
        display(overview.mean_high),
    ))
}

/// One block per record, separated by blank lines. No record, no output.
pub fn generate_daily_summary(records: &[DailyRecord]) -> Result<String> {
    log::debug!("rendering daily summary of {} days", records.len());

    let mut output = String::new();
    for record in records {
        let low = fahrenheit_to_celsius(record.low.into())?;
        let high = fahrenheit_to_celsius(record.high.into())?;
        output.push_str(&format!(
            "---- {} ----\n  Minimum Temperature: {}\n  Maximum Temperature: {}\n\n",
            convert_date(&record.date)?,
            format_temperature(low),
            format_temperature(high),
        ));
    }
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn july() -> Vec<DailyRecord> {
        vec![
            DailyRecord::new("2021-07-02", 49, 67),
            DailyRecord::new("2021-07-03", 57, 68),
        ]
    }

    #[test]
    fn dates_are_spelled_out() {
        assert_eq!(convert_date("2021-07-06").unwrap(), "Tuesday 06 July 2021");
        assert_eq!(convert_date("2020-02-29").unwrap(), "Saturday 29 February 2020");
    }

    #[test]
    fn bad_dates_are_rejected() {
        for date in ["2021-02-30", "06/07/2021", "", "2021-7-6"] {
            match convert_date(date) {
                Err(Error::InvalidDate { date: d }) => assert_eq!(d, date),
                other => panic!("unexpected result for {date:?}: {other:?}"),
            }
        }
    }

    #[test]
    fn overview_figures() {
        let records = july();
        let overview = Overview::from_records(&records).unwrap();
        assert_eq!(overview.day_count, 2);
        assert_eq!(overview.min.date, "2021-07-02");
        assert_eq!(overview.max.date, "2021-07-03");
        assert!((overview.mean_low - 35.0 / 3.0).abs() < 1e-9);
        assert!((overview.mean_high - 355.0 / 18.0).abs() < 1e-9);
    }

    #[test]
    fn summary() {
        assert_eq!(
            generate_summary(&july()).unwrap(),
            "2 Day Overview\n  The lowest temperature will be 9.4°C, and will occur on Friday 02 July 2021.\n  The highest temperature will be 20.0°C, and will occur on Saturday 03 July 2021.\n  The average low this week is 11.7°C.\n  The average high this week is 19.7°C.\n"
        );
    }

    #[test]
    fn average_on_a_tie_rounds_to_even() {
        // Lows of 0, 0, 0 and 5°C average to exactly 1.25°C.
        let records = vec![
            DailyRecord::new("2021-07-05", 32, 50),
            DailyRecord::new("2021-07-06", 32, 50),
            DailyRecord::new("2021-07-07", 32, 50),
            DailyRecord::new("2021-07-08", 41, 50),
        ];
        let summary = generate_summary(&records).unwrap();
        assert!(summary.contains("  The average low this week is 1.2°C.\n"));
        assert!(summary.contains("  The average high this week is 10.0°C.\n"));
    }

    #[test]
    fn summary_of_nothing_is_an_error() {
        assert!(matches!(
            generate_summary(&[]),
            Err(Error::EmptyInput {
                operation: "summary"
            })
        ));
    }

    #[test]
    fn summary_with_bad_date() {
        let records = vec![DailyRecord::new("yesterday", 49, 67)];
        assert!(matches!(
            generate_summary(&records),
            Err(Error::InvalidDate { .. })
        ));
    }

    #[test]
    fn daily_summary() {
        assert_eq!(
            generate_daily_summary(&july()).unwrap(),
            "---- Friday 02 July 2021 ----\n  Minimum Temperature: 9.4°C\n  Maximum Temperature: 19.4°C\n\n---- Saturday 03 July 2021 ----\n  Minimum Temperature: 13.9°C\n  Maximum Temperature: 20.0°C\n\n"
        );
    }

    #[test]
    fn daily_summary_of_nothing() {
        assert_eq!(generate_daily_summary(&[]).unwrap(), "");
    }
}
