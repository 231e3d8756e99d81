//! Date ranges sent with the chart requests.
//!
//! Every chart request carries three dates so the service can answer with both
//! resolutions at once: `start_d` opens the daily bucket, `start_m` opens the
//! monthly bucket, and `end_date` closes both.

use chrono::{Local, Months, NaiveDate};
use regex::Regex;
use serde::Deserialize;
use std::sync::LazyLock;
use validator::{Validate, ValidationError};

use crate::error::AppError;

/// Wire format of every date exchanged with the analytics service.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

static ISO_DATE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid date regex"));

/// Boundaries of the daily and monthly chart buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub start_daily: NaiveDate,
    pub start_monthly: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    /// Default window ending on `today`: one month of daily points and one
    /// year of monthly points.
    pub fn ending_on(today: NaiveDate) -> Self {
        Self {
            start_daily: today.checked_sub_months(Months::new(1)).unwrap_or(today),
            start_monthly: today.checked_sub_months(Months::new(12)).unwrap_or(today),
            end: today,
        }
    }

    /// Default window ending on the local current date.
    pub fn current() -> Self {
        Self::ending_on(Local::now().date_naive())
    }

    /// Builds a custom window, rejecting starts that fall after the end.
    pub fn custom(
        start_daily: NaiveDate,
        start_monthly: NaiveDate,
        end: NaiveDate,
    ) -> Result<Self, AppError> {
        if start_daily > end {
            return Err(AppError::invalid_input(format!(
                "daily start {start_daily} is after end {end}"
            )));
        }
        if start_monthly > end {
            return Err(AppError::invalid_input(format!(
                "monthly start {start_monthly} is after end {end}"
            )));
        }
        Ok(Self {
            start_daily,
            start_monthly,
            end,
        })
    }

    /// Query parameters in the order the chart endpoints expect them.
    pub fn query_params(&self) -> [(&'static str, String); 3] {
        [
            ("start_d", self.start_daily.format(DATE_FORMAT).to_string()),
            ("start_m", self.start_monthly.format(DATE_FORMAT).to_string()),
            ("end_date", self.end.format(DATE_FORMAT).to_string()),
        ]
    }
}

/// Custom date range submitted by a user, still in string form.
#[derive(Debug, Clone, Deserialize, Validate)]
#[validate(schema(function = "validate_range_order"))]
pub struct DateRangeForm {
    #[validate(regex(path = "*ISO_DATE_REGEX", message = "expected YYYY-MM-DD"))]
    pub start_daily: String,

    #[validate(regex(path = "*ISO_DATE_REGEX", message = "expected YYYY-MM-DD"))]
    pub start_monthly: String,

    #[validate(regex(path = "*ISO_DATE_REGEX", message = "expected YYYY-MM-DD"))]
    pub end: String,
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
}

fn validate_range_order(form: &DateRangeForm) -> Result<(), ValidationError> {
    let (Some(start_daily), Some(start_monthly), Some(end)) = (
        parse_date(&form.start_daily),
        parse_date(&form.start_monthly),
        parse_date(&form.end),
    ) else {
        // Malformed fields are reported by their own validators.
        return Ok(());
    };

    if start_daily > end || start_monthly > end {
        return Err(ValidationError::new("start_after_end"));
    }
    Ok(())
}

impl DateRangeForm {
    pub fn new(
        start_daily: impl Into<String>,
        start_monthly: impl Into<String>,
        end: impl Into<String>,
    ) -> Self {
        Self {
            start_daily: start_daily.into(),
            start_monthly: start_monthly.into(),
            end: end.into(),
        }
    }

    /// Validates the form and converts it into a [`DateWindow`].
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidInput`] if a field is not a real
    /// `YYYY-MM-DD` date or a start falls after the end.
    pub fn into_window(self) -> Result<DateWindow, AppError> {
        self.validate()
            .map_err(|e| AppError::invalid_input(e.to_string()))?;

        let parse = |field: &str, value: &str| {
            parse_date(value)
                .ok_or_else(|| AppError::invalid_input(format!("{field}: '{value}' is not a date")))
        };

        DateWindow::custom(
            parse("start_daily", &self.start_daily)?,
            parse("start_monthly", &self.start_monthly)?,
            parse("end", &self.end)?,
        )
    }
}
