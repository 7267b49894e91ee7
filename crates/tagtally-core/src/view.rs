//! The visible calendar window.
//!
//! A [`ViewWindow`] is supplied by the view controller on every navigation
//! and defines both the event-inclusion filter and the available-hours
//! baseline for the summary.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Calendar view granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    Day,
    Week,
    Month,
}

impl std::str::FromStr for Granularity {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "day" => Ok(Granularity::Day),
            "week" => Ok(Granularity::Week),
            "month" => Ok(Granularity::Month),
            other => Err(ValidationError::InvalidValue {
                field: "granularity".to_string(),
                message: format!("expected day, week, or month; got '{other}'"),
            }),
        }
    }
}

/// The date range and granularity currently visible in the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewWindow {
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub granularity: Granularity,
}

impl ViewWindow {
    /// Build a window; the range must be non-empty.
    pub fn new(
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
        granularity: Granularity,
    ) -> Result<Self, ValidationError> {
        if end_date <= start_date {
            return Err(ValidationError::InvalidTimeRange {
                start: start_date,
                end: end_date,
            });
        }
        Ok(Self {
            start_date,
            end_date,
            granularity,
        })
    }

    /// Half-open containment test: `[start_date, end_date)`.
    pub fn contains(&self, t: DateTime<Utc>) -> bool {
        t >= self.start_date && t < self.end_date
    }

    /// Total hours available in this window.
    ///
    /// Day and week views are fixed 24 h / 168 h baselines; month views
    /// cover however many whole days the calendar widget shows.
    pub fn total_available_hours(&self) -> f64 {
        match self.granularity {
            Granularity::Day => 24.0,
            Granularity::Week => 168.0,
            Granularity::Month => {
                let days = (self.end_date - self.start_date).num_seconds() as f64 / 86_400.0;
                days.ceil() * 24.0
            }
        }
    }
}
