//! Calendar event model.
//!
//! Events arrive from the backend as loose JSON ([`RawEvent`]) and are
//! validated into [`CalendarEvent`] before any accounting runs. An event
//! whose `start` cannot be parsed is dropped silently: one bad record must
//! not blank the summary for the whole window.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Wire shape of an event as the backend stores it.
///
/// Timestamps are strings and `tags` is a single comma-separated string;
/// both are normalized by [`CalendarEvent::from_raw`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawEvent {
    pub id: String,
    pub title: String,
    pub start: String,
    #[serde(default)]
    pub end: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub tags: Option<String>,
}

/// A validated calendar event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub id: String,
    pub title: String,
    pub start: DateTime<Utc>,
    pub end: Option<DateTime<Utc>>,
    pub description: Option<String>,
    pub tags: Vec<String>,
}

impl CalendarEvent {
    /// Validate a raw backend event.
    ///
    /// Returns `None` when `start` is unparseable. An unparseable `end` is
    /// kept as `None` (the event then counts zero hours).
    pub fn from_raw(raw: RawEvent) -> Option<Self> {
        let start = parse_timestamp(&raw.start)?;
        let end = raw.end.as_deref().and_then(parse_timestamp);

        Some(Self {
            id: raw.id,
            title: raw.title,
            start,
            end,
            description: raw.description.filter(|d| !d.is_empty()),
            tags: parse_tags(raw.tags.as_deref().unwrap_or("")),
        })
    }

    /// Wire form for sending back to the backend.
    pub fn to_raw(&self) -> RawEvent {
        RawEvent {
            id: self.id.clone(),
            title: self.title.clone(),
            start: self.start.to_rfc3339(),
            end: self.end.map(|e| e.to_rfc3339()),
            description: self.description.clone(),
            tags: if self.tags.is_empty() {
                None
            } else {
                Some(self.tags.join(", "))
            },
        }
    }

    /// Duration in fractional hours.
    ///
    /// Zero when `end` is missing or not after `start`; a backwards range
    /// is data entry noise, not an error.
    pub fn duration_hours(&self) -> f64 {
        match self.end {
            Some(end) if end > self.start => (end - self.start).num_seconds() as f64 / 3600.0,
            _ => 0.0,
        }
    }
}

/// Split a comma-separated tag string into normalized tags.
///
/// Whitespace is trimmed, empty entries are discarded, order is preserved,
/// and duplicates within one string count once. Tags stay case-sensitive.
pub fn parse_tags(raw: &str) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for piece in raw.split(',') {
        let tag = piece.trim();
        if !tag.is_empty() && !tags.iter().any(|t| t == tag) {
            tags.push(tag.to_string());
        }
    }
    tags
}

/// Parse a backend timestamp.
///
/// The backend emits RFC 3339 date-times, local-style `YYYY-MM-DDTHH:MM`
/// strings built from form fields, and bare `YYYY-MM-DD` dates for all-day
/// events (taken as midnight UTC).
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(naive.and_utc());
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(date.and_hms_opt(0, 0, 0)?.and_utc());
    }
    None
}

/// User input from the event-editing form.
///
/// Mirrors the fields the form collects: a date plus optional start/end
/// times, with tags as the raw comma-separated string the user typed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventDraft {
    pub title: String,
    /// `YYYY-MM-DD`
    pub date: String,
    /// `HH:MM`, optional
    pub start_time: Option<String>,
    /// `HH:MM`, optional
    pub end_time: Option<String>,
    pub description: Option<String>,
    pub tags: String,
}

impl EventDraft {
    /// Check the fields the form requires: title and date.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::MissingField("title"));
        }
        if self.date.trim().is_empty() {
            return Err(ValidationError::MissingField("date"));
        }
        if parse_timestamp(&self.date).is_none() {
            return Err(ValidationError::InvalidValue {
                field: "date".to_string(),
                message: format!("not a YYYY-MM-DD date: {}", self.date),
            });
        }
        Ok(())
    }

    /// Build a [`CalendarEvent`] with a fresh id.
    pub fn into_event(self) -> Result<CalendarEvent, ValidationError> {
        self.validate()?;

        let start_str = match &self.start_time {
            Some(t) => format!("{}T{}", self.date, t),
            None => self.date.clone(),
        };
        let start = parse_timestamp(&start_str).ok_or_else(|| ValidationError::InvalidValue {
            field: "start_time".to_string(),
            message: format!("not a HH:MM time: {:?}", self.start_time),
        })?;

        let end = match &self.end_time {
            Some(t) => {
                let end_str = format!("{}T{}", self.date, t);
                Some(
                    parse_timestamp(&end_str).ok_or_else(|| ValidationError::InvalidValue {
                        field: "end_time".to_string(),
                        message: format!("not a HH:MM time: {:?}", self.end_time),
                    })?,
                )
            }
            None => None,
        };

        Ok(CalendarEvent {
            id: uuid::Uuid::new_v4().to_string(),
            title: self.title.trim().to_string(),
            start,
            end,
            description: self.description.filter(|d| !d.trim().is_empty()),
            tags: parse_tags(&self.tags),
        })
    }
}
