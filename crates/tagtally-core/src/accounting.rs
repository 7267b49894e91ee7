//! Per-tag time accounting over a visible window.
//!
//! [`compute_summary`] is the heart of tagtally: a pure function of
//! (events, window) that buckets scheduled hours by tag and reports how many
//! hours of the window remain unscheduled. The caller re-runs it whenever
//! the visible window changes or the event set is refreshed; "last call
//! wins" for display.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::event::CalendarEvent;
use crate::view::ViewWindow;

/// Aggregated hour totals for one view window.
///
/// All hour fields are rounded to one decimal for display. `tag_hours` never
/// holds a zero entry, and `unscheduled_hours` is clamped at zero when
/// overlapping events push scheduled time past the available baseline;
/// callers that care can compare `total_scheduled_hours` against
/// `total_available_hours` to detect the overflow.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Summary {
    /// Scheduled hours per tag. An event with N tags contributes its full
    /// duration to each of the N buckets, so these may sum past
    /// `total_scheduled_hours`.
    pub tag_hours: BTreeMap<String, f64>,
    /// Hours of all retained events, tagged or not.
    pub total_scheduled_hours: f64,
    /// Baseline hours for the window granularity.
    pub total_available_hours: f64,
    /// `max(0, available - scheduled)`.
    pub unscheduled_hours: f64,
}

/// Round hours for display: one decimal, half rounds away from zero.
///
/// Works on the binary f64 value, so a nominal half that has no exact
/// representation (2.05 is stored as 2.0499...) rounds down. Durations
/// built from whole seconds land on exact tenths far from that edge.
pub fn round_hours(hours: f64) -> f64 {
    (hours * 10.0).round() / 10.0
}

/// Compute the per-tag and unscheduled hour totals for a window.
///
/// Events are retained when their `start` falls in
/// `[window.start_date, window.end_date)`. Accumulation stays unrounded;
/// rounding happens once on the reported values.
pub fn compute_summary(events: &[CalendarEvent], window: &ViewWindow) -> Summary {
    let mut tag_hours: BTreeMap<String, f64> = BTreeMap::new();
    let mut total_scheduled = 0.0;

    for event in events.iter().filter(|e| window.contains(e.start)) {
        let duration = event.duration_hours();
        total_scheduled += duration;

        if duration > 0.0 {
            for tag in &event.tags {
                *tag_hours.entry(tag.clone()).or_insert(0.0) += duration;
            }
        }
    }

    let total_available = window.total_available_hours();
    let unscheduled = (total_available - total_scheduled).max(0.0);

    Summary {
        tag_hours: tag_hours
            .into_iter()
            .map(|(tag, hours)| (tag, round_hours(hours)))
            .filter(|(_, hours)| *hours > 0.0)
            .collect(),
        total_scheduled_hours: round_hours(total_scheduled),
        total_available_hours: round_hours(total_available),
        unscheduled_hours: round_hours(unscheduled),
    }
}
