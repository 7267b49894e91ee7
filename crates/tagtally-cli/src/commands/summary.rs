use std::path::PathBuf;

use clap::Subcommand;
use tagtally_core::{compute_summary, CalendarEvent, RawEvent};

#[derive(Subcommand)]
pub enum SummaryAction {
    /// Compute a summary from a local JSON event file
    Compute {
        /// Path to a JSON array of events
        #[arg(long)]
        events: PathBuf,
        /// Window start (YYYY-MM-DD or RFC 3339)
        #[arg(long)]
        start: String,
        /// Window end, exclusive
        #[arg(long)]
        end: String,
        /// day, week, or month
        #[arg(long, default_value = "month")]
        granularity: String,
    },
    /// Fetch events from the backend and compute a summary
    Fetch {
        #[arg(long)]
        start: String,
        #[arg(long)]
        end: String,
        #[arg(long, default_value = "month")]
        granularity: String,
    },
}

pub fn run(action: SummaryAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        SummaryAction::Compute {
            events,
            start,
            end,
            granularity,
        } => {
            let window = super::parse_window(&start, &end, &granularity)?;
            let text = std::fs::read_to_string(&events)?;
            let raw: Vec<RawEvent> = serde_json::from_str(&text)?;
            let events: Vec<CalendarEvent> =
                raw.into_iter().filter_map(CalendarEvent::from_raw).collect();

            let summary = compute_summary(&events, &window);
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        SummaryAction::Fetch {
            start,
            end,
            granularity,
        } => {
            let window = super::parse_window(&start, &end, &granularity)?;
            let session = super::require_session()?;
            let client = super::client()?;

            let events = super::runtime()?.block_on(client.fetch_events(&session))?;
            let summary = compute_summary(&events, &window);
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
    }
    Ok(())
}
