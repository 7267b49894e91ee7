use clap::Subcommand;
use tagtally_core::EventDraft;

#[derive(Subcommand)]
pub enum EventsAction {
    /// List events stored on the backend
    List,
    /// Create an event
    Add {
        #[arg(long)]
        title: String,
        /// YYYY-MM-DD
        #[arg(long)]
        date: String,
        /// HH:MM
        #[arg(long)]
        start_time: Option<String>,
        /// HH:MM
        #[arg(long)]
        end_time: Option<String>,
        #[arg(long)]
        description: Option<String>,
        /// Comma-separated tags
        #[arg(long, default_value = "")]
        tags: String,
    },
    /// Delete an event by id
    Delete {
        id: String,
    },
}

pub fn run(action: EventsAction) -> Result<(), Box<dyn std::error::Error>> {
    let session = super::require_session()?;
    let client = super::client()?;
    let rt = super::runtime()?;

    match action {
        EventsAction::List => {
            let events = rt.block_on(client.fetch_events(&session))?;
            println!("{}", serde_json::to_string_pretty(&events)?);
        }
        EventsAction::Add {
            title,
            date,
            start_time,
            end_time,
            description,
            tags,
        } => {
            let draft = EventDraft {
                title,
                date,
                start_time,
                end_time,
                description,
                tags,
            };
            let event = draft.into_event()?;
            rt.block_on(client.save_event(&session, &event))?;
            println!("{}", serde_json::to_string_pretty(&event)?);
        }
        EventsAction::Delete { id } => {
            rt.block_on(client.delete_event(&session, &id))?;
            println!("deleted {id}");
        }
    }
    Ok(())
}
