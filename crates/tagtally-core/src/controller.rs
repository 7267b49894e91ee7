//! Typed UI command dispatch.
//!
//! The original UI drove everything from DOM callbacks mutating globals.
//! Here the same flow is a state machine: the view layer produces
//! [`UiCommand`] values, [`CalendarController::apply`] consumes them against
//! explicit state and hands back the recomputed [`Summary`] for rendering.
//! The controller never does I/O; persistence goes through
//! [`crate::source::EventSourceClient`] and refreshed event lists come back
//! in via [`UiCommand::SetEvents`] (last call wins, per the display model).

use serde::{Deserialize, Serialize};

use crate::accounting::{compute_summary, Summary};
use crate::error::CoreError;
use crate::event::{CalendarEvent, EventDraft};
use crate::view::ViewWindow;

/// Tags currently ticked in the event-editing form.
///
/// A value object owned by the form, passed along with the draft on save
/// instead of living at module scope.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TagSelection {
    tags: Vec<String>,
}

impl TagSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip a tag; returns whether it is selected afterwards.
    pub fn toggle(&mut self, tag: &str) -> bool {
        if let Some(pos) = self.tags.iter().position(|t| t == tag) {
            self.tags.remove(pos);
            false
        } else {
            self.tags.push(tag.to_string());
            true
        }
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// The comma-separated form the backend stores.
    pub fn as_tags_string(&self) -> String {
        self.tags.join(", ")
    }

    pub fn clear(&mut self) {
        self.tags.clear();
    }
}

/// An action produced by the view layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum UiCommand {
    /// Save the event-editing form.
    SaveEvent(EventDraft),
    /// Delete an event by id. Unknown ids are a no-op.
    DeleteEvent { id: String },
    /// Navigate to a different window.
    ChangeView(ViewWindow),
    /// Replace the event set after a backend refresh.
    SetEvents(Vec<CalendarEvent>),
    /// Flip a tag checkbox in the editing form.
    ToggleTag(String),
}

/// What a command changed.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The visible accounting changed; render this summary.
    Summary(Summary),
    /// The form's tag selection changed.
    Selection(TagSelection),
}

/// Explicit state behind the calendar view: the visible window, the
/// in-memory event set, and the form's tag selection.
#[derive(Debug, Clone)]
pub struct CalendarController {
    window: ViewWindow,
    events: Vec<CalendarEvent>,
    selection: TagSelection,
}

impl CalendarController {
    pub fn new(window: ViewWindow) -> Self {
        Self {
            window,
            events: Vec::new(),
            selection: TagSelection::new(),
        }
    }

    pub fn window(&self) -> &ViewWindow {
        &self.window
    }

    pub fn events(&self) -> &[CalendarEvent] {
        &self.events
    }

    pub fn selection(&self) -> &TagSelection {
        &self.selection
    }

    /// Current summary for the visible window.
    pub fn summary(&self) -> Summary {
        compute_summary(&self.events, &self.window)
    }

    /// Apply one command and report what changed.
    pub fn apply(&mut self, command: UiCommand) -> Result<Outcome, CoreError> {
        match command {
            UiCommand::SaveEvent(draft) => {
                let mut event = draft.into_event()?;
                // ticked tags join whatever was typed in the tags field
                for tag in self.selection.tags() {
                    if !event.tags.iter().any(|t| t == tag) {
                        event.tags.push(tag.clone());
                    }
                }
                self.selection.clear();
                self.events.push(event);
                Ok(Outcome::Summary(self.summary()))
            }
            UiCommand::DeleteEvent { id } => {
                self.events.retain(|e| e.id != id);
                Ok(Outcome::Summary(self.summary()))
            }
            UiCommand::ChangeView(window) => {
                self.window = window;
                Ok(Outcome::Summary(self.summary()))
            }
            UiCommand::SetEvents(events) => {
                self.events = events;
                Ok(Outcome::Summary(self.summary()))
            }
            UiCommand::ToggleTag(tag) => {
                self.selection.toggle(&tag);
                Ok(Outcome::Selection(self.selection.clone()))
            }
        }
    }
}
