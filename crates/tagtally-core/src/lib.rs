//! # Tagtally Core Library
//!
//! Core business logic for tagtally, a tag-aware calendar time-accounting
//! tool. The CLI binary and any GUI shell are thin layers over this crate.
//!
//! ## Architecture
//!
//! - **Accounting**: a pure function of (events, view window) that buckets
//!   scheduled hours by tag and reports the unscheduled remainder
//! - **Controller**: typed UI commands applied to explicit calendar state,
//!   replacing callback-driven control flow
//! - **Source**: async REST client for the external event backend
//! - **Config**: TOML-based configuration with typed, validated fields
//!
//! ## Key Components
//!
//! - [`compute_summary`]: the time-accounting core
//! - [`CalendarController`]: command dispatch over calendar state
//! - [`EventSourceClient`]: event backend client
//! - [`AuthSession`]: explicit bearer-token session state

pub mod accounting;
pub mod auth;
pub mod config;
pub mod controller;
pub mod error;
pub mod event;
pub mod palette;
pub mod source;
pub mod view;

pub use accounting::{compute_summary, round_hours, Summary};
pub use auth::AuthSession;
pub use config::{BackendConfig, CalendarConfig, Config};
pub use controller::{CalendarController, Outcome, TagSelection, UiCommand};
pub use error::{AuthError, ConfigError, CoreError, EventSourceError, ValidationError};
pub use event::{parse_tags, parse_timestamp, CalendarEvent, EventDraft, RawEvent};
pub use palette::{custom_tag_color, tag_color};
pub use source::EventSourceClient;
pub use view::{Granularity, ViewWindow};
