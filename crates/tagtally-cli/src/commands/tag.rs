use clap::Subcommand;
use serde_json::json;
use tagtally_core::{parse_tags, tag_color};

#[derive(Subcommand)]
pub enum TagAction {
    /// Print the stable chart color for a tag
    Color {
        tag: String,
    },
    /// Normalize a comma-separated tag string
    Parse {
        raw: String,
    },
}

pub fn run(action: TagAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        TagAction::Color { tag } => {
            println!(
                "{}",
                serde_json::to_string_pretty(&json!({
                    "tag": tag,
                    "color": tag_color(&tag),
                }))?
            );
        }
        TagAction::Parse { raw } => {
            println!("{}", serde_json::to_string_pretty(&parse_tags(&raw))?);
        }
    }
    Ok(())
}
