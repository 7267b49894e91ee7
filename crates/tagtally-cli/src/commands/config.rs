use clap::Subcommand;
use tagtally_core::Config;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,
    /// Write a default config file if none exists
    Init,
    /// Print the config file path
    Path,
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Show => {
            let config = Config::load()?;
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        ConfigAction::Init => {
            let path = Config::path()?;
            if path.exists() {
                println!("config already exists at {}", path.display());
            } else {
                Config::default().save()?;
                println!("wrote {}", path.display());
            }
        }
        ConfigAction::Path => {
            println!("{}", Config::path()?.display());
        }
    }
    Ok(())
}
