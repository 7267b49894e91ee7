use chrono::Utc;
use clap::Subcommand;
use serde_json::json;

#[derive(Subcommand)]
pub enum AuthAction {
    /// Log in and cache the session
    Login {
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
    },
    /// Register a new account, then log in
    Register {
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        email: String,
    },
    /// Check the cached session
    Status,
    /// Drop the cached session
    Logout,
}

pub fn run(action: AuthAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        AuthAction::Login { username, password } => {
            let client = super::client()?;
            let session = super::runtime()?.block_on(client.login(&username, &password))?;
            super::save_session(&session)?;
            println!("logged in as {username}");
        }
        AuthAction::Register {
            username,
            password,
            email,
        } => {
            let client = super::client()?;
            let session =
                super::runtime()?.block_on(client.register(&username, &password, &email))?;
            super::save_session(&session)?;
            println!("registered and logged in as {username}");
        }
        AuthAction::Status => {
            let status = match super::load_session()? {
                None => json!({ "logged_in": false }),
                Some(session) => json!({
                    "logged_in": true,
                    "expired": session.is_expired(Utc::now()),
                    "expires_at": session.expires_at,
                }),
            };
            println!("{}", serde_json::to_string_pretty(&status)?);
        }
        AuthAction::Logout => {
            super::clear_session()?;
            println!("logged out");
        }
    }
    Ok(())
}
