//! Tweetboard CLI
//!
//! Command-line shell for the dashboard:
//! - Render a page's charts as JSON
//! - Show the navigation menu
//! - Manage the persisted cookie jar
//! - Generate a config file

use anyhow::{bail, Context};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tweetboard::api::ApiService;
use tweetboard::config::Config;
use tweetboard::cookie::{CookieOptions, CookieStore, Expiry};
use tweetboard::events::EventBus;
use tweetboard::shell::{self, menu, resolve, Navigation, ShellError, ShellState};
use tweetboard::stats::StatisticService;

#[derive(Parser)]
#[command(name = "tweetboard")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Tweet statistics dashboard")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Statistics API URL
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Serve embedded mock data instead of calling the API
    #[arg(long, global = true)]
    pub mock: bool,

    /// Output format (table, json)
    #[arg(short, long, default_value = "table", global = true)]
    pub format: String,

    /// Log to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a page (home, emotion); unknown paths fall back to home
    Page {
        /// Page path
        #[arg(default_value = "")]
        path: String,
    },

    /// Show the navigation menu
    Menu,

    /// Manage the cookie jar
    Cookie {
        #[command(subcommand)]
        action: CookieCommand,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
pub enum CookieCommand {
    /// Print a cookie value (empty when missing or expired)
    Get { name: String },

    /// Set a cookie
    Set {
        name: String,
        value: String,
        /// Expiry: "8h", "30d" or an RFC 3339 timestamp; omit for a session cookie
        #[arg(short, long)]
        expires: Option<String>,
        #[arg(long)]
        path: Option<String>,
        #[arg(long)]
        domain: Option<String>,
        #[arg(long)]
        secure: bool,
    },

    /// Delete a cookie
    Delete { name: String },

    /// List all live cookies
    List,

    /// Delete every cookie
    Clear,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(url) = &cli.api_url {
        config.api.base_url = url.clone();
    }
    if cli.mock {
        config.api.use_mock = Some(true);
    }

    if cli.verbose {
        config
            .logging
            .init()
            .context("Failed to initialize logging")?;
    }

    match cli.command {
        Commands::Page { path } => {
            let cookies = Arc::new(
                config
                    .cookies
                    .open_store()
                    .context("Failed to open cookie jar")?,
            );
            let events = Arc::new(EventBus::new());
            let api = Arc::new(ApiService::new(
                config.api.service_config(),
                Arc::clone(&cookies),
                Arc::clone(&events),
            ));
            let source = Arc::new(StatisticService::new(api, config.api.data_mode()));
            let state = ShellState::new(source, cookies, events, config.shell, config.assets);

            let page = match resolve(&path) {
                Navigation::Render(page) => page,
                Navigation::Redirect(page) => {
                    eprintln!("No page at {:?}, showing {}", path, page.path());
                    page
                }
            };

            match shell::render(&state, page).await {
                Ok(view) => println!("{}", serde_json::to_string_pretty(&view)?),
                Err(ShellError::SignIn(url)) => {
                    eprintln!("Session expired. Sign in again at {}", url);
                    std::process::exit(1);
                }
                Err(e) => bail!("Failed to load {}: {}", page.path(), e),
            }
        }

        Commands::Menu => {
            let items = menu();
            if cli.format == "json" {
                println!("{}", serde_json::to_string_pretty(&items)?);
            } else {
                println!("{:<10} {:<10} {}", "Key", "Title", "Path");
                println!("{}", "-".repeat(30));
                for item in items {
                    println!("{:<10} {:<10} {}", item.key, item.title, item.path);
                }
            }
        }

        Commands::Cookie { action } => {
            let jar = config
                .cookies
                .open_store()
                .context("Failed to open cookie jar")?;
            run_cookie(&jar, action, &cli.format)?;
        }

        Commands::Config { output } => {
            let config = tweetboard::config::generate_default_config();

            match output {
                Some(path) => {
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&path, &config)?;
                    println!("Config written to {:?}", path);
                }
                None => {
                    print!("{}", config);
                }
            }
        }
    }

    Ok(())
}

fn run_cookie(jar: &CookieStore, action: CookieCommand, format: &str) -> anyhow::Result<()> {
    match action {
        CookieCommand::Get { name } => {
            println!("{}", jar.get(&name));
        }

        CookieCommand::Set {
            name,
            value,
            expires,
            path,
            domain,
            secure,
        } => {
            let mut options = match expires.as_deref() {
                Some(s) => CookieOptions::expiring(parse_expiry(s)?),
                None => CookieOptions::session(),
            }
            .secure(secure);
            if let Some(path) = path {
                options = options.path(path);
            }
            if let Some(domain) = domain {
                options = options.domain(domain);
            }

            jar.set(&name, &value, options)?;
            if let Some(entry) = jar.entry(&name) {
                println!("{}", entry.to_set_cookie());
            }
        }

        CookieCommand::Delete { name } => {
            jar.delete(&name)?;
            println!("Deleted {}", name);
        }

        CookieCommand::List => {
            let cookies = jar.get_all();
            if format == "json" {
                println!("{}", serde_json::to_string_pretty(&cookies)?);
            } else if cookies.is_empty() {
                println!("No cookies set.");
            } else {
                println!("{:<20} {}", "Name", "Value");
                println!("{}", "-".repeat(40));
                for (name, value) in cookies {
                    println!("{:<20} {}", name, value);
                }
            }
        }

        CookieCommand::Clear => {
            let count = jar.get_all().len();
            jar.delete_all()?;
            println!("Cleared {} cookies", count);
        }
    }

    Ok(())
}

fn parse_expiry(s: &str) -> anyhow::Result<Expiry> {
    let s = s.trim();

    let expiry = if let Some(hours) = s.strip_suffix('h') {
        Expiry::Hours(hours.parse()?)
    } else if let Some(days) = s.strip_suffix('d') {
        Expiry::Days(days.parse()?)
    } else if let Ok(at) = DateTime::parse_from_rfc3339(s) {
        Expiry::At(at.with_timezone(&Utc))
    } else {
        bail!("Invalid expiry: {}. Use: 8h, 30d or an RFC 3339 timestamp", s)
    };

    if expiry.checked_resolve(Utc::now()).is_none() {
        bail!("Expiry out of range: {}. Cookies expire by the end of year 9999", s);
    }
    Ok(expiry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_expiry() {
        assert!(matches!(parse_expiry("8h").unwrap(), Expiry::Hours(8)));
        assert!(matches!(parse_expiry("-1h").unwrap(), Expiry::Hours(-1)));
        assert!(matches!(parse_expiry(" 30d ").unwrap(), Expiry::Days(30)));

        let at = parse_expiry("2018-01-20T20:00:00Z").unwrap();
        let expected = Utc.with_ymd_and_hms(2018, 1, 20, 20, 0, 0).unwrap();
        assert!(matches!(at, Expiry::At(t) if t == expected));

        assert!(parse_expiry("soon").is_err());
        assert!(parse_expiry("xh").is_err());
    }

    #[test]
    fn test_parse_expiry_rejects_out_of_range() {
        let err = parse_expiry("10000000000000h").unwrap_err();
        assert!(err.to_string().contains("out of range"));
        assert!(parse_expiry("9223372036854775807d").is_err());
        assert!(parse_expiry("-10000000000000h").is_err());
        assert!(matches!(parse_expiry("999999h").unwrap(), Expiry::Hours(999_999)));
    }

    #[test]
    fn test_cookie_commands_round_trip() {
        let jar = CookieStore::in_memory();

        run_cookie(
            &jar,
            CookieCommand::Set {
                name: "lang".to_string(),
                value: "en".to_string(),
                expires: Some("1d".to_string()),
                path: None,
                domain: None,
                secure: false,
            },
            "table",
        )
        .unwrap();
        assert_eq!(jar.language(), "en");

        run_cookie(&jar, CookieCommand::Delete { name: "lang".to_string() }, "table").unwrap();
        assert_eq!(jar.language(), "");
    }

    #[test]
    fn test_cli_parses_global_flags() {
        let cli = Cli::parse_from(["tweetboard", "page", "emotion", "--mock", "--api-url", "http://x"]);
        assert!(cli.mock);
        assert_eq!(cli.api_url.as_deref(), Some("http://x"));
        assert!(matches!(cli.command, Commands::Page { ref path } if path == "emotion"));
    }
}
