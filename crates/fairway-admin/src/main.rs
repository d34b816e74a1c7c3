//! Fairway Concierge admin CLI
//!
//! Command line surface over the content editor, the dashboard sections and
//! the session flow.

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    missing_docs,
    rust_2018_idioms
)]

use clap::{Parser, Subcommand};
use fairway_admin::{AdminShell, ContentEditor, TracingReporter};
use fairway_client::{ApiClient, BootstrapOutcome, SessionBootstrap};
use fairway_core::context_error::Result;
use fairway_core::{context_error, init_logging, translate, Config, Language, Partner, PartnerType};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;

/// Command line interface for the Fairway Concierge admin tooling
#[derive(Parser)]
#[command(
    name = "fairway-admin",
    version = env!("CARGO_PKG_VERSION"),
    about = "Admin dashboard and content manager for the Fairway Concierge backend"
)]
struct Cli {
    /// Backend base URL (overrides configuration)
    #[arg(short, long, value_name = "URL", env = "FAIRWAY_BACKEND_URL")]
    backend: Option<String>,

    /// Subcommand
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands
#[derive(Subcommand)]
enum Commands {
    /// List partner entries of one type
    List {
        /// Partner type (golf, hotels, restaurants, beach_clubs, cafe_bars)
        partner_type: PartnerType,

        /// Filter entries by name, location or category
        #[arg(short, long, default_value = "")]
        query: String,
    },

    /// Create a partner entry from a JSON file
    Create {
        /// Partner type
        partner_type: PartnerType,

        /// Path to a JSON file with the new entry
        file: PathBuf,
    },

    /// Update a partner entry from a JSON file
    Update {
        /// Partner type
        partner_type: PartnerType,

        /// Path to a JSON file with the updated entry
        file: PathBuf,
    },

    /// Delete a partner entry
    Delete {
        /// Partner type
        partner_type: PartnerType,

        /// Entry id
        id: String,
    },

    /// Contact inquiry management
    Contacts {
        #[command(subcommand)]
        action: RowCommands,
    },

    /// Newsletter subscriber management
    Subscribers {
        #[command(subcommand)]
        action: RowCommands,
    },

    /// Review moderation
    Reviews {
        #[command(subcommand)]
        action: ReviewCommands,
    },

    /// Exchange an OAuth callback fragment for a session
    Login {
        /// The callback URL fragment, e.g. '#session_id=...'
        fragment: String,
    },

    /// Show the identity behind the current session
    Whoami,

    /// End the current session
    Logout,

    /// Look up a translation key
    Translate {
        /// Language code (en, de, fr, se)
        language: Language,

        /// Dot-separated key, e.g. 'nav.contact'
        key: String,
    },
}

/// Row-level commands shared by contacts and subscribers
#[derive(Subcommand)]
enum RowCommands {
    /// List all rows
    List,

    /// Delete one row
    Delete {
        /// Row id
        id: String,
    },
}

/// Review moderation commands
#[derive(Subcommand)]
enum ReviewCommands {
    /// List reviews awaiting moderation
    Pending,

    /// Approve a pending review
    Approve {
        /// Review id
        id: String,
    },

    /// Reject a pending review
    Reject {
        /// Review id
        id: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(None);

    let mut config = Config::load().unwrap_or_else(|err| {
        info!("Failed to load config ({}), using defaults", err);
        Config::default()
    });
    if let Some(backend) = cli.backend {
        config.backend.base_url = backend;
    }

    let client = ApiClient::from_config(&config.backend)
        .map_err(|e| context_error!("Failed to build API client: {}", e))?;

    run(cli.command, client).await
}

async fn run(command: Commands, client: ApiClient) -> Result<()> {
    let reporter = Arc::new(TracingReporter);

    match command {
        Commands::List {
            partner_type,
            query,
        } => {
            let editor = ContentEditor::new(client, reporter);
            editor.select(partner_type).await?;
            editor.set_query(query);
            for partner in editor.visible() {
                println!("{:<30} {:<30} {}", partner.id, partner.name, partner.location);
            }
        }
        Commands::Create { partner_type, file } => {
            let partner = read_partner(&file)?;
            let editor = ContentEditor::new(client, reporter);
            editor.select(partner_type).await?;
            editor.create(partner).await?;
            println!("Created {partner_type} entry");
        }
        Commands::Update { partner_type, file } => {
            let partner = read_partner(&file)?;
            let editor = ContentEditor::new(client, reporter);
            editor.select(partner_type).await?;
            editor.update(partner).await?;
            println!("Updated {partner_type} entry");
        }
        Commands::Delete { partner_type, id } => {
            let editor = ContentEditor::new(client, reporter);
            editor.select(partner_type).await?;
            editor.delete(&id).await?;
            println!("Deleted '{id}' from {partner_type}");
        }
        Commands::Contacts { action } => {
            let shell = AdminShell::new(client, reporter);
            shell.load().await?;
            match action {
                RowCommands::List => {
                    for contact in shell.contacts() {
                        println!(
                            "{:<26} {:<24} {:<28} {}",
                            contact.id, contact.name, contact.email, contact.country
                        );
                    }
                }
                RowCommands::Delete { id } => {
                    shell.delete_contact(&id).await?;
                    println!("Deleted contact inquiry '{id}'");
                }
            }
        }
        Commands::Subscribers { action } => {
            let shell = AdminShell::new(client, reporter);
            shell.load().await?;
            match action {
                RowCommands::List => {
                    for subscriber in shell.subscribers() {
                        println!(
                            "{:<26} {:<24} {}",
                            subscriber.id, subscriber.name, subscriber.email
                        );
                    }
                }
                RowCommands::Delete { id } => {
                    shell.delete_subscriber(&id).await?;
                    println!("Deleted subscriber '{id}'");
                }
            }
        }
        Commands::Reviews { action } => {
            let shell = AdminShell::new(client, reporter);
            shell.load().await?;
            match action {
                ReviewCommands::Pending => {
                    for review in shell.pending_reviews() {
                        println!(
                            "{:<26} {:<20} {} stars  {}",
                            review.id, review.user_name, review.rating, review.text
                        );
                    }
                }
                ReviewCommands::Approve { id } => {
                    shell.approve_review(&id).await?;
                    println!("Approved review '{id}'");
                }
                ReviewCommands::Reject { id } => {
                    shell.reject_review(&id).await?;
                    println!("Rejected review '{id}'");
                }
            }
        }
        Commands::Login { fragment } => {
            let bootstrap = SessionBootstrap::new(fragment);
            match bootstrap.run(&client).await {
                BootstrapOutcome::Authenticated { user, .. } => {
                    println!("Signed in as {} <{}>", user.name, user.email);
                }
                BootstrapOutcome::Unauthenticated => {
                    return Err(context_error!("Sign-in failed"));
                }
            }
        }
        Commands::Whoami => match client.current_user().await? {
            Some(user) => println!("{} <{}>", user.name, user.email),
            None => println!("Not signed in"),
        },
        Commands::Logout => {
            client.logout().await?;
            println!("Signed out");
        }
        Commands::Translate { language, key } => {
            println!("{}", translate(language, &key));
        }
    }

    Ok(())
}

fn read_partner(file: &Path) -> Result<Partner> {
    let contents = std::fs::read_to_string(file)
        .map_err(|e| context_error!("Failed to read {}: {}", file.display(), e))?;
    serde_json::from_str(&contents)
        .map_err(|e| context_error!("Invalid partner JSON in {}: {}", file.display(), e))
}
