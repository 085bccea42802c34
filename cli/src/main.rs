//! chimectl: signed CLI client for the Chime meetings and messaging API.
//!
//! Subcommands are grouped per resource family:
//! - `config` manages the local credential store
//! - `meetings` / `attendees` / `channels` issue signed API calls
//!
//! `--json` switches rendering from tables to raw JSON. The process exits
//! with code 1 on any surfaced error.

use clap::{Parser, Subcommand};

mod commands;
mod render;
mod runtime;
mod store;

use chimectl_client::{ChimeClient, DefaultCredentialProvider, RequestSigner};
use chimectl_core::{Context, OsEnv, Signer};
use runtime::{ReqwestHttpSend, TokioFileRead};

#[derive(Parser)]
#[command(name = "chimectl")]
#[command(about = "Signed CLI client for the Chime meetings and messaging API")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Render raw JSON instead of tables
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage the local credential store
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Manage meetings
    Meetings {
        #[command(subcommand)]
        action: MeetingsAction,
    },

    /// Manage the attendees of a meeting
    Attendees {
        /// Meeting the attendees belong to
        #[arg(long)]
        meeting_id: String,

        #[command(subcommand)]
        action: AttendeesAction,
    },

    /// Manage messaging channels
    Channels {
        #[command(subcommand)]
        action: ChannelsAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Store one credential value
    Set {
        /// One of: access_key_id, secret_access_key, session_token
        key: String,
        value: String,
    },

    /// Print one stored value
    Get { key: String },

    /// Print all stored values
    List,
}

#[derive(Subcommand)]
enum MeetingsAction {
    /// List all meetings
    List,

    /// Show one meeting
    Get { meeting_id: String },

    /// Create a meeting
    Create {
        /// Caller-assigned meeting identifier
        #[arg(long)]
        external_meeting_id: Option<String>,

        /// Media placement region hint
        #[arg(long)]
        media_region: Option<String>,
    },

    /// Delete a meeting
    Delete { meeting_id: String },
}

#[derive(Subcommand)]
enum AttendeesAction {
    /// List the meeting's attendees
    List,

    /// Show one attendee
    Get { attendee_id: String },

    /// Add an attendee
    Create {
        /// Caller-assigned user identifier
        #[arg(long)]
        external_user_id: String,
    },

    /// Remove an attendee
    Delete { attendee_id: String },
}

#[derive(Subcommand)]
enum ChannelsAction {
    /// List channels
    List {
        /// Messaging instance to scope the listing to
        #[arg(long)]
        app_instance_arn: Option<String>,
    },

    /// Show one channel
    Get { channel_arn: String },

    /// Create a channel
    Create {
        /// Channel display name
        #[arg(long)]
        name: String,

        /// Messaging instance the channel belongs to
        #[arg(long)]
        app_instance_arn: String,
    },

    /// Delete a channel
    Delete { channel_arn: String },
}

fn build_client() -> ChimeClient {
    let ctx = Context::new()
        .with_file_read(TokioFileRead)
        .with_http_send(ReqwestHttpSend::default())
        .with_env(OsEnv);
    let signer = Signer::new(
        ctx.clone(),
        DefaultCredentialProvider::new(),
        RequestSigner::new(),
    );

    ChimeClient::new(ctx, signer)
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Config { action } => commands::config::run(action, cli.json),
        Commands::Meetings { action } => {
            commands::meetings::run(&build_client(), action, cli.json).await
        }
        Commands::Attendees { meeting_id, action } => {
            commands::attendees::run(&build_client(), &meeting_id, action, cli.json).await
        }
        Commands::Channels { action } => {
            commands::channels::run(&build_client(), action, cli.json).await
        }
    }
}

#[tokio::main]
async fn main() {
    env_logger::init();

    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
