//! Capture CLI - drives a capture event registry stored in a snapshot file.

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod output;
mod session;

use commands::{admin, collaborator, info, init, list, note, register, show, status, version};
use session::{Globals, Outcome};

#[derive(Parser)]
#[command(name = "capture")]
#[command(about = "Capture event registry CLI")]
struct Cli {
    /// Path to the registry snapshot
    #[arg(long, global = true, default_value = "registry.json")]
    state: String,
    /// Logical time of this call (default: current Unix time in seconds)
    #[arg(long, global = true)]
    at: Option<u64>,
    /// Log filter directive
    #[arg(long, global = true, default_value = "warn")]
    log: String,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an empty registry snapshot
    Init {
        /// Initial admin (the deployer)
        #[arg(long)]
        admin: String,
        /// Text limits as a JSON file, fixed for the registry's lifetime
        #[arg(long)]
        config: Option<String>,
    },
    /// Register a capture event
    Register {
        /// Registering facility
        #[arg(long)]
        caller: String,
        /// Fixed-point CO2 amount
        #[arg(long)]
        amount: u128,
        /// Document hash (64 hex digits)
        #[arg(long)]
        hash: String,
        /// Event metadata
        #[arg(long, default_value = "")]
        metadata: String,
    },
    /// Change an event's status
    Status {
        /// Calling principal
        #[arg(long)]
        caller: String,
        /// Event ID
        #[arg(long)]
        event: u64,
        /// Target status (verified, rejected, updated)
        status: String,
    },
    /// Add a correction version to an event
    Version {
        /// Calling principal
        #[arg(long)]
        caller: String,
        /// Event ID
        #[arg(long)]
        event: u64,
        /// Version number
        #[arg(long)]
        version: u64,
        /// Corrected CO2 amount
        #[arg(long)]
        amount: u128,
        /// Corrected document hash (64 hex digits)
        #[arg(long)]
        hash: String,
        /// Explanation of the correction
        #[arg(long, default_value = "")]
        notes: String,
    },
    /// Grant a collaborator permissions on an event
    Collaborator {
        /// Calling principal (the event's facility)
        #[arg(long)]
        caller: String,
        /// Event ID
        #[arg(long)]
        event: u64,
        /// Collaborator principal
        #[arg(long)]
        principal: String,
        /// Role label
        #[arg(long)]
        role: String,
        /// Permission token (repeatable, at most 5)
        #[arg(long = "permission")]
        permissions: Vec<String>,
    },
    /// Append a note to an event
    Note {
        /// Calling principal
        #[arg(long)]
        caller: String,
        /// Event ID
        #[arg(long)]
        event: u64,
        /// Note content
        content: String,
    },
    /// Pause all event mutations
    Pause {
        /// Calling principal (admin)
        #[arg(long)]
        caller: String,
    },
    /// Resume event mutations
    Unpause {
        /// Calling principal (admin)
        #[arg(long)]
        caller: String,
    },
    /// Hand the admin role to another principal
    SetAdmin {
        /// Calling principal (admin)
        #[arg(long)]
        caller: String,
        /// New admin
        new_admin: String,
    },
    /// Show one event with its versions, collaborators and notes
    Show {
        /// Event ID
        event: u64,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// List events
    List {
        /// Only events with this status
        #[arg(long)]
        status: Option<String>,
        /// Only events registered by this facility
        #[arg(long)]
        facility: Option<String>,
        /// Only events registered at or after this time
        #[arg(long)]
        after: Option<u64>,
        /// Only events registered at or before this time
        #[arg(long)]
        before: Option<u64>,
        /// Output as JSON lines
        #[arg(long)]
        json: bool,
    },
    /// Show global registry state
    Info,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&cli.log))
        .with_writer(std::io::stderr)
        .init();

    let globals = Globals {
        state: cli.state.into(),
        at: cli.at,
    };

    let result = match cli.command {
        Commands::Init { admin, config } => init::run(&globals, admin, config),
        Commands::Register {
            caller,
            amount,
            hash,
            metadata,
        } => register::run(&globals, caller, amount, hash, metadata),
        Commands::Status {
            caller,
            event,
            status,
        } => status::run(&globals, caller, event, status),
        Commands::Version {
            caller,
            event,
            version,
            amount,
            hash,
            notes,
        } => version::run(&globals, caller, event, version, amount, hash, notes),
        Commands::Collaborator {
            caller,
            event,
            principal,
            role,
            permissions,
        } => collaborator::run(&globals, caller, event, principal, role, permissions),
        Commands::Note {
            caller,
            event,
            content,
        } => note::run(&globals, caller, event, content),
        Commands::Pause { caller } => admin::pause(&globals, caller),
        Commands::Unpause { caller } => admin::unpause(&globals, caller),
        Commands::SetAdmin { caller, new_admin } => admin::set_admin(&globals, caller, new_admin),
        Commands::Show { event, json } => show::run(&globals, event, json),
        Commands::List {
            status,
            facility,
            after,
            before,
            json,
        } => list::run(&globals, status, facility, after, before, json),
        Commands::Info => info::run(&globals),
    };

    match result {
        Ok(Outcome::Done) => {}
        Ok(outcome) => std::process::exit(outcome.exit_code()),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
