//! Snapshot-backed registry session shared by the commands.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use capture_canonical::ValidationError;
use capture_core::{FixedClock, RegistryConfig, RegistryError, Response};
use capture_registry::Registry;
use capture_store::{load_snapshot, save_snapshot, MemoryStore, StoreError};
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

/// Registry as driven from the command line: one call, one point in time.
pub type CliRegistry = Registry<MemoryStore, FixedClock>;

/// Options shared by every command.
pub struct Globals {
    /// Snapshot file.
    pub state: PathBuf,
    /// Time override in Unix seconds.
    pub at: Option<u64>,
}

/// How a command finished; maps onto the process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Committed or answered (exit 0).
    Done,
    /// Rejected by the registry (exit 2).
    Rejected,
    /// Queried key is not present (exit 3).
    Absent,
}

impl Outcome {
    /// Process exit code.
    pub fn exit_code(self) -> i32 {
        match self {
            Outcome::Done => 0,
            Outcome::Rejected => 2,
            Outcome::Absent => 3,
        }
    }
}

/// Errors that abort a command before or after the registry runs.
#[derive(Debug, Error)]
pub enum CliError {
    /// Snapshot could not be read or written.
    #[error("snapshot {path}: {source}")]
    Snapshot {
        /// Snapshot path.
        path: String,
        /// Underlying store error.
        #[source]
        source: StoreError,
    },
    /// Config file could not be read.
    #[error("config {path}: {message}")]
    Config {
        /// Config path.
        path: String,
        /// What went wrong.
        message: String,
    },
    /// An argument failed format validation.
    #[error("invalid argument: {0}")]
    Invalid(#[from] ValidationError),
    /// Snapshot already exists.
    #[error("snapshot {0} already exists")]
    AlreadyInitialized(String),
    /// Output could not be serialized.
    #[error("output: {0}")]
    Output(#[from] serde_json::Error),
}

impl Globals {
    /// Current logical time: `--at` if given, otherwise the wall clock.
    pub fn now(&self) -> u64 {
        self.at
            .unwrap_or_else(|| u64::try_from(chrono::Utc::now().timestamp()).unwrap_or(0))
    }

    fn state_display(&self) -> String {
        self.state.display().to_string()
    }

    /// Loads the snapshot and builds a registry fixed at [`Globals::now`].
    pub fn open(&self) -> Result<CliRegistry, CliError> {
        let store = load_snapshot(&self.state).map_err(|source| CliError::Snapshot {
            path: self.state_display(),
            source,
        })?;
        let now = self.now();
        debug!(state = %self.state.display(), now, "registry opened");
        Ok(Registry::new(store, FixedClock(now)))
    }

    /// Persists the registry's tables back to the snapshot file.
    pub fn save(&self, registry: &CliRegistry) -> Result<(), CliError> {
        save_snapshot(&self.state, registry.store()).map_err(|source| CliError::Snapshot {
            path: self.state_display(),
            source,
        })
    }

    /// Writes a brand-new snapshot; refuses to clobber an existing file.
    pub fn create(&self, store: &MemoryStore) -> Result<(), CliError> {
        if self.state.exists() {
            return Err(CliError::AlreadyInitialized(self.state_display()));
        }
        save_snapshot(&self.state, store).map_err(|source| CliError::Snapshot {
            path: self.state_display(),
            source,
        })
    }

    /// Runs one mutation, prints its response and saves on success.
    ///
    /// A rejected call leaves the snapshot untouched.
    pub fn mutate<T, F>(&self, op: F) -> Result<Outcome, CliError>
    where
        T: Serialize,
        F: FnOnce(&mut CliRegistry) -> Result<T, RegistryError>,
    {
        let mut registry = self.open()?;
        let response = Response::from(op(&mut registry));
        if response.success {
            self.save(&registry)?;
        }
        println!("{}", serde_json::to_string(&response)?);
        Ok(if response.success {
            Outcome::Done
        } else {
            Outcome::Rejected
        })
    }
}

/// Reads registry limits from a JSON file.
pub fn load_config(path: &Path) -> Result<RegistryConfig, CliError> {
    let config_err = |message: String| CliError::Config {
        path: path.display().to_string(),
        message,
    };
    let file = File::open(path).map_err(|e| config_err(e.to_string()))?;
    serde_json::from_reader(BufReader::new(file)).map_err(|e| config_err(e.to_string()))
}
