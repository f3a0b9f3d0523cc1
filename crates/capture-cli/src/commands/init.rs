//! Init command implementation.

use std::path::Path;

use capture_canonical::PrincipalId;
use capture_core::RegistryConfig;
use capture_store::{MemoryStore, RegistryStore};
use tracing::info;

use crate::session::{load_config, CliError, Globals, Outcome};

pub fn run(globals: &Globals, admin: String, config: Option<String>) -> Result<Outcome, CliError> {
    let admin = PrincipalId::parse(admin)?;
    let config = match config {
        Some(path) => load_config(Path::new(&path))?,
        None => RegistryConfig::default(),
    };
    let store = MemoryStore::with_config(admin.clone(), config);
    globals.create(&store)?;

    let limits = store.config();
    info!(
        admin = %admin,
        state = %globals.state.display(),
        max_metadata_len = limits.max_metadata_len,
        max_note_len = limits.max_note_len,
        "registry initialized"
    );
    println!("Initialized registry at {} (admin {})", globals.state.display(), admin);
    Ok(Outcome::Done)
}
