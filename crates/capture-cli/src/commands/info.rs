//! Info command implementation.

use serde_json::json;

use crate::session::{CliError, Globals, Outcome};

pub fn run(globals: &Globals) -> Result<Outcome, CliError> {
    let registry = globals.open()?;
    let info = json!({
        "next_event_id": registry.get_next_event_id(),
        "paused": registry.is_contract_paused(),
        "admin": registry.get_contract_admin(),
        "events": registry.store().event_count(),
        "config": registry.config(),
    });
    println!("{}", serde_json::to_string_pretty(&info)?);
    Ok(Outcome::Done)
}
