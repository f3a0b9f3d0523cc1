//! Show command implementation.

use crate::output;
use crate::session::{CliError, Globals, Outcome};

pub fn run(globals: &Globals, event: u64, json: bool) -> Result<Outcome, CliError> {
    let registry = globals.open()?;
    let Some(view) = registry.event_view(event) else {
        if json {
            println!("null");
        } else {
            println!("Event {} not found", event);
        }
        return Ok(Outcome::Absent);
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        output::print_event_view(&view);
    }
    Ok(Outcome::Done)
}
