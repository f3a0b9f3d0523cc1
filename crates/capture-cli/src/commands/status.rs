//! Status command implementation.

use capture_canonical::{PrincipalId, StatusLabel};

use crate::session::{CliError, Globals, Outcome};

pub fn run(globals: &Globals, caller: String, event: u64, status: String) -> Result<Outcome, CliError> {
    let caller = PrincipalId::parse(caller)?;
    let label = StatusLabel::parse(status)?;
    globals.mutate(|registry| {
        registry
            .update_event_status(&caller, event, &label)
            .map(|()| true)
    })
}
