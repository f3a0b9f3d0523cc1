//! Version command implementation.

use capture_canonical::{DocHash, PrincipalId, UpdateNotes};

use crate::session::{CliError, Globals, Outcome};

pub fn run(
    globals: &Globals,
    caller: String,
    event: u64,
    version: u64,
    amount: u128,
    hash: String,
    notes: String,
) -> Result<Outcome, CliError> {
    let caller = PrincipalId::parse(caller)?;
    let doc_hash = DocHash::from_hex(&hash)?;
    let notes = UpdateNotes::parse(notes)?;
    globals.mutate(|registry| {
        registry
            .add_event_version(&caller, event, version, amount, doc_hash, notes)
            .map(|()| true)
    })
}
