//! Note command implementation.

use capture_canonical::{NoteContent, PrincipalId};

use crate::session::{CliError, Globals, Outcome};

pub fn run(globals: &Globals, caller: String, event: u64, content: String) -> Result<Outcome, CliError> {
    let caller = PrincipalId::parse(caller)?;
    let content = NoteContent::parse(content)?;
    globals.mutate(|registry| registry.add_note(&caller, event, content))
}
