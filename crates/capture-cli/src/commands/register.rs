//! Register command implementation.

use capture_canonical::{DocHash, Metadata, PrincipalId};

use crate::session::{CliError, Globals, Outcome};

pub fn run(
    globals: &Globals,
    caller: String,
    amount: u128,
    hash: String,
    metadata: String,
) -> Result<Outcome, CliError> {
    let caller = PrincipalId::parse(caller)?;
    let doc_hash = DocHash::from_hex(&hash)?;
    let metadata = Metadata::parse(metadata)?;
    globals.mutate(|registry| registry.register_capture_event(&caller, amount, doc_hash, metadata))
}
