//! Pause, unpause and set-admin command implementations.

use capture_canonical::PrincipalId;

use crate::session::{CliError, Globals, Outcome};

pub fn pause(globals: &Globals, caller: String) -> Result<Outcome, CliError> {
    let caller = PrincipalId::parse(caller)?;
    globals.mutate(|registry| registry.pause_contract(&caller).map(|()| true))
}

pub fn unpause(globals: &Globals, caller: String) -> Result<Outcome, CliError> {
    let caller = PrincipalId::parse(caller)?;
    globals.mutate(|registry| registry.unpause_contract(&caller).map(|()| true))
}

pub fn set_admin(globals: &Globals, caller: String, new_admin: String) -> Result<Outcome, CliError> {
    let caller = PrincipalId::parse(caller)?;
    let new_admin = PrincipalId::parse(new_admin)?;
    globals.mutate(|registry| registry.set_admin(&caller, new_admin).map(|()| true))
}
