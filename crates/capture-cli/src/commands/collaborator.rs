//! Collaborator command implementation.

use capture_canonical::{PermissionSet, PrincipalId, Role};

use crate::session::{CliError, Globals, Outcome};

pub fn run(
    globals: &Globals,
    caller: String,
    event: u64,
    principal: String,
    role: String,
    permissions: Vec<String>,
) -> Result<Outcome, CliError> {
    let caller = PrincipalId::parse(caller)?;
    let principal = PrincipalId::parse(principal)?;
    let role = Role::parse(role)?;
    let permissions = PermissionSet::parse(permissions)?;
    globals.mutate(|registry| {
        registry
            .add_collaborator(&caller, event, principal, role, permissions)
            .map(|()| true)
    })
}
