//! List command implementation.

use capture_canonical::{PrincipalId, ValidationError};
use capture_core::EventStatus;
use capture_store::{AndFilter, EventFilter, FacilityFilter, StatusFilter, TimeRangeFilter};

use crate::output;
use crate::session::{CliError, Globals, Outcome};

pub fn run(
    globals: &Globals,
    status: Option<String>,
    facility: Option<String>,
    after: Option<u64>,
    before: Option<u64>,
    json: bool,
) -> Result<Outcome, CliError> {
    let mut filters: Vec<Box<dyn EventFilter>> = Vec::new();
    if let Some(status) = status {
        let status = EventStatus::from_name(&status)
            .ok_or(ValidationError::PatternMismatch { field: "status", value: status })?;
        filters.push(Box::new(StatusFilter { status }));
    }
    if let Some(facility) = facility {
        filters.push(Box::new(FacilityFilter {
            facility: PrincipalId::parse(facility)?,
        }));
    }
    if after.is_some() || before.is_some() {
        filters.push(Box::new(TimeRangeFilter { after, before }));
    }

    let registry = globals.open()?;
    let events = registry.list_events(&AndFilter { filters });

    if !json {
        output::print_table_header();
    }
    for event in &events {
        if json {
            println!("{}", serde_json::to_string(event)?);
        } else {
            println!("{}", output::format_table_row(event));
        }
    }
    Ok(Outcome::Done)
}
