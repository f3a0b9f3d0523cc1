//! Event filtering API for selective listing.

use capture_canonical::PrincipalId;
use capture_core::{CaptureEvent, EventStatus};

use crate::traits::RegistryStore;

/// Trait for filtering events during listing.
pub trait EventFilter {
    /// Returns true if the event matches the filter criteria.
    fn matches(&self, event: &CaptureEvent) -> bool;
}

impl<F: EventFilter + ?Sized> EventFilter for Box<F> {
    fn matches(&self, event: &CaptureEvent) -> bool {
        (**self).matches(event)
    }
}

/// Filter by current status.
#[derive(Debug, Clone)]
pub struct StatusFilter {
    /// Status to match.
    pub status: EventStatus,
}

impl EventFilter for StatusFilter {
    fn matches(&self, event: &CaptureEvent) -> bool {
        event.status == self.status
    }
}

/// Filter by registering facility.
#[derive(Debug, Clone)]
pub struct FacilityFilter {
    /// Facility to match.
    pub facility: PrincipalId,
}

impl EventFilter for FacilityFilter {
    fn matches(&self, event: &CaptureEvent) -> bool {
        event.facility == self.facility
    }
}

/// Filter by registration time.
#[derive(Debug, Clone, Default)]
pub struct TimeRangeFilter {
    /// Include events registered at or after this time.
    pub after: Option<u64>,
    /// Include events registered at or before this time.
    pub before: Option<u64>,
}

impl EventFilter for TimeRangeFilter {
    fn matches(&self, event: &CaptureEvent) -> bool {
        if let Some(after) = self.after {
            if event.timestamp < after {
                return false;
            }
        }
        if let Some(before) = self.before {
            if event.timestamp > before {
                return false;
            }
        }
        true
    }
}

/// Composite filter: all filters must match (AND). Empty matches everything.
#[derive(Default)]
pub struct AndFilter {
    /// Filters to combine with AND logic.
    pub filters: Vec<Box<dyn EventFilter>>,
}

impl EventFilter for AndFilter {
    fn matches(&self, event: &CaptureEvent) -> bool {
        self.filters.iter().all(|f| f.matches(event))
    }
}

/// Composite filter: any filter must match (OR). Empty matches nothing.
#[derive(Default)]
pub struct OrFilter {
    /// Filters to combine with OR logic.
    pub filters: Vec<Box<dyn EventFilter>>,
}

impl EventFilter for OrFilter {
    fn matches(&self, event: &CaptureEvent) -> bool {
        self.filters.iter().any(|f| f.matches(event))
    }
}

/// Events matching `filter`, in ascending id order.
pub fn filter_events<S, F>(store: &S, filter: &F) -> Vec<CaptureEvent>
where
    S: RegistryStore + ?Sized,
    F: EventFilter + ?Sized,
{
    store
        .events()
        .into_iter()
        .filter(|event| filter.matches(event))
        .collect()
}
