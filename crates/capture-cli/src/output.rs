//! Output formatting utilities.

use capture_core::CaptureEvent;
use capture_store::EventView;

const ROW_WIDTH: usize = 110;

/// Formats an event as a simple table row.
pub fn format_table_row(event: &CaptureEvent) -> String {
    format!(
        "{:<8} {:<10} {:<24} {:>20} {:<12} {}",
        event.event_id,
        event.status,
        truncate(event.facility.as_str(), 24),
        event.co2_amount,
        event.timestamp,
        truncate(&event.doc_hash.to_hex(), 16)
    )
}

/// Prints table header.
#[allow(clippy::print_literal)]
pub fn print_table_header() {
    println!(
        "{:<8} {:<10} {:<24} {:>20} {:<12} {}",
        "EVENT_ID", "STATUS", "FACILITY", "CO2_AMOUNT", "TIMESTAMP", "DOC_HASH"
    );
    println!("{}", "-".repeat(ROW_WIDTH));
}

/// Prints an event with its history in human-readable form.
pub fn print_event_view(view: &EventView) {
    let event = &view.event;
    println!("Event {}", event.event_id);
    println!("  facility:     {}", event.facility);
    println!("  status:       {}", event.status);
    println!("  co2_amount:   {}", event.co2_amount);
    println!("  doc_hash:     {}", event.doc_hash);
    println!("  registered:   {}", event.timestamp);
    println!("  last_updated: {}", event.last_updated);
    if !event.metadata.as_str().is_empty() {
        println!("  metadata:     {}", event.metadata);
    }

    if !view.versions.is_empty() {
        println!("Versions:");
        for v in &view.versions {
            println!(
                "  #{:<4} {:>20} {} @{} {}",
                v.version, v.co2_amount, v.doc_hash, v.timestamp, v.notes
            );
        }
    }
    if !view.collaborators.is_empty() {
        println!("Collaborators:");
        for c in &view.collaborators {
            let tokens: Vec<&str> = c.permissions.iter().map(|t| t.as_str()).collect();
            println!(
                "  {:<24} {:<16} [{}] @{}",
                c.principal,
                c.role,
                tokens.join(", "),
                c.added_at
            );
        }
    }
    if !view.notes.is_empty() {
        println!("Notes:");
        for n in &view.notes {
            println!("  #{:<4} {} @{}: {}", n.note_id, n.author, n.timestamp, n.content);
        }
    }
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", head)
    }
}
