use std::collections::BTreeSet;
use std::thread;

use capture_canonical::{DocHash, Metadata, NoteContent, PrincipalId};
use capture_core::ManualClock;
use capture_registry::{Registry, SharedRegistry};

fn principal(name: &str) -> PrincipalId {
    PrincipalId::parse(name).unwrap()
}

#[test]
fn test_concurrent_registrations_get_distinct_ids() {
    let shared = SharedRegistry::new(Registry::deploy(principal("org:admin"), ManualClock::new(1)));

    let ids: Vec<u64> = thread::scope(|scope| {
        let handles: Vec<_> = (0u8..8)
            .map(|worker| {
                let shared = shared.clone();
                scope.spawn(move || {
                    let owner = principal(&format!("org:plant-{worker}"));
                    (0u8..16)
                        .map(|i| {
                            let mut bytes = [0u8; 32];
                            bytes[0] = worker;
                            bytes[1] = i;
                            shared
                                .write(|r| {
                                    r.register_capture_event(
                                        &owner,
                                        1,
                                        DocHash::new(bytes),
                                        Metadata::default(),
                                    )
                                })
                                .unwrap()
                        })
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect()
    });

    let unique: BTreeSet<u64> = ids.iter().copied().collect();
    assert_eq!(unique.len(), 128);
    assert_eq!(unique.first(), Some(&1));
    assert_eq!(unique.last(), Some(&128));
    assert_eq!(shared.read(|r| r.get_next_event_id()), 129);
}

#[test]
fn test_concurrent_notes_share_one_counter() {
    let owner = principal("org:plant");
    let mut registry = Registry::deploy(principal("org:admin"), ManualClock::new(1));
    for h in 0u8..4 {
        registry
            .register_capture_event(&owner, 1, DocHash::new([h; 32]), Metadata::default())
            .unwrap();
    }
    let shared = SharedRegistry::new(registry);

    thread::scope(|scope| {
        for event_id in 1u64..=4 {
            let shared = shared.clone();
            let owner = owner.clone();
            scope.spawn(move || {
                for _ in 0..10 {
                    shared
                        .write(|r| r.add_note(&owner, event_id, NoteContent::default()))
                        .unwrap();
                }
            });
        }
        // Readers run alongside writers and only see committed notes.
        let reader = shared.clone();
        scope.spawn(move || {
            for _ in 0..50 {
                let total: usize = reader.read(|r| {
                    (1u64..=4)
                        .map(|id| r.event_view(id).map(|v| v.notes.len()).unwrap_or(0))
                        .sum()
                });
                assert!(total <= 40);
            }
        });
    });

    let ids: BTreeSet<u64> = shared.read(|r| {
        (1u64..=4)
            .flat_map(|id| r.event_view(id).map(|v| v.notes).unwrap_or_default())
            .map(|n| n.note_id)
            .collect()
    });
    assert_eq!(ids, (1u64..=40).collect::<BTreeSet<_>>());
}
