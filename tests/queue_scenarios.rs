//! Queue scenario and property tests.

use chrono::Local;
use proptest::prelude::*;
use walkin_queue::{estimated_wait_minutes, DualLaneQueue, Lane, PatientRecord, Specialty};

fn make_patient(name: &str, phone: &str, is_emergency: bool) -> PatientRecord {
    PatientRecord::new(
        name.to_string(),
        phone.to_string(),
        "18/10/2026".to_string(),
        "08:00".to_string(),
        Specialty::GeneralMedicine,
        is_emergency,
    )
}

/// Ana and Bea (routine) registered before Cid (emergency).
fn three_patient_queue() -> DualLaneQueue {
    let mut queue = DualLaneQueue::new();
    queue.enqueue(make_patient("Ana", "111", false));
    queue.enqueue(make_patient("Bea", "222", false));
    queue.enqueue(make_patient("Cid", "333", true));
    queue
}

#[test]
fn test_snapshot_puts_emergency_first() {
    let queue = three_patient_queue();

    let rows = queue.snapshot_at(Local::now());
    let order: Vec<_> = rows
        .iter()
        .map(|r| (r.name.as_str(), r.position, r.lane_label()))
        .collect();

    assert_eq!(
        order,
        vec![
            ("Cid", 1, "EMERGENCY"),
            ("Ana", 2, "NORMAL"),
            ("Bea", 3, "NORMAL"),
        ]
    );
}

#[test]
fn test_dequeue_then_peek() {
    let mut queue = three_patient_queue();

    assert_eq!(queue.dequeue().map(|p| p.name().to_string()).as_deref(), Some("Cid"));
    assert_eq!(queue.dequeue().map(|p| p.name().to_string()).as_deref(), Some("Ana"));

    let peeked = queue.peek().expect("Bea is waiting").record_id();
    assert_eq!(queue.peek().map(|p| p.name()), Some("Bea"));
    assert_eq!(queue.peek().map(|p| p.record_id()), Some(peeked));
    assert_eq!(queue.size(), 1);
}

#[test]
fn test_cancel_is_case_insensitive() {
    let mut queue = three_patient_queue();

    assert!(queue.cancel_by_name("ana"));
    assert!(queue.find_by_name("Ana").is_none());
    assert_eq!(queue.size(), 2);
    assert!(!queue.cancel_by_name("ana"));
}

#[test]
fn test_find_reports_combined_position() {
    let queue = three_patient_queue();

    let hit = queue.find_by_name("Bea").expect("Bea is waiting");

    assert_eq!(hit.record.name(), "Bea");
    assert_eq!(hit.record.phone(), "222");
    assert_eq!(hit.position, 3);
    assert_eq!(estimated_wait_minutes(hit.position, 15), 30);
}

#[test]
fn test_find_positions_match_snapshot() {
    let queue = three_patient_queue();

    for row in queue.snapshot() {
        let hit = queue.find_by_name(&row.name).expect("listed patient is found");
        assert_eq!(hit.position, row.position);
        assert_eq!(hit.record.lane(), row.lane);
    }
}

#[test]
fn test_empty_statistics_are_zero() {
    let stats = DualLaneQueue::new().statistics();

    assert_eq!(stats.total, 0);
    assert_eq!(stats.emergencies, 0);
    assert_eq!(stats.normals, 0);
    assert_eq!(stats.average_wait_minutes, 0);
}

#[test]
fn test_queue_accepts_unvalidated_records() {
    let mut queue = DualLaneQueue::new();
    queue.enqueue(make_patient("", "", false));

    assert_eq!(queue.size(), 1);
    assert!(queue.find_by_name("").is_some());
}

#[derive(Debug, Clone)]
enum Op {
    Enqueue(bool),
    Dequeue,
    Cancel(usize),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => any::<bool>().prop_map(Op::Enqueue),
        2 => Just(Op::Dequeue),
        1 => (0usize..20).prop_map(Op::Cancel),
    ]
}

proptest! {
    #[test]
    fn prop_size_tracks_successful_operations(ops in prop::collection::vec(op_strategy(), 0..60)) {
        let mut queue = DualLaneQueue::new();
        let mut expected = 0usize;

        for (i, op) in ops.iter().enumerate() {
            match op {
                Op::Enqueue(is_emergency) => {
                    queue.enqueue(make_patient(&format!("P{}", i), "1", *is_emergency));
                    expected += 1;
                }
                Op::Dequeue => {
                    if queue.dequeue().is_some() {
                        expected -= 1;
                    }
                }
                Op::Cancel(target) => {
                    if queue.cancel_by_name(&format!("p{}", target)) {
                        expected -= 1;
                    }
                }
            }
            prop_assert_eq!(queue.size(), expected);
            prop_assert_eq!(queue.is_empty(), expected == 0);
        }
    }

    #[test]
    fn prop_dequeue_order_is_lane_then_fifo(flags in prop::collection::vec(any::<bool>(), 0..40)) {
        let mut queue = DualLaneQueue::new();
        for (i, is_emergency) in flags.iter().enumerate() {
            queue.enqueue(make_patient(&format!("P{}", i), "1", *is_emergency));
        }

        let mut expected: Vec<String> = Vec::new();
        for emergency_pass in [true, false] {
            for (i, is_emergency) in flags.iter().enumerate() {
                if *is_emergency == emergency_pass {
                    expected.push(format!("P{}", i));
                }
            }
        }

        let mut served = Vec::new();
        let mut seen_normal = false;
        while let Some(patient) = queue.dequeue() {
            if patient.lane() == Lane::Normal {
                seen_normal = true;
            } else {
                prop_assert!(!seen_normal, "emergency served after a normal patient");
            }
            served.push(patient.name().to_string());
        }

        prop_assert_eq!(served, expected);
        prop_assert!(queue.is_empty());
    }

    #[test]
    fn prop_peek_does_not_mutate(flags in prop::collection::vec(any::<bool>(), 1..20)) {
        let mut queue = DualLaneQueue::new();
        for (i, is_emergency) in flags.iter().enumerate() {
            queue.enqueue(make_patient(&format!("P{}", i), "1", *is_emergency));
        }

        let size = queue.size();
        let first = queue.peek().map(|p| p.record_id());
        let second = queue.peek().map(|p| p.record_id());

        prop_assert_eq!(first, second);
        prop_assert_eq!(queue.size(), size);
        prop_assert_eq!(queue.dequeue().map(|p| p.record_id()), first);
    }
}
