use super::*;

// =============================================================
// RevealSet
// =============================================================

#[test]
fn new_set_is_all_waiting() {
    let set = RevealSet::new(3);
    assert_eq!(set.len(), 3);
    assert_eq!(set.waiting(), 3);
    assert_eq!(set.state(0), Some(RevealState::Waiting));
}

#[test]
fn first_intersection_triggers() {
    let mut set = RevealSet::new(2);
    assert!(set.on_intersection(1, true));
    assert_eq!(set.state(1), Some(RevealState::Revealed));
    assert_eq!(set.waiting(), 1);
}

#[test]
fn trigger_is_one_shot() {
    let mut set = RevealSet::new(1);
    assert!(set.on_intersection(0, true));
    assert!(!set.on_intersection(0, false));
    assert!(!set.on_intersection(0, true));
}

#[test]
fn non_intersecting_entries_do_nothing() {
    let mut set = RevealSet::new(1);
    assert!(!set.on_intersection(0, false));
    assert_eq!(set.state(0), Some(RevealState::Waiting));
}

#[test]
fn unknown_index_is_ignored() {
    let mut set = RevealSet::new(1);
    assert!(!set.on_intersection(5, true));
    assert_eq!(set.state(5), None);
}

#[test]
fn empty_set() {
    assert!(RevealSet::new(0).is_empty());
}

// =============================================================
// Hero stagger
// =============================================================

#[test]
fn stagger_starts_at_base_and_steps() {
    let timings = Timings::default();
    assert_eq!(stagger_delay_ms(0, &timings), 500);
    assert_eq!(stagger_delay_ms(1, &timings), 650);
    assert_eq!(stagger_delay_ms(4, &timings), 1100);
}

#[test]
fn stagger_saturates() {
    let timings = Timings::default();
    assert_eq!(stagger_delay_ms(usize::MAX, &timings), u32::MAX);
}
