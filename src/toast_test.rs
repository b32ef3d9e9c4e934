use std::cell::Cell;
use std::rc::Rc;

use super::*;

fn center() -> ToastCenter {
    ToastCenter::new()
}

/// Attachment that counts how many times it has been dropped.
struct Tracked(Rc<Cell<usize>>);

impl Drop for Tracked {
    fn drop(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}

// =============================================================
// ToastKind
// =============================================================

#[test]
fn kind_defaults_to_info() {
    assert_eq!(ToastKind::default(), ToastKind::Info);
}

#[test]
fn kind_class_names() {
    assert_eq!(ToastKind::Success.class_name(), "notification--success");
    assert_eq!(ToastKind::Error.class_name(), "notification--error");
    assert_eq!(ToastKind::Info.class_name(), "notification--info");
}

#[test]
fn kind_accent_styles() {
    assert_eq!(ToastKind::Error.border_color(), "var(--color-error)");
    assert_eq!(
        ToastKind::Success.background(),
        "linear-gradient(to right, rgba(var(--color-success-rgb), 0.1), var(--color-surface))"
    );
}

#[test]
fn phase_transforms() {
    assert_eq!(ToastPhase::Entering.transform(), "translateX(420px)");
    assert_eq!(ToastPhase::Shown.transform(), "translateX(0)");
    assert_eq!(ToastPhase::Leaving.transform(), "translateX(420px)");
}

// =============================================================
// Single slot
// =============================================================

#[test]
fn show_into_empty_center() {
    let mut center = center();
    let shown = center.show("hello", ToastKind::Info);
    assert_eq!(shown.evicted, None);
    let toast = center.current().expect("toast present");
    assert_eq!(toast.id, shown.id);
    assert_eq!(toast.message, "hello");
    assert_eq!(toast.phase, ToastPhase::Entering);
}

#[test]
fn second_show_evicts_first() {
    let mut center = center();
    let first = center.show("one", ToastKind::Success);
    let second = center.show("two", ToastKind::Error);
    assert_eq!(second.evicted, Some(first.id));
    assert_ne!(first.id, second.id);
    let toast = center.current().expect("exactly one toast");
    assert_eq!(toast.message, "two");
    assert_eq!(toast.kind, ToastKind::Error);
}

#[test]
fn ids_are_never_reused() {
    let mut center = center();
    let ids: Vec<_> = (0..5).map(|i| center.show(format!("t{i}"), ToastKind::Info).id).collect();
    assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));
}

// =============================================================
// Lifecycle
// =============================================================

#[test]
fn full_lifecycle() {
    let mut center = center();
    let id = center.show("hi", ToastKind::Info).id;
    assert!(center.reveal(id));
    assert_eq!(center.current().map(|t| t.phase), Some(ToastPhase::Shown));
    assert!(center.dismiss(id));
    assert_eq!(center.current().map(|t| t.phase), Some(ToastPhase::Leaving));
    assert!(center.remove(id));
    assert!(center.current().is_none());
}

#[test]
fn dismiss_twice_only_starts_exit_once() {
    let mut center = center();
    let id = center.show("hi", ToastKind::Info).id;
    assert!(center.dismiss(id));
    assert!(!center.dismiss(id));
}

#[test]
fn dismiss_before_reveal_skips_slide_in() {
    let mut center = center();
    let id = center.show("hi", ToastKind::Info).id;
    assert!(center.dismiss(id));
    assert!(!center.reveal(id));
}

#[test]
fn stale_timers_do_not_touch_replacement() {
    let mut center = center();
    let old = center.show("old", ToastKind::Info).id;
    let new = center.show("new", ToastKind::Success).id;
    assert!(!center.reveal(old));
    assert!(!center.dismiss(old));
    assert!(!center.remove(old));
    let toast = center.current().expect("replacement survives");
    assert_eq!(toast.id, new);
    assert_eq!(toast.phase, ToastPhase::Entering);
}

// =============================================================
// Attachments
// =============================================================

#[test]
fn attachments_live_until_remove() {
    let drops = Rc::new(Cell::new(0));
    let mut center = ToastCenter::new();
    let id = center.show("hi", ToastKind::Info).id;
    assert!(center.attach(id, Tracked(Rc::clone(&drops))));
    assert!(center.dismiss(id));
    assert_eq!(drops.get(), 0, "still sliding out");
    assert!(center.remove(id));
    assert_eq!(drops.get(), 1);
}

#[test]
fn eviction_releases_attachments() {
    let drops = Rc::new(Cell::new(0));
    let mut center = ToastCenter::new();
    let first = center.show("one", ToastKind::Info).id;
    center.attach(first, Tracked(Rc::clone(&drops)));
    center.attach(first, Tracked(Rc::clone(&drops)));
    center.show("two", ToastKind::Info);
    assert_eq!(drops.get(), 2);
}

#[test]
fn attach_to_stale_id_drops_immediately() {
    let drops = Rc::new(Cell::new(0));
    let mut center = ToastCenter::new();
    let old = center.show("old", ToastKind::Info).id;
    let new = center.show("new", ToastKind::Info).id;
    assert!(!center.attach(old, Tracked(Rc::clone(&drops))));
    assert_eq!(drops.get(), 1);
    assert!(center.remove(new));
    assert_eq!(drops.get(), 1);
}

#[test]
fn repeated_toasts_never_accumulate_attachments() {
    let drops = Rc::new(Cell::new(0));
    let mut center = ToastCenter::new();
    for i in 0..10 {
        let id = center.show(format!("t{i}"), ToastKind::Info).id;
        center.attach(id, Tracked(Rc::clone(&drops)));
    }
    assert_eq!(drops.get(), 9);
    assert_eq!(Rc::strong_count(&drops), 2);
}
