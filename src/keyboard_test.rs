use super::*;

fn sections() -> Vec<SectionBox> {
    vec![
        SectionBox::new(Some("home"), 0.0, 700.0),
        SectionBox::new(Some("about"), 700.0, 700.0),
        SectionBox::new(Some("contact"), 1400.0, 700.0),
    ]
}

// =============================================================
// interpret
// =============================================================

#[test]
fn escape_always_closes_menu() {
    assert_eq!(interpret("Escape", false), Some(KeyCommand::CloseMenu));
    assert_eq!(interpret("Escape", true), Some(KeyCommand::CloseMenu));
}

#[test]
fn arrows_jump_outside_text_fields() {
    assert_eq!(interpret("ArrowDown", false), Some(KeyCommand::Jump(Direction::Next)));
    assert_eq!(interpret("ArrowUp", false), Some(KeyCommand::Jump(Direction::Previous)));
}

#[test]
fn arrows_ignored_in_text_fields() {
    assert_eq!(interpret("ArrowDown", true), None);
    assert_eq!(interpret("ArrowUp", true), None);
}

#[test]
fn other_keys_ignored() {
    assert_eq!(interpret("Enter", false), None);
    assert_eq!(interpret("ArrowLeft", false), None);
}

#[test]
fn text_entry_tags() {
    assert!(is_text_entry("INPUT"));
    assert!(is_text_entry("TEXTAREA"));
    assert!(is_text_entry("input"));
    assert!(!is_text_entry("BUTTON"));
    assert!(!is_text_entry("A"));
}

// =============================================================
// plan_jump
// =============================================================

#[test]
fn down_from_first_section() {
    let jump = plan_jump(&sections(), 0.0, 100.0, Direction::Next);
    assert_eq!(jump, Some(SectionJump { from: 0, to: Some(1) }));
}

#[test]
fn up_from_middle_section() {
    let jump = plan_jump(&sections(), 800.0, 100.0, Direction::Previous);
    assert_eq!(jump, Some(SectionJump { from: 1, to: Some(0) }));
}

#[test]
fn down_at_last_section_is_noop() {
    let jump = plan_jump(&sections(), 1500.0, 100.0, Direction::Next);
    assert_eq!(jump, Some(SectionJump { from: 2, to: None }));
}

#[test]
fn up_at_first_section_is_noop() {
    let jump = plan_jump(&sections(), 0.0, 100.0, Direction::Previous);
    assert_eq!(jump, Some(SectionJump { from: 0, to: None }));
}

#[test]
fn no_current_section_means_no_jump() {
    assert_eq!(plan_jump(&sections(), 5000.0, 100.0, Direction::Next), None);
    assert_eq!(plan_jump(&[], 0.0, 100.0, Direction::Next), None);
}
