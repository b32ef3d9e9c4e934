//! Keyboard navigation: Escape closes the menu, arrows jump between sections.

#[cfg(test)]
#[path = "keyboard_test.rs"]
mod keyboard_test;

use crate::layout::{Direction, SectionBox, adjacent, probe_y, section_at};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    CloseMenu,
    Jump(Direction),
}

/// Map a `KeyboardEvent.key` to a command.
///
/// Arrow keys are ignored while focus is in a text field so they keep moving
/// the caret.
#[must_use]
pub fn interpret(key: &str, focus_in_text_entry: bool) -> Option<KeyCommand> {
    match key {
        "Escape" => Some(KeyCommand::CloseMenu),
        "ArrowDown" if !focus_in_text_entry => Some(KeyCommand::Jump(Direction::Next)),
        "ArrowUp" if !focus_in_text_entry => Some(KeyCommand::Jump(Direction::Previous)),
        _ => None,
    }
}

/// Whether an element with this tag name takes typed text.
#[must_use]
pub fn is_text_entry(tag_name: &str) -> bool {
    tag_name.eq_ignore_ascii_case("input") || tag_name.eq_ignore_ascii_case("textarea")
}

/// A resolved arrow-key jump.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionJump {
    /// Section under the probe point when the key was pressed.
    pub from: usize,
    /// Section to scroll to; `None` at the first/last boundary.
    pub to: Option<usize>,
}

/// Resolve a jump from the section under the probe point.
///
/// `None` means no section is current; the key press is left to the browser.
#[must_use]
pub fn plan_jump(sections: &[SectionBox], scroll_y: f64, probe_offset: f64, direction: Direction) -> Option<SectionJump> {
    let from = section_at(sections, probe_y(scroll_y, probe_offset))?;
    Some(SectionJump { from, to: adjacent(sections, from, direction) })
}
