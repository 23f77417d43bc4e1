use tracing::debug;

use super::tools::Tool;
use super::SeatMapEditor;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCode {
    Char(char),
    Digit(u8),
    Numpad(u8),
    Other,
}

impl KeyCode {
    /// Разбор `KeyboardEvent.code` из браузера: `KeyH`, `Digit1`, `Numpad1`
    pub fn from_dom_code(code: &str) -> Self {
        if let Some(letter) = code.strip_prefix("Key") {
            let mut chars = letter.chars();
            if let (Some(c), None) = (chars.next(), chars.next()) {
                return KeyCode::Char(c.to_ascii_lowercase());
            }
        }
        if let Some(digit) = code.strip_prefix("Digit").and_then(|d| d.parse::<u8>().ok()) {
            return KeyCode::Digit(digit);
        }
        if let Some(digit) = code.strip_prefix("Numpad").and_then(|d| d.parse::<u8>().ok()) {
            return KeyCode::Numpad(digit);
        }
        KeyCode::Other
    }
}

/// Где сейчас фокус. В полях ввода горячие клавиши не работают.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusTarget {
    #[default]
    None,
    TextInput,
    NumberInput,
    Select,
    Other,
}

impl FocusTarget {
    pub fn is_input(self) -> bool {
        matches!(self, FocusTarget::TextInput | FocusTarget::NumberInput | FocusTarget::Select)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: KeyCode,
    pub focus: FocusTarget,
}

impl KeyEvent {
    pub fn new(key: KeyCode, focus: FocusTarget) -> Self {
        Self { key, focus }
    }
}

/// Подписка на клавиатуру, живет пока смонтирован редактор.
/// Создается через `SeatMapEditor::shortcuts`, отписка - drop.
pub struct ShortcutScope<'a> {
    editor: &'a mut SeatMapEditor,
}

impl<'a> ShortcutScope<'a> {
    /// Возвращает true, если событие обработано
    pub fn dispatch(&mut self, event: &KeyEvent) -> bool {
        if event.focus.is_input() {
            return false;
        }

        match event.key {
            KeyCode::Char(c) => match c.to_ascii_lowercase() {
                'h' => self.editor.set_tool(Tool::Pan),
                'a' => self.editor.set_tool(Tool::Add),
                'e' => self.editor.set_tool(Tool::Eraser),
                _ => false,
            },
            KeyCode::Digit(n) | KeyCode::Numpad(n) if (1..=9).contains(&n) => {
                self.editor.select_tier_by_index(usize::from(n - 1))
            }
            _ => false,
        }
    }

    pub fn editor(&self) -> &SeatMapEditor {
        &*self.editor
    }

    pub fn editor_mut(&mut self) -> &mut SeatMapEditor {
        &mut *self.editor
    }
}

impl Drop for ShortcutScope<'_> {
    fn drop(&mut self) {
        debug!("Seat map shortcuts unsubscribed");
    }
}

impl SeatMapEditor {
    pub fn shortcuts(&mut self) -> ShortcutScope<'_> {
        debug!("Seat map shortcuts subscribed");
        ShortcutScope { editor: self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TicketTier;

    fn editor() -> SeatMapEditor {
        let mut editor = SeatMapEditor::default();
        editor.set_tiers(vec![
            TicketTier::new("vip", "VIP", 100.0, 10, "#d4af37"),
            TicketTier::new("std", "Standard", 20.0, 50, "#3b82f6"),
        ]);
        editor
    }

    #[test]
    fn letter_shortcuts_switch_tools() {
        let mut editor = editor();
        let mut scope = editor.shortcuts();
        assert!(scope.dispatch(&KeyEvent::new(KeyCode::Char('H'), FocusTarget::None)));
        assert_eq!(scope.editor().tool(), &Tool::Pan);
        assert!(scope.dispatch(&KeyEvent::new(KeyCode::from_dom_code("KeyE"), FocusTarget::Other)));
        assert_eq!(scope.editor().tool(), &Tool::Eraser);
    }

    #[test]
    fn digits_pick_existing_tiers_only() {
        let mut editor = editor();
        let mut scope = editor.shortcuts();
        assert!(scope.dispatch(&KeyEvent::new(KeyCode::from_dom_code("Numpad2"), FocusTarget::None)));
        assert_eq!(scope.editor().tool(), &Tool::Tier("std".into()));
        assert!(!scope.dispatch(&KeyEvent::new(KeyCode::Digit(3), FocusTarget::None)));
        assert!(!scope.dispatch(&KeyEvent::new(KeyCode::Digit(0), FocusTarget::None)));
        assert_eq!(scope.editor().tool(), &Tool::Tier("std".into()));
    }

    #[test]
    fn ignored_while_typing() {
        let mut editor = editor();
        {
            let mut scope = editor.shortcuts();
            for focus in [FocusTarget::TextInput, FocusTarget::NumberInput, FocusTarget::Select] {
                assert!(!scope.dispatch(&KeyEvent::new(KeyCode::Char('h'), focus)));
            }
        }
        assert_eq!(editor.tool(), &Tool::Add);
    }

    #[test]
    fn parses_dom_codes() {
        assert_eq!(KeyCode::from_dom_code("KeyA"), KeyCode::Char('a'));
        assert_eq!(KeyCode::from_dom_code("Digit7"), KeyCode::Digit(7));
        assert_eq!(KeyCode::from_dom_code("Numpad9"), KeyCode::Numpad(9));
        assert_eq!(KeyCode::from_dom_code("Escape"), KeyCode::Other);
        assert_eq!(KeyCode::from_dom_code("NumpadAdd"), KeyCode::Other);
    }
}
