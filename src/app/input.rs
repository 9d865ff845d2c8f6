use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Focus,
    Blur,
    Clear,
    TogglePassword,
    ToggleError,
    Submit,
    Quit,
}

/// Raw editing keys that fall through the keymap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditKey {
    Insert(char),
    Backspace,
}

pub fn edit_key(key: &KeyEvent) -> Option<EditKey> {
    let control = key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);
    match key.code {
        KeyCode::Char(ch) if !control => Some(EditKey::Insert(ch)),
        KeyCode::Backspace => Some(EditKey::Backspace),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_and_shifted_chars_insert() {
        let key = KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT);
        assert_eq!(edit_key(&key), Some(EditKey::Insert('A')));
        let key = KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE);
        assert_eq!(edit_key(&key), Some(EditKey::Backspace));
    }

    #[test]
    fn control_chords_are_not_text() {
        let key = KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL);
        assert_eq!(edit_key(&key), None);
    }
}
