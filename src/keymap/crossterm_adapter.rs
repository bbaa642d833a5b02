//! Adapter to convert crossterm key events to our Keystroke type

use crossterm::event::{KeyCode as CtKeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::types::{KeyCode, Keystroke, Modifiers};

/// Convert a crossterm key event to our Keystroke type
///
/// Returns None for key releases and keys that cannot be mapped.
pub fn keystroke_from_crossterm(event: &KeyEvent) -> Option<Keystroke> {
    if event.kind == KeyEventKind::Release {
        return None;
    }

    let mut mods = Modifiers::NONE;
    for (ct, ours) in [
        (KeyModifiers::CONTROL, Modifiers::CTRL),
        (KeyModifiers::SHIFT, Modifiers::SHIFT),
        (KeyModifiers::ALT, Modifiers::ALT),
        (KeyModifiers::SUPER | KeyModifiers::META, Modifiers::META),
    ] {
        if event.modifiers.intersects(ct) {
            mods |= ours;
        }
    }

    let key = match event.code {
        CtKeyCode::Char(' ') => KeyCode::Space,
        CtKeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
        CtKeyCode::Enter => KeyCode::Enter,
        CtKeyCode::Esc => KeyCode::Escape,
        CtKeyCode::Tab => KeyCode::Tab,
        // Terminals report Shift+Tab as its own key
        CtKeyCode::BackTab => {
            return Some(Keystroke::new(KeyCode::Tab, mods | Modifiers::SHIFT));
        }
        CtKeyCode::Backspace => KeyCode::Backspace,
        CtKeyCode::Up => KeyCode::Up,
        CtKeyCode::Down => KeyCode::Down,
        CtKeyCode::Left => KeyCode::Left,
        CtKeyCode::Right => KeyCode::Right,
        _ => return None,
    };

    Some(Keystroke::new(key, mods))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: CtKeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_character_key() {
        let stroke = keystroke_from_crossterm(&press(CtKeyCode::Char('q'), KeyModifiers::NONE));
        assert_eq!(stroke, Some(Keystroke::char('q')));
    }

    #[test]
    fn test_uppercase_char_normalized() {
        let stroke =
            keystroke_from_crossterm(&press(CtKeyCode::Char('Q'), KeyModifiers::SHIFT)).unwrap();
        assert_eq!(stroke.key, KeyCode::Char('q'));
        assert!(stroke.mods.shift());
    }

    #[test]
    fn test_ctrl_modifier() {
        let stroke = keystroke_from_crossterm(&press(CtKeyCode::Char('q'), KeyModifiers::CONTROL));
        assert_eq!(
            stroke,
            Some(Keystroke::new(KeyCode::Char('q'), Modifiers::CTRL))
        );
    }

    #[test]
    fn test_named_keys() {
        assert_eq!(
            keystroke_from_crossterm(&press(CtKeyCode::Esc, KeyModifiers::NONE)),
            Some(Keystroke::key(KeyCode::Escape))
        );
        assert_eq!(
            keystroke_from_crossterm(&press(CtKeyCode::Left, KeyModifiers::NONE)),
            Some(Keystroke::key(KeyCode::Left))
        );
        assert_eq!(
            keystroke_from_crossterm(&press(CtKeyCode::Char(' '), KeyModifiers::NONE)),
            Some(Keystroke::key(KeyCode::Space))
        );
    }

    #[test]
    fn test_super_maps_to_meta() {
        let stroke =
            keystroke_from_crossterm(&press(CtKeyCode::Char('s'), KeyModifiers::SUPER)).unwrap();
        assert_eq!(stroke.mods, Modifiers::META);
    }

    #[test]
    fn test_backtab_is_shift_tab() {
        let stroke =
            keystroke_from_crossterm(&press(CtKeyCode::BackTab, KeyModifiers::SHIFT)).unwrap();
        assert_eq!(stroke.key, KeyCode::Tab);
        assert!(stroke.mods.shift());
    }

    #[test]
    fn test_release_ignored() {
        let mut event = press(CtKeyCode::Enter, KeyModifiers::NONE);
        event.kind = KeyEventKind::Release;
        assert_eq!(keystroke_from_crossterm(&event), None);
    }

    #[test]
    fn test_unmapped_key() {
        assert_eq!(
            keystroke_from_crossterm(&press(CtKeyCode::Insert, KeyModifiers::NONE)),
            None
        );
        assert_eq!(
            keystroke_from_crossterm(&press(CtKeyCode::F(5), KeyModifiers::NONE)),
            None
        );
    }
}
