//! Keybinding definitions for the TUI.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    MoveUp,
    MoveDown,
    PrevPage,
    NextPage,
    CyclePageSize,
    Refresh,
    ViewItem,
    EditItem,
    DeleteItem,
    Confirm,
    Cancel,
    OpenHelp,
}

pub fn map_key(event: KeyEvent) -> Option<Action> {
    let KeyEvent { code, modifiers, .. } = event;

    if modifiers.contains(KeyModifiers::CONTROL) {
        return match code {
            KeyCode::Char('c') => Some(Action::Quit),
            KeyCode::Char('r') => Some(Action::Refresh),
            _ => None,
        };
    }

    match code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Char('?') => Some(Action::OpenHelp),
        KeyCode::Char('r') => Some(Action::Refresh),
        KeyCode::Char('s') => Some(Action::CyclePageSize),
        KeyCode::Char('v') => Some(Action::ViewItem),
        KeyCode::Char('e') => Some(Action::EditItem),
        KeyCode::Char('d') => Some(Action::DeleteItem),
        KeyCode::Enter => Some(Action::Confirm),
        KeyCode::Esc => Some(Action::Cancel),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::MoveUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::MoveDown),
        KeyCode::Left | KeyCode::Char('h') | KeyCode::PageUp => Some(Action::PrevPage),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::PageDown => Some(Action::NextPage),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn vim_and_arrow_navigation_agree() {
        assert_eq!(map_key(key(KeyCode::Char('j'))), Some(Action::MoveDown));
        assert_eq!(map_key(key(KeyCode::Down)), Some(Action::MoveDown));
        assert_eq!(map_key(key(KeyCode::Char('k'))), Some(Action::MoveUp));
        assert_eq!(map_key(key(KeyCode::Up)), Some(Action::MoveUp));
    }

    #[test]
    fn page_keys_map_to_page_actions() {
        assert_eq!(map_key(key(KeyCode::Char('h'))), Some(Action::PrevPage));
        assert_eq!(map_key(key(KeyCode::Char('l'))), Some(Action::NextPage));
        assert_eq!(map_key(key(KeyCode::PageDown)), Some(Action::NextPage));
    }

    #[test]
    fn ctrl_c_quits() {
        let event = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(event), Some(Action::Quit));
    }

    #[test]
    fn unmapped_key_is_none() {
        assert_eq!(map_key(key(KeyCode::Char('z'))), None);
    }
}
