//! Keyboard and mouse dispatch for the terminal frontend.
//!
//! Keys map to an [`InputAction`] first so the mapping can be tested without
//! a session; [`apply`] then drives the session.

use crate::core::modes::GameMode;
use crate::core::session::Session;
use crate::ui::raster::cell_to_world;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use rand::Rng;
use ratatui::layout::Rect;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputAction {
    /// Space / Up / Enter.
    Primary,
    SelectMode(GameMode),
    ToggleRainbow,
    EditName,
    Continue,
    Share,
    Challenge,
    TypeChar(char),
    Backspace,
    CommitName,
    /// Click at world coordinates.
    Pointer { x: f64, y: f64 },
    Quit,
}

/// Translate a key press. While the name box is active, text keys go to it
/// and Esc closes it instead of quitting.
pub fn map_key(key: KeyEvent, name_entry_active: bool) -> Option<InputAction> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(InputAction::Quit);
    }

    if name_entry_active {
        return match key.code {
            KeyCode::Enter | KeyCode::Esc => Some(InputAction::CommitName),
            KeyCode::Backspace => Some(InputAction::Backspace),
            KeyCode::Char(c) => Some(InputAction::TypeChar(c)),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char(' ') | KeyCode::Up | KeyCode::Enter => Some(InputAction::Primary),
        KeyCode::Char(c @ '1'..='4') => {
            let index = c as usize - '1' as usize;
            Some(InputAction::SelectMode(GameMode::from_index(index)))
        }
        KeyCode::Char('r') | KeyCode::Char('R') => Some(InputAction::ToggleRainbow),
        KeyCode::Char('n') | KeyCode::Char('N') => Some(InputAction::EditName),
        KeyCode::Char('c') | KeyCode::Char('C') => Some(InputAction::Continue),
        KeyCode::Char('s') | KeyCode::Char('S') => Some(InputAction::Share),
        KeyCode::Char('x') | KeyCode::Char('X') => Some(InputAction::Challenge),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(InputAction::Quit),
        _ => None,
    }
}

/// Left-button presses inside the play rectangle become pointer actions.
pub fn map_mouse(event: MouseEvent, play: Rect, world_width: f64, world_height: f64) -> Option<InputAction> {
    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            cell_to_world(play, event.column, event.row, world_width, world_height)
                .map(|(x, y)| InputAction::Pointer { x, y })
        }
        _ => None,
    }
}

/// Apply `action` to the session. Returns false when the player quits.
pub fn apply<R: Rng>(session: &mut Session, action: InputAction, rng: &mut R) -> bool {
    match action {
        InputAction::Primary => session.primary_action(rng),
        InputAction::SelectMode(mode) => {
            session.select_mode(mode, rng);
        }
        InputAction::ToggleRainbow => session.toggle_rainbow(rng),
        InputAction::EditName => session.begin_name_entry(),
        InputAction::Continue => {
            session.continue_with_ad();
        }
        InputAction::Share => {
            session.share();
        }
        InputAction::Challenge => {
            session.challenge();
        }
        InputAction::TypeChar(c) => session.type_char(c),
        InputAction::Backspace => session.backspace(),
        InputAction::CommitName => session.commit_name(),
        InputAction::Pointer { x, y } => session.pointer(x, y, rng),
        InputAction::Quit => {
            tracing::info!("quit requested");
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::session::{FlightPhase, GameState};
    use crate::core::GameConfig;
    use crossterm::event::KeyEventState;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_primary_keys() {
        for code in [KeyCode::Char(' '), KeyCode::Up, KeyCode::Enter] {
            assert_eq!(map_key(press(code), false), Some(InputAction::Primary));
        }
    }

    #[test]
    fn test_number_keys_select_modes() {
        assert_eq!(
            map_key(press(KeyCode::Char('3')), false),
            Some(InputAction::SelectMode(GameMode::Stormy))
        );
        assert_eq!(map_key(press(KeyCode::Char('5')), false), None);
    }

    #[test]
    fn test_name_entry_captures_letters_and_esc() {
        assert_eq!(
            map_key(press(KeyCode::Char('q')), true),
            Some(InputAction::TypeChar('q'))
        );
        assert_eq!(map_key(press(KeyCode::Esc), true), Some(InputAction::CommitName));
        assert_eq!(map_key(press(KeyCode::Esc), false), Some(InputAction::Quit));
    }

    #[test]
    fn test_release_events_ignored() {
        let release = KeyEvent {
            code: KeyCode::Char(' '),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(map_key(release, false), None);
    }

    #[test]
    fn test_ctrl_c_quits_even_in_name_entry() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(key, true), Some(InputAction::Quit));
    }

    #[test]
    fn test_click_maps_into_world() {
        let play = Rect::new(10, 2, 40, 30);
        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 30,
            row: 17,
            modifiers: KeyModifiers::NONE,
        };
        let Some(InputAction::Pointer { x, y }) = map_mouse(click, play, 400.0, 600.0) else {
            panic!("expected a pointer action");
        };
        assert!((x - 205.0).abs() < 1e-9);
        assert!((y - 310.0).abs() < 1e-9);

        let outside = MouseEvent { column: 2, ..click };
        assert_eq!(map_mouse(outside, play, 400.0, 600.0), None);
    }

    #[test]
    fn test_apply_drives_session() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut session = Session::new(GameConfig::default(), GameMode::Normal, &mut rng);

        assert!(apply(&mut session, InputAction::EditName, &mut rng));
        for c in "Wright".chars() {
            apply(&mut session, InputAction::TypeChar(c), &mut rng);
        }
        apply(&mut session, InputAction::CommitName, &mut rng);
        assert_eq!(session.player_name(), "Wright");

        apply(&mut session, InputAction::Primary, &mut rng);
        assert_eq!(session.state, GameState::Playing(FlightPhase::Runway));
        assert!(!apply(&mut session, InputAction::Quit, &mut rng));
    }
}
