/// Keyboard → navigation commands.
///
/// The browse loop blocks here for exactly one command per frame. Keys with
/// no meaning are swallowed without touching any state; a terminal resize
/// surfaces as a redraw request so the next frame picks up the new size.

use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::ui::viewport::Dir;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Command {
    Scroll(Dir),
    Redraw,
    Quit,
}

// ── Key Constants ──

const KEYS_UP: &[KeyCode] = &[KeyCode::Up, KeyCode::Char('w'), KeyCode::Char('W')];
const KEYS_DOWN: &[KeyCode] = &[KeyCode::Down, KeyCode::Char('s'), KeyCode::Char('S')];
const KEYS_LEFT: &[KeyCode] = &[KeyCode::Left, KeyCode::Char('a'), KeyCode::Char('A')];
const KEYS_RIGHT: &[KeyCode] = &[KeyCode::Right, KeyCode::Char('d'), KeyCode::Char('D')];
const KEYS_QUIT: &[KeyCode] = &[KeyCode::Esc, KeyCode::Char('q'), KeyCode::Char('Q')];

/// Block until the next recognized command.
pub fn read_command() -> io::Result<Command> {
    loop {
        match event::read()? {
            Event::Key(key) if key.kind != KeyEventKind::Release => {
                if let Some(cmd) = translate(key) {
                    return Ok(cmd);
                }
            }
            Event::Resize(_, _) => return Ok(Command::Redraw),
            _ => {}
        }
    }
}

fn translate(key: KeyEvent) -> Option<Command> {
    if key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
    {
        return Some(Command::Quit);
    }
    if KEYS_QUIT.contains(&key.code) {
        return Some(Command::Quit);
    }
    if KEYS_UP.contains(&key.code) {
        return Some(Command::Scroll(Dir::Up));
    }
    if KEYS_DOWN.contains(&key.code) {
        return Some(Command::Scroll(Dir::Down));
    }
    if KEYS_LEFT.contains(&key.code) {
        return Some(Command::Scroll(Dir::Left));
    }
    if KEYS_RIGHT.contains(&key.code) {
        return Some(Command::Scroll(Dir::Right));
    }
    None
}

// ══════════════════════════════════════════════════════════════
// Unit tests
// ══════════════════════════════════════════════════════════════
