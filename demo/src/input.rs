//! Crossterm events to [`Command`]s.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEventKind};
use gridpath_core::Dir;
use gridpath_crossterm::Layout;
use gridpath_search::{Algorithm, Iddfs};

use crate::editor::Command;

fn key_command(code: KeyCode) -> Option<Command> {
    let cmd = match code {
        KeyCode::Up | KeyCode::Char('k') => Command::Move(Dir::Up),
        KeyCode::Down | KeyCode::Char('j') => Command::Move(Dir::Down),
        KeyCode::Left | KeyCode::Char('h') => Command::Move(Dir::Left),
        KeyCode::Right | KeyCode::Char('l') => Command::Move(Dir::Right),
        KeyCode::Char('s') => Command::PlaceStart,
        KeyCode::Char('e') => Command::PlaceEnd,
        KeyCode::Char(' ') => Command::ToggleBarrier,
        KeyCode::Char('x') | KeyCode::Delete | KeyCode::Backspace => Command::Erase,
        KeyCode::Char('1') => Command::Run(Algorithm::Dfs),
        KeyCode::Char('2') => Command::Run(Algorithm::Bfs),
        KeyCode::Char('3') => Command::Run(Algorithm::Iddfs(Iddfs::unbounded())),
        KeyCode::Char('r') => Command::Randomize,
        KeyCode::Char('c') => Command::Clear,
        KeyCode::Char('q') | KeyCode::Esc => Command::Quit,
        _ => return None,
    };
    Some(cmd)
}

/// Translate a terminal event. Mouse positions outside the grid and key
/// releases are dropped.
pub fn to_command(ev: &Event, layout: &Layout) -> Option<Command> {
    match ev {
        Event::Key(KeyEvent { code, kind, .. }) => {
            if *kind == KeyEventKind::Release {
                return None;
            }
            key_command(*code)
        }
        Event::Mouse(me) => {
            let pos = layout.cell_at(me.column, me.row)?;
            match me.kind {
                MouseEventKind::Down(MouseButton::Left) | MouseEventKind::Drag(MouseButton::Left) => {
                    Some(Command::Paint(pos))
                }
                MouseEventKind::Down(MouseButton::Right)
                | MouseEventKind::Drag(MouseButton::Right) => Some(Command::EraseAt(pos)),
                _ => None,
            }
        }
        _ => None,
    }
}
