//! The interactive loop: read an event, update the editor, redraw.

use std::error::Error;
use std::io;
use std::time::Duration;

use crossterm::event::{self, Event};
use crossterm::terminal;
use gridpath_crossterm::{Layout, TerminalRenderer};

use crate::config::DemoConfig;
use crate::editor::{Editor, Effect};
use crate::input::to_command;

/// Run the demonstrator until the user quits. The terminal is restored
/// even when the loop fails.
pub fn run(config: DemoConfig) -> Result<(), Box<dyn Error>> {
    let layout = Layout::new(config.dimension());
    let mut renderer = TerminalRenderer::stdout(layout, config.step_delay());
    let mut editor = Editor::new(config)?;

    let (cols, rows) = terminal::size()?;
    let (need_cols, need_rows) = layout.required_size();
    if cols < need_cols || rows < need_rows {
        log::warn!("terminal is {cols}x{rows}, the grid needs {need_cols}x{need_rows}");
    }

    renderer.init()?;
    let result = event_loop(&mut editor, &mut renderer);
    renderer.close();
    result
}

fn event_loop(
    editor: &mut Editor,
    renderer: &mut TerminalRenderer<io::Stdout>,
) -> Result<(), Box<dyn Error>> {
    draw(editor, renderer)?;
    loop {
        let ev = event::read()?;
        if let Event::Resize(..) = ev {
            renderer.clear()?;
            draw(editor, renderer)?;
            continue;
        }
        let Some(cmd) = to_command(&ev, &renderer.layout()) else {
            continue;
        };
        match editor.update(cmd) {
            None => {}
            Some(Effect::Redraw) => draw(editor, renderer)?,
            Some(Effect::Search(alg)) => {
                renderer.set_cursor(None);
                renderer.set_status(format!("{alg}: searching..."));
                if let Err(e) = editor.search(alg, renderer) {
                    log::info!("{alg} not started: {e}");
                }
                // input typed during the animation is stale by now
                while event::poll(Duration::ZERO)? {
                    event::read()?;
                }
                draw(editor, renderer)?;
            }
            Some(Effect::Quit) => return Ok(()),
        }
    }
}

fn draw(editor: &Editor, renderer: &mut TerminalRenderer<io::Stdout>) -> io::Result<()> {
    renderer.set_cursor(Some(editor.cursor()));
    renderer.set_status(editor.message());
    renderer.draw(editor.grid())
}
