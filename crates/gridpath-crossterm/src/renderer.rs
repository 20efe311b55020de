//! Drawing grids to a crossterm terminal.

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use crossterm::{
    cursor, event, queue,
    style::{Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self, ClearType},
};

use gridpath_core::{Grid, Pos};
use gridpath_search::StepObserver;

use crate::layout::Layout;
use crate::palette;

pub const HELP: &str =
    "arrows/hjkl move  s start  e end  space wall  x erase  1 dfs  2 bfs  3 iddfs  r random  c clear  q quit";

/// Paints grids into any [`Write`] sink, usually stdout.
///
/// As a [`StepObserver`] it redraws the whole grid and then sleeps for the
/// configured step delay, which paces the animation.
pub struct TerminalRenderer<W: Write> {
    out: W,
    layout: Layout,
    step_delay: Duration,
    cursor: Option<Pos>,
    status: String,
}

impl TerminalRenderer<io::Stdout> {
    /// Renderer writing to stdout.
    pub fn stdout(layout: Layout, step_delay: Duration) -> Self {
        Self::new(io::stdout(), layout, step_delay)
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W, layout: Layout, step_delay: Duration) -> Self {
        Self {
            out,
            layout,
            step_delay,
            cursor: None,
            status: String::new(),
        }
    }

    #[inline]
    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Highlight `pos` on the next draw.
    pub fn set_cursor(&mut self, pos: Option<Pos>) {
        self.cursor = pos;
    }

    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
    }

    /// Enter raw mode and the alternate screen, enabling mouse capture.
    pub fn init(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        queue!(
            self.out,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            event::EnableMouseCapture,
            terminal::Clear(ClearType::All)
        )?;
        self.out.flush()
    }

    /// Undo [`init`](TerminalRenderer::init). Errors are ignored since this
    /// runs on the way out.
    pub fn close(&mut self) {
        let _ = queue!(
            self.out,
            ResetColor,
            event::DisableMouseCapture,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = self.out.flush();
        let _ = terminal::disable_raw_mode();
    }

    /// Paint every cell, the cursor, the status line and the help line.
    pub fn draw(&mut self, grid: &Grid) -> io::Result<()> {
        for cell in grid.cells() {
            let (x, y) = self.layout.screen_of(cell.pos());
            let glyph = if self.cursor == Some(cell.pos()) { "[]" } else { "  " };
            queue!(
                self.out,
                cursor::MoveTo(x, y),
                SetBackgroundColor(palette::color(cell.state())),
                SetForegroundColor(palette::CURSOR),
                Print(glyph)
            )?;
        }
        queue!(
            self.out,
            ResetColor,
            cursor::MoveTo(self.layout.left, self.layout.status_row()),
            terminal::Clear(ClearType::CurrentLine),
            Print(&self.status),
            cursor::MoveTo(self.layout.left, self.layout.help_row()),
            terminal::Clear(ClearType::CurrentLine),
            Print(HELP)
        )?;
        self.out.flush()
    }

    /// Clear the whole screen; needed when the grid shrinks.
    pub fn clear(&mut self) -> io::Result<()> {
        queue!(self.out, ResetColor, terminal::Clear(ClearType::All))?;
        self.out.flush()
    }

    /// Consume the renderer, returning the sink.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> StepObserver for TerminalRenderer<W> {
    fn on_step(&mut self, grid: &Grid) {
        if let Err(e) = self.draw(grid) {
            log::warn!("redraw failed: {e}");
        }
        if !self.step_delay.is_zero() {
            thread::sleep(self.step_delay);
        }
    }
}
