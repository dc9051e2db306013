use crate::stats::Recorder;
use crossterm::{
    cursor,
    event::{self, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute, queue, terminal,
};
use lifeboard::{Board, LoopState, Pos2, Status, UpdateLoop, view};
use log::warn;
use std::{io, time::Duration};

const FRAME_INTERVAL: Duration = Duration::from_millis(16);

pub enum ConsoleCommand {
    Exit,
    Handled,
}

/// The rows of the board visible on screen, captured while holding the lock
#[derive(Debug, PartialEq, Eq)]
pub struct Frame {
    rows: Vec<String>,
    state: LoopState,
}
impl Frame {
    /// Copies `cols`x`rows` cells starting at `origin`
    fn capture(board: &Board, origin: Pos2, cols: u16, rows: u16, state: LoopState) -> Self {
        let window = board
            .view()
            .window(origin, origin + Pos2::new(cols as i32, rows as i32));
        let rows = window
            .rows()
            .map(|y| {
                window
                    .row(y)
                    .map(|status| match status {
                        Status::Alive => view::ALIVE_GLYPH,
                        Status::Dead => view::DEAD_GLYPH,
                    })
                    .collect()
            })
            .collect();
        Self { rows, state }
    }
}

/// Interactive terminal front end for a running board
pub struct ConsoleRender {
    origin: Pos2,
    cursor: Pos2,
    report: String,
}
impl ConsoleRender {
    pub fn new(board: &Board) -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(io::stdout(), cursor::Hide)?;
        // the simulated area is anchored at the screen's top-left
        let start = board.simulated_bounds().start;
        let origin = Pos2::new(start, start);
        Ok(Self {
            origin,
            cursor: origin,
            report: String::new(),
        })
    }

    /// Copies the visible rows out of the board so it can be unlocked before drawing
    pub fn capture(&self, board: &Board, state: LoopState) -> io::Result<Frame> {
        let (cols, rows) = terminal::size()?;
        // last line is the footer
        Ok(Frame::capture(
            board,
            self.origin,
            cols,
            rows.saturating_sub(1),
            state,
        ))
    }

    pub fn render(&self, frame: &Frame) -> io::Result<()> {
        let (_, rows) = terminal::size()?;
        let mut stdout = io::stdout();
        queue!(stdout, terminal::Clear(terminal::ClearType::All))?;
        for (line, text) in frame.rows.iter().enumerate() {
            queue!(stdout, cursor::MoveTo(0, line as u16))?;
            io::Write::write_all(&mut stdout, text.as_bytes())?;
        }

        // write footer
        let state = match frame.state {
            LoopState::Running => "running",
            LoopState::Stopped => "stopped",
        };
        queue!(stdout, cursor::MoveTo(0, rows.saturating_sub(1)))?;
        let footer = format!("[{state}] {} | cursor {}", self.report, self.cursor);
        io::Write::write_all(&mut stdout, footer.as_bytes())?;

        let on_screen = self.cursor - self.origin;
        queue!(
            stdout,
            cursor::MoveTo(on_screen.x as u16, on_screen.y as u16),
            cursor::Show
        )?;
        io::Write::flush(&mut stdout)
    }

    pub fn poll_events(
        &mut self,
        update: &mut UpdateLoop,
        stats: &mut Recorder,
    ) -> io::Result<Option<ConsoleCommand>> {
        // make sure event is preset for us to take
        if !event::poll(FRAME_INTERVAL)? {
            return Ok(None);
        }

        let event::Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            ..
        }) = event::read()?
        else {
            return Ok(Some(ConsoleCommand::Handled));
        };

        let board = update.board().clone();
        match code {
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                return Ok(Some(ConsoleCommand::Exit));
            }
            KeyCode::Char('q') | KeyCode::Esc => return Ok(Some(ConsoleCommand::Exit)),
            KeyCode::Char(' ') => {
                update.toggle_running();
            }
            KeyCode::Char('n') if update.state() == LoopState::Stopped => {
                let mut board = board.lock();
                board.step();
                stats.record_edit(board.alive_count());
            }
            KeyCode::Char('r') => {
                let mut board = board.lock();
                board.randomize();
                stats.record_edit(board.alive_count());
            }
            KeyCode::Char('x') => {
                let mut board = board.lock();
                board.clear();
                stats.record_edit(board.alive_count());
            }
            KeyCode::Enter | KeyCode::Char('t') => {
                let mut board = board.lock();
                match board.toggle(self.cursor) {
                    Ok(_) => stats.record_edit(board.alive_count()),
                    Err(err) => warn!("ignoring toggle: {err}"),
                }
            }
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                let delta = match code {
                    KeyCode::Up => Pos2::new(0, -1),
                    KeyCode::Down => Pos2::new(0, 1),
                    KeyCode::Left => Pos2::new(-1, 0),
                    _ => Pos2::new(1, 0),
                };
                let next = self.cursor + delta;
                if board.lock().is_simulated(next) {
                    self.cursor = next;
                }
            }
            _ => {}
        }
        Ok(Some(ConsoleCommand::Handled))
    }

    pub fn set_report(&mut self, report: String) {
        self.report = report;
    }
}
impl Drop for ConsoleRender {
    fn drop(&mut self) {
        if let Err(err) = terminal::disable_raw_mode() {
            warn!("failed to disable raw mode: {err}");
        }
        if let Err(err) = execute!(io::stdout(), cursor::Show) {
            warn!("failed to show cursor: {err}");
        }
    }
}
