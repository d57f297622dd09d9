use std::io;
use std::io::Write;

use crossterm::cursor;
use crossterm::event::Event as CrossTermEvent;
use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::KeyEventKind;
use crossterm::event::KeyModifiers;
use crossterm::execute;
use crossterm::queue;
use crossterm::style;
use crossterm::terminal;

use crate::events::AppEvent;
use crate::events::EngineEvent;
use crate::events::Event;

/// Converts a crossterm event into an app event
pub fn convert_event(event: CrossTermEvent) -> Option<Event> {
    let CrossTermEvent::Key(key_event) = event else {
        return None;
    };

    if key_event.kind != KeyEventKind::Press {
        return None;
    }

    match key_event {
        KeyEvent {
            code: KeyCode::Char('q') | KeyCode::Esc,
            ..
        }
        | KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => Some(Event::AppEvent(AppEvent::Exit)),
        KeyEvent {
            code: KeyCode::Char(' '),
            ..
        } => Some(Event::AppEvent(AppEvent::TogglePause)),
        KeyEvent {
            code: KeyCode::Char('n'),
            ..
        } => Some(Event::EngineEvent(EngineEvent::Step)),
        _ => None,
    }
}

/// Puts the terminal in raw mode until dropped, so the terminal is restored even on early
/// returns.
pub struct RawTerminal;

impl RawTerminal {
    pub fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(io::stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;

        Ok(Self)
    }
}

impl Drop for RawTerminal {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

/// Clears the screen and draws `frame` from the top left corner, followed by a status line.
///
/// Raw mode doesn't turn `\n` into a carriage return, so every line is placed explicitly.
pub fn draw_frame(out: &mut impl Write, frame: &str, status: &str) -> io::Result<()> {
    queue!(
        out,
        terminal::Clear(terminal::ClearType::All),
        cursor::MoveTo(0, 0)
    )?;

    for line in frame.lines() {
        queue!(out, style::Print(line), cursor::MoveToNextLine(1))?;
    }

    queue!(out, style::Print(status))?;

    out.flush()
}
