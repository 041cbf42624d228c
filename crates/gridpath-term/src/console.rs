use std::io::{self, Write};

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{self, ClearType},
};

use gridpath_search::SearchAlgorithm;

use crate::render::{RenderOptions, render};

/// Clear the terminal and move the cursor to the top-left corner.
pub fn clear_screen() -> io::Result<()> {
    let mut stdout = io::stdout();
    execute!(stdout, terminal::Clear(ClearType::All), cursor::MoveTo(0, 0))
}

/// Render `search` to stdout.
pub fn print(search: &dyn SearchAlgorithm, opts: &RenderOptions) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(render(search, opts).as_bytes())?;
    stdout.flush()
}

// Leaves raw mode when dropped, also on early return.
struct RawMode;

impl RawMode {
    fn enable() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(RawMode)
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

/// Prompt for Enter and block until it is pressed, then optionally clear
/// the screen.
///
/// Ctrl-C is reported as [`io::ErrorKind::Interrupted`], since raw mode
/// keeps the terminal from raising the signal.
pub fn wait_for_enter(clear: bool) -> io::Result<()> {
    {
        let mut stdout = io::stdout();
        write!(stdout, "Press enter to continue...")?;
        stdout.flush()?;

        let _raw = RawMode::enable()?;
        loop {
            if let Event::Key(KeyEvent {
                code,
                modifiers,
                kind: KeyEventKind::Press,
                ..
            }) = event::read()?
            {
                match code {
                    KeyCode::Enter => break,
                    KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                        return Err(io::Error::from(io::ErrorKind::Interrupted));
                    }
                    _ => {}
                }
            }
        }
    }
    println!();

    if clear {
        clear_screen()?;
    }
    Ok(())
}
