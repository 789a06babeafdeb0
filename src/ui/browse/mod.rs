//! Interactive browse screen.
//!
//! A raw-mode terminal loop over a [`BrowseSession`]: read a key, map it to
//! an action, apply it, redraw.

mod input;
mod session;

pub use input::{key_to_action, BrowseAction, InputMode};
pub use session::{BrowseSession, Flow};

use std::io::{self, Stdout, Write};

use crossterm::{
    cursor,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{self, ClearType},
};

use crate::domain::ports::{FileProbe, HostStore, Launcher};

/// Run the browse screen until the user quits
pub fn run_browse<S, P, L>(
    session: &mut BrowseSession<'_, S, P, L>,
    supports_unicode: bool,
) -> io::Result<()>
where
    S: HostStore + ?Sized,
    P: FileProbe,
    L: Launcher,
{
    terminal::enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, cursor::Hide)?;

    let result = event_loop(&mut stdout, session, supports_unicode);

    // Restore terminal even when the loop failed
    execute!(
        stdout,
        cursor::Show,
        terminal::Clear(ClearType::All),
        cursor::MoveTo(0, 0)
    )?;
    terminal::disable_raw_mode()?;

    result
}

fn event_loop<S, P, L>(
    stdout: &mut Stdout,
    session: &mut BrowseSession<'_, S, P, L>,
    supports_unicode: bool,
) -> io::Result<()>
where
    S: HostStore + ?Sized,
    P: FileProbe,
    L: Launcher,
{
    draw(stdout, session, supports_unicode)?;
    loop {
        match event::read()? {
            Event::Key(key) => {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                let Some(action) = key_to_action(key, session.mode()) else {
                    continue;
                };
                if session.handle(action) == Flow::Quit {
                    return Ok(());
                }
                draw(stdout, session, supports_unicode)?;
            }
            Event::Resize(_, _) => draw(stdout, session, supports_unicode)?,
            _ => {}
        }
    }
}

fn draw<S, P, L>(
    stdout: &mut Stdout,
    session: &BrowseSession<'_, S, P, L>,
    supports_unicode: bool,
) -> io::Result<()>
where
    S: HostStore + ?Sized,
    P: FileProbe,
    L: Launcher,
{
    let height = terminal::size().map(|(_, h)| h).unwrap_or(24);
    execute!(
        stdout,
        terminal::Clear(ClearType::All),
        cursor::MoveTo(0, 0)
    )?;
    for line in session.render(supports_unicode, height) {
        write!(stdout, "{}\r\n", line)?;
    }
    stdout.flush()
}
