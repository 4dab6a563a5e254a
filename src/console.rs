use crossterm::{
    cursor,
    event::{self, KeyCode, KeyEvent, KeyModifiers},
    execute, queue, terminal,
};
use gridlife::{Game, Pos2};
use std::io;

pub enum ConsoleCommand {
    Exit,
    Handled,
}

/// Raw-mode terminal front-end: draws the grid, keeps an edit cursor, and
/// translates keys into driver calls.
pub struct ConsoleUi {
    edit_cursor: Pos2,
    report: String,
    probability: f64,
}
impl ConsoleUi {
    pub fn new(probability: f64) -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(io::stdout(), cursor::Hide)?;
        Ok(Self {
            edit_cursor: Pos2::zero(),
            report: String::new(),
            probability,
        })
    }

    pub fn render(&self, game: &Game) -> io::Result<()> {
        let (cols, rows) = terminal::size()?;
        let view_rows = rows.saturating_sub(1);
        let br = Pos2 {
            x: cols as i32,
            y: view_rows as i32,
        };

        let mut stdout = io::stdout();
        queue!(stdout, terminal::Clear(terminal::ClearType::All))?;
        for cell in game.grid().window(Pos2::zero(), br).live_cells() {
            queue!(stdout, cursor::MoveTo(cell.col() as u16, cell.row() as u16))?;
            io::Write::write_all(&mut stdout, b"\xE2\x96\x88")?;
        }

        // the edit cursor is drawn last so it stays visible over live cells
        if self.edit_cursor.x < br.x && self.edit_cursor.y < br.y {
            queue!(
                stdout,
                cursor::MoveTo(self.edit_cursor.x as u16, self.edit_cursor.y as u16)
            )?;
            io::Write::write_all(&mut stdout, b"+")?;
        }

        // write footer
        queue!(stdout, cursor::MoveTo(0, view_rows))?;
        let state = if game.is_playing() { "playing" } else { "paused" };
        let footer = format!(
            "[{}] gen:{} {} | space play/pause  n step  t toggle  r random  c clear  q quit",
            state,
            game.generation(),
            self.report
        );
        io::Write::write_all(&mut stdout, footer.as_bytes())?;

        io::Write::flush(&mut stdout)
    }

    pub fn poll_events(&mut self, game: &mut Game) -> io::Result<Option<ConsoleCommand>> {
        // make sure an event is present for us to take
        if !event::poll(std::time::Duration::from_secs(0))? {
            return Ok(None);
        }

        let mut outp = Ok(Some(ConsoleCommand::Handled));
        match event::read()? {
            // CTRL+C
            event::Event::Key(KeyEvent {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
                ..
            }) => {
                outp = Ok(Some(ConsoleCommand::Exit));
            }
            event::Event::Key(KeyEvent { code, .. }) => match code {
                KeyCode::Char('q') => outp = Ok(Some(ConsoleCommand::Exit)),
                KeyCode::Char(' ') => {
                    if game.is_playing() {
                        game.pause();
                    } else {
                        game.play();
                    }
                }
                KeyCode::Char('n') => game.step(),
                KeyCode::Char('c') => game.clear(),
                KeyCode::Char('r') => game.randomize(self.probability),
                KeyCode::Char('t') | KeyCode::Enter => game.toggle_cell(self.edit_cursor),
                // arrows move the edit cursor, clamped to the grid
                KeyCode::Up => self.edit_cursor.y = (self.edit_cursor.y - 1).max(0),
                KeyCode::Down => {
                    self.edit_cursor.y = (self.edit_cursor.y + 1).min(game.grid().rows() - 1)
                }
                KeyCode::Left => self.edit_cursor.x = (self.edit_cursor.x - 1).max(0),
                KeyCode::Right => {
                    self.edit_cursor.x = (self.edit_cursor.x + 1).min(game.grid().cols() - 1)
                }
                _ => {}
            },
            _ => {}
        }
        outp
    }

    pub fn set_report(&mut self, report: String) {
        self.report = report;
    }
}
impl Drop for ConsoleUi {
    fn drop(&mut self) {
        // if we can enable it, we should be able to disable it
        terminal::disable_raw_mode().expect("disable raw mode");
        execute!(io::stdout(), cursor::Show).expect("enable cursor");
    }
}
