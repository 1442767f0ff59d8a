//! Terminal front end: a [`Presentation`] drawn with ratatui over crossterm.

pub mod scene;

use std::io::{self, Stdout};
use std::thread;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::combat::BattleEvent;
use crate::core::constants::EXIT_LABEL;
use crate::error::GameError;
use crate::session::{GameEvent, Presentation};
use scene::{render, MenuView, ScreenState};

const FLICKER_FRAME: Duration = Duration::from_millis(70);

enum Key {
    Previous,
    Next,
    Confirm,
    Back,
    Other,
}

fn classify(key: KeyEvent) -> Result<Key, GameError> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Err(io::Error::new(io::ErrorKind::Interrupted, "interrupted").into());
    }
    Ok(match key.code {
        KeyCode::Up | KeyCode::Left | KeyCode::Char('k') => Key::Previous,
        KeyCode::Down | KeyCode::Right | KeyCode::Char('j') => Key::Next,
        KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('z') => Key::Confirm,
        KeyCode::Esc | KeyCode::Char('x') => Key::Back,
        _ => Key::Other,
    })
}

/// Owns the terminal for the length of a session.
///
/// Raw mode and the alternate screen are restored on drop.
pub struct TerminalPresenter {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    screen: ScreenState,
}

impl TerminalPresenter {
    pub fn new() -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self {
            terminal,
            screen: ScreenState::default(),
        })
    }

    fn draw(&mut self) -> io::Result<()> {
        let screen = &self.screen;
        self.terminal.draw(|f| render(f, screen))?;
        Ok(())
    }

    fn next_key(&mut self) -> Result<Key, GameError> {
        loop {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    return classify(key);
                }
            }
        }
    }

    /// Shows the newest line and waits for the player to move on.
    fn wait_for_continue(&mut self) -> Result<(), GameError> {
        self.screen.waiting = true;
        self.draw()?;
        loop {
            if let Key::Confirm | Key::Back = self.next_key()? {
                break;
            }
        }
        self.screen.waiting = false;
        Ok(())
    }

    fn flicker(&mut self, event: &BattleEvent) -> Result<(), GameError> {
        let BattleEvent::Flicker {
            side,
            times,
            colour,
        } = *event
        else {
            return Ok(());
        };
        for _ in 0..times {
            self.screen.flash = Some((side, colour));
            self.draw()?;
            thread::sleep(FLICKER_FRAME);
            self.screen.flash = None;
            self.draw()?;
            thread::sleep(FLICKER_FRAME);
        }
        Ok(())
    }
}

impl Drop for TerminalPresenter {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = self.terminal.backend_mut().execute(LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

impl Presentation for TerminalPresenter {
    fn present_choice(&mut self, prompt: &str, options: &[String]) -> Result<usize, GameError> {
        self.screen.menu = Some(MenuView::new(prompt, options));
        let exit = options.iter().position(|o| o == EXIT_LABEL);

        let choice = loop {
            self.draw()?;
            let key = self.next_key()?;
            let Some(menu) = self.screen.menu.as_mut() else {
                break 0;
            };
            match key {
                Key::Previous => menu.previous(),
                Key::Next => menu.next(),
                Key::Confirm => break menu.selected,
                Key::Back => {
                    if let Some(exit) = exit {
                        break exit;
                    }
                }
                Key::Other => {}
            }
        };

        self.screen.menu = None;
        Ok(choice)
    }

    fn show(&mut self, event: &GameEvent) -> Result<(), GameError> {
        self.screen.apply(event);
        match event {
            GameEvent::Narration(_) => self.wait_for_continue(),
            GameEvent::Battle(battle @ BattleEvent::Flicker { .. }) => self.flicker(battle),
            GameEvent::Battle(BattleEvent::Message(_)) => self.wait_for_continue(),
            _ => Ok(self.draw()?),
        }
    }
}
