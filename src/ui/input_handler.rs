//! Keyboard input handling for the interactive UI.
//!
//! The session is a small state machine:
//! menu → team selection → team statistics → menu. Invalid entries and the
//! Ctrl+C quit confirmation are screens of their own. Key handling is a pure
//! function of the current screen so it can be tested without a terminal.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What is currently on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Menu,
    TeamSelection,
    /// Statistics of the team at this 0-based position
    TeamStats(usize),
    WrongEntry,
    /// Asking whether to quit; holds the screen to go back to
    ConfirmQuit(ResumeScreen),
}

/// Screens the quit confirmation can return to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResumeScreen {
    Menu,
    TeamSelection,
}

impl From<ResumeScreen> for Screen {
    fn from(resume: ResumeScreen) -> Self {
        match resume {
            ResumeScreen::Menu => Screen::Menu,
            ResumeScreen::TeamSelection => Screen::TeamSelection,
        }
    }
}

/// Result of handling one key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Key ignored, nothing to redraw
    Stay,
    Go(Screen),
    Quit,
}

fn is_interrupt(key_event: &KeyEvent) -> bool {
    key_event.code == KeyCode::Char('c') && key_event.modifiers.contains(KeyModifiers::CONTROL)
}

/// Maps a menu digit to a 0-based team index, if it names one of `team_count` teams.
fn team_index(c: char, team_count: usize) -> Option<usize> {
    c.to_digit(10)
        .map(|digit| digit as usize)
        .filter(|&position| (1..=team_count).contains(&position))
        .map(|position| position - 1)
}

/// Decides the next screen for a key press.
pub fn handle_key(screen: Screen, key_event: &KeyEvent, team_count: usize) -> Transition {
    // Key release/repeat events are reported on some platforms
    if key_event.kind != KeyEventKind::Press {
        return Transition::Stay;
    }

    match screen {
        Screen::Menu => {
            if is_interrupt(key_event) {
                return Transition::Go(Screen::ConfirmQuit(ResumeScreen::Menu));
            }
            match key_event.code {
                KeyCode::Char('1') => Transition::Go(Screen::TeamSelection),
                KeyCode::Char('2') | KeyCode::Char('q') | KeyCode::Char('Q') => Transition::Quit,
                KeyCode::Char(_) | KeyCode::Enter => Transition::Go(Screen::WrongEntry),
                _ => Transition::Stay,
            }
        }
        Screen::TeamSelection => {
            if is_interrupt(key_event) {
                return Transition::Go(Screen::ConfirmQuit(ResumeScreen::TeamSelection));
            }
            match key_event.code {
                KeyCode::Char(c) => match team_index(c, team_count) {
                    Some(index) => Transition::Go(Screen::TeamStats(index)),
                    None => Transition::Go(Screen::WrongEntry),
                },
                KeyCode::Enter => Transition::Go(Screen::WrongEntry),
                KeyCode::Esc => Transition::Go(Screen::Menu),
                _ => Transition::Stay,
            }
        }
        Screen::TeamStats(_) | Screen::WrongEntry => {
            if is_interrupt(key_event) {
                return Transition::Go(Screen::ConfirmQuit(ResumeScreen::Menu));
            }
            match key_event.code {
                KeyCode::Enter | KeyCode::Esc => Transition::Go(Screen::Menu),
                _ => Transition::Stay,
            }
        }
        Screen::ConfirmQuit(resume) => match key_event.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => Transition::Quit,
            _ => Transition::Go(resume.into()),
        },
    }
}
