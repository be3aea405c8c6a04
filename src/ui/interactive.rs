//! Interactive session loop
//!
//! Teams are rebuilt from the raw league every time the menu is shown, so a
//! session can never drift from the league it was started with.

use super::input_handler::{Screen, Transition, handle_key};
use super::rendering::{Line, draw, menu_lines, team_option_lines, team_page_lines};
use super::colors::{error_fg, text_fg};
use super::terminal_manager::{TerminalConfig, TerminalManager};
use crate::constants::messages;
use crate::error::AppError;
use crate::roster::{League, Teams};
use crossterm::event::{self, Event};
use std::io::Write;
use tracing::{debug, info};

/// Lines for the given screen
pub fn screen_lines(screen: Screen, teams: &Teams) -> Vec<Line> {
    let prompt = (String::new(), None);
    match screen {
        Screen::Menu => {
            let mut lines = menu_lines();
            lines.push(prompt);
            lines.push(("Enter your option: >".to_string(), Some(text_fg())));
            lines
        }
        Screen::TeamSelection => {
            let mut lines = menu_lines();
            lines.extend(team_option_lines(teams));
            lines.push(prompt);
            lines.push(("Enter your option: > (Esc to go back)".to_string(), Some(text_fg())));
            lines
        }
        Screen::TeamStats(index) => {
            let mut lines = team_page_lines(teams, index);
            lines.push(prompt);
            lines.push((format!("        {}", messages::PRESS_ENTER), Some(text_fg())));
            lines
        }
        Screen::WrongEntry => vec![
            (messages::WRONG_ENTRY.to_string(), Some(error_fg())),
            prompt,
            (messages::PRESS_ENTER.to_string(), Some(text_fg())),
        ],
        Screen::ConfirmQuit(_) => vec![(messages::CONFIRM_QUIT.to_string(), Some(text_fg()))],
    }
}

/// Runs the menu loop until the user quits.
///
/// The league is validated and balanced up front so data errors are reported
/// before the terminal switches into raw mode.
pub fn run_interactive_ui(league: &League, debug_mode: bool) -> Result<(), AppError> {
    league.validate()?;
    let teams = league.build_teams()?;

    let terminal = TerminalManager::with_config(TerminalConfig { debug_mode });
    let mut stdout = terminal.setup_terminal()?;

    let result = event_loop(&mut stdout, league, teams);

    terminal.cleanup_terminal(stdout)?;
    result
}

fn event_loop<W: Write>(out: &mut W, league: &League, mut teams: Teams) -> Result<(), AppError> {
    let mut screen = Screen::Menu;
    let mut needs_render = true;

    loop {
        if needs_render {
            draw(out, &screen_lines(screen, &teams))?;
            needs_render = false;
        }

        match event::read()? {
            Event::Key(key_event) => match handle_key(screen, &key_event, teams.len()) {
                Transition::Stay => {}
                Transition::Go(next) => {
                    debug!("Screen change: {screen:?} -> {next:?}");
                    if next == Screen::Menu {
                        teams = league.build_teams()?;
                    }
                    if let Screen::TeamStats(index) = next
                        && let Some(roster) = teams.iter().nth(index)
                    {
                        info!("Showing statistics for {}", roster.name());
                    }
                    screen = next;
                    needs_render = true;
                }
                Transition::Quit => {
                    info!("User quit the session");
                    return Ok(());
                }
            },
            Event::Resize(_, _) => needs_render = true,
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::ResumeScreen;

    fn texts(lines: &[Line]) -> Vec<String> {
        lines.iter().map(|(text, _)| text.clone()).collect()
    }

    #[test]
    fn test_team_selection_screen_lists_builtin_teams() {
        let teams = League::builtin().build_teams().unwrap();
        let lines = texts(&screen_lines(Screen::TeamSelection, &teams));
        assert!(lines.contains(&"1) Panthers".to_string()));
        assert!(lines.contains(&"3) Warriors".to_string()));
    }

    #[test]
    fn test_stats_screen_for_builtin_team() {
        let teams = League::builtin().build_teams().unwrap();
        let lines = texts(&screen_lines(Screen::TeamStats(1), &teams));
        assert_eq!(lines[0], "The displayed stats are for the Bandits");
        assert!(lines.contains(&"The team consists of : 6 players".to_string()));
        assert!(lines.last().unwrap().contains(messages::PRESS_ENTER));
    }

    #[test]
    fn test_wrong_entry_and_confirm_screens() {
        let teams = League::builtin().build_teams().unwrap();
        let wrong = texts(&screen_lines(Screen::WrongEntry, &teams));
        assert_eq!(wrong[0], messages::WRONG_ENTRY);

        let confirm = texts(&screen_lines(Screen::ConfirmQuit(ResumeScreen::Menu), &teams));
        assert_eq!(confirm, vec![messages::CONFIRM_QUIT.to_string()]);
    }
}
