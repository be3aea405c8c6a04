//! Screen rendering for the basketball statistics tool
//!
//! Screens are built as plain lines first so that their content can be tested
//! without a terminal, then written with crossterm into any `Write` sink.

use super::colors::{error_fg, header_fg, highlight_fg, text_fg};
use crate::constants::messages;
use crate::error::AppError;
use crate::roster::{TeamStats, Teams, stats};
use crossterm::{
    cursor::{MoveTo, MoveToNextLine},
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use std::io::Write;

const TITLE: &str = "BASKETBALL STATISTICS TOOL.";
const INDENT: &str = "    ";

/// A line of output with an optional color
pub type Line = (String, Option<Color>);

fn plain(text: impl Into<String>) -> Line {
    (text.into(), None)
}

fn colored(text: impl Into<String>, color: Color) -> Line {
    (text.into(), Some(color))
}

/// Welcome banner and main menu options
pub fn menu_lines() -> Vec<Line> {
    let width = TITLE.len();
    let stars = "*".repeat(width);
    vec![
        colored(stars.clone(), header_fg()),
        colored(format!("{:^width$}", " WELCOME "), header_fg()),
        colored(format!("{:^w$}", "TO THE", w = width - 1), header_fg()),
        colored(TITLE, header_fg()),
        colored(stars, header_fg()),
        plain(""),
        colored(format!("{:+^width$}", " MENU "), text_fg()),
        plain(""),
        plain("You have the following choices:"),
        plain(format!("{INDENT}1. Display a team's statistics")),
        plain(format!("{INDENT}2. Quit")),
    ]
}

/// Numbered list of the teams the user can pick from
pub fn team_option_lines(teams: &Teams) -> Vec<Line> {
    let mut lines = vec![
        plain(""),
        plain("There are statistics on the following teams:"),
        plain(""),
    ];
    lines.extend(
        teams
            .names()
            .enumerate()
            .map(|(index, name)| colored(format!("{}) {name}", index + 1), highlight_fg())),
    );
    lines
}

/// Full statistics report of one team
pub fn stats_lines(team_stats: &TeamStats) -> Vec<Line> {
    vec![
        colored(
            format!("The displayed stats are for the {}", team_stats.team),
            header_fg(),
        ),
        plain(""),
        plain(format!(
            "The team consists of : {} players",
            team_stats.player_count
        )),
        plain(format!(
            "{INDENT}{} experienced players",
            team_stats.experienced_count
        )),
        plain(format!(
            "{INDENT}{} inexperienced players",
            team_stats.inexperienced_count
        )),
        plain(""),
        plain("The players on the team are:"),
        colored(
            format!("{INDENT}{}", team_stats.names.join(", ")),
            highlight_fg(),
        ),
        plain(""),
        plain("The guardians on the team are:"),
        colored(
            format!("{INDENT}{}", team_stats.guardian_names.join(", ")),
            highlight_fg(),
        ),
        plain(""),
        plain(format!(
            "The average height of the team is {:.2} inches",
            team_stats.average_height
        )),
    ]
}

/// Statistics report for the team at `index`, or the reason it cannot be shown
pub fn team_page_lines(teams: &Teams, index: usize) -> Vec<Line> {
    let Some(roster) = teams.iter().nth(index) else {
        return vec![colored(messages::WRONG_ENTRY, error_fg())];
    };

    match stats(roster) {
        Ok(team_stats) => stats_lines(&team_stats),
        Err(AppError::EmptyRoster { team }) => vec![
            colored(format!("The displayed stats are for the {team}"), header_fg()),
            plain(""),
            colored("This team has no players yet.", error_fg()),
        ],
        Err(e) => vec![colored(e.to_string(), error_fg())],
    }
}

/// Clears the screen and writes `lines` from the top-left corner.
pub fn draw<W: Write>(out: &mut W, lines: &[Line]) -> Result<(), AppError> {
    queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;
    write_lines(out, lines)?;
    out.flush()?;
    Ok(())
}

/// Writes `lines` at the cursor position, one per row.
pub fn write_lines<W: Write>(out: &mut W, lines: &[Line]) -> Result<(), AppError> {
    for (text, color) in lines {
        match color {
            Some(color) => queue!(
                out,
                SetForegroundColor(*color),
                Print(text),
                ResetColor,
                MoveToNextLine(1)
            )?,
            None => queue!(out, Print(text), MoveToNextLine(1))?,
        }
    }
    Ok(())
}

/// Plain text of the lines, for non-interactive output
pub fn to_plain_text(lines: &[Line]) -> String {
    lines
        .iter()
        .map(|(text, _)| text.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}
