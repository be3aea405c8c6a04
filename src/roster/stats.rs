use super::TeamRoster;
use crate::error::AppError;

/// Display metrics for one team.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamStats {
    pub team: String,
    /// Always equal to the roster length
    pub player_count: usize,
    pub experienced_count: usize,
    pub inexperienced_count: usize,
    pub names: Vec<String>,
    /// Guardians of every player in roster order, duplicates kept
    pub guardian_names: Vec<String>,
    pub average_height: f64,
}

/// Aggregates the statistics of a team roster.
///
/// # Errors
/// Returns `AppError::EmptyRoster` for a team without players, since the
/// average height is undefined.
pub fn stats(roster: &TeamRoster) -> Result<TeamStats, AppError> {
    if roster.is_empty() {
        return Err(AppError::empty_roster(roster.name()));
    }

    let players = roster.players();
    let experienced_count = players.iter().filter(|p| p.experienced).count();
    let total_height: u64 = players.iter().map(|p| u64::from(p.height_inches)).sum();

    Ok(TeamStats {
        team: roster.name().to_string(),
        player_count: players.len(),
        experienced_count,
        inexperienced_count: players.len() - experienced_count,
        names: players.iter().map(|p| p.name.clone()).collect(),
        guardian_names: players
            .iter()
            .flat_map(|p| p.guardians.iter().cloned())
            .collect(),
        average_height: total_height as f64 / players.len() as f64,
    })
}
