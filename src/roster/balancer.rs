//! Splitting a normalized roster into teams.
//!
//! Experienced and inexperienced players are distributed independently. Each
//! class is cut into contiguous ranges, team `i` of `T` taking
//! `[i * n / T, (i + 1) * n / T)`, so shares differ by at most one and the
//! extra players land on later teams. A team lists its experienced players
//! first.

use super::NormalizedPlayer;
use crate::error::AppError;
use std::ops::Range;

/// The players assigned to one named team.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamRoster {
    name: String,
    players: Vec<NormalizedPlayer>,
}

impl TeamRoster {
    pub fn new(name: impl Into<String>, players: Vec<NormalizedPlayer>) -> Self {
        Self {
            name: name.into(),
            players,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn players(&self) -> &[NormalizedPlayer] {
        &self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}

/// All team rosters, in the order the team names were configured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Teams {
    rosters: Vec<TeamRoster>,
}

impl Teams {
    pub fn iter(&self) -> std::slice::Iter<'_, TeamRoster> {
        self.rosters.iter()
    }

    pub fn len(&self) -> usize {
        self.rosters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rosters.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.rosters.iter().map(TeamRoster::name)
    }

    /// Looks up a team by its exact name.
    pub fn get(&self, name: &str) -> Option<&TeamRoster> {
        self.rosters.iter().find(|roster| roster.name == name)
    }

    /// Looks up a team by its 1-based menu position.
    pub fn by_position(&self, position: usize) -> Option<&TeamRoster> {
        position
            .checked_sub(1)
            .and_then(|index| self.rosters.get(index))
    }

    /// Resolves user input that is either a 1-based position or a team name.
    /// A valid position wins; otherwise names match case-insensitively, so a
    /// team named "2024" is still reachable by name.
    pub fn select(&self, selection: &str) -> Result<&TeamRoster, AppError> {
        let selection = selection.trim();
        selection
            .parse::<usize>()
            .ok()
            .and_then(|position| self.by_position(position))
            .or_else(|| {
                self.rosters
                    .iter()
                    .find(|roster| roster.name.eq_ignore_ascii_case(selection))
            })
            .ok_or_else(|| AppError::team_not_found(selection))
    }
}

impl<'a> IntoIterator for &'a Teams {
    type Item = &'a TeamRoster;
    type IntoIter = std::slice::Iter<'a, TeamRoster>;

    fn into_iter(self) -> Self::IntoIter {
        self.rosters.iter()
    }
}

/// Range of a sequence of `len` items that team `index` of `team_count` receives.
fn share(index: usize, len: usize, team_count: usize) -> Range<usize> {
    (index * len / team_count)..((index + 1) * len / team_count)
}

/// Balances `players` into one roster per entry of `team_names`.
///
/// Deterministic: the same input always yields the same teams. Every player
/// ends up on exactly one team.
///
/// # Errors
/// Returns `AppError::Configuration` when `team_names` is empty, whatever the
/// player count.
pub fn balance(
    players: &[NormalizedPlayer],
    team_names: &[String],
) -> Result<Teams, AppError> {
    let team_count = team_names.len();
    if team_count == 0 {
        return Err(AppError::config_error(
            "Cannot balance players into zero teams",
        ));
    }

    let (experienced, inexperienced): (Vec<&NormalizedPlayer>, Vec<&NormalizedPlayer>) =
        players.iter().partition(|player| player.experienced);

    let rosters: Vec<TeamRoster> = team_names
        .iter()
        .enumerate()
        .map(|(index, name)| {
            let players = experienced[share(index, experienced.len(), team_count)]
                .iter()
                .chain(&inexperienced[share(index, inexperienced.len(), team_count)])
                .map(|&player| player.clone())
                .collect();
            TeamRoster::new(name.clone(), players)
        })
        .collect();

    tracing::debug!(
        "Balanced {} players ({} experienced) into {} teams",
        players.len(),
        experienced.len(),
        team_count
    );

    Ok(Teams { rosters })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing_utils::TestDataBuilder;

    fn names(teams: &[&str]) -> Vec<String> {
        teams.iter().map(|team| team.to_string()).collect()
    }

    fn class_counts(roster: &TeamRoster) -> (usize, usize) {
        let experienced = roster.players().iter().filter(|p| p.experienced).count();
        (experienced, roster.len() - experienced)
    }

    #[test]
    fn test_share_boundaries() {
        assert_eq!(share(0, 5, 3), 0..1);
        assert_eq!(share(1, 5, 3), 1..3);
        assert_eq!(share(2, 5, 3), 3..5);
        assert_eq!(share(0, 0, 3), 0..0);
    }

    #[test]
    fn test_nine_players_three_teams() {
        let players = TestDataBuilder::create_roster(5, 4);
        let teams = balance(&players, &names(&["Panthers", "Bandits", "Warriors"])).unwrap();

        let counts: Vec<(usize, usize)> = teams.iter().map(class_counts).collect();
        assert_eq!(counts, vec![(1, 1), (2, 1), (2, 2)]);

        let sizes: Vec<usize> = teams.iter().map(TeamRoster::len).collect();
        assert_eq!(sizes, vec![2, 3, 4]);
    }

    #[test]
    fn test_experienced_players_listed_first() {
        let players = TestDataBuilder::create_roster(5, 4);
        let teams = balance(&players, &names(&["Panthers", "Bandits", "Warriors"])).unwrap();

        for roster in &teams {
            let first_inexperienced = roster
                .players()
                .iter()
                .position(|p| !p.experienced)
                .unwrap_or(roster.len());
            assert!(roster.players()[first_inexperienced..].iter().all(|p| !p.experienced));
        }
    }

    #[test]
    fn test_relative_order_preserved_within_class() {
        let players = TestDataBuilder::create_roster(6, 6);
        let teams = balance(&players, &names(&["A", "B"])).unwrap();

        let experienced_order: Vec<&str> = teams
            .iter()
            .flat_map(|roster| roster.players().iter().filter(|p| p.experienced))
            .map(|p| p.name.as_str())
            .collect();
        let expected: Vec<&str> = players
            .iter()
            .filter(|p| p.experienced)
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(experienced_order, expected);
    }

    #[test]
    fn test_team_order_follows_names() {
        let players = TestDataBuilder::create_roster(3, 3);
        let teams = balance(&players, &names(&["Warriors", "Panthers", "Bandits"])).unwrap();
        let order: Vec<&str> = teams.names().collect();
        assert_eq!(order, vec!["Warriors", "Panthers", "Bandits"]);
    }

    #[test]
    fn test_no_teams_is_configuration_error() {
        for (experienced, inexperienced) in [(0, 0), (3, 2)] {
            let players = TestDataBuilder::create_roster(experienced, inexperienced);
            assert!(matches!(
                balance(&players, &[]),
                Err(AppError::Configuration(_))
            ));
        }
    }

    #[test]
    fn test_fewer_players_than_teams() {
        let players = TestDataBuilder::create_roster(1, 1);
        let teams = balance(&players, &names(&["A", "B", "C"])).unwrap();

        let sizes: Vec<usize> = teams.iter().map(TeamRoster::len).collect();
        assert_eq!(sizes, vec![0, 0, 2]);
    }

    #[test]
    fn test_empty_roster_yields_empty_teams() {
        let teams = balance(&[], &names(&["A", "B"])).unwrap();
        assert_eq!(teams.len(), 2);
        assert!(teams.iter().all(TeamRoster::is_empty));
    }

    #[test]
    fn test_balance_bound_and_coverage() {
        for team_count in 1..=6 {
            for experienced in 0..=10 {
                for inexperienced in 0..=10 {
                    let players = TestDataBuilder::create_roster(experienced, inexperienced);
                    let team_names: Vec<String> =
                        (0..team_count).map(|i| format!("Team {i}")).collect();
                    let teams = balance(&players, &team_names).unwrap();

                    let (experienced_counts, inexperienced_counts): (Vec<usize>, Vec<usize>) =
                        teams.iter().map(class_counts).unzip();
                    for counts in [experienced_counts, inexperienced_counts] {
                        let max = counts.iter().max().unwrap();
                        let min = counts.iter().min().unwrap();
                        assert!(max - min <= 1);
                    }

                    let mut assigned: Vec<&str> = teams
                        .iter()
                        .flat_map(|roster| roster.players())
                        .map(|p| p.name.as_str())
                        .collect();
                    let mut expected: Vec<&str> = players.iter().map(|p| p.name.as_str()).collect();
                    assigned.sort_unstable();
                    expected.sort_unstable();
                    assert_eq!(assigned, expected);
                }
            }
        }
    }

    #[test]
    fn test_balance_is_deterministic() {
        let players = TestDataBuilder::create_roster(7, 5);
        let team_names = names(&["Panthers", "Bandits", "Warriors"]);
        assert_eq!(
            balance(&players, &team_names).unwrap(),
            balance(&players, &team_names).unwrap()
        );
    }

    #[test]
    fn test_select_by_position_and_name() {
        let players = TestDataBuilder::create_roster(3, 3);
        let teams = balance(&players, &names(&["Panthers", "Bandits", "Warriors"])).unwrap();

        assert_eq!(teams.select("1").unwrap().name(), "Panthers");
        assert_eq!(teams.select(" 3 ").unwrap().name(), "Warriors");
        assert_eq!(teams.select("bandits").unwrap().name(), "Bandits");
        assert_eq!(teams.get("Bandits").unwrap().name(), "Bandits");

        for bad in ["0", "4", "Lakers", ""] {
            assert!(matches!(
                teams.select(bad),
                Err(AppError::TeamNotFound { .. })
            ));
        }
    }

    #[test]
    fn test_select_numeric_team_name() {
        let players = TestDataBuilder::create_roster(2, 2);
        let teams = balance(&players, &names(&["2024", "Hawks"])).unwrap();

        assert_eq!(teams.select("2024").unwrap().name(), "2024");
        assert_eq!(teams.select("1").unwrap().name(), "2024");
        assert_eq!(teams.select("2").unwrap().name(), "Hawks");
        assert!(matches!(
            teams.select("2025"),
            Err(AppError::TeamNotFound { .. })
        ));
    }
}
