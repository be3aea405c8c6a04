use crate::roster::{League, NormalizedPlayer, PlayerRecord};

/// Test utilities for creating rosters and leagues
pub struct TestDataBuilder;

impl TestDataBuilder {
    /// Creates a normalized player
    pub fn create_player(
        name: &str,
        height_inches: u32,
        experienced: bool,
        guardians: &[&str],
    ) -> NormalizedPlayer {
        NormalizedPlayer {
            name: name.to_string(),
            height_inches,
            height_remainder: "inches".to_string(),
            experienced,
            guardians: guardians.iter().map(|g| g.to_string()).collect(),
        }
    }

    /// Creates a raw player record
    pub fn create_record(name: &str, height: &str, experienced: bool) -> PlayerRecord {
        PlayerRecord::new(
            name,
            height,
            if experienced { "YES" } else { "NO" },
            format!("Parent of {name}"),
        )
    }

    /// Creates a normalized roster with interleaved experience levels.
    /// Names are unique: `Exp 1`, `New 1`, `Exp 2`, ...
    pub fn create_roster(experienced: usize, inexperienced: usize) -> Vec<NormalizedPlayer> {
        Self::interleave(experienced, inexperienced)
            .into_iter()
            .enumerate()
            .map(|(index, (name, is_experienced))| {
                let guardian = format!("Parent of {name}");
                Self::create_player(&name, 40 + (index % 8) as u32, is_experienced, &[guardian.as_str()])
            })
            .collect()
    }

    /// Creates a league of raw records with the given team names
    pub fn create_league(teams: &[&str], experienced: usize, inexperienced: usize) -> League {
        let players = Self::interleave(experienced, inexperienced)
            .into_iter()
            .enumerate()
            .map(|(index, (name, is_experienced))| {
                Self::create_record(&name, &format!("{} inches", 40 + index % 8), is_experienced)
            })
            .collect();
        League::new(teams.iter().map(|t| t.to_string()).collect(), players)
    }

    fn interleave(experienced: usize, inexperienced: usize) -> Vec<(String, bool)> {
        let mut players = Vec::with_capacity(experienced + inexperienced);
        for i in 0..experienced.max(inexperienced) {
            if i < experienced {
                players.push((format!("Exp {}", i + 1), true));
            }
            if i < inexperienced {
                players.push((format!("New {}", i + 1), false));
            }
        }
        players
    }
}
