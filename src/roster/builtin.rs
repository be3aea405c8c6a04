use super::{League, PlayerRecord};
use crate::constants::DEFAULT_TEAMS;

/// (name, guardians, experience, height)
const PLAYERS: [(&str, &str, &str, &str); 18] = [
    ("Karl Saygan", "Heather Bledsoe", "YES", "42 inches"),
    ("Matt Gill", "Charles Gill and Sylvia Gill", "NO", "40 inches"),
    ("Sammy Adams", "Jeff Adams and Gary Adams", "NO", "45 inches"),
    ("Chloe Alaska", "David Alaska and Jamie Alaska", "NO", "47 inches"),
    ("Bill Bon", "Sara Bon and Jenny Bon", "YES", "43 inches"),
    ("Joe Kavalier", "Sam Kavalier and Elaine Kavalier", "NO", "39 inches"),
    ("Phillip Helm", "Thomas Helm and Eva Jones", "YES", "44 inches"),
    ("Les Clay", "Wynonna Brown", "YES", "42 inches"),
    ("Herschel Krustofski", "Hyman Krustofski and Rachel Krustofski", "YES", "45 inches"),
    ("Sal Dali", "Gala Dali", "NO", "41 inches"),
    ("Suzane Greenberg", "Henrietta Dumas", "YES", "44 inches"),
    ("Joe Smith", "Jim Smith and Jan Smith", "YES", "42 inches"),
    ("Ben Finkelstein", "Aaron and Jill Finkelstein", "NO", "44 inches"),
    ("Diego Soto", "Robin Soto and Sarika Soto", "YES", "41 inches"),
    ("Eva Gordon", "Wendy and Mike Gordon", "NO", "45 inches"),
    ("Arnold Willis", "Claire Willis", "NO", "43 inches"),
    ("Kimmy Stein", "Bill Stein and Hillary Stein", "YES", "41 inches"),
    ("Todd Smith", "Dee Smith and Jay Smith", "NO", "43 inches"),
];

pub(super) fn league() -> League {
    let teams = DEFAULT_TEAMS.iter().map(|team| team.to_string()).collect();
    let players = PLAYERS
        .iter()
        .map(|&(name, guardians, experience, height)| {
            PlayerRecord::new(name, height, experience, guardians)
        })
        .collect();
    League::new(teams, players)
}
