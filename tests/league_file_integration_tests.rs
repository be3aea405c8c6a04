use hoops_stats::{
    AppError, Config, League,
    commands::{write_all_reports, write_team_report},
};
use tempfile::tempdir;

const SMALL_LEAGUE: &str = r#"
teams = ["Hawks", "Owls"]

[[players]]
name = "Ada Park"
height = "44 inches"
experience = "YES"
guardians = "Min Park and Joon Park"

[[players]]
name = "Leo Ruiz"
height = "41 inches"
experience = "NO"
guardians = "Ana Ruiz"

[[players]]
name = "Mia Chen"
height = "46 inches"
experience = "YES"
guardians = "Wei Chen"

[[players]]
name = "Sam Ode"
height = "39 inches"
experience = "NO"
guardians = "Tola Ode and Femi Ode"
"#;

#[tokio::test]
async fn test_report_from_league_file() {
    let temp_dir = tempdir().unwrap();
    let league_path = temp_dir.path().join("league.toml");
    tokio::fs::write(&league_path, SMALL_LEAGUE).await.unwrap();

    let league = Config::default()
        .league(Some(&league_path.to_string_lossy()))
        .await
        .unwrap();

    let mut buffer = Vec::new();
    write_team_report(&mut buffer, &league, "Owls").unwrap();
    let output = String::from_utf8(buffer).unwrap();

    assert!(output.contains("The displayed stats are for the Owls"));
    assert!(output.contains("The team consists of : 2 players"));
    assert!(output.contains("Mia Chen, Sam Ode"));
    assert!(output.contains("Wei Chen, Tola Ode, Femi Ode"));
    assert!(output.contains("The average height of the team is 42.50 inches"));
}

#[tokio::test]
async fn test_all_reports_from_league_file() {
    let league = League::from_toml_str(SMALL_LEAGUE).unwrap();

    let mut buffer = Vec::new();
    write_all_reports(&mut buffer, &league).unwrap();
    let output = String::from_utf8(buffer).unwrap();

    let hawks = output.find("for the Hawks").unwrap();
    let owls = output.find("for the Owls").unwrap();
    assert!(hawks < owls);
}

#[tokio::test]
async fn test_league_file_with_bad_height() {
    let broken = SMALL_LEAGUE.replace("\"39 inches\"", "\"3 feet\"");
    let league = League::from_toml_str(&broken).unwrap();

    let mut buffer = Vec::new();
    let result = write_team_report(&mut buffer, &league, "1");
    assert!(matches!(
        result,
        Err(AppError::MalformedHeight { player, .. }) if player == "Sam Ode"
    ));
    assert!(buffer.is_empty());
}

#[tokio::test]
async fn test_league_file_with_duplicate_teams() {
    let temp_dir = tempdir().unwrap();
    let league_path = temp_dir.path().join("league.toml");
    let duplicated = SMALL_LEAGUE.replace("\"Owls\"", "\"Hawks\"");
    tokio::fs::write(&league_path, duplicated).await.unwrap();

    let result = League::load_from_path(&league_path.to_string_lossy()).await;
    assert!(matches!(result, Err(AppError::Configuration(_))));
}

#[tokio::test]
async fn test_config_points_at_league_file() {
    let temp_dir = tempdir().unwrap();
    let league_path = temp_dir.path().join("league.toml");
    let config_path = temp_dir.path().join("config.toml");
    tokio::fs::write(&league_path, SMALL_LEAGUE).await.unwrap();

    let config = Config {
        log_file_path: None,
        roster_file: Some(league_path.to_string_lossy().to_string()),
    };
    config.save_to_path(&config_path.to_string_lossy()).await.unwrap();

    let loaded = Config::load_from_path(&config_path.to_string_lossy())
        .await
        .unwrap();
    assert!(loaded.validate().is_ok());

    let league = loaded.league(None).await.unwrap();
    assert_eq!(league.teams, vec!["Hawks", "Owls"]);
    assert_eq!(league.players.len(), 4);
}
