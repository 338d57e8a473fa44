use swapquest::config::Config;
use swapquest::game::{GameState, LevelUpPolicy};
use tempfile::tempdir;

#[tokio::test]
async fn default_file_round_trips() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("swapquest.toml");

    Config::create_default(&path).await.unwrap();
    let config = Config::load(&path).await.unwrap();
    assert_eq!(config.app.name, "SwapQuest");
    assert_eq!(config.progression.max_xp, 500);
    assert_eq!(config.delays.wallet_connect_ms, 1000);
    assert_eq!(config.swap.xp_rate, 0.1);
}

#[tokio::test]
async fn missing_file_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("absent.toml");
    let err = Config::load(&path).await.unwrap_err();
    assert!(err.to_string().contains("Failed to read config file"));
}

#[tokio::test]
async fn custom_progression_shapes_new_state() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("custom.toml");
    tokio::fs::write(
        &path,
        r#"
[progression]
starting_level = 5
starting_xp = 90
max_xp = 100
starting_swaps = 0
starting_volume = 0.0
level_up_policy = "multi_step"

[logging]
level = "debug"
"#,
    )
    .await
    .unwrap();

    let config = Config::load(&path).await.unwrap();
    let mut state = GameState::new(&config.progression);
    assert_eq!(state.policy(), LevelUpPolicy::MultiStep);
    state.add_xp(215);
    assert_eq!((state.level(), state.xp()), (8, 5));
    assert_eq!(config.logging.level_filter(), log::LevelFilter::Debug);
}

#[tokio::test]
async fn malformed_file_reports_parse_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.toml");
    tokio::fs::write(&path, "[progression\nmax_xp = ").await.unwrap();
    let err = Config::load(&path).await.unwrap_err();
    assert!(err.to_string().contains("Failed to parse config file"));
}

#[tokio::test]
async fn sparse_sections_keep_remaining_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("sparse.toml");
    tokio::fs::write(&path, "[progression]\nmax_xp = 200\nguild = \"\"\n\n[delays]\nlootbox_open_ms = 5\n")
        .await
        .unwrap();

    let config = Config::load(&path).await.unwrap();
    assert_eq!(config.delays.lootbox_open_ms, 5);
    assert_eq!(config.delays.swap_submit_ms, 1500);
    let state = GameState::new(&config.progression);
    assert_eq!((state.level(), state.xp(), state.max_xp()), (1, 150, 200));
    assert_eq!(state.guild(), None);
}
