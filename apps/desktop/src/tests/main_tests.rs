use super::*;

#[test]
fn parses_coordinates_and_keywords() {
    assert_eq!(
        parse_play_command("1 2"),
        Ok(Some(PlayCommand::Move { row: 1, col: 2 }))
    );
    assert_eq!(parse_play_command("  RESET "), Ok(Some(PlayCommand::Reset)));
    assert_eq!(parse_play_command("refresh"), Ok(Some(PlayCommand::Refresh)));
    assert_eq!(parse_play_command("q"), Ok(Some(PlayCommand::Quit)));
    assert_eq!(parse_play_command("?"), Ok(Some(PlayCommand::Help)));
    assert_eq!(parse_play_command("   "), Ok(None));
}

#[test]
fn rejects_malformed_moves() {
    assert!(parse_play_command("1").is_err());
    assert!(parse_play_command("a 1").is_err());
    assert!(parse_play_command("1 -1").is_err());
    assert!(parse_play_command("1 1 1").is_err());
}

#[test]
fn cli_defaults_to_local_server_and_play() {
    let args = Args::try_parse_from(["grid-game", "--server-url", "http://10.0.0.2:8000"])
        .expect("args");
    assert_eq!(args.server_url, "http://10.0.0.2:8000");
    assert!(args.command.is_none());

    let args = Args::try_parse_from(["grid-game", "move", "2", "0"]).expect("args");
    assert!(matches!(args.command, Some(Command::Move { row: 2, col: 0 })));
}

#[test]
fn refresh_help_warns_about_new_game() {
    assert!(PLAY_HELP.contains("refresh (refetch; may start a new game)"));
}
