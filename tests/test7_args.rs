mod common;

use clap::Parser;
use rusty_golf_rounds::args::validation::{
    check_holes_count, check_readable_round_json, check_template_name,
};
use rusty_golf_rounds::args::{Cli, Command, DEFAULT_DB_PATH, HoleField, TemplateCommand, load_settings};
use rusty_golf_rounds::model::{HolesCount, Level, RoundState, RoundSummary, TeeShotResult};
use rusty_golf_rounds::score::compute_round_summary;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test7_defaults_without_config() {
    let cli = Cli::try_parse_from(["rusty-golf-rounds", "new"]).unwrap();
    let settings = load_settings(&cli).unwrap();
    assert_eq!(settings.db, PathBuf::from(DEFAULT_DB_PATH));
    assert_eq!(settings.holes_count, HolesCount::Eighteen);
    assert_eq!(settings.level, Level::BogeyGolf);
    assert_eq!(settings.scoring_distance, 100);
    assert_eq!(settings.weights.bunker, 1.0);
    assert_eq!(settings.weights.duffed, 1.0);
}

#[test]
fn test7_cli_wins_over_config_file() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("golf.toml");
    std::fs::write(
        &config,
        "db = \"club.db\"\nlevel = \"Scratch\"\nholes = 9\nscoring_distance = 80\nbunker_weight = 0.5\n",
    )
    .unwrap();
    let config = config.to_str().unwrap();

    let cli = Cli::try_parse_from(["rusty-golf-rounds", "--config-toml", config, "new"]).unwrap();
    let settings = load_settings(&cli).unwrap();
    assert_eq!(settings.db, PathBuf::from("club.db"));
    assert_eq!(settings.level, Level::Scratch);
    assert_eq!(settings.holes_count, HolesCount::Nine);
    assert_eq!(settings.scoring_distance, 80);
    assert_eq!(settings.weights.bunker, 0.5);
    assert_eq!(settings.weights.duffed, 1.0);

    let cli = Cli::try_parse_from([
        "rusty-golf-rounds",
        "--config-toml",
        config,
        "--db",
        "other.db",
        "new",
        "--level",
        "break80",
        "--holes",
        "18",
        "--scoring-distance",
        "300",
    ])
    .unwrap();
    let settings = load_settings(&cli).unwrap();
    assert_eq!(settings.db, PathBuf::from("other.db"));
    assert_eq!(settings.level, Level::Break80);
    assert_eq!(settings.holes_count, HolesCount::Eighteen);
    assert_eq!(settings.scoring_distance, 200);
}

#[test]
fn test7_bad_settings_are_rejected() {
    assert!(Cli::try_parse_from(["rusty-golf-rounds", "new", "--holes", "12"]).is_err());

    let cli = Cli::try_parse_from(["rusty-golf-rounds", "new", "--bunker-weight=-1"]).unwrap();
    assert!(load_settings(&cli).is_err());

    for (flag, value) in [
        ("--bunker-weight", "inf"),
        ("--bunker-weight", "NaN"),
        ("--duffed-weight", "-inf"),
    ] {
        let arg = format!("{flag}={value}");
        let cli = Cli::try_parse_from(["rusty-golf-rounds", "new", arg.as_str()]).unwrap();
        assert!(load_settings(&cli).is_err(), "{arg}");
    }

    let cli = Cli::try_parse_from(["rusty-golf-rounds", "--config-toml", "/no/such/file.toml", "show"])
        .unwrap();
    assert!(load_settings(&cli).is_err());
}

#[test]
fn test7_hole_command() {
    let cli = Cli::try_parse_from([
        "rusty-golf-rounds",
        "hole",
        "--n",
        "7",
        "--strokes",
        "5",
        "--reached-sd",
        "true",
        "--tee",
        "trouble",
        "--bunker",
        "-1",
        "--unset",
        "putts",
        "--unset",
        "missed-putts-6ft",
    ])
    .unwrap();
    let Command::Hole(args) = cli.command else {
        panic!("expected hole command");
    };
    assert_eq!(args.n, 7);
    assert_eq!(args.strokes, Some(5));
    assert_eq!(args.reached_sd, Some(true));
    assert_eq!(args.tee, Some(TeeShotResult::Trouble));
    assert_eq!(args.bunker, Some(-1));
    assert_eq!(args.unset, vec![HoleField::Putts, HoleField::MissedPutts6ft]);

    let cli = Cli::try_parse_from(["rusty-golf-rounds", "template", "save", "--name", " Home "])
        .unwrap();
    match cli.command {
        Command::Template(TemplateCommand::Save { name }) => assert_eq!(name, "Home"),
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn test7_validation_helpers() {
    assert_eq!(check_holes_count("9"), Ok(9));
    assert_eq!(check_holes_count(" 18 "), Ok(18));
    assert!(check_holes_count("10").is_err());
    assert!(check_holes_count("nine").is_err());
    assert_eq!(check_template_name("  Links  "), Ok("Links".to_string()));
    assert!(check_template_name("   ").is_err());
    assert!(check_readable_round_json("/no/such/round.json").is_err());
}

#[test]
fn test7_round_json_shape() {
    let mut round = common::busy_round();
    round.holes[0].tee_shot_result = Some(TeeShotResult::Fairway);
    let value = serde_json::to_value(&round).unwrap();
    assert_eq!(value["holesCount"], 18);
    assert_eq!(value["level"], "Break80");
    assert_eq!(value["scoringDistance"], 100);
    assert_eq!(value["holes"][0]["strokeIndex"], 7);
    assert_eq!(value["holes"][0]["reachedSD"], true);
    assert_eq!(value["holes"][0]["teeShotResult"], "fairway");
    assert_eq!(value["holes"][2]["oopsies"]["lostBall"], 1);

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("round.json");
    std::fs::write(&path, value.to_string()).unwrap();
    let parsed = check_readable_round_json(path.to_str().unwrap()).unwrap();
    assert_eq!(parsed, round);

    let cli = Cli::try_parse_from([
        "rusty-golf-rounds",
        "summary",
        "--round",
        path.to_str().unwrap(),
        "--json",
    ])
    .unwrap();
    assert!(matches!(cli.command, Command::Summary { round: Some(_), json: true }));

    let mut bad = value.clone();
    bad["holesCount"] = serde_json::json!(10);
    assert!(serde_json::from_value::<RoundState>(bad).is_err());

    let mut bad = value;
    bad["holes"][4]["par"] = serde_json::json!(6);
    std::fs::write(&path, bad.to_string()).unwrap();
    assert!(check_readable_round_json(path.to_str().unwrap()).is_err());
}

#[test]
fn test7_summary_json_leaves_out_missing_values() {
    let empty = compute_round_summary(&common::round_with(HolesCount::Nine, Level::BogeyGolf));
    let value = serde_json::to_value(&empty).unwrap();
    assert!(value.get("sdPct").is_none());
    assert!(value.get("avgPutts").is_none());
    assert!(value.get("toPar").is_none());
    assert_eq!(value["sdEligible"], 0);
    assert_eq!(serde_json::from_value::<RoundSummary>(value).unwrap(), empty);

    let full = compute_round_summary(&common::busy_round());
    let value = serde_json::to_value(&full).unwrap();
    assert_eq!(value["strokes"], 38);
    assert_eq!(value["toPar"], 7);
    assert_eq!(serde_json::from_value::<RoundSummary>(value).unwrap(), full);
}
