use anyhow::{Context, Result, anyhow};
use std::path::PathBuf;

use crate::model::{
    DEFAULT_SCORING_DISTANCE, HolesCount, Level, Weights, clamp_scoring_distance,
};

mod cli;
pub mod validation;

pub use cli::{Cli, Command, HoleArgs, HoleField, NewRoundArgs, TemplateCommand};

pub const DEFAULT_DB_PATH: &str = "rounds.db";

/// Settings for starting rounds, after merging CLI, config file and defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub db: PathBuf,
    pub holes_count: HolesCount,
    pub level: Level,
    pub scoring_distance: u32,
    pub weights: Weights,
}

/// Load settings from CLI and optional TOML file. CLI values win over the file.
///
/// # Errors
/// Returns an error if the config file is unreadable or invalid, or if a value is out of range.
pub fn load_settings(cli: &Cli) -> Result<Settings> {
    let file_config = read_file_config(cli)?;
    let new_args = match &cli.command {
        Command::New(args) => Some(args),
        _ => None,
    };
    let pick = |cli_value: Option<f64>, file_value: Option<f64>, default: f64| {
        cli_value.or(file_value).unwrap_or(default)
    };

    let holes = new_args
        .and_then(|a| a.holes)
        .or(file_config.holes)
        .unwrap_or(18);
    let holes_count = HolesCount::try_from(holes).map_err(|e| anyhow!("{e}"))?;

    let scoring_distance = new_args
        .and_then(|a| a.scoring_distance)
        .or(file_config.scoring_distance)
        .unwrap_or(DEFAULT_SCORING_DISTANCE);

    let defaults = Weights::default();
    let weights = Weights {
        bunker: pick(
            new_args.and_then(|a| a.bunker_weight),
            file_config.bunker_weight,
            defaults.bunker,
        ),
        duffed: pick(
            new_args.and_then(|a| a.duffed_weight),
            file_config.duffed_weight,
            defaults.duffed,
        ),
    };
    if !weights.is_valid() {
        return Err(anyhow!(
            "weights must be finite and not negative, got bunker {} duffed {}",
            weights.bunker,
            weights.duffed
        ));
    }

    Ok(Settings {
        db: cli
            .db
            .clone()
            .or(file_config.db)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DB_PATH)),
        holes_count,
        level: new_args
            .and_then(|a| a.level)
            .or(file_config.level)
            .unwrap_or_default(),
        scoring_distance: clamp_scoring_distance(scoring_distance),
        weights,
    })
}

fn read_file_config(cli: &Cli) -> Result<cli::FileConfig> {
    match cli.config_toml.as_ref() {
        Some(path) => {
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("read config toml {}", path.display()))?;
            toml::from_str::<cli::FileConfig>(&contents)
                .with_context(|| format!("parse config toml {}", path.display()))
        }
        None => Ok(cli::FileConfig::default()),
    }
}
