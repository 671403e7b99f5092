use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use serde::Deserialize;
use std::path::PathBuf;

use crate::model::{Level, RoundState, TeeShotResult};

#[derive(Parser, Debug)]
#[command(author, version, about = "Log golf rounds hole by hole and see where the strokes went.")]
pub struct Cli {
    /// SQLite file holding the current round and saved course templates.
    #[arg(long, global = true, value_name = "DATABASE_PATH")]
    pub db: Option<PathBuf>,
    /// Optional TOML file with defaults for the options below.
    #[arg(long, global = true, value_name = "CONFIG_TOML")]
    pub config_toml: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start a fresh round with a default course layout.
    New(NewRoundArgs),
    /// Print the current round hole by hole.
    Show,
    /// Edit one hole of the current round.
    Hole(HoleArgs),
    /// Print the round summary.
    Summary {
        /// Summarize a round JSON file instead of the stored round.
        #[arg(long, value_name = "ROUND_JSON", value_parser = crate::args::validation::check_readable_round_json)]
        round: Option<RoundState>,
        #[arg(long)]
        json: bool,
    },
    /// Goal score for a hole at a skill level.
    Goal {
        #[arg(long, value_enum)]
        level: Level,
        #[arg(long)]
        par: u8,
        #[arg(long)]
        stroke_index: u8,
    },
    /// Play the same course again: keep par and stroke index, clear all entries.
    Reset,
    /// Mark the current round finished.
    Finish,
    /// Forget the current round.
    Clear,
    #[command(subcommand)]
    Template(TemplateCommand),
}

#[derive(Args, Debug, Default)]
pub struct NewRoundArgs {
    #[arg(long, value_parser = crate::args::validation::check_holes_count)]
    pub holes: Option<u8>,
    #[arg(long, value_enum)]
    pub level: Option<Level>,
    #[arg(long)]
    pub scoring_distance: Option<u32>,
    #[arg(long)]
    pub bunker_weight: Option<f64>,
    #[arg(long)]
    pub duffed_weight: Option<f64>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum HoleField {
    Strokes,
    Putts,
    #[value(name = "missed-putts-6ft")]
    MissedPutts6ft,
    ReachedSd,
    Tee,
}

#[derive(Args, Debug)]
pub struct HoleArgs {
    /// Hole number, 1-based.
    #[arg(long)]
    pub n: u8,
    #[arg(long)]
    pub par: Option<u8>,
    #[arg(long)]
    pub stroke_index: Option<u8>,
    #[arg(long)]
    pub strokes: Option<u32>,
    #[arg(long)]
    pub putts: Option<u32>,
    #[arg(long)]
    pub missed_putts_6ft: Option<u32>,
    #[arg(long, action = ArgAction::Set)]
    pub reached_sd: Option<bool>,
    #[arg(long, value_enum)]
    pub tee: Option<TeeShotResult>,
    /// Change in lost balls, e.g. 1 or -1.
    #[arg(long, allow_hyphen_values = true)]
    pub lost_ball: Option<i32>,
    #[arg(long, allow_hyphen_values = true)]
    pub bunker: Option<i32>,
    #[arg(long, allow_hyphen_values = true)]
    pub duffed: Option<i32>,
    /// Clear an entered field.
    #[arg(long, value_enum)]
    pub unset: Vec<HoleField>,
}

#[derive(Subcommand, Debug)]
pub enum TemplateCommand {
    /// Save the current round's course layout.
    Save {
        #[arg(long, value_parser = crate::args::validation::check_template_name)]
        name: String,
    },
    List,
    /// Start a new round on a saved layout.
    Apply {
        #[arg(long)]
        id: String,
    },
    Delete {
        #[arg(long)]
        id: String,
    },
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct FileConfig {
    pub db: Option<PathBuf>,
    pub level: Option<Level>,
    pub holes: Option<u8>,
    pub scoring_distance: Option<u32>,
    pub bunker_weight: Option<f64>,
    pub duffed_weight: Option<f64>,
}
