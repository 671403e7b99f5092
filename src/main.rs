use anyhow::{Context, Result, anyhow};
use clap::Parser;
use log::debug;
use rusty_golf_rounds::args::{
    Cli, Command, HoleArgs, HoleField, Settings, TemplateCommand, load_settings,
};
use rusty_golf_rounds::model::OopsieKind;
use rusty_golf_rounds::mvu::{HoleEdit, Msg, RoundModel, run_round};
use rusty_golf_rounds::score::{compute_round_summary, goal_score};
use rusty_golf_rounds::storage::{SqliteStorage, Storage};
use rusty_golf_rounds::view::{render_round, render_summary, render_templates};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let settings = load_settings(&cli)?;
    debug!("settings: {settings:?}");

    match &cli.command {
        Command::Goal {
            level,
            par,
            stroke_index,
        } => {
            println!("{}", goal_score(*level, *par, *stroke_index));
            return Ok(());
        }
        Command::Summary {
            round: Some(round),
            json,
        } => {
            let summary = compute_round_summary(round);
            print_summary(&summary, *json)?;
            return Ok(());
        }
        _ => {}
    }

    let storage = SqliteStorage::open(&settings.db)
        .with_context(|| format!("open database {}", settings.db.display()))?;
    let mut model = RoundModel::new();
    run_round(&mut model, Msg::Load, &storage).await?;

    run_command(cli.command, &settings, &mut model, &storage).await
}

async fn run_command(
    command: Command,
    settings: &Settings,
    model: &mut RoundModel,
    storage: &SqliteStorage,
) -> Result<()> {
    match command {
        Command::New(_) => {
            let msg = Msg::NewRound {
                holes_count: settings.holes_count,
                level: settings.level,
                scoring_distance: settings.scoring_distance,
                weights: settings.weights,
            };
            run_round(model, msg, storage).await?;
            show_round(model)?;
        }
        Command::Show => show_round(model)?,
        Command::Hole(args) => {
            require_open_round(model)?;
            for edit in hole_edits(&args) {
                run_round(model, Msg::EditHole { n: args.n, edit }, storage).await?;
            }
            show_round(model)?;
        }
        Command::Summary { json, .. } => {
            let summary = model
                .summary
                .clone()
                .ok_or_else(|| anyhow!("no round in progress, start one with `new`"))?;
            print_summary(&summary, json)?;
        }
        Command::Goal { .. } => {}
        Command::Reset => {
            run_round(model, Msg::ResetKeepCourse, storage).await?;
            show_round(model)?;
        }
        Command::Finish => {
            run_round(model, Msg::Finish, storage).await?;
            show_round(model)?;
        }
        Command::Clear => run_round(model, Msg::Clear, storage).await?,
        Command::Template(cmd) => run_template_command(cmd, model, storage).await?,
    }
    Ok(())
}

async fn run_template_command(
    cmd: TemplateCommand,
    model: &mut RoundModel,
    storage: &SqliteStorage,
) -> Result<()> {
    match cmd {
        TemplateCommand::Save { name } => {
            run_round(model, Msg::SaveAsTemplate(name), storage).await?;
            let template = model
                .last_template
                .as_ref()
                .ok_or_else(|| anyhow!("no round to save a course from"))?;
            println!("saved course '{}' as {}", template.name, template.id);
        }
        TemplateCommand::List => {
            let templates = storage.load_templates().await?;
            print!("{}", render_templates(&templates, chrono::Utc::now()));
        }
        TemplateCommand::Apply { id } => {
            let template = storage
                .load_templates()
                .await?
                .into_iter()
                .find(|t| t.id == id)
                .ok_or_else(|| anyhow!("no saved course with id {id}"))?;
            run_round(model, Msg::ApplyTemplate(template), storage).await?;
            show_round(model)?;
        }
        TemplateCommand::Delete { id } => {
            storage.delete_template(&id).await?;
            println!("deleted {id}");
        }
    }
    Ok(())
}

fn require_open_round(model: &RoundModel) -> Result<()> {
    if model.round.is_none() {
        return Err(anyhow!("no round in progress, start one with `new`"));
    }
    if model.completed {
        return Err(anyhow!("round is finished, use `reset` to play the course again"));
    }
    Ok(())
}

fn hole_edits(args: &HoleArgs) -> Vec<HoleEdit> {
    let mut edits = Vec::new();
    if let Some(par) = args.par {
        edits.push(HoleEdit::Par(par));
    }
    if let Some(si) = args.stroke_index {
        edits.push(HoleEdit::StrokeIndex(si));
    }
    if let Some(strokes) = args.strokes {
        edits.push(HoleEdit::Strokes(Some(strokes)));
    }
    if let Some(putts) = args.putts {
        edits.push(HoleEdit::Putts(Some(putts)));
    }
    if let Some(missed) = args.missed_putts_6ft {
        edits.push(HoleEdit::MissedPutts6ft(Some(missed)));
    }
    if let Some(reached) = args.reached_sd {
        edits.push(HoleEdit::ReachedSd(Some(reached)));
    }
    if let Some(tee) = args.tee {
        edits.push(HoleEdit::TeeShot(Some(tee)));
    }
    for (kind, delta) in [
        (OopsieKind::LostBall, args.lost_ball),
        (OopsieKind::Bunker, args.bunker),
        (OopsieKind::Duffed, args.duffed),
    ] {
        if let Some(delta) = delta {
            edits.push(HoleEdit::Oopsie(kind, delta));
        }
    }
    for field in &args.unset {
        edits.push(match field {
            HoleField::Strokes => HoleEdit::Strokes(None),
            HoleField::Putts => HoleEdit::Putts(None),
            HoleField::MissedPutts6ft => HoleEdit::MissedPutts6ft(None),
            HoleField::ReachedSd => HoleEdit::ReachedSd(None),
            HoleField::Tee => HoleEdit::TeeShot(None),
        });
    }
    edits
}

fn show_round(model: &RoundModel) -> Result<()> {
    let (Some(round), Some(phase)) = (model.round.as_ref(), model.phase()) else {
        println!("no round in progress");
        return Ok(());
    };
    print!("{}", render_round(round, phase));
    if let Some(summary) = model.summary.as_ref() {
        println!();
        print_summary(summary, false)?;
    }
    Ok(())
}

fn print_summary(
    summary: &rusty_golf_rounds::model::RoundSummary,
    json: bool,
) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(summary)?);
    } else {
        print!("{}", render_summary(summary));
    }
    Ok(())
}
