use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use log::debug;
use rusqlite::{Connection, OptionalExtension, params};
use std::path::Path;
use std::sync::{Arc, Mutex};

use super::{Storage, StorageError};
use crate::model::{
    CourseTemplate, HoleRow, HolesCount, Oopsies, RoundRow, RoundState, SummaryRow, TeeShotResult,
    TemplateHole, Weights,
};
use crate::score::compute_round_summary;

const SCHEMA_VERSION: i64 = 1;

pub const SCHEMA_DDL: &[(&str, &str)] = &[
    ("round", include_str!("../sql/schema/sqlite/00_round.sql")),
    ("hole", include_str!("../sql/schema/sqlite/01_hole.sql")),
    (
        "round_summary",
        include_str!("../sql/schema/sqlite/02_round_summary.sql"),
    ),
    (
        "course_template",
        include_str!("../sql/schema/sqlite/03_course_template.sql"),
    ),
];

const SET_ROUND: &str = include_str!("../sql/functions/sqlite/00_sp_set_round.sql");
const SET_HOLE: &str = include_str!("../sql/functions/sqlite/01_sp_set_hole.sql");
const SET_ROUND_SUMMARY: &str = include_str!("../sql/functions/sqlite/02_sp_set_round_summary.sql");
const SET_COURSE_TEMPLATE: &str =
    include_str!("../sql/functions/sqlite/03_sp_set_course_template.sql");

/// Current round, its holes and summary, plus course templates, in one SQLite file.
#[derive(Clone)]
pub struct SqliteStorage {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteStorage {
    /// Opens (or creates) the database at `path` and brings the schema up to date.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or the schema cannot be applied.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let conn = Connection::open(path)?;
        Self::from_connection(conn)
    }

    /// # Errors
    /// Returns an error if the schema cannot be applied.
    pub fn open_in_memory() -> Result<Self, StorageError> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(mut conn: Connection) -> Result<Self, StorageError> {
        conn.pragma_update(None, "foreign_keys", true)?;
        migrate(&mut conn)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    async fn with_conn<T, F>(&self, f: F) -> Result<T, StorageError>
    where
        F: FnOnce(&mut Connection) -> Result<T, StorageError> + Send + 'static,
        T: Send + 'static,
    {
        let conn = Arc::clone(&self.conn);
        tokio::task::spawn_blocking(move || {
            let mut guard = conn
                .lock()
                .map_err(|_| StorageError::new("sqlite connection lock poisoned"))?;
            f(&mut *guard)
        })
        .await
        .map_err(|e| StorageError::new(format!("sqlite task failed: {e}")))?
    }

    /// Reads back the summary row written with the last save.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub async fn load_summary_row(&self) -> Result<Option<SummaryRow>, StorageError> {
        self.with_conn(|conn| {
            let row = conn
                .query_row(
                    "SELECT strokes, to_par, sd_pct, sd_made, sd_eligible, npir_pct, npir_made, \
                     npir_eligible, p3_pct, p3_made, p3_eligible, avg_putts, putts_lost_total, \
                     missed_putts_6ft_total, missed_putts_6ft_pct, tee_shots_fairway_total, \
                     tee_shots_trouble_total, tee_shots_fairway_pct, strokes_lost_total \
                     FROM round_summary WHERE round_id = 1",
                    [],
                    |r| {
                        Ok(SummaryRow {
                            strokes: r.get(0)?,
                            to_par: r.get(1)?,
                            sd_pct: r.get(2)?,
                            sd_made: r.get(3)?,
                            sd_eligible: r.get(4)?,
                            npir_pct: r.get(5)?,
                            npir_made: r.get(6)?,
                            npir_eligible: r.get(7)?,
                            p3_pct: r.get(8)?,
                            p3_made: r.get(9)?,
                            p3_eligible: r.get(10)?,
                            avg_putts: r.get(11)?,
                            putts_lost_total: r.get(12)?,
                            missed_putts_6ft_total: r.get(13)?,
                            missed_putts_6ft_pct: r.get(14)?,
                            tee_shots_fairway_total: r.get(15)?,
                            tee_shots_trouble_total: r.get(16)?,
                            tee_shots_fairway_pct: r.get(17)?,
                            strokes_lost_total: r.get(18)?,
                        })
                    },
                )
                .optional()?;
            Ok(row)
        })
        .await
    }
}

fn migrate(conn: &mut Connection) -> Result<(), StorageError> {
    let version: i64 = conn.pragma_query_value(None, "user_version", |r| r.get(0))?;
    if version >= SCHEMA_VERSION {
        return Ok(());
    }
    let tx = conn.transaction()?;
    for (table, ddl) in SCHEMA_DDL {
        debug!("creating table {table}");
        tx.execute_batch(ddl)?;
    }
    tx.pragma_update(None, "user_version", SCHEMA_VERSION)?;
    tx.commit()?;
    Ok(())
}

fn write_round(conn: &mut Connection, round: &RoundState) -> Result<(), StorageError> {
    let row = RoundRow::from_round(round, false);
    let summary = SummaryRow::from(&compute_round_summary(round));
    let weights = serde_json::to_string(&row.weights)?;

    let tx = conn.transaction()?;
    tx.execute(
        SET_ROUND,
        params![row.holes_count, row.level, row.scoring_distance, weights],
    )?;
    tx.execute("DELETE FROM hole WHERE round_id = 1", [])?;
    {
        let mut stmt = tx.prepare(SET_HOLE)?;
        for hole in round.holes.iter().map(HoleRow::from) {
            let oopsies = serde_json::to_string(&hole.oopsies)?;
            stmt.execute(params![
                hole.hole_no,
                hole.par,
                hole.stroke_index,
                hole.strokes,
                hole.putts,
                hole.reached_sd,
                oopsies,
                hole.missed_putts_6ft,
                hole.tee_shot_result.map(TeeShotResult::as_str),
            ])?;
        }
    }
    tx.execute(
        SET_ROUND_SUMMARY,
        params![
            summary.strokes,
            summary.to_par,
            summary.sd_pct,
            summary.sd_made,
            summary.sd_eligible,
            summary.npir_pct,
            summary.npir_made,
            summary.npir_eligible,
            summary.p3_pct,
            summary.p3_made,
            summary.p3_eligible,
            summary.avg_putts,
            summary.putts_lost_total,
            summary.missed_putts_6ft_total,
            summary.missed_putts_6ft_pct,
            summary.tee_shots_fairway_total,
            summary.tee_shots_trouble_total,
            summary.tee_shots_fairway_pct,
            summary.strokes_lost_total,
        ],
    )?;
    tx.commit()?;
    Ok(())
}

struct RawHole {
    hole_no: u8,
    par: u8,
    stroke_index: u8,
    strokes: Option<u32>,
    putts: Option<u32>,
    reached_sd: Option<bool>,
    oopsies: String,
    missed_putts_6ft: Option<u32>,
    tee_shot_result: Option<String>,
}

fn read_round(conn: &Connection) -> Result<Option<RoundState>, StorageError> {
    let raw = conn
        .query_row(
            "SELECT holes_count, level, scoring_distance, weights, completed \
             FROM round WHERE round_id = 1",
            [],
            |r| {
                Ok((
                    r.get::<_, u8>(0)?,
                    r.get::<_, String>(1)?,
                    r.get::<_, u32>(2)?,
                    r.get::<_, String>(3)?,
                    r.get::<_, bool>(4)?,
                ))
            },
        )
        .optional()?;
    let Some((holes_count, level, scoring_distance, weights, completed)) = raw else {
        return Ok(None);
    };
    let round_row = RoundRow {
        holes_count,
        level,
        scoring_distance,
        weights: serde_json::from_str::<Weights>(&weights)?,
        completed,
    };

    let mut stmt = conn.prepare(
        "SELECT hole_no, par, stroke_index, strokes, putts, reached_sd, oopsies, \
         missed_putts_6ft, tee_shot_result FROM hole WHERE round_id = 1 ORDER BY hole_no",
    )?;
    let raw_holes = stmt
        .query_map([], |r| {
            Ok(RawHole {
                hole_no: r.get(0)?,
                par: r.get(1)?,
                stroke_index: r.get(2)?,
                strokes: r.get(3)?,
                putts: r.get(4)?,
                reached_sd: r.get(5)?,
                oopsies: r.get(6)?,
                missed_putts_6ft: r.get(7)?,
                tee_shot_result: r.get(8)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;

    let mut holes = Vec::with_capacity(raw_holes.len());
    for raw in raw_holes {
        holes.push(HoleRow {
            hole_no: raw.hole_no,
            par: raw.par,
            stroke_index: raw.stroke_index,
            strokes: raw.strokes,
            putts: raw.putts,
            reached_sd: raw.reached_sd,
            oopsies: serde_json::from_str::<Oopsies>(&raw.oopsies)?,
            missed_putts_6ft: raw.missed_putts_6ft,
            tee_shot_result: raw
                .tee_shot_result
                .as_deref()
                .map(str::parse::<TeeShotResult>)
                .transpose()?,
        });
    }

    Ok(Some(round_row.into_round(holes)?))
}

fn read_templates(conn: &Connection) -> Result<Vec<CourseTemplate>, StorageError> {
    let mut stmt = conn.prepare(
        "SELECT id, name, holes_count, holes, created_at FROM course_template \
         ORDER BY created_at DESC",
    )?;
    let raw = stmt
        .query_map([], |r| {
            Ok((
                r.get::<_, String>(0)?,
                r.get::<_, String>(1)?,
                r.get::<_, u8>(2)?,
                r.get::<_, String>(3)?,
                r.get::<_, String>(4)?,
            ))
        })?
        .collect::<Result<Vec<_>, _>>()?;

    let mut templates = Vec::with_capacity(raw.len());
    for (id, name, holes_count, holes, created_at) in raw {
        let created_at = DateTime::parse_from_rfc3339(&created_at)
            .map_err(|e| StorageError::new(format!("template {id} created_at: {e}")))?
            .with_timezone(&Utc);
        templates.push(CourseTemplate {
            holes_count: HolesCount::try_from(holes_count)?,
            holes: serde_json::from_str::<Vec<TemplateHole>>(&holes)?,
            id,
            name,
            created_at,
        });
    }
    Ok(templates)
}

#[async_trait]
impl Storage for SqliteStorage {
    async fn load_round(&self) -> Result<Option<RoundState>, StorageError> {
        self.with_conn(|conn| read_round(conn)).await
    }

    async fn save_round(&self, round: &RoundState) -> Result<(), StorageError> {
        let round = round.clone();
        self.with_conn(move |conn| {
            write_round(conn, &round)?;
            debug!("saved round with {} holes", round.holes.len());
            Ok(())
        })
        .await
    }

    async fn clear_round(&self) -> Result<(), StorageError> {
        self.with_conn(|conn| {
            let tx = conn.transaction()?;
            tx.execute("DELETE FROM round_summary WHERE round_id = 1", [])?;
            tx.execute("DELETE FROM hole WHERE round_id = 1", [])?;
            tx.execute("DELETE FROM round WHERE round_id = 1", [])?;
            tx.commit()?;
            Ok(())
        })
        .await
    }

    async fn set_completed(&self, completed: bool) -> Result<(), StorageError> {
        self.with_conn(move |conn| {
            let changed = conn.execute(
                "UPDATE round SET completed = ?1 WHERE round_id = 1",
                params![completed],
            )?;
            if changed == 0 {
                return Err(StorageError::new("no round to update"));
            }
            Ok(())
        })
        .await
    }

    async fn round_completed(&self) -> Result<bool, StorageError> {
        self.with_conn(|conn| {
            let completed = conn
                .query_row("SELECT completed FROM round WHERE round_id = 1", [], |r| {
                    r.get::<_, bool>(0)
                })
                .optional()?;
            Ok(completed.unwrap_or(false))
        })
        .await
    }

    async fn load_templates(&self) -> Result<Vec<CourseTemplate>, StorageError> {
        self.with_conn(|conn| read_templates(conn)).await
    }

    async fn save_template(&self, template: &CourseTemplate) -> Result<(), StorageError> {
        let template = template.clone();
        self.with_conn(move |conn| {
            let holes = serde_json::to_string(&template.holes)?;
            conn.execute(
                SET_COURSE_TEMPLATE,
                params![
                    template.id,
                    template.name,
                    u8::from(template.holes_count),
                    holes,
                    template
                        .created_at
                        .to_rfc3339_opts(SecondsFormat::Micros, true),
                ],
            )?;
            debug!("saved template '{}' ({})", template.name, template.id);
            Ok(())
        })
        .await
    }

    async fn delete_template(&self, id: &str) -> Result<(), StorageError> {
        let id = id.to_string();
        self.with_conn(move |conn| {
            conn.execute("DELETE FROM course_template WHERE id = ?1", params![id])?;
            Ok(())
        })
        .await
    }
}
