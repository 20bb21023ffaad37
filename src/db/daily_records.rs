use std::collections::BTreeMap;

use sqlx::SqlitePool;

use crate::db::codec::{decode_list, encode_list};
use crate::error::AppResult;
use crate::models::daily_record::{DailyRecord, DailyRecordRow, DailyUpdate};

const SELECT_DAILY: &str = r#"
    SELECT date, completed_workouts, todo_list, shloka_shown, run_list, physical_tasks, journal_entry
    FROM daily_data
"#;

impl DailyRecordRow {
    pub fn into_record(self) -> AppResult<DailyRecord> {
        let key = self.date.as_str();
        Ok(DailyRecord {
            completed_workouts: decode_list(
                "completed_workouts",
                key,
                self.completed_workouts.as_deref(),
            )?,
            todo_list: decode_list("todo_list", key, self.todo_list.as_deref())?,
            shloka_shown: self.shloka_shown.unwrap_or(0) != 0,
            run_list: decode_list("run_list", key, self.run_list.as_deref())?,
            physical_tasks: decode_list("physical_tasks", key, self.physical_tasks.as_deref())?,
            journal_entry: self.journal_entry.unwrap_or_default(),
        })
    }
}

/// Record for `date`, or the empty default when nothing was saved that day.
pub async fn get_daily_record(pool: &SqlitePool, date: &str) -> AppResult<DailyRecord> {
    let row = sqlx::query_as::<_, DailyRecordRow>(&format!("{SELECT_DAILY} WHERE date = ?1"))
        .bind(date)
        .fetch_optional(pool)
        .await?;

    match row {
        Some(row) => row.into_record(),
        None => Ok(DailyRecord::default()),
    }
}

pub async fn get_all_daily_records(pool: &SqlitePool) -> AppResult<BTreeMap<String, DailyRecord>> {
    let rows = sqlx::query_as::<_, DailyRecordRow>(&format!("{SELECT_DAILY} ORDER BY date"))
        .fetch_all(pool)
        .await?;

    rows.into_iter()
        .map(|row| {
            let date = row.date.clone();
            row.into_record().map(|record| (date, record))
        })
        .collect()
}

/// Merges `update` into the record for `date`, creating it if needed, and
/// returns the stored result. Fields absent from the update keep their
/// stored value (or the default on insert). One statement, so readers never
/// see a half-merged row.
pub async fn upsert_daily_record(
    pool: &SqlitePool,
    date: &str,
    update: DailyUpdate,
) -> AppResult<DailyRecord> {
    let completed_workouts = update.completed_workouts.as_deref().map(encode_list);
    let todo_list = update.todo_list.as_deref().map(encode_list);
    let run_list = update.run_list.as_deref().map(encode_list);
    let physical_tasks = update.physical_tasks.as_deref().map(encode_list);

    let row = sqlx::query_as::<_, DailyRecordRow>(
        r#"
        INSERT INTO daily_data (date, completed_workouts, todo_list, shloka_shown, run_list, physical_tasks, journal_entry)
        VALUES (?1, COALESCE(?2, '[]'), COALESCE(?3, '[]'), COALESCE(?4, 0), COALESCE(?5, '[]'), COALESCE(?6, '[]'), COALESCE(?7, ''))
        ON CONFLICT (date) DO UPDATE SET
            completed_workouts = COALESCE(?2, daily_data.completed_workouts),
            todo_list = COALESCE(?3, daily_data.todo_list),
            shloka_shown = COALESCE(?4, daily_data.shloka_shown),
            run_list = COALESCE(?5, daily_data.run_list),
            physical_tasks = COALESCE(?6, daily_data.physical_tasks),
            journal_entry = COALESCE(?7, daily_data.journal_entry)
        RETURNING date, completed_workouts, todo_list, shloka_shown, run_list, physical_tasks, journal_entry
        "#,
    )
    .bind(date)
    .bind(completed_workouts)
    .bind(todo_list)
    .bind(update.shloka_shown)
    .bind(run_list)
    .bind(physical_tasks)
    .bind(update.journal_entry)
    .fetch_one(pool)
    .await?;

    tracing::debug!(date, "Daily record upserted");

    row.into_record()
}
