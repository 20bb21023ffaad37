use sqlx::SqlitePool;

use crate::error::AppResult;
use crate::models::profile::UserProfile;

/// Fixed key of the singleton profile row.
pub const PROFILE_ID: i64 = 1;

pub async fn get_user_profile(pool: &SqlitePool) -> AppResult<UserProfile> {
    let profile = sqlx::query_as::<_, UserProfile>(
        r#"
        SELECT goal, deadline, COALESCE(current_streak, 0) AS current_streak, last_completion_date
        FROM user_profile
        WHERE id = ?1
        "#,
    )
    .bind(PROFILE_ID)
    .fetch_optional(pool)
    .await?;

    Ok(profile.unwrap_or_default())
}

/// Replaces the goal. The streak and last completion date are reset along
/// with it, so setting a new goal always starts from zero.
pub async fn set_goal(
    pool: &SqlitePool,
    goal: Option<&str>,
    deadline: Option<&str>,
) -> AppResult<()> {
    sqlx::query(
        r#"
        INSERT INTO user_profile (id, goal, deadline, current_streak, last_completion_date)
        VALUES (?1, ?2, ?3, 0, NULL)
        ON CONFLICT (id) DO UPDATE SET
            goal = excluded.goal,
            deadline = excluded.deadline,
            current_streak = 0,
            last_completion_date = NULL
        "#,
    )
    .bind(PROFILE_ID)
    .bind(goal)
    .bind(deadline)
    .execute(pool)
    .await?;

    tracing::debug!(?goal, ?deadline, "Goal set");
    Ok(())
}

/// Clears goal and deadline but keeps the streak. Does nothing before the
/// first `set_goal`.
pub async fn delete_goal(pool: &SqlitePool) -> AppResult<()> {
    let result = sqlx::query("UPDATE user_profile SET goal = NULL, deadline = NULL WHERE id = ?1")
        .bind(PROFILE_ID)
        .execute(pool)
        .await?;

    tracing::debug!(rows = result.rows_affected(), "Goal deleted");
    Ok(())
}

/// Overwrites the streak fields of the existing profile. Returns `false`
/// without writing anything when no profile row exists yet.
pub async fn update_streak(
    pool: &SqlitePool,
    current_streak: i64,
    last_completion_date: Option<&str>,
) -> AppResult<bool> {
    let result = sqlx::query(
        "UPDATE user_profile SET current_streak = ?1, last_completion_date = ?2 WHERE id = ?3",
    )
    .bind(current_streak)
    .bind(last_completion_date)
    .bind(PROFILE_ID)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}
