use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};

use crate::db::profile;
use crate::dto::{SetGoalRequest, SuccessResponse};
use crate::error::AppResult;
use crate::AppState;

pub async fn set_goal(
    State(state): State<AppState>,
    body: Result<Json<SetGoalRequest>, JsonRejection>,
) -> AppResult<Json<SuccessResponse>> {
    let Json(body) = body?;

    profile::set_goal(&state.db, body.goal.as_deref(), body.deadline.as_deref()).await?;

    Ok(Json(SuccessResponse::ok()))
}

pub async fn delete_goal(State(state): State<AppState>) -> AppResult<Json<SuccessResponse>> {
    profile::delete_goal(&state.db).await?;
    Ok(Json(SuccessResponse::ok()))
}
