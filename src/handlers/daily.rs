use std::collections::BTreeMap;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};

use crate::db::daily_records;
use crate::dto::{SaveDailyDataRequest, SaveJournalRequest, SuccessResponse};
use crate::error::AppResult;
use crate::models::daily_record::{DailyRecord, DailyUpdate};
use crate::AppState;

pub async fn get_day(
    State(state): State<AppState>,
    Path(date): Path<String>,
) -> AppResult<Json<DailyRecord>> {
    let record = daily_records::get_daily_record(&state.db, &date).await?;
    Ok(Json(record))
}

pub async fn get_all_data(
    State(state): State<AppState>,
) -> AppResult<Json<BTreeMap<String, DailyRecord>>> {
    let all = daily_records::get_all_daily_records(&state.db).await?;
    Ok(Json(all))
}

pub async fn save_daily_data(
    State(state): State<AppState>,
    body: Result<Json<SaveDailyDataRequest>, JsonRejection>,
) -> AppResult<Json<SuccessResponse>> {
    let Json(body) = body?;
    let (date, update) = body.into_parts()?;

    daily_records::upsert_daily_record(&state.db, &date, update).await?;

    Ok(Json(SuccessResponse::ok()))
}

pub async fn save_journal(
    State(state): State<AppState>,
    body: Result<Json<SaveJournalRequest>, JsonRejection>,
) -> AppResult<Json<SuccessResponse>> {
    let Json(body) = body?;
    let (date, entry) = body.into_parts()?;

    daily_records::upsert_daily_record(&state.db, &date, DailyUpdate::journal(entry)).await?;

    Ok(Json(SuccessResponse::ok()))
}
