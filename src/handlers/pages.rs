use anyhow::Context;
use axum::{extract::State, response::Html};
use chrono::Local;

use crate::db::{daily_records, profile};
use crate::dto::PageData;
use crate::error::AppResult;
use crate::AppState;

const INDEX_TEMPLATE: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/templates/index.html"));
const DATA_PLACEHOLDER: &str = "{{ page_data }}";

pub async fn index(State(state): State<AppState>) -> AppResult<Html<String>> {
    let data = PageData {
        today: Local::now().date_naive().format("%Y-%m-%d").to_string(),
        all_data: daily_records::get_all_daily_records(&state.db).await?,
        profile: profile::get_user_profile(&state.db).await?,
    };

    Ok(Html(render_index(&data)?))
}

/// Inlines the page data as JSON inside a `<script>` element. `</` is escaped
/// so stored text can never terminate the element early.
pub fn render_index(data: &PageData) -> anyhow::Result<String> {
    let json = serde_json::to_string(data)
        .context("failed to encode page data")?
        .replace("</", "<\\/");

    Ok(INDEX_TEMPLATE.replace(DATA_PLACEHOLDER, &json))
}
