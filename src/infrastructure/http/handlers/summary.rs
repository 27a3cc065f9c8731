//! Summary HTTP Handlers

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::application::GetSummary;
use crate::infrastructure::http::dto::SummaryResponse;
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 获取统计摘要
pub async fn get_summary(
    State(state): State<Arc<AppState>>,
) -> Result<Json<SummaryResponse>, ApiError> {
    let view = state.get_summary_handler.handle(GetSummary).await?;

    Ok(Json(SummaryResponse::from(view)))
}
