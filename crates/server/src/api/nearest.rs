use std::sync::Arc;

use crate::{dto::NearestDto, state::AppState};
use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use nearmark::request::Request;
use tracing::warn;

pub async fn nearest(
    State(state): State<Arc<AppState>>,
    Json(request): Json<Request>,
) -> Result<Response, (StatusCode, String)> {
    match state.finder.solve(&request) {
        Ok(name) => Ok(Json(NearestDto { name }).into_response()),
        Err(err) => {
            warn!("Rejected request: {err}");
            Err((StatusCode::BAD_REQUEST, err.to_string()))
        }
    }
}
