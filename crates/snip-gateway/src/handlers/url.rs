use crate::error::{AppError, Result};
use crate::model::{ShortenRequest, ShortenResponse};
use crate::state::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use snip_core::ShortId;

/// `POST /` — the body is the raw URL to shorten. Responds 201 with the
/// shortened link as a bare string.
pub async fn create_url_handler(State(state): State<AppState>, body: String) -> Result<Response> {
    let id = state.repository().save(&body).await?;
    Ok((StatusCode::CREATED, id.to_url(state.base_url())).into_response())
}

/// `POST /api/shorten` — JSON envelope `{"url": …}`. A wrong content
/// type or an unparseable envelope is the client's fault, never a 500.
pub async fn create_url_json_handler(
    State(state): State<AppState>,
    payload: std::result::Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<Response> {
    let Json(request) = payload.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

    let id = state.repository().save(&request.url).await?;
    let response = ShortenResponse {
        result: id.to_url(state.base_url()),
    };
    Ok((StatusCode::CREATED, Json(response)).into_response())
}

/// `GET /{id}` — redirects to the stored URL. Both a non-numeric id and
/// an unknown id are 400s.
pub async fn get_url_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Response> {
    let id: ShortId = id.parse()?;
    let url = state.repository().get(id).await?;
    Ok((StatusCode::TEMPORARY_REDIRECT, [(header::LOCATION, url)]).into_response())
}
