use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use tracing::info;

use crate::{
    api::dtos::{ErrorResponse, ExtractRequest, ExtractResponse, RedirectParams, RuleResponse},
    app_state::AppState,
    host::{Notice, RecordingHost},
    lookup::lookup_url,
    runner::Outcome,
};

pub async fn extract(State(state): State<AppState>, Json(payload): Json<ExtractRequest>) -> Response {
    let extractor = state.runner.extractor();
    match extractor.extract_str(&payload.url, &payload.html) {
        Ok(Some(isbn)) => {
            let lookup = lookup_url(state.runner.lookup_base(), &isbn);
            (
                StatusCode::OK,
                Json(ExtractResponse {
                    isbn,
                    lookup_url: lookup.to_string(),
                }),
            )
                .into_response()
        }
        Ok(None) => not_found(Notice::IsbnNotFound),
        Err(e) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        )
            .into_response(),
    }
}

/// Run the engine against a URL alone and redirect to the lookup page.
///
/// No markup is available here, so rules that scan the page never find an ISBN.
pub async fn redirect(State(state): State<AppState>, Query(params): Query<RedirectParams>) -> Response {
    let mut host = RecordingHost::new(params.url, "");
    match state.runner.run(&mut host) {
        Outcome::Opened(target) => {
            info!(lookup = %target, "redirecting to lookup page");
            Redirect::to(target.as_str()).into_response()
        }
        Outcome::Alerted(notice) => not_found(notice),
    }
}

pub async fn list_rules(State(state): State<AppState>) -> Json<Vec<RuleResponse>> {
    let rules = state
        .runner
        .extractor()
        .rules()
        .iter()
        .map(RuleResponse::from)
        .collect();
    Json(rules)
}

fn not_found(notice: Notice) -> Response {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(ErrorResponse {
            error: notice.message().to_string(),
        }),
    )
        .into_response()
}
