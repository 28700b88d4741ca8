//! Bridge HTTP handlers.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use super::types::{BridgeState, HealthResponse, TabResponseEvent};
use crate::lookup::{MessageRequest, MessageResponse};
use crate::tabs::TabId;

/// `POST /message`: the request/response message contract.
///
/// Lookup failures are part of the contract and still answer 200; only a body
/// that is not a message at all gets 400.
pub async fn message_handler(
    State(state): State<BridgeState>,
    payload: Result<Json<MessageRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match payload {
        Ok(request) => request,
        Err(rejection) => {
            log::debug!("Rejected message body: {rejection}");
            return (
                StatusCode::BAD_REQUEST,
                Json(MessageResponse::failure(rejection.body_text())),
            )
                .into_response();
        }
    };

    let tabs = state.tabs.clone();
    let response = state
        .netbar
        .handle_message(&request, |tab_id| tabs.server_for(tab_id))
        .await;
    (StatusCode::OK, Json(response)).into_response()
}

/// `POST /tabs/{tab_id}/response`: a response was observed in a tab.
pub async fn tab_response_handler(
    State(state): State<BridgeState>,
    Path(tab_id): Path<TabId>,
    Json(event): Json<TabResponseEvent>,
) -> StatusCode {
    state
        .tabs
        .record_response(tab_id, &event.resource_type, &event.headers);
    StatusCode::NO_CONTENT
}

/// `DELETE /tabs/{tab_id}`: the tab was closed.
pub async fn tab_closed_handler(
    State(state): State<BridgeState>,
    Path(tab_id): Path<TabId>,
) -> StatusCode {
    state.tabs.remove(tab_id);
    StatusCode::NO_CONTENT
}

/// `GET /health`
pub async fn health_handler(State(state): State<BridgeState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        tabs: state.tabs.len(),
    })
}
