use axum::body::Bytes;
use axum::extract::State;
use axum::Json;

use crate::state::SharedState;
use crate::submission::{parser, HandlerResponse, SubmissionEvent};

/// Treat the HTTP request body as the event body and answer with the
/// handler's status and JSON body.
pub async fn submit(State(state): State<SharedState>, body: Bytes) -> HandlerResponse {
    let body = match parser::body_text(&body) {
        Ok(body) => body,
        Err(e) => {
            tracing::debug!("Rejected submission body: {e:?}");
            return e.into_handler_response();
        }
    };

    state.handler.handle(SubmissionEvent { body }).await
}

/// Run a serialized event through the handler and return the serialized
/// response, always with HTTP 200.
pub async fn invoke(
    State(state): State<SharedState>,
    Json(event): Json<SubmissionEvent>,
) -> Json<HandlerResponse> {
    Json(state.handler.handle(event).await)
}
