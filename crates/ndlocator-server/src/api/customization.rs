use axum::extract::State;
use axum::{Extension, Json};
use ndlocator_core::{save_customization, Customization};

use crate::middleware::RequestId;

use super::{ApiError, ApiResponse, AppState, ResponseMeta};

pub(super) async fn get_customization(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Json<ApiResponse<Customization>> {
    let custom = state.customization.read().await.clone();
    Json(ApiResponse {
        data: custom,
        meta: ResponseMeta::new(req_id.0),
    })
}

/// Replaces the whole customization document and persists it immediately;
/// every change is a full rewrite of the file.
pub(super) async fn put_customization(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(incoming): Json<Customization>,
) -> Result<Json<ApiResponse<Customization>>, ApiError> {
    save_customization(&state.customization_path, &incoming).map_err(|error| {
        tracing::error!(%error, "failed to persist customization");
        ApiError::new(
            req_id.0.clone(),
            "internal_error",
            "failed to persist customization",
        )
    })?;

    let mut custom = state.customization.write().await;
    *custom = incoming.clone();

    Ok(Json(ApiResponse {
        data: incoming,
        meta: ResponseMeta::new(req_id.0),
    }))
}
