use axum::{extract::State, routing::post, Json, Router};

use crate::controllers::candidatura_controller::CandidaturaController;
use crate::dto::candidatura_dto::CreateCandidaturaRequest;
use crate::dto::ApiResponse;
use crate::models::candidatura::Candidatura;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_candidatura_router() -> Router<AppState> {
    Router::new().route("/candidatura", post(create_candidatura))
}

/// Candidatura pública de parceiros (oficinas e guinchos)
async fn create_candidatura(
    State(state): State<AppState>,
    Json(request): Json<CreateCandidaturaRequest>,
) -> Result<Json<ApiResponse<Candidatura>>, AppError> {
    let controller = CandidaturaController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}
