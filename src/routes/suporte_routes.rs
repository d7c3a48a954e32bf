use axum::{extract::State, routing::post, Json, Router};

use crate::controllers::suporte_controller::SuporteController;
use crate::dto::suporte_dto::CreateSuporteRequest;
use crate::dto::ApiResponse;
use crate::models::suporte::MensagemSuporte;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_suporte_router() -> Router<AppState> {
    Router::new().route("/", post(create_mensagem))
}

/// Formulário público de contato
async fn create_mensagem(
    State(state): State<AppState>,
    Json(request): Json<CreateSuporteRequest>,
) -> Result<Json<ApiResponse<MensagemSuporte>>, AppError> {
    let controller = SuporteController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}
