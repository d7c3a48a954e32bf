use axum::{
    extract::{Path, State},
    routing::{get, post, put},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::cotacao_controller::CotacaoController;
use crate::dto::cotacao_dto::{
    CotacaoResponse, CreateCotacaoRequest, UpdateStatusCotacaoRequest,
};
use crate::dto::ApiResponse;
use crate::middleware::auth::AuthenticatedUser;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_cotacao_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_cotacao))
        .route("/", get(list_cotacoes))
        .route("/:id/status", put(update_status))
}

async fn create_cotacao(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Json(request): Json<CreateCotacaoRequest>,
) -> Result<Json<ApiResponse<CotacaoResponse>>, AppError> {
    let controller = CotacaoController::new(state.pool.clone());
    let response = controller.create(&user, request).await?;
    Ok(Json(response))
}

async fn list_cotacoes(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> Result<Json<Vec<CotacaoResponse>>, AppError> {
    let controller = CotacaoController::new(state.pool.clone());
    let response = controller.listar(&user).await?;
    Ok(Json(response))
}

async fn update_status(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateStatusCotacaoRequest>,
) -> Result<Json<ApiResponse<CotacaoResponse>>, AppError> {
    let controller = CotacaoController::new(state.pool.clone());
    let response = controller.atualizar_status(&user, id, request).await?;
    Ok(Json(response))
}
