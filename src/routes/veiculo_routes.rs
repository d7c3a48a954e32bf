use axum::{
    extract::{Path, State},
    routing::{delete, get, post, put},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::veiculo_controller::VeiculoController;
use crate::dto::veiculo_dto::{CreateVeiculoRequest, UpdateVeiculoRequest, VeiculoResponse};
use crate::dto::ApiResponse;
use crate::middleware::auth::AuthenticatedUser;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_veiculo_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_veiculo))
        .route("/", get(list_veiculos))
        .route("/:id", get(get_veiculo))
        .route("/:id", put(update_veiculo))
        .route("/:id", delete(delete_veiculo))
}

async fn create_veiculo(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Json(request): Json<CreateVeiculoRequest>,
) -> Result<Json<ApiResponse<VeiculoResponse>>, AppError> {
    let controller = VeiculoController::new(state.pool.clone());
    let response = controller.create(&user, request).await?;
    Ok(Json(response))
}

async fn get_veiculo(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> Result<Json<VeiculoResponse>, AppError> {
    let controller = VeiculoController::new(state.pool.clone());
    let response = controller.get_by_id(&user, id).await?;
    Ok(Json(response))
}

async fn list_veiculos(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> Result<Json<Vec<VeiculoResponse>>, AppError> {
    let controller = VeiculoController::new(state.pool.clone());
    let response = controller.list_by_user(&user).await?;
    Ok(Json(response))
}

async fn update_veiculo(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateVeiculoRequest>,
) -> Result<Json<ApiResponse<VeiculoResponse>>, AppError> {
    let controller = VeiculoController::new(state.pool.clone());
    let response = controller.update(&user, id, request).await?;
    Ok(Json(response))
}

async fn delete_veiculo(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = VeiculoController::new(state.pool.clone());
    controller.delete(&user, id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Veículo excluído com sucesso"
    })))
}
